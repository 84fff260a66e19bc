//! # zones-core
//!
//! Shared library for the zone layout editor containing the layout data model,
//! the layered layout resolver, the zone geometry generator, and the persisted
//! record formats exchanged with the window manager.
//!
//! It has zero dependencies on OS APIs, UI frameworks, or the file system.
//!
//! # Architecture overview (for beginners)
//!
//! A *zone layout* is a fixed window-placement template for one monitor: the
//! monitor's work area is cut into rectangles ("zones") that windows can be
//! snapped into.  Users pick a layout per monitor and per virtual desktop, and
//! may also configure a default layout per monitor arrangement.
//!
//! This crate (`zones-core`) is the shared foundation.  It defines:
//!
//! - **`domain`** – Pure data model: device identities, layout descriptors,
//!   monitor topology, and the three configuration tables (template catalog,
//!   default layouts, applied layouts).
//!
//! - **`resolve`** – Picks the most specific layout for each monitor:
//!   an applied layout beats a default layout, which beats the built-in
//!   fallback.
//!
//! - **`zones`** – Turns a layout descriptor and a work-area rectangle into the
//!   ordered list of zone rectangles.
//!
//! - **`records`** – JSON-shaped record types for the persisted files and the
//!   editor parameters produced by the host.

pub mod domain;
pub mod records;
pub mod resolve;
pub mod zones;

// Re-export the most-used types at the crate root so callers can write
// `zones_core::LayoutDescriptor` instead of `zones_core::domain::layout::LayoutDescriptor`.
pub use domain::device::DeviceIdentity;
pub use domain::geometry::{Point, Rect};
pub use domain::layout::{LayoutDescriptor, LayoutError, LayoutKind};
pub use domain::tables::{AppliedLayoutTable, DefaultLayoutTable, TableError, TemplateCatalog};
pub use domain::topology::{MonitorArrangement, MonitorEntry, Topology, TopologyError};
pub use records::{
    AppliedLayoutsRecord, DefaultLayoutsRecord, EditorParametersRecord, RecordError,
    TemplateLayoutsRecord,
};
pub use resolve::{
    fallback_layout, resolve, resolve_all, resolve_monitor, Resolution, ResolutionSource,
};
pub use zones::{generate, ZoneError};
