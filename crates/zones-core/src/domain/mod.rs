//! Domain entities for the zone layout engine.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! The innermost layer of the application is the **domain**.  Domain code has
//! **no** imports from OS APIs, file systems, or UI frameworks and can be
//! compiled and tested anywhere.  The editor application and the persistence
//! adapters depend on these types, but the domain never depends on them.

/// Rectangles and points in screen coordinates.
pub mod geometry;

/// Composite key identifying a monitor within a virtual desktop.
pub mod device;

/// Layout descriptors and template kinds.
pub mod layout;

/// Monitor topology snapshot and arrangement classification.
pub mod topology;

/// Template catalog, default layouts, and applied layouts.
pub mod tables;
