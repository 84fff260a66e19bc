//! Application layer use cases for the zone layout editor.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure business rules, here the `zones_core` crate) and the infrastructure
//! (file system, configuration, CLI).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "make the
//!   rows template use two zones").
//! - **Operate on tables passed in by the caller**, so they can be tested
//!   without touching the disk.
//! - **Contain no file system access**.  Persisting a change is the job of
//!   `infrastructure::state`.
//!
//! # Sub-modules
//!
//! - **`edit_template`** – An edit session on one template of the catalog:
//!   range-checked parameter changes that are either saved or cancelled.
//!
//! - **`apply_layout`** – Assigns layouts to devices, sets per-arrangement
//!   defaults, and turns a topology into per-monitor zones.

use thiserror::Error;
use zones_core::{LayoutError, LayoutKind, RecordError, TableError, ZoneError};

pub mod apply_layout;
pub mod edit_template;

/// Error type for editor use cases.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A parameter is outside the configured limits.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// The requested template has no editable parameters.
    #[error("the {0} template has no parameters to edit")]
    NotEditable(LayoutKind),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Zone(#[from] ZoneError),

    #[error(transparent)]
    Record(#[from] RecordError),

    /// Reading or writing a record failed.  An in-memory change is kept.
    #[error("record storage failed: {0}")]
    Storage(String),

    /// Another thread panicked while holding the editor state.
    #[error("editor state lock poisoned")]
    StatePoisoned,
}
