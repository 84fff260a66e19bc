//! Storage infrastructure: record files and configuration persistence.
//!
//! This module provides a thin adapter between the editor and the file
//! system:
//!
//! - **`json_store`** – Reads and writes the JSON record files shared with the
//!   window manager (`layout-templates.json`, `default-layouts.json`,
//!   `applied-layouts.json`) and reads `editor-parameters.json`.
//! - **`mock`** – An in-memory [`RecordStore`] for tests.
//! - **`config`** – The editor's own TOML configuration file.
//!
//! Everything above this layer talks to the [`RecordStore`] trait, so tests
//! never need a real directory.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use zones_core::{
    AppliedLayoutsRecord, DefaultLayoutsRecord, EditorParametersRecord, TemplateLayoutsRecord,
};

use crate::application::EditorError;

pub mod config;
pub mod json_store;
pub mod mock;

/// Error type for record storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record file is not valid JSON for its record type.
    #[error("malformed record file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads and saves the persisted records.
///
/// `load_*` returns `Ok(None)` when the record does not exist yet, so callers
/// can fall back to built-in defaults on first run.
pub trait RecordStore: Send + Sync {
    fn load_templates(&self) -> Result<Option<TemplateLayoutsRecord>, StorageError>;
    fn save_templates(&self, record: &TemplateLayoutsRecord) -> Result<(), StorageError>;

    fn load_defaults(&self) -> Result<Option<DefaultLayoutsRecord>, StorageError>;
    fn save_defaults(&self, record: &DefaultLayoutsRecord) -> Result<(), StorageError>;

    fn load_applied(&self) -> Result<Option<AppliedLayoutsRecord>, StorageError>;
    fn save_applied(&self, record: &AppliedLayoutsRecord) -> Result<(), StorageError>;

    /// The monitor snapshot written by the host.  Never saved by the editor.
    fn load_editor_parameters(&self) -> Result<Option<EditorParametersRecord>, StorageError>;
}

impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    fn load_templates(&self) -> Result<Option<TemplateLayoutsRecord>, StorageError> {
        (**self).load_templates()
    }
    fn save_templates(&self, record: &TemplateLayoutsRecord) -> Result<(), StorageError> {
        (**self).save_templates(record)
    }
    fn load_defaults(&self) -> Result<Option<DefaultLayoutsRecord>, StorageError> {
        (**self).load_defaults()
    }
    fn save_defaults(&self, record: &DefaultLayoutsRecord) -> Result<(), StorageError> {
        (**self).save_defaults(record)
    }
    fn load_applied(&self) -> Result<Option<AppliedLayoutsRecord>, StorageError> {
        (**self).load_applied()
    }
    fn save_applied(&self, record: &AppliedLayoutsRecord) -> Result<(), StorageError> {
        (**self).save_applied(record)
    }
    fn load_editor_parameters(&self) -> Result<Option<EditorParametersRecord>, StorageError> {
        (**self).load_editor_parameters()
    }
}

impl From<StorageError> for EditorError {
    fn from(e: StorageError) -> Self {
        EditorError::Storage(e.to_string())
    }
}
