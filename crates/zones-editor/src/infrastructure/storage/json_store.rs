//! JSON record files in a data directory.
//!
//! Each record lives in its own file, written with `serde_json`'s pretty
//! printer so the files stay diffable and hand-editable:
//!
//! ```text
//! <data_dir>/
//!   layout-templates.json
//!   default-layouts.json
//!   applied-layouts.json
//!   editor-parameters.json   (written by the host, only read here)
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use zones_core::{
    AppliedLayoutsRecord, DefaultLayoutsRecord, EditorParametersRecord, TemplateLayoutsRecord,
};

use super::{RecordStore, StorageError};

pub const TEMPLATES_FILE: &str = "layout-templates.json";
pub const DEFAULTS_FILE: &str = "default-layouts.json";
pub const APPLIED_FILE: &str = "applied-layouts.json";
pub const EDITOR_PARAMETERS_FILE: &str = "editor-parameters.json";

/// A [`RecordStore`] backed by JSON files in one directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over `dir`.  The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StorageError> {
        let path = self.dir.join(name);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "record file absent");
                return Ok(None);
            }
            Err(source) => return Err(StorageError::Io { path, source }),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StorageError::Json { path, source })
    }

    fn write<T: Serialize>(&self, name: &str, record: &T) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(name);
        let content = serde_json::to_string_pretty(record).map_err(|source| StorageError::Json {
            path: path.clone(),
            source,
        })?;
        std::fs::write(&path, content).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "record saved");
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn load_templates(&self) -> Result<Option<TemplateLayoutsRecord>, StorageError> {
        self.read(TEMPLATES_FILE)
    }

    fn save_templates(&self, record: &TemplateLayoutsRecord) -> Result<(), StorageError> {
        self.write(TEMPLATES_FILE, record)
    }

    fn load_defaults(&self) -> Result<Option<DefaultLayoutsRecord>, StorageError> {
        self.read(DEFAULTS_FILE)
    }

    fn save_defaults(&self, record: &DefaultLayoutsRecord) -> Result<(), StorageError> {
        self.write(DEFAULTS_FILE, record)
    }

    fn load_applied(&self) -> Result<Option<AppliedLayoutsRecord>, StorageError> {
        self.read(APPLIED_FILE)
    }

    fn save_applied(&self, record: &AppliedLayoutsRecord) -> Result<(), StorageError> {
        self.write(APPLIED_FILE, record)
    }

    fn load_editor_parameters(&self) -> Result<Option<EditorParametersRecord>, StorageError> {
        self.read(EDITOR_PARAMETERS_FILE)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
