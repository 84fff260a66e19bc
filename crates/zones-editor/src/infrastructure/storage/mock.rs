//! In-memory record store for unit testing.
//!
//! Holds each record in memory and counts saves, so tests can assert that a
//! use case persisted (or did not persist) its change without a real
//! directory.

use std::sync::Mutex;

use zones_core::{
    AppliedLayoutsRecord, DefaultLayoutsRecord, EditorParametersRecord, TemplateLayoutsRecord,
};

use super::{RecordStore, StorageError};

#[derive(Debug, Default)]
struct Records {
    templates: Option<TemplateLayoutsRecord>,
    defaults: Option<DefaultLayoutsRecord>,
    applied: Option<AppliedLayoutsRecord>,
    editor_parameters: Option<EditorParametersRecord>,
    save_count: u32,
}

/// A mock implementation of [`RecordStore`] backed by memory.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: Mutex<Records>,
}

impl InMemoryRecordStore {
    /// Creates an empty store: every `load_*` returns `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the host-provided editor parameters.
    pub fn with_editor_parameters(self, record: EditorParametersRecord) -> Self {
        self.lock().editor_parameters = Some(record);
        self
    }

    /// Seeds the templates record, as if left by a previous session.
    pub fn with_templates(self, record: TemplateLayoutsRecord) -> Self {
        self.lock().templates = Some(record);
        self
    }

    /// Seeds the applied layouts record.
    pub fn with_applied(self, record: AppliedLayoutsRecord) -> Self {
        self.lock().applied = Some(record);
        self
    }

    /// Total number of `save_*` calls so far.
    pub fn save_count(&self) -> u32 {
        self.lock().save_count
    }

    pub fn templates(&self) -> Option<TemplateLayoutsRecord> {
        self.lock().templates.clone()
    }

    pub fn defaults(&self) -> Option<DefaultLayoutsRecord> {
        self.lock().defaults.clone()
    }

    pub fn applied(&self) -> Option<AppliedLayoutsRecord> {
        self.lock().applied.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Records> {
        self.records.lock().expect("lock poisoned")
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load_templates(&self) -> Result<Option<TemplateLayoutsRecord>, StorageError> {
        Ok(self.templates())
    }

    fn save_templates(&self, record: &TemplateLayoutsRecord) -> Result<(), StorageError> {
        let mut records = self.lock();
        records.templates = Some(record.clone());
        records.save_count += 1;
        Ok(())
    }

    fn load_defaults(&self) -> Result<Option<DefaultLayoutsRecord>, StorageError> {
        Ok(self.defaults())
    }

    fn save_defaults(&self, record: &DefaultLayoutsRecord) -> Result<(), StorageError> {
        let mut records = self.lock();
        records.defaults = Some(record.clone());
        records.save_count += 1;
        Ok(())
    }

    fn load_applied(&self) -> Result<Option<AppliedLayoutsRecord>, StorageError> {
        Ok(self.applied())
    }

    fn save_applied(&self, record: &AppliedLayoutsRecord) -> Result<(), StorageError> {
        let mut records = self.lock();
        records.applied = Some(record.clone());
        records.save_count += 1;
        Ok(())
    }

    fn load_editor_parameters(&self) -> Result<Option<EditorParametersRecord>, StorageError> {
        Ok(self.lock().editor_parameters.clone())
    }
}
