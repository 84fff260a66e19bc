//! Shared editor state: the three configuration tables plus their store.
//!
//! # Locking (for beginners)
//!
//! Each table sits behind its own `std::sync::RwLock`.  Many readers (for
//! example a preview resolving zones) may hold a read lock at once, while an
//! edit takes the write lock of just the table it changes.  The editor runs
//! no async code, so the blocking std lock is the right tool here.
//!
//! Every write follows the same order: take the write lock, apply the change
//! through an application use case, convert the table into its record, persist
//! the record, then release the lock.  Writes to one table therefore reach the
//! store in the order they were committed, and the file always matches the
//! last committed table.  Readers wait for the save to finish.
//!
//! A poisoned lock (a thread panicked mid-edit) is reported as
//! [`EditorError::StatePoisoned`] instead of propagating the panic.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;
use zones_core::{
    AppliedLayoutTable, AppliedLayoutsRecord, DefaultLayoutTable, DefaultLayoutsRecord,
    DeviceIdentity, LayoutDescriptor, LayoutKind, MonitorArrangement, TemplateCatalog,
    TemplateLayoutsRecord, Topology,
};

use super::storage::RecordStore;
use crate::application::apply_layout::{self, MonitorZones};
use crate::application::edit_template::{EditLimits, TemplateEditSession};
use crate::application::EditorError;

/// The editor's in-memory tables, kept in sync with a [`RecordStore`].
pub struct EditorState {
    store: Box<dyn RecordStore>,
    limits: EditLimits,
    catalog: RwLock<TemplateCatalog>,
    defaults: RwLock<DefaultLayoutTable>,
    applied: RwLock<AppliedLayoutTable>,
}

impl EditorState {
    /// Loads all tables from `store`.
    ///
    /// Missing records start from the built-in catalog and empty tables.  An
    /// entry that parses but does not convert (for example a layout with zero
    /// zones) is skipped with a warning; the other entries of the record are
    /// kept.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Storage`] if a record cannot be read.
    pub fn open(store: Box<dyn RecordStore>, limits: EditLimits) -> Result<Self, EditorError> {
        let catalog = match store.load_templates()? {
            Some(record) => record.to_catalog_skipping_invalid(),
            None => TemplateCatalog::builtin(),
        };
        let defaults = match store.load_defaults()? {
            Some(record) => record.to_table_skipping_invalid(),
            None => DefaultLayoutTable::new(),
        };
        let applied = match store.load_applied()? {
            Some(record) => record.to_table_skipping_invalid(),
            None => AppliedLayoutTable::new(),
        };

        info!(
            defaults = defaults.len(),
            applied = applied.len(),
            "editor state loaded"
        );

        Ok(Self {
            store,
            limits,
            catalog: RwLock::new(catalog),
            defaults: RwLock::new(defaults),
            applied: RwLock::new(applied),
        })
    }

    pub fn limits(&self) -> EditLimits {
        self.limits
    }

    // ── Snapshots ─────────────────────────────────────────────────────────────

    /// A copy of the current template catalog.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::StatePoisoned`].
    pub fn catalog(&self) -> Result<TemplateCatalog, EditorError> {
        Ok(read(&self.catalog)?.clone())
    }

    /// A copy of the current default layouts.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::StatePoisoned`].
    pub fn defaults(&self) -> Result<DefaultLayoutTable, EditorError> {
        Ok(read(&self.defaults)?.clone())
    }

    /// A copy of the current applied layouts.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::StatePoisoned`].
    pub fn applied(&self) -> Result<AppliedLayoutTable, EditorError> {
        Ok(read(&self.applied)?.clone())
    }

    /// The host-provided monitor topology, `None` if the host wrote none.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Storage`] if the record cannot be read and
    /// [`EditorError::Record`] if a monitor entry is malformed.
    pub fn load_topology(&self) -> Result<Option<Topology>, EditorError> {
        match self.store.load_editor_parameters()? {
            Some(record) => Ok(Some(Topology::try_from(&record)?)),
            None => Ok(None),
        }
    }

    // ── Templates ─────────────────────────────────────────────────────────────

    /// Opens an edit session on the `kind` template.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NotEditable`] for `Empty`.
    pub fn edit_template(&self, kind: LayoutKind) -> Result<TemplateEditSession, EditorError> {
        TemplateEditSession::open(&*read(&self.catalog)?, kind, self.limits)
    }

    /// Commits `session` to the catalog and persists the templates record.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Storage`] if the record cannot be
    /// written; the catalog keeps the change.
    pub fn save_template(
        &self,
        session: TemplateEditSession,
    ) -> Result<LayoutDescriptor, EditorError> {
        let mut catalog = write(&self.catalog)?;
        let saved = session.save(&mut catalog)?;
        self.store.save_templates(&TemplateLayoutsRecord::from(&*catalog))?;
        Ok(saved)
    }

    // ── Applied and default layouts ───────────────────────────────────────────

    /// Applies `layout` to `identity` and persists the applied layouts.
    ///
    /// # Errors
    ///
    /// See [`apply_layout::assign_layout`]; also [`EditorError::Storage`].
    pub fn assign_layout(
        &self,
        identity: DeviceIdentity,
        layout: LayoutDescriptor,
    ) -> Result<(), EditorError> {
        let mut applied = write(&self.applied)?;
        apply_layout::assign_layout(&mut applied, &self.limits, identity, layout)?;
        self.store.save_applied(&AppliedLayoutsRecord::from(&*applied))?;
        Ok(())
    }

    /// Applies the current `kind` template to `identity`.
    ///
    /// # Errors
    ///
    /// See [`EditorState::assign_layout`].
    pub fn assign_template(
        &self,
        identity: DeviceIdentity,
        kind: LayoutKind,
    ) -> Result<(), EditorError> {
        let layout = read(&self.catalog)?.get(kind).clone();
        self.assign_layout(identity, layout)
    }

    /// Clears the layout applied to `identity`.  Persists only when an entry
    /// was removed.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Storage`] or [`EditorError::StatePoisoned`].
    pub fn clear_layout(&self, identity: &DeviceIdentity) -> Result<bool, EditorError> {
        let mut applied = write(&self.applied)?;
        if !apply_layout::clear_layout(&mut applied, identity) {
            return Ok(false);
        }
        self.store.save_applied(&AppliedLayoutsRecord::from(&*applied))?;
        Ok(true)
    }

    /// Sets the default layout for `arrangement` and persists the defaults.
    ///
    /// # Errors
    ///
    /// See [`apply_layout::set_default_layout`]; also
    /// [`EditorError::Storage`].
    pub fn set_default_layout(
        &self,
        arrangement: MonitorArrangement,
        layout: LayoutDescriptor,
    ) -> Result<(), EditorError> {
        let mut defaults = write(&self.defaults)?;
        apply_layout::set_default_layout(&mut defaults, &self.limits, arrangement, layout)?;
        self.store.save_defaults(&DefaultLayoutsRecord::from(&*defaults))?;
        Ok(())
    }

    // ── Resolution ────────────────────────────────────────────────────────────

    /// Resolves and generates zones for `topology` against the current tables.
    ///
    /// # Errors
    ///
    /// See [`apply_layout::resolve_all_zones`].
    pub fn resolve_zones(&self, topology: &Topology) -> Result<Vec<MonitorZones>, EditorError> {
        let applied = read(&self.applied)?;
        let defaults = read(&self.defaults)?;
        apply_layout::resolve_all_zones(topology, &applied, &defaults)
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, EditorError> {
    lock.read().map_err(|_| EditorError::StatePoisoned)
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, EditorError> {
    lock.write().map_err(|_| EditorError::StatePoisoned)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
