//! The three layout configuration tables.
//!
//! - [`TemplateCatalog`]: current parameters of each built-in template.
//! - [`DefaultLayoutTable`]: layout per [`MonitorArrangement`].
//! - [`AppliedLayoutTable`]: layout explicitly chosen for one [`DeviceIdentity`].
//!
//! Every mutation validates first and then replaces the stored descriptor in a
//! single assignment, so a failed edit leaves the table untouched.

use std::collections::BTreeMap;

use thiserror::Error;

use super::device::DeviceIdentity;
use super::layout::{LayoutDescriptor, LayoutError, LayoutKind};
use super::topology::MonitorArrangement;

/// Errors raised by table edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The descriptor is invalid.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// A catalog slot was given a descriptor of another kind.
    #[error("template slot {slot} cannot hold a {given} layout")]
    KindMismatch { slot: LayoutKind, given: LayoutKind },

    /// The empty template has no editable parameters.
    #[error("the empty template has no editable parameters")]
    ParameterlessTemplate,
}

// ── TemplateCatalog ───────────────────────────────────────────────────────────

/// Current parameters of every built-in template, one slot per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    slots: BTreeMap<LayoutKind, LayoutDescriptor>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateCatalog {
    /// A catalog holding the factory defaults of every kind.
    pub fn builtin() -> Self {
        let slots = LayoutKind::ALL
            .into_iter()
            .map(|kind| (kind, LayoutDescriptor::builtin(kind)))
            .collect();
        Self { slots }
    }

    /// Returns the current descriptor for `kind`.
    pub fn get(&self, kind: LayoutKind) -> &LayoutDescriptor {
        // Every kind has a slot from construction onwards.
        &self.slots[&kind]
    }

    /// Overwrites the editable fields of the `kind` slot.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ParameterlessTemplate`] for [`LayoutKind::Empty`],
    /// [`TableError::KindMismatch`] when `descriptor.kind != kind`, and
    /// [`TableError::Layout`] when the descriptor is invalid.
    pub fn upsert(&mut self, kind: LayoutKind, descriptor: LayoutDescriptor) -> Result<(), TableError> {
        if kind == LayoutKind::Empty {
            return Err(TableError::ParameterlessTemplate);
        }
        if descriptor.kind != kind {
            return Err(TableError::KindMismatch {
                slot: kind,
                given: descriptor.kind,
            });
        }
        descriptor.validate()?;
        self.slots.insert(kind, descriptor);
        Ok(())
    }

    /// Iterates slots in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutDescriptor> {
        self.slots.values()
    }
}

// ── DefaultLayoutTable ────────────────────────────────────────────────────────

/// Layout used for a monitor arrangement when no applied layout matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultLayoutTable {
    entries: BTreeMap<MonitorArrangement, LayoutDescriptor>,
}

impl DefaultLayoutTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, arrangement: MonitorArrangement) -> Option<&LayoutDescriptor> {
        self.entries.get(&arrangement)
    }

    /// Sets the default for `arrangement`; the last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Layout`] if the descriptor is invalid.
    pub fn upsert(
        &mut self,
        arrangement: MonitorArrangement,
        descriptor: LayoutDescriptor,
    ) -> Result<(), TableError> {
        descriptor.validate()?;
        self.entries.insert(arrangement, descriptor);
        Ok(())
    }

    pub fn remove(&mut self, arrangement: MonitorArrangement) -> Option<LayoutDescriptor> {
        self.entries.remove(&arrangement)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MonitorArrangement, &LayoutDescriptor)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── AppliedLayoutTable ────────────────────────────────────────────────────────

/// Layouts the user assigned to specific devices.
///
/// Entries for unplugged monitors are kept; they simply never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedLayoutTable {
    entries: BTreeMap<DeviceIdentity, LayoutDescriptor>,
}

impl AppliedLayoutTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layout applied to exactly this device, if any.
    pub fn get(&self, identity: &DeviceIdentity) -> Option<&LayoutDescriptor> {
        self.entries.get(identity)
    }

    /// Stores a snapshot of `descriptor` for `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Layout`] if the descriptor is invalid.
    pub fn upsert(
        &mut self,
        identity: DeviceIdentity,
        descriptor: LayoutDescriptor,
    ) -> Result<(), TableError> {
        descriptor.validate()?;
        self.entries.insert(identity, descriptor);
        Ok(())
    }

    /// Clears the layout applied to `identity`, returning it.
    pub fn remove(&mut self, identity: &DeviceIdentity) -> Option<LayoutDescriptor> {
        self.entries.remove(identity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DeviceIdentity, &LayoutDescriptor)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
