//! `applied-layouts.json`: layouts assigned to individual devices.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{LayoutRecord, RecordError};
use crate::domain::device::DeviceIdentity;
use crate::domain::layout::LayoutDescriptor;
use crate::domain::tables::AppliedLayoutTable;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppliedLayoutsRecord {
    #[serde(default)]
    pub applied_layouts: Vec<AppliedLayoutEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppliedLayoutEntry {
    pub device: DeviceRecord,
    pub applied_layout: LayoutRecord,
}

/// The five identity fields as written by the window manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeviceRecord {
    pub monitor: String,
    pub monitor_instance: String,
    pub monitor_number: i32,
    pub serial_number: String,
    pub virtual_desktop: String,
}

impl From<&DeviceIdentity> for DeviceRecord {
    fn from(identity: &DeviceIdentity) -> Self {
        Self {
            monitor: identity.monitor_name().to_owned(),
            monitor_instance: identity.monitor_instance_id().to_owned(),
            monitor_number: identity.monitor_number(),
            serial_number: identity.monitor_serial_number().to_owned(),
            virtual_desktop: identity.virtual_desktop_id().to_owned(),
        }
    }
}

impl From<&DeviceRecord> for DeviceIdentity {
    fn from(record: &DeviceRecord) -> Self {
        DeviceIdentity::new(
            record.monitor.as_str(),
            record.monitor_instance.as_str(),
            record.serial_number.as_str(),
            record.monitor_number,
            record.virtual_desktop.as_str(),
        )
    }
}

impl From<&AppliedLayoutTable> for AppliedLayoutsRecord {
    fn from(table: &AppliedLayoutTable) -> Self {
        Self {
            applied_layouts: table
                .iter()
                .map(|(identity, layout)| AppliedLayoutEntry {
                    device: DeviceRecord::from(identity),
                    applied_layout: LayoutRecord::from(layout),
                })
                .collect(),
        }
    }
}

impl AppliedLayoutEntry {
    fn apply_to(&self, table: &mut AppliedLayoutTable) -> Result<(), RecordError> {
        let layout = LayoutDescriptor::try_from(&self.applied_layout)?;
        table.upsert(DeviceIdentity::from(&self.device), layout)?;
        Ok(())
    }
}

impl AppliedLayoutsRecord {
    /// Builds the table from every valid entry, logging and skipping the rest.
    pub fn to_table_skipping_invalid(&self) -> AppliedLayoutTable {
        let mut table = AppliedLayoutTable::new();
        for entry in &self.applied_layouts {
            if let Err(e) = entry.apply_to(&mut table) {
                warn!(monitor = %entry.device.monitor, "skipping applied layout: {e}");
            }
        }
        table
    }
}

impl TryFrom<&AppliedLayoutsRecord> for AppliedLayoutTable {
    type Error = RecordError;

    fn try_from(record: &AppliedLayoutsRecord) -> Result<Self, Self::Error> {
        let mut table = AppliedLayoutTable::new();
        for entry in &record.applied_layouts {
            entry.apply_to(&mut table)?;
        }
        Ok(table)
    }
}
