//! `default-layouts.json`: one layout per monitor arrangement.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{LayoutRecord, RecordError};
use crate::domain::layout::LayoutDescriptor;
use crate::domain::tables::DefaultLayoutTable;
use crate::domain::topology::MonitorArrangement;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DefaultLayoutsRecord {
    #[serde(default)]
    pub default_layouts: Vec<DefaultLayoutEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DefaultLayoutEntry {
    pub monitor_configuration: MonitorArrangement,
    pub layout: LayoutRecord,
}

impl From<&DefaultLayoutTable> for DefaultLayoutsRecord {
    fn from(table: &DefaultLayoutTable) -> Self {
        Self {
            default_layouts: table
                .iter()
                .map(|(&arrangement, layout)| DefaultLayoutEntry {
                    monitor_configuration: arrangement,
                    layout: LayoutRecord::from(layout),
                })
                .collect(),
        }
    }
}

impl DefaultLayoutEntry {
    fn apply_to(&self, table: &mut DefaultLayoutTable) -> Result<(), RecordError> {
        let layout = LayoutDescriptor::try_from(&self.layout)?;
        table.upsert(self.monitor_configuration, layout)?;
        Ok(())
    }
}

impl DefaultLayoutsRecord {
    /// Builds the table from every valid entry, logging and skipping the rest.
    pub fn to_table_skipping_invalid(&self) -> DefaultLayoutTable {
        let mut table = DefaultLayoutTable::new();
        for entry in &self.default_layouts {
            if let Err(e) = entry.apply_to(&mut table) {
                warn!(arrangement = ?entry.monitor_configuration, "skipping default layout: {e}");
            }
        }
        table
    }
}

impl TryFrom<&DefaultLayoutsRecord> for DefaultLayoutTable {
    type Error = RecordError;

    fn try_from(record: &DefaultLayoutsRecord) -> Result<Self, Self::Error> {
        let mut table = DefaultLayoutTable::new();
        for entry in &record.default_layouts {
            entry.apply_to(&mut table)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::LayoutKind;
    use crate::records::from_json;

    #[test]
    fn test_defaults_record_accepts_capitalised_arrangement() {
        let text = r#"{
            "default-layouts": [
                {
                    "monitor-configuration": "Horizontal",
                    "layout": {
                        "type": "priority-grid",
                        "zone-count": 3,
                        "show-spacing": true,
                        "spacing": 1,
                        "sensitivity-radius": 40
                    }
                }
            ]
        }"#;

        let record: DefaultLayoutsRecord = from_json(text).unwrap();
        let table = DefaultLayoutTable::try_from(&record).unwrap();

        let layout = table.get(MonitorArrangement::Horizontal).unwrap();
        assert_eq!(layout.kind, LayoutKind::PriorityGrid);
        assert_eq!(layout.sensitivity_radius, 40);
        assert!(table.get(MonitorArrangement::Vertical).is_none());
    }

    #[test]
    fn test_defaults_record_writes_lowercase_arrangement() {
        let mut table = DefaultLayoutTable::new();
        table
            .upsert(
                MonitorArrangement::Vertical,
                LayoutDescriptor::builtin(LayoutKind::Rows),
            )
            .unwrap();

        let json = serde_json::to_value(DefaultLayoutsRecord::from(&table)).unwrap();

        assert_eq!(json["default-layouts"][0]["monitor-configuration"], "vertical");
        assert_eq!(json["default-layouts"][0]["layout"]["type"], "rows");
    }

    #[test]
    fn test_defaults_record_missing_list_is_empty_table() {
        let record: DefaultLayoutsRecord = from_json("{}").unwrap();
        assert!(DefaultLayoutTable::try_from(&record).unwrap().is_empty());
    }

    #[test]
    fn test_defaults_record_skipping_invalid_keeps_valid_entries() {
        let text = r#"{
            "default-layouts": [
                {
                    "monitor-configuration": "horizontal",
                    "layout": { "type": "rows", "zone-count": 2, "show-spacing": true,
                                "spacing": 4, "sensitivity-radius": 20 }
                },
                {
                    "monitor-configuration": "vertical",
                    "layout": { "type": "grid", "zone-count": 0, "show-spacing": true,
                                "spacing": 4, "sensitivity-radius": 20 }
                }
            ]
        }"#;
        let record: DefaultLayoutsRecord = from_json(text).unwrap();

        let table = record.to_table_skipping_invalid();

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get(MonitorArrangement::Horizontal).map(|l| l.kind),
            Some(LayoutKind::Rows)
        );
        assert!(table.get(MonitorArrangement::Vertical).is_none());
    }
}
