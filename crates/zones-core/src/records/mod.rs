//! Persisted record formats shared with the window manager.
//!
//! Each configuration table has one JSON record type.  The engine converts
//! between records and domain tables but never touches the file system; the
//! editor's storage layer does the reading and writing.
//!
//! | File                      | Record                      | Domain type            |
//! |---------------------------|-----------------------------|------------------------|
//! | `layout-templates.json`   | [`TemplateLayoutsRecord`]   | `TemplateCatalog`      |
//! | `default-layouts.json`    | [`DefaultLayoutsRecord`]    | `DefaultLayoutTable`   |
//! | `applied-layouts.json`    | [`AppliedLayoutsRecord`]    | `AppliedLayoutTable`   |
//! | `editor-parameters.json`  | [`EditorParametersRecord`]  | `Topology` (read only) |
//!
//! # JSON shape
//!
//! Field names are kebab-case (`"zone-count"`, `"show-spacing"`) and the layout
//! `"type"` tag is one of `"empty"`, `"focus"`, `"rows"`, `"columns"`, `"grid"`,
//! `"priority-grid"`.  Both are a compatibility contract with the window
//! manager reading the same files.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::layout::{LayoutDescriptor, LayoutError, LayoutKind};
use crate::domain::tables::TableError;
use crate::domain::topology::TopologyError;

pub mod applied;
pub mod defaults;
pub mod editor_params;
pub mod templates;

pub use applied::{AppliedLayoutEntry, AppliedLayoutsRecord, DeviceRecord};
pub use defaults::{DefaultLayoutEntry, DefaultLayoutsRecord};
pub use editor_params::{EditorParametersRecord, MonitorRecord};
pub use templates::{TemplateLayoutEntry, TemplateLayoutsRecord};

/// Errors raised while converting records to domain types.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The JSON text could not be parsed into the record type.
    #[error("malformed record JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A layout in the record violates the descriptor invariants.
    #[error("invalid layout in record: {0}")]
    Layout(#[from] LayoutError),

    /// A template entry could not be stored in the catalog.
    #[error("invalid template in record: {0}")]
    Table(#[from] TableError),

    /// A monitor entry in the editor parameters is malformed.
    #[error("invalid monitor in editor parameters: {0}")]
    Topology(#[from] TopologyError),
}

/// Parses a record from JSON text.
///
/// # Errors
///
/// Returns [`RecordError::Json`] for malformed JSON or unknown tags.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, RecordError> {
    Ok(serde_json::from_str(text)?)
}

/// Serialises a record as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`RecordError::Json`] if serialisation fails.
pub fn to_json<T: Serialize>(record: &T) -> Result<String, RecordError> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// A fully specified layout, as stored in default and applied records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LayoutRecord {
    #[serde(rename = "type")]
    pub kind: LayoutKind,
    pub zone_count: u32,
    pub show_spacing: bool,
    pub spacing: u32,
    pub sensitivity_radius: u32,
}

impl From<&LayoutDescriptor> for LayoutRecord {
    fn from(layout: &LayoutDescriptor) -> Self {
        Self {
            kind: layout.kind,
            zone_count: layout.zone_count,
            show_spacing: layout.show_spacing,
            spacing: layout.spacing,
            sensitivity_radius: layout.sensitivity_radius,
        }
    }
}

impl TryFrom<&LayoutRecord> for LayoutDescriptor {
    type Error = RecordError;

    fn try_from(record: &LayoutRecord) -> Result<Self, Self::Error> {
        let layout = LayoutDescriptor::new(
            record.kind,
            record.zone_count,
            record.show_spacing,
            record.spacing,
            record.sensitivity_radius,
        );
        layout.validate()?;
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_record_uses_kebab_case_fields() {
        let record = LayoutRecord::from(&LayoutDescriptor::new(LayoutKind::PriorityGrid, 3, true, 1, 40));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "priority-grid");
        assert_eq!(json["zone-count"], 3);
        assert_eq!(json["show-spacing"], true);
        assert_eq!(json["spacing"], 1);
        assert_eq!(json["sensitivity-radius"], 40);
    }

    #[test]
    fn test_layout_record_rejects_rows_without_zones() {
        let record = LayoutRecord {
            kind: LayoutKind::Rows,
            zone_count: 0,
            show_spacing: true,
            spacing: 10,
            sensitivity_radius: 10,
        };
        let result = LayoutDescriptor::try_from(&record);
        assert!(matches!(result, Err(RecordError::Layout(LayoutError::ZeroZones(_)))));
    }

    #[test]
    fn test_from_json_rejects_unknown_type_tag() {
        let text = r#"{"type":"blank","zone-count":1,"show-spacing":true,"spacing":0,"sensitivity-radius":0}"#;
        let result: Result<LayoutRecord, _> = from_json(text);
        assert!(matches!(result, Err(RecordError::Json(_))));
    }
}
