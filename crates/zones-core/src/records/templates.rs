//! `layout-templates.json`: the template catalog.
//!
//! ```json
//! { "layout-templates": [
//!     { "type": "empty" },
//!     { "type": "rows", "zone-count": 2, "show-spacing": true,
//!       "spacing": 10, "sensitivity-radius": 10 }
//! ] }
//! ```
//!
//! Parameters are optional; a missing field keeps the built-in default.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::RecordError;
use crate::domain::layout::{LayoutDescriptor, LayoutKind};
use crate::domain::tables::TemplateCatalog;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateLayoutsRecord {
    #[serde(default)]
    pub layout_templates: Vec<TemplateLayoutEntry>,
}

/// One template in the record.  Only `type` is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateLayoutEntry {
    #[serde(rename = "type")]
    pub kind: LayoutKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_spacing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity_radius: Option<u32>,
}

impl TemplateLayoutEntry {
    /// Fills missing parameters from the built-in defaults of the kind.
    pub fn to_descriptor(&self) -> LayoutDescriptor {
        let builtin = LayoutDescriptor::builtin(self.kind);
        LayoutDescriptor {
            kind: self.kind,
            zone_count: self.zone_count.unwrap_or(builtin.zone_count),
            show_spacing: self.show_spacing.unwrap_or(builtin.show_spacing),
            spacing: self.spacing.unwrap_or(builtin.spacing),
            sensitivity_radius: self.sensitivity_radius.unwrap_or(builtin.sensitivity_radius),
        }
    }
}

impl From<&LayoutDescriptor> for TemplateLayoutEntry {
    fn from(layout: &LayoutDescriptor) -> Self {
        if layout.kind == LayoutKind::Empty {
            return Self {
                kind: LayoutKind::Empty,
                zone_count: None,
                show_spacing: None,
                spacing: None,
                sensitivity_radius: None,
            };
        }
        Self {
            kind: layout.kind,
            zone_count: Some(layout.zone_count),
            show_spacing: Some(layout.show_spacing),
            spacing: Some(layout.spacing),
            sensitivity_radius: Some(layout.sensitivity_radius),
        }
    }
}

impl From<&TemplateCatalog> for TemplateLayoutsRecord {
    fn from(catalog: &TemplateCatalog) -> Self {
        Self {
            layout_templates: catalog.iter().map(TemplateLayoutEntry::from).collect(),
        }
    }
}

impl TemplateLayoutEntry {
    fn apply_to(&self, catalog: &mut TemplateCatalog) -> Result<(), RecordError> {
        if self.kind == LayoutKind::Empty {
            if self.zone_count.is_some_and(|n| n != 0) {
                warn!("ignoring zone count on the empty template");
            }
            return Ok(());
        }
        catalog.upsert(self.kind, self.to_descriptor())?;
        Ok(())
    }
}

impl TemplateLayoutsRecord {
    /// Like the `TryFrom` conversion, but an invalid entry is logged and its
    /// slot keeps the built-in template.
    pub fn to_catalog_skipping_invalid(&self) -> TemplateCatalog {
        let mut catalog = TemplateCatalog::builtin();
        for entry in &self.layout_templates {
            if let Err(e) = entry.apply_to(&mut catalog) {
                warn!(kind = %entry.kind, "skipping layout template: {e}");
            }
        }
        catalog
    }
}

impl TryFrom<&TemplateLayoutsRecord> for TemplateCatalog {
    type Error = RecordError;

    /// Starts from the built-in catalog and applies every entry in order, so a
    /// duplicated kind keeps its last entry.
    fn try_from(record: &TemplateLayoutsRecord) -> Result<Self, Self::Error> {
        let mut catalog = TemplateCatalog::builtin();
        for entry in &record.layout_templates {
            entry.apply_to(&mut catalog)?;
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::from_json;

    #[test]
    fn test_catalog_record_lists_every_kind_in_order() {
        let record = TemplateLayoutsRecord::from(&TemplateCatalog::builtin());
        let kinds: Vec<_> = record.layout_templates.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, LayoutKind::ALL.to_vec());
    }

    #[test]
    fn test_empty_template_serializes_type_only() {
        let entry = TemplateLayoutEntry::from(&LayoutDescriptor::empty());
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"type":"empty"}"#);
    }

    #[test]
    fn test_catalog_from_record_fills_missing_fields_with_builtin_defaults() {
        let record: TemplateLayoutsRecord = from_json(
            r#"{"layout-templates":[{"type":"empty"},{"type":"focus","zone-count":10}]}"#,
        )
        .unwrap();

        let catalog = TemplateCatalog::try_from(&record).unwrap();

        let focus = catalog.get(LayoutKind::Focus);
        assert_eq!(focus.zone_count, 10);
        assert_eq!(focus.spacing, LayoutDescriptor::builtin(LayoutKind::Focus).spacing);
        assert_eq!(catalog.get(LayoutKind::Rows), &LayoutDescriptor::builtin(LayoutKind::Rows));
    }

    #[test]
    fn test_catalog_from_record_rejects_zero_zone_grid() {
        let record: TemplateLayoutsRecord =
            from_json(r#"{"layout-templates":[{"type":"grid","zone-count":0}]}"#).unwrap();
        assert!(matches!(
            TemplateCatalog::try_from(&record),
            Err(RecordError::Table(_))
        ));
    }

    #[test]
    fn test_catalog_round_trips_through_record() {
        let mut catalog = TemplateCatalog::builtin();
        catalog
            .upsert(
                LayoutKind::Grid,
                LayoutDescriptor::new(LayoutKind::Grid, 4, false, 10, 30),
            )
            .unwrap();

        let restored = TemplateCatalog::try_from(&TemplateLayoutsRecord::from(&catalog)).unwrap();

        assert_eq!(restored, catalog);
    }

    #[test]
    fn test_catalog_skipping_invalid_keeps_builtin_for_bad_slot_only() {
        let record: TemplateLayoutsRecord = from_json(
            r#"{"layout-templates":[
                {"type":"grid","zone-count":0},
                {"type":"rows","zone-count":2,"spacing":10}
            ]}"#,
        )
        .unwrap();

        let catalog = record.to_catalog_skipping_invalid();

        assert_eq!(catalog.get(LayoutKind::Grid), &LayoutDescriptor::builtin(LayoutKind::Grid));
        assert_eq!(catalog.get(LayoutKind::Rows).zone_count, 2);
        assert_eq!(catalog.get(LayoutKind::Rows).spacing, 10);
    }
}
