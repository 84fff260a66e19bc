//! `editor-parameters.json`: the monitor snapshot written by the host before
//! it launches the editor.
//!
//! This record is only ever read.  It is converted into a validated
//! [`Topology`] with [`TryFrom`].

use serde::{Deserialize, Serialize};

use super::RecordError;
use crate::domain::device::DeviceIdentity;
use crate::domain::geometry::{Point, Rect};
use crate::domain::topology::{MonitorEntry, Topology};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EditorParametersRecord {
    pub process_id: u32,
    #[serde(default)]
    pub span_zones_across_monitors: bool,
    #[serde(default)]
    pub monitors: Vec<MonitorRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MonitorRecord {
    pub monitor: String,
    pub monitor_instance_id: String,
    pub monitor_serial_number: String,
    pub monitor_number: i32,
    pub virtual_desktop: String,
    pub dpi: u32,
    pub left_coordinate: i32,
    pub top_coordinate: i32,
    /// Work-area origin; the monitor's own origin when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_area_left: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_area_top: Option<i32>,
    pub work_area_width: u32,
    pub work_area_height: u32,
    pub monitor_width: u32,
    pub monitor_height: u32,
    #[serde(default)]
    pub is_selected: bool,
}

impl From<&MonitorRecord> for MonitorEntry {
    fn from(record: &MonitorRecord) -> Self {
        let identity = DeviceIdentity::new(
            record.monitor.as_str(),
            record.monitor_instance_id.as_str(),
            record.monitor_serial_number.as_str(),
            record.monitor_number,
            record.virtual_desktop.as_str(),
        );
        let position = Point::new(record.left_coordinate, record.top_coordinate);
        MonitorEntry {
            identity,
            dpi: record.dpi,
            work_area: Rect::new(
                record.work_area_left.unwrap_or(record.left_coordinate),
                record.work_area_top.unwrap_or(record.top_coordinate),
                record.work_area_width,
                record.work_area_height,
            ),
            monitor_area: Rect::new(
                position.x,
                position.y,
                record.monitor_width,
                record.monitor_height,
            ),
            position,
            is_selected: record.is_selected,
        }
    }
}

impl TryFrom<&EditorParametersRecord> for Topology {
    type Error = RecordError;

    fn try_from(record: &EditorParametersRecord) -> Result<Self, Self::Error> {
        let monitors = record.monitors.iter().map(MonitorEntry::from).collect();
        Ok(Topology::new(
            record.process_id,
            record.span_zones_across_monitors,
            monitors,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topology::{MonitorArrangement, TopologyError};
    use crate::records::from_json;

    const TWO_MONITORS: &str = r#"{
        "process-id": 4242,
        "span-zones-across-monitors": false,
        "monitors": [
            {
                "monitor": "monitor-1",
                "monitor-instance-id": "instance-id-1",
                "monitor-serial-number": "serial-number-1",
                "monitor-number": 1,
                "virtual-desktop": "{FF34D993-73F3-4B8C-AA03-73730A01D6A8}",
                "dpi": 96,
                "left-coordinate": 0,
                "top-coordinate": 0,
                "work-area-width": 1920,
                "work-area-height": 1040,
                "monitor-width": 1920,
                "monitor-height": 1080,
                "is-selected": true
            },
            {
                "monitor": "monitor-2",
                "monitor-instance-id": "instance-id-2",
                "monitor-serial-number": "serial-number-2",
                "monitor-number": 2,
                "virtual-desktop": "{FF34D993-73F3-4B8C-AA03-73730A01D6A8}",
                "dpi": 144,
                "left-coordinate": 1920,
                "top-coordinate": 0,
                "work-area-width": 2560,
                "work-area-height": 1400,
                "monitor-width": 2560,
                "monitor-height": 1440,
                "is-selected": false
            }
        ]
    }"#;

    #[test]
    fn test_editor_parameters_build_topology() {
        let record: EditorParametersRecord = from_json(TWO_MONITORS).unwrap();

        let topology = Topology::try_from(&record).unwrap();

        assert_eq!(topology.process_id, 4242);
        assert_eq!(topology.monitors().len(), 2);
        assert_eq!(topology.arrangement(), MonitorArrangement::Horizontal);
        let second = &topology.monitors()[1];
        assert_eq!(second.work_area, Rect::new(1920, 0, 2560, 1400));
        assert_eq!(second.identity.monitor_serial_number(), "serial-number-2");
        assert_eq!(
            topology.selected().unwrap().identity.monitor_name(),
            "monitor-1"
        );
    }

    #[test]
    fn test_explicit_work_area_origin_is_used() {
        let mut record: EditorParametersRecord = from_json(TWO_MONITORS).unwrap();
        record.monitors[0].work_area_top = Some(40);

        let topology = Topology::try_from(&record).unwrap();

        assert_eq!(topology.monitors()[0].work_area.y, 40);
    }

    #[test]
    fn test_zero_height_work_area_is_rejected() {
        let mut record: EditorParametersRecord = from_json(TWO_MONITORS).unwrap();
        record.monitors[1].work_area_height = 0;

        let result = Topology::try_from(&record);

        assert!(matches!(
            result,
            Err(RecordError::Topology(TopologyError::EmptyWorkArea(_)))
        ));
    }

    #[test]
    fn test_coordinates_past_i32_range_are_rejected() {
        let mut record: EditorParametersRecord = from_json(TWO_MONITORS).unwrap();
        record.monitors[1].left_coordinate = i32::MAX - 1000;

        let result = Topology::try_from(&record);

        assert!(matches!(
            result,
            Err(RecordError::Topology(TopologyError::CoordinatesOutOfRange(_)))
        ));
    }
}
