//! Monitor topology snapshot supplied by the host.
//!
//! The engine never enumerates monitors itself.  The host hands over a fresh
//! [`Topology`] every time it wants layouts resolved, so hot-plug is handled by
//! simply calling again.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::device::DeviceIdentity;
use super::geometry::{Point, Rect};

/// Errors raised for malformed monitor entries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    /// The work area has a zero width or height.
    #[error("monitor {0} has an empty work area")]
    EmptyWorkArea(DeviceIdentity),

    /// A coordinate or size does not fit the `i32` coordinate space.
    #[error("monitor {0} has coordinates out of range")]
    CoordinatesOutOfRange(DeviceIdentity),

    /// The work area extends past the monitor bounds.
    #[error("monitor {0} work area lies outside its monitor area")]
    WorkAreaOutsideMonitor(DeviceIdentity),
}

/// How the monitors of a topology are arranged.
///
/// Default layouts are keyed by this classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorArrangement {
    /// Exactly one monitor.
    Single,
    /// Several monitors spread further along the x axis.
    #[serde(alias = "Horizontal")]
    Horizontal,
    /// Several monitors spread further along the y axis (or equally).
    #[serde(alias = "Vertical")]
    Vertical,
}

/// One connected monitor as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorEntry {
    pub identity: DeviceIdentity,
    pub dpi: u32,
    /// Usable area excluding OS-reserved regions such as the taskbar.
    pub work_area: Rect,
    pub monitor_area: Rect,
    pub position: Point,
    /// Whether the editor currently has this monitor selected.
    pub is_selected: bool,
}

impl MonitorEntry {
    /// Checks that both areas fit the coordinate space and that the work area
    /// is non-empty and inside the monitor area.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::CoordinatesOutOfRange`],
    /// [`TopologyError::EmptyWorkArea`] or
    /// [`TopologyError::WorkAreaOutsideMonitor`].
    pub fn validate(&self) -> Result<(), TopologyError> {
        if !self.work_area.fits_coordinate_space() || !self.monitor_area.fits_coordinate_space() {
            return Err(TopologyError::CoordinatesOutOfRange(self.identity.clone()));
        }
        if !self.work_area.is_positive() {
            return Err(TopologyError::EmptyWorkArea(self.identity.clone()));
        }
        if !self.monitor_area.contains_rect(&self.work_area) {
            return Err(TopologyError::WorkAreaOutsideMonitor(self.identity.clone()));
        }
        Ok(())
    }
}

/// The set of monitors at the time of a resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    pub process_id: u32,
    /// When set, zones are laid out once across the union of all work areas.
    pub span_zones_across_monitors: bool,
    monitors: Vec<MonitorEntry>,
}

impl Topology {
    /// Builds a topology after validating every monitor entry.
    ///
    /// # Errors
    ///
    /// Returns the first [`TopologyError`] found among `monitors`.
    pub fn new(
        process_id: u32,
        span_zones_across_monitors: bool,
        monitors: Vec<MonitorEntry>,
    ) -> Result<Self, TopologyError> {
        for monitor in &monitors {
            monitor.validate()?;
        }
        Ok(Self {
            process_id,
            span_zones_across_monitors,
            monitors,
        })
    }

    /// Monitors in host enumeration order.
    pub fn monitors(&self) -> &[MonitorEntry] {
        &self.monitors
    }

    /// The monitor the editor has selected, or the first one.
    pub fn selected(&self) -> Option<&MonitorEntry> {
        self.monitors
            .iter()
            .find(|m| m.is_selected)
            .or_else(|| self.monitors.first())
    }

    /// Bounding union of every work area, `None` without monitors.
    pub fn combined_work_area(&self) -> Option<Rect> {
        let mut areas = self.monitors.iter().map(|m| m.work_area);
        let first = areas.next()?;
        Some(areas.fold(first, |acc, area| acc.union(&area)))
    }

    /// Classifies the arrangement of the monitors.
    ///
    /// A single monitor is [`MonitorArrangement::Single`].  Otherwise the
    /// spread of monitor positions is compared per axis: a strictly larger x
    /// spread is [`MonitorArrangement::Horizontal`], anything else is
    /// [`MonitorArrangement::Vertical`].
    pub fn arrangement(&self) -> MonitorArrangement {
        if self.monitors.len() <= 1 {
            return MonitorArrangement::Single;
        }

        let (mut min_x, mut max_x) = (i64::MAX, i64::MIN);
        let (mut min_y, mut max_y) = (i64::MAX, i64::MIN);
        for monitor in &self.monitors {
            let (x, y) = (i64::from(monitor.position.x), i64::from(monitor.position.y));
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        if max_x - min_x > max_y - min_y {
            MonitorArrangement::Horizontal
        } else {
            MonitorArrangement::Vertical
        }
    }
}
