//! Layout descriptors: the shape parameters of one zone layout.
//!
//! A [`LayoutDescriptor`] names a template kind (rows, grid, …) plus the
//! parameters the user can tune in the editor: zone count, spacing between
//! zones, and the drag-highlight sensitivity radius.  Descriptors are plain
//! values; copying one into the applied-layout table takes a snapshot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Zone count of the built-in templates.
pub const DEFAULT_ZONE_COUNT: u32 = 3;
/// Spacing of the built-in templates, in pixels.
pub const DEFAULT_SPACING: u32 = 16;
/// Sensitivity radius of the built-in templates, in pixels.
pub const DEFAULT_SENSITIVITY_RADIUS: u32 = 20;

/// Errors raised when a descriptor violates its invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// A non-empty template was given zero zones.
    #[error("{0} layout requires at least one zone")]
    ZeroZones(LayoutKind),

    /// The empty template was given zones.
    #[error("empty layout cannot have zones (got {0})")]
    EmptyWithZones(u32),

    /// A template tag string did not match any known kind.
    #[error("unknown layout type tag: {0:?}")]
    UnknownKind(String),
}

/// The built-in template kinds.
///
/// The serde representation is the JSON tag shared with the window manager:
/// `"empty"`, `"focus"`, `"rows"`, `"columns"`, `"grid"`, `"priority-grid"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    Empty,
    Focus,
    Rows,
    Columns,
    Grid,
    PriorityGrid,
}

impl LayoutKind {
    /// Every kind, in catalog order.
    pub const ALL: [LayoutKind; 6] = [
        LayoutKind::Empty,
        LayoutKind::Focus,
        LayoutKind::Rows,
        LayoutKind::Columns,
        LayoutKind::Grid,
        LayoutKind::PriorityGrid,
    ];

    /// Returns the JSON tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            LayoutKind::Empty => "empty",
            LayoutKind::Focus => "focus",
            LayoutKind::Rows => "rows",
            LayoutKind::Columns => "columns",
            LayoutKind::Grid => "grid",
            LayoutKind::PriorityGrid => "priority-grid",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LayoutKind {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| LayoutError::UnknownKind(s.to_string()))
    }
}

/// Shape parameters of one layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutDescriptor {
    pub kind: LayoutKind,
    /// Number of zones; `0` only for [`LayoutKind::Empty`].
    pub zone_count: u32,
    /// Whether `spacing` is applied between zones.
    pub show_spacing: bool,
    /// Gutter between adjacent zones in pixels.  Kept even while
    /// `show_spacing` is off.
    pub spacing: u32,
    /// Drag-highlight distance; stored here but consumed by the window manager.
    pub sensitivity_radius: u32,
}

impl LayoutDescriptor {
    pub fn new(
        kind: LayoutKind,
        zone_count: u32,
        show_spacing: bool,
        spacing: u32,
        sensitivity_radius: u32,
    ) -> Self {
        Self {
            kind,
            zone_count,
            show_spacing,
            spacing,
            sensitivity_radius,
        }
    }

    /// The parameterless empty layout.
    pub fn empty() -> Self {
        Self::new(
            LayoutKind::Empty,
            0,
            false,
            0,
            DEFAULT_SENSITIVITY_RADIUS,
        )
    }

    /// Factory defaults for `kind`, used before the user edits a template.
    pub fn builtin(kind: LayoutKind) -> Self {
        match kind {
            LayoutKind::Empty => Self::empty(),
            _ => Self::new(
                kind,
                DEFAULT_ZONE_COUNT,
                true,
                DEFAULT_SPACING,
                DEFAULT_SENSITIVITY_RADIUS,
            ),
        }
    }

    /// Checks the zone-count invariant.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ZeroZones`] for a non-empty kind with no zones and
    /// [`LayoutError::EmptyWithZones`] for an empty layout with zones.
    pub fn validate(&self) -> Result<(), LayoutError> {
        match (self.kind, self.zone_count) {
            (LayoutKind::Empty, 0) => Ok(()),
            (LayoutKind::Empty, n) => Err(LayoutError::EmptyWithZones(n)),
            (kind, 0) => Err(LayoutError::ZeroZones(kind)),
            _ => Ok(()),
        }
    }

    /// Spacing applied during generation: `spacing` when enabled, else `0`.
    pub fn effective_spacing(&self) -> u32 {
        if self.show_spacing {
            self.spacing
        } else {
            0
        }
    }
}
