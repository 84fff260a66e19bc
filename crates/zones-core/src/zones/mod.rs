//! Zone geometry generation.
//!
//! [`generate`] turns a [`LayoutDescriptor`] and a work-area rectangle into the
//! ordered list of zone rectangles.  Zone order is the cycle order exposed to
//! the window manager, so it is part of the output contract.
//!
//! # Guarantees
//!
//! For every kind except [`LayoutKind::Focus`]:
//!
//! - zones never share area (touching edges are fine);
//! - every zone lies inside the work area;
//! - zones plus spacing gutters cover the work area exactly.
//!
//! Focus zones are a stack of equally sized windows offset from each other, so
//! they overlap by construction; they are still contained in the work area.
//! All kinds are deterministic: equal inputs give equal outputs.
//!
//! # Spacing
//!
//! Spacing is only placed *between* zones, never along the work-area border.
//! When the requested gutter would squeeze a zone below one pixel it is
//! reduced for that axis.

use thiserror::Error;
use tracing::debug;

use crate::domain::geometry::Rect;
use crate::domain::layout::{LayoutDescriptor, LayoutError, LayoutKind};

pub mod focus;
pub mod priority_grid;

/// Errors raised by [`generate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZoneError {
    /// The work area has a zero dimension or does not fit the `i32`
    /// coordinate space.
    #[error("work area must have a positive, representable size, got {0:?}")]
    InvalidWorkArea(Rect),

    /// The descriptor violates its invariants.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// An axis is too short to hold one pixel per zone.
    #[error("cannot fit {parts} zones into {length} pixels")]
    WorkAreaTooSmall { length: u32, parts: u32 },
}

/// Generates the zones of `descriptor` inside `work_area`.
///
/// # Errors
///
/// Returns [`ZoneError::InvalidWorkArea`] for a zero-sized or out of range
/// work area, [`ZoneError::Layout`] for an invalid descriptor, and
/// [`ZoneError::WorkAreaTooSmall`] when the zones cannot be one pixel wide.
pub fn generate(descriptor: &LayoutDescriptor, work_area: Rect) -> Result<Vec<Rect>, ZoneError> {
    if !work_area.is_positive() || !work_area.fits_coordinate_space() {
        return Err(ZoneError::InvalidWorkArea(work_area));
    }
    descriptor.validate()?;

    let count = descriptor.zone_count;
    let spacing = descriptor.effective_spacing();

    let zones = match descriptor.kind {
        LayoutKind::Empty => Vec::new(),
        LayoutKind::Rows => rows(work_area, count, spacing)?,
        LayoutKind::Columns => columns(work_area, count, spacing)?,
        LayoutKind::Grid => grid(work_area, count, spacing)?,
        LayoutKind::Focus => focus::focus_zones(work_area, count),
        LayoutKind::PriorityGrid => match priority_grid::template(count) {
            Some(template) => template.zones(work_area, spacing)?,
            None => grid(work_area, count, spacing)?,
        },
    };

    debug!(
        kind = %descriptor.kind,
        requested = count,
        generated = zones.len(),
        spacing,
        "generated zones"
    );
    Ok(zones)
}

/// A segment of one axis: `start..start + len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: i32,
    pub len: u32,
}

impl Span {
    pub fn end(&self) -> i32 {
        self.start + self.len as i32
    }
}

/// Splits `start..start + length` into `weights.len()` segments separated by
/// `spacing`, sized in proportion to `weights`.
///
/// Segment boundaries are placed at `available * cumulative_weight / total`,
/// so equal weights differ by at most one pixel and the segments plus gutters
/// add up to `length` exactly.
pub(crate) fn split_axis(
    start: i32,
    length: u32,
    weights: &[u32],
    spacing: u32,
) -> Result<Vec<Span>, ZoneError> {
    let parts = weights.len() as u32;
    let too_small = ZoneError::WorkAreaTooSmall { length, parts };
    if parts == 0 || length < parts {
        return Err(too_small);
    }

    let gutters = parts - 1;
    let gap = if gutters == 0 {
        0
    } else {
        spacing.min((length - parts) / gutters)
    };
    let available = u64::from(length - gap * gutters);
    let total: u64 = weights.iter().map(|w| u64::from(*w)).sum();
    if total == 0 {
        return Err(too_small);
    }

    let mut spans = Vec::with_capacity(weights.len());
    let mut cumulative = 0u64;
    let mut previous_end = 0u64;
    for (index, weight) in weights.iter().enumerate() {
        cumulative += u64::from(*weight);
        let end = available * cumulative / total;
        let len = end - previous_end;
        if len == 0 {
            return Err(too_small);
        }
        let offset = previous_end + u64::from(gap) * index as u64;
        spans.push(Span {
            start: start + offset as i32,
            len: len as u32,
        });
        previous_end = end;
    }
    Ok(spans)
}

fn equal_weights(count: u32) -> Vec<u32> {
    vec![1; count as usize]
}

fn rows(area: Rect, count: u32, spacing: u32) -> Result<Vec<Rect>, ZoneError> {
    let spans = split_axis(area.y, area.height, &equal_weights(count), spacing)?;
    Ok(spans
        .into_iter()
        .map(|row| Rect::new(area.x, row.start, area.width, row.len))
        .collect())
}

fn columns(area: Rect, count: u32, spacing: u32) -> Result<Vec<Rect>, ZoneError> {
    let spans = split_axis(area.x, area.width, &equal_weights(count), spacing)?;
    Ok(spans
        .into_iter()
        .map(|column| Rect::new(column.start, area.y, column.len, area.height))
        .collect())
}

/// Row and column counts of the balanced grid for `count` zones.
///
/// `columns = ⌈√count⌉`, `rows = ⌈count / columns⌉`, so the grid is as square
/// as possible and never has more rows than columns.
pub fn grid_dimensions(count: u32) -> (u32, u32) {
    let mut columns = 1u32;
    while columns.saturating_mul(columns) < count {
        columns += 1;
    }
    let rows = count.div_ceil(columns);
    (rows, columns)
}

/// Balanced grid in row-major order.  The last row holds the remaining zones,
/// widened to span the full width.
fn grid(area: Rect, count: u32, spacing: u32) -> Result<Vec<Rect>, ZoneError> {
    let (row_count, column_count) = grid_dimensions(count);
    let row_spans = split_axis(area.y, area.height, &equal_weights(row_count), spacing)?;

    let mut zones = Vec::with_capacity(count as usize);
    for (index, row) in row_spans.iter().enumerate() {
        let in_row = if index as u32 + 1 == row_count {
            count - column_count * (row_count - 1)
        } else {
            column_count
        };
        let column_spans = split_axis(area.x, area.width, &equal_weights(in_row), spacing)?;
        zones.extend(
            column_spans
                .into_iter()
                .map(|column| Rect::new(column.start, row.start, column.len, row.len)),
        );
    }
    Ok(zones)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
