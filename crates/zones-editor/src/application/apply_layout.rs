//! Layout assignment use cases and per-monitor zone resolution.
//!
//! The write operations ([`assign_layout`], [`clear_layout`],
//! [`set_default_layout`]) edit the tables they are given.  Assigning a layout
//! stores a snapshot: later template edits never reach an applied entry.
//!
//! [`resolve_all_zones`] is the read path: it resolves a layout for every
//! monitor of a topology and generates its zones.

use tracing::{debug, info};
use zones_core::zones::focus;
use zones_core::{
    generate, resolve_all, resolve_monitor, AppliedLayoutTable, DefaultLayoutTable,
    DeviceIdentity, LayoutDescriptor, LayoutKind, MonitorArrangement, Rect, ResolutionSource,
    Topology,
};

use super::edit_template::EditLimits;
use super::EditorError;

/// The zones of one monitor (or of the spanned desktop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorZones {
    pub identity: DeviceIdentity,
    pub descriptor: LayoutDescriptor,
    pub source: ResolutionSource,
    /// The area the zones were generated in.
    pub work_area: Rect,
    pub zones: Vec<Rect>,
    /// The zone activated by default; `Some` only for focus layouts.
    pub active_zone: Option<usize>,
}

/// Applies `layout` to the device `identity`, replacing any previous entry.
///
/// # Errors
///
/// Returns [`EditorError::Layout`] or [`EditorError::OutOfRange`] if the
/// layout is invalid or exceeds `limits`.
pub fn assign_layout(
    applied: &mut AppliedLayoutTable,
    limits: &EditLimits,
    identity: DeviceIdentity,
    layout: LayoutDescriptor,
) -> Result<(), EditorError> {
    limits.check(&layout)?;
    info!(device = %identity, kind = %layout.kind, zones = layout.zone_count, "layout applied");
    applied.upsert(identity, layout)?;
    Ok(())
}

/// Removes the layout applied to `identity`.  Returns `false` if there was none.
pub fn clear_layout(applied: &mut AppliedLayoutTable, identity: &DeviceIdentity) -> bool {
    let removed = applied.remove(identity).is_some();
    if removed {
        info!(device = %identity, "applied layout cleared");
    }
    removed
}

/// Sets the default layout for monitors in `arrangement`.
///
/// # Errors
///
/// Returns [`EditorError::Layout`] or [`EditorError::OutOfRange`] if the
/// layout is invalid or exceeds `limits`.
pub fn set_default_layout(
    defaults: &mut DefaultLayoutTable,
    limits: &EditLimits,
    arrangement: MonitorArrangement,
    layout: LayoutDescriptor,
) -> Result<(), EditorError> {
    limits.check(&layout)?;
    info!(?arrangement, kind = %layout.kind, "default layout set");
    defaults.upsert(arrangement, layout)?;
    Ok(())
}

/// Resolves and generates the zones for every monitor of `topology`.
///
/// When the topology spans zones across monitors, a single entry is returned:
/// the selected monitor's layout generated over the union of all work areas.
///
/// # Errors
///
/// Returns [`EditorError::Zone`] if a resolved layout does not fit its work
/// area.
pub fn resolve_all_zones(
    topology: &Topology,
    applied: &AppliedLayoutTable,
    defaults: &DefaultLayoutTable,
) -> Result<Vec<MonitorZones>, EditorError> {
    if topology.span_zones_across_monitors {
        let (Some(selected), Some(area)) = (topology.selected(), topology.combined_work_area())
        else {
            return Ok(Vec::new());
        };
        let resolution = resolve_monitor(selected, topology.arrangement(), applied, defaults);
        debug!(device = %resolution.identity, ?area, "spanning zones across monitors");
        let zones = generate(&resolution.descriptor, area)?;
        return Ok(vec![MonitorZones {
            active_zone: active_zone(&resolution.descriptor),
            identity: resolution.identity,
            descriptor: resolution.descriptor,
            source: resolution.source,
            work_area: area,
            zones,
        }]);
    }

    resolve_all(topology, applied, defaults)
        .into_iter()
        .zip(topology.monitors())
        .map(|(resolution, monitor)| {
            let zones = generate(&resolution.descriptor, monitor.work_area)?;
            Ok(MonitorZones {
                active_zone: active_zone(&resolution.descriptor),
                identity: resolution.identity,
                descriptor: resolution.descriptor,
                source: resolution.source,
                work_area: monitor.work_area,
                zones,
            })
        })
        .collect()
}

fn active_zone(layout: &LayoutDescriptor) -> Option<usize> {
    match layout.kind {
        LayoutKind::Focus => focus::active_index(layout.zone_count),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
