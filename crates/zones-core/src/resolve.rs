//! Layered layout resolution.
//!
//! For each monitor the most specific configured layout wins:
//!
//! ```text
//! applied[identity]  ──►  defaults[arrangement]  ──►  built-in fallback
//! ```
//!
//! Resolution never fails.  Missing data falls through to the next step and the
//! last step always yields a single full-area grid zone.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::device::DeviceIdentity;
use crate::domain::layout::{LayoutDescriptor, LayoutKind};
use crate::domain::tables::{AppliedLayoutTable, DefaultLayoutTable};
use crate::domain::topology::{MonitorArrangement, MonitorEntry, Topology};

/// Which step of the precedence chain produced a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// An applied layout matched the device identity exactly.
    Applied,
    /// The default layout for this arrangement was used.
    Default(MonitorArrangement),
    /// Nothing was configured; the built-in fallback was used.
    Fallback,
}

/// The layout chosen for one monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub identity: DeviceIdentity,
    pub descriptor: LayoutDescriptor,
    pub source: ResolutionSource,
}

/// The layout used when neither an applied nor a default entry exists:
/// the built-in grid reduced to one zone covering the whole work area.
pub fn fallback_layout() -> LayoutDescriptor {
    LayoutDescriptor {
        zone_count: 1,
        ..LayoutDescriptor::builtin(LayoutKind::Grid)
    }
}

/// Resolves the layout for one monitor of `topology`.
pub fn resolve_monitor(
    monitor: &MonitorEntry,
    arrangement: MonitorArrangement,
    applied: &AppliedLayoutTable,
    defaults: &DefaultLayoutTable,
) -> Resolution {
    let (descriptor, source) = applied
        .get(&monitor.identity)
        .map(|layout| (layout.clone(), ResolutionSource::Applied))
        .or_else(|| {
            defaults
                .get(arrangement)
                .map(|layout| (layout.clone(), ResolutionSource::Default(arrangement)))
        })
        .unwrap_or_else(|| (fallback_layout(), ResolutionSource::Fallback));

    debug!(
        device = %monitor.identity,
        kind = %descriptor.kind,
        zones = descriptor.zone_count,
        ?source,
        "resolved layout"
    );

    Resolution {
        identity: monitor.identity.clone(),
        descriptor,
        source,
    }
}

/// Resolves every monitor of `topology`, in host enumeration order.
///
/// The arrangement is classified afresh on each call.
pub fn resolve_all(
    topology: &Topology,
    applied: &AppliedLayoutTable,
    defaults: &DefaultLayoutTable,
) -> Vec<Resolution> {
    let arrangement = topology.arrangement();
    topology
        .monitors()
        .iter()
        .map(|monitor| resolve_monitor(monitor, arrangement, applied, defaults))
        .collect()
}

/// Resolves every monitor of `topology` into a device → layout mapping.
pub fn resolve(
    topology: &Topology,
    applied: &AppliedLayoutTable,
    defaults: &DefaultLayoutTable,
) -> HashMap<DeviceIdentity, LayoutDescriptor> {
    resolve_all(topology, applied, defaults)
        .into_iter()
        .map(|resolution| (resolution.identity, resolution.descriptor))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
