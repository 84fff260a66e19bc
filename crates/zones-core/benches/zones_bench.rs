//! Criterion benchmarks for zone generation and layout resolution.
//!
//! The editor regenerates zones on every parameter change in its preview, so
//! both paths should stay well under a frame.
//!
//! Run with:
//! ```bash
//! cargo bench --package zones-core --bench zones_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use zones_core::{
    generate, resolve_all, AppliedLayoutTable, DefaultLayoutTable, DeviceIdentity,
    LayoutDescriptor, LayoutKind, MonitorArrangement, MonitorEntry, Point, Rect, Topology,
};

const WORK_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 3840,
    height: 2120,
};

// ── Topology fixture builders ─────────────────────────────────────────────────

/// Creates `n` 1920×1080 monitors side by side on one virtual desktop.
fn build_topology_with_n_monitors(n: usize) -> Topology {
    let monitors = (0..n)
        .map(|i| {
            let x = 1920 * i as i32;
            MonitorEntry {
                identity: DeviceIdentity::new(
                    format!("monitor-{i}"),
                    format!("instance-{i}"),
                    format!("serial-{i}"),
                    i as i32 + 1,
                    "{desktop}",
                ),
                dpi: 96,
                work_area: Rect::new(x, 0, 1920, 1040),
                monitor_area: Rect::new(x, 0, 1920, 1080),
                position: Point::new(x, 0),
                is_selected: i == 0,
            }
        })
        .collect();
    Topology::new(1, false, monitors).expect("fixture monitors must be valid")
}

/// Applies a layout to every other monitor so both precedence paths are hit.
fn build_tables(topology: &Topology) -> (AppliedLayoutTable, DefaultLayoutTable) {
    let mut applied = AppliedLayoutTable::new();
    for monitor in topology.monitors().iter().step_by(2) {
        applied
            .upsert(
                monitor.identity.clone(),
                LayoutDescriptor::builtin(LayoutKind::Columns),
            )
            .expect("builtin layout must be valid");
    }
    let mut defaults = DefaultLayoutTable::new();
    defaults
        .upsert(
            MonitorArrangement::Horizontal,
            LayoutDescriptor::builtin(LayoutKind::PriorityGrid),
        )
        .expect("builtin layout must be valid");
    (applied, defaults)
}

// ── Benchmarks: generate ──────────────────────────────────────────────────────

/// Benchmarks [`generate`] for every layout kind at the built-in zone count.
fn bench_generate_per_kind(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for kind in LayoutKind::ALL {
        let descriptor = LayoutDescriptor::builtin(kind);
        group.bench_function(kind.tag(), |b| {
            b.iter(|| generate(black_box(&descriptor), black_box(WORK_AREA)))
        });
    }

    group.finish();
}

/// Benchmarks [`generate`] for a grid as the zone count grows.
fn bench_generate_grid_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_grid_scaling");

    for &count in &[1u32, 4, 16, 64, 128] {
        let descriptor = LayoutDescriptor::new(LayoutKind::Grid, count, true, 16, 20);
        group.bench_with_input(BenchmarkId::new("zones", count), &descriptor, |b, d| {
            b.iter(|| generate(black_box(d), black_box(WORK_AREA)))
        });
    }

    group.finish();
}

// ── Benchmarks: resolve ───────────────────────────────────────────────────────

/// Benchmarks [`resolve_all`] scaling with the number of monitors.
fn bench_resolve_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_all_scaling");

    for &count in &[1usize, 2, 4, 8] {
        let topology = build_topology_with_n_monitors(count);
        let (applied, defaults) = build_tables(&topology);

        group.bench_with_input(BenchmarkId::new("monitors", count), &topology, |b, t| {
            b.iter(|| resolve_all(black_box(t), black_box(&applied), black_box(&defaults)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_per_kind,
    bench_generate_grid_scaling,
    bench_resolve_scaling,
);
criterion_main!(benches);
