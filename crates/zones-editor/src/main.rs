//! Zone layout editor entry point.
//!
//! A small command-line front end over the editor backend.  It loads the TOML
//! configuration, opens the record files in the data directory, and runs one
//! subcommand:
//!
//! ```text
//! zones-editor templates                         print the template catalog
//! zones-editor set-template rows --zone-count 2  edit and save one template
//! zones-editor apply grid --monitor 2            apply a template to a monitor
//! zones-editor resolve                           print the zones of every monitor
//! ```
//!
//! `apply` and `resolve` read the monitor topology from
//! `editor-parameters.json`, which the host writes before launching the editor.
//!
//! All JSON goes to stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zones_core::records::{to_json, DeviceRecord, LayoutRecord};
use zones_core::{LayoutKind, Rect, ResolutionSource, TemplateLayoutsRecord, Topology};
use zones_editor::application::apply_layout::MonitorZones;
use zones_editor::infrastructure::state::EditorState;
use zones_editor::infrastructure::storage::config::{config_file_path, load_config_from};
use zones_editor::infrastructure::storage::json_store::JsonFileStore;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Zone layout editor.
///
/// Edits the layout templates shared with the window manager and shows the
/// zones every monitor currently resolves to.
#[derive(Debug, Parser)]
#[command(
    name = "zones-editor",
    about = "Edit zone layout templates and inspect resolved zones",
    version
)]
struct Cli {
    /// Directory holding the JSON record files.
    ///
    /// Overrides `[storage] data_dir` from the configuration file.
    #[arg(long, global = true, env = "ZONES_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Path to the TOML configuration file.
    #[arg(long, global = true, env = "ZONES_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the resolved zones of every monitor as JSON.
    Resolve,

    /// Print the template catalog as JSON.
    Templates,

    /// Edit one template and save it.
    SetTemplate {
        /// Template to edit: focus, rows, columns, grid or priority-grid.
        kind: LayoutKind,

        #[arg(long)]
        zone_count: Option<u32>,

        #[arg(long)]
        spacing: Option<u32>,

        /// `true` or `false`.
        #[arg(long)]
        show_spacing: Option<bool>,

        #[arg(long)]
        sensitivity_radius: Option<u32>,
    },

    /// Apply a template to one monitor of the current topology.
    Apply {
        /// Template to apply.
        kind: LayoutKind,

        /// Monitor number; defaults to the selected monitor.
        #[arg(long)]
        monitor: Option<i32>,
    },
}

// ── Output DTOs ───────────────────────────────────────────────────────────────

/// JSON view of one [`MonitorZones`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct MonitorZonesDto {
    device: DeviceRecord,
    layout: LayoutRecord,
    source: String,
    work_area: Rect,
    zones: Vec<Rect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_zone: Option<usize>,
}

impl From<&MonitorZones> for MonitorZonesDto {
    fn from(m: &MonitorZones) -> Self {
        let source = match m.source {
            ResolutionSource::Applied => "applied".to_string(),
            ResolutionSource::Default(arrangement) => format!("default:{arrangement:?}"),
            ResolutionSource::Fallback => "fallback".to_string(),
        };
        Self {
            device: DeviceRecord::from(&m.identity),
            layout: LayoutRecord::from(&m.descriptor),
            source,
            work_area: m.work_area,
            zones: m.zones.clone(),
            active_zone: m.active_zone,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => config_file_path().context("could not locate the configuration file")?,
    };
    let config = load_config_from(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    // `RUST_LOG` wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.editor.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let data_dir = match cli.data_dir.clone() {
        Some(dir) => dir,
        None => config.data_dir().context("could not determine the data directory")?,
    };
    info!(data_dir = %data_dir.display(), "zones-editor starting");

    let store = JsonFileStore::new(data_dir);
    let state = EditorState::open(Box::new(store), (&config.limits).into())
        .context("failed to load layout records")?;

    match cli.command {
        Command::Resolve => {
            let topology = require_topology(&state)?;
            let zones = state.resolve_zones(&topology)?;
            let report: Vec<MonitorZonesDto> = zones.iter().map(MonitorZonesDto::from).collect();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Templates => {
            let record = TemplateLayoutsRecord::from(&state.catalog()?);
            println!("{}", to_json(&record)?);
        }
        Command::SetTemplate {
            kind,
            zone_count,
            spacing,
            show_spacing,
            sensitivity_radius,
        } => {
            let mut session = state.edit_template(kind)?;
            if let Some(count) = zone_count {
                session.set_zone_count(count)?;
            }
            if let Some(spacing) = spacing {
                session.set_spacing(spacing)?;
            }
            if let Some(show) = show_spacing {
                session.set_show_spacing(show);
            }
            if let Some(radius) = sensitivity_radius {
                session.set_sensitivity_radius(radius)?;
            }
            if !session.is_modified() {
                info!(%kind, "no changes; template left as is");
                session.cancel();
                return Ok(());
            }
            let saved = state.save_template(session)?;
            println!("{}", to_json(&LayoutRecord::from(&saved))?);
        }
        Command::Apply { kind, monitor } => {
            let topology = require_topology(&state)?;
            let target = match monitor {
                Some(number) => topology
                    .monitors()
                    .iter()
                    .find(|m| m.identity.monitor_number() == number)
                    .with_context(|| format!("no monitor number {number} in the topology"))?,
                None => topology
                    .selected()
                    .context("the topology has no monitors")?,
            };
            state.assign_template(target.identity.clone(), kind)?;
            println!("applied {kind} to {}", target.identity);
        }
    }

    Ok(())
}

fn require_topology(state: &EditorState) -> anyhow::Result<Topology> {
    match state.load_topology()? {
        Some(topology) => Ok(topology),
        None => bail!("editor-parameters.json not found in the data directory"),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_set_template_options() {
        let cli = Cli::parse_from([
            "zones-editor",
            "set-template",
            "priority-grid",
            "--zone-count",
            "2",
            "--show-spacing",
            "false",
        ]);

        match cli.command {
            Command::SetTemplate {
                kind,
                zone_count,
                show_spacing,
                spacing,
                ..
            } => {
                assert_eq!(kind, LayoutKind::PriorityGrid);
                assert_eq!(zone_count, Some(2));
                assert_eq!(show_spacing, Some(false));
                assert_eq!(spacing, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_layout_kind() {
        let result = Cli::try_parse_from(["zones-editor", "set-template", "blank"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_data_dir_after_subcommand() {
        let cli = Cli::parse_from(["zones-editor", "resolve", "--data-dir", "/tmp/zones"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/zones")));
        assert!(matches!(cli.command, Command::Resolve));
    }

    #[test]
    fn test_monitor_zones_dto_uses_kebab_case() {
        let zones = MonitorZones {
            identity: zones_core::DeviceIdentity::new("m", "i", "s", 1, "d"),
            descriptor: zones_core::fallback_layout(),
            source: ResolutionSource::Fallback,
            work_area: Rect::new(0, 0, 100, 100),
            zones: vec![Rect::new(0, 0, 100, 100)],
            active_zone: None,
        };

        let json = serde_json::to_value(MonitorZonesDto::from(&zones)).unwrap();

        assert_eq!(json["source"], "fallback");
        assert_eq!(json["work-area"]["width"], 100);
        assert_eq!(json["device"]["monitor-number"], 1);
        assert!(json.get("active-zone").is_none());
    }
}
