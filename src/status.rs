//! Interpretation of docker output into a display model.
//!
//! Every assumption about the external tool's text/JSON formats lives
//! here, so a format change across docker versions only breaks this
//! module.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime, Utc};
use serde::Deserialize;

/// Fixed-width truncation applied to `State.StartedAt` before parsing,
/// tolerating variable sub-second precision in docker's timestamps.
const STARTED_AT_WIDTH: usize = 26;
const STARTED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Coarse deployment state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentState {
    Up,
    Down,
    /// No manifest could be resolved for the deployment
    Unknown,
}

impl DeploymentState {
    pub fn label(&self) -> &'static str {
        match self {
            DeploymentState::Up => "Up",
            DeploymentState::Down => "Down",
            DeploymentState::Unknown => "N/A",
        }
    }
}

/// Derive the coarse state from `docker compose ps --quiet` output:
/// Up iff any container id was printed.
pub fn state_from_container_ids(output: &str) -> DeploymentState {
    if output.trim().is_empty() {
        DeploymentState::Down
    } else {
        DeploymentState::Up
    }
}

/// Container names from a `docker compose ps` table: first column of
/// every row after the header.
pub fn container_names(ps_output: &str) -> Vec<String> {
    ps_output
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Default, Deserialize)]
struct InspectEntry {
    #[serde(rename = "Config", default)]
    config: InspectConfig,

    #[serde(rename = "NetworkSettings", default)]
    network_settings: NetworkSettings,

    #[serde(rename = "State", default)]
    state: ContainerState,
}

#[derive(Debug, Default, Deserialize)]
struct InspectConfig {
    #[serde(rename = "Image")]
    image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NetworkSettings {
    #[serde(rename = "Ports", default)]
    ports: BTreeMap<String, Option<Vec<PortBinding>>>,
}

#[derive(Debug, Deserialize)]
struct PortBinding {
    #[serde(rename = "HostPort")]
    host_port: String,
}

#[derive(Debug, Default, Deserialize)]
struct ContainerState {
    #[serde(rename = "StartedAt")]
    started_at: Option<String>,
}

/// One container's inspection snapshot, held only for the duration of a
/// single `status --list-containers` run
#[derive(Debug)]
pub struct ContainerStatus {
    pub name: String,
    pub image: String,
    /// `containerPort:hostPort` pairs; only ports with a host binding
    pub ports: Vec<(String, String)>,
    pub started_at: NaiveDateTime,
}

impl ContainerStatus {
    /// Parse a `docker inspect <name>` JSON document (an array with one
    /// entry for a single-container inspect).
    pub fn from_inspect_json(name: &str, json: &str) -> Result<Self> {
        let entries: Vec<InspectEntry> = serde_json::from_str(json)
            .with_context(|| format!("Failed to parse inspect output for {name}"))?;
        let entry = entries
            .into_iter()
            .next()
            .with_context(|| format!("Empty inspect output for {name}"))?;

        let ports = entry
            .network_settings
            .ports
            .into_iter()
            .filter_map(|(container_port, bindings)| {
                let first = bindings.and_then(|b| b.into_iter().next())?;
                Some((container_port, first.host_port))
            })
            .collect();

        let raw = entry
            .state
            .started_at
            .with_context(|| format!("No start time in inspect output for {name}"))?;
        let started_at = parse_started_at(&raw)
            .with_context(|| format!("Failed to parse start time '{raw}' for {name}"))?;

        Ok(Self {
            name: name.to_string(),
            image: entry.config.image.unwrap_or_else(|| "N/A".to_string()),
            ports,
            started_at,
        })
    }

    /// Display string for the port bindings, `N/A` when none are bound
    pub fn ports_display(&self) -> String {
        if self.ports.is_empty() {
            return "N/A".to_string();
        }
        self.ports
            .iter()
            .map(|(container_port, host_port)| format!("{container_port}:{host_port}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Time since the container started, relative to `now` (UTC)
    pub fn uptime(&self, now: NaiveDateTime) -> Duration {
        (now - self.started_at).max(Duration::zero())
    }
}

pub fn now_utc() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Parse docker's RFC3339-with-nanoseconds start timestamp, truncated
/// to a fixed width so any sub-second precision is accepted.
fn parse_started_at(raw: &str) -> Result<NaiveDateTime> {
    let cut = raw.len().min(STARTED_AT_WIDTH);
    let truncated = raw.get(..cut).unwrap_or(raw).trim_end_matches('Z');
    NaiveDateTime::parse_from_str(truncated, STARTED_AT_FORMAT)
        .with_context(|| format!("Unrecognized timestamp '{truncated}'"))
}

/// Render an uptime without its sub-second component
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.num_seconds();
    let (days, rest) = (total / 86_400, total % 86_400);
    let (hours, minutes, seconds) = (rest / 3_600, rest % 3_600 / 60, rest % 60);

    if days > 0 {
        format!("{days}d {hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{hours}:{minutes:02}:{seconds:02}")
    }
}
