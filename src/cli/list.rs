use anyhow::Result;

use crate::compose::{self, Compose};
use crate::output;
use crate::paths;
use crate::registry::{DeploymentRecord, Registry};
use crate::status::{self, DeploymentState};

/// Query the coarse state of one deployment. A query failure degrades to
/// Unknown so one broken deployment does not break the listing.
fn deployment_state(record: &DeploymentRecord) -> DeploymentState {
    let Some(manifest) = compose::locate(&record.directory) else {
        return DeploymentState::Unknown;
    };

    match Compose::new(manifest).ps_quiet() {
        Ok(out) => status::state_from_container_ids(&out),
        Err(err) => {
            output::warning(&format!("{}: {err:#}", record.name));
            DeploymentState::Unknown
        }
    }
}

fn styled_state(state: DeploymentState) -> console::StyledObject<&'static str> {
    match state {
        DeploymentState::Up => console::style(state.label()).green(),
        DeploymentState::Down => console::style(state.label()).red(),
        DeploymentState::Unknown => console::style(state.label()).dim(),
    }
}

/// List all deployments alphabetically with their current status
pub fn run(show_file_path: bool, show_raw: bool) -> Result<()> {
    let registry = Registry::load(paths::settings_file()?)?;

    if show_raw {
        print!("{}", registry.to_raw_yaml()?);
        return Ok(());
    }

    if registry.is_empty() {
        output::info("No deployments found.");
        return Ok(());
    }

    let mut records = registry.records().to_vec();
    records.sort_by(|a, b| a.name.cmp(&b.name));

    output::header(&format!("Deployments ({})", records.len()));
    for record in &records {
        let state = deployment_state(record);
        println!("{}", format_row(record, state, show_file_path));
    }

    Ok(())
}

/// Render one table row. Columns are padded before styling so the ANSI
/// escape bytes do not count toward the pad width.
fn format_row(record: &DeploymentRecord, state: DeploymentState, show_file_path: bool) -> String {
    let name = console::style(format!("{:<24}", record.name)).cyan();
    let state = styled_state(state);

    if show_file_path {
        let path = console::style(format!("{:<40}", record.directory.display())).dim();
        format!("  {name} {path} {state}")
    } else {
        format!("  {name} {state}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn record(name: &str, directory: PathBuf) -> DeploymentRecord {
        DeploymentRecord {
            name: name.to_string(),
            directory,
        }
    }

    #[test]
    fn test_state_unknown_without_manifest() {
        // an empty directory resolves no manifest, so no subprocess runs
        let dir = tempdir().unwrap();
        let state = deployment_state(&record("plex", dir.path().to_path_buf()));
        assert_eq!(state, DeploymentState::Unknown);
    }

    #[test]
    fn test_row_pads_name_before_styling() {
        let row = format_row(
            &record("plex", PathBuf::from("/opt/plex")),
            DeploymentState::Down,
            false,
        );
        // the 24-wide name column is padded as plain text
        assert!(row.contains(&format!("{:<24}", "plex")));
    }

    #[test]
    fn test_row_pads_path_column() {
        let row = format_row(
            &record("plex", PathBuf::from("/opt/plex")),
            DeploymentState::Up,
            true,
        );
        assert!(row.contains(&format!("{:<40}", "/opt/plex")));
    }
}
