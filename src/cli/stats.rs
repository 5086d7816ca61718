use anyhow::Result;

use crate::compose::{self, ComposeManifest};
use crate::output;
use crate::paths;
use crate::registry::{DeploymentRecord, Registry};

/// Total service entries across all resolvable manifests. A deployment
/// whose manifest is missing or unparseable contributes zero.
fn total_services(records: &[DeploymentRecord]) -> usize {
    records
        .iter()
        .filter_map(|record| compose::locate(&record.directory))
        .filter_map(|manifest| ComposeManifest::load(&manifest).ok())
        .map(|manifest| manifest.service_count())
        .sum()
}

/// Show aggregate statistics, or a single one selected by key
pub fn run(key: Option<String>) -> Result<()> {
    let registry = Registry::load(paths::settings_file()?)?;
    let stats = [
        ("Deployments", registry.len()),
        ("Services", total_services(registry.records())),
    ];

    if let Some(key) = key {
        match stats.iter().find(|(label, _)| *label == key) {
            Some((_, value)) => println!("{value}"),
            None => output::info(&format!("Statistic with key '{key}' not found.")),
        }
        return Ok(());
    }

    output::header("Statistics");
    for (label, value) in stats {
        output::kv(label, &value.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn record(name: &str, directory: PathBuf) -> DeploymentRecord {
        DeploymentRecord {
            name: name.to_string(),
            directory,
        }
    }

    #[test]
    fn test_total_services_counts_resolvable_manifests() {
        let with_manifest = tempdir().unwrap();
        fs::write(
            with_manifest.path().join("docker-compose.yaml"),
            "services:\n  app: {}\n  db: {}\n",
        )
        .unwrap();
        let without_manifest = tempdir().unwrap();

        let records = vec![
            record("plex", with_manifest.path().to_path_buf()),
            record("gitea", without_manifest.path().to_path_buf()),
        ];

        // the unresolvable manifest contributes zero, not an error
        assert_eq!(total_services(&records), 2);
    }

    #[test]
    fn test_total_services_empty_registry() {
        assert_eq!(total_services(&[]), 0);
    }
}
