use std::path::PathBuf;

use anyhow::Result;

use crate::output;
use crate::paths;
use crate::registry::{DeploymentRecord, Registry};

/// Register a deployment. The directory is not validated here; a missing
/// manifest is reported when the deployment is first used.
pub fn run(name: String, file_path: PathBuf, start: bool) -> Result<()> {
    let mut registry = Registry::load(paths::settings_file()?)?;

    let record = DeploymentRecord {
        name,
        directory: file_path,
    };
    registry.add(record.clone())?;
    output::success(&format!("Deployment {} added.", record.name));

    if start {
        // Best effort: the record stays registered even if the start fails
        if let Err(err) = super::start_deployment(&record) {
            output::warning(&format!("could not start {}: {err:#}", record.name));
        }
    }

    Ok(())
}
