pub mod add;
pub mod all;
pub mod list;
pub mod remove;
pub mod restart;
pub mod start;
pub mod stats;
pub mod status;
pub mod stop;
pub mod update;

use anyhow::Result;

use crate::compose::Compose;
use crate::error::Error;
use crate::output;
use crate::registry::{DeploymentRecord, Registry};

/// Look up a deployment by name, as every per-name command does
pub(crate) fn find_record(registry: &Registry, name: &str) -> Result<DeploymentRecord> {
    registry
        .find(name)
        .cloned()
        .ok_or_else(|| Error::NotFound(name.to_string()).into())
}

/// Bring a deployment up from its directory
pub(crate) fn start_deployment(record: &DeploymentRecord) -> Result<()> {
    output::status("Starting", &record.name);
    let compose = Compose::for_directory(&record.directory)?;
    compose.up()?;
    output::success(&format!("Deployment {} started.", record.name));
    Ok(())
}

/// Take a deployment down from its directory
pub(crate) fn stop_deployment(record: &DeploymentRecord) -> Result<()> {
    output::status("Stopping", &record.name);
    let compose = Compose::for_directory(&record.directory)?;
    compose.down()?;
    output::success(&format!("Deployment {} stopped.", record.name));
    Ok(())
}
