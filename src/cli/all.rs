use anyhow::Result;

use crate::output;
use crate::paths;
use crate::registry::{DeploymentRecord, Registry};

/// Stop every registered deployment, best effort
pub fn stop(force: bool) -> Result<()> {
    run_each(force, "stop", super::stop_deployment)
}

/// Start every registered deployment, best effort
pub fn start(force: bool) -> Result<()> {
    run_each(force, "start", super::start_deployment)
}

fn run_each(
    force: bool,
    action: &str,
    apply: fn(&DeploymentRecord) -> Result<()>,
) -> Result<()> {
    if !force
        && !output::confirm(&format!(
            "Are you sure you want to {action} all deployments?"
        ))
    {
        output::info("Action canceled.");
        return Ok(());
    }

    let registry = Registry::load(paths::settings_file()?)?;
    if registry.is_empty() {
        output::info("No deployments found.");
        return Ok(());
    }

    // One deployment's failure never stops the rest
    for record in registry.records() {
        if let Err(err) = apply(record) {
            output::warning(&format!("{}: {err:#}", record.name));
        }
    }

    Ok(())
}
