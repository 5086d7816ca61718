use anyhow::Result;

use crate::output;
use crate::paths;
use crate::registry::Registry;

/// Unregister a deployment. Removes only the registry entry, never any
/// container data.
pub fn run(name: &str, stop: bool) -> Result<()> {
    let mut registry = Registry::load(paths::settings_file()?)?;
    let record = super::find_record(&registry, name)?;

    if stop {
        // Best effort: removal proceeds even if the stop fails
        if let Err(err) = super::stop_deployment(&record) {
            output::warning(&format!("could not stop {}: {err:#}", record.name));
        }
    }

    registry.remove(name)?;
    output::success(&format!("Deployment {name} removed from dcm."));
    Ok(())
}
