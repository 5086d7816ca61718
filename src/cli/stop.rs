use anyhow::Result;

use crate::paths;
use crate::registry::Registry;

/// Stop a deployment by name
pub fn run(name: &str) -> Result<()> {
    let registry = Registry::load(paths::settings_file()?)?;
    let record = super::find_record(&registry, name)?;
    super::stop_deployment(&record)
}
