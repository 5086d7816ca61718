use anyhow::Result;

use crate::paths;
use crate::registry::Registry;

/// Restart a deployment: stop, then start
pub fn run(name: &str) -> Result<()> {
    let registry = Registry::load(paths::settings_file()?)?;
    let record = super::find_record(&registry, name)?;
    super::stop_deployment(&record)?;
    super::start_deployment(&record)
}
