use anyhow::Result;

use crate::compose::Compose;
use crate::error::Error;
use crate::output;
use crate::paths;
use crate::registry::Registry;

/// --start and --restart are mutually exclusive. Checked before any
/// subprocess runs (clap also rejects the pair at parse time).
fn validate_modifiers(start: bool, restart: bool) -> Result<()> {
    if start && restart {
        return Err(Error::ConflictingOptions.into());
    }
    Ok(())
}

/// Pull new images for a deployment, then apply the requested modifier
pub fn run(name: &str, start: bool, restart: bool) -> Result<()> {
    validate_modifiers(start, restart)?;

    let registry = Registry::load(paths::settings_file()?)?;
    let record = super::find_record(&registry, name)?;
    let compose = Compose::for_directory(&record.directory)?;

    // Images are always pulled first. A failed pull is reported but does
    // not block the start/restart phase.
    compose.pull()?;

    if restart {
        compose.down()?;
        compose.up()?;
        output::success(&format!("Deployment {name} updated and restarted."));
    } else if start {
        compose.up()?;
        output::success(&format!("Deployment {name} updated and started."));
    } else {
        output::info(&format!(
            "Deployment {name} updated without starting or restarting."
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_modifiers_rejected() {
        let err = validate_modifiers(true, true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ConflictingOptions)
        ));
    }

    #[test]
    fn test_single_modifiers_accepted() {
        assert!(validate_modifiers(false, false).is_ok());
        assert!(validate_modifiers(true, false).is_ok());
        assert!(validate_modifiers(false, true).is_ok());
    }
}
