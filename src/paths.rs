use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the settings file location
pub const SETTINGS_FILE_ENV: &str = "DCM_SETTINGS_FILE";

/// Resolve the settings file path once at startup.
/// Defaults to ~/.dcm/settings.yaml; DCM_SETTINGS_FILE overrides it.
pub fn settings_file() -> Result<PathBuf> {
    if let Some(path) = env::var_os(SETTINGS_FILE_ENV) {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir().context("Could not determine your home directory")?;
    Ok(home.join(".dcm").join("settings.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_file_under_home() {
        if env::var_os(SETTINGS_FILE_ENV).is_some() {
            return;
        }
        let path = settings_file().unwrap();
        assert!(path.ends_with(".dcm/settings.yaml"));
    }
}
