mod command;
mod manifest;

pub use command::ComposeCommand;
pub use manifest::ComposeManifest;

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

use crate::error::Error;
use crate::output;

/// Candidate manifest filenames, in preference order
const MANIFEST_NAMES: &[&str] = &["docker-compose.yaml", "docker-compose.yml"];

/// Find the compose manifest in a deployment directory.
/// Absence is a normal outcome, not a fault.
pub fn locate(directory: &Path) -> Option<PathBuf> {
    MANIFEST_NAMES
        .iter()
        .map(|name| directory.join(name))
        .find(|path| path.exists())
}

/// Thin wrapper over `docker compose` for one manifest file.
///
/// Lifecycle verbs (`up`, `down`, `pull`) pass their output straight
/// through to the terminal and treat a non-zero exit as a reportable
/// warning rather than a fatal error. Query verbs capture stdout for
/// parsing.
#[derive(Debug)]
pub struct Compose {
    manifest: PathBuf,
}

impl Compose {
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
        }
    }

    /// Resolve the manifest inside `directory`, or fail with a
    /// manifest-missing error.
    pub fn for_directory(directory: &Path) -> Result<Self> {
        locate(directory)
            .map(Self::new)
            .ok_or_else(|| Error::ManifestMissing(directory.to_path_buf()).into())
    }

    fn command(&self) -> ComposeCommand {
        ComposeCommand::new(&self.manifest)
    }

    /// `docker compose up -d`, output passed through
    pub fn up(&self) -> Result<()> {
        self.run_passthrough(self.command().arg("up").arg("-d"))
    }

    /// `docker compose down`, output passed through
    pub fn down(&self) -> Result<()> {
        self.run_passthrough(self.command().arg("down"))
    }

    /// `docker compose pull`, output passed through. A non-zero exit is
    /// reported like the other lifecycle verbs; `update` proceeds to its
    /// start/restart phase regardless.
    pub fn pull(&self) -> Result<()> {
        self.run_passthrough(self.command().arg("pull"))
    }

    /// `docker compose ps --quiet`: running container ids, captured
    pub fn ps_quiet(&self) -> Result<String> {
        self.run_captured(self.command().arg("ps").arg("--quiet"))
    }

    /// `docker compose ps`: tabular container listing, captured
    pub fn ps(&self) -> Result<String> {
        self.run_captured(self.command().arg("ps"))
    }

    fn run_passthrough(&self, cmd: ComposeCommand) -> Result<()> {
        output::command(&cmd.as_string());
        run_reporting(cmd.build(), &cmd.as_string())
    }

    fn run_captured(&self, cmd: ComposeCommand) -> Result<String> {
        let out = cmd
            .build()
            .output()
            .context("Failed to run docker compose")?;
        if !out.status.success() {
            return Err(Error::ExternalTool(format!(
                "{} exited with {}: {}",
                cmd.as_string(),
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            ))
            .into());
        }
        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}

/// Run a command to completion with inherited stdio. A non-zero exit is
/// reported as a warning, not a failure; only an unrunnable binary is an
/// error.
fn run_reporting(mut cmd: Command, display: &str) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("Failed to run {display}"))?;
    if !status.success() {
        output::warning(&format!("{display} exited with {status}"));
    }
    Ok(())
}

/// `docker inspect <container>`, captured stdout (JSON array)
pub fn inspect(container: &str) -> Result<String> {
    let out = Command::new("docker")
        .args(["inspect", container])
        .output()
        .context("Failed to run docker inspect")?;
    if !out.status.success() {
        return Err(Error::ExternalTool(format!(
            "docker inspect {} exited with {}: {}",
            container,
            out.status,
            String::from_utf8_lossy(&out.stderr).trim()
        ))
        .into());
    }
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_locate_prefers_yaml_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("docker-compose.yaml"), "services: {}").unwrap();
        fs::write(dir.path().join("docker-compose.yml"), "services: {}").unwrap();

        let found = locate(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("docker-compose.yaml"));
    }

    #[test]
    fn test_locate_falls_back_to_yml() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("docker-compose.yml"), "services: {}").unwrap();

        let found = locate(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("docker-compose.yml"));
    }

    #[test]
    fn test_locate_none_when_absent() {
        let dir = tempdir().unwrap();
        assert!(locate(dir.path()).is_none());
    }

    #[test]
    fn test_nonzero_exit_is_reported_not_fatal() {
        assert!(run_reporting(Command::new("false"), "false").is_ok());
    }

    #[test]
    fn test_unrunnable_binary_is_an_error() {
        assert!(run_reporting(Command::new("dcm-no-such-binary"), "dcm-no-such-binary").is_err());
    }

    #[test]
    fn test_for_directory_reports_missing_manifest() {
        let dir = tempdir().unwrap();
        let err = Compose::for_directory(dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::error::Error>(),
            Some(crate::error::Error::ManifestMissing(p)) if p.as_path() == dir.path()
        ));
    }
}
