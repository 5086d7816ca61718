use std::path::{Path, PathBuf};
use std::process::Command;

/// Builder for `docker compose` invocations against one manifest file
pub struct ComposeCommand {
    manifest: PathBuf,
    args: Vec<String>,
}

impl ComposeCommand {
    pub fn new(manifest: impl AsRef<Path>) -> Self {
        Self {
            manifest: manifest.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Append an argument (verb or flag)
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Build the Command
    pub fn build(&self) -> Command {
        let mut cmd = Command::new("docker");
        cmd.arg("compose");
        cmd.arg("-f").arg(&self.manifest);
        cmd.args(&self.args);
        cmd
    }

    /// Get the command as a string (for debugging/display)
    pub fn as_string(&self) -> String {
        let mut parts = vec![
            "docker".to_string(),
            "compose".to_string(),
            "-f".to_string(),
            self.manifest.to_string_lossy().to_string(),
        ];
        parts.extend(self.args.clone());
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_command_up() {
        let cmd = ComposeCommand::new("/opt/plex/docker-compose.yaml")
            .arg("up")
            .arg("-d");

        let s = cmd.as_string();
        assert_eq!(
            s,
            "docker compose -f /opt/plex/docker-compose.yaml up -d"
        );
    }

    #[test]
    fn test_compose_command_argv() {
        let cmd = ComposeCommand::new("/opt/plex/docker-compose.yml")
            .arg("ps")
            .arg("--quiet")
            .build();

        let argv: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
        assert_eq!(
            argv,
            vec!["compose", "-f", "/opt/plex/docker-compose.yml", "ps", "--quiet"]
        );
        assert_eq!(cmd.get_program(), "docker");
    }
}
