//! External command execution

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// A program invocation: executable, arguments and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands on behalf of the bootstrap steps
pub trait CommandRunner {
    /// Run with inherited stdio, failing on spawn error or non-zero exit
    fn run(&self, command: &CommandSpec) -> Result<()>;

    /// Run with output suppressed and report whether it succeeded
    fn probe(&self, command: &CommandSpec) -> bool;
}

/// Spawns real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn build(command: &CommandSpec) -> Command {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(cwd) = &command.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        tracing::info!("Running: {}", command);

        let status = Self::build(command).status().map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::CommandNotFound(command.program.clone()),
            _ => Error::Io(e),
        })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                status: status.to_string(),
            });
        }
        Ok(())
    }

    fn probe(&self, command: &CommandSpec) -> bool {
        tracing::debug!("Probing: {}", command);

        Self::build(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let cmd = CommandSpec::new("uv").args(["pip", "install"]).arg("-r");
        assert_eq!(cmd.to_string(), "uv pip install -r");
    }

    #[test]
    fn test_missing_program_is_command_not_found() {
        let cmd = CommandSpec::new("odoodev-definitely-not-a-real-binary");
        let result = SystemRunner.run(&cmd);
        assert!(matches!(result, Err(Error::CommandNotFound(_))));
        assert!(!SystemRunner.probe(&cmd));
    }
}
