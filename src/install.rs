//! Dependency installation after generation

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Hint printed when installation is skipped.
pub const INSTALL_HINT: &str =
    "I'm all done. Just run `npm install && bower install` to install the required dependencies.";

/// Printed before installing.
pub const INSTALLING_MESSAGE: &str =
    "I'm all done. Running `npm install && bower install` for you to install the required dependencies.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallOptions {
    pub skip_install: bool,
    pub skip_message: bool,
}

/// Installs the generated project's dependencies.
pub trait DependencyInstaller {
    fn install(&self, options: &InstallOptions) -> Result<()>;
}

/// One package-manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl InstallCommand {
    pub fn new<P: AsRef<Path>>(program: &str, args: &[&str], working_dir: P) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            working_dir: working_dir.as_ref().to_path_buf(),
        }
    }

    fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run(&self) -> Result<()> {
        log::info!("Running `{}` in {}", self.display(), self.working_dir.display());
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(Error::InstallFailed { command: self.display(), status });
        }
        Ok(())
    }
}

/// Runs package-manager commands one after another, stopping at the first failure.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    commands: Vec<InstallCommand>,
}

impl CommandInstaller {
    pub fn new(commands: Vec<InstallCommand>) -> Self {
        Self { commands }
    }

    /// `npm install` and `bower install` in the project root, then
    /// `bower install` for the test harness.
    pub fn for_project<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self::new(vec![
            InstallCommand::new("npm", &["install"], root),
            InstallCommand::new("bower", &["install"], root),
            InstallCommand::new("bower", &["install"], root.join("test")),
        ])
    }

    pub fn commands(&self) -> &[InstallCommand] {
        &self.commands
    }
}

impl DependencyInstaller for CommandInstaller {
    fn install(&self, options: &InstallOptions) -> Result<()> {
        if options.skip_install {
            if !options.skip_message {
                println!("{INSTALL_HINT}");
            }
            log::debug!("Skipping dependency installation");
            return Ok(());
        }

        if !options.skip_message {
            println!("{INSTALLING_MESSAGE}");
        }
        for command in &self.commands {
            command.run()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn project_commands() {
        let installer = CommandInstaller::for_project("/srv/site");
        let commands: Vec<_> = installer.commands().iter().map(InstallCommand::display).collect();
        assert_eq!(commands, vec!["npm install", "bower install", "bower install"]);
        assert_eq!(installer.commands()[2].working_dir, PathBuf::from("/srv/site/test"));
    }

    #[test]
    fn skip_install_runs_nothing() {
        let installer = CommandInstaller::new(vec![InstallCommand::new(
            "webbaker-no-such-program",
            &[],
            ".",
        )]);
        let options = InstallOptions { skip_install: true, skip_message: true };
        assert!(installer.install(&options).is_ok());
    }

    #[test]
    fn missing_program_is_an_io_error() {
        let installer = CommandInstaller::new(vec![InstallCommand::new(
            "webbaker-no-such-program",
            &[],
            ".",
        )]);
        let options = InstallOptions { skip_install: false, skip_message: true };
        assert!(matches!(installer.install(&options), Err(Error::IoError(_))));
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_reports_status() {
        let dir = TempDir::new().unwrap();
        let installer = CommandInstaller::new(vec![
            InstallCommand::new("true", &[], dir.path()),
            InstallCommand::new("false", &[], dir.path()),
        ]);
        let options = InstallOptions { skip_install: false, skip_message: true };
        match installer.install(&options).unwrap_err() {
            Error::InstallFailed { command, status } => {
                assert_eq!(command, "false");
                assert!(!status.success());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
