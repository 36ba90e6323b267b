//! Synchronous external command execution.
//!
//! Build and packaging steps never spawn processes directly. They describe
//! the command as a [`ToolCommand`] and hand it to a [`CommandRunner`], which
//! blocks until the process exits and returns its status and captured output.

use super::error::{Error, Result};
use std::{
    ffi::{OsStr, OsString},
    io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

/// Description of an external command invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolCommand {
    program: OsString,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl ToolCommand {
    /// Creates a command for the given program name or path.
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Appends several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Sets the working directory for the process.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Program file name without directory, e.g. `iscc` for `C:\...\ISCC.exe`.
    pub fn program_name(&self) -> String {
        Path::new(&self.program)
            .file_stem()
            .unwrap_or(&self.program)
            .to_string_lossy()
            .to_lowercase()
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Arguments as lossily converted strings.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    pub fn get_current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Value following `flag` in the argument list, if any.
    pub fn arg_after(&self, flag: &str) -> Option<String> {
        let args = self.args_lossy();
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1).cloned())
    }

    /// Human-readable command line for logs and error messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.args_lossy().into_iter().map(|a| {
                if a.contains(' ') {
                    format!("\"{}\"", a)
                } else {
                    a
                }
            }))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Exit status and captured output of a finished process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    /// Combined stdout and stderr.
    pub output: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit status description used in error messages.
    pub fn status_description(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Executes external commands on behalf of the packaging pipeline.
pub trait CommandRunner {
    /// Runs the command to completion.
    ///
    /// Returns `Err` only if the process could not be launched; a non-zero
    /// exit is reported through [`CommandOutput::code`].
    fn run(&self, command: &ToolCommand) -> io::Result<CommandOutput>;

    /// Looks up an executable on the search path.
    fn find_program(&self, name: &str) -> Option<PathBuf>;
}

/// Runs commands as real child processes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ToolCommand) -> io::Result<CommandOutput> {
        let mut cmd = Command::new(command.program());
        cmd.args(command.get_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = command.get_current_dir() {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&stderr);
        }

        Ok(CommandOutput {
            code: output.status.code(),
            output: text,
        })
    }

    fn find_program(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Runs a command and converts launch failures and non-zero exits into errors.
///
/// The tool's output is logged at debug level on success and carried verbatim
/// in [`Error::ToolFailed`] on failure.
pub fn run_checked(runner: &dyn CommandRunner, command: &ToolCommand) -> Result<CommandOutput> {
    let line = command.display();
    log::info!("[run] {}", line);

    let output = runner.run(command).map_err(|error| {
        if error.kind() == io::ErrorKind::NotFound {
            Error::ToolNotFound {
                tool: command.program().to_string_lossy().into_owned(),
                hint: "Make sure it is installed and on PATH.".to_string(),
            }
        } else {
            Error::CommandFailed {
                command: line.clone(),
                error,
            }
        }
    })?;

    if !output.success() {
        return Err(Error::ToolFailed {
            command: line,
            status: output.status_description(),
            output: output.output,
        });
    }

    for text in output.output.lines() {
        log::debug!("  {}", text);
    }

    Ok(output)
}
