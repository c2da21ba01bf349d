//! Child-process plumbing.
//!
//! Everything that shells out goes through [`ProcessRunner`] so callers can
//! swap in a recording fake instead of spawning real binaries.

use std::fmt;
use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

/// A program and its argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(&self.program).chain(&self.args);
        f.write_str(&shell_words::join(words))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child shares our stdout/stderr.
    Inherit,
    /// Child output is collected; stderr is kept for error reporting.
    Capture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub code: Option<i32>,
    pub stderr: String,
}

impl ProcessOutcome {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            stderr: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human-readable exit status, e.g. `exit code 2`.
    pub fn status_text(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {code}"),
            None => "a signal".to_string(),
        }
    }
}

pub trait ProcessRunner {
    /// Runs `command` to completion. A spawn failure with
    /// [`io::ErrorKind::NotFound`] means the program is not installed.
    fn run(&self, command: &CommandLine, mode: OutputMode) -> io::Result<ProcessOutcome>;
}

/// Runs commands with [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandLine, mode: OutputMode) -> io::Result<ProcessOutcome> {
        debug!("running `{command}`");

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);

        match mode {
            OutputMode::Inherit => {
                let status = cmd.status()?;
                Ok(ProcessOutcome {
                    code: status.code(),
                    stderr: String::new(),
                })
            }
            OutputMode::Capture => {
                let output = cmd.stdin(Stdio::null()).output()?;
                Ok(ProcessOutcome {
                    code: output.status.code(),
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                })
            }
        }
    }
}
