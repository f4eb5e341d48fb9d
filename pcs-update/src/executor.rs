//! Command execution.
//!
//! `CommandExecutor` is the seam between the adapters and the operating system.
//! `TokioExecutor` spawns real processes; `MockExecutor` replays scripted
//! outputs and records every command it was asked to run.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// A program and its argument vector. Invoked directly, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if needs_quoting(arg) {
                write!(f, " \"{}\"", arg.replace('\\', "\\\\").replace('"', "\\\""))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

fn needs_quoting(arg: &str) -> bool {
    arg.is_empty()
        || !arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@,+".contains(c))
}

/// Captured result of one process run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or -1 when the process was terminated by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs a single external command to completion.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, command: &CommandLine) -> Result<CommandOutput>;
}

/// Production executor backed by `tokio::process`.
#[derive(Debug, Clone, Default)]
pub struct TokioExecutor;

#[async_trait]
impl CommandExecutor for TokioExecutor {
    async fn execute(&self, command: &CommandLine) -> Result<CommandOutput> {
        debug!(command = %command, "Running command");

        let output = Command::new(&command.program)
            .args(&command.args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| Error::Spawn {
                command: command.to_string(),
                source,
            })?;

        let exit_code = output.status.code().unwrap_or(-1);
        debug!(command = %command, exit_code, "Command finished");

        Ok(CommandOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Test double that returns pre-configured outputs in order.
///
/// Once the script is exhausted every further command succeeds with empty
/// output.
#[derive(Debug, Default)]
pub struct MockExecutor {
    responses: Mutex<VecDeque<CommandOutput>>,
    commands: Mutex<Vec<String>>,
}

impl MockExecutor {
    pub fn with_responses(responses: Vec<CommandOutput>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            commands: Mutex::new(Vec::new()),
        }
    }

    /// Rendered command lines, in the order they were executed.
    pub fn executed_commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .map(|commands| commands.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.executed_commands().len()
    }
}

#[async_trait]
impl CommandExecutor for MockExecutor {
    async fn execute(&self, command: &CommandLine) -> Result<CommandOutput> {
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(command.to_string());
        }
        let next = self
            .responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front());
        Ok(next.unwrap_or_default())
    }
}
