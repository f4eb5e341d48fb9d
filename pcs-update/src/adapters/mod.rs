//! Adapters for the external tools.
//!
//! Each adapter builds one command line, runs it through the executor and
//! parses that tool's output format:
//! - `pcs`: resource status and restart via the pacemaker CLI
//! - `engine`: pulled and running image digests via podman or docker

pub mod engine;
pub mod pcs;

pub use engine::{parse_digest, EngineClient};
pub use pcs::PcsClient;

use crate::error::{AdapterError, Result};
use crate::executor::{CommandExecutor, CommandLine};

/// Run `command` and return its stdout, classifying a non-zero exit with `wrap`.
async fn run_checked(
    executor: &dyn CommandExecutor,
    command: &CommandLine,
    wrap: fn(AdapterError) -> crate::error::Error,
) -> Result<String> {
    let output = executor.execute(command).await?;
    if !output.is_success() {
        return Err(wrap(AdapterError {
            command: command.to_string(),
            exit_code: output.exit_code,
            stderr: output.stderr,
        }));
    }
    Ok(output.stdout)
}
