//! Container engine adapter (podman / docker).

use std::sync::Arc;

use tracing::debug;

use super::run_checked;
use crate::config::ToolPaths;
use crate::error::{Error, Result};
use crate::executor::{CommandExecutor, CommandLine};
use crate::request::Engine;

/// Placeholder the engines print for an image without a registry digest.
const NO_DIGEST: &str = "<none>";

/// Client for image and container digest queries.
pub struct EngineClient {
    executor: Arc<dyn CommandExecutor>,
    tools: ToolPaths,
}

impl EngineClient {
    pub fn new(executor: Arc<dyn CommandExecutor>, tools: ToolPaths) -> Self {
        Self { executor, tools }
    }

    /// Digest of the locally pulled image `name`.
    ///
    /// Returns an empty string when no pulled image with a digest exists.
    pub async fn pulled_image_digest(&self, name: &str, engine: Engine) -> Result<String> {
        let cmd = CommandLine::new(
            self.tools.engine(engine),
            ["images", name, "--format", "{{.Digest}}"],
        );
        let stdout = run_checked(self.executor.as_ref(), &cmd, Error::DigestQueryFailed).await?;

        let digest = match first_line(&stdout) {
            None | Some(NO_DIGEST) => String::new(),
            Some(token) => parse_digest(&cmd, token)?,
        };
        debug!(image = %name, %engine, digest = %digest, "Pulled image digest");
        Ok(digest)
    }

    /// Digest of the image backing the running container `name`.
    pub async fn running_image_digest(&self, name: &str, engine: Engine) -> Result<String> {
        let cmd = CommandLine::new(
            self.tools.engine(engine),
            ["container", "inspect", name, "--format", "{{.ImageDigest}}"],
        );
        let stdout = run_checked(self.executor.as_ref(), &cmd, Error::DigestQueryFailed).await?;

        let token = first_line(&stdout).ok_or_else(|| Error::MalformedOutput {
            command: cmd.to_string(),
            output: stdout.clone(),
        })?;
        let digest = parse_digest(&cmd, token)?;
        debug!(container = %name, %engine, digest = %digest, "Running image digest");
        Ok(digest)
    }
}

fn first_line(output: &str) -> Option<&str> {
    output.lines().map(str::trim).find(|line| !line.is_empty())
}

/// Extract the part of an `algorithm:hex` token after the first colon.
pub fn parse_digest(command: &CommandLine, token: &str) -> Result<String> {
    match token.trim().split_once(':') {
        Some((_, digest)) if !digest.is_empty() => Ok(digest.to_string()),
        _ => Err(Error::MalformedOutput {
            command: command.to_string(),
            output: token.to_string(),
        }),
    }
}
