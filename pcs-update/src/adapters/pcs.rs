//! Pacemaker `pcs` adapter.

use std::sync::Arc;

use tracing::{debug, warn};

use super::run_checked;
use crate::error::{Error, Result};
use crate::executor::{CommandExecutor, CommandLine};

/// Client for the pcs command-line interface.
pub struct PcsClient {
    executor: Arc<dyn CommandExecutor>,
    program: String,
}

impl PcsClient {
    pub fn new(executor: Arc<dyn CommandExecutor>, program: impl Into<String>) -> Self {
        Self {
            executor,
            program: program.into(),
        }
    }

    fn command(&self, action: &str, name: &str) -> CommandLine {
        CommandLine::new(self.program.as_str(), ["resource", action, name])
    }

    /// Raw `pcs resource status <name>` output.
    pub async fn resource_status(&self, name: &str) -> Result<String> {
        let cmd = self.command("status", name);
        let status = run_checked(self.executor.as_ref(), &cmd, Error::StatusQueryFailed).await?;
        debug!(resource = %name, status = %status.trim(), "Resource status");
        Ok(status)
    }

    /// Issue exactly one `pcs resource restart <name>`.
    pub async fn restart_resource(&self, name: &str) -> Result<bool> {
        let cmd = self.command("restart", name);
        warn!(resource = %name, "Restarting resource");
        run_checked(self.executor.as_ref(), &cmd, Error::RestartFailed).await?;
        Ok(true)
    }
}

/// Whether `node` appears as a whole token in pcs status output.
///
/// Neighbouring characters must not continue a host name, so `node1` does not
/// match `node10` but does match `node1.example.com`.
pub fn status_mentions_node(status: &str, node: &str) -> bool {
    if node.is_empty() {
        return false;
    }
    let continues_name = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';

    status.match_indices(node).any(|(start, _)| {
        let before = status[..start].chars().next_back();
        let after = status[start + node.len()..].chars().next();
        !before.is_some_and(continues_name) && !after.is_some_and(continues_name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{CommandOutput, MockExecutor};

    const STATUS: &str = "  * web\t(ocf:heartbeat:podman):\t Started node1\n";

    #[test]
    fn test_status_mentions_node() {
        assert!(status_mentions_node(STATUS, "node1"));
        assert!(!status_mentions_node(STATUS, "node2"));
        assert!(!status_mentions_node(STATUS, "node"));
        assert!(!status_mentions_node(STATUS, ""));
    }

    #[test]
    fn test_status_mentions_node_boundaries() {
        assert!(!status_mentions_node("Started node10", "node1"));
        assert!(!status_mentions_node("Started mynode1", "node1"));
        assert!(status_mentions_node("Started: [ node2 node1 ]", "node1"));
        assert!(status_mentions_node("Started node1.example.com", "node1"));
        assert!(status_mentions_node("Started node10 node1", "node1"));
    }

    #[test]
    fn test_stopped_resource_has_no_node() {
        let status = "  * web\t(ocf:heartbeat:podman):\t Stopped\n";
        assert!(!status_mentions_node(status, "node1"));
    }

    #[tokio::test]
    async fn test_resource_status_command() {
        let mock = Arc::new(MockExecutor::with_responses(vec![CommandOutput::success(STATUS)]));
        let pcs = PcsClient::new(mock.clone(), "pcs");

        let status = pcs.resource_status("web").await.unwrap();
        assert_eq!(status, STATUS);
        assert_eq!(mock.executed_commands(), vec!["pcs resource status web"]);
    }

    #[tokio::test]
    async fn test_resource_status_failure() {
        let mock = Arc::new(MockExecutor::with_responses(vec![CommandOutput::failure(
            1,
            "Error: unable to find resource 'web'\n",
        )]));
        let pcs = PcsClient::new(mock, "pcs");

        match pcs.resource_status("web").await {
            Err(Error::StatusQueryFailed(e)) => {
                assert_eq!(e.command, "pcs resource status web");
                assert_eq!(e.exit_code, 1);
                assert!(e.stderr.contains("unable to find resource"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_restart_resource() {
        let mock = Arc::new(MockExecutor::with_responses(vec![
            CommandOutput::success("web successfully restarted\n"),
            CommandOutput::failure(1, "Error: timed out\n"),
        ]));
        let pcs = PcsClient::new(mock.clone(), "/usr/sbin/pcs");

        assert!(pcs.restart_resource("web").await.unwrap());
        assert!(matches!(
            pcs.restart_resource("web").await,
            Err(Error::RestartFailed(_))
        ));
        assert_eq!(
            mock.executed_commands(),
            vec![
                "/usr/sbin/pcs resource restart web",
                "/usr/sbin/pcs resource restart web"
            ]
        );
    }
}
