//! Reconciler for pacemaker container resources.
//!
//! Compares the digest of the pulled image with the digest of the image
//! backing the running container and restarts the resource through pcs when
//! they differ. Every node in the cluster runs this, so only the node that
//! currently hosts the resource may proceed past the locality check.

use std::sync::Arc;

use tracing::info;

use crate::adapters::pcs::status_mentions_node;
use crate::adapters::{EngineClient, PcsClient};
use crate::config::ToolPaths;
use crate::error::Result;
use crate::executor::CommandExecutor;
use crate::outcome::{ReconcileOutcome, SkipReason};
use crate::request::ReconcileRequest;

/// Reconciles a single resource against the locally pulled image.
pub struct Reconciler {
    pcs: PcsClient,
    engine: EngineClient,
    node_name: String,
}

impl Reconciler {
    pub fn new(
        executor: Arc<dyn CommandExecutor>,
        tools: ToolPaths,
        node_name: impl Into<String>,
    ) -> Self {
        Self {
            pcs: PcsClient::new(Arc::clone(&executor), tools.pcs.clone()),
            engine: EngineClient::new(executor, tools),
            node_name: node_name.into(),
        }
    }

    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    /// Run the pipeline once: locate node, resolve both digests, decide.
    pub async fn reconcile(&self, request: &ReconcileRequest) -> Result<ReconcileOutcome> {
        let name = request.name();
        let engine = request.engine();
        info!(resource = %name, %engine, "Reconciling resource");

        let status = self.pcs.resource_status(name).await?;
        if !status_mentions_node(&status, &self.node_name) {
            info!(resource = %name, node = %self.node_name, "Resource not hosted here, skipping");
            return Ok(ReconcileOutcome::Skipped(SkipReason::NotOnThisNode));
        }

        let pulled = self.engine.pulled_image_digest(name, engine).await?;
        if pulled.is_empty() {
            info!(resource = %name, "No pulled image found, skipping");
            return Ok(ReconcileOutcome::Skipped(SkipReason::NoPulledImage));
        }

        let running = self.engine.running_image_digest(name, engine).await?;
        if pulled == running {
            info!(resource = %name, digest = %running, "Running image is current");
            return Ok(ReconcileOutcome::Ok);
        }

        info!(resource = %name, %pulled, %running, "Image digest changed");
        self.pcs.restart_resource(name).await?;
        info!(resource = %name, "Resource restarted");
        Ok(ReconcileOutcome::Restarted)
    }
}
