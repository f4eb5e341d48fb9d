use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pcs_update::config::{resolve_node_name, ToolPaths};
use pcs_update::executor::TokioExecutor;
use pcs_update::report::{FailureReport, Report};
use pcs_update::{ReconcileRequest, Reconciler};

#[derive(Parser, Debug)]
#[command(name = "pcs-update", version)]
#[command(about = "Restart a pacemaker container resource when its pulled image changed")]
struct Args {
    /// Name of the pacemaker container resource
    #[arg(short, long)]
    name: String,

    /// Container engine: docker or podman (defaults to podman)
    #[arg(short, long)]
    engine: Option<String>,

    /// Identity of this node as shown by pcs (defaults to hostname)
    #[arg(long)]
    node_name: Option<String>,

    /// Validate input and exit without querying or changing anything
    #[arg(long)]
    check: bool,

    /// Deadline in seconds for the whole run
    #[arg(long)]
    timeout: Option<u64>,

    /// pcs executable
    #[arg(long, default_value = "pcs")]
    pcs_bin: String,

    /// podman executable
    #[arg(long, default_value = "podman")]
    podman_bin: String,

    /// docker executable
    #[arg(long, default_value = "docker")]
    docker_bin: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn emit<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string(report)?);
    Ok(())
}

fn fail(msg: impl Into<String>) -> Result<ExitCode> {
    emit(&FailureReport::new(msg))?;
    Ok(ExitCode::FAILURE)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("pcs_update={}", default_level).parse()?),
        )
        .init();

    let request = match ReconcileRequest::new(args.name.as_str(), args.engine.as_deref()) {
        Ok(request) => request,
        Err(e) => {
            error!(error = %e, "Invalid request");
            return fail(e.message());
        }
    };

    if args.check {
        info!(resource = %request.name(), "Check mode, nothing to do");
        emit(&Report::check_mode())?;
        return Ok(ExitCode::SUCCESS);
    }

    let node_name = match resolve_node_name(args.node_name) {
        Ok(name) => name,
        Err(e) => {
            error!(error = %e, "Cannot determine node identity");
            return fail(e.message());
        }
    };

    let tools = ToolPaths {
        pcs: args.pcs_bin,
        podman: args.podman_bin,
        docker: args.docker_bin,
    };
    let reconciler = Reconciler::new(Arc::new(TokioExecutor), tools, node_name);
    info!(node = %reconciler.node_name(), resource = %request.name(), "Starting pcs-update");

    let run = reconciler.reconcile(&request);
    let result = match args.timeout {
        Some(secs) => match tokio::time::timeout(Duration::from_secs(secs), run).await {
            Ok(result) => result,
            Err(_) => {
                error!(resource = %request.name(), secs, "Deadline exceeded");
                return fail(format!("Timed out after {} seconds", secs));
            }
        },
        None => run.await,
    };

    match result {
        Ok(outcome) => {
            info!(resource = %request.name(), %outcome, "Reconciliation finished");
            emit(&Report::from(outcome))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(resource = %request.name(), error = %e, "Reconciliation failed");
            emit(&FailureReport::from(&e))?;
            Ok(ExitCode::FAILURE)
        }
    }
}
