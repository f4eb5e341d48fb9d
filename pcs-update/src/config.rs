//! Runtime configuration: tool locations and the local node identity.

use crate::error::{Error, Result};
use crate::request::Engine;

/// Identity of this node as pcs reports it: `explicit` if given, otherwise the
/// system hostname. Empty identities are rejected since they match nothing.
pub fn resolve_node_name(explicit: Option<String>) -> Result<String> {
    let name = match explicit {
        Some(name) => name,
        None => hostname::get()
            .map_err(Error::Hostname)?
            .to_string_lossy()
            .into_owned(),
    };
    if name.trim().is_empty() {
        return Err(Error::InvalidNodeName);
    }
    Ok(name)
}

/// Program names or absolute paths for pcs and the container engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub pcs: String,
    pub podman: String,
    pub docker: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            pcs: "pcs".to_string(),
            podman: "podman".to_string(),
            docker: "docker".to_string(),
        }
    }
}

impl ToolPaths {
    pub fn engine(&self, engine: Engine) -> &str {
        match engine {
            Engine::Docker => &self.docker,
            Engine::Podman => &self.podman,
        }
    }
}
