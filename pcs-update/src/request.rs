//! Validated reconciliation input.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Container engine used for image and container queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Engine {
    Docker,
    #[default]
    Podman,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Docker => "docker",
            Engine::Podman => "podman",
        }
    }

    /// Resolve an optional, case-insensitive engine name. Absent means podman.
    pub fn resolve(engine: Option<&str>) -> Result<Self> {
        match engine {
            None => Ok(Engine::default()),
            Some(name) => name.parse(),
        }
    }
}

impl FromStr for Engine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "docker" => Ok(Engine::Docker),
            "podman" => Ok(Engine::Podman),
            _ => Err(Error::InvalidEngine(s.to_string())),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reconciliation request. Only constructible through validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileRequest {
    name: String,
    engine: Engine,
}

impl ReconcileRequest {
    pub fn new(name: impl Into<String>, engine: Option<&str>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidName);
        }
        let engine = Engine::resolve(engine)?;
        Ok(Self { name, engine })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults_to_podman() {
        let req = ReconcileRequest::new("web", None).unwrap();
        assert_eq!(req.engine(), Engine::Podman);
        assert_eq!(req.name(), "web");
    }

    #[test]
    fn test_engine_is_case_insensitive() {
        assert_eq!(Engine::resolve(Some("Docker")).unwrap(), Engine::Docker);
        assert_eq!(Engine::resolve(Some("PODMAN")).unwrap(), Engine::Podman);
    }

    #[test]
    fn test_invalid_engine_rejected() {
        let err = ReconcileRequest::new("web", Some("containerd")).unwrap_err();
        assert!(matches!(err, Error::InvalidEngine(ref e) if e == "containerd"));

        // An explicitly empty engine is not the same as an absent one.
        assert!(matches!(
            Engine::resolve(Some("")),
            Err(Error::InvalidEngine(_))
        ));
    }

    #[test]
    fn test_engine_with_whitespace_rejected() {
        assert!(matches!(
            Engine::resolve(Some(" docker ")),
            Err(Error::InvalidEngine(ref e)) if e == " docker "
        ));
        assert!(matches!(
            ReconcileRequest::new("web", Some("podman\n")),
            Err(Error::InvalidEngine(_))
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            ReconcileRequest::new("", None),
            Err(Error::InvalidName)
        ));
        assert!(matches!(
            ReconcileRequest::new("   ", Some("docker")),
            Err(Error::InvalidName)
        ));
    }
}
