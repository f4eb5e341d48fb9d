//! pcs-update: uniform image updates for pacemaker container resources.
//!
//! Finds the node hosting a resource, compares the digest of the pulled image
//! with the digest of the running container's image, and restarts the
//! resource through pcs when they differ. Images are never pulled here.

pub mod adapters;
pub mod config;
pub mod error;
pub mod executor;
pub mod outcome;
pub mod reconciler;
pub mod report;
pub mod request;

pub use error::{AdapterError, Error, Result};
pub use outcome::{ReconcileOutcome, SkipReason};
pub use reconciler::Reconciler;
pub use request::{Engine, ReconcileRequest};
