//! Terminal results of a reconciliation run.

use std::fmt;

/// Why a run took no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The resource is hosted by another node, or by none.
    NotOnThisNode,
    /// No locally pulled image to compare against.
    NoPulledImage,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotOnThisNode => f.write_str("not running on this node"),
            SkipReason::NoPulledImage => f.write_str("no pulled image found"),
        }
    }
}

/// Non-fatal outcome of a reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Skipped(SkipReason),
    /// Running image already matches the pulled image.
    Ok,
    /// Digests differed and the resource was restarted.
    Restarted,
}

impl ReconcileOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, ReconcileOutcome::Restarted)
    }

    /// Result tag reported to the caller.
    pub fn result(&self) -> &'static str {
        match self {
            ReconcileOutcome::Skipped(_) => "skipping",
            ReconcileOutcome::Ok => "ok",
            ReconcileOutcome::Restarted => "success",
        }
    }
}

impl fmt::Display for ReconcileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileOutcome::Skipped(reason) => write!(f, "skipped: {reason}"),
            ReconcileOutcome::Ok => f.write_str("image up to date"),
            ReconcileOutcome::Restarted => f.write_str("restarted with new image"),
        }
    }
}
