//! Public diagnostic types for the compiler API.
//!
//! Internal errors are converted to these types at API boundaries, where the
//! block editor turns them into warnings on the offending block.

use core::fmt;

use crate::{String, Vec};

/// A diagnostic message attached to a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Slot names leading from the compiled root to the block at fault.
    ///
    /// Empty when the root block itself is at fault.
    pub path: Vec<String>,

    /// Help text suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "E0001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - compilation cannot succeed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}
