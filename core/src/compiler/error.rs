//! Bytecode compilation errors.

use crate::api::{Diagnostic, Severity};
use crate::compiler::operators::{ArithmeticOp, UnimplementedOperator};
use crate::{String, ToString, Vec, format, vec};

/// Error compiling a block tree.
///
/// `path` lists the slot names leading from the compiled root to the block
/// that failed; it is empty when the root itself failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub path: Vec<String>,
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// Number literal the device has no push opcode for.
    #[error("Unsupported number literal `{text}`")]
    UnsupportedLiteral { text: String },

    /// Operator with no device encoding (`POWER`).
    #[error("Operator {op} is not implemented")]
    UnimplementedOperator { op: ArithmeticOp },

    /// Block type the compiler has no translation for (comparisons).
    #[error("Block `{block_type}` is not implemented")]
    Unimplemented { block_type: &'static str },

    /// The tree itself is invalid.
    #[error("Malformed block tree: {reason}")]
    MalformedTree { reason: MalformedReason },
}

/// Structural problems in a block tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    /// Nesting is deeper than the configured limit, typically a cycle.
    #[error("nesting exceeds {limit} levels")]
    DepthExceeded { limit: usize },

    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("list block has no item count")]
    MissingItemCount,

    #[error("list block has {count} items (limit: {limit})")]
    TooManyItems { count: usize, limit: usize },
}

impl CompileError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    pub fn malformed(reason: MalformedReason) -> Self {
        Self::new(ErrorKind::MalformedTree { reason })
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Record that the error happened below `slot` of the enclosing block.
    pub(crate) fn in_slot(mut self, slot: &str) -> Self {
        self.path.insert(0, slot.to_string());
        self
    }

    /// The path as `A/NUM1/B`, or `<root>`.
    pub fn path_display(&self) -> String {
        if self.path.is_empty() {
            String::from("<root>")
        } else {
            self.path.join("/")
        }
    }

    /// Stable error code for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self.kind {
            ErrorKind::UnsupportedLiteral { .. } => "E0001",
            ErrorKind::UnimplementedOperator { .. } => "E0002",
            ErrorKind::Unimplemented { .. } => "E0003",
            ErrorKind::MalformedTree { .. } => "E0004",
        }
    }

    /// Convert to a Diagnostic for API boundary.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let help = match &self.kind {
            ErrorKind::UnsupportedLiteral { .. } => vec![String::from(
                "The device can only push the integers -1 to 5 and the floats 0.0, 1.0 and 2.0",
            )],
            ErrorKind::UnimplementedOperator { op } => {
                vec![format!("Rewrite the expression without {op}")]
            }
            ErrorKind::Unimplemented { .. } => {
                vec![String::from("Comparisons cannot run on the device yet")]
            }
            ErrorKind::MalformedTree {
                reason: MalformedReason::DepthExceeded { .. },
            } => vec![String::from("Check the blocks for a connection cycle")],
            ErrorKind::MalformedTree { .. } => Vec::new(),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            path: self.path.clone(),
            help,
            code: Some(String::from(self.code())),
        }
    }
}

impl From<ErrorKind> for CompileError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<UnimplementedOperator> for CompileError {
    fn from(err: UnimplementedOperator) -> Self {
        Self::new(ErrorKind::UnimplementedOperator { op: err.0 })
    }
}
