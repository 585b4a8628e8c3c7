//! Bytecode compiler for math blocks.
//!
//! This module turns a tree of math blocks into the instruction stream of the
//! IoT Embedded Companion's stack machine. Operands are emitted before the
//! operator that consumes them (postfix order), so the output never needs
//! grouping.
//!
//! ## Design
//!
//! - Dispatch on a closed set of block kinds ([`NodeKind`](crate::tree::NodeKind))
//! - Empty operand slots compile to a push of integer 0
//! - List blocks (`+`, `×`) fold left: `a b c op op`
//! - Unsupported literals, `POWER` and comparisons are errors, never
//!   placeholder code
//! - Recursion depth is bounded by [`CompilationOptions::max_depth`]

mod bytecode;
mod error;
mod operators;
mod order;


pub use bytecode::BytecodeCompiler;
pub use error::{CompileError, ErrorKind, MalformedReason};
pub use operators::{ArithmeticOp, BinaryOp, ListOp, OperatorSpec, UnimplementedOperator};
pub use order::Order;

use crate::api::CompilationOptions;
use crate::tree::ExprNode;
use crate::vm::CodeFragment;

/// Compile a block tree with default options.
pub fn compile<N: ExprNode + ?Sized>(node: &N) -> Result<CodeFragment, CompileError> {
    BytecodeCompiler::new(CompilationOptions::default()).compile(node)
}
