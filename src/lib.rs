//! iotbc - math blocks to IoT Embedded Companion bytecode
//!
//! # Overview
//!
//! The block editor builds arithmetic expressions out of math blocks. This
//! crate compiles such a block tree into the single-byte instruction stream
//! executed by the stack machine on the embedded companion device.
//!
//! # Quick Start
//!
//! ```
//! use iotbc::{compile, Block, ListOp};
//!
//! // 1 + 2 + 3
//! let sum = Block::list(
//!     ListOp::Add,
//!     [Some(Block::number("1")), Some(Block::number("2")), Some(Block::number("3"))],
//! );
//!
//! let code = compile(&sum).unwrap();
//! assert_eq!(code.to_bytes(), [0x04, 0x05, 0x06, 0x60, 0x60]);
//! ```
//!
//! # Editor Integration
//!
//! Hosts expose their own block model to the compiler by implementing
//! [`ExprNode`]. Compile errors carry the slot path to the failing block,
//! which [`render_error`] and friends use to point at it in a text sketch of
//! the tree.

mod error_renderer;

// Re-export public API from iotbc_core
pub use iotbc_core::api::{CompilationOptions, Diagnostic, Severity};
pub use iotbc_core::compiler::{
    ArithmeticOp, BinaryOp, BytecodeCompiler, CompileError, ErrorKind, ListOp, MalformedReason,
    OperatorSpec, Order, UnimplementedOperator, compile,
};
pub use iotbc_core::tree::{self, Block, ExprNode, NodeKind, Sketch, UnknownBlockType};
pub use iotbc_core::vm::{CodeFragment, Instruction, InvalidInstruction, StackError};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
