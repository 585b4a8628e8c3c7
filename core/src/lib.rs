#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
//! Compiler from math block trees to IoT Embedded Companion bytecode.
//!
//! ```
//! use iotbc_core::compiler::{compile, BinaryOp};
//! use iotbc_core::tree::Block;
//!
//! let block = Block::binary(
//!     BinaryOp::Subtract,
//!     Some(Block::number("5")),
//!     Some(Block::number("2")),
//! );
//! let code = compile(&block).unwrap();
//! assert_eq!(code.to_bytes(), [0x08, 0x05, 0x64]);
//! ```

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod api;
pub mod compiler;
pub mod tree;
pub mod vm;
