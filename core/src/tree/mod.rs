//! Block trees as seen by the compiler.
//!
//! The block editor owns the trees; the compiler only reads them through the
//! [`ExprNode`] trait. [`Block`] is an owned implementation for hosts that
//! snapshot editor state, and for tests.

mod block;
mod sketch;

use core::fmt;
use core::str::FromStr;

use crate::compiler::{BinaryOp, ListOp};
use crate::{String, format};

pub use block::Block;
pub use sketch::Sketch;

/// Name of the text field holding a number block's literal.
pub const NUMBER_FIELD: &str = "NUM";

/// First operand slot of a fixed two-operand block.
pub const SLOT_A: &str = "A";

/// Second operand slot of a fixed two-operand block.
pub const SLOT_B: &str = "B";

/// Name of the `index`-th operand slot of a list block (`NUM0`, `NUM1`, ...).
pub fn list_slot(index: usize) -> String {
    format!("NUM{index}")
}

/// Read-only view of one block in an expression tree.
pub trait ExprNode {
    /// Which block this is.
    fn kind(&self) -> NodeKind;

    /// Text of a field on the block, if the block has it.
    fn field(&self, name: &str) -> Option<&str>;

    /// Block connected to the named input slot, or `None` if the slot is
    /// empty (or does not exist).
    fn input(&self, slot: &str) -> Option<&Self>;

    /// Number of operand slots on a list block.
    fn item_count(&self) -> Option<usize> {
        None
    }
}

/// The closed set of math blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `math_number`: literal in the `NUM` field.
    Number,
    /// Fixed two-operand arithmetic (slots `A`, `B`).
    Binary(BinaryOp),
    /// Variable-arity arithmetic (slots `NUM0..`).
    List(ListOp),
    /// `math_compare`.
    Compare,
}

impl NodeKind {
    pub const ALL: [NodeKind; 7] = [
        NodeKind::Number,
        NodeKind::List(ListOp::Add),
        NodeKind::Binary(BinaryOp::Subtract),
        NodeKind::List(ListOp::Multiply),
        NodeKind::Binary(BinaryOp::Divide),
        NodeKind::Binary(BinaryOp::Power),
        NodeKind::Compare,
    ];

    /// Editor block type name.
    pub const fn block_type(self) -> &'static str {
        match self {
            NodeKind::Number => "math_number",
            NodeKind::List(ListOp::Add) => "math_add",
            NodeKind::Binary(BinaryOp::Subtract) => "math_subtract",
            NodeKind::List(ListOp::Multiply) => "math_multiply",
            NodeKind::Binary(BinaryOp::Divide) => "math_divide",
            NodeKind::Binary(BinaryOp::Power) => "math_power",
            NodeKind::Compare => "math_compare",
        }
    }

    /// Look up a kind by editor block type name.
    pub fn from_block_type(block_type: &str) -> Option<NodeKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.block_type() == block_type)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.block_type())
    }
}

/// Block type name outside the math set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown block type `{0}`")]
pub struct UnknownBlockType(pub String);

impl FromStr for NodeKind {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::from_block_type(s).ok_or_else(|| UnknownBlockType(String::from(s)))
    }
}
