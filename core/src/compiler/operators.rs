//! Arithmetic operator table.

use core::fmt;

use crate::{compiler::Order, vm::Instruction};

/// Arithmetic operators the math blocks can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// Operators of the fixed two-operand blocks (slots `A` and `B`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Subtract,
    Divide,
    Power,
}

/// Operators of the variable-arity blocks (slots `NUM0`, `NUM1`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListOp {
    Add,
    Multiply,
}

/// Encoding of one operator: the opcode applied to the two topmost stack
/// values and the order of the resulting fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    pub instruction: Instruction,
    pub order: Order,
}

/// The operator has no device encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Operator {0} has no device encoding")]
pub struct UnimplementedOperator(pub ArithmeticOp);

impl ArithmeticOp {
    /// Look up the operator's encoding.
    ///
    /// `Power` has no opcode on the device and always fails.
    pub const fn spec(self) -> Result<OperatorSpec, UnimplementedOperator> {
        let instruction = match self {
            ArithmeticOp::Add => Instruction::Add,
            ArithmeticOp::Subtract => Instruction::Subtract,
            ArithmeticOp::Multiply => Instruction::Multiply,
            ArithmeticOp::Divide => Instruction::Divide,
            ArithmeticOp::Power => return Err(UnimplementedOperator(self)),
        };
        Ok(OperatorSpec {
            instruction,
            order: Order::Atomic,
        })
    }

    /// Editor name of the operator.
    pub const fn name(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "ADD",
            ArithmeticOp::Subtract => "SUBTRACT",
            ArithmeticOp::Multiply => "MULTIPLY",
            ArithmeticOp::Divide => "DIVIDE",
            ArithmeticOp::Power => "POWER",
        }
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl BinaryOp {
    pub const fn operator(self) -> ArithmeticOp {
        match self {
            BinaryOp::Subtract => ArithmeticOp::Subtract,
            BinaryOp::Divide => ArithmeticOp::Divide,
            BinaryOp::Power => ArithmeticOp::Power,
        }
    }
}

impl ListOp {
    pub const fn operator(self) -> ArithmeticOp {
        match self {
            ListOp::Add => ArithmeticOp::Add,
            ListOp::Multiply => ArithmeticOp::Multiply,
        }
    }
}
