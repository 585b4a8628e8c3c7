//! IoT Embedded Companion instruction set (math subset).
//!
//! This module defines the opcodes the block compiler emits for the stack-based
//! interpreter running on the companion device.
//!
//! # Instruction Format
//!
//! **ALL instructions are exactly 1 byte** and carry no inline operand:
//! ```text
//! ┌────────────┐
//! │   Opcode   │
//! │  (8 bits)  │
//! └────────────┘
//! ```
//!
//! Constants the device can materialize without an operand have their own
//! push opcode; everything else arrives through prior pushes on the stack.
//!
//! # Compatibility
//!
//! The byte values are fixed by the device firmware. They must never be
//! renumbered.
//!
//! # Stack Discipline
//!
//! Stack effect notation: `[..., operand1, operand2] -> [..., result]`

use core::fmt;

/// A single device instruction (exactly 8 bits).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    // ========================================================================
    // Integer constants (0x02 - 0x08)
    // ========================================================================
    /// Stack: [...] -> [..., -1]
    PushIntMinusOne = 0x02,

    /// Stack: [...] -> [..., 0]
    ///
    /// Also the substitute for an operand slot with nothing connected.
    PushIntZero = 0x03,

    /// Stack: [...] -> [..., 1]
    PushIntOne = 0x04,

    /// Stack: [...] -> [..., 2]
    PushIntTwo = 0x05,

    /// Stack: [...] -> [..., 3]
    PushIntThree = 0x06,

    /// Stack: [...] -> [..., 4]
    PushIntFour = 0x07,

    /// Stack: [...] -> [..., 5]
    PushIntFive = 0x08,

    // 0x09-0x0A reserved

    // ========================================================================
    // Float constants (0x0B - 0x0D)
    // ========================================================================
    /// Stack: [...] -> [..., 0.0]
    PushFloatZero = 0x0B,

    /// Stack: [...] -> [..., 1.0]
    PushFloatOne = 0x0C,

    /// Stack: [...] -> [..., 2.0]
    PushFloatTwo = 0x0D,

    // ========================================================================
    // Arithmetic (0x60 - 0x6F)
    // ========================================================================
    /// Stack: [..., a, b] -> [..., a + b]
    Add = 0x60,

    /// Stack: [..., a, b] -> [..., a - b]
    Subtract = 0x64,

    /// Stack: [..., a, b] -> [..., a * b]
    Multiply = 0x68,

    /// Stack: [..., a, b] -> [..., a / b]
    Divide = 0x6C,
}

/// Integer literal table, indexed by `value + 1`.
const INT_LITERALS: [Instruction; 7] = [
    Instruction::PushIntMinusOne,
    Instruction::PushIntZero,
    Instruction::PushIntOne,
    Instruction::PushIntTwo,
    Instruction::PushIntThree,
    Instruction::PushIntFour,
    Instruction::PushIntFive,
];

/// Float literal table, indexed by value.
const FLOAT_LITERALS: [Instruction; 3] = [
    Instruction::PushFloatZero,
    Instruction::PushFloatOne,
    Instruction::PushFloatTwo,
];

impl Instruction {
    /// Size of an instruction in bytes
    pub const SIZE: usize = 1;

    /// Every opcode the compiler can emit, in byte order.
    pub const ALL: [Instruction; 14] = [
        Self::PushIntMinusOne,
        Self::PushIntZero,
        Self::PushIntOne,
        Self::PushIntTwo,
        Self::PushIntThree,
        Self::PushIntFour,
        Self::PushIntFive,
        Self::PushFloatZero,
        Self::PushFloatOne,
        Self::PushFloatTwo,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
    ];

    /// The opcode byte sent to the device.
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// Encode a number literal by its text, as typed into the block field.
    ///
    /// The float table is used when the text is spelled with a decimal point,
    /// the integer table otherwise; the numeric value alone never picks the
    /// table, so `"1"` and `"1.0"` encode differently. Only exact table hits
    /// are encoded. Anything else (`"6"`, `"-2"`, `"3.5"`, `"abc"`) yields
    /// `None`.
    pub fn from_literal(text: &str) -> Option<Instruction> {
        let text = text.trim();
        let value: f64 = text.parse().ok()?;
        if text.contains('.') {
            FLOAT_LITERALS
                .iter()
                .zip(0u8..)
                .find(|(_, n)| f64::from(*n) == value)
                .map(|(instr, _)| *instr)
        } else {
            INT_LITERALS
                .iter()
                .zip(-1i8..)
                .find(|(_, n)| f64::from(*n) == value)
                .map(|(instr, _)| *instr)
        }
    }

    /// Net change in operand stack height when this instruction executes.
    pub const fn stack_effect(self) -> isize {
        if self.is_push() { 1 } else { -1 }
    }

    /// Number of operands popped before the instruction pushes its result.
    pub const fn pops(self) -> usize {
        if self.is_push() { 0 } else { 2 }
    }

    /// Check if this instruction pushes a constant.
    pub const fn is_push(self) -> bool {
        !self.is_binary_op()
    }

    /// Check if this is an arithmetic operator.
    pub const fn is_binary_op(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide
        )
    }

    /// Assembly-style name used in listings.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::PushIntMinusOne
            | Self::PushIntZero
            | Self::PushIntOne
            | Self::PushIntTwo
            | Self::PushIntThree
            | Self::PushIntFour
            | Self::PushIntFive => "PUSH_INT",
            Self::PushFloatZero | Self::PushFloatOne | Self::PushFloatTwo => "PUSH_FLOAT",
            Self::Add => "ADD",
            Self::Subtract => "SUB",
            Self::Multiply => "MUL",
            Self::Divide => "DIV",
        }
    }
}

impl From<Instruction> for u8 {
    fn from(instr: Instruction) -> u8 {
        instr.to_byte()
    }
}

impl TryFrom<u8> for Instruction {
    type Error = InvalidInstruction;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|instr| instr.to_byte() == byte)
            .ok_or(InvalidInstruction(byte))
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PushIntMinusOne => write!(f, "PushInt(-1)"),
            Self::PushIntZero => write!(f, "PushInt(0)"),
            Self::PushIntOne => write!(f, "PushInt(1)"),
            Self::PushIntTwo => write!(f, "PushInt(2)"),
            Self::PushIntThree => write!(f, "PushInt(3)"),
            Self::PushIntFour => write!(f, "PushInt(4)"),
            Self::PushIntFive => write!(f, "PushInt(5)"),
            Self::PushFloatZero => write!(f, "PushFloat(0.0)"),
            Self::PushFloatOne => write!(f, "PushFloat(1.0)"),
            Self::PushFloatTwo => write!(f, "PushFloat(2.0)"),
            Self::Add => write!(f, "Add"),
            Self::Subtract => write!(f, "Subtract"),
            Self::Multiply => write!(f, "Multiply"),
            Self::Divide => write!(f, "Divide"),
        }
    }
}

/// Operand text shown next to the mnemonic in listings.
pub(crate) fn operand_text(instr: Instruction) -> &'static str {
    match instr {
        Instruction::PushIntMinusOne => "-1",
        Instruction::PushIntZero => "0",
        Instruction::PushIntOne => "1",
        Instruction::PushIntTwo => "2",
        Instruction::PushIntThree => "3",
        Instruction::PushIntFour => "4",
        Instruction::PushIntFive => "5",
        Instruction::PushFloatZero => "0.0",
        Instruction::PushFloatOne => "1.0",
        Instruction::PushFloatTwo => "2.0",
        _ => "",
    }
}

// ============================================================================
// Errors
// ============================================================================

/// A byte that is not an opcode of this instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid instruction byte: 0x{0:02X}")]
pub struct InvalidInstruction(pub u8);
