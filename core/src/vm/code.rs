use smallvec::SmallVec;

use crate::{
    Vec,
    compiler::Order,
    vm::{Instruction, instruction_set::operand_text},
};

/// Inline capacity of a fragment before it spills to the heap.
///
/// Most blocks compile to a handful of instructions.
const INLINE_INSTRUCTIONS: usize = 8;

pub(crate) type Instructions = SmallVec<[Instruction; INLINE_INSTRUCTIONS]>;

/// Compiled instructions of one block plus the precedence of its outermost
/// operator.
///
/// The instruction sequence is in postfix form: every operator is preceded
/// by exactly the instructions that push its operands. A fragment is never
/// modified after it is built; composing blocks copies child instructions
/// into a new fragment.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeFragment {
    instructions: Instructions,
    order: Order,
}

/// Reasons a fragment is not valid postfix code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    #[error("instruction {index} pops {needed} operands but the stack holds {depth}")]
    Underflow {
        index: usize,
        needed: usize,
        depth: usize,
    },
    #[error("fragment leaves {depth} values on the stack (expected at most 1)")]
    Unbalanced { depth: usize },
}

impl CodeFragment {
    pub fn new(instructions: impl IntoIterator<Item = Instruction>, order: Order) -> Self {
        Self {
            instructions: instructions.into_iter().collect(),
            order,
        }
    }

    pub(crate) fn from_instructions(instructions: Instructions, order: Order) -> Self {
        Self {
            instructions,
            order,
        }
    }

    /// A fragment pushing a single constant.
    pub fn constant(instruction: Instruction) -> Self {
        Self::new([instruction], Order::Atomic)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The byte sequence handed to the device interpreter.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.instructions.iter().map(|i| i.to_byte()).collect()
    }

    /// Peak operand stack depth reached while executing this fragment.
    ///
    /// Assumes the fragment is valid postfix code (see [`Self::check_stack`]).
    pub fn max_stack_depth(&self) -> usize {
        let mut depth: usize = 0;
        let mut max_depth: usize = 0;
        for instr in &self.instructions {
            depth = depth.saturating_add_signed(instr.stack_effect());
            max_depth = max_depth.max(depth);
        }
        max_depth
    }

    /// Simulate the stack effects and verify the fragment is valid postfix
    /// code: no instruction pops more than is available and at most one
    /// value (the result) remains.
    ///
    /// Returns the number of values left on the stack, 0 or 1.
    pub fn check_stack(&self) -> Result<usize, StackError> {
        let mut depth: usize = 0;
        for (index, instr) in self.instructions.iter().enumerate() {
            let needed = instr.pops();
            if depth < needed {
                return Err(StackError::Underflow {
                    index,
                    needed,
                    depth,
                });
            }
            depth = depth - needed + 1;
        }
        if depth > 1 {
            return Err(StackError::Unbalanced { depth });
        }
        Ok(depth)
    }
}

impl core::fmt::Debug for CodeFragment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "CodeFragment {{")?;
        writeln!(f, "  order: {:?}", self.order)?;
        writeln!(f, "  max_stack_size: {}", self.max_stack_depth())?;

        if self.instructions.is_empty() {
            writeln!(f, "  instructions: []")?;
            return write!(f, "}}");
        }

        writeln!(f, "  instructions:")?;
        for (addr, instr) in self.instructions.iter().enumerate() {
            let operand = operand_text(*instr);
            if operand.is_empty() {
                writeln!(f, "    {:04}  {:02X}  {}", addr, instr.to_byte(), instr.mnemonic())?;
            } else {
                writeln!(
                    f,
                    "    {:04}  {:02X}  {:<10} {}",
                    addr,
                    instr.to_byte(),
                    instr.mnemonic(),
                    operand
                )?;
            }
        }

        write!(f, "}}")
    }
}
