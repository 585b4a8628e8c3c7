mod code;
mod instruction_set;

pub use code::{CodeFragment, StackError};
pub use instruction_set::{Instruction, InvalidInstruction};

pub(crate) use code::Instructions;
