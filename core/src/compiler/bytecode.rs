//! Bytecode compiler implementation.

use core::iter;

use tracing::{debug, trace};

use crate::{
    api::CompilationOptions,
    compiler::{ArithmeticOp, CompileError, ErrorKind, MalformedReason, Order},
    tree::{ExprNode, NUMBER_FIELD, NodeKind, SLOT_A, SLOT_B, list_slot},
    vm::{CodeFragment, Instruction, Instructions},
};

/// Bytecode compiler that turns math block trees into device instructions.
///
/// The compiler holds nothing but its options: every call to
/// [`compile`](Self::compile) is independent, and the same compiler can be
/// used for any number of trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytecodeCompiler {
    options: CompilationOptions,
}

impl BytecodeCompiler {
    /// Create a new bytecode compiler.
    pub fn new(options: CompilationOptions) -> Self {
        Self { options }
    }

    /// The options every [`compile`](Self::compile) call runs with.
    pub fn options(&self) -> &CompilationOptions {
        &self.options
    }

    /// Compile a block tree rooted at `node`.
    ///
    /// Either the whole tree compiles or an error is returned; no partial
    /// code is ever produced.
    pub fn compile<N: ExprNode + ?Sized>(&self, node: &N) -> Result<CodeFragment, CompileError> {
        let code = self.compile_node(node, 1)?;
        debug!(
            kind = %node.kind(),
            len = code.len(),
            order = ?code.order(),
            "compiled block tree"
        );
        Ok(code)
    }

    /// Dispatch on the block kind. `depth` counts the root as 1.
    fn compile_node<N: ExprNode + ?Sized>(
        &self,
        node: &N,
        depth: usize,
    ) -> Result<CodeFragment, CompileError> {
        if depth > self.options.max_depth {
            return Err(CompileError::malformed(MalformedReason::DepthExceeded {
                limit: self.options.max_depth,
            }));
        }

        match node.kind() {
            NodeKind::Number => Self::compile_number(node),
            NodeKind::Binary(op) => self.compile_binary(node, op.operator(), depth),
            NodeKind::List(op) => self.compile_list(node, op.operator(), depth),
            kind @ NodeKind::Compare => Err(CompileError::new(ErrorKind::Unimplemented {
                block_type: kind.block_type(),
            })),
        }
    }

    // === Operand Resolution ===

    /// Compile the block connected to `slot`, or substitute a push of
    /// integer 0 when the slot is empty.
    ///
    /// `context` is the order of the operator consuming the operand.
    fn resolve_operand<N: ExprNode + ?Sized>(
        &self,
        node: &N,
        slot: &str,
        context: Order,
        depth: usize,
    ) -> Result<CodeFragment, CompileError> {
        match node.input(slot) {
            Some(child) => {
                trace!(slot, ?context, "resolving operand");
                self.compile_node(child, depth + 1)
                    .map_err(|err| err.in_slot(slot))
            }
            None => {
                trace!(slot, ?context, "empty slot, substituting 0");
                Ok(CodeFragment::constant(Instruction::PushIntZero))
            }
        }
    }

    // === Emitters ===

    fn compile_number<N: ExprNode + ?Sized>(node: &N) -> Result<CodeFragment, CompileError> {
        let text = node.field(NUMBER_FIELD).ok_or_else(|| {
            CompileError::malformed(MalformedReason::MissingField {
                field: NUMBER_FIELD,
            })
        })?;
        Instruction::from_literal(text)
            .map(CodeFragment::constant)
            .ok_or_else(|| {
                CompileError::new(ErrorKind::UnsupportedLiteral {
                    text: text.into(),
                })
            })
    }

    /// Fixed-arity form: `A B op`.
    fn compile_binary<N: ExprNode + ?Sized>(
        &self,
        node: &N,
        op: ArithmeticOp,
        depth: usize,
    ) -> Result<CodeFragment, CompileError> {
        let spec = op.spec()?;
        let a = self.resolve_operand(node, SLOT_A, spec.order, depth)?;
        let b = self.resolve_operand(node, SLOT_B, spec.order, depth)?;

        // Operand orders are metadata only and are not emitted.
        let mut instructions = Instructions::with_capacity(a.len() + b.len() + 1);
        instructions.extend_from_slice(a.instructions());
        instructions.extend_from_slice(b.instructions());
        instructions.push(spec.instruction);

        Ok(CodeFragment::from_instructions(instructions, spec.order))
    }

    /// List form: all operands left to right, then `count - 1` operators.
    ///
    /// `[a, b, c]` becomes `a b c op op`, which the device evaluates as
    /// `(a op b) op c`. An empty list compiles to no instructions at all.
    fn compile_list<N: ExprNode + ?Sized>(
        &self,
        node: &N,
        op: ArithmeticOp,
        depth: usize,
    ) -> Result<CodeFragment, CompileError> {
        let spec = op.spec()?;
        let count = node
            .item_count()
            .ok_or_else(|| CompileError::malformed(MalformedReason::MissingItemCount))?;
        if let Some(limit) = self.options.max_list_items.filter(|&limit| count > limit) {
            return Err(CompileError::malformed(MalformedReason::TooManyItems {
                count,
                limit,
            }));
        }

        let mut instructions = Instructions::with_capacity(2 * count);
        for index in 0..count {
            let item = self.resolve_operand(node, &list_slot(index), spec.order, depth)?;
            instructions.extend_from_slice(item.instructions());
        }
        instructions.extend(iter::repeat_n(spec.instruction, count.saturating_sub(1)));

        Ok(CodeFragment::from_instructions(instructions, spec.order))
    }
}
