use hashbrown::HashMap;

use crate::String;
use crate::compiler::{BinaryOp, ListOp};
use crate::tree::{ExprNode, NUMBER_FIELD, NodeKind, SLOT_A, SLOT_B, UnknownBlockType, list_slot};

/// An owned block tree.
///
/// # Example
///
/// ```
/// use iotbc_core::compiler::ListOp;
/// use iotbc_core::tree::Block;
///
/// // 1 + 2 + (empty slot)
/// let sum = Block::list(
///     ListOp::Add,
///     [Some(Block::number("1")), Some(Block::number("2")), None],
/// );
/// assert_eq!(sum.item_count(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    kind: NodeKind,
    fields: HashMap<String, String>,
    inputs: HashMap<String, Block>,
    item_count: Option<usize>,
}

impl Block {
    /// A block with no fields, no inputs and no item count.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            fields: HashMap::new(),
            inputs: HashMap::new(),
            item_count: None,
        }
    }

    /// A bare block of the given editor type.
    pub fn from_block_type(block_type: &str) -> Result<Self, UnknownBlockType> {
        block_type.parse().map(Self::new)
    }

    /// `math_number` with the literal exactly as typed.
    pub fn number(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Number).with_field(NUMBER_FIELD, text)
    }

    /// Two-operand block; `None` leaves the slot empty.
    pub fn binary(op: BinaryOp, a: Option<Block>, b: Option<Block>) -> Self {
        let mut block = Self::new(NodeKind::Binary(op));
        if let Some(a) = a {
            block.inputs.insert(String::from(SLOT_A), a);
        }
        if let Some(b) = b {
            block.inputs.insert(String::from(SLOT_B), b);
        }
        block
    }

    /// List block with one slot per item; `None` items leave their slot empty.
    pub fn list(op: ListOp, items: impl IntoIterator<Item = Option<Block>>) -> Self {
        let mut block = Self::new(NodeKind::List(op));
        let mut count = 0;
        for (index, item) in items.into_iter().enumerate() {
            if let Some(item) = item {
                block.inputs.insert(list_slot(index), item);
            }
            count = index + 1;
        }
        block.item_count = Some(count);
        block
    }

    /// `math_compare`.
    pub fn compare() -> Self {
        Self::new(NodeKind::Compare)
    }

    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(String::from(name), value.into());
        self
    }

    pub fn with_input(mut self, slot: &str, child: Block) -> Self {
        self.inputs.insert(String::from(slot), child);
        self
    }

    pub fn with_item_count(mut self, count: usize) -> Self {
        self.item_count = Some(count);
        self
    }

    /// Disconnect whatever is plugged into `slot`.
    pub fn take_input(&mut self, slot: &str) -> Option<Block> {
        self.inputs.remove(slot)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn item_count(&self) -> Option<usize> {
        self.item_count
    }
}

impl ExprNode for Block {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn input(&self, slot: &str) -> Option<&Self> {
        self.inputs.get(slot)
    }

    fn item_count(&self) -> Option<usize> {
        self.item_count
    }
}
