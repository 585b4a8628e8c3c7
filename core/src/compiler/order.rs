//! Operator precedence levels attached to compiled fragments.

/// Binding strength of a fragment's outermost operator, from tightest
/// (`Atomic`) to loosest (`None`).
///
/// The device executes postfix code, which needs no grouping, so the
/// compiler never inserts anything based on this value. It is still computed
/// for every fragment and passed as context when operands are resolved.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Order {
    Atomic = 0,
    Grouping = 1,
    Unary = 2,
    Multiply = 3,
    Add = 4,
    Shift = 5,
    Comparison = 6,
    Equality = 7,
    BitAnd = 8,
    BitXor = 9,
    BitOr = 10,
    And = 11,
    Or = 12,
    Ternary = 13,
    Assignment = 14,
    Comma = 15,
    None = 99,
}

impl Order {
    pub const ALL: [Order; 17] = [
        Order::Atomic,
        Order::Grouping,
        Order::Unary,
        Order::Multiply,
        Order::Add,
        Order::Shift,
        Order::Comparison,
        Order::Equality,
        Order::BitAnd,
        Order::BitXor,
        Order::BitOr,
        Order::And,
        Order::Or,
        Order::Ternary,
        Order::Assignment,
        Order::Comma,
        Order::None,
    ];

    /// The numeric level.
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Look up an order by its numeric level.
    pub fn from_level(level: u8) -> Option<Order> {
        Self::ALL.iter().copied().find(|order| order.level() == level)
    }
}
