#[macro_use]
mod cases;

use cases::*;
use iotbc::{Block, ErrorKind, ListOp, NodeKind, Order, compile};
use pretty_assertions::assert_eq;

// === Fixed-arity ===

compile_case!(subtract, block: sub(num("5"), num("2")), bytes: [0x08, 0x05, 0x64]);
compile_case!(divide, block: div(num("4"), num("2")), bytes: [0x07, 0x05, 0x6C]);
compile_case!(divide_missing_dividend, block: div(None, num("3")), bytes: [0x03, 0x06, 0x6C]);
compile_case!(subtract_missing_both, block: sub(None, None), bytes: [0x03, 0x03, 0x64]);
compile_case!(
    subtract_floats,
    block: sub(num("2.0"), num("0.0")),
    bytes: [0x0D, 0x0B, 0x64],
);
compile_case!(
    power,
    block: pow(num("1"), num("2")),
    error: ErrorKind::UnimplementedOperator { .. },
);

// === List fold ===

compile_case!(
    add_three,
    block: add([num("1"), num("2"), num("3")]),
    bytes: [0x04, 0x05, 0x06, 0x60, 0x60],
);
compile_case!(add_empty, block: add([]), bytes: Vec::<u8>::new());
compile_case!(multiply_empty, block: mul([]), bytes: Vec::<u8>::new());
compile_case!(add_single, block: add([num("5")]), bytes: [0x08]);
compile_case!(multiply_pair, block: mul([num("2"), num("1.0")]), bytes: [0x05, 0x0C, 0x68]);
compile_case!(
    add_with_gaps,
    block: add([None, num("1"), None]),
    bytes: [0x03, 0x04, 0x03, 0x60, 0x60],
);

// === Nesting ===

compile_case!(
    nested_lists,
    block: add([mul([num("2"), num("3")]), mul([num("4"), num("5")])]),
    bytes: [0x05, 0x06, 0x68, 0x07, 0x08, 0x68, 0x60],
);
compile_case!(
    list_inside_binary,
    block: div(add([num("1"), num("2"), num("3")]), num("2")),
    bytes: [0x04, 0x05, 0x06, 0x60, 0x60, 0x05, 0x6C],
);
#[test]
fn test_empty_list_operand_underflows_on_device() {
    // Compiles, but is not valid postfix code: flagged by the stack check.
    let block = sub(num("1"), add([])).unwrap();
    let code = compile(&block).unwrap();
    assert_eq!(code.to_bytes(), [0x04, 0x64]);
    assert!(code.check_stack().is_err());
}

#[test]
fn test_wide_list_with_default_options() {
    let block = Block::list(ListOp::Multiply, (0..5000).map(|_| num("1.0")));
    let code = compile(&block).unwrap();
    assert_eq!(code.len(), 9999);
    assert_eq!(code.max_stack_depth(), 5000);
    assert_eq!(code.check_stack(), Ok(1));
}

#[test]
fn test_fragment_orders() {
    for block in [
        sub(num("1"), num("2")),
        div(None, None),
        add([num("1")]),
        mul([]),
    ] {
        assert_eq!(compile(&block.unwrap()).unwrap().order(), Order::Atomic);
    }
}

#[test]
fn test_max_stack_depth() {
    let wide = add([num("1"), num("2"), num("3"), num("4"), num("5")]).unwrap();
    assert_eq!(compile(&wide).unwrap().max_stack_depth(), 5);

    let left_deep = sub(sub(sub(num("1"), num("2")), num("3")), num("4")).unwrap();
    assert_eq!(compile(&left_deep).unwrap().max_stack_depth(), 2);

    let right_deep = sub(num("1"), sub(num("2"), sub(num("3"), num("4")))).unwrap();
    assert_eq!(compile(&right_deep).unwrap().max_stack_depth(), 4);
}

#[test]
fn test_blocks_from_type_names() {
    let block = Block::from_block_type("math_multiply")
        .unwrap()
        .with_item_count(2)
        .with_input("NUM0", Block::number("3"))
        .with_input("NUM1", Block::number("4"));
    assert_eq!(block.kind(), NodeKind::List(ListOp::Multiply));
    assert_eq!(compile(&block).unwrap().to_bytes(), [0x06, 0x07, 0x68]);
}
