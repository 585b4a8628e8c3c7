#![allow(dead_code)]

use iotbc::{BinaryOp, Block, ListOp};
use once_cell::sync::Lazy;

pub struct LiteralCase {
    pub text: &'static str,
    pub byte: u8,
}

/// Every literal the device can push directly.
pub static LITERAL_CASES: Lazy<Vec<LiteralCase>> = Lazy::new(|| {
    [
        ("-1", 0x02),
        ("0", 0x03),
        ("1", 0x04),
        ("2", 0x05),
        ("3", 0x06),
        ("4", 0x07),
        ("5", 0x08),
        ("0.0", 0x0B),
        ("1.0", 0x0C),
        ("2.0", 0x0D),
    ]
    .into_iter()
    .map(|(text, byte)| LiteralCase { text, byte })
    .collect()
});

pub fn num(text: &str) -> Option<Block> {
    Some(Block::number(text))
}

pub fn sub(a: Option<Block>, b: Option<Block>) -> Option<Block> {
    Some(Block::binary(BinaryOp::Subtract, a, b))
}

pub fn div(a: Option<Block>, b: Option<Block>) -> Option<Block> {
    Some(Block::binary(BinaryOp::Divide, a, b))
}

pub fn pow(a: Option<Block>, b: Option<Block>) -> Option<Block> {
    Some(Block::binary(BinaryOp::Power, a, b))
}

pub fn add<const N: usize>(items: [Option<Block>; N]) -> Option<Block> {
    Some(Block::list(ListOp::Add, items))
}

pub fn mul<const N: usize>(items: [Option<Block>; N]) -> Option<Block> {
    Some(Block::list(ListOp::Multiply, items))
}

pub fn compare() -> Option<Block> {
    Some(Block::compare())
}

/// Declare a test compiling `block`, checking either the emitted bytes or
/// the error kind.
macro_rules! compile_case {
    ($name:ident, block: $block:expr, bytes: $bytes:expr $(,)?) => {
        #[test]
        fn $name() {
            let block = $block.expect("test block");
            let code = iotbc::compile(&block).unwrap_or_else(|e| {
                panic!("{}", iotbc::render_error_to_string_no_color(&block, &e))
            });
            pretty_assertions::assert_eq!(code.to_bytes(), $bytes);
            assert!(code.check_stack().is_ok(), "not valid postfix: {code:?}");
        }
    };
    ($name:ident, block: $block:expr, error: $pattern:pat $(,)?) => {
        #[test]
        fn $name() {
            let block = $block.expect("test block");
            match iotbc::compile(&block) {
                Err(e) => assert!(matches!(e.kind, $pattern), "unexpected error: {e:?}"),
                Ok(code) => panic!("expected an error, got {code:?}"),
            }
        }
    };
}
