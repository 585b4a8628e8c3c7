//! One-line text rendering of a block tree.
//!
//! Blocks have no source text, so diagnostics are shown against a sketch of
//! the tree instead:
//!
//! ```text
//! math_subtract(A: 5, B: math_power(A: 1, B: _))
//! ```
//!
//! Every rendered block records its byte range in the sketch, keyed by its
//! slot path from the root.

use core::fmt::Write;
use core::ops::Range;

use hashbrown::HashMap;

use crate::api::CompilationOptions;
use crate::tree::{ExprNode, NUMBER_FIELD, NodeKind, SLOT_A, SLOT_B, list_slot};
use crate::{String, Vec};

/// Rendered text of a block tree plus the span of every block in it.
#[derive(Debug, Clone)]
pub struct Sketch {
    text: String,
    spans: HashMap<Vec<String>, Range<usize>>,
}

impl Sketch {
    /// Sketch `node`, cutting off anything nested deeper than
    /// `options.max_depth` and listing at most `options.max_list_items`
    /// items per list block (all of them when unset).
    pub fn new<N: ExprNode + ?Sized>(node: &N, options: &CompilationOptions) -> Self {
        let mut sketch = Self {
            text: String::new(),
            spans: HashMap::new(),
        };
        let mut path = Vec::new();
        sketch.render(node, &mut path, options);
        sketch
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte range of the block at `path`, if it was rendered.
    pub fn span_of(&self, path: &[String]) -> Option<Range<usize>> {
        self.spans.get(path).cloned()
    }

    /// Span of the block at `path`, or of its deepest rendered ancestor.
    pub fn nearest_span(&self, path: &[String]) -> Range<usize> {
        (0..=path.len())
            .rev()
            .find_map(|len| self.span_of(&path[..len]))
            .unwrap_or(0..self.text.len())
    }

    fn render<N: ExprNode + ?Sized>(
        &mut self,
        node: &N,
        path: &mut Vec<String>,
        options: &CompilationOptions,
    ) {
        let start = self.text.len();
        if path.len() >= options.max_depth {
            self.text.push('…');
            self.spans.insert(path.clone(), start..self.text.len());
            return;
        }

        let kind = node.kind();
        match kind {
            NodeKind::Number => {
                self.text.push_str(node.field(NUMBER_FIELD).unwrap_or("?"));
            }
            NodeKind::Binary(_) => {
                self.text.push_str(kind.block_type());
                self.text.push('(');
                self.render_slot(node, SLOT_A, path, options);
                self.text.push_str(", ");
                self.render_slot(node, SLOT_B, path, options);
                self.text.push(')');
            }
            NodeKind::List(_) => {
                self.text.push_str(kind.block_type());
                self.text.push('(');
                match node.item_count() {
                    Some(count) => {
                        let shown = options.max_list_items.map_or(count, |limit| count.min(limit));
                        for index in 0..shown {
                            if index > 0 {
                                self.text.push_str(", ");
                            }
                            self.render_slot(node, &list_slot(index), path, options);
                        }
                        if shown < count {
                            let _ = write!(self.text, ", …{} more", count - shown);
                        }
                    }
                    None => self.text.push_str(".."),
                }
                self.text.push(')');
            }
            NodeKind::Compare => self.text.push_str(kind.block_type()),
        }
        self.spans.insert(path.clone(), start..self.text.len());
    }

    fn render_slot<N: ExprNode + ?Sized>(
        &mut self,
        node: &N,
        slot: &str,
        path: &mut Vec<String>,
        options: &CompilationOptions,
    ) {
        self.text.push_str(slot);
        self.text.push_str(": ");
        match node.input(slot) {
            Some(child) => {
                path.push(String::from(slot));
                self.render(child, path, options);
                path.pop();
            }
            None => self.text.push('_'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{BinaryOp, ListOp};
    use crate::tree::Block;
    use crate::vec;
    use pretty_assertions::assert_eq;

    fn path(slots: &[&str]) -> Vec<String> {
        slots.iter().map(|s| String::from(*s)).collect()
    }

    #[test]
    fn test_sketch_text() {
        let tree = Block::binary(
            BinaryOp::Subtract,
            Some(Block::number("5")),
            Some(Block::binary(BinaryOp::Power, Some(Block::number("1")), None)),
        );
        let sketch = Sketch::new(&tree, &CompilationOptions::default());
        assert_eq!(
            sketch.text(),
            "math_subtract(A: 5, B: math_power(A: 1, B: _))"
        );
    }

    #[test]
    fn test_spans() {
        let tree = Block::list(
            ListOp::Add,
            [Some(Block::number("1")), None, Some(Block::compare())],
        );
        let sketch = Sketch::new(&tree, &CompilationOptions::default());
        assert_eq!(
            sketch.text(),
            "math_add(NUM0: 1, NUM1: _, NUM2: math_compare)"
        );
        let span = sketch.span_of(&path(&["NUM2"])).unwrap();
        assert_eq!(&sketch.text()[span], "math_compare");
        let span = sketch.span_of(&[]).unwrap();
        assert_eq!(span, 0..sketch.text().len());
        assert_eq!(sketch.span_of(&path(&["NUM1"])), None);
    }

    #[test]
    fn test_nearest_span_falls_back_to_parent() {
        let tree = Block::binary(
            BinaryOp::Divide,
            Some(Block::binary(BinaryOp::Subtract, None, None)),
            None,
        );
        let sketch = Sketch::new(&tree, &CompilationOptions::default());
        let span = sketch.nearest_span(&path(&["A", "B"]));
        assert_eq!(&sketch.text()[span], "math_subtract(A: _, B: _)");
    }

    #[test]
    fn test_depth_cutoff() {
        let mut tree = Block::number("1");
        for _ in 0..5 {
            tree = Block::binary(BinaryOp::Subtract, Some(tree), None);
        }
        let options = CompilationOptions {
            max_depth: 2,
            ..CompilationOptions::default()
        };
        let sketch = Sketch::new(&tree, &options);
        assert_eq!(
            sketch.text(),
            "math_subtract(A: math_subtract(A: …, B: _), B: _)"
        );
    }

    #[test]
    fn test_missing_item_count_and_field() {
        let tree = Block::new(NodeKind::List(ListOp::Multiply))
            .with_input("NUM0", Block::new(NodeKind::Number));
        let sketch = Sketch::new(&tree, &CompilationOptions::default());
        assert_eq!(sketch.text(), "math_multiply(..)");

        let sketch = Sketch::new(&Block::new(NodeKind::Number), &CompilationOptions::default());
        assert_eq!(sketch.text(), "?");
        assert_eq!(sketch.span_of(&vec![]), Some(0..1));
    }

    #[test]
    fn test_list_truncation() {
        let tree = Block::list(ListOp::Add, [None, None, None]);
        let options = CompilationOptions {
            max_list_items: Some(1),
            ..CompilationOptions::default()
        };
        let sketch = Sketch::new(&tree, &options);
        assert_eq!(sketch.text(), "math_add(NUM0: _, …2 more)");
    }
}
