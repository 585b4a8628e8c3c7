//! Error rendering using ariadne
//!
//! Blocks have no source text, so errors are rendered against a one-line
//! sketch of the block tree with the failing block underlined.

use crate::{CompilationOptions, CompileError, ExprNode, Severity, Sketch};
use ariadne::{ColorGenerator, Config, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<blocks>";

/// Render a compile error for the tree rooted at `node` to stderr
///
/// # Example
/// ```no_run
/// use iotbc::{compile, render_error, BinaryOp, Block};
///
/// let block = Block::binary(BinaryOp::Power, Some(Block::number("2")), None);
/// if let Err(e) = compile(&block) {
///     render_error(&block, &e);
/// }
/// ```
pub fn render_error<N: ExprNode + ?Sized>(node: &N, error: &CompileError) {
    render_error_to_writer(node, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to<N: ExprNode + ?Sized>(
    node: &N,
    error: &CompileError,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(node, error, writer, true)
}

/// Render an error to a String (useful for editor panels, logs, etc.)
pub fn render_error_to_string<N: ExprNode + ?Sized>(node: &N, error: &CompileError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(node, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color<N: ExprNode + ?Sized>(
    node: &N,
    error: &CompileError,
) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(node, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer<N: ExprNode + ?Sized>(
    node: &N,
    error: &CompileError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let sketch = Sketch::new(node, &CompilationOptions::default());
    let diag = error.to_diagnostic();
    let span = sketch.nearest_span(&diag.path);

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let kind = match diag.severity {
        Severity::Error => ReportKind::Error,
    };

    let mut report = Report::build(kind, (SOURCE_ID, span.clone()))
        .with_message(&diag.message)
        .with_config(
            Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        );

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    let color = colors.next();
    report = report.with_label(
        Label::new((SOURCE_ID, span))
            .with_message(&diag.message)
            .with_color(color),
    );

    for help_msg in &diag.help {
        report = report.with_help(help_msg);
    }

    report = report.with_note(format!("block at slot path {}", error.path_display()));

    report
        .finish()
        .write((SOURCE_ID, Source::from(sketch.text())), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BinaryOp, Block, ListOp, compile};

    #[test]
    fn test_render_unimplemented_operator() {
        let block = Block::binary(
            BinaryOp::Subtract,
            Some(Block::number("5")),
            Some(Block::binary(BinaryOp::Power, Some(Block::number("1")), None)),
        );
        let err = compile(&block).unwrap_err();
        let output = render_error_to_string_no_color(&block, &err);

        assert!(output.contains("Operator POWER is not implemented"));
        assert!(output.contains("E0002"));
        // Should show the sketch
        assert!(output.contains("math_subtract(A: 5, B: math_power(A: 1, B: _))"));
        assert!(output.contains("slot path B"));
    }

    #[test]
    fn test_render_unsupported_literal() {
        let block = Block::list(ListOp::Add, [Some(Block::number("1")), Some(Block::number("42"))]);
        let err = compile(&block).unwrap_err();
        let output = render_error_to_string_no_color(&block, &err);

        assert!(output.contains("Unsupported number literal `42`"));
        assert!(output.contains("slot path NUM1"));
        assert!(output.contains("-1 to 5"));
    }

    #[test]
    fn test_render_root_error() {
        let block = Block::compare();
        let err = compile(&block).unwrap_err();
        let output = render_error_to_string_no_color(&block, &err);

        assert!(output.contains("math_compare"));
        assert!(output.contains("<root>"));
    }

    #[test]
    fn test_render_to_string_captures_output() {
        let block = Block::number("7.5");
        let err = compile(&block).unwrap_err();
        let output = render_error_to_string(&block, &err);

        // Output should not be empty
        assert!(!output.is_empty());
        // Should be multi-line (ariadne adds formatting)
        assert!(output.lines().count() > 1);
    }

    #[test]
    fn test_render_to_writer() {
        let block = Block::new(crate::NodeKind::List(ListOp::Multiply));
        let err = compile(&block).unwrap_err();
        let mut buf = Vec::new();
        render_error_to(&block, &err, &mut buf).unwrap();
        assert!(String::from_utf8_lossy(&buf).contains("no item count"));
    }
}
