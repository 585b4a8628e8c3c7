//! Configuration options for the block compiler.

/// Configuration options for compilation.
///
/// # Example
///
/// ```
/// use iotbc_core::api::CompilationOptions;
///
/// let options = CompilationOptions {
///     max_depth: 32,
///     ..CompilationOptions::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilationOptions {
    /// Maximum block nesting depth, counting the root as 1.
    ///
    /// Deeper trees (including accidental connection cycles) fail with a
    /// malformed-tree error instead of recursing without bound.
    ///
    /// Default: 128
    pub max_depth: usize,

    /// Maximum item count accepted on a list block (`+`, `×`), or `None`
    /// for no limit.
    ///
    /// Default: `None`
    pub max_list_items: Option<usize>,
}

impl Default for CompilationOptions {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_list_items: None,
        }
    }
}
