//! Public API types shared by the compiler and its hosts.

pub mod error;
pub mod options;

pub use error::{Diagnostic, Severity};
pub use options::CompilationOptions;
