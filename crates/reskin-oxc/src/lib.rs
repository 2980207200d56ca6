//! oxc-based syntax backend for reskin.
//!
//! Parses JSX/TSX modules with oxc and walks the resulting AST, offering the
//! nodes the rewrite engine cares about.

pub mod backend;

pub use backend::OxcBackend;

use reskin_core::{transpile_with, LibraryTarget, ParseFailure, ParserOptions, TranspileOutput};

/// Transpile `source` for `target`, parsing it with oxc.
pub fn transpile(
    source: &str,
    target: LibraryTarget,
    options: &ParserOptions,
) -> Result<TranspileOutput, ParseFailure> {
    transpile_with(&OxcBackend::new(), source, target, options)
}
