//! Rewrite engine for porting React function components to other libraries.
//!
//! This crate decides, node by node, what a React module must look like when
//! retargeted at Preact or Vue. Parsing and walking the source is delegated to
//! a [`SyntaxBackend`]; the engine only classifies the nodes it is offered and
//! builds their replacements.

pub mod case;
pub mod diagnostic;
pub mod emit;
pub mod node;
pub mod options;
pub mod rules;
pub mod strategy;
pub mod tables;
pub mod target;
pub mod traits;
pub mod transpile;

pub use case::kebab_case;
pub use diagnostic::{Diagnostic, ParseFailure, Severity};
pub use emit::{print, Edit, Replacement, Segment};
pub use node::{
    Context, ExportKind, FunctionDeclaration, ImportDeclaration, JsxAttribute, JsxOpeningElement,
    Node, Quote, Span,
};
pub use options::{Dialect, ParserOptions};
pub use strategy::{Rewrite, Strategy};
pub use tables::{classify, TagClass};
pub use target::{LibraryTarget, UnsupportedTarget};
pub use traits::{RewritePass, SyntaxBackend};
pub use transpile::{transpile_with, TranspileOutput};
