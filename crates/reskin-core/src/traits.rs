//! The capability contract between the rewrite engine and a syntax backend.

use crate::diagnostic::{Diagnostic, ParseFailure};
use crate::node::{Context, Node};
use crate::options::ParserOptions;

/// Receives nodes in top-down order while a backend walks a module.
pub trait RewritePass<'s> {
    fn visit(&mut self, node: &Node<'s>, context: Context<'s>);
}

/// A parser that can walk a module and describe its nodes.
pub trait SyntaxBackend {
    /// Parse `source` and offer every rewritable node to `pass`.
    ///
    /// Nodes are offered parent before child, in source order. A
    /// [`crate::JsxOpeningElement`] is followed by each of its attributes,
    /// offered in the element's [`Context`]. Everything else is offered in
    /// [`Context::Module`].
    ///
    /// Recoverable problems are returned as diagnostics; `Err` means no tree
    /// could be produced at all.
    fn traverse<'s>(
        &self,
        source: &'s str,
        options: &ParserOptions,
        pass: &mut dyn RewritePass<'s>,
    ) -> Result<Vec<Diagnostic>, ParseFailure>;
}
