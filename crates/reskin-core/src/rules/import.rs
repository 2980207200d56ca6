//! Rewrites the `react` import for the target library.

use crate::emit::{ImportReplacement, Replacement};
use crate::node::ImportDeclaration;
use crate::strategy::Rewrite;

/// Module specifier that marks the component-library import.
pub const REACT_MODULE: &str = "react";

/// The import a target needs in place of `react`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportRewrite {
    pub module: &'static str,
    pub default_binding: Option<&'static str>,
    pub named: &'static [&'static str],
}

impl ImportRewrite {
    /// Replace `decl` if it imports `react`, keeping its quote style.
    pub fn apply<'s>(&self, decl: &ImportDeclaration<'s>) -> Rewrite<'s> {
        if decl.module != REACT_MODULE {
            return Rewrite::Keep;
        }

        tracing::trace!(module = self.module, "rewriting react import");
        Rewrite::Replace(Replacement::Import(ImportReplacement {
            rewrite: *self,
            quote: decl.quote,
            terminated: decl.terminated,
        }))
    }
}
