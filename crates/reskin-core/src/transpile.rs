//! Runs a strategy over a whole module.

use crate::diagnostic::{Diagnostic, ParseFailure};
use crate::emit::{self, Edit};
use crate::node::{Context, Node};
use crate::options::ParserOptions;
use crate::strategy::{Rewrite, Strategy};
use crate::target::LibraryTarget;
use crate::traits::{RewritePass, SyntaxBackend};

/// Result of transpiling one module.
#[derive(Debug, Clone)]
pub struct TranspileOutput {
    /// The rewritten module
    pub output_text: String,

    /// Diagnostics reported while parsing
    pub diagnostics: Vec<Diagnostic>,
}

impl TranspileOutput {
    /// Whether the output should not be written because of errors.
    pub fn emit_skipped(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Collects the replacements a strategy asks for.
struct EditCollector<'s> {
    strategy: &'static Strategy,
    edits: Vec<Edit<'s>>,
}

impl<'s> RewritePass<'s> for EditCollector<'s> {
    fn visit(&mut self, node: &Node<'s>, context: Context<'s>) {
        if let Rewrite::Replace(replacement) = self.strategy.rewrite(node, context) {
            self.edits.push(Edit {
                span: node.span(),
                replacement,
            });
        }
    }
}

/// Transpile `source` for `target` using `backend` to parse it.
///
/// The output is produced even when the backend reports recoverable errors;
/// check [`TranspileOutput::emit_skipped`] before using it.
pub fn transpile_with<B>(
    backend: &B,
    source: &str,
    target: LibraryTarget,
    options: &ParserOptions,
) -> Result<TranspileOutput, ParseFailure>
where
    B: SyntaxBackend + ?Sized,
{
    let mut collector = EditCollector {
        strategy: target.strategy(),
        edits: Vec::new(),
    };

    let diagnostics = backend.traverse(source, options, &mut collector)?;

    tracing::debug!(
        target = %target,
        rewrites = collector.edits.len(),
        diagnostics = diagnostics.len(),
        "transpiled module"
    );

    Ok(TranspileOutput {
        output_text: emit::print(source, collector.edits),
        diagnostics,
    })
}
