//! Walks an oxc AST and offers its nodes to a rewrite pass.

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Declaration, ExportDefaultDeclarationKind, Function, ImportDeclaration as OxcImport,
    JSXAttributeItem, JSXAttributeName, JSXOpeningElement, Statement,
};
use oxc_ast_visit::{walk, Visit};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType};

use reskin_core::{
    Context, Diagnostic, Dialect, ExportKind, FunctionDeclaration, ImportDeclaration,
    JsxAttribute, JsxOpeningElement, Node, ParseFailure, ParserOptions, Quote, RewritePass, Span,
    SyntaxBackend,
};

/// Syntax backend built on the oxc parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct OxcBackend;

impl OxcBackend {
    pub fn new() -> Self {
        Self
    }
}

fn source_type(options: &ParserOptions) -> SourceType {
    let base = match options.dialect {
        Dialect::TypeScript => SourceType::ts(),
        Dialect::JavaScript => SourceType::mjs(),
    };
    base.with_jsx(options.jsx)
}

impl SyntaxBackend for OxcBackend {
    fn traverse<'s>(
        &self,
        source: &'s str,
        options: &ParserOptions,
        pass: &mut dyn RewritePass<'s>,
    ) -> Result<Vec<Diagnostic>, ParseFailure> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, source_type(options)).parse();

        let diagnostics: Vec<Diagnostic> = ret
            .errors
            .iter()
            .map(|error| {
                let offset = error
                    .labels
                    .as_ref()
                    .and_then(|labels| labels.first())
                    .map(|label| label.offset() as u32);
                Diagnostic::error(error.to_string()).with_offset(offset)
            })
            .collect();

        if ret.panicked {
            tracing::debug!(errors = diagnostics.len(), "parser gave up on module");
            return Err(ParseFailure::new(diagnostics));
        }

        let mut traversal = Traversal { source, pass };
        traversal.visit_program(&ret.program);

        Ok(diagnostics)
    }
}

fn span(span: oxc_span::Span) -> Span {
    Span::new(span.start, span.end)
}

struct Traversal<'s, 'p> {
    source: &'s str,
    pass: &'p mut dyn RewritePass<'s>,
}

impl<'s> Traversal<'s, '_> {
    fn text(&self, span: oxc_span::Span) -> &'s str {
        let source = self.source;
        &source[span.start as usize..span.end as usize]
    }

    fn offer(&mut self, node: &Node<'s>, context: Context<'s>) {
        self.pass.visit(node, context);
    }

    fn import_declaration(&self, decl: &OxcImport<'_>) -> ImportDeclaration<'s> {
        let literal = self.text(decl.source.span);
        let module = literal
            .get(1..literal.len().saturating_sub(1))
            .unwrap_or(literal);

        ImportDeclaration {
            span: span(decl.span),
            module,
            quote: Quote::of_literal(literal),
            terminated: self.text(decl.span).trim_end().ends_with(';'),
        }
    }

    fn function_declaration(
        &self,
        func: &Function<'_>,
        statement: oxc_span::Span,
        export: ExportKind,
    ) -> FunctionDeclaration<'s> {
        let return_type = func.return_type.as_ref().map(|annotation| {
            let text = self.text(annotation.span).trim();
            text.strip_prefix(':').unwrap_or(text).trim()
        });

        // An overload signature owns its terminating `;`.
        let mut statement = span(statement);
        let rest = self.source.get(statement.end as usize..).unwrap_or_default();
        if func.body.is_none() && rest.starts_with(';') {
            statement.end += 1;
        }

        FunctionDeclaration {
            span: statement,
            name: func.id.as_ref().map(|id| self.text(id.span)),
            type_parameters: func.type_parameters.as_ref().map(|tp| self.text(tp.span)),
            params: self.text(func.params.span),
            return_type,
            body: func.body.as_ref().map(|body| span(body.span)),
            export,
            is_async: func.r#async,
            generator: func.generator,
            declare: func.declare,
        }
    }

    fn offer_function(&mut self, func: &Function<'_>, statement: oxc_span::Span, export: ExportKind) {
        let node = Node::FunctionDeclaration(self.function_declaration(func, statement, export));
        self.offer(&node, Context::Module);
    }

    fn jsx_opening_element(&self, it: &JSXOpeningElement<'_>) -> JsxOpeningElement<'s> {
        let attributes = it
            .attributes
            .iter()
            .filter_map(|item| match item {
                JSXAttributeItem::Attribute(attr) => match &attr.name {
                    JSXAttributeName::Identifier(ident) => Some(JsxAttribute {
                        span: span(ident.span),
                        name: self.text(ident.span),
                        value: attr.value.as_ref().map(|value| self.text(value.span())),
                    }),
                    // `xlink:href` and friends are already in their final form.
                    JSXAttributeName::NamespacedName(_) => None,
                },
                JSXAttributeItem::SpreadAttribute(_) => None,
            })
            .collect();

        JsxOpeningElement {
            span: span(it.span),
            tag: self.text(it.name.span()),
            attributes,
            self_closing: self.text(it.span).trim_end().ends_with("/>"),
        }
    }
}

impl<'a> Visit<'a> for Traversal<'_, '_> {
    fn visit_statement(&mut self, it: &Statement<'a>) {
        match it {
            Statement::ImportDeclaration(decl) => {
                let node = Node::ImportDeclaration(self.import_declaration(decl));
                self.offer(&node, Context::Module);
            }
            Statement::FunctionDeclaration(func) => {
                self.offer_function(func, func.span, ExportKind::None);
            }
            Statement::ExportDefaultDeclaration(decl) => {
                if let ExportDefaultDeclarationKind::FunctionDeclaration(func) = &decl.declaration {
                    self.offer_function(func, decl.span, ExportKind::Default);
                }
            }
            Statement::ExportNamedDeclaration(decl) => {
                if let Some(Declaration::FunctionDeclaration(func)) = &decl.declaration {
                    self.offer_function(func, decl.span, ExportKind::Named);
                }
            }
            _ => {}
        }

        walk::walk_statement(self, it);
    }

    fn visit_jsx_opening_element(&mut self, it: &JSXOpeningElement<'a>) {
        let element = self.jsx_opening_element(it);
        let context = element.attribute_context();
        let node = Node::JsxOpeningElement(element);
        self.offer(&node, Context::Module);

        if let Node::JsxOpeningElement(element) = &node {
            for attr in &element.attributes {
                self.offer(&Node::JsxAttribute(*attr), context);
            }
        }

        // Attribute values and children may hold further elements.
        walk::walk_jsx_opening_element(self, it);
    }
}
