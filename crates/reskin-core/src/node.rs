//! Borrowed views of the syntax nodes the rewrite rules look at.
//!
//! A backend builds these from its own tree while walking it. All text is
//! borrowed from the module source, and every node remembers the span it
//! occupies so a replacement can be spliced back in.

use crate::tables::{classify, TagClass};

/// Byte range within the module source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether `other` lies entirely within this span.
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Slice the text this span covers.
    pub fn source_text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start as usize..self.end as usize]
    }
}

/// Quote character of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quote {
    #[default]
    Double,
    Single,
}

impl Quote {
    /// Detect the quote style of a raw literal such as `'react'`.
    pub fn of_literal(raw: &str) -> Self {
        if raw.starts_with('\'') {
            Self::Single
        } else {
            Self::Double
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }

    /// Wrap `value` in this quote.
    pub fn quote(self, value: &str) -> String {
        let q = self.as_char();
        format!("{q}{value}{q}")
    }
}

/// How a function declaration is exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportKind {
    #[default]
    None,
    /// `export function Foo() {}`
    Named,
    /// `export default function Foo() {}`
    Default,
}

/// `import ... from "module"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportDeclaration<'s> {
    /// The whole statement
    pub span: Span,
    /// Module name without quotes
    pub module: &'s str,
    pub quote: Quote,
    /// Whether the statement ends with `;`
    pub terminated: bool,
}

/// A function declaration statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionDeclaration<'s> {
    /// The whole statement, including any `export` keywords
    pub span: Span,
    pub name: Option<&'s str>,
    /// `<T>` including angle brackets
    pub type_parameters: Option<&'s str>,
    /// Parameter list including parentheses
    pub params: &'s str,
    /// Return type without the leading colon
    pub return_type: Option<&'s str>,
    /// Body block including braces; `None` for overload signatures
    pub body: Option<Span>,
    pub export: ExportKind,
    pub is_async: bool,
    /// `function*`
    pub generator: bool,
    /// `declare function`
    pub declare: bool,
}

/// The opening (or self-closing) tag of a JSX element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxOpeningElement<'s> {
    pub span: Span,
    pub tag: &'s str,
    pub attributes: Vec<JsxAttribute<'s>>,
    pub self_closing: bool,
}

impl<'s> JsxOpeningElement<'s> {
    /// The context this element's own attributes are rewritten in.
    pub fn attribute_context(&self) -> Context<'s> {
        Context::Element {
            tag: self.tag,
            class: classify(self.tag),
        }
    }
}

/// A `name` or `name={value}` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsxAttribute<'s> {
    /// Span of the attribute name only
    pub span: Span,
    pub name: &'s str,
    /// Raw value text, e.g. `"2"` or `{handler}`
    pub value: Option<&'s str>,
}

/// Every node shape the rewrite rules can be offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'s> {
    ImportDeclaration(ImportDeclaration<'s>),
    FunctionDeclaration(FunctionDeclaration<'s>),
    JsxOpeningElement(JsxOpeningElement<'s>),
    JsxAttribute(JsxAttribute<'s>),
    /// Anything else; never inspected
    Other(Span),
}

impl Node<'_> {
    /// The span a replacement of this node overwrites.
    pub fn span(&self) -> Span {
        match self {
            Node::ImportDeclaration(decl) => decl.span,
            Node::FunctionDeclaration(func) => func.span,
            Node::JsxOpeningElement(element) => element.span,
            Node::JsxAttribute(attr) => attr.span,
            Node::Other(span) => *span,
        }
    }
}

/// Lexical context a node is offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context<'s> {
    /// Outside any element's attribute list
    #[default]
    Module,
    /// Within the attribute list of `tag`
    Element { tag: &'s str, class: TagClass },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_quote_style() {
        assert_eq!(Quote::of_literal("'react'"), Quote::Single);
        assert_eq!(Quote::of_literal("\"react\""), Quote::Double);
        assert_eq!(Quote::Single.quote("vue"), "'vue'");
    }

    #[test]
    fn element_context_carries_classification() {
        let element = JsxOpeningElement {
            span: Span::new(0, 10),
            tag: "circle",
            attributes: vec![],
            self_closing: true,
        };

        assert_eq!(
            element.attribute_context(),
            Context::Element {
                tag: "circle",
                class: TagClass::Svg
            }
        );
    }

    #[test]
    fn span_containment() {
        let outer = Span::new(4, 20);
        assert!(outer.contains(Span::new(4, 20)));
        assert!(outer.contains(Span::new(10, 12)));
        assert!(!outer.contains(Span::new(2, 12)));
        assert_eq!(Span::new(4, 7).source_text("let foo = 1;"), "foo");
    }
}
