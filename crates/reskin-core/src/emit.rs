//! Replacement nodes and the printer that splices them into the source.
//!
//! The printer never reformats. Text outside an edit is copied byte for byte,
//! and a replacement can embed a range of the original source (a function
//! body) which is printed with the edits nested inside it applied.

use std::borrow::Cow;

use crate::node::{ExportKind, Quote, Span};
use crate::rules::component::{ComponentForm, RENDER_PARAM};
use crate::rules::import::ImportRewrite;

/// A piece of printed output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// A range of the original source, printed with its own rewrites
    Source(Span),
}

/// Replacement import declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReplacement {
    pub rewrite: ImportRewrite,
    pub quote: Quote,
    pub terminated: bool,
}

/// Replacement for a component function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentReplacement<'s> {
    pub name: &'s str,
    pub export: ExportKind,
    pub form: ComponentForm<'s>,
    pub body: Span,
    pub is_async: bool,
}

/// A newly constructed node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement<'s> {
    Import(ImportReplacement),
    AttributeName(String),
    Component(ComponentReplacement<'s>),
    /// The node is dropped from the output
    Removed,
}

impl Replacement<'_> {
    /// Print this node.
    pub fn segments(&self) -> Vec<Segment> {
        match self {
            Replacement::Import(import) => vec![Segment::Text(print_import(import))],
            Replacement::AttributeName(name) => vec![Segment::Text(name.clone())],
            Replacement::Component(component) => component_segments(component),
            Replacement::Removed => Vec::new(),
        }
    }
}

fn print_import(import: &ImportReplacement) -> String {
    let rewrite = &import.rewrite;
    let mut clause = Vec::new();
    if let Some(default) = rewrite.default_binding {
        clause.push(default.to_string());
    }
    if !rewrite.named.is_empty() {
        clause.push(format!("{{ {} }}", rewrite.named.join(", ")));
    }

    let semicolon = if import.terminated { ";" } else { "" };
    format!(
        "import {} from {}{semicolon}",
        clause.join(", "),
        import.quote.quote(rewrite.module)
    )
}

fn component_segments(component: &ComponentReplacement<'_>) -> Vec<Segment> {
    let prefix = match component.export {
        ExportKind::None => String::new(),
        ExportKind::Named => format!("export const {} = ", component.name),
        ExportKind::Default => "export default ".to_string(),
    };

    let asyncness = if component.is_async { "async " } else { "" };

    match &component.form {
        ComponentForm::Registration { tag } => vec![
            Segment::Text(format!(
                "{prefix}Vue.component({}, {{ {asyncness}render({RENDER_PARAM}) ",
                Quote::Double.quote(tag)
            )),
            Segment::Source(component.body),
            Segment::Text(" });".to_string()),
        ],
        ComponentForm::Definition {
            type_parameters,
            params,
            return_type,
        } => {
            let return_type = return_type
                .map(|ty| format!(": {ty}"))
                .unwrap_or_default();
            vec![
                Segment::Text(format!(
                    "{prefix}defineComponent(function {}() {{ return {asyncness}{}{}{return_type} => ",
                    component.name,
                    type_parameters.map(arrow_type_parameters).unwrap_or_default(),
                    parenthesized(params),
                )),
                Segment::Source(component.body),
                Segment::Text("; });".to_string()),
            ]
        }
    }
}

/// `<T>` on an arrow reads as a JSX tag in `.tsx`; `<T,>` parses either way.
fn arrow_type_parameters(list: &str) -> Cow<'_, str> {
    let list = list.trim();
    let inner = list
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(list)
        .trim_end();

    if inner.ends_with(',') {
        Cow::Borrowed(list)
    } else {
        Cow::Owned(format!("<{inner},>"))
    }
}

fn parenthesized(params: &str) -> Cow<'_, str> {
    let params = params.trim();
    if params.starts_with('(') {
        Cow::Borrowed(params)
    } else {
        Cow::Owned(format!("({params})"))
    }
}

/// A replacement together with the span it overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit<'s> {
    pub span: Span,
    pub replacement: Replacement<'s>,
}

/// Print `source` with every edit applied.
///
/// Edits must nest like the tree they came from: two edits either do not
/// overlap or one contains the other. An edit inside another is only printed
/// if it falls within a [`Segment::Source`] range of the outer replacement.
pub fn print(source: &str, mut edits: Vec<Edit<'_>>) -> String {
    edits.sort_by(|a, b| {
        a.span
            .start
            .cmp(&b.span.start)
            .then(b.span.end.cmp(&a.span.end))
    });

    let mut out = String::with_capacity(source.len());
    render(source, &edits, Span::new(0, source.len() as u32), &mut out);
    out
}

fn render(source: &str, edits: &[Edit<'_>], range: Span, out: &mut String) {
    let mut cursor = range.start;

    for edit in edits {
        if edit.span.start >= range.end {
            break;
        }
        if edit.span.start < cursor || edit.span.end > range.end {
            continue;
        }

        out.push_str(&source[cursor as usize..edit.span.start as usize]);
        for segment in edit.replacement.segments() {
            match segment {
                Segment::Text(text) => out.push_str(&text),
                Segment::Source(inner) => render(source, edits, inner, out),
            }
        }
        cursor = edit.span.end;
    }

    out.push_str(&source[cursor as usize..range.end as usize]);
}
