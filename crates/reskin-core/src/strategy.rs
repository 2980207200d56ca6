//! Per-target rewrite strategies.
//!
//! Each target maps to one static [`Strategy`] describing which rules are
//! active. The strategy is looked up once per module, not per node.

use crate::emit::Replacement;
use crate::node::{Context, Node};
use crate::rules::attribute::normalize_attribute;
use crate::rules::component::ComponentStyle;
use crate::rules::import::ImportRewrite;
use crate::target::LibraryTarget;

/// Outcome of offering a node to a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite<'s> {
    /// Reproduce the node as it is
    Keep,
    Replace(Replacement<'s>),
}

/// The set of rules applied for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub target: LibraryTarget,
    pub import: Option<ImportRewrite>,
    pub normalize_attributes: bool,
    pub components: Option<ComponentStyle>,
}

static REACT: Strategy = Strategy {
    target: LibraryTarget::React,
    import: None,
    normalize_attributes: false,
    components: None,
};

static PREACT: Strategy = Strategy {
    target: LibraryTarget::Preact,
    import: Some(ImportRewrite {
        module: "preact",
        default_binding: None,
        named: &["h"],
    }),
    normalize_attributes: true,
    components: None,
};

static VUE2: Strategy = Strategy {
    target: LibraryTarget::Vue2,
    import: Some(ImportRewrite {
        module: "vue",
        default_binding: Some("Vue"),
        named: &[],
    }),
    normalize_attributes: false,
    components: Some(ComponentStyle::Registration),
};

static VUE3: Strategy = Strategy {
    target: LibraryTarget::Vue3,
    import: Some(ImportRewrite {
        module: "vue",
        default_binding: Some("Vue"),
        named: &["h", "defineComponent"],
    }),
    normalize_attributes: false,
    components: Some(ComponentStyle::Definition),
};

pub(crate) fn lookup(target: LibraryTarget) -> &'static Strategy {
    match target {
        LibraryTarget::React => &REACT,
        LibraryTarget::Preact => &PREACT,
        LibraryTarget::Vue2 => &VUE2,
        LibraryTarget::Vue3 => &VUE3,
    }
}

impl Strategy {
    /// Decide what to do with `node`.
    pub fn rewrite<'s>(&self, node: &Node<'s>, context: Context<'s>) -> Rewrite<'s> {
        match node {
            Node::ImportDeclaration(decl) => match &self.import {
                Some(rule) => rule.apply(decl),
                None => Rewrite::Keep,
            },
            Node::FunctionDeclaration(func) => match self.components {
                Some(style) => style.apply(func),
                None => Rewrite::Keep,
            },
            Node::JsxAttribute(attr) if self.normalize_attributes => {
                normalize_attribute(attr, context)
            }
            Node::JsxAttribute(_) | Node::JsxOpeningElement(_) | Node::Other(_) => Rewrite::Keep,
        }
    }

    /// Whether this strategy never replaces anything.
    pub fn is_identity(&self) -> bool {
        self.import.is_none() && !self.normalize_attributes && self.components.is_none()
    }
}
