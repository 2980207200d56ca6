//! Attribute naming rules for Preact.
//!
//! Preact listens for `input` where React synthesizes `onChange`, and SVG
//! primitives take their presentation attributes in kebab-case.

use crate::case::kebab_case;
use crate::emit::Replacement;
use crate::node::{Context, JsxAttribute};
use crate::strategy::Rewrite;
use crate::tables::TagClass;

const CHANGE_EVENT: &str = "onChange";
const INPUT_EVENT: &str = "onInput";
const SVG_ROOT: &str = "svg";

/// Rename an attribute of a native element.
///
/// Attributes of custom components are never touched, and neither are the
/// attributes of the root `<svg>` element itself.
pub fn normalize_attribute<'s>(attr: &JsxAttribute<'s>, context: Context<'s>) -> Rewrite<'s> {
    let Context::Element { tag, class } = context else {
        return Rewrite::Keep;
    };
    if !class.is_native() {
        return Rewrite::Keep;
    }

    if attr.name == CHANGE_EVENT {
        return rename(attr, INPUT_EVENT.to_string());
    }

    if class == TagClass::Svg && tag != SVG_ROOT {
        let kebab = kebab_case(attr.name);
        if kebab != attr.name {
            return rename(attr, kebab);
        }
    }

    Rewrite::Keep
}

fn rename<'s>(attr: &JsxAttribute<'s>, name: String) -> Rewrite<'s> {
    tracing::trace!(from = attr.name, to = %name, "renaming attribute");
    Rewrite::Replace(Replacement::AttributeName(name))
}
