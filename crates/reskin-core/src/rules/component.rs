//! Reshapes function components for Vue.

use crate::case::kebab_case;
use crate::emit::{ComponentReplacement, Replacement};
use crate::node::FunctionDeclaration;
use crate::strategy::Rewrite;

/// Parameter name of the Vue 2 render function.
pub const RENDER_PARAM: &str = "createElement";

/// How a component is constructed in the target library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentStyle {
    /// Vue 2: `Vue.component("tag", { render() {} })`
    Registration,
    /// Vue 3: `defineComponent(function Name() { return () => {} })`
    Definition,
}

/// Target-specific parts of a component replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentForm<'s> {
    Registration {
        tag: String,
    },
    Definition {
        type_parameters: Option<&'s str>,
        params: &'s str,
        return_type: Option<&'s str>,
    },
}

/// Whether a declared name looks like a component.
///
/// This is purely syntactic: any capitalized function is treated as a
/// component, including helpers that merely happen to be capitalized.
pub fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

impl ComponentStyle {
    /// Wrap `func` if it is a component with a body.
    ///
    /// Overload signatures of a component are removed, as the declaration
    /// they belong to no longer exists after wrapping. Generators are kept:
    /// neither form has a generator render function.
    pub fn apply<'s>(self, func: &FunctionDeclaration<'s>) -> Rewrite<'s> {
        let Some(name) = func.name.filter(|name| is_component_name(name)) else {
            return Rewrite::Keep;
        };
        if func.generator || func.declare {
            return Rewrite::Keep;
        }
        let Some(body) = func.body else {
            tracing::debug!(component = name, "dropping overload signature");
            return Rewrite::Replace(Replacement::Removed);
        };

        let form = match self {
            Self::Registration => ComponentForm::Registration {
                tag: kebab_case(name),
            },
            Self::Definition => ComponentForm::Definition {
                type_parameters: func.type_parameters,
                params: func.params,
                return_type: func.return_type,
            },
        };

        tracing::debug!(component = name, style = ?self, "wrapping component");
        Rewrite::Replace(Replacement::Component(ComponentReplacement {
            name,
            export: func.export,
            form,
            body,
            is_async: func.is_async,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ExportKind, Span};

    fn function(name: Option<&str>) -> FunctionDeclaration<'_> {
        FunctionDeclaration {
            span: Span::new(0, 40),
            name,
            type_parameters: None,
            params: "(props)",
            return_type: None,
            body: Some(Span::new(20, 40)),
            export: ExportKind::Default,
            is_async: false,
            generator: false,
            declare: false,
        }
    }

    #[test]
    fn detects_component_names() {
        assert!(is_component_name("Foo"));
        assert!(is_component_name("MyButton"));
        assert!(!is_component_name("useThing"));
        assert!(!is_component_name("_Private"));
        assert!(!is_component_name(""));
    }

    #[test]
    fn registration_uses_kebab_tag() {
        let rewrite = ComponentStyle::Registration.apply(&function(Some("MyButton")));

        let Rewrite::Replace(Replacement::Component(component)) = rewrite else {
            panic!("expected a component replacement");
        };
        assert_eq!(component.name, "MyButton");
        assert_eq!(component.export, ExportKind::Default);
        assert_eq!(
            component.form,
            ComponentForm::Registration {
                tag: "my-button".to_string()
            }
        );
        assert_eq!(component.body, Span::new(20, 40));
    }

    #[test]
    fn definition_carries_signature() {
        let rewrite = ComponentStyle::Definition.apply(&function(Some("Card")));

        let Rewrite::Replace(Replacement::Component(component)) = rewrite else {
            panic!("expected a component replacement");
        };
        assert_eq!(
            component.form,
            ComponentForm::Definition {
                type_parameters: None,
                params: "(props)",
                return_type: None,
            }
        );
    }

    #[test]
    fn keeps_non_components() {
        assert_eq!(
            ComponentStyle::Definition.apply(&function(Some("helper"))),
            Rewrite::Keep
        );
        assert_eq!(ComponentStyle::Definition.apply(&function(None)), Rewrite::Keep);

        let mut generator = function(Some("Items"));
        generator.generator = true;
        assert_eq!(ComponentStyle::Definition.apply(&generator), Rewrite::Keep);

        let mut ambient = function(Some("Foo"));
        ambient.body = None;
        ambient.declare = true;
        assert_eq!(ComponentStyle::Registration.apply(&ambient), Rewrite::Keep);
    }

    #[test]
    fn removes_component_overload_signatures() {
        let mut signature = function(Some("Foo"));
        signature.body = None;
        assert_eq!(
            ComponentStyle::Registration.apply(&signature),
            Rewrite::Replace(Replacement::Removed)
        );

        signature.name = Some("helper");
        assert_eq!(ComponentStyle::Definition.apply(&signature), Rewrite::Keep);
    }

    #[test]
    fn async_flag_is_carried() {
        let mut func = function(Some("Feed"));
        func.is_async = true;

        let Rewrite::Replace(Replacement::Component(component)) =
            ComponentStyle::Definition.apply(&func)
        else {
            panic!("expected a component replacement");
        };
        assert!(component.is_async);
    }
}
