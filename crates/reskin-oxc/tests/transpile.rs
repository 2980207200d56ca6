use std::path::Path;

use pretty_assertions::assert_eq;
use reskin_core::{LibraryTarget, ParserOptions};
use reskin_oxc::transpile;

fn tsx() -> ParserOptions {
    ParserOptions::for_path(Path::new("Component.tsx"))
}

fn run(source: &str, target: LibraryTarget) -> String {
    let output = transpile(source, target, &tsx()).unwrap();
    assert!(
        output.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        output.diagnostics
    );
    output.output_text
}

const SIMPLE_COMPONENT: &str = r#"import React from 'react';
export default function Component() {
  return <div>hello world</div>;
}
"#;

#[test]
fn react_target_reproduces_source() {
    assert_eq!(run(SIMPLE_COMPONENT, LibraryTarget::React), SIMPLE_COMPONENT);
}

#[test]
fn react_target_ignores_everything_rewritable() {
    let source = r#"import React from "react";
export function Field() {
  return <svg><circle strokeWidth={2} onChange={f} /></svg>;
}
"#;
    assert_eq!(run(source, LibraryTarget::React), source);
}

#[test]
fn import_quote_style_is_preserved_for_every_target() {
    let cases = [
        (LibraryTarget::Preact, "import { h } from 'preact';", "import { h } from \"preact\";"),
        (LibraryTarget::Vue2, "import Vue from 'vue';", "import Vue from \"vue\";"),
        (
            LibraryTarget::Vue3,
            "import Vue, { h, defineComponent } from 'vue';",
            "import Vue, { h, defineComponent } from \"vue\";",
        ),
    ];

    for (target, single, double) in cases {
        assert_eq!(run("import React from 'react';\n", target), format!("{single}\n"));
        assert_eq!(run("import React from \"react\";\n", target), format!("{double}\n"));
    }
}

#[test]
fn missing_semicolon_is_not_added() {
    assert_eq!(
        run("import React from 'react'\n", LibraryTarget::Preact),
        "import { h } from 'preact'\n"
    );
}

#[test]
fn other_imports_pass_through() {
    let source = "import { render } from 'react-dom';\nimport styles from './react.css';\n";
    assert_eq!(run(source, LibraryTarget::Preact), source);
    assert_eq!(run(source, LibraryTarget::Vue3), source);
}

#[test]
fn preact_renames_on_change_on_native_elements() {
    let source = r#"import React from 'react';
export function Form({ update }) {
  return (
    <form>
      <div>
        <input value={name} onChange={update} />
      </div>
    </form>
  );
}
"#;
    let expected = r#"import { h } from 'preact';
export function Form({ update }) {
  return (
    <form>
      <div>
        <input value={name} onInput={update} />
      </div>
    </form>
  );
}
"#;
    assert_eq!(run(source, LibraryTarget::Preact), expected);
}

#[test]
fn preact_leaves_component_attributes_alone() {
    let source = "const a = <Select onChange={pick} render={() => <select onChange={pick} />} />;\n";
    let expected =
        "const a = <Select onChange={pick} render={() => <select onInput={pick} />} />;\n";
    assert_eq!(run(source, LibraryTarget::Preact), expected);
}

#[test]
fn preact_kebab_cases_svg_primitives_only() {
    let source = r#"const icon = (
  <svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
    <circle cx="12" strokeWidth="2" fillOpacity={0.5} />
    <Circle strokeWidth="2" />
    <Svg viewBox="0 0 1 1" />
  </svg>
);
"#;
    let expected = r#"const icon = (
  <svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
    <circle cx="12" stroke-width="2" fill-opacity={0.5} />
    <Circle strokeWidth="2" />
    <Svg viewBox="0 0 1 1" />
  </svg>
);
"#;
    assert_eq!(run(source, LibraryTarget::Preact), expected);
}

#[test]
fn vue2_registers_default_exported_component() {
    let source = "import React from \"react\";\nexport default function Foo() { return <div/>; }\n";
    let expected = "import Vue from \"vue\";\nexport default Vue.component(\"foo\", { render(createElement) { return <div/>; } });\n";
    assert_eq!(run(source, LibraryTarget::Vue2), expected);
}

#[test]
fn vue3_defines_default_exported_component() {
    let source = "import React from \"react\";\nexport default function Foo() { return <div/>; }\n";
    let expected = "import Vue, { h, defineComponent } from \"vue\";\nexport default defineComponent(function Foo() { return () => { return <div/>; }; });\n";
    assert_eq!(run(source, LibraryTarget::Vue3), expected);
}

#[test]
fn vue3_keeps_signature_on_render_function() {
    let source = "export function UserCard(props: CardProps): JSX.Element {\n  return <div>{props.name}</div>;\n}\n";
    let expected = "export const UserCard = defineComponent(function UserCard() { return (props: CardProps): JSX.Element => {\n  return <div>{props.name}</div>;\n}; });\n";
    assert_eq!(run(source, LibraryTarget::Vue3), expected);
}

#[test]
fn vue2_wraps_unexported_and_nested_components() {
    let source = r#"function Outer() {
  function Inner() { return <span />; }
  return <Inner />;
}
"#;
    let expected = r#"Vue.component("outer", { render(createElement) {
  Vue.component("inner", { render(createElement) { return <span />; } });
  return <Inner />;
} });
"#;
    assert_eq!(run(source, LibraryTarget::Vue2), expected);
}

#[test]
fn vue_targets_skip_lowercase_functions_and_attributes() {
    let source = "function helper() { return <input onChange={f} />; }\n";
    assert_eq!(run(source, LibraryTarget::Vue2), source);
    assert_eq!(run(source, LibraryTarget::Vue3), source);
}

#[test]
fn react_pass_over_preact_output_is_a_no_op() {
    let source = "import React from 'react';\nconst a = <input onChange={f} />;\n";
    let preact = run(source, LibraryTarget::Preact);

    assert_eq!(run(&preact, LibraryTarget::React), preact);
    assert_eq!(run(&preact, LibraryTarget::Preact), preact);
}

#[test]
fn plain_javascript_is_supported() {
    let options = ParserOptions::for_path(Path::new("App.jsx"));
    let output = transpile(
        "import React from 'react';\nexport default function App() { return <input onChange={f} />; }\n",
        LibraryTarget::Preact,
        &options,
    )
    .unwrap();

    assert_eq!(
        output.output_text,
        "import { h } from 'preact';\nexport default function App() { return <input onInput={f} />; }\n"
    );
}

#[test]
fn plain_typescript_parses_angle_brackets_as_types() {
    let source = "import React from 'react';\nexport const id = <T>(x: T) => x;\nconst n = <number>value;\n";
    let output = transpile(
        source,
        LibraryTarget::Preact,
        &ParserOptions::for_path(Path::new("util.ts")),
    )
    .unwrap();

    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_eq!(
        output.output_text,
        "import { h } from 'preact';\nexport const id = <T>(x: T) => x;\nconst n = <number>value;\n"
    );
}

#[test]
fn vue3_generic_component_output_parses_as_tsx() {
    let source = "export default function List<T>(props: { items: T[] }) { return <ul />; }\n";
    let output = run(source, LibraryTarget::Vue3);

    assert_eq!(
        output,
        "export default defineComponent(function List() { return <T,>(props: { items: T[] }) => { return <ul />; }; });\n"
    );
    assert_eq!(run(&output, LibraryTarget::React), output);
}

#[test]
fn async_components_keep_await_valid() {
    let source = "export async function Feed() {\n  const items = await load();\n  return <ul>{items}</ul>;\n}\n";

    let vue2 = run(source, LibraryTarget::Vue2);
    assert_eq!(
        vue2,
        "export const Feed = Vue.component(\"feed\", { async render(createElement) {\n  const items = await load();\n  return <ul>{items}</ul>;\n} });\n"
    );
    assert_eq!(run(&vue2, LibraryTarget::React), vue2);

    let vue3 = run(source, LibraryTarget::Vue3);
    assert_eq!(
        vue3,
        "export const Feed = defineComponent(function Feed() { return async () => {\n  const items = await load();\n  return <ul>{items}</ul>;\n}; });\n"
    );
    assert_eq!(run(&vue3, LibraryTarget::React), vue3);
}

#[test]
fn generator_components_are_left_alone() {
    let source = "function* Steps() { yield <li />; }\n";
    assert_eq!(run(source, LibraryTarget::Vue2), source);
    assert_eq!(run(source, LibraryTarget::Vue3), source);
}

#[test]
fn component_overload_signatures_are_dropped() {
    let source = r#"export function Label(text: string): JSX.Element;
export function Label(count: number): JSX.Element;
export function Label(value: string | number): JSX.Element {
  return <span>{value}</span>;
}
declare function Slot(): JSX.Element;
"#;
    let expected = r#"

export const Label = defineComponent(function Label() { return (value: string | number): JSX.Element => {
  return <span>{value}</span>;
}; });
declare function Slot(): JSX.Element;
"#;
    let output = run(source, LibraryTarget::Vue3);

    assert_eq!(output, expected);
    assert_eq!(run(&output, LibraryTarget::React), output);
}

#[test]
fn syntax_errors_are_reported() {
    match transpile("let = ;\n", LibraryTarget::Preact, &tsx()) {
        Ok(output) => {
            assert!(output.emit_skipped());
            assert!(!output.diagnostics.is_empty());
        }
        Err(failure) => assert!(!failure.diagnostics.is_empty()),
    }
}
