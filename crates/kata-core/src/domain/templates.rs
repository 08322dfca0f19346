//! File templates for a new kata.
//!
//! Every renderer is a pure function returning the full file text. Inputs
//! are interpolated as-is: kata and function names are already constrained
//! by their value objects, and the free-text description is trusted because
//! it comes from the person running the tool.

use crate::domain::value_objects::{FunctionName, KataName};

/// `src/<kata>.ts`: an exported stub with a placeholder body.
pub fn render_source(function: &FunctionName, description: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(description) = description {
        out.push_str(&format!("// {description}\n"));
    }
    out.push_str(&format!("export function {function}() {{\n"));
    out.push_str("  // TODO: implement\n");
    out.push_str("}\n");
    out
}

/// `src/<kata>.test.ts`: a vitest suite with one failing-by-design case.
pub fn render_test(function: &FunctionName, kata: &KataName, description: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("import { describe, it, expect } from 'vitest'\n");
    out.push_str(&format!("import {{ {function} }} from './{kata}'\n"));
    out.push('\n');
    if let Some(description) = description {
        out.push_str(&format!("// {description}\n"));
    }
    out.push_str(&format!("describe('{function}', () => {{\n"));
    out.push_str("  it('should ', () => {\n");
    out.push_str(&format!("    expect({function}()).toBe(undefined)\n"));
    out.push_str("  })\n");
    out.push_str("})\n");
    out
}

/// `KATA.md`: title, optional description, and an examples placeholder.
pub fn render_kata_doc(title: &str, description: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {title}\n\n"));
    if let Some(description) = description {
        out.push_str(&format!("{description}\n\n"));
    }
    out.push_str("## Examples\n\n");
    out.push_str("<!-- Add examples here -->\n");
    out
}

/// `src/main.ts`: mounts a heading into the page's `#app` element.
pub fn render_entry_point(title: &str) -> String {
    format!(
        r#"import './style.css'

document.querySelector<HTMLDivElement>('#app')!.innerHTML = `
  <div>
    <h1>{title}</h1>
  </div>
`
"#
    )
}

/// `src/style.css`: fixed presentation rules, independent of the kata.
pub fn render_stylesheet() -> String {
    STYLESHEET.to_owned()
}

const STYLESHEET: &str = r#":root {
  font-family: 'Inter', system-ui, Avenir, Helvetica, Arial, sans-serif;
  line-height: 1.5;
  font-weight: 400;
  color: #e2e8f0;
  background-color: #121212;
  font-synthesis: none;
  text-rendering: optimizeLegibility;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  margin: 0;
  display: flex;
  place-items: center;
  min-width: 320px;
  min-height: 100vh;
}

#app {
  max-width: 1280px;
  margin: 0 auto;
  padding: 2rem;
  text-align: center;
}

h1 {
  font-size: 3.2em;
  line-height: 1.1;
  color: #f8fafc;
}
"#;
