//! Rendering of graphql-js schema objects.

use super::INDENT;
use super::header;
use crate::config::GeneratorConfig;
use crate::schema_object::{JsExpr, RESOLVE_FUNCTION_PARAMS, SchemaObject};

/// Renders schema objects as a TypeScript source file.
///
/// Each object becomes an exported constant annotated with its class, so
/// thunks referring back to the constant do not need type inference.
#[must_use]
pub fn render_schema_objects(objects: &[SchemaObject], config: &GeneratorConfig) -> String {
    let mut output = String::new();
    header::write_banner(&mut output, config);

    for object in objects {
        output.push('\n');
        output.push_str(&format!(
            "export const {}: {} = ",
            object.name,
            object.class.class_name()
        ));
        write_expr(&mut output, &object.initializer(), 0);
        output.push_str(";\n");
    }
    output
}

/// Renders one expression at top level.
#[must_use]
pub fn render_js_expr(expr: &JsExpr) -> String {
    let mut output = String::new();
    write_expr(&mut output, expr, 0);
    output
}

fn write_expr(output: &mut String, expr: &JsExpr, depth: usize) {
    match expr {
        JsExpr::Ident(text) | JsExpr::Literal(text) => output.push_str(text),
        JsExpr::Str(value) => output.push_str(&format!("{value:?}")),
        JsExpr::Array(items) => {
            output.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                write_expr(output, item, depth);
            }
            output.push(']');
        }
        JsExpr::Object(entries) => {
            if entries.is_empty() {
                output.push_str("{}");
                return;
            }
            output.push_str("{\n");
            for (key, value) in entries {
                output.push_str(&INDENT.repeat(depth + 1));
                output.push_str(key);
                output.push_str(": ");
                write_expr(output, value, depth + 1);
                output.push_str(",\n");
            }
            output.push_str(&INDENT.repeat(depth));
            output.push('}');
        }
        JsExpr::New { class, args } => {
            output.push_str(&format!("new {class}("));
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                write_expr(output, arg, depth);
            }
            output.push(')');
        }
        JsExpr::Thunk(inner) => {
            output.push_str("() => ");
            // An object body needs parentheses to not read as a block.
            if matches!(inner.as_ref(), JsExpr::Object(_)) {
                output.push('(');
                write_expr(output, inner, depth);
                output.push(')');
            } else {
                write_expr(output, inner, depth);
            }
        }
        JsExpr::StubFunction => {
            output.push_str(&format!(
                "function ({}) {{}}",
                RESOLVE_FUNCTION_PARAMS.join(", ")
            ));
        }
    }
}
