//! File prelude: header, imports, support types and the context interface.

use crate::config::GeneratorConfig;
use crate::declaration::{ENTITY_RESOLVER_NAME, RESOLVE_INFO_TYPE};

/// Import line for the `graphql` module.
pub const IMPORT_GRAPHQL: &str = "import * as graphql from \"graphql\";";

/// Local name of the imported user context type.
pub const IMPORTED_CONTEXT: &str = "IMPORTED_CONTEXT";

/// Returns the default generated-file header.
#[must_use]
pub fn default_header(version: &str) -> String {
    let rule = "// -------------------------------------------------------";
    format!(
        "{rule}\n\
         // THIS FILE WAS AUTOMATICALLY GENERATED (DO NOT MODIFY)\n\
         // gqltype (version {version})\n\
         {rule}"
    )
}

/// Writes the header and import lines.
pub(super) fn write_header(output: &mut String, config: &GeneratorConfig) {
    write_banner(output, config);

    if let Some(path) = &config.context_type_path {
        output.push_str(&format!(
            "import {} from \"{}\";\n",
            IMPORTED_CONTEXT,
            import_specifier(path)
        ));
    }
    output.push('\n');
}

/// Writes the file header followed by the `graphql` import.
pub(super) fn write_banner(output: &mut String, config: &GeneratorConfig) {
    match &config.file_header {
        Some(header) => output.push_str(header.trim_end()),
        None => output.push_str(&default_header(&config.tool_version)),
    }
    output.push_str("\n\n");
    output.push_str(IMPORT_GRAPHQL);
    output.push('\n');
}

/// Writes `Nullable`, `Promisable`, `GraphqlFieldResolver` and `Resolvable`.
pub(super) fn write_support_types(output: &mut String, config: &GeneratorConfig) {
    output.push_str("export type Nullable<T> = T | null | undefined;\n\n");
    output.push_str("export type Promisable<T> = T | Promise<T>;\n\n");

    output.push_str("export type GraphqlFieldResolver<TSource, TArgs, TResult> = (\n");
    output.push_str("  source: TSource,\n");
    output.push_str("  args: TArgs,\n");
    output.push_str(&format!("  context: {},\n", config.context_type_name));
    output.push_str(&format!("  info: {RESOLVE_INFO_TYPE}\n"));
    output.push_str(") => Promisable<TResult>;\n\n");

    output.push_str(
        "export type Resolvable<TSource, TResult> =\n  \
         | TResult\n  \
         | GraphqlFieldResolver<TSource, unknown, TResult>;\n\n",
    );
}

/// Writes the context interface.
pub(super) fn write_context(output: &mut String, config: &GeneratorConfig) {
    output.push_str(&format!("export interface {}", config.context_type_name));
    if config.context_type_path.is_some() {
        output.push_str(&format!(" extends {IMPORTED_CONTEXT}"));
    }
    output.push_str(" {\n");
    output.push_str(&format!("  entityResolver: {ENTITY_RESOLVER_NAME};\n"));
    output.push_str("}\n\n");
}

/// Module specifier for an import path: the `.ts` extension is dropped and
/// bare paths are made relative.
fn import_specifier(path: &str) -> String {
    let trimmed = path
        .strip_suffix(".ts")
        .or_else(|| path.strip_suffix(".TS"))
        .unwrap_or(path);
    if trimmed.starts_with('.') || trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("./{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_has_version() {
        let header = default_header("1.2.3");
        assert!(header.starts_with("// ---"));
        assert!(header.contains("DO NOT MODIFY"));
        assert!(header.contains("(version 1.2.3)"));
    }

    #[test]
    fn test_import_specifier() {
        assert_eq!(import_specifier("./context.ts"), "./context");
        assert_eq!(import_specifier("src/context"), "./src/context");
        assert_eq!(import_specifier("../shared/ctx"), "../shared/ctx");
        assert_eq!(import_specifier("/abs/ctx.ts"), "/abs/ctx");
    }

    #[test]
    fn test_context_interface_extends_import() {
        let mut output = String::new();
        let config = GeneratorConfig::new()
            .context_type_name("AppContext")
            .context_type_path("./ctx.ts");
        write_header(&mut output, &config);
        write_context(&mut output, &config);

        assert!(output.contains("import IMPORTED_CONTEXT from \"./ctx\";\n"));
        assert!(output.contains(
            "export interface AppContext extends IMPORTED_CONTEXT {\n  entityResolver: EntityResolver;\n}"
        ));
    }

    #[test]
    fn test_custom_header_replaces_default() {
        let mut output = String::new();
        let config = GeneratorConfig::new().file_header("/* mine */\n");
        write_header(&mut output, &config);

        assert!(output.starts_with("/* mine */\n\nimport * as graphql from \"graphql\";\n"));
        assert!(!output.contains("DO NOT MODIFY"));
    }
}
