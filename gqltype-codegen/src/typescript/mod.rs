//! TypeScript rendering of generated declarations and schema objects.

mod header;
mod schema_objects;

pub use header::{IMPORT_GRAPHQL, IMPORTED_CONTEXT, default_header};
pub use schema_objects::{render_js_expr, render_schema_objects};

use crate::config::GeneratorConfig;
use crate::declaration::{
    AliasDecl, Declaration, ENTITY_RESOLVER_NAME, EnumDecl, Member, MethodMember, PropertyMember,
    StructureDecl,
};
use crate::generator::Generated;
use gqltype_schema::ConstValue;

const INDENT: &str = "  ";

/// Renders a generation result as a TypeScript source file.
#[must_use]
pub fn render(generated: &Generated, config: &GeneratorConfig) -> String {
    let mut output = String::new();
    header::write_header(&mut output, config);
    header::write_support_types(&mut output, config);
    header::write_context(&mut output, config);
    // The context interface always names the entity resolver contract.
    if generated.get(ENTITY_RESOLVER_NAME).is_none() {
        output.push_str(&format!("export interface {ENTITY_RESOLVER_NAME} {{}}\n\n"));
    }

    for declaration in &generated.declarations {
        output.push_str(&render_declaration(declaration));
        output.push('\n');
    }

    // Exactly one trailing newline.
    while output.ends_with("\n\n") {
        output.pop();
    }
    output
}

/// Renders a single declaration, including its doc comment.
#[must_use]
pub fn render_declaration(declaration: &Declaration) -> String {
    let mut output = String::new();
    write_doc(&mut output, "", declaration.description(), None);
    match declaration {
        Declaration::Alias(alias) => write_alias(&mut output, alias),
        Declaration::Enum(enum_decl) => write_enum(&mut output, enum_decl),
        Declaration::Structure(structure) => write_structure(&mut output, structure),
    }
    output
}

fn write_alias(output: &mut String, alias: &AliasDecl) {
    output.push_str(&format!("export type {} = {};\n", alias.name, alias.target));
}

fn write_enum(output: &mut String, enum_decl: &EnumDecl) {
    output.push_str(&format!("export enum {} {{\n", enum_decl.name));
    for member in &enum_decl.members {
        write_doc(output, INDENT, member.description.as_deref(), None);
        output.push_str(&format!("{INDENT}{} = {:?},\n", member.name, member.value));
    }
    output.push_str("}\n");
}

fn write_structure(output: &mut String, structure: &StructureDecl) {
    output.push_str(&format!("export interface {}", structure.name));
    if !structure.extends.is_empty() {
        let extends: Vec<String> = structure.extends.iter().map(ToString::to_string).collect();
        output.push_str(&format!(" extends {}", extends.join(", ")));
    }

    if structure.members.is_empty() {
        output.push_str(" {}\n");
        return;
    }

    output.push_str(" {\n");
    for member in &structure.members {
        match member {
            Member::Property(property) => write_property(output, property),
            Member::Method(method) => write_method(output, method),
        }
    }
    output.push_str("}\n");
}

fn write_property(output: &mut String, property: &PropertyMember) {
    write_doc(
        output,
        INDENT,
        property.description.as_deref(),
        property.default_value.as_ref(),
    );
    output.push_str(&format!(
        "{INDENT}{}{}: {};\n",
        property.name,
        optional_marker(property.optional),
        property.ty
    ));
}

fn write_method(output: &mut String, method: &MethodMember) {
    write_doc(output, INDENT, method.description.as_deref(), None);
    let params: Vec<String> = method
        .params
        .iter()
        .map(|param| format!("{}: {}", param.name, param.ty))
        .collect();

    let signature_start = format!(
        "{INDENT}{}{}(",
        method.name,
        optional_marker(method.optional)
    );
    if params.is_empty() {
        output.push_str(&format!("{signature_start}): {};\n", method.returns));
    } else {
        output.push_str(&signature_start);
        output.push('\n');
        for param in &params {
            output.push_str(&format!("{INDENT}{INDENT}{param},\n"));
        }
        output.push_str(&format!("{INDENT}): {};\n", method.returns));
    }
}

const fn optional_marker(optional: bool) -> &'static str {
    if optional { "?" } else { "" }
}

/// Writes a JSDoc block for a description and optional default value.
fn write_doc(
    output: &mut String,
    indent: &str,
    description: Option<&str>,
    default_value: Option<&ConstValue>,
) {
    let mut lines: Vec<String> = description
        .map(|text| text.lines().map(|line| line.replace("*/", "*\\/")).collect())
        .unwrap_or_default();
    if let Some(value) = default_value {
        lines.push(format!("@default {value}"));
    }

    match lines.as_slice() {
        [] => {}
        [single] => output.push_str(&format!("{indent}/** {single} */\n")),
        _ => {
            output.push_str(&format!("{indent}/**\n"));
            for line in &lines {
                if line.is_empty() {
                    output.push_str(&format!("{indent} *\n"));
                } else {
                    output.push_str(&format!("{indent} * {line}\n"));
                }
            }
            output.push_str(&format!("{indent} */\n"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;
    use gqltype_schema::parse_document;

    fn render_sdl(sdl: &str, config: &GeneratorConfig) -> String {
        let doc = parse_document(sdl).expect("Failed to parse");
        let generated = Generator::new(&doc, config)
            .generate()
            .expect("Failed to generate");
        render(&generated, config)
    }

    #[test]
    fn test_render_prelude() {
        let output = render_sdl(
            "scalar Date\nenum Role { ADMIN }",
            &GeneratorConfig::new().tool_version("0.0.1"),
        );

        assert!(output.starts_with("// ---"));
        assert!(output.contains("// gqltype (version 0.0.1)\n"));
        assert!(output.contains("import * as graphql from \"graphql\";\n"));
        assert!(output.contains("export type Nullable<T> = T | null | undefined;\n"));
        assert!(output.contains("export type Promisable<T> = T | Promise<T>;\n"));
        assert!(output.contains("  context: GraphqlContext,\n"));
        assert!(output.contains("export interface GraphqlContext {\n"));
        assert!(output.contains("  entityResolver: EntityResolver;\n"));
        assert!(output.contains("export interface EntityResolver {}\n"));
        assert!(output.ends_with("export enum Role {\n  ADMIN = \"ADMIN\",\n}\n"));
    }

    #[test]
    fn test_render_declares_entity_resolver_once() {
        let output = render_sdl("type User { id: ID! }", &GeneratorConfig::default());
        assert_eq!(output.matches("export interface EntityResolver").count(), 1);
        assert!(!output.contains("export interface EntityResolver {}"));
    }

    #[test]
    fn test_render_enum_and_union() {
        let output = render_sdl(
            "enum Role { ADMIN MEMBER }\ntype User { id: ID! }\nunion Actor = User",
            &GeneratorConfig::default(),
        );

        assert!(output.contains("export enum Role {\n  ADMIN = \"ADMIN\",\n  MEMBER = \"MEMBER\",\n}\n"));
        assert!(output.contains("export type Actor = User;\n"));
    }

    #[test]
    fn test_render_object_with_arguments() {
        let sdl = r#"
            interface Node { id: ID! }
            "A registered user"
            type User implements Node {
              id: ID!
              posts("Page size" first: Int = 10): [String!]!
            }
        "#;
        let output = render_sdl(sdl, &GeneratorConfig::default());

        let expected_args = "export interface PostsArgs {\n  \
            /**\n   \
             * Page size\n   \
             * @default 10\n   \
             */\n  \
            first?: Nullable<number>;\n}\n";
        assert!(output.contains(expected_args), "{output}");

        let expected_user = "/** A registered user */\n\
            export interface User extends Node {\n  \
            __typename?: \"User\";\n  \
            id: string;\n  \
            posts(\n    \
            source: unknown,\n    \
            args: PostsArgs,\n    \
            context: GraphqlContext,\n    \
            info: graphql.GraphQLResolveInfo,\n  \
            ): Promisable<Array<string>>;\n}\n";
        assert!(output.contains(expected_user), "{output}");
    }

    #[test]
    fn test_render_contracts() {
        let sdl = "type Query { me: User }\ntype User { name: String }";
        let output = render_sdl(sdl, &GeneratorConfig::new().context_type_name("Ctx"));

        assert!(output.contains("export interface Query {\n  __typename?: \"Query\";\n  me(): Promisable<Nullable<User>>;\n}\n"));
        assert!(output.contains("  resolveUser?(\n"));
        assert!(output.contains("    context: Ctx,\n"));
        assert!(output.contains("  ): Promise<User | undefined>;\n"));
        assert!(output.ends_with("export interface Resolver extends Omit<Query, \"__typename\"> {}\n"));

        let entity = output.find("export interface EntityResolver").expect("EntityResolver");
        let resolver = output.find("export interface Resolver ").expect("Resolver");
        assert!(entity < resolver);
    }

    #[test]
    fn test_write_doc_escapes_comment_end() {
        let mut output = String::new();
        write_doc(&mut output, "", Some("ends */ here"), None);
        assert_eq!(output, "/** ends *\\/ here */\n");
    }
}
