//! # gqltype Codegen
//!
//! TypeScript declaration generation from GraphQL schema documents.
//!
//! This crate provides:
//! - Type expression translation with nullable, list, resolver and
//!   accessor wrapping
//! - Kind-priority and dependency-priority declaration ordering
//! - Declaration emission per definition kind, including synthesized
//!   argument declarations
//! - The aggregate `EntityResolver` and `Resolver` contracts
//! - TypeScript rendering of the emitted declarations
//! - graphql-js schema objects (`new graphql.GraphQLObjectType(...)` and
//!   friends) for the same document, as a second output

pub mod config;
pub mod declaration;
pub mod emit;
pub mod error;
pub mod generator;
pub mod order;
pub mod schema_object;
pub mod surface;
pub mod translate;
pub mod typescript;

pub use config::GeneratorConfig;
pub use declaration::{Declaration, DeclarationOrigin};
pub use emit::{DeclarationEmitter, SchemaObjectEmitter};
pub use error::CodegenError;
pub use generator::{Generated, Generator};
pub use order::{DependencyPriority, KindPriority, OrderingPolicy, OrderingStrategy};
pub use schema_object::{JsExpr, SchemaClass, SchemaObject};
pub use surface::{ResolverSurfaceBuilder, to_entity_resolver_name};
pub use translate::{TargetExpr, TranslationMode, TypeTranslator};

use gqltype_schema::Document;

/// Generates the declarations of a parsed document.
///
/// # Errors
/// Returns `CodegenError` if ordering or emission fails.
pub fn generate_declarations(
    document: &Document,
    config: &GeneratorConfig,
) -> Result<Generated, CodegenError> {
    Generator::new(document, config).generate()
}

/// Generates TypeScript declarations from an SDL string.
///
/// # Arguments
/// * `sdl` - GraphQL SDL content, already merged into one document
/// * `config` - Generator configuration
///
/// # Returns
/// Rendered TypeScript source.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_sdl(sdl: &str, config: &GeneratorConfig) -> Result<String, CodegenError> {
    let document = gqltype_schema::parse_document(sdl)?;
    let generated = generate_declarations(&document, config)?;
    Ok(typescript::render(&generated, config))
}

/// Generates TypeScript declarations from an SDL file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let sdl = std::fs::read_to_string(path)?;
    generate_from_sdl(&sdl, config)
}

/// Generates graphql-js schema objects from an SDL string.
///
/// # Returns
/// Rendered TypeScript source exporting one constant per definition.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_schema_objects_from_sdl(
    sdl: &str,
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let document = gqltype_schema::parse_document(sdl)?;
    let objects = Generator::new(&document, config).generate_schema_objects()?;
    Ok(typescript::render_schema_objects(&objects, config))
}

/// Generates graphql-js schema objects from an SDL file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_schema_objects_from_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let sdl = std::fs::read_to_string(path)?;
    generate_schema_objects_from_sdl(&sdl, config)
}
