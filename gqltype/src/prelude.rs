//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use gqltype::prelude::*;
//! ```

// Schema types
pub use gqltype_schema::{
    Definition, DefinitionKind, Document, ParseError, TypeReference, parse_document,
    parse_document_file, to_entity_resolver_name,
};

// Codegen types
pub use gqltype_codegen::typescript::{render, render_schema_objects};
pub use gqltype_codegen::{
    CodegenError, Declaration, DeclarationOrigin, Generated, Generator, GeneratorConfig, JsExpr,
    OrderingPolicy, OrderingStrategy, SchemaClass, SchemaObject, TargetExpr, TranslationMode,
    TypeTranslator, generate_declarations, generate_from_file, generate_from_sdl,
    generate_schema_objects_from_file, generate_schema_objects_from_sdl,
};

// Runtime types
pub use gqltype_runtime::{
    Context, DefaultFieldResolver, EntityResolverMap, FieldCall, FieldFn, FieldResolver,
    Resolution, ResolveInfo, Value, plan_resolution, resolve_field,
};
