//! # gqltype
//!
//! TypeScript declarations and default field resolution for GraphQL
//! schemas.
//!
//! A GraphQL SDL document is turned into TypeScript interfaces, enums and
//! aliases, together with an `EntityResolver` and a `Resolver` contract.
//! The runtime side implements the field resolution protocol those
//! declarations assume: a field is either a plain value, an accessor
//! function, or left to a context-level entity resolver.
//!
//! The same document can also be emitted as graphql-js schema objects
//! (`new graphql.GraphQLObjectType({...})` per definition) with
//! [`generate_schema_objects_from_sdl`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use gqltype::prelude::*;
//!
//! let sdl = "type Query { me: User }\ntype User { name: String }";
//! let typescript = generate_from_sdl(sdl, &GeneratorConfig::default())?;
//!
//! let context = Context::new().entity_resolver("User", FieldFn::sync(|_| Ok(Value::Null)));
//! let value = resolve_field(source, args, context, info).await?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema document model and SDL parsing
//! - [`codegen`] - Ordering, emission and TypeScript rendering
//! - [`runtime`] - Default field resolution

pub mod prelude;

/// Schema document model and SDL parsing.
pub mod schema {
    pub use gqltype_schema::*;
}

/// Declaration generation.
pub mod codegen {
    pub use gqltype_codegen::*;
}

/// Field resolution runtime.
pub mod runtime {
    pub use gqltype_runtime::*;
}

// Re-export commonly used items at the crate root
pub use gqltype_codegen::{
    CodegenError, Generated, GeneratorConfig, OrderingStrategy, SchemaObject,
    generate_declarations, generate_from_file, generate_from_sdl,
    generate_schema_objects_from_file, generate_schema_objects_from_sdl,
};
pub use gqltype_runtime::{Context, DefaultFieldResolver, ResolveInfo, Value, resolve_field};
pub use gqltype_schema::{Document, ParseError, parse_document};
