//! # gqltype Schema
//!
//! GraphQL schema document model and SDL front-end.
//!
//! This crate provides:
//! - Type references, fields, input values and the six definition kinds
//! - SDL parsing into an already-merged [`Document`]
//! - Recording of definitions the generator does not handle
//! - The entity resolver naming convention

pub mod error;
pub mod naming;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use naming::to_entity_resolver_name;
pub use parser::{parse_document, parse_document_file};
pub use types::{
    Argument, ConstValue, Definition, DefinitionKind, Document, EnumDef, EnumValue, Field,
    InputObjectDef, InputValue, InterfaceDef, ObjectDef, ScalarDef, TypeReference,
    UnhandledDefinition, UnionDef, is_root_operation_name,
};
