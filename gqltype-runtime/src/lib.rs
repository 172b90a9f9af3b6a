//! # gqltype Runtime
//!
//! Default field resolution for schemas whose generated declarations allow
//! a field to be a plain value, an accessor function or left to a
//! context-level entity resolver.
//!
//! This crate provides:
//! - A dynamic [`Value`] model where functions are values
//! - The execution [`Context`] holding the entity resolver table
//! - [`plan_resolution`] to choose the accessor, delegate or value path
//! - [`resolve_field`] and [`DefaultFieldResolver`] to execute it

pub mod context;
pub mod resolver;
pub mod value;

pub use context::{Context, EntityResolverMap, ResolveInfo};
pub use gqltype_schema::to_entity_resolver_name;
pub use resolver::{DefaultFieldResolver, FieldResolver, Resolution, plan_resolution, resolve_field};
pub use value::{FieldCall, FieldFn, FieldFuture, Value};
