//! Execution context and field metadata.

use crate::value::{FieldFn, Value};
use gqltype_schema::{TypeReference, to_entity_resolver_name};
use indexmap::IndexMap;
use std::sync::Arc;

/// Entity resolvers keyed by method name (`resolveUser`, ...).
pub type EntityResolverMap = IndexMap<String, FieldFn>;

/// Per-request context shared by every field resolution.
///
/// The entity resolver table is owned by the caller and only read here.
#[derive(Debug, Clone, Default)]
pub struct Context {
    entity_resolver: Arc<EntityResolverMap>,
    data: Value,
}

impl Context {
    /// Creates a context without entity resolvers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context from an existing entity resolver table.
    #[must_use]
    pub fn from_entity_resolver(entity_resolver: Arc<EntityResolverMap>) -> Self {
        Self {
            entity_resolver,
            data: Value::Null,
        }
    }

    /// Registers the entity resolver of a type under its conventional name.
    ///
    /// # Arguments
    /// * `type_name` - Type the resolver produces, e.g. `User`
    /// * `resolver` - Function invoked with the field call
    #[must_use]
    pub fn entity_resolver(mut self, type_name: &str, resolver: FieldFn) -> Self {
        Arc::make_mut(&mut self.entity_resolver)
            .insert(to_entity_resolver_name(type_name), resolver);
        self
    }

    /// Sets application data carried by the context.
    #[must_use]
    pub fn data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Looks up an entity resolver by method name.
    #[must_use]
    pub fn get_entity_resolver(&self, name: &str) -> Option<&FieldFn> {
        self.entity_resolver.get(name)
    }

    /// Returns the entity resolver table.
    #[must_use]
    pub fn entity_resolvers(&self) -> &EntityResolverMap {
        &self.entity_resolver
    }

    /// Returns the application data.
    #[must_use]
    pub fn app_data(&self) -> &Value {
        &self.data
    }
}

/// Metadata about the field being resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveInfo {
    /// Field name.
    pub field_name: String,
    /// Name of the type declaring the field.
    pub parent_type: String,
    /// Declared return type.
    pub return_type: TypeReference,
}

impl ResolveInfo {
    /// Creates field metadata.
    #[must_use]
    pub fn new(
        field_name: impl Into<String>,
        parent_type: impl Into<String>,
        return_type: TypeReference,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            parent_type: parent_type.into(),
            return_type,
        }
    }

    /// Entity resolver name for the field's return type.
    #[must_use]
    pub fn entity_resolver_name(&self) -> String {
        to_entity_resolver_name(self.return_type.named_type())
    }
}
