//! graphql-js schema object model.
//!
//! Besides the TypeScript declarations, a document can be turned into
//! `graphql` schema objects: one exported constant per definition holding
//! a `new graphql.GraphQLObjectType({...})` style constructor call. The
//! constructor configuration is kept as a small JavaScript expression tree
//! so the renderer only deals with layout.

use gqltype_schema::ConstValue;

/// Parameters of the stub resolve functions.
pub const RESOLVE_FUNCTION_PARAMS: [&str; 4] = ["source", "args", "context", "info"];

/// graphql-js type class a definition is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaClass {
    /// `GraphQLScalarType`.
    Scalar,
    /// `GraphQLEnumType`.
    Enum,
    /// `GraphQLInterfaceType`.
    Interface,
    /// `GraphQLObjectType`.
    Object,
    /// `GraphQLInputObjectType`.
    InputObject,
    /// `GraphQLUnionType`.
    Union,
}

impl SchemaClass {
    /// Returns the qualified class name, e.g. `graphql.GraphQLObjectType`.
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Scalar => "graphql.GraphQLScalarType",
            Self::Enum => "graphql.GraphQLEnumType",
            Self::Interface => "graphql.GraphQLInterfaceType",
            Self::Object => "graphql.GraphQLObjectType",
            Self::InputObject => "graphql.GraphQLInputObjectType",
            Self::Union => "graphql.GraphQLUnionType",
        }
    }
}

/// JavaScript expression used in constructor configurations.
#[derive(Debug, Clone, PartialEq)]
pub enum JsExpr {
    /// Identifier or member path, e.g. `User` or `graphql.GraphQLString`.
    Ident(String),
    /// String literal.
    Str(String),
    /// Number, boolean or `null` literal, written as is.
    Literal(String),
    /// `[a, b]`.
    Array(Vec<JsExpr>),
    /// `{ key: value }` with keys in insertion order.
    Object(Vec<(String, JsExpr)>),
    /// `new Class(args)`.
    New {
        /// Qualified class name.
        class: String,
        /// Constructor arguments.
        args: Vec<JsExpr>,
    },
    /// `() => expr`, deferring evaluation until the schema is built.
    Thunk(Box<JsExpr>),
    /// `function (source, args, context, info) {}`.
    StubFunction,
}

impl JsExpr {
    /// Creates an identifier.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Creates a `new` expression with one argument.
    #[must_use]
    pub fn new_instance(class: impl Into<String>, arg: JsExpr) -> Self {
        Self::New {
            class: class.into(),
            args: vec![arg],
        }
    }

    /// Wraps in a thunk.
    #[must_use]
    pub fn thunk(self) -> Self {
        Self::Thunk(Box::new(self))
    }

    /// Converts a default value literal.
    ///
    /// Enum values become their name as a string, which is the internal
    /// value the emitted enum types assign.
    #[must_use]
    pub fn from_const(value: &ConstValue) -> Self {
        match value {
            ConstValue::Null => Self::Literal("null".to_string()),
            ConstValue::Int(v) => Self::Literal(v.to_string()),
            ConstValue::Float(v) => Self::Literal(v.to_string()),
            ConstValue::Boolean(v) => Self::Literal(v.to_string()),
            ConstValue::String(v) | ConstValue::Enum(v) => Self::string(v),
            ConstValue::List(items) => Self::Array(items.iter().map(Self::from_const).collect()),
            ConstValue::Object(entries) => Self::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), Self::from_const(value)))
                    .collect(),
            ),
        }
    }
}

/// Builder for object expressions that skips absent entries.
#[derive(Debug, Default)]
pub struct ObjectBuilder {
    entries: Vec<(String, JsExpr)>,
}

impl ObjectBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    #[must_use]
    pub fn entry(mut self, key: impl Into<String>, value: JsExpr) -> Self {
        self.entries.push((key.into(), value));
        self
    }

    /// Adds an entry when a value is present.
    #[must_use]
    pub fn entry_opt(self, key: impl Into<String>, value: Option<JsExpr>) -> Self {
        match value {
            Some(value) => self.entry(key, value),
            None => self,
        }
    }

    /// Adds a `description` entry when present.
    #[must_use]
    pub fn description(self, description: Option<&str>) -> Self {
        self.entry_opt("description", description.map(JsExpr::string))
    }

    /// Returns true if no entry was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finishes the object expression.
    #[must_use]
    pub fn build(self) -> JsExpr {
        JsExpr::Object(self.entries)
    }
}

/// One exported schema object.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaObject {
    /// Constant name; equal to the definition name.
    pub name: String,
    /// Constructed class.
    pub class: SchemaClass,
    /// Constructor configuration object.
    pub config: JsExpr,
}

impl SchemaObject {
    /// Returns the `new Class(config)` initializer.
    #[must_use]
    pub fn initializer(&self) -> JsExpr {
        JsExpr::new_instance(self.class.class_name(), self.config.clone())
    }

    /// Looks up a top-level configuration entry.
    #[must_use]
    pub fn config_entry(&self, key: &str) -> Option<&JsExpr> {
        match &self.config {
            JsExpr::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_const_values() {
        let value = ConstValue::List(vec![
            ConstValue::Int(3),
            ConstValue::Enum("ASC".to_string()),
            ConstValue::Null,
        ]);
        assert_eq!(
            JsExpr::from_const(&value),
            JsExpr::Array(vec![
                JsExpr::Literal("3".to_string()),
                JsExpr::string("ASC"),
                JsExpr::Literal("null".to_string()),
            ])
        );
        assert_eq!(
            JsExpr::from_const(&ConstValue::Boolean(false)),
            JsExpr::Literal("false".to_string())
        );
    }

    #[test]
    fn test_object_builder_skips_absent_entries() {
        let expr = ObjectBuilder::new()
            .entry("name", JsExpr::string("User"))
            .description(None)
            .entry_opt("interfaces", None)
            .build();
        assert_eq!(
            expr,
            JsExpr::Object(vec![("name".to_string(), JsExpr::string("User"))])
        );
        assert!(ObjectBuilder::new().is_empty());
    }

    #[test]
    fn test_schema_object_initializer() {
        let object = SchemaObject {
            name: "Date".to_string(),
            class: SchemaClass::Scalar,
            config: ObjectBuilder::new().entry("name", JsExpr::string("Date")).build(),
        };

        assert_eq!(object.config_entry("name"), Some(&JsExpr::string("Date")));
        assert!(object.config_entry("description").is_none());
        assert!(matches!(
            object.initializer(),
            JsExpr::New { ref class, .. } if class == "graphql.GraphQLScalarType"
        ));
    }
}
