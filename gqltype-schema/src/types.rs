//! Schema document definitions.
//!
//! This module contains the data structures representing a GraphQL schema
//! document: type references, fields, input values and the six supported
//! definition kinds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Complete, already-merged schema document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Type definitions in document order.
    pub definitions: Vec<Definition>,
    /// Definitions of a kind the generator does not handle.
    pub unhandled: Vec<UnhandledDefinition>,
    /// Definition lookup map (built on insertion).
    definition_map: HashMap<String, usize>,
}

impl Document {
    /// Creates a new empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from a list of definitions.
    #[must_use]
    pub fn from_definitions(definitions: Vec<Definition>) -> Self {
        let mut document = Self {
            definitions,
            ..Self::default()
        };
        document.build_definition_map();
        document
    }

    /// Adds a definition to the document.
    pub fn add_definition(&mut self, definition: Definition) {
        let name = definition.name().to_string();
        let index = self.definitions.len();
        self.definitions.push(definition);
        self.definition_map.insert(name, index);
    }

    /// Records a definition that will be skipped during generation.
    pub fn add_unhandled(&mut self, unhandled: UnhandledDefinition) {
        self.unhandled.push(unhandled);
    }

    /// Looks up a definition by name.
    #[must_use]
    pub fn get_definition(&self, name: &str) -> Option<&Definition> {
        self.definition_map
            .get(name)
            .map(|&idx| &self.definitions[idx])
    }

    /// Returns true if a definition with the given name exists.
    #[must_use]
    pub fn has_definition(&self, name: &str) -> bool {
        self.definition_map.contains_key(name)
    }

    /// Returns an iterator over all definition names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(Definition::name)
    }

    /// Builds the lookup map from the definitions vector.
    pub fn build_definition_map(&mut self) {
        self.definition_map.clear();
        for (idx, definition) in self.definitions.iter().enumerate() {
            self.definition_map
                .insert(definition.name().to_string(), idx);
        }
    }
}

/// A top-level definition the generator does not handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnhandledDefinition {
    /// Kind label, e.g. `schema`, `directive`, `extend type`.
    pub kind: String,
    /// Name of the definition, when it has one.
    pub name: Option<String>,
}

impl UnhandledDefinition {
    /// Creates a new unhandled definition record.
    #[must_use]
    pub fn new(kind: impl Into<String>, name: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            name,
        }
    }
}

/// Kind of a type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefinitionKind {
    /// Custom scalar.
    Scalar,
    /// Enumeration.
    Enum,
    /// Object type.
    Object,
    /// Interface type.
    Interface,
    /// Input object type.
    InputObject,
    /// Union type.
    Union,
}

impl DefinitionKind {
    /// All supported kinds, in the default declaration order.
    pub const DEFAULT_ORDER: [Self; 6] = [
        Self::Scalar,
        Self::Enum,
        Self::Interface,
        Self::Object,
        Self::InputObject,
        Self::Union,
    ];

    /// Returns the SDL keyword of this kind.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Enum => "enum",
            Self::Object => "type",
            Self::Interface => "interface",
            Self::InputObject => "input",
            Self::Union => "union",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Type definition variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// Scalar definition.
    Scalar(ScalarDef),
    /// Enum definition.
    Enum(EnumDef),
    /// Object definition.
    Object(ObjectDef),
    /// Interface definition.
    Interface(InterfaceDef),
    /// Input object definition.
    InputObject(InputObjectDef),
    /// Union definition.
    Union(UnionDef),
}

impl Definition {
    /// Returns the name of the definition.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(d) => &d.name,
            Self::Enum(d) => &d.name,
            Self::Object(d) => &d.name,
            Self::Interface(d) => &d.name,
            Self::InputObject(d) => &d.name,
            Self::Union(d) => &d.name,
        }
    }

    /// Returns the description of the definition.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Scalar(d) => d.description.as_deref(),
            Self::Enum(d) => d.description.as_deref(),
            Self::Object(d) => d.description.as_deref(),
            Self::Interface(d) => d.description.as_deref(),
            Self::InputObject(d) => d.description.as_deref(),
            Self::Union(d) => d.description.as_deref(),
        }
    }

    /// Returns the kind of the definition.
    #[must_use]
    pub const fn kind(&self) -> DefinitionKind {
        match self {
            Self::Scalar(_) => DefinitionKind::Scalar,
            Self::Enum(_) => DefinitionKind::Enum,
            Self::Object(_) => DefinitionKind::Object,
            Self::Interface(_) => DefinitionKind::Interface,
            Self::InputObject(_) => DefinitionKind::InputObject,
            Self::Union(_) => DefinitionKind::Union,
        }
    }

    /// Returns true if this is an object definition.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns true if the name is `Query` or `Mutation`, ignoring case.
    #[must_use]
    pub fn is_root_operation(&self) -> bool {
        is_root_operation_name(self.name())
    }

    /// Names of other definitions this definition references directly.
    ///
    /// Covers field types, argument types, implemented interfaces and union
    /// members. Built-in scalars and self-references are included as-is;
    /// callers filter what they do not know about.
    #[must_use]
    pub fn references(&self) -> Vec<&str> {
        let mut refs = Vec::new();
        match self {
            Self::Scalar(_) | Self::Enum(_) => {}
            Self::Object(d) => {
                collect_field_refs(&d.fields, &mut refs);
                refs.extend(d.interfaces.iter().map(String::as_str));
            }
            Self::Interface(d) => collect_field_refs(&d.fields, &mut refs),
            Self::InputObject(d) => {
                refs.extend(d.fields.iter().map(|f| f.value_type.named_type()));
            }
            Self::Union(d) => refs.extend(d.members.iter().map(String::as_str)),
        }
        refs
    }
}

fn collect_field_refs<'a>(fields: &'a [Field], refs: &mut Vec<&'a str>) {
    for field in fields {
        refs.push(field.field_type.named_type());
        refs.extend(field.arguments.iter().map(|a| a.value_type.named_type()));
    }
}

/// Returns true if `name` is `Query` or `Mutation`, ignoring case.
#[must_use]
pub fn is_root_operation_name(name: &str) -> bool {
    name.eq_ignore_ascii_case("query") || name.eq_ignore_ascii_case("mutation")
}

/// Scalar definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarDef {
    /// Scalar name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

impl ScalarDef {
    /// Creates a new scalar definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// Enum definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Declared values.
    pub values: Vec<EnumValue>,
}

impl EnumDef {
    /// Creates a new enum definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: Vec::new(),
        }
    }

    /// Adds a value and returns the definition.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(EnumValue {
            name: value.into(),
            description: None,
        });
        self
    }
}

/// Enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Value name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

/// Object definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDef {
    /// Object name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Names of implemented interfaces.
    pub interfaces: Vec<String>,
    /// Fields in declared order.
    pub fields: Vec<Field>,
}

impl ObjectDef {
    /// Creates a new object definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Adds a field and returns the definition.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds an implemented interface and returns the definition.
    #[must_use]
    pub fn implementing(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }
}

/// Interface definition.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDef {
    /// Interface name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Fields in declared order.
    pub fields: Vec<Field>,
}

impl InterfaceDef {
    /// Creates a new interface definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Adds a field and returns the definition.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// Input object definition.
#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectDef {
    /// Input object name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Input fields in declared order.
    pub fields: Vec<InputValue>,
}

impl InputObjectDef {
    /// Creates a new input object definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Adds an input field and returns the definition.
    #[must_use]
    pub fn with_field(mut self, field: InputValue) -> Self {
        self.fields.push(field);
        self
    }
}

/// Union definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionDef {
    /// Union name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Member type names.
    pub members: Vec<String>,
}

impl UnionDef {
    /// Creates a new union definition.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: None,
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// Field of an object or interface.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Declared type.
    pub field_type: TypeReference,
    /// Arguments in declared order.
    pub arguments: Vec<Argument>,
}

impl Field {
    /// Creates a new field without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: TypeReference) -> Self {
        Self {
            name: name.into(),
            description: None,
            field_type,
            arguments: Vec::new(),
        }
    }

    /// Adds an argument and returns the field.
    #[must_use]
    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Returns true if the field declares at least one argument.
    #[must_use]
    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }
}

/// Field argument or input object field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValue {
    /// Value name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Declared type.
    pub value_type: TypeReference,
    /// Default value, if declared.
    pub default_value: Option<ConstValue>,
}

/// Field arguments share the input value representation.
pub type Argument = InputValue;

impl InputValue {
    /// Creates a new input value without a default.
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: TypeReference) -> Self {
        Self {
            name: name.into(),
            description: None,
            value_type,
            default_value: None,
        }
    }

    /// Sets the default value and returns the input value.
    #[must_use]
    pub fn with_default(mut self, value: ConstValue) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Returns true if the outer type is non-null.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.value_type.is_non_null()
    }
}

/// Reference to a type from a field or argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeReference {
    /// Named type (scalar, enum, object, ...).
    Named(String),
    /// List of the inner type.
    List(Box<TypeReference>),
    /// Non-null wrapper. Never wraps another `NonNull`.
    NonNull(Box<TypeReference>),
}

impl TypeReference {
    /// Creates a named type reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps `inner` in a list.
    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps `inner` in a non-null marker; already non-null types are returned unchanged.
    #[must_use]
    pub fn non_null(inner: Self) -> Self {
        match inner {
            Self::NonNull(_) => inner,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// Returns true if the outermost wrapper is non-null.
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Returns the terminal named type.
    #[must_use]
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// Constant value literal (argument or input field default).
#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
    /// `null`.
    Null,
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// String literal.
    String(String),
    /// Boolean literal.
    Boolean(bool),
    /// Enum value literal.
    Enum(String),
    /// List literal.
    List(Vec<ConstValue>),
    /// Object literal.
    Object(Vec<(String, ConstValue)>),
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Enum(v) => f.write_str(v),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
