//! Emitted declaration model.
//!
//! The generator produces an ordered sequence of [`Declaration`]s. Each
//! one is created exactly once and is not modified afterwards; the
//! TypeScript renderer only reads them.

use crate::translate::TargetExpr;
use gqltype_schema::ConstValue;
use std::fmt;

/// Type of the execution-info parameter of resolver methods.
pub const RESOLVE_INFO_TYPE: &str = "graphql.GraphQLResolveInfo";

/// Name of the discriminant property carried by object declarations.
pub const TYPENAME_PROPERTY: &str = "__typename";

/// Suffix of synthesized argument declarations.
pub const ARGS_SUFFIX: &str = "Args";

/// Name of the aggregate entity resolver contract.
pub const ENTITY_RESOLVER_NAME: &str = "EntityResolver";

/// Name of the aggregate resolver contract.
pub const RESOLVER_NAME: &str = "Resolver";

/// What a declaration was produced from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclarationOrigin {
    /// A definition of the document, by name.
    Definition(String),
    /// The arguments of an object field.
    FieldArguments {
        /// Object name.
        object: String,
        /// Field name.
        field: String,
    },
    /// The aggregate entity resolver contract.
    EntityResolverContract,
    /// The aggregate resolver contract.
    ResolverContract,
}

impl DeclarationOrigin {
    /// Returns the originating definition name, if any.
    #[must_use]
    pub fn definition_name(&self) -> Option<&str> {
        match self {
            Self::Definition(name) => Some(name),
            Self::FieldArguments { object, .. } => Some(object),
            Self::EntityResolverContract | Self::ResolverContract => None,
        }
    }
}

/// One emitted declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `type Name = ...`.
    Alias(AliasDecl),
    /// `enum Name { ... }`.
    Enum(EnumDecl),
    /// `interface Name extends ... { ... }`.
    Structure(StructureDecl),
}

impl Declaration {
    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Alias(d) => &d.name,
            Self::Enum(d) => &d.name,
            Self::Structure(d) => &d.name,
        }
    }

    /// Returns the origin.
    #[must_use]
    pub fn origin(&self) -> &DeclarationOrigin {
        match self {
            Self::Alias(d) => &d.origin,
            Self::Enum(d) => &d.origin,
            Self::Structure(d) => &d.origin,
        }
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Alias(d) => d.description.as_deref(),
            Self::Enum(d) => d.description.as_deref(),
            Self::Structure(d) => d.description.as_deref(),
        }
    }

    /// Returns the structure, if this is one.
    #[must_use]
    pub fn as_structure(&self) -> Option<&StructureDecl> {
        match self {
            Self::Structure(d) => Some(d),
            _ => None,
        }
    }
}

/// Type alias declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDecl {
    /// Alias name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Aliased expression.
    pub target: TargetExpr,
    /// Origin.
    pub origin: DeclarationOrigin,
}

/// Enumeration declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    /// Enum name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Members in declared order.
    pub members: Vec<EnumMember>,
    /// Origin.
    pub origin: DeclarationOrigin,
}

/// Enumeration member; identifier and value are both the declared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// Member identifier.
    pub name: String,
    /// String value.
    pub value: String,
    /// Description.
    pub description: Option<String>,
}

/// Structural declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureDecl {
    /// Structure name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Extended declarations.
    pub extends: Vec<Heritage>,
    /// Members in emission order.
    pub members: Vec<Member>,
    /// Origin.
    pub origin: DeclarationOrigin,
}

impl StructureDecl {
    /// Creates an empty structure.
    #[must_use]
    pub fn new(name: impl Into<String>, origin: DeclarationOrigin) -> Self {
        Self {
            name: name.into(),
            description: None,
            extends: Vec::new(),
            members: Vec::new(),
            origin,
        }
    }

    /// Looks up a member by name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name() == name)
    }
}

/// Extended declaration, optionally with omitted keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heritage {
    /// Extended declaration name.
    pub name: String,
    /// Omitted property names.
    pub omit: Vec<String>,
}

impl Heritage {
    /// Extends a declaration as a whole.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            omit: Vec::new(),
        }
    }

    /// Extends a declaration without one of its properties.
    #[must_use]
    pub fn omitting(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            omit: vec![key.into()],
        }
    }
}

impl fmt::Display for Heritage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.omit.is_empty() {
            return f.write_str(&self.name);
        }
        let keys: Vec<String> = self.omit.iter().map(|k| format!("{k:?}")).collect();
        write!(f, "Omit<{}, {}>", self.name, keys.join(" | "))
    }
}

/// Structure member.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// Property.
    Property(PropertyMember),
    /// Method.
    Method(MethodMember),
}

impl Member {
    /// Returns the member name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Property(p) => &p.name,
            Self::Method(m) => &m.name,
        }
    }

    /// Returns true if this is a method.
    #[must_use]
    pub const fn is_method(&self) -> bool {
        matches!(self, Self::Method(_))
    }
}

/// Property member.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMember {
    /// Property name.
    pub name: String,
    /// Property type.
    pub ty: TargetExpr,
    /// Whether the property is optional (`name?:`).
    pub optional: bool,
    /// Description.
    pub description: Option<String>,
    /// Default value, for argument and input fields.
    pub default_value: Option<ConstValue>,
}

impl PropertyMember {
    /// Creates a property.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TargetExpr, optional: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            optional,
            description: None,
            default_value: None,
        }
    }
}

/// Method member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodMember {
    /// Method name.
    pub name: String,
    /// Parameters.
    pub params: Vec<Parameter>,
    /// Return type.
    pub returns: TargetExpr,
    /// Whether the method is optional (`name?()`).
    pub optional: bool,
    /// Description.
    pub description: Option<String>,
}

/// Method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TargetExpr,
}

impl Parameter {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TargetExpr) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Builds the `(source, args, context, info)` resolver parameter list.
#[must_use]
pub fn resolver_params(args: TargetExpr, context_type: &str) -> Vec<Parameter> {
    vec![
        Parameter::new("source", TargetExpr::Unknown),
        Parameter::new("args", args),
        Parameter::new("context", TargetExpr::reference(context_type)),
        Parameter::new("info", TargetExpr::reference(RESOLVE_INFO_TYPE)),
    ]
}
