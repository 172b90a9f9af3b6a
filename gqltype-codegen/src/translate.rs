//! Type expression translation.
//!
//! Turns a [`TypeReference`] into the TypeScript type expression used by
//! the emitted declarations. Nullability, lists and the two outer wrapping
//! modes (resolver and property) are handled here.

use crate::error::CodegenError;
use gqltype_schema::{Document, TypeReference};
use std::collections::HashSet;
use std::fmt;

/// Target primitive types for the built-in scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// `string` (String, ID).
    String,
    /// `boolean` (Boolean).
    Boolean,
    /// `number` (Int, Float).
    Number,
}

impl Primitive {
    /// Maps a built-in scalar name to its primitive.
    #[must_use]
    pub fn from_builtin(name: &str) -> Option<Self> {
        match name {
            "String" | "ID" => Some(Self::String),
            "Boolean" => Some(Self::Boolean),
            "Int" | "Float" => Some(Self::Number),
            _ => None,
        }
    }

    /// Returns the TypeScript keyword.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Number => "number",
        }
    }
}

/// Target type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetExpr {
    /// Built-in primitive.
    Primitive(Primitive),
    /// Reference to another declaration or an external type.
    Reference(String),
    /// `Nullable<T>`.
    Nullable(Box<TargetExpr>),
    /// `Array<T>`.
    List(Box<TargetExpr>),
    /// `Promisable<T>`: the value or an awaitable of it.
    Promisable(Box<TargetExpr>),
    /// `Resolvable<this, T>`: the value or an accessor producing it.
    Resolvable(Box<TargetExpr>),
    /// `Promise<T>`.
    Awaitable(Box<TargetExpr>),
    /// `T | undefined`.
    Optional(Box<TargetExpr>),
    /// `A | B | ...`.
    Union(Vec<TargetExpr>),
    /// String literal type.
    StringLiteral(String),
    /// `unknown`.
    Unknown,
    /// `any`.
    Any,
}

impl TargetExpr {
    /// Creates a reference expression.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    /// Wraps in `Nullable<_>`.
    #[must_use]
    pub fn nullable(self) -> Self {
        Self::Nullable(Box::new(self))
    }

    /// Wraps in `Array<_>`.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Wraps in `Promisable<_>`.
    #[must_use]
    pub fn promisable(self) -> Self {
        Self::Promisable(Box::new(self))
    }

    /// Wraps in `Resolvable<this, _>`.
    #[must_use]
    pub fn resolvable(self) -> Self {
        Self::Resolvable(Box::new(self))
    }

    /// Wraps in `Promise<_>`.
    #[must_use]
    pub fn awaitable(self) -> Self {
        Self::Awaitable(Box::new(self))
    }

    /// Wraps in `_ | undefined`.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    /// Returns true if the outermost wrapper is `Nullable`.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }
}

impl fmt::Display for TargetExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.keyword()),
            Self::Reference(name) => f.write_str(name),
            Self::Nullable(inner) => write!(f, "Nullable<{inner}>"),
            Self::List(inner) => write!(f, "Array<{inner}>"),
            Self::Promisable(inner) => write!(f, "Promisable<{inner}>"),
            Self::Resolvable(inner) => write!(f, "Resolvable<this, {inner}>"),
            Self::Awaitable(inner) => write!(f, "Promise<{inner}>"),
            Self::Optional(inner) => write!(f, "{inner} | undefined"),
            Self::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            Self::StringLiteral(value) => write!(f, "{value:?}"),
            Self::Unknown => f.write_str("unknown"),
            Self::Any => f.write_str("any"),
        }
    }
}

/// Outer wrapping applied by [`TypeTranslator::translate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationMode {
    /// No outer wrapping (interface, input object and argument members).
    #[default]
    Plain,
    /// Resolver return type: value or awaitable of value.
    Resolver,
    /// Object property: value or accessor, for non-primitive results only.
    Property,
}

/// Translator from type references to target expressions.
#[derive(Debug, Clone)]
pub struct TypeTranslator<'a> {
    known: HashSet<&'a str>,
}

impl<'a> TypeTranslator<'a> {
    /// Creates a translator that knows every definition of the document.
    #[must_use]
    pub fn new(document: &'a Document) -> Self {
        Self::from_names(document.names())
    }

    /// Creates a translator from an explicit set of known definition names.
    #[must_use]
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            known: names.into_iter().collect(),
        }
    }

    /// Returns true if `name` is a known definition.
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        self.known.contains(name)
    }

    /// Translates a type reference under the given mode.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidTypeReference` if the terminal named
    /// type is neither built-in nor known.
    pub fn translate(
        &self,
        ty: &TypeReference,
        mode: TranslationMode,
    ) -> Result<TargetExpr, CodegenError> {
        let expr = self.translate_shape(ty, true, mode == TranslationMode::Property)?;
        Ok(match mode {
            TranslationMode::Resolver => expr.promisable(),
            TranslationMode::Plain | TranslationMode::Property => expr,
        })
    }

    /// Translates a bare named type with nullable wrapping suppressed.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidTypeReference` for unknown names.
    pub fn translate_named(&self, name: &str) -> Result<TargetExpr, CodegenError> {
        self.translate_terminal(name, false, false)
    }

    fn translate_shape(
        &self,
        ty: &TypeReference,
        nullable: bool,
        accessor: bool,
    ) -> Result<TargetExpr, CodegenError> {
        match ty {
            TypeReference::NonNull(inner) => self.translate_shape(inner, false, accessor),
            // Elements get their own nullability and never an accessor.
            TypeReference::List(inner) => Ok(self.translate_shape(inner, true, false)?.list()),
            TypeReference::Named(name) => self.translate_terminal(name, nullable, accessor),
        }
    }

    fn translate_terminal(
        &self,
        name: &str,
        nullable: bool,
        accessor: bool,
    ) -> Result<TargetExpr, CodegenError> {
        let (expr, builtin) = match Primitive::from_builtin(name) {
            Some(primitive) => (TargetExpr::Primitive(primitive), true),
            None if self.is_known(name) => (TargetExpr::reference(name), false),
            None => return Err(CodegenError::invalid_type(name)),
        };

        let expr = if nullable { expr.nullable() } else { expr };
        if accessor && !builtin {
            Ok(expr.resolvable())
        } else {
            Ok(expr)
        }
    }
}
