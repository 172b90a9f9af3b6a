//! Error types for schema parsing.

use thiserror::Error;

/// Error type for SDL parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// SDL syntax error.
    #[error("SDL syntax error: {message}")]
    Syntax {
        /// Error message reported by the GraphQL parser.
        message: String,
    },

    /// Value literal that cannot appear in a schema default.
    #[error("unsupported default value '{value}' for '{location}'")]
    UnsupportedValue {
        /// Location of the value, e.g. `User.posts(first)`.
        location: String,
        /// The offending literal.
        value: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition.
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates a syntax error.
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }

    /// Creates an unsupported value error.
    pub fn unsupported_value(location: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            location: location.into(),
            value: value.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }
}
