//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Every variant except `Io` and `Parse` is produced by the generation
/// pass itself and aborts it; no partial output is returned.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// SDL parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] gqltype_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Named type that is neither built-in nor defined in the document.
    #[error(
        "invalid type reference '{type_name}'{}",
        .context.as_ref().map(|c| format!(" in '{c}'")).unwrap_or_default()
    )]
    InvalidTypeReference {
        /// Referenced type name.
        type_name: String,
        /// Where the reference appeared, e.g. `User.posts`.
        context: Option<String>,
    },

    /// Union member that is not an already emitted object.
    #[error("invalid members for union '{union}': {}", .members.join(", "))]
    InvalidUnionMember {
        /// Union name.
        union: String,
        /// Exactly the member names that are invalid.
        members: Vec<String>,
    },

    /// Two definitions reference each other directly.
    #[error("circular dependency between '{first}' and '{second}'")]
    CircularDependency {
        /// Definition that appears first in the document.
        first: String,
        /// Definition that appears second in the document.
        second: String,
    },
}

impl CodegenError {
    /// Creates an invalid type reference error without location.
    pub fn invalid_type(type_name: impl Into<String>) -> Self {
        Self::InvalidTypeReference {
            type_name: type_name.into(),
            context: None,
        }
    }

    /// Creates a circular dependency error.
    pub fn circular(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::CircularDependency {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Attaches a location to an invalid type reference; other errors pass through.
    #[must_use]
    pub fn with_context(self, location: impl Into<String>) -> Self {
        match self {
            Self::InvalidTypeReference {
                type_name,
                context: None,
            } => Self::InvalidTypeReference {
                type_name,
                context: Some(location.into()),
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_type_display() {
        let err = CodegenError::invalid_type("Missing");
        assert_eq!(err.to_string(), "invalid type reference 'Missing'");

        let err = err.with_context("User.friend");
        assert_eq!(
            err.to_string(),
            "invalid type reference 'Missing' in 'User.friend'"
        );
    }

    #[test]
    fn test_with_context_keeps_first_location() {
        let err = CodegenError::invalid_type("Missing")
            .with_context("User.friend")
            .with_context("User");
        assert!(matches!(
            err,
            CodegenError::InvalidTypeReference { context: Some(ref c), .. } if c == "User.friend"
        ));
    }

    #[test]
    fn test_union_member_display() {
        let err = CodegenError::InvalidUnionMember {
            union: "SearchResult".to_string(),
            members: vec!["Ghost".to_string(), "Phantom".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "invalid members for union 'SearchResult': Ghost, Phantom"
        );
    }

    #[test]
    fn test_circular_display() {
        let err = CodegenError::circular("User", "Post");
        assert_eq!(
            err.to_string(),
            "circular dependency between 'User' and 'Post'"
        );
    }
}
