//! Generator configuration.

use crate::order::OrderingStrategy;
use serde::{Deserialize, Serialize};

/// Default name of the generated context interface.
pub const DEFAULT_CONTEXT_TYPE_NAME: &str = "GraphqlContext";

/// Configuration for a generation run.
///
/// Every value the generator and the renderer need is carried here; nothing
/// is read from the environment. Missing fields take their defaults when
/// deserialized, so the configuration can be embedded in a host tool's
/// config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Name of the context interface used in resolver signatures.
    pub context_type_name: String,
    /// Import path of a user context type the context interface extends.
    pub context_type_path: Option<String>,
    /// Replacement for the default generated-file header.
    pub file_header: Option<String>,
    /// Version reported in the default header.
    pub tool_version: String,
    /// Declaration ordering strategy.
    pub ordering: OrderingStrategy,
    /// Add stub `resolve` functions to generated schema objects, on root
    /// operation fields and on fields with arguments.
    pub emit_resolver_functions: bool,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            context_type_name: DEFAULT_CONTEXT_TYPE_NAME.to_string(),
            context_type_path: None,
            file_header: None,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ordering: OrderingStrategy::default(),
            emit_resolver_functions: false,
        }
    }

    /// Sets the context interface name.
    #[must_use]
    pub fn context_type_name(mut self, name: impl Into<String>) -> Self {
        self.context_type_name = name.into();
        self
    }

    /// Sets the import path of the user context type.
    #[must_use]
    pub fn context_type_path(mut self, path: impl Into<String>) -> Self {
        self.context_type_path = Some(path.into());
        self
    }

    /// Sets the file header, replacing the default one.
    #[must_use]
    pub fn file_header(mut self, header: impl Into<String>) -> Self {
        self.file_header = Some(header.into());
        self
    }

    /// Sets the version reported in the default header.
    #[must_use]
    pub fn tool_version(mut self, version: impl Into<String>) -> Self {
        self.tool_version = version.into();
        self
    }

    /// Sets the ordering strategy.
    #[must_use]
    pub fn ordering(mut self, ordering: OrderingStrategy) -> Self {
        self.ordering = ordering;
        self
    }

    /// Enables or disables stub resolve functions in schema objects.
    #[must_use]
    pub fn emit_resolver_functions(mut self, enabled: bool) -> Self {
        self.emit_resolver_functions = enabled;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
