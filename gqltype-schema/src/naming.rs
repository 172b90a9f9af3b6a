//! Naming conventions shared by the generator and the runtime.

/// Prefix of entity resolver method names.
pub const ENTITY_RESOLVER_PREFIX: &str = "resolve";

/// Returns the entity resolver method name for a type.
///
/// The name is `resolve` followed by the type name with its first
/// character upper-cased; the rest of the name is kept as-is.
#[must_use]
pub fn to_entity_resolver_name(type_name: &str) -> String {
    let mut chars = type_name.chars();
    let mut name = String::with_capacity(ENTITY_RESOLVER_PREFIX.len() + type_name.len());
    name.push_str(ENTITY_RESOLVER_PREFIX);
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
    }
    name
}
