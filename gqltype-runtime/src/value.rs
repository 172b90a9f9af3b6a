//! Dynamic values seen by the field resolver.
//!
//! Sources, arguments and results are represented by [`Value`]. Accessor
//! and entity resolver functions are values too ([`Value::Function`]),
//! which is what lets a source object carry either a plain field value or
//! a function computing it.

use crate::context::{Context, ResolveInfo};
use futures::FutureExt;
use futures::future::{self, BoxFuture};
use indexmap::IndexMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Future returned by field functions.
pub type FieldFuture = BoxFuture<'static, anyhow::Result<Value>>;

/// Arguments passed to an accessor or entity resolver.
#[derive(Debug, Clone)]
pub struct FieldCall {
    /// Parent value.
    pub source: Value,
    /// Field arguments.
    pub args: Value,
    /// Execution context.
    pub context: Context,
    /// Field metadata.
    pub info: ResolveInfo,
}

impl FieldCall {
    /// Bundles the four resolver arguments.
    #[must_use]
    pub fn new(source: Value, args: Value, context: Context, info: ResolveInfo) -> Self {
        Self {
            source,
            args,
            context,
            info,
        }
    }
}

/// Shared async function invoked with a [`FieldCall`].
#[derive(Clone)]
pub struct FieldFn(Arc<dyn Fn(FieldCall) -> FieldFuture + Send + Sync>);

impl FieldFn {
    /// Wraps an async function.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(FieldCall) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
    {
        Self(Arc::new(move |call| f(call).boxed()))
    }

    /// Wraps a synchronous function; its result is returned as a ready future.
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(FieldCall) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(move |call| future::ready(f(call)).boxed()))
    }

    /// Invokes the function.
    pub fn call(&self, call: FieldCall) -> FieldFuture {
        (self.0)(call)
    }
}

impl fmt::Debug for FieldFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldFn(..)")
    }
}

impl PartialEq for FieldFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Dynamic value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null or absent.
    #[default]
    Null,
    /// Boolean.
    Boolean(bool),
    /// Integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// String.
    String(String),
    /// List.
    List(Vec<Value>),
    /// Object with fields in insertion order.
    Object(IndexMap<String, Value>),
    /// Callable value.
    Function(FieldFn),
}

impl Value {
    /// Builds an object from key/value pairs.
    pub fn object<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns true for objects, lists and functions.
    #[must_use]
    pub const fn is_object_like(&self) -> bool {
        matches!(self, Self::Object(_) | Self::List(_) | Self::Function(_))
    }

    /// Returns true for `null`, `false`, `0`, `NaN` and the empty string.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Boolean(b) => !b,
            Self::Int(i) => *i == 0,
            Self::Float(f) => *f == 0.0 || f.is_nan(),
            Self::String(s) => s.is_empty(),
            Self::List(_) | Self::Object(_) | Self::Function(_) => false,
        }
    }

    /// Looks up an object property. Other values, lists and functions
    /// included, have none.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Returns the string, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer, if this is one.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the function, if this is one.
    #[must_use]
    pub const fn as_function(&self) -> Option<&FieldFn> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(fields) => {
                Self::Object(fields.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<FieldFn> for Value {
    fn from(f: FieldFn) -> Self {
        Self::Function(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqltype_schema::TypeReference;
    use serde_json::json;

    fn call() -> FieldCall {
        FieldCall::new(
            Value::Null,
            Value::Null,
            Context::default(),
            ResolveInfo::new("id", "User", TypeReference::named("ID")),
        )
    }

    #[test]
    fn test_from_json() {
        let value = Value::from(json!({
            "id": 1,
            "score": 2.5,
            "name": "x",
            "tags": ["a", null],
            "active": true
        }));

        assert_eq!(value.get("id"), Some(&Value::Int(1)));
        assert_eq!(value.get("score"), Some(&Value::Float(2.5)));
        assert_eq!(value.get("name").and_then(Value::as_str), Some("x"));
        assert_eq!(
            value.get("tags"),
            Some(&Value::List(vec![Value::from("a"), Value::Null]))
        );
        assert_eq!(value.get("active"), Some(&Value::Boolean(true)));
        assert!(value.get("missing").is_none());
    }

    #[test]
    fn test_object_keeps_insertion_order() {
        let value = Value::object([("b", Value::Int(1)), ("a", Value::Int(2))]);
        let Value::Object(fields) = value else {
            panic!("expected an object");
        };
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_falsy_values() {
        for value in [
            Value::Null,
            Value::Boolean(false),
            Value::Int(0),
            Value::Float(0.0),
            Value::Float(f64::NAN),
            Value::from(""),
        ] {
            assert!(value.is_falsy(), "{value:?} should be falsy");
        }
        for value in [
            Value::Boolean(true),
            Value::Int(-1),
            Value::from("0"),
            Value::List(Vec::new()),
            Value::object::<_, String>([]),
        ] {
            assert!(!value.is_falsy(), "{value:?} should be truthy");
        }
    }

    #[test]
    fn test_functions_and_lists_are_object_like_without_properties() {
        let f = Value::from(FieldFn::sync(|_| Ok(Value::Null)));
        assert!(f.is_object_like());
        assert!(f.get("name").is_none());
        assert!(!Value::from("text").is_object_like());

        let list = Value::List(vec![Value::from("a")]);
        assert!(list.is_object_like());
        assert!(list.get("0").is_none());
    }

    #[tokio::test]
    async fn test_field_fn_sync_and_async() {
        let sync = FieldFn::sync(|call| Ok(Value::from(call.info.field_name)));
        let result = sync.call(call()).await.expect("Failed to call sync fn");
        assert_eq!(result, Value::from("id"));

        let async_fn = FieldFn::new(|call| async move { Ok(Value::from(call.info.parent_type)) });
        let result = async_fn.call(call()).await.expect("Failed to call async fn");
        assert_eq!(result, Value::from("User"));
    }

    #[test]
    fn test_field_fn_equality_is_identity() {
        let f = FieldFn::sync(|_| Ok(Value::Null));
        let g = FieldFn::sync(|_| Ok(Value::Null));
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
    }
}
