//! Default field resolution.
//!
//! For a field without an explicit resolver the engine asks this module
//! for its value. Exactly one of three paths fires per call:
//! - accessor: the source property is a function, which is invoked;
//! - delegate: the property is absent or falsy and the context holds an
//!   entity resolver for the field's return type, which is invoked;
//! - value: the property is returned as-is.

use crate::context::{Context, ResolveInfo};
use crate::value::{FieldCall, FieldFn, Value};
use futures::FutureExt;
use futures::future::BoxFuture;

/// Resolution path chosen for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Plain value; `None` when the source has no such property or is not
    /// object-like.
    Value(Option<Value>),
    /// Property function to invoke.
    Accessor(FieldFn),
    /// Entity resolver to invoke.
    Delegate {
        /// Entity resolver name.
        name: String,
        /// Resolver function.
        resolver: FieldFn,
    },
}

/// Chooses the resolution path without invoking anything.
///
/// # Arguments
/// * `source` - Parent value
/// * `context` - Execution context holding the entity resolvers
/// * `info` - Metadata of the field being resolved
#[must_use]
pub fn plan_resolution(source: &Value, context: &Context, info: &ResolveInfo) -> Resolution {
    if !source.is_object_like() {
        return Resolution::Value(None);
    }

    let property = source.get(&info.field_name);
    if let Some(Value::Function(accessor)) = property {
        return Resolution::Accessor(accessor.clone());
    }

    if property.is_none_or(Value::is_falsy) {
        let name = info.entity_resolver_name();
        if let Some(resolver) = context.get_entity_resolver(&name) {
            return Resolution::Delegate {
                resolver: resolver.clone(),
                name,
            };
        }
    }

    Resolution::Value(property.cloned())
}

/// Resolves a field with the default protocol.
///
/// # Returns
/// The accessor or delegate result, or the plain property value.
///
/// # Errors
/// Returns whatever the invoked accessor or entity resolver returns.
pub async fn resolve_field(
    source: Value,
    args: Value,
    context: Context,
    info: ResolveInfo,
) -> anyhow::Result<Option<Value>> {
    match plan_resolution(&source, &context, &info) {
        Resolution::Value(value) => {
            tracing::trace!(
                "Resolved {}.{} from source value",
                info.parent_type,
                info.field_name
            );
            Ok(value)
        }
        Resolution::Accessor(accessor) => {
            tracing::trace!(
                "Resolving {}.{} through accessor",
                info.parent_type,
                info.field_name
            );
            let call = FieldCall::new(source, args, context, info);
            accessor.call(call).await.map(Some)
        }
        Resolution::Delegate { name, resolver } => {
            tracing::trace!(
                "Resolving {}.{} through entity resolver {}",
                info.parent_type,
                info.field_name,
                name
            );
            let call = FieldCall::new(source, args, context, info);
            resolver.call(call).await.map(Some)
        }
    }
}

/// Resolver an execution engine consults for fields without their own.
pub trait FieldResolver: Send + Sync {
    /// Resolves one field.
    fn resolve(&self, call: FieldCall) -> BoxFuture<'static, anyhow::Result<Option<Value>>>;
}

/// Field resolver implementing the default protocol.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFieldResolver;

impl DefaultFieldResolver {
    /// Creates the default resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FieldResolver for DefaultFieldResolver {
    fn resolve(&self, call: FieldCall) -> BoxFuture<'static, anyhow::Result<Option<Value>>> {
        let FieldCall {
            source,
            args,
            context,
            info,
        } = call;
        resolve_field(source, args, context, info).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqltype_schema::TypeReference;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn info(field: &str, return_type: &str) -> ResolveInfo {
        ResolveInfo::new(field, "Post", TypeReference::named(return_type))
    }

    fn counting_resolver(counter: &Arc<AtomicUsize>, result: Value) -> FieldFn {
        let counter = Arc::clone(counter);
        FieldFn::sync(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(result.clone())
        })
    }

    #[tokio::test]
    async fn test_accessor_path_wins_over_entity_resolver() {
        let owner = FieldFn::sync(|_| Ok(Value::from(json!({"name": "x"}))));
        let source = Value::object([("id", Value::Int(1)), ("owner", Value::from(owner))]);

        let delegate_calls = Arc::new(AtomicUsize::new(0));
        let context = Context::new().entity_resolver(
            "User",
            counting_resolver(&delegate_calls, Value::from("delegate")),
        );

        assert!(matches!(
            plan_resolution(&source, &context, &info("owner", "User")),
            Resolution::Accessor(_)
        ));

        let result = resolve_field(source, Value::Null, context, info("owner", "User"))
            .await
            .expect("Failed to resolve");
        assert_eq!(result, Some(Value::from(json!({"name": "x"}))));
        assert_eq!(delegate_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_accessor_receives_call_arguments() {
        let accessor = FieldFn::new(|call: FieldCall| async move {
            let first = call.args.get("first").and_then(Value::as_i64).unwrap_or_default();
            let id = call.source.get("id").and_then(Value::as_i64).unwrap_or_default();
            Ok(Value::from(format!("{}:{}:{}", call.info.field_name, id, first)))
        });
        let source = Value::object([("id", Value::Int(7)), ("comments", Value::from(accessor))]);

        let result = resolve_field(
            source,
            Value::from(json!({"first": 3})),
            Context::new(),
            info("comments", "Comment"),
        )
        .await
        .expect("Failed to resolve");
        assert_eq!(result, Some(Value::from("comments:7:3")));
    }

    #[tokio::test]
    async fn test_delegate_path_for_absent_property() {
        let seen = Arc::new(std::sync::Mutex::new(None));
        let seen_clone = Arc::clone(&seen);
        let resolver = FieldFn::sync(move |call| {
            let mut slot = seen_clone.lock().map_err(|_| anyhow::anyhow!("poisoned"))?;
            *slot = Some((call.source.clone(), call.args.clone(), call.info.clone()));
            Ok(Value::from(json!({"name": "resolved"})))
        });
        let context = Context::new().entity_resolver("User", resolver);
        let source = Value::from(json!({"id": 1}));

        match plan_resolution(&source, &context, &info("owner", "User")) {
            Resolution::Delegate { name, .. } => assert_eq!(name, "resolveUser"),
            other => panic!("expected delegate, got {other:?}"),
        }

        let result = resolve_field(
            source.clone(),
            Value::from(json!({"x": 1})),
            context,
            info("owner", "User"),
        )
        .await
        .expect("Failed to resolve");
        assert_eq!(result, Some(Value::from(json!({"name": "resolved"}))));

        let recorded = seen.lock().expect("Failed to lock").clone();
        let (recorded_source, recorded_args, recorded_info) =
            recorded.expect("entity resolver should be invoked");
        assert_eq!(recorded_source, source);
        assert_eq!(recorded_args, Value::from(json!({"x": 1})));
        assert_eq!(recorded_info, info("owner", "User"));
    }

    #[tokio::test]
    async fn test_delegate_path_for_falsy_property() {
        let calls = Arc::new(AtomicUsize::new(0));
        let context = Context::new()
            .entity_resolver("String", counting_resolver(&calls, Value::from("filled")));

        for property in [Value::Null, Value::from(""), Value::Int(0), Value::Boolean(false)] {
            let source = Value::object([("title", property)]);
            let result = resolve_field(source, Value::Null, context.clone(), info("title", "String"))
                .await
                .expect("Failed to resolve");
            assert_eq!(result, Some(Value::from("filled")));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_delegate_uses_named_type_of_list() {
        let calls = Arc::new(AtomicUsize::new(0));
        let context = Context::new()
            .entity_resolver("Tag", counting_resolver(&calls, Value::List(Vec::new())));
        let info = ResolveInfo::new(
            "tags",
            "Post",
            TypeReference::non_null(TypeReference::list(TypeReference::named("Tag"))),
        );

        let result = resolve_field(Value::from(json!({})), Value::Null, context, info)
            .await
            .expect("Failed to resolve");
        assert_eq!(result, Some(Value::List(Vec::new())));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_plain_value_path() {
        let source = Value::from(json!({"id": 1, "name": "x"}));
        let calls = Arc::new(AtomicUsize::new(0));
        let context =
            Context::new().entity_resolver("String", counting_resolver(&calls, Value::Null));

        let result = resolve_field(source, Value::Null, context, info("name", "String"))
            .await
            .expect("Failed to resolve");
        assert_eq!(result, Some(Value::from("x")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_falsy_value_returned_without_entity_resolver() {
        let source = Value::from(json!({"count": 0, "note": null}));

        let count = resolve_field(source.clone(), Value::Null, Context::new(), info("count", "Int"))
            .await
            .expect("Failed to resolve");
        assert_eq!(count, Some(Value::Int(0)));

        let note = resolve_field(source.clone(), Value::Null, Context::new(), info("note", "String"))
            .await
            .expect("Failed to resolve");
        assert_eq!(note, Some(Value::Null));

        let missing = resolve_field(source, Value::Null, Context::new(), info("other", "String"))
            .await
            .expect("Failed to resolve");
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_non_object_source_produces_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let context =
            Context::new().entity_resolver("User", counting_resolver(&calls, Value::Null));

        for source in [Value::Null, Value::Int(3), Value::from("user"), Value::Boolean(true)] {
            let result = resolve_field(source, Value::Null, context.clone(), info("owner", "User"))
                .await
                .expect("Failed to resolve");
            assert_eq!(result, None);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_list_source_delegates_missing_property() {
        let calls = Arc::new(AtomicUsize::new(0));
        let resolver = counting_resolver(&calls, Value::from("ada"));
        let context = Context::new().entity_resolver("User", resolver.clone());
        let source = Value::List(vec![Value::from("first")]);

        assert_eq!(
            plan_resolution(&source, &context, &info("owner", "User")),
            Resolution::Delegate {
                name: "resolveUser".to_string(),
                resolver
            }
        );
        let result = resolve_field(source, Value::Null, context, info("owner", "User"))
            .await
            .expect("Failed to resolve");
        assert_eq!(result, Some(Value::from("ada")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let plain = Value::List(Vec::new());
        assert_eq!(
            plan_resolution(&plain, &Context::new(), &info("owner", "User")),
            Resolution::Value(None)
        );
    }

    #[test]
    fn test_function_source_has_no_properties() {
        let source = Value::from(FieldFn::sync(|_| Ok(Value::Null)));
        let context = Context::new();
        assert_eq!(
            plan_resolution(&source, &context, &info("owner", "User")),
            Resolution::Value(None)
        );

        let resolver = FieldFn::sync(|_| Ok(Value::Null));
        let context = Context::new().entity_resolver("User", resolver.clone());
        assert_eq!(
            plan_resolution(&source, &context, &info("owner", "User")),
            Resolution::Delegate {
                name: "resolveUser".to_string(),
                resolver
            }
        );
    }

    #[tokio::test]
    async fn test_errors_are_forwarded_unchanged() {
        let failing = FieldFn::sync(|_| Err(anyhow::anyhow!("accessor failed")));
        let source = Value::object([("owner", Value::from(failing))]);

        let err = resolve_field(source, Value::Null, Context::new(), info("owner", "User"))
            .await
            .expect_err("accessor error should propagate");
        assert_eq!(err.to_string(), "accessor failed");

        let context = Context::new().entity_resolver(
            "User",
            FieldFn::new(|_| async { Err(anyhow::anyhow!("lookup failed")) }),
        );
        let err = resolve_field(Value::from(json!({})), Value::Null, context, info("owner", "User"))
            .await
            .expect_err("delegate error should propagate");
        assert_eq!(err.to_string(), "lookup failed");
    }

    #[tokio::test]
    async fn test_default_field_resolver_as_trait_object() {
        let resolver: Arc<dyn FieldResolver> = Arc::new(DefaultFieldResolver::new());
        let call = FieldCall::new(
            Value::from(json!({"name": "x"})),
            Value::Null,
            Context::new(),
            info("name", "String"),
        );

        let result = resolver.resolve(call).await.expect("Failed to resolve");
        assert_eq!(result, Some(Value::from("x")));
    }

    #[tokio::test]
    async fn test_concurrent_resolution() {
        let calls = Arc::new(AtomicUsize::new(0));
        let context = Context::new().entity_resolver("User", counting_resolver(&calls, Value::Int(1)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let context = context.clone();
                tokio::spawn(resolve_field(
                    Value::from(json!({})),
                    Value::Null,
                    context,
                    info("owner", "User"),
                ))
            })
            .collect();
        for handle in handles {
            let result = handle
                .await
                .expect("Failed to join")
                .expect("Failed to resolve");
            assert_eq!(result, Some(Value::Int(1)));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 8);
    }
}
