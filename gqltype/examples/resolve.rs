//! Resolves fields with the default field resolver.
//!
//! Run with: `cargo run --example resolve`
//!
//! Shows the three resolution paths: a plain value, an accessor function
//! stored on the source, and a context-level entity resolver.

use gqltype::prelude::*;
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let users = Value::from(json!({
        "1": {"id": 1, "name": "Ada"},
        "2": {"id": 2, "name": "Grace"}
    }));
    let context = Context::new()
        .data(users)
        .entity_resolver(
            "User",
            FieldFn::sync(|call| {
                let author_id = call
                    .source
                    .get("authorId")
                    .and_then(Value::as_i64)
                    .unwrap_or_default();
                Ok(call
                    .context
                    .app_data()
                    .get(&author_id.to_string())
                    .cloned()
                    .unwrap_or(Value::Null))
            }),
        );

    let shout = FieldFn::new(|call| async move {
        let title = call.source.get("title").and_then(Value::as_str).unwrap_or_default();
        Ok(Value::from(title.to_uppercase()))
    });
    let post = Value::object([
        ("id", Value::Int(10)),
        ("title", Value::from("Notes on the analytical engine")),
        ("authorId", Value::Int(1)),
        ("headline", Value::from(shout)),
    ]);

    let string = || TypeReference::non_null(TypeReference::named("String"));
    let fields = [
        ResolveInfo::new("title", "Post", string()),
        ResolveInfo::new("headline", "Post", string()),
        ResolveInfo::new("author", "Post", TypeReference::named("User")),
    ];

    let resolver = DefaultFieldResolver::new();
    for info in fields {
        let field = info.field_name.clone();
        let plan = plan_resolution(&post, &context, &info);
        let call = FieldCall::new(post.clone(), Value::Null, context.clone(), info);
        let value = resolver.resolve(call).await?;
        println!("Post.{field}: {:?} via {}", value, path_name(&plan));
    }

    Ok(())
}

fn path_name(plan: &Resolution) -> &'static str {
    match plan {
        Resolution::Value(_) => "value",
        Resolution::Accessor(_) => "accessor",
        Resolution::Delegate { .. } => "entity resolver",
    }
}
