//! Generates TypeScript declarations from a GraphQL SDL file.
//!
//! Run with: `cargo run --example generate -- path/to/schema.graphql`
//!
//! Without a path a small built-in schema is used. Pass `--schema-objects`
//! to emit graphql-js schema objects (with stub resolve functions) instead
//! of declarations. Set `RUST_LOG=debug` to see ordering and emission
//! details.

use gqltype::prelude::*;
use std::path::PathBuf;

const BUILTIN_SDL: &str = r#"
"A point in time, ISO-8601 encoded"
scalar DateTime

enum Role { ADMIN MEMBER }

interface Node { id: ID! }

type User implements Node {
  id: ID!
  name: String
  role: Role!
  posts(first: Int = 10, after: String): [Post!]!
}

type Post implements Node {
  id: ID!
  title: String!
  author: User
  publishedAt: DateTime
}

union SearchResult = User | Post

type Query {
  me: User
  search(text: String!): [SearchResult!]!
}
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut schema_objects = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--schema-objects" {
            schema_objects = true;
        } else {
            path = Some(PathBuf::from(arg));
        }
    }

    let config = GeneratorConfig::new()
        .context_type_name("AppContext")
        .emit_resolver_functions(schema_objects);

    let sdl = match &path {
        Some(path) => {
            eprintln!("Reading schema from {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            eprintln!("Using the built-in schema");
            BUILTIN_SDL.to_string()
        }
    };

    let output = if schema_objects {
        generate_schema_objects_from_sdl(&sdl, &config)?
    } else {
        generate_from_sdl(&sdl, &config)?
    };

    println!("{output}");
    Ok(())
}
