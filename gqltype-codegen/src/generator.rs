//! Generation pipeline.

use crate::config::GeneratorConfig;
use crate::declaration::{Declaration, DeclarationOrigin};
use crate::emit::{DeclarationEmitter, SchemaObjectEmitter};
use crate::error::CodegenError;
use crate::schema_object::SchemaObject;
use crate::surface::ResolverSurfaceBuilder;
use crate::translate::TypeTranslator;
use gqltype_schema::{Definition, Document, UnhandledDefinition};

/// Output of a generation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// Declarations in emission order.
    pub declarations: Vec<Declaration>,
    /// Definitions that were skipped because their kind is not handled.
    pub skipped: Vec<UnhandledDefinition>,
}

impl Generated {
    /// Looks up a declaration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name() == name)
    }

    /// Declared names in emission order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(Declaration::name)
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Declaration generator for a schema document.
pub struct Generator<'a> {
    document: &'a Document,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(document: &'a Document, config: &'a GeneratorConfig) -> Self {
        Self { document, config }
    }

    /// Runs ordering, emission and contract building.
    ///
    /// The pass has no side effects besides logging and can be repeated on
    /// the same document.
    ///
    /// # Errors
    /// Returns the first fatal error; no partial output is produced.
    pub fn generate(&self) -> Result<Generated, CodegenError> {
        let ordered = self.ordered_definitions()?;

        let mut emitter = DeclarationEmitter::new(
            TypeTranslator::new(self.document),
            &self.config.context_type_name,
        );
        let mut declarations = Vec::with_capacity(ordered.len() + 2);
        for definition in ordered {
            declarations.extend(emitter.emit(definition)?);
        }

        let surface = ResolverSurfaceBuilder::new(&self.config.context_type_name);
        declarations.extend(surface.build(emitter.objects(), self.document.names()));

        let args = declarations
            .iter()
            .filter(|d| matches!(d.origin(), DeclarationOrigin::FieldArguments { .. }))
            .count();
        tracing::info!(
            "Generated {} declarations ({} argument declarations, {} skipped definitions)",
            declarations.len(),
            args,
            self.document.unhandled.len()
        );

        Ok(Generated {
            declarations,
            skipped: self.document.unhandled.clone(),
        })
    }

    /// Runs ordering and graphql-js schema object emission.
    ///
    /// # Errors
    /// Returns the first fatal error; no partial output is produced.
    pub fn generate_schema_objects(&self) -> Result<Vec<SchemaObject>, CodegenError> {
        let ordered = self.ordered_definitions()?;

        let mut emitter = SchemaObjectEmitter::new(
            TypeTranslator::new(self.document),
            self.config.emit_resolver_functions,
        );
        let objects = ordered
            .into_iter()
            .map(|definition| emitter.emit(definition))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            "Generated {} schema objects ({} skipped definitions)",
            objects.len(),
            self.document.unhandled.len()
        );
        Ok(objects)
    }

    fn ordered_definitions(&self) -> Result<Vec<&'a Definition>, CodegenError> {
        for unhandled in &self.document.unhandled {
            match &unhandled.name {
                Some(name) => tracing::warn!(
                    "Definition kind is not handled ({} {}), skipping",
                    unhandled.kind,
                    name
                ),
                None => tracing::warn!(
                    "Definition kind is not handled ({}), skipping",
                    unhandled.kind
                ),
            }
        }

        let document = self.document;
        let policy = self.config.ordering.policy();
        let ordered = policy.order(&document.definitions)?;
        tracing::debug!(
            "Ordered {} definitions using {}",
            ordered.len(),
            policy.name()
        );
        Ok(ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderingStrategy;
    use crate::schema_object::SchemaClass;
    use gqltype_schema::parse_document;

    const SHOP_SDL: &str = r#"
        schema { query: Query }

        type Query {
          products(first: Int): [Product!]!
          viewer: Customer
        }

        type Mutation {
          checkout(cartId: ID!): Order
        }

        scalar Money

        enum OrderStatus { OPEN PAID }

        interface Node { id: ID! }

        type Customer implements Node {
          id: ID!
          orders(status: OrderStatus): [Order!]!
        }

        type Product implements Node {
          id: ID!
          price: Money!
        }

        type Order implements Node {
          id: ID!
          status: OrderStatus!
          lines: [Product!]!
        }

        input CartInput { productIds: [ID!]! }

        union SearchHit = Product | Customer
    "#;

    fn generate(config: &GeneratorConfig) -> Result<Generated, CodegenError> {
        let doc = parse_document(SHOP_SDL).expect("Failed to parse");
        Generator::new(&doc, config).generate()
    }

    #[test]
    fn test_generate_kind_priority_sequence() {
        let generated = generate(&GeneratorConfig::default()).expect("Failed to generate");

        let names: Vec<&str> = generated.names().collect();
        assert_eq!(
            names,
            vec![
                "Money",
                "OrderStatus",
                "Node",
                "OrdersArgs",
                "Customer",
                "Order",
                "Product",
                "CartInput",
                "SearchHit",
                "CheckoutArgs",
                "Mutation",
                "ProductsArgs",
                "Query",
                "EntityResolver",
                "Resolver",
            ]
        );
        assert_eq!(generated.len(), 15);
    }

    #[test]
    fn test_generate_reports_skipped_definitions() {
        let generated = generate(&GeneratorConfig::default()).expect("Failed to generate");
        assert_eq!(
            generated.skipped,
            vec![UnhandledDefinition::new("schema", None)]
        );
    }

    #[test]
    fn test_generate_entity_resolver_follows_emission_order() {
        let generated = generate(&GeneratorConfig::default()).expect("Failed to generate");
        let contract = generated
            .get("EntityResolver")
            .and_then(Declaration::as_structure)
            .expect("EntityResolver should be emitted");

        let methods: Vec<&str> = contract.members.iter().map(|m| m.name()).collect();
        assert_eq!(
            methods,
            vec![
                "resolveCustomer",
                "resolveOrder",
                "resolveProduct",
                "resolveMutation",
                "resolveQuery"
            ]
        );
    }

    #[test]
    fn test_generate_dependency_priority() {
        let config = GeneratorConfig::new().ordering(OrderingStrategy::DependencyPriority);
        let generated = generate(&config).expect("Failed to generate");

        let position = |name: &str| {
            generated
                .names()
                .position(|n| n == name)
                .expect("declaration should be emitted")
        };
        assert!(position("Product") < position("Query"));
        assert!(position("Order") < position("Mutation"));
        assert!(position("Order") < position("Customer"));
        assert!(position("Customer") < position("SearchHit"));
        assert_eq!(generated.len(), 15);
    }

    #[test]
    fn test_generate_is_repeatable() {
        let doc = parse_document(SHOP_SDL).expect("Failed to parse");
        let config = GeneratorConfig::default();
        let generator = Generator::new(&doc, &config);

        let first = generator.generate().expect("Failed to generate");
        let second = generator.generate().expect("Failed to generate");
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_without_objects_has_no_contracts() {
        let doc = parse_document("scalar Date\nenum Role { ADMIN }").expect("Failed to parse");
        let config = GeneratorConfig::default();
        let generated = Generator::new(&doc, &config)
            .generate()
            .expect("Failed to generate");

        let names: Vec<&str> = generated.names().collect();
        assert_eq!(names, vec!["Date", "Role"]);
    }

    #[test]
    fn test_generate_aborts_on_cycle() {
        let doc = parse_document("type A { b: B }\ntype B { a: A }").expect("Failed to parse");
        let config = GeneratorConfig::new().ordering(OrderingStrategy::DependencyPriority);
        let result = Generator::new(&doc, &config).generate();
        assert!(matches!(result, Err(CodegenError::CircularDependency { .. })));
    }

    #[test]
    fn test_generate_schema_objects_follow_ordering() {
        let doc = parse_document(SHOP_SDL).expect("Failed to parse");
        let config = GeneratorConfig::default();
        let objects = Generator::new(&doc, &config)
            .generate_schema_objects()
            .expect("Failed to generate");

        let names: Vec<&str> = objects.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Money",
                "OrderStatus",
                "Node",
                "Customer",
                "Order",
                "Product",
                "CartInput",
                "SearchHit",
                "Mutation",
                "Query",
            ]
        );
        assert_eq!(objects[7].class, SchemaClass::Union);
    }

    #[test]
    fn test_generate_schema_objects_aborts_on_cycle() {
        let doc = parse_document("type A { b: B }\ntype B { a: A }").expect("Failed to parse");
        let config = GeneratorConfig::new().ordering(OrderingStrategy::DependencyPriority);
        let result = Generator::new(&doc, &config).generate_schema_objects();
        assert!(matches!(result, Err(CodegenError::CircularDependency { .. })));
    }

    #[test]
    fn test_generate_aborts_on_unknown_type() {
        let doc = parse_document("type A { b: Missing }").expect("Failed to parse");
        let config = GeneratorConfig::default();
        let result = Generator::new(&doc, &config).generate();
        assert!(matches!(
            result,
            Err(CodegenError::InvalidTypeReference { ref type_name, .. }) if type_name == "Missing"
        ));
    }
}
