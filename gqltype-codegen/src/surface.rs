//! Aggregate resolver contracts.
//!
//! After every definition has been emitted, two contracts are appended:
//! the entity resolver contract (one optional dispatch method per object)
//! and the resolver contract (Query and Mutation without their
//! discriminant).

use crate::declaration::{
    Declaration, DeclarationOrigin, ENTITY_RESOLVER_NAME, Heritage, Member, MethodMember,
    RESOLVER_NAME, StructureDecl, TYPENAME_PROPERTY, resolver_params,
};
use crate::translate::TargetExpr;
use gqltype_schema::is_root_operation_name;

pub use gqltype_schema::to_entity_resolver_name;

/// Builder of the aggregate contracts.
#[derive(Debug, Clone, Copy)]
pub struct ResolverSurfaceBuilder<'a> {
    context_type: &'a str,
}

impl<'a> ResolverSurfaceBuilder<'a> {
    /// Creates a new builder using the given context type name.
    #[must_use]
    pub fn new(context_type: &'a str) -> Self {
        Self { context_type }
    }

    /// Builds the entity resolver contract, if any object exists.
    ///
    /// # Arguments
    /// * `objects` - Object names in emission order
    #[must_use]
    pub fn entity_resolver_contract(&self, objects: &[String]) -> Option<Declaration> {
        if objects.is_empty() {
            return None;
        }

        let mut contract =
            StructureDecl::new(ENTITY_RESOLVER_NAME, DeclarationOrigin::EntityResolverContract);
        for object in objects {
            contract.members.push(Member::Method(MethodMember {
                name: to_entity_resolver_name(object),
                params: resolver_params(TargetExpr::Unknown, self.context_type),
                returns: TargetExpr::reference(object).optional().awaitable(),
                optional: true,
                description: None,
            }));
        }
        Some(Declaration::Structure(contract))
    }

    /// Builds the resolver contract, if Query or Mutation exists.
    ///
    /// # Arguments
    /// * `names` - Definition names in document order
    #[must_use]
    pub fn resolver_contract<'n, I>(&self, names: I) -> Option<Declaration>
    where
        I: IntoIterator<Item = &'n str>,
    {
        let extends: Vec<Heritage> = names
            .into_iter()
            .filter(|name| is_root_operation_name(name))
            .map(|name| Heritage::omitting(name, TYPENAME_PROPERTY))
            .collect();
        if extends.is_empty() {
            return None;
        }

        let mut contract = StructureDecl::new(RESOLVER_NAME, DeclarationOrigin::ResolverContract);
        contract.extends = extends;
        Some(Declaration::Structure(contract))
    }

    /// Builds both contracts, entity resolver first.
    #[must_use]
    pub fn build<'n, I>(&self, objects: &[String], names: I) -> Vec<Declaration>
    where
        I: IntoIterator<Item = &'n str>,
    {
        self.entity_resolver_contract(objects)
            .into_iter()
            .chain(self.resolver_contract(names))
            .collect()
    }
}
