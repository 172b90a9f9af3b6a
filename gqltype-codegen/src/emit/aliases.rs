//! Scalar, enum and union declarations.

use super::DeclarationEmitter;
use crate::declaration::{AliasDecl, Declaration, DeclarationOrigin, EnumDecl, EnumMember};
use crate::error::CodegenError;
use crate::translate::TargetExpr;
use gqltype_schema::{EnumDef, ScalarDef, UnionDef};

impl DeclarationEmitter<'_> {
    /// Scalars become opaque aliases.
    pub(super) fn emit_scalar(&self, scalar: &ScalarDef) -> Declaration {
        Declaration::Alias(AliasDecl {
            name: scalar.name.clone(),
            description: scalar.description.clone(),
            target: TargetExpr::Any,
            origin: DeclarationOrigin::Definition(scalar.name.clone()),
        })
    }

    pub(super) fn emit_enum(&self, enum_def: &EnumDef) -> Declaration {
        let members = enum_def
            .values
            .iter()
            .map(|value| EnumMember {
                name: value.name.clone(),
                value: value.name.clone(),
                description: value.description.clone(),
            })
            .collect();

        Declaration::Enum(EnumDecl {
            name: enum_def.name.clone(),
            description: enum_def.description.clone(),
            members,
            origin: DeclarationOrigin::Definition(enum_def.name.clone()),
        })
    }

    /// Unions alias the union of their members, which must be emitted objects.
    pub(super) fn emit_union(&self, union: &UnionDef) -> Result<Declaration, CodegenError> {
        let invalid: Vec<String> = union
            .members
            .iter()
            .filter(|member| !self.has_emitted_object(member))
            .cloned()
            .collect();
        if !invalid.is_empty() {
            return Err(CodegenError::InvalidUnionMember {
                union: union.name.clone(),
                members: invalid,
            });
        }

        let members = union
            .members
            .iter()
            .map(|member| {
                self.translator
                    .translate_named(member)
                    .map_err(|e| e.with_context(&union.name))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Declaration::Alias(AliasDecl {
            name: union.name.clone(),
            description: union.description.clone(),
            target: TargetExpr::Union(members),
            origin: DeclarationOrigin::Definition(union.name.clone()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::declaration::Declaration;
    use crate::emit::tests::emit_all;
    use crate::error::CodegenError;
    use gqltype_schema::parse_document;

    #[test]
    fn test_scalar_is_opaque_alias() {
        let doc = parse_document("\"ISO date\" scalar Date").expect("Failed to parse");
        let declarations = emit_all(&doc).expect("Failed to emit");

        let Declaration::Alias(alias) = &declarations[0] else {
            panic!("scalar should emit an alias");
        };
        assert_eq!(alias.target.to_string(), "any");
        assert_eq!(alias.description.as_deref(), Some("ISO date"));
    }

    #[test]
    fn test_enum_members_use_value_names() {
        let doc = parse_document("enum Role { ADMIN \"Plain user\" MEMBER }")
            .expect("Failed to parse");
        let declarations = emit_all(&doc).expect("Failed to emit");

        let Declaration::Enum(role) = &declarations[0] else {
            panic!("enum should emit an enum");
        };
        let pairs: Vec<(&str, &str)> = role
            .members
            .iter()
            .map(|m| (m.name.as_str(), m.value.as_str()))
            .collect();
        assert_eq!(pairs, vec![("ADMIN", "ADMIN"), ("MEMBER", "MEMBER")]);
        assert_eq!(role.members[1].description.as_deref(), Some("Plain user"));
    }

    #[test]
    fn test_union_of_emitted_objects() {
        let doc = parse_document("type User { id: ID }\ntype Post { id: ID }\nunion Entity = User | Post")
            .expect("Failed to parse");
        let declarations = emit_all(&doc).expect("Failed to emit");

        let Declaration::Alias(alias) = &declarations[2] else {
            panic!("union should emit an alias");
        };
        assert_eq!(alias.target.to_string(), "User | Post");
    }

    #[test]
    fn test_union_lists_exactly_invalid_members() {
        let sdl = r#"
            type User { id: ID }
            scalar Date
            union Entity = User | Date | Ghost
        "#;
        // Ghost is unknown, so the translator check must not run first.
        let doc = parse_document(sdl).expect("Failed to parse");
        let result = emit_all(&doc);

        match result {
            Err(CodegenError::InvalidUnionMember { union, members }) => {
                assert_eq!(union, "Entity");
                assert_eq!(members, vec!["Date".to_string(), "Ghost".to_string()]);
            }
            other => panic!("expected invalid union member, got {other:?}"),
        }
    }

    #[test]
    fn test_union_before_its_objects_fails() {
        let doc = parse_document("union Entity = User\ntype User { id: ID }")
            .expect("Failed to parse");
        let result = emit_all(&doc);
        assert!(matches!(
            result,
            Err(CodegenError::InvalidUnionMember { ref members, .. }) if members == &["User".to_string()]
        ));
    }
}
