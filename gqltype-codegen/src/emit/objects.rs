//! Object declarations and their synthesized argument declarations.

use super::DeclarationEmitter;
use crate::declaration::{
    ARGS_SUFFIX, Declaration, DeclarationOrigin, Heritage, Member, MethodMember, Parameter,
    PropertyMember, StructureDecl, TYPENAME_PROPERTY, resolver_params,
};
use crate::error::CodegenError;
use crate::translate::{TargetExpr, TranslationMode};
use gqltype_schema::{Field, ObjectDef, is_root_operation_name};
use heck::ToUpperCamelCase;

/// Returns the argument declaration name for a field, e.g. `posts` -> `PostsArgs`.
#[must_use]
pub fn args_type_name(field_name: &str) -> String {
    format!("{field_name} {ARGS_SUFFIX}").to_upper_camel_case()
}

impl DeclarationEmitter<'_> {
    /// Emits the argument declarations of the object followed by the object.
    pub(super) fn emit_object(
        &mut self,
        object: &ObjectDef,
    ) -> Result<Vec<Declaration>, CodegenError> {
        let mut structure =
            StructureDecl::new(&object.name, DeclarationOrigin::Definition(object.name.clone()));
        structure.description = object.description.clone();

        for interface in &object.interfaces {
            if !self.translator.is_known(interface) {
                return Err(CodegenError::invalid_type(interface).with_context(&object.name));
            }
            structure.extends.push(Heritage::new(interface));
        }

        structure.members.push(Member::Property(PropertyMember::new(
            TYPENAME_PROPERTY,
            TargetExpr::StringLiteral(object.name.clone()),
            true,
        )));

        let root = is_root_operation_name(&object.name);
        let mut fields: Vec<&Field> = object.fields.iter().collect();
        fields.sort_by(|a, b| a.name.cmp(&b.name));

        let mut declarations = Vec::new();
        for field in fields {
            let location = format!("{}.{}", object.name, field.name);
            let member = if field.has_arguments() {
                let args = self.emit_arguments(&object.name, field)?;
                let method = self.resolver_method(
                    field,
                    resolver_params(TargetExpr::reference(&args.name), self.context_type),
                    &location,
                )?;
                declarations.push(Declaration::Structure(args));
                method
            } else if root {
                self.resolver_method(field, Vec::new(), &location)?
            } else {
                let ty = self
                    .translator
                    .translate(&field.field_type, TranslationMode::Property)
                    .map_err(|e| e.with_context(&location))?;
                let mut property =
                    PropertyMember::new(&field.name, ty, !field.field_type.is_non_null());
                property.description = field.description.clone();
                Member::Property(property)
            };
            structure.members.push(member);
        }

        self.objects.push(object.name.clone());
        declarations.push(Declaration::Structure(structure));
        Ok(declarations)
    }

    /// Builds the argument declaration; required arguments come first.
    fn emit_arguments(&self, object: &str, field: &Field) -> Result<StructureDecl, CodegenError> {
        let mut arguments: Vec<_> = field.arguments.iter().collect();
        arguments.sort_by_key(|argument| !argument.is_required());

        let mut structure = StructureDecl::new(
            args_type_name(&field.name),
            DeclarationOrigin::FieldArguments {
                object: object.to_string(),
                field: field.name.clone(),
            },
        );
        let location = format!("{}.{}", object, field.name);
        for argument in arguments {
            let property = self.input_property(&location, argument)?;
            structure.members.push(Member::Property(property));
        }
        Ok(structure)
    }

    fn resolver_method(
        &self,
        field: &Field,
        params: Vec<Parameter>,
        location: &str,
    ) -> Result<Member, CodegenError> {
        let returns = self
            .translator
            .translate(&field.field_type, TranslationMode::Resolver)
            .map_err(|e| e.with_context(location))?;

        Ok(Member::Method(MethodMember {
            name: field.name.clone(),
            params,
            returns,
            optional: false,
            description: field.description.clone(),
        }))
    }
}
