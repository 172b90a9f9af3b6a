//! Interface and input object declarations.

use super::DeclarationEmitter;
use crate::declaration::{Declaration, DeclarationOrigin, Member, PropertyMember, StructureDecl};
use crate::error::CodegenError;
use crate::translate::TranslationMode;
use gqltype_schema::{InputObjectDef, InputValue, InterfaceDef};

impl DeclarationEmitter<'_> {
    pub(super) fn emit_interface(
        &self,
        interface: &InterfaceDef,
    ) -> Result<Declaration, CodegenError> {
        let mut structure = StructureDecl::new(
            &interface.name,
            DeclarationOrigin::Definition(interface.name.clone()),
        );
        structure.description = interface.description.clone();

        for field in &interface.fields {
            let ty = self
                .translator
                .translate(&field.field_type, TranslationMode::Plain)
                .map_err(|e| e.with_context(format!("{}.{}", interface.name, field.name)))?;
            let mut property =
                PropertyMember::new(&field.name, ty, !field.field_type.is_non_null());
            property.description = field.description.clone();
            structure.members.push(Member::Property(property));
        }

        Ok(Declaration::Structure(structure))
    }

    pub(super) fn emit_input_object(
        &self,
        input: &InputObjectDef,
    ) -> Result<Declaration, CodegenError> {
        let mut structure =
            StructureDecl::new(&input.name, DeclarationOrigin::Definition(input.name.clone()));
        structure.description = input.description.clone();

        for field in &input.fields {
            let property = self.input_property(&input.name, field)?;
            structure.members.push(Member::Property(property));
        }

        Ok(Declaration::Structure(structure))
    }

    /// Plain property for an input field or field argument.
    pub(super) fn input_property(
        &self,
        parent: &str,
        value: &InputValue,
    ) -> Result<PropertyMember, CodegenError> {
        let ty = self
            .translator
            .translate(&value.value_type, TranslationMode::Plain)
            .map_err(|e| e.with_context(format!("{}.{}", parent, value.name)))?;

        let mut property = PropertyMember::new(&value.name, ty, !value.is_required());
        property.description = value.description.clone();
        property.default_value = value.default_value.clone();
        Ok(property)
    }
}
