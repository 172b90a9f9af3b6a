//! Declaration emission.
//!
//! One [`DeclarationEmitter`] consumes the ordered definitions of a document
//! and produces their declarations. Objects may additionally produce one
//! argument declaration per field with arguments; those are returned ahead
//! of the object declaration itself.

mod aliases;
mod objects;
mod schema_objects;
mod structures;

pub use objects::args_type_name;
pub use schema_objects::SchemaObjectEmitter;

use crate::declaration::Declaration;
use crate::error::CodegenError;
use crate::translate::TypeTranslator;
use gqltype_schema::Definition;

/// Emitter of declarations for ordered definitions.
#[derive(Debug)]
pub struct DeclarationEmitter<'a> {
    translator: TypeTranslator<'a>,
    context_type: &'a str,
    objects: Vec<String>,
}

impl<'a> DeclarationEmitter<'a> {
    /// Creates a new emitter.
    ///
    /// # Arguments
    /// * `translator` - Translator knowing every definition of the document
    /// * `context_type` - Context type name used in resolver signatures
    #[must_use]
    pub fn new(translator: TypeTranslator<'a>, context_type: &'a str) -> Self {
        Self {
            translator,
            context_type,
            objects: Vec::new(),
        }
    }

    /// Emits the declarations of one definition.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidTypeReference` if a field, argument or
    /// interface names an unknown type, and `CodegenError::InvalidUnionMember`
    /// if a union lists a name that is not an already emitted object.
    pub fn emit(&mut self, definition: &Definition) -> Result<Vec<Declaration>, CodegenError> {
        let declarations = match definition {
            Definition::Scalar(scalar) => vec![self.emit_scalar(scalar)],
            Definition::Enum(enum_def) => vec![self.emit_enum(enum_def)],
            Definition::Union(union) => vec![self.emit_union(union)?],
            Definition::Interface(interface) => vec![self.emit_interface(interface)?],
            Definition::InputObject(input) => vec![self.emit_input_object(input)?],
            Definition::Object(object) => self.emit_object(object)?,
        };

        tracing::debug!(
            "Emitted {} declaration(s) for {} {}",
            declarations.len(),
            definition.kind(),
            definition.name()
        );
        Ok(declarations)
    }

    /// Names of the objects emitted so far, in emission order.
    #[must_use]
    pub fn objects(&self) -> &[String] {
        &self.objects
    }

    /// Returns true if an object with this name has been emitted.
    #[must_use]
    pub fn has_emitted_object(&self, name: &str) -> bool {
        self.objects.iter().any(|o| o == name)
    }
}
