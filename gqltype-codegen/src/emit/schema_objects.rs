//! graphql-js schema object emission.
//!
//! Works over the same ordered definitions as [`DeclarationEmitter`]: every
//! definition becomes one [`SchemaObject`]. Field maps, interface lists and
//! union member lists are wrapped in thunks so definitions may reference
//! ones emitted later.
//!
//! [`DeclarationEmitter`]: super::DeclarationEmitter

use crate::error::CodegenError;
use crate::schema_object::{JsExpr, ObjectBuilder, SchemaClass, SchemaObject};
use crate::translate::TypeTranslator;
use gqltype_schema::{
    Definition, EnumDef, Field, InputObjectDef, InputValue, InterfaceDef, ObjectDef, ScalarDef,
    TypeReference, UnionDef, is_root_operation_name,
};

/// Emitter of graphql-js schema objects for ordered definitions.
#[derive(Debug)]
pub struct SchemaObjectEmitter<'a> {
    translator: TypeTranslator<'a>,
    emit_resolver_functions: bool,
    objects: Vec<String>,
}

impl<'a> SchemaObjectEmitter<'a> {
    /// Creates a new emitter.
    ///
    /// # Arguments
    /// * `translator` - Translator knowing every definition of the document
    /// * `emit_resolver_functions` - Add stub `resolve` functions to root
    ///   operation fields and to fields with arguments
    #[must_use]
    pub fn new(translator: TypeTranslator<'a>, emit_resolver_functions: bool) -> Self {
        Self {
            translator,
            emit_resolver_functions,
            objects: Vec::new(),
        }
    }

    /// Emits the schema object of one definition.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidTypeReference` for unknown type names
    /// and `CodegenError::InvalidUnionMember` if a union lists a name that
    /// is not an already emitted object.
    pub fn emit(&mut self, definition: &Definition) -> Result<SchemaObject, CodegenError> {
        let object = match definition {
            Definition::Scalar(scalar) => self.emit_scalar(scalar),
            Definition::Enum(enum_def) => self.emit_enum(enum_def),
            Definition::Union(union) => self.emit_union(union)?,
            Definition::Interface(interface) => self.emit_interface(interface)?,
            Definition::InputObject(input) => self.emit_input_object(input)?,
            Definition::Object(object) => {
                let emitted = self.emit_object(object)?;
                self.objects.push(object.name.clone());
                emitted
            }
        };

        tracing::debug!(
            "Emitted {} for {} {}",
            object.class.class_name(),
            definition.kind(),
            definition.name()
        );
        Ok(object)
    }

    /// Builds the graphql-js type expression of a type reference.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidTypeReference` if the terminal named
    /// type is neither built-in nor known.
    pub fn type_expr(&self, ty: &TypeReference) -> Result<JsExpr, CodegenError> {
        match ty {
            TypeReference::NonNull(inner) => Ok(JsExpr::new_instance(
                "graphql.GraphQLNonNull",
                self.type_expr(inner)?,
            )),
            TypeReference::List(inner) => Ok(JsExpr::new_instance(
                "graphql.GraphQLList",
                self.type_expr(inner)?,
            )),
            TypeReference::Named(name) => match builtin_type(name) {
                Some(builtin) => Ok(JsExpr::ident(builtin)),
                None if self.translator.is_known(name) => Ok(JsExpr::ident(name)),
                None => Err(CodegenError::invalid_type(name)),
            },
        }
    }

    fn emit_scalar(&self, scalar: &ScalarDef) -> SchemaObject {
        let config = ObjectBuilder::new()
            .entry("name", JsExpr::string(&scalar.name))
            .description(scalar.description.as_deref())
            .build();
        schema_object(&scalar.name, SchemaClass::Scalar, config)
    }

    fn emit_enum(&self, enum_def: &EnumDef) -> SchemaObject {
        let values = enum_def
            .values
            .iter()
            .map(|value| {
                let entry = ObjectBuilder::new()
                    .entry("value", JsExpr::string(&value.name))
                    .description(value.description.as_deref())
                    .build();
                (value.name.clone(), entry)
            })
            .collect();

        let config = ObjectBuilder::new()
            .entry("name", JsExpr::string(&enum_def.name))
            .description(enum_def.description.as_deref())
            .entry("values", JsExpr::Object(values))
            .build();
        schema_object(&enum_def.name, SchemaClass::Enum, config)
    }

    fn emit_union(&self, union: &UnionDef) -> Result<SchemaObject, CodegenError> {
        let invalid: Vec<String> = union
            .members
            .iter()
            .filter(|member| !self.objects.contains(member))
            .cloned()
            .collect();
        if !invalid.is_empty() {
            return Err(CodegenError::InvalidUnionMember {
                union: union.name.clone(),
                members: invalid,
            });
        }

        let types = union.members.iter().map(JsExpr::ident).collect();
        let config = ObjectBuilder::new()
            .entry("name", JsExpr::string(&union.name))
            .description(union.description.as_deref())
            .entry("types", JsExpr::Array(types).thunk())
            .build();
        Ok(schema_object(&union.name, SchemaClass::Union, config))
    }

    fn emit_interface(&self, interface: &InterfaceDef) -> Result<SchemaObject, CodegenError> {
        let config = ObjectBuilder::new()
            .entry("name", JsExpr::string(&interface.name))
            .description(interface.description.as_deref())
            .entry("fields", self.output_fields(&interface.name, &interface.fields)?)
            .build();
        Ok(schema_object(&interface.name, SchemaClass::Interface, config))
    }

    fn emit_object(&self, object: &ObjectDef) -> Result<SchemaObject, CodegenError> {
        let mut interfaces = Vec::with_capacity(object.interfaces.len());
        for interface in &object.interfaces {
            if !self.translator.is_known(interface) {
                return Err(CodegenError::invalid_type(interface).with_context(&object.name));
            }
            interfaces.push(JsExpr::ident(interface));
        }

        let config = ObjectBuilder::new()
            .entry("name", JsExpr::string(&object.name))
            .description(object.description.as_deref())
            .entry_opt(
                "interfaces",
                (!interfaces.is_empty()).then(|| JsExpr::Array(interfaces).thunk()),
            )
            .entry("fields", self.output_fields(&object.name, &object.fields)?)
            .build();
        Ok(schema_object(&object.name, SchemaClass::Object, config))
    }

    fn emit_input_object(&self, input: &InputObjectDef) -> Result<SchemaObject, CodegenError> {
        let mut fields = Vec::with_capacity(input.fields.len());
        for field in &input.fields {
            fields.push((field.name.clone(), self.input_value(&input.name, field)?));
        }

        let config = ObjectBuilder::new()
            .entry("name", JsExpr::string(&input.name))
            .description(input.description.as_deref())
            .entry("fields", JsExpr::Object(fields).thunk())
            .build();
        Ok(schema_object(&input.name, SchemaClass::InputObject, config))
    }

    /// Field map of an object or interface, in declared order.
    fn output_fields(&self, parent: &str, fields: &[Field]) -> Result<JsExpr, CodegenError> {
        let root = is_root_operation_name(parent);
        let mut entries = Vec::with_capacity(fields.len());

        for field in fields {
            let location = format!("{parent}.{}", field.name);
            let ty = self
                .type_expr(&field.field_type)
                .map_err(|e| e.with_context(&location))?;

            let mut args = Vec::with_capacity(field.arguments.len());
            for argument in &field.arguments {
                args.push((argument.name.clone(), self.input_value(&location, argument)?));
            }

            let stub = self.emit_resolver_functions && (root || field.has_arguments());
            let entry = ObjectBuilder::new()
                .entry("type", ty)
                .description(field.description.as_deref())
                .entry_opt("args", (!args.is_empty()).then(|| JsExpr::Object(args)))
                .entry_opt("resolve", stub.then_some(JsExpr::StubFunction))
                .build();
            entries.push((field.name.clone(), entry));
        }

        Ok(JsExpr::Object(entries).thunk())
    }

    /// Configuration of an argument or input field.
    fn input_value(&self, parent: &str, value: &InputValue) -> Result<JsExpr, CodegenError> {
        let ty = self
            .type_expr(&value.value_type)
            .map_err(|e| e.with_context(format!("{parent}.{}", value.name)))?;

        Ok(ObjectBuilder::new()
            .entry("type", ty)
            .description(value.description.as_deref())
            .entry_opt("defaultValue", value.default_value.as_ref().map(JsExpr::from_const))
            .build())
    }
}

fn schema_object(name: &str, class: SchemaClass, config: JsExpr) -> SchemaObject {
    SchemaObject {
        name: name.to_string(),
        class,
        config,
    }
}

/// graphql-js built-in scalar for a name, if any.
fn builtin_type(name: &str) -> Option<&'static str> {
    match name {
        "String" => Some("graphql.GraphQLString"),
        "Boolean" => Some("graphql.GraphQLBoolean"),
        "Int" => Some("graphql.GraphQLInt"),
        "Float" => Some("graphql.GraphQLFloat"),
        "ID" => Some("graphql.GraphQLID"),
        _ => None,
    }
}
