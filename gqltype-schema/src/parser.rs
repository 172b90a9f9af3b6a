//! GraphQL SDL front-end.
//!
//! Builds a [`Document`] from SDL text using `graphql-parser`. Only type
//! definitions are turned into [`Definition`]s; schema definitions,
//! directive definitions and type extensions are recorded as
//! [`UnhandledDefinition`]s so the generator can report them.

use crate::error::ParseError;
use crate::types::{
    ConstValue, Definition, Document, EnumDef, EnumValue, Field, InputObjectDef, InputValue,
    InterfaceDef, ObjectDef, ScalarDef, TypeReference, UnhandledDefinition, UnionDef,
};
use graphql_parser::schema::{self as gql, TypeDefinition, TypeExtension};

/// Parses an SDL document from a string.
///
/// # Arguments
/// * `sdl` - GraphQL SDL content (already merged into a single document)
///
/// # Returns
/// Parsed document or parse error.
///
/// # Errors
/// Returns `ParseError` if the SDL is malformed, declares a name twice, or
/// uses a variable as a default value.
pub fn parse_document(sdl: &str) -> Result<Document, ParseError> {
    let parsed =
        gql::parse_schema::<String>(sdl).map_err(|e| ParseError::syntax(e.to_string()))?;

    let mut document = Document::new();
    for definition in parsed.definitions {
        match definition {
            gql::Definition::TypeDefinition(type_def) => {
                let definition = convert_type_definition(type_def)?;
                if document.has_definition(definition.name()) {
                    return Err(ParseError::duplicate(
                        definition.kind().keyword(),
                        definition.name(),
                    ));
                }
                document.add_definition(definition);
            }
            gql::Definition::SchemaDefinition(_) => {
                document.add_unhandled(UnhandledDefinition::new("schema", None));
            }
            gql::Definition::DirectiveDefinition(directive) => {
                document.add_unhandled(UnhandledDefinition::new(
                    "directive",
                    Some(directive.name),
                ));
            }
            gql::Definition::TypeExtension(extension) => {
                document.add_unhandled(extension_record(extension));
            }
        }
    }

    Ok(document)
}

/// Parses an SDL document from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or the SDL is invalid.
pub fn parse_document_file(path: &std::path::Path) -> Result<Document, ParseError> {
    let sdl = std::fs::read_to_string(path)?;
    parse_document(&sdl)
}

fn convert_type_definition(
    type_def: TypeDefinition<'_, String>,
) -> Result<Definition, ParseError> {
    let definition = match type_def {
        TypeDefinition::Scalar(scalar) => Definition::Scalar(ScalarDef {
            name: scalar.name,
            description: scalar.description,
        }),
        TypeDefinition::Enum(enum_type) => Definition::Enum(EnumDef {
            name: enum_type.name,
            description: enum_type.description,
            values: enum_type
                .values
                .into_iter()
                .map(|v| EnumValue {
                    name: v.name,
                    description: v.description,
                })
                .collect(),
        }),
        TypeDefinition::Object(object) => {
            let fields = convert_fields(&object.name, object.fields)?;
            Definition::Object(ObjectDef {
                name: object.name,
                description: object.description,
                interfaces: object.implements_interfaces,
                fields,
            })
        }
        TypeDefinition::Interface(interface) => {
            let fields = convert_fields(&interface.name, interface.fields)?;
            Definition::Interface(InterfaceDef {
                name: interface.name,
                description: interface.description,
                fields,
            })
        }
        TypeDefinition::InputObject(input) => {
            let fields = input
                .fields
                .into_iter()
                .map(|f| convert_input_value(&input.name, f))
                .collect::<Result<Vec<_>, _>>()?;
            Definition::InputObject(InputObjectDef {
                name: input.name,
                description: input.description,
                fields,
            })
        }
        TypeDefinition::Union(union) => Definition::Union(UnionDef {
            name: union.name,
            description: union.description,
            members: union.types,
        }),
    };
    Ok(definition)
}

fn convert_fields(
    parent: &str,
    fields: Vec<gql::Field<'_, String>>,
) -> Result<Vec<Field>, ParseError> {
    fields
        .into_iter()
        .map(|field| {
            let location = format!("{}.{}", parent, field.name);
            let arguments = field
                .arguments
                .into_iter()
                .map(|a| convert_input_value(&location, a))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Field {
                name: field.name,
                description: field.description,
                field_type: convert_type(field.field_type),
                arguments,
            })
        })
        .collect()
}

fn convert_input_value(
    parent: &str,
    value: gql::InputValue<'_, String>,
) -> Result<InputValue, ParseError> {
    let location = format!("{}({})", parent, value.name);
    let default_value = value
        .default_value
        .map(|v| convert_value(&location, v))
        .transpose()?;
    Ok(InputValue {
        name: value.name,
        description: value.description,
        value_type: convert_type(value.value_type),
        default_value,
    })
}

fn convert_type(ty: gql::Type<'_, String>) -> TypeReference {
    match ty {
        gql::Type::NamedType(name) => TypeReference::Named(name),
        gql::Type::ListType(inner) => TypeReference::list(convert_type(*inner)),
        gql::Type::NonNullType(inner) => TypeReference::non_null(convert_type(*inner)),
    }
}

fn convert_value(location: &str, value: gql::Value<'_, String>) -> Result<ConstValue, ParseError> {
    let converted = match value {
        gql::Value::Null => ConstValue::Null,
        gql::Value::Int(number) => match number.as_i64() {
            Some(v) => ConstValue::Int(v),
            None => return Err(ParseError::unsupported_value(location, format!("{number:?}"))),
        },
        gql::Value::Float(v) => ConstValue::Float(v),
        gql::Value::String(v) => ConstValue::String(v),
        gql::Value::Boolean(v) => ConstValue::Boolean(v),
        gql::Value::Enum(v) => ConstValue::Enum(v),
        gql::Value::List(items) => ConstValue::List(
            items
                .into_iter()
                .map(|item| convert_value(location, item))
                .collect::<Result<_, _>>()?,
        ),
        gql::Value::Object(entries) => ConstValue::Object(
            entries
                .into_iter()
                .map(|(key, item)| Ok((key, convert_value(location, item)?)))
                .collect::<Result<_, ParseError>>()?,
        ),
        gql::Value::Variable(name) => {
            return Err(ParseError::unsupported_value(location, format!("${name}")));
        }
    };
    Ok(converted)
}

fn extension_record(extension: TypeExtension<'_, String>) -> UnhandledDefinition {
    let (kind, name) = match extension {
        TypeExtension::Scalar(e) => ("extend scalar", e.name),
        TypeExtension::Object(e) => ("extend type", e.name),
        TypeExtension::Interface(e) => ("extend interface", e.name),
        TypeExtension::Union(e) => ("extend union", e.name),
        TypeExtension::Enum(e) => ("extend enum", e.name),
        TypeExtension::InputObject(e) => ("extend input", e.name),
    };
    UnhandledDefinition::new(kind, Some(name))
}
