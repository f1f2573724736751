//! Simplified parameter-schema builder.
//!
//! The hosting framework wants a flat object schema per tool: field name to
//! `{title, type}` plus the required-field list. This module turns a typed
//! field description into exactly that shape. Descriptions, defaults, enums
//! and nesting are deliberately dropped; only title and primitive type
//! survive.

use serde_json::{json, Map, Value};

/// Primitive parameter types the adapters accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
}

impl ParamType {
    /// JSON-schema type name.
    pub fn as_json_type(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
        }
    }
}

/// One named, typed input field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub ty: ParamType,
    /// Guidance for the model choosing arguments. Not emitted in the
    /// simplified schema; kept on the spec for documentation value.
    pub description: Option<&'static str>,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &'static str, title: &'static str, ty: ParamType) -> Self {
        Self {
            name,
            title,
            ty,
            description: None,
            required: true,
        }
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Build the simplified object schema for a set of fields.
///
/// Pure transform: the same fields always produce the same schema.
pub fn object_schema(fields: &[FieldSpec]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in fields {
        properties.insert(
            field.name.to_string(),
            json!({
                "title": field.title,
                "type": field.ty.as_json_type(),
            }),
        );
        if field.required {
            required.push(Value::String(field.name.to_string()));
        }
    }

    json!({
        "type": "object",
        "default": {},
        "properties": properties,
        "required": required,
    })
}
