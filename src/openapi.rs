//! OpenAPI 3.0.1 document generation from operation descriptors.
//!
//! A pure, single-pass projection: the same builder always renders the same
//! document. Output is built as `serde_json::Map` inserts so key order in the
//! emitted document follows insertion order.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::http::{Operation, Parameter, ParameterKind};
use crate::schema::{EnumValue, Schema, SchemaKind};

/// API metadata for the document's `info` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Info {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: None,
        }
    }

    /// Set the optional description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn to_value(&self) -> Value {
        let mut info = Map::new();
        info.insert("title".to_string(), Value::String(self.title.clone()));
        info.insert("version".to_string(), Value::String(self.version.clone()));
        if let Some(description) = &self.description {
            info.insert("description".to_string(), Value::String(description.clone()));
        }
        Value::Object(info)
    }
}

/// Builds an OpenAPI 3.0.1 document from declared operations and a table of
/// named response schemas.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use reqschema::{Info, OasBuilder, Operation, Parameter, Schema};
///
/// let user = Arc::new(Schema::object([("id", Schema::string())]));
/// let operations = vec![Operation::get(
///     "getUser",
///     "/user/{id}",
///     [("id", Parameter::path(Schema::string()))],
///     Arc::clone(&user),
/// )];
///
/// let doc = OasBuilder::new(Info::new("demo", "1.0.0"), operations)
///     .named_response("User", user)
///     .build();
///
/// let schema = &doc["paths"]["/user/{id}"]["get"]["responses"]["200"]
///     ["content"]["application/json"]["schema"];
/// assert_eq!(schema["$ref"], "#/components/schemas/User");
/// ```
#[derive(Debug, Clone)]
pub struct OasBuilder {
    info: Info,
    operations: Vec<Operation>,
    named_responses: Vec<(String, Arc<Schema>)>,
}

impl OasBuilder {
    pub fn new(info: Info, operations: Vec<Operation>) -> Self {
        Self {
            info,
            operations,
            named_responses: Vec::new(),
        }
    }

    /// Register a schema under `name` in `components.schemas`.
    ///
    /// An operation whose response holds the same `Arc` gets a `$ref` to the
    /// component instead of an inline schema. The lookup is by pointer, not
    /// by structure: a separately built but structurally equal schema still
    /// inlines.
    pub fn named_response(mut self, name: impl Into<String>, schema: Arc<Schema>) -> Self {
        self.named_responses.push((name.into(), schema));
        self
    }

    /// Register several named response schemas at once.
    pub fn named_responses<I, K>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Arc<Schema>)>,
        K: Into<String>,
    {
        for (name, schema) in entries {
            self.named_responses.push((name.into(), schema));
        }
        self
    }

    /// Render the document.
    ///
    /// Deterministic and idempotent for identical inputs. A `(path, method)`
    /// pair declared twice is last-write-wins; the later operation replaces
    /// the earlier one.
    pub fn build(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("openapi".to_string(), Value::String("3.0.1".to_string()));
        doc.insert("info".to_string(), self.info.to_value());
        doc.insert("paths".to_string(), self.create_paths());
        doc.insert("components".to_string(), self.create_components());
        Value::Object(doc)
    }

    fn create_paths(&self) -> Value {
        let mut paths = Map::new();
        for operation in &self.operations {
            let item = paths
                .entry(operation.path.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(methods) = item {
                methods.insert(
                    operation.method.as_str().to_string(),
                    self.create_operation(operation),
                );
            }
        }
        Value::Object(paths)
    }

    fn create_components(&self) -> Value {
        let mut schemas = Map::new();
        for (name, schema) in &self.named_responses {
            schemas.insert(name.clone(), create_schema(schema));
        }
        json!({ "schemas": schemas })
    }

    fn create_operation(&self, operation: &Operation) -> Value {
        let mut object = Map::new();
        object.insert(
            "operationId".to_string(),
            Value::String(operation.operation_id.clone()),
        );

        let non_body: Vec<(&String, &Parameter)> = operation
            .parameters
            .iter()
            .filter(|(_, parameter)| parameter.kind != ParameterKind::Body)
            .collect();
        let body: Vec<(&String, &Parameter)> = operation
            .parameters
            .iter()
            .filter(|(_, parameter)| parameter.kind == ParameterKind::Body)
            .collect();

        // Both fields are omitted entirely when empty, not rendered as [].
        if !non_body.is_empty() {
            let entries = non_body
                .iter()
                .map(|(name, parameter)| {
                    let required = match parameter.kind {
                        ParameterKind::Path => true,
                        _ => !parameter.schema.options().optional,
                    };
                    json!({
                        "required": required,
                        "name": name,
                        "in": parameter.kind.as_str(),
                        "schema": create_schema(&parameter.schema),
                    })
                })
                .collect();
            object.insert("parameters".to_string(), Value::Array(entries));
        }

        if !body.is_empty() {
            // Body parameters merge into one synthetic object schema, in
            // declaration order.
            let merged = Schema::object(
                body.iter()
                    .map(|(name, parameter)| ((*name).clone(), parameter.schema.clone())),
            );
            object.insert(
                "requestBody".to_string(),
                json!({
                    "required": true,
                    "content": {
                        "application/json": { "schema": create_schema(&merged) }
                    },
                }),
            );
        }

        object.insert(
            "responses".to_string(),
            json!({
                "200": {
                    "description": "success",
                    "content": {
                        "application/json": { "schema": self.response_schema(operation) }
                    },
                }
            }),
        );

        Value::Object(object)
    }

    fn response_schema(&self, operation: &Operation) -> Value {
        for (name, schema) in &self.named_responses {
            if Arc::ptr_eq(schema, &operation.response) {
                return json!({ "$ref": format!("#/components/schemas/{name}") });
            }
        }
        create_schema(&operation.response)
    }
}

/// Render a schema node as an OpenAPI `SchemaObject` value.
fn create_schema(schema: &Schema) -> Value {
    let mut object = Map::new();
    match schema.kind() {
        SchemaKind::Number => {
            object.insert("type".to_string(), json!("number"));
        }
        SchemaKind::String => {
            object.insert("type".to_string(), json!("string"));
        }
        SchemaKind::Boolean => {
            object.insert("type".to_string(), json!("boolean"));
        }
        SchemaKind::Array(item) => {
            object.insert("type".to_string(), json!("array"));
            object.insert("items".to_string(), create_schema(item));
        }
        SchemaKind::Object(properties) => {
            object.insert("type".to_string(), json!("object"));
            let mut rendered = Map::new();
            for (name, property) in properties {
                rendered.insert(name.clone(), create_schema(property));
            }
            object.insert("properties".to_string(), Value::Object(rendered));
            let required: Vec<Value> = properties
                .iter()
                .filter(|(_, property)| !property.options().optional)
                .map(|(name, _)| Value::String(name.clone()))
                .collect();
            object.insert("required".to_string(), Value::Array(required));
        }
        SchemaKind::Union(items) => {
            object.insert(
                "anyOf".to_string(),
                Value::Array(items.iter().map(create_schema).collect()),
            );
        }
        SchemaKind::Enum(values) => {
            let kind = match values.first() {
                Some(EnumValue::Num(_)) => "number",
                _ => "string",
            };
            object.insert("type".to_string(), json!(kind));
            object.insert(
                "enum".to_string(),
                Value::Array(
                    values
                        .iter()
                        .map(|value| match value {
                            EnumValue::Str(s) => Value::String(s.clone()),
                            EnumValue::Num(n) => Value::Number(n.clone()),
                        })
                        .collect(),
                ),
            );
        }
        SchemaKind::Dict(value) => {
            object.insert("type".to_string(), json!("object"));
            object.insert("additionalProperties".to_string(), create_schema(value));
        }
    }
    if schema.options().nullable {
        object.insert("nullable".to_string(), Value::Bool(true));
    }
    Value::Object(object)
}
