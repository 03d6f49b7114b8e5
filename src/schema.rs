//! Schema node model - the shared substrate for validation and OpenAPI generation.

use indexmap::IndexMap;
use serde_json::Number;

/// Modifier flags attached to every schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SchemaOptions {
    /// An absent value is accepted; containing objects render the property
    /// name with a `?` suffix.
    pub optional: bool,
    /// Carried into the OpenAPI rendering as `nullable: true`. Appends
    /// `" | null"` to the definition when applied.
    pub nullable: bool,
}

/// A literal admitted by an enum schema.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumValue {
    Str(String),
    Num(Number),
}

impl EnumValue {
    /// Renders the literal as it appears in definitions: strings quoted,
    /// numbers bare.
    fn render(&self) -> String {
        match self {
            EnumValue::Str(s) => format!("\"{s}\""),
            EnumValue::Num(n) => n.to_string(),
        }
    }
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        EnumValue::Str(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        EnumValue::Str(value)
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        EnumValue::Num(Number::from(value))
    }
}

impl From<u64> for EnumValue {
    fn from(value: u64) -> Self {
        EnumValue::Num(Number::from(value))
    }
}

impl From<Number> for EnumValue {
    fn from(value: Number) -> Self {
        EnumValue::Num(value)
    }
}

/// Variant payload of a schema node.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    Number,
    String,
    Boolean,
    /// Ordered literal values, strings or numbers.
    Enum(Vec<EnumValue>),
    /// Uniform element schema.
    Array(Box<Schema>),
    /// Property name to schema, insertion order preserved. A property is
    /// required iff its schema is not optional.
    Object(IndexMap<String, Schema>),
    /// Alternatives. Never contains a nested union, and no two children share
    /// a definition (both guaranteed by [`Schema::union`]).
    Union(Vec<Schema>),
    /// Open string-keyed map with a uniform value schema.
    Dict(Box<Schema>),
}

/// One node of the schema tree.
///
/// Carries the variant payload, the modifier options, and the canonical
/// textual definition computed at construction time. The definition is used
/// for error messages and as the deduplication key inside unions.
///
/// Construction never fails: degenerate shapes (empty enums, empty unions,
/// empty objects) are accepted as-is. Semantic correctness is the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    kind: SchemaKind,
    options: SchemaOptions,
    definition: String,
}

impl Schema {
    fn with_definition(kind: SchemaKind, definition: impl Into<String>) -> Self {
        Self {
            kind,
            options: SchemaOptions::default(),
            definition: definition.into(),
        }
    }

    /// A number schema, definition `number`.
    pub fn number() -> Self {
        Self::with_definition(SchemaKind::Number, "number")
    }

    /// A string schema, definition `string`.
    pub fn string() -> Self {
        Self::with_definition(SchemaKind::String, "string")
    }

    /// A boolean schema, definition `boolean`.
    pub fn boolean() -> Self {
        Self::with_definition(SchemaKind::Boolean, "boolean")
    }

    /// A literal-set schema. Definition joins the literals with `" | "`,
    /// quoting strings: `Schema::enumeration(["a", "b"])` renders
    /// `"a" | "b"`.
    pub fn enumeration<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<EnumValue>,
    {
        let values: Vec<EnumValue> = values.into_iter().map(Into::into).collect();
        let definition = values
            .iter()
            .map(EnumValue::render)
            .collect::<Vec<_>>()
            .join(" | ");
        Self::with_definition(SchemaKind::Enum(values), definition)
    }

    /// An array schema, definition `Array<item>`.
    pub fn array(item: Schema) -> Self {
        let definition = format!("Array<{}>", item.definition);
        Self::with_definition(SchemaKind::Array(Box::new(item)), definition)
    }

    /// An object schema over ordered `(name, schema)` pairs.
    ///
    /// Definition renders each property as `name: def`, or `name?: def` when
    /// the property schema is optional, joined with `", "` and wrapped in
    /// braces. An empty object renders `{}`.
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        let properties: IndexMap<String, Schema> = properties
            .into_iter()
            .map(|(name, schema)| (name.into(), schema))
            .collect();
        let definition = if properties.is_empty() {
            "{}".to_string()
        } else {
            let fields = properties
                .iter()
                .map(|(name, schema)| {
                    if schema.options.optional {
                        format!("{name}?: {}", schema.definition)
                    } else {
                        format!("{name}: {}", schema.definition)
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{ {fields} }}")
        };
        Self::with_definition(SchemaKind::Object(properties), definition)
    }

    /// A union schema over the given alternatives.
    ///
    /// Arguments that are themselves unions contribute their children instead
    /// (one level suffices: union children are never unions). Children are
    /// then deduplicated by definition text, first occurrence wins, order
    /// preserved. A union of zero schemas is legal and has an empty
    /// definition.
    pub fn union<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Schema>,
    {
        let mut flat = Vec::new();
        for item in items {
            match item.kind {
                SchemaKind::Union(children) => flat.extend(children),
                _ => flat.push(item),
            }
        }

        let mut unique: IndexMap<String, Schema> = IndexMap::new();
        for item in flat {
            unique.entry(item.definition.clone()).or_insert(item);
        }

        let definition = unique.keys().cloned().collect::<Vec<_>>().join(" | ");
        Self::with_definition(SchemaKind::Union(unique.into_values().collect()), definition)
    }

    /// An open string-keyed map schema, definition
    /// `{ [key: string]: value }`.
    pub fn dict(value: Schema) -> Self {
        let definition = format!("{{ [key: string]: {} }}", value.definition);
        Self::with_definition(SchemaKind::Dict(Box::new(value)), definition)
    }

    /// Mark this node optional: an absent value validates, and a containing
    /// object renders the property with a `?` suffix. The node's own
    /// definition is unchanged.
    ///
    /// Apply modifiers before placing a node inside a parent; the parent's
    /// definition is computed at construction.
    pub fn optional(mut self) -> Self {
        self.options.optional = true;
        self
    }

    /// Mark this node nullable and append `" | null"` to its definition.
    ///
    /// Appending is not idempotent: applying `nullable()` twice yields a
    /// definition ending in `" | null | null"`.
    pub fn nullable(mut self) -> Self {
        self.options.nullable = true;
        self.definition.push_str(" | null");
        self
    }

    /// The variant payload.
    pub fn kind(&self) -> &SchemaKind {
        &self.kind
    }

    /// The modifier flags.
    pub fn options(&self) -> SchemaOptions {
        self.options
    }

    /// The canonical textual rendering of this node's shape.
    pub fn definition(&self) -> &str {
        &self.definition
    }
}
