//! Output schemas and the schema capability.
//!
//! A tool's output contract is a JSON-Schema-shaped mapping ([`OutputSchema`]).
//! Types that can describe their own fields implement [`SchemaProvider`]; for
//! anything deriving [`schemars::JsonSchema`] the implementation is a one-liner
//! through [`schema_of`] (or the [`schema_provider!`](crate::schema_provider)
//! macro).

use crate::tool::ToolError;
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The semantic type vocabulary for tool inputs and outputs.
///
/// These are the tags an agent runtime understands in a tool signature,
/// matching the JSON Schema primitive type names plus `any` for values
/// with no declared shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Boolean,
    Integer,
    Number,
    Object,
    Array,
    Null,
    Any,
}

impl ValueType {
    /// Maps a JSON Schema `type` string onto the tag vocabulary.
    ///
    /// Returns `None` for strings outside the vocabulary (e.g. a schema
    /// using a type array or a non-standard tag).
    pub fn from_schema_type(s: &str) -> Option<Self> {
        match s {
            "string" => Some(Self::String),
            "boolean" => Some(Self::Boolean),
            "integer" => Some(Self::Integer),
            "number" => Some(Self::Number),
            "object" => Some(Self::Object),
            "array" => Some(Self::Array),
            "null" => Some(Self::Null),
            "any" => Some(Self::Any),
            _ => None,
        }
    }

    /// The lowercase tag as it appears in schemas and tool specs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Object => "object",
            Self::Array => "array",
            Self::Null => "null",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JSON-Schema-shaped description of a tool's output.
///
/// Carries the `type`, the per-field schemas under `properties`, the set of
/// `required` field names, and optional `title`/`description` metadata.
/// Field schemas are kept as raw JSON so constraints like `minimum`/`maximum`
/// survive unchanged from whatever generated them.
///
/// # Examples
///
/// Hand-written explicit schema:
///
/// ```rust
/// use toolwrap::schema::OutputSchema;
/// use serde_json::json;
///
/// let schema = OutputSchema::object()
///     .property("a", json!({"type": "string"}))
///     .require("a");
///
/// assert_eq!(schema.required, vec!["a".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSchema {
    /// The JSON Schema `type` of the whole output, usually `object`.
    #[serde(rename = "type")]
    pub schema_type: ValueType,

    /// Field name to field schema. Field schemas are arbitrary JSON.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,

    /// Names of fields that must be present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OutputSchema {
    /// Starts an empty `object`-typed schema.
    pub fn object() -> Self {
        Self {
            schema_type: ValueType::Object,
            properties: Map::new(),
            required: Vec::new(),
            title: None,
            description: None,
        }
    }

    /// Adds a field schema under `properties`.
    pub fn property(mut self, name: impl Into<String>, schema: Value) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Marks a field name as required.
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    /// Sets the schema title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the schema description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds an `OutputSchema` from a raw JSON Schema value.
    ///
    /// Keys outside the shape (`$schema`, `definitions`, `format`, ...) are
    /// ignored at the top level but preserved inside field schemas. A value
    /// without a plain-string `type`, or with a `type` outside the
    /// [`ValueType`] vocabulary, fails with
    /// [`ToolError::SchemaExtraction`].
    pub fn from_value(value: Value) -> Result<Self, ToolError> {
        serde_json::from_value(value).map_err(|e| ToolError::SchemaExtraction(e.to_string()))
    }
}

/// The schema capability: a type that can produce a JSON-Schema-shaped
/// description of its own fields.
///
/// This is the narrow interface the output-schema resolver depends on.
/// Structured data models implement it, usually by delegating to
/// [`schema_of`]:
///
/// ```rust
/// use schemars::JsonSchema;
/// use serde::Serialize;
/// use toolwrap::schema::{OutputSchema, SchemaProvider, schema_of};
/// use toolwrap::tool::ToolError;
///
/// #[derive(Serialize, JsonSchema)]
/// struct Report {
///     summary: String,
/// }
///
/// impl SchemaProvider for Report {
///     fn output_schema() -> Result<OutputSchema, ToolError> {
///         schema_of::<Report>()
///     }
/// }
/// ```
///
/// or via the [`schema_provider!`](crate::schema_provider) macro, which
/// expands to exactly that impl.
///
/// There is deliberately no blanket implementation over
/// [`schemars::JsonSchema`]: plain value types like `String` can generate a
/// schema but are not structured models, and a tool returning one should
/// carry no output schema at all.
pub trait SchemaProvider {
    /// Generates the schema for this type's fields.
    ///
    /// Fails with [`ToolError::SchemaExtraction`] when the generated schema
    /// cannot be shaped into an [`OutputSchema`].
    fn output_schema() -> Result<OutputSchema, ToolError>;
}

/// Generates an [`OutputSchema`] for any [`schemars::JsonSchema`] type.
///
/// This is the bridge between the ecosystem schema generator and the
/// [`OutputSchema`] shape; `#[schemars(...)]` constraints and doc-comment
/// descriptions pass through into the field schemas.
pub fn schema_of<T: JsonSchema>() -> Result<OutputSchema, ToolError> {
    let root = schema_for!(T);
    let value =
        serde_json::to_value(root).map_err(|e| ToolError::SchemaExtraction(e.to_string()))?;
    OutputSchema::from_value(value)
}

/// Implements [`SchemaProvider`] for one or more types by delegating to
/// [`schema_of`].
///
/// # Examples
///
/// ```rust
/// use schemars::JsonSchema;
/// use serde::Serialize;
///
/// #[derive(Serialize, JsonSchema)]
/// struct Forecast {
///     conditions: String,
/// }
///
/// toolwrap::schema_provider!(Forecast);
/// ```
#[macro_export]
macro_rules! schema_provider {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::schema::SchemaProvider for $ty {
                fn output_schema() -> ::std::result::Result<
                    $crate::schema::OutputSchema,
                    $crate::tool::ToolError,
                > {
                    $crate::schema::schema_of::<$ty>()
                }
            }
        )+
    };
}
