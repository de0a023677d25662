//! Typed functions wrapped as agent-facing tools.
//!
//! A [`Tool`] is a callable with declared metadata: a name, a description,
//! an input schema, a semantic output-type tag, and an optional output
//! schema. Tools are built through [`Tool::builder`], which validates the
//! name, derives the input schema from the argument type, and resolves the
//! output schema per [`resolve_output_schema`].

mod error;
mod output;

pub use error::ToolError;
pub use output::{ReturnSpec, SchemaThunk, resolve_output_schema};

use crate::schema::{OutputSchema, SchemaProvider, ValueType, schema_of};
use log::debug;
use regex::Regex;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// The boxed call surface of a wrapped tool: JSON arguments in, JSON value
/// out.
pub type ToolFn = Box<dyn Fn(Value) -> Result<Value, ToolError> + Send + Sync>;

/// One declared tool parameter: its type tag and an optional description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInput {
    #[serde(rename = "type")]
    pub input_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The serializable introspection view of a tool.
///
/// This is everything a runtime (or a debug script) needs to know about a
/// tool without calling it. `output_schema` is omitted from the serialized
/// form entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub inputs: BTreeMap<String, ToolInput>,
    pub output_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<OutputSchema>,
}

/// A callable exposed to an agent runtime.
///
/// # Examples
///
/// ```rust
/// use schemars::JsonSchema;
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
/// use toolwrap::tool::{Tool, ToolError};
///
/// #[derive(Deserialize, JsonSchema)]
/// struct EchoArgs {
///     /// The message to echo back
///     message: String,
/// }
///
/// #[derive(Serialize, JsonSchema)]
/// struct Echo {
///     message: String,
/// }
///
/// toolwrap::schema_provider!(Echo);
///
/// let tool = Tool::builder("echo")
///     .description("Echo a message back.")
///     .structured(|args: EchoArgs| {
///         Ok(Echo { message: args.message })
///     })?;
///
/// assert_eq!(tool.name(), "echo");
/// assert!(tool.output_schema().is_some());
///
/// let result = tool.call(json!({"message": "hi"}))?;
/// assert_eq!(result["message"], "hi");
/// # Ok::<(), ToolError>(())
/// ```
pub struct Tool {
    name: String,
    description: String,
    inputs: BTreeMap<String, ToolInput>,
    output_type: ValueType,
    output_schema: Option<OutputSchema>,
    function: ToolFn,
}

impl fmt::Debug for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("inputs", &self.inputs)
            .field("output_type", &self.output_type)
            .field("output_schema", &self.output_schema)
            .finish_non_exhaustive()
    }
}

impl Tool {
    /// Starts building a tool with the given name.
    pub fn builder(name: impl Into<String>) -> ToolBuilder {
        ToolBuilder {
            name: name.into(),
            description: String::new(),
            inputs: BTreeMap::new(),
            explicit_schema: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn inputs(&self) -> &BTreeMap<String, ToolInput> {
        &self.inputs
    }

    pub fn output_type(&self) -> ValueType {
        self.output_type
    }

    /// The resolved output schema, absent for plain returns with no
    /// explicit schema.
    pub fn output_schema(&self) -> Option<&OutputSchema> {
        self.output_schema.as_ref()
    }

    /// Produces the serializable introspection view.
    pub fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name.clone(),
            description: self.description.clone(),
            inputs: self.inputs.clone(),
            output_type: self.output_type,
            output_schema: self.output_schema.clone(),
        }
    }

    /// Calls the wrapped function with JSON arguments.
    ///
    /// # Errors
    ///
    /// [`ToolError::InvalidArguments`] when the arguments do not fit the
    /// input type; whatever the wrapped function raises (typically
    /// [`ToolError::Validation`] from the data model) is propagated
    /// unchanged.
    pub fn call(&self, args: Value) -> Result<Value, ToolError> {
        debug!("calling tool '{}'", self.name);
        (self.function)(args)
    }
}

/// Builder for [`Tool`].
///
/// Input declarations are optional: when none are given, they are derived
/// from the argument type's schema (field types and doc-comment
/// descriptions). An explicit [`output_schema`](Self::output_schema) takes
/// precedence over anything the return type could generate.
#[derive(Debug)]
pub struct ToolBuilder {
    name: String,
    description: String,
    inputs: BTreeMap<String, ToolInput>,
    explicit_schema: Option<OutputSchema>,
}

impl ToolBuilder {
    /// Sets the tool description shown to the agent.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declares one input parameter manually, overriding derivation.
    pub fn input(
        mut self,
        name: impl Into<String>,
        input_type: ValueType,
        description: impl Into<String>,
    ) -> Self {
        self.inputs.insert(
            name.into(),
            ToolInput {
                input_type,
                description: Some(description.into()),
            },
        );
        self
    }

    /// Supplies an explicit output schema. It wins over the return type's
    /// own schema capability.
    pub fn output_schema(mut self, schema: OutputSchema) -> Self {
        self.explicit_schema = Some(schema);
        self
    }

    /// Finishes the tool with a schema-capable return type.
    ///
    /// The output schema is resolved from `R` unless an explicit schema was
    /// supplied.
    pub fn structured<A, R, F>(self, f: F) -> Result<Tool, ToolError>
    where
        A: DeserializeOwned + JsonSchema,
        R: Serialize + SchemaProvider,
        F: Fn(A) -> Result<R, ToolError> + Send + Sync + 'static,
    {
        self.finish(ReturnSpec::structured::<R>(), f)
    }

    /// Finishes the tool with a plain return value carrying only a type
    /// tag. The output schema stays absent unless one was supplied
    /// explicitly.
    pub fn plain<A, R, F>(self, output_type: ValueType, f: F) -> Result<Tool, ToolError>
    where
        A: DeserializeOwned + JsonSchema,
        R: Serialize,
        F: Fn(A) -> Result<R, ToolError> + Send + Sync + 'static,
    {
        self.finish(ReturnSpec::plain(output_type), f)
    }

    fn finish<A, R, F>(mut self, annotation: ReturnSpec, f: F) -> Result<Tool, ToolError>
    where
        A: DeserializeOwned + JsonSchema,
        R: Serialize,
        F: Fn(A) -> Result<R, ToolError> + Send + Sync + 'static,
    {
        validate_name(&self.name)?;

        if self.inputs.is_empty() {
            self.inputs = inputs_of::<A>()?;
        }

        let fallback_type = annotation.fallback_type();
        let output_schema = resolve_output_schema(self.explicit_schema.take(), &annotation)?;
        let output_type = output_schema
            .as_ref()
            .map(|schema| schema.schema_type)
            .unwrap_or(fallback_type);

        let function: ToolFn = Box::new(move |args: Value| {
            let input: A =
                serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
            let output = f(input)?;
            Ok(serde_json::to_value(output)?)
        });

        Ok(Tool {
            name: self.name,
            description: self.description,
            inputs: self.inputs,
            output_type,
            output_schema,
            function,
        })
    }
}

/// Derives the input declarations from the argument type's schema.
fn inputs_of<A: JsonSchema>() -> Result<BTreeMap<String, ToolInput>, ToolError> {
    let schema = schema_of::<A>()?;
    Ok(schema
        .properties
        .iter()
        .map(|(name, property)| {
            let input_type = property
                .get("type")
                .and_then(Value::as_str)
                .and_then(ValueType::from_schema_type)
                .unwrap_or(ValueType::Any);
            let description = property
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string);
            (
                name.clone(),
                ToolInput {
                    input_type,
                    description,
                },
            )
        })
        .collect())
}

/// Tool names must be identifier-shaped so runtimes can reference them in
/// generated code and prompts.
fn validate_name(name: &str) -> Result<(), ToolError> {
    let pattern = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
        .map_err(|e| ToolError::InvalidName(e.to_string()))?;
    if pattern.is_match(name) {
        Ok(())
    } else {
        Err(ToolError::InvalidName(format!(
            "'{name}' is not a valid identifier (letters, digits and underscores only, not starting with a digit)"
        )))
    }
}
