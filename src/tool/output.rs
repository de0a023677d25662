//! Output-schema resolution at wrap time.
//!
//! When a function is wrapped as a tool, its declared return type and any
//! explicitly supplied schema are combined into the tool's effective output
//! schema:
//!
//! 1. an explicit schema always wins and the return type is ignored;
//! 2. otherwise, if the return type carries the schema capability
//!    ([`SchemaProvider`]), its generated schema is used;
//! 3. otherwise the tool has no output schema.
//!
//! Resolution is a pure computation evaluated once; there are no retries,
//! and a capability that fails mid-generation surfaces its error directly.

use crate::schema::{OutputSchema, SchemaProvider, ValueType};
use crate::tool::ToolError;
use log::debug;

/// A wrap-time schema generator, taken from a [`SchemaProvider`] impl.
pub type SchemaThunk = fn() -> Result<OutputSchema, ToolError>;

/// How a tool declares its return value at wrap time.
///
/// The original duck-typed "does this type provide a schema" check becomes
/// explicit here: either the return type carries the capability
/// ([`ReturnSpec::Structured`]) or it is a plain value with a semantic type
/// tag only ([`ReturnSpec::Plain`]).
#[derive(Debug, Clone)]
pub enum ReturnSpec {
    /// The return type generates its own schema.
    Structured(SchemaThunk),
    /// A plain value; only the type tag is declared.
    Plain(ValueType),
}

impl ReturnSpec {
    /// Declares a schema-capable return type.
    pub fn structured<R: SchemaProvider>() -> Self {
        Self::Structured(R::output_schema)
    }

    /// Declares a plain return value with the given type tag.
    pub fn plain(output_type: ValueType) -> Self {
        Self::Plain(output_type)
    }

    /// The type tag to fall back to when no schema is resolved.
    ///
    /// Structured returns are always objects; plain returns carry their
    /// declared tag.
    pub fn fallback_type(&self) -> ValueType {
        match self {
            Self::Structured(_) => ValueType::Object,
            Self::Plain(output_type) => *output_type,
        }
    }
}

/// Resolves the effective output schema for a tool.
///
/// See the module docs for the precedence rule. The computation is
/// idempotent: identical inputs yield structurally identical output.
///
/// # Errors
///
/// [`ToolError::SchemaExtraction`] when the return type claims the
/// capability but generating the schema fails. The error is not recovered;
/// wrapping the tool fails.
pub fn resolve_output_schema(
    explicit: Option<OutputSchema>,
    annotation: &ReturnSpec,
) -> Result<Option<OutputSchema>, ToolError> {
    if let Some(schema) = explicit {
        debug!("output schema: using explicitly supplied schema");
        return Ok(Some(schema));
    }

    match annotation {
        ReturnSpec::Structured(generate) => {
            let schema = generate()?;
            debug!(
                "output schema: derived from return type (title: {:?})",
                schema.title
            );
            Ok(Some(schema))
        }
        ReturnSpec::Plain(output_type) => {
            debug!("output schema: none (plain {output_type} return)");
            Ok(None)
        }
    }
}
