//! 'toolwrap' - expose typed Rust functions as LLM agent tools.
//!
//! This library wraps ordinary functions as "tools" an agent runtime can
//! introspect and call: each wrapped function carries a name, a description,
//! an input schema, a semantic output-type tag, and optionally a
//! JSON-Schema-shaped output schema. The output schema is resolved once at
//! wrap time:
//!
//! - an explicitly supplied schema always wins;
//! - otherwise a return type implementing [`SchemaProvider`] generates it;
//! - otherwise the tool has no output schema.
//!
//! # Example
//!
//! ```rust
//! use schemars::JsonSchema;
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//! use toolwrap::{Tool, ToolError};
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct WeatherArgs {
//!     /// The name of the city to get weather information for
//!     city: String,
//! }
//!
//! /// Weather information for a single location.
//! #[derive(Serialize, JsonSchema)]
//! struct WeatherInfo {
//!     /// The location name
//!     location: String,
//!     /// Temperature in Celsius
//!     temperature: f64,
//! }
//!
//! toolwrap::schema_provider!(WeatherInfo);
//!
//! let tool = Tool::builder("get_weather_info")
//!     .description("Get weather information for a city.")
//!     .structured(|args: WeatherArgs| {
//!         Ok(WeatherInfo {
//!             location: args.city,
//!             temperature: 22.5,
//!         })
//!     })?;
//!
//! let schema = tool.output_schema().unwrap();
//! assert!(schema.required.contains(&"temperature".to_string()));
//!
//! let result = tool.call(json!({"city": "Paris"}))?;
//! assert_eq!(result["location"], "Paris");
//! # Ok::<(), ToolError>(())
//! ```

pub mod prompt;
pub mod schema;
pub mod tool;

pub use prompt::{PromptError, ToPrompt, render_prompt};
pub use schema::{OutputSchema, SchemaProvider, ValueType, schema_of};
pub use tool::{
    ReturnSpec, Tool, ToolBuilder, ToolError, ToolInput, ToolSpec, resolve_output_schema,
};
