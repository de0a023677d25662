//! Prompt rendering for tools.
//!
//! Agent runtimes describe their tools to the model as text. This module
//! renders a tool's metadata into that "tool card" through a minijinja
//! template.

use crate::tool::Tool;
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while rendering a prompt.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to render prompt template: {0}")]
    Render(#[from] minijinja::Error),

    #[error("failed to serialize prompt context: {0}")]
    Context(#[from] serde_json::Error),
}

/// Renders a prompt from a template string and a serializable context.
pub fn render_prompt<T: Serialize>(template: &str, context: T) -> Result<String, PromptError> {
    let mut env = Environment::new();
    env.add_template("prompt", template)?;
    let tmpl = env.get_template("prompt")?;
    Ok(tmpl.render(context)?)
}

const TOOL_CARD_TEMPLATE: &str = "\
{{ name }}: {{ description }}
    Takes inputs: {{ inputs }}
    Returns an output of type: {{ output_type }}{% if output_schema %}
    Output schema: {{ output_schema }}{% endif %}";

/// A type that can be rendered as prompt text.
pub trait ToPrompt {
    /// Renders the object into a prompt string.
    fn to_prompt(&self) -> Result<String, PromptError>;
}

impl ToPrompt for Tool {
    fn to_prompt(&self) -> Result<String, PromptError> {
        let spec = self.spec();
        let inputs = serde_json::to_string(&spec.inputs)?;
        let output_schema = spec
            .output_schema
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        render_prompt(
            TOOL_CARD_TEMPLATE,
            minijinja::context! {
                name => spec.name,
                description => spec.description,
                inputs => inputs,
                output_type => spec.output_type.to_string(),
                output_schema => output_schema,
            },
        )
    }
}
