//! Wraps a hard-coded weather lookup as a tool and prints its card.
//!
//! Run with `cargo run --example weather` (set `RUST_LOG=debug` to watch
//! the schema resolution).

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use toolwrap::prompt::ToPrompt;
use toolwrap::tool::{Tool, ToolError};

/// Weather information for a single location.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
struct WeatherInfo {
    /// The location name
    location: String,
    /// Temperature in Celsius
    temperature: f64,
    /// Weather conditions
    conditions: String,
    /// Humidity percentage
    #[schemars(range(min = 0, max = 100))]
    humidity: u8,
}

toolwrap::schema_provider!(WeatherInfo);

impl WeatherInfo {
    fn new(
        location: impl Into<String>,
        temperature: f64,
        conditions: impl Into<String>,
        humidity: u8,
    ) -> Result<Self, ToolError> {
        if humidity > 100 {
            return Err(ToolError::Validation(format!(
                "humidity {humidity} is out of range [0, 100]"
            )));
        }
        Ok(Self {
            location: location.into(),
            temperature,
            conditions: conditions.into(),
            humidity,
        })
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct WeatherArgs {
    /// The name of the city to get weather information for
    city: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let tool = Tool::builder("get_weather_info")
        .description("Get weather information for a city.")
        .structured(|args: WeatherArgs| WeatherInfo::new(args.city, 22.5, "partly cloudy", 65))?;

    println!("=== Tool spec ===");
    println!("{}", serde_json::to_string_pretty(&tool.spec())?);

    println!("\n=== Prompt card ===");
    println!("{}", tool.to_prompt()?);

    println!("\n=== Calling the tool ===");
    let result = tool.call(json!({"city": "Paris"}))?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    println!("\n=== Validation failure ===");
    match WeatherInfo::new("Paris", 22.5, "clear", 150) {
        Ok(info) => println!("unexpectedly built {info:?}"),
        Err(err) => println!("{err}"),
    }

    Ok(())
}
