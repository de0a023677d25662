//! Wrapping a typed function as a tool, end to end.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use toolwrap::prompt::ToPrompt;
use toolwrap::schema::{OutputSchema, ValueType};
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

#[derive(Debug, Deserialize, JsonSchema)]
struct HumidityArgs {
    /// The humidity percentage to report
    humidity: u8,
}

fn weather_tool() -> Tool {
    Tool::builder("get_weather_info")
        .description("Get weather information for a city.")
        .structured(|args: WeatherArgs| WeatherInfo::new(args.city, 22.5, "partly cloudy", 65))
        .unwrap()
}

#[test]
fn wrapped_tool_exposes_metadata() {
    let tool = weather_tool();

    assert_eq!(tool.name(), "get_weather_info");
    assert_eq!(tool.description(), "Get weather information for a city.");
    assert_eq!(tool.output_type(), ValueType::Object);

    let inputs = tool.inputs();
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs["city"].input_type, ValueType::String);
    assert_eq!(
        inputs["city"].description.as_deref(),
        Some("The name of the city to get weather information for")
    );
}

#[test]
fn wrapped_tool_carries_generated_output_schema() {
    let tool = weather_tool();
    let schema = tool.output_schema().expect("schema should be present");

    assert_eq!(schema.title.as_deref(), Some("WeatherInfo"));
    assert_eq!(schema.properties["humidity"]["minimum"].as_f64(), Some(0.0));
    assert_eq!(
        schema.properties["humidity"]["maximum"].as_f64(),
        Some(100.0)
    );
}

#[test]
fn calling_the_tool_returns_structured_json() {
    let tool = weather_tool();
    let result = tool.call(json!({"city": "Paris"})).unwrap();

    assert_eq!(result["location"], "Paris");
    assert_eq!(result["temperature"], 22.5);
    assert_eq!(result["conditions"], "partly cloudy");
    assert_eq!(result["humidity"], 65);
}

#[test]
fn model_validation_failure_propagates_to_the_caller() {
    let tool = Tool::builder("report_humidity")
        .description("Report the weather with a given humidity.")
        .structured(|args: HumidityArgs| {
            WeatherInfo::new("Paris", 22.5, "clear", args.humidity)
        })
        .unwrap();

    let result = tool.call(json!({"humidity": 150}));
    match result {
        Err(ToolError::Validation(message)) => {
            assert!(message.contains("150"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn mismatched_arguments_are_rejected() {
    let tool = weather_tool();
    let result = tool.call(json!({"city": 42}));
    assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
}

#[test]
fn explicit_schema_wins_over_return_type() {
    let explicit = OutputSchema::object()
        .property("a", json!({"type": "string"}))
        .require("a");

    let tool = Tool::builder("get_weather_info")
        .description("Get weather information for a city.")
        .output_schema(explicit.clone())
        .structured(|args: WeatherArgs| WeatherInfo::new(args.city, 22.5, "partly cloudy", 65))
        .unwrap();

    assert_eq!(tool.output_schema(), Some(&explicit));
}

#[test]
fn plain_string_tool_has_no_schema_attribute() {
    let tool = Tool::builder("describe_weather")
        .description("Describe the weather in a sentence.")
        .plain(ValueType::String, |args: WeatherArgs| {
            Ok(format!("It is nice in {}.", args.city))
        })
        .unwrap();

    assert_eq!(tool.output_type(), ValueType::String);
    assert!(tool.output_schema().is_none());

    let spec = serde_json::to_value(tool.spec()).unwrap();
    assert!(spec.get("output_schema").is_none());
    assert_eq!(spec["output_type"], json!("string"));
}

#[test]
fn spec_serializes_the_full_tool_card() {
    let tool = weather_tool();
    let spec = serde_json::to_value(tool.spec()).unwrap();

    assert_eq!(spec["name"], json!("get_weather_info"));
    assert_eq!(spec["inputs"]["city"]["type"], json!("string"));
    assert_eq!(spec["output_type"], json!("object"));
    assert_eq!(spec["output_schema"]["title"], json!("WeatherInfo"));
}

#[test]
fn invalid_tool_name_fails_at_wrap_time() {
    let result = Tool::builder("get weather")
        .description("Name with a space.")
        .structured(|args: WeatherArgs| WeatherInfo::new(args.city, 22.5, "clear", 50));
    assert!(matches!(result, Err(ToolError::InvalidName(_))));
}

#[test]
fn prompt_card_reflects_the_resolved_schema() {
    let tool = weather_tool();
    let card = tool.to_prompt().unwrap();

    assert!(card.starts_with("get_weather_info: Get weather information for a city."));
    assert!(card.contains("Returns an output of type: object"));
    assert!(card.contains("WeatherInfo"));
}
