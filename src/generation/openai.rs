use serde::{Deserialize, Serialize};
use tracing::debug;

use super::DocGenerator;
use crate::config::SmartDocConfig;
use crate::errors::{Result, SmartDocError};

/// Instruction prepended to the route code when building the prompt.
const PROMPT_PREFIX: &str =
    "Generate jsDoc format Swagger documentation for the following Express route:";

/// Documentation generator backed by an OpenAI-style completions endpoint.
///
/// Endpoint, model, and sampling parameters come from the project
/// configuration; the API key is supplied by the host at construction and
/// sent as a bearer token.
pub struct OpenAiGenerator {
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
    n: u32,
    stop: Option<String>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

impl OpenAiGenerator {
    /// Creates a generator from the project configuration and an API key.
    pub fn new(config: &SmartDocConfig, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: config.api_base_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    fn build_request(&self, route_code: &str) -> CompletionRequest<'_> {
        CompletionRequest {
            model: &self.model,
            prompt: format!("{}\n\n{}", PROMPT_PREFIX, route_code),
            max_tokens: self.max_tokens,
            n: 1,
            stop: None,
            temperature: self.temperature,
        }
    }
}

impl DocGenerator for OpenAiGenerator {
    fn name(&self) -> &str {
        "openai"
    }

    fn generate(&self, route_code: &str) -> Result<String> {
        let request = self.build_request(route_code);
        debug!(url = %self.base_url, model = %self.model, "requesting documentation comment");

        let mut response = ureq::post(self.base_url.as_str())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(&request)
            .map_err(|e| SmartDocError::Generation {
                message: format!("request to '{}' failed: {}", self.base_url, e),
            })?;

        let completion: CompletionResponse =
            response
                .body_mut()
                .read_json()
                .map_err(|e| SmartDocError::Generation {
                    message: format!("malformed completion response: {}", e),
                })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| SmartDocError::Generation {
                message: "completion response contained no choices".to_string(),
            })?;

        Ok(choice.text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let config = SmartDocConfig::default();
        let generator = OpenAiGenerator::new(&config, "sk-test");
        let request = generator.build_request("req.addressService.create(body)");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "gpt-3.5-turbo-instruct");
        assert_eq!(value["max_tokens"], 150);
        assert_eq!(value["n"], 1);
        assert!(value["stop"].is_null());
        assert_eq!(value["temperature"], 0.5);
    }

    #[test]
    fn test_prompt_wraps_route_code() {
        let config = SmartDocConfig::default();
        let generator = OpenAiGenerator::new(&config, "sk-test");
        let request = generator.build_request("req.addressService.create(body)");

        assert!(request.prompt.starts_with(PROMPT_PREFIX));
        assert!(request
            .prompt
            .ends_with("req.addressService.create(body)"));
    }
}
