use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::{
    analysis::{ports::LLMClient, value_objects::ImageReference},
    common::{LLMConfig, entities::app_errors::CoreError},
};

#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: Option<String>,
    model: String,
    base_url: String,
    max_tokens: u32,
    temperature: Option<f32>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl OpenAILLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            client,
        })
    }

    fn build_request(&self, prompt: String, image: &ImageReference) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![Message {
                role: "user",
                content: vec![
                    ContentPart::Text { text: prompt },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image.to_request_url(),
                        },
                    },
                ],
            }],
        }
    }

    async fn call_openai_api(
        &self,
        request: ChatCompletionRequest,
        api_key: &str,
    ) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI API request failed: {}", e);
                CoreError::NetworkError(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::ProviderError(provider_error_message(
                status.as_u16(),
                &error_text,
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!("Failed to decode OpenAI response: {}", e);
            CoreError::ProviderError(format!("unexpected response body: {}", e))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CoreError::ProviderError("No response from model".to_string()))?;

        debug!(length = content.len(), "OpenAI response received");
        Ok(content)
    }
}

/// The provider's `error.message` when the body carries one.
fn provider_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| format!("API Error: {}", status))
}

impl LLMClient for OpenAILLMClient {
    async fn analyze_image(
        &self,
        prompt: String,
        image: ImageReference,
        credential: Option<String>,
    ) -> Result<String, CoreError> {
        let api_key = credential
            .or_else(|| self.api_key.clone())
            .ok_or_else(|| CoreError::Validation("OpenAI API key is not configured".to_string()))?;

        let request = self.build_request(prompt, &image);
        self.call_openai_api(request, &api_key).await
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(config: LLMConfig) -> OpenAILLMClient {
        OpenAILLMClient::new(&config).unwrap()
    }

    #[test]
    fn request_carries_text_and_image_parts() {
        let client = client(LLMConfig::default());
        let request = client.build_request(
            "Analyze".into(),
            &ImageReference::Url("https://cdn.example.com/a.jpg".into()),
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4o",
                "max_tokens": 1500,
                "messages": [{
                    "role": "user",
                    "content": [
                        { "type": "text", "text": "Analyze" },
                        { "type": "image_url", "image_url": { "url": "https://cdn.example.com/a.jpg" } }
                    ]
                }]
            })
        );
    }

    #[test]
    fn temperature_is_sent_when_configured() {
        let client = client(LLMConfig {
            temperature: Some(0.5),
            ..LLMConfig::default()
        });
        let request = client.build_request(
            "Analyze".into(),
            &ImageReference::inline("image/png", vec![1, 2, 3]),
        );
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["temperature"], json!(0.5));
        assert_eq!(
            value["messages"][0]["content"][1]["image_url"]["url"],
            "data:image/png;base64,AQID"
        );
    }

    #[test]
    fn blank_key_counts_as_unconfigured() {
        assert!(!client(LLMConfig::default()).is_configured());
        assert!(
            !client(LLMConfig {
                api_key: Some("  ".into()),
                ..LLMConfig::default()
            })
            .is_configured()
        );
        assert!(
            client(LLMConfig {
                api_key: Some("sk-test".into()),
                ..LLMConfig::default()
            })
            .is_configured()
        );
    }

    #[test]
    fn provider_error_prefers_body_message() {
        assert_eq!(
            provider_error_message(401, r#"{"error": {"message": "Incorrect API key provided"}}"#),
            "Incorrect API key provided"
        );
        assert_eq!(provider_error_message(503, "<html>"), "API Error: 503");
    }
}
