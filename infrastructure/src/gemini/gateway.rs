//! Gemini implementation of the AdviceGateway port

use crate::config::GeminiConfig;
use crate::gemini::protocol::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use tracing::{debug, error};
use vyapar_application::ports::advice_gateway::{AdviceGateway, GatewayError};
use vyapar_domain::AdviceRequest;

/// Gateway for the Gemini generateContent endpoint
///
/// One POST per advice request. The API key is injected at construction
/// time; the adapter never reads the process environment itself, so it
/// can be unit-tested with a fake credential and a stub base URL.
pub struct GeminiAdviceGateway {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiAdviceGateway {
    pub fn new(api_key: impl Into<String>, config: &GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl AdviceGateway for GeminiAdviceGateway {
    async fn request_advice(&self, request: &AdviceRequest) -> Result<String, GatewayError> {
        let body = GenerateContentRequest::for_advice(request);

        debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini request failed: {}", e);
                GatewayError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Gemini returned an error: {}", detail);
            return Err(GatewayError::Transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                detail
            )));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!("Failed to decode Gemini response: {}", e);
            GatewayError::Transport(e.to_string())
        })?;

        let text = parsed.text_content();
        if text.is_empty() {
            error!("Gemini returned a successful call with no text payload");
            return Err(GatewayError::EmptyResponse);
        }

        debug!(bytes = text.len(), "Received advice text");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_gateway(base_url: &str) -> GeminiAdviceGateway {
        let config = GeminiConfig {
            model: "gemini-3-flash-preview".to_string(),
            base_url: base_url.to_string(),
            api_key: None,
        };
        GeminiAdviceGateway::new("fake-key", &config)
    }

    #[test]
    fn test_endpoint_construction() {
        let gateway = test_gateway("https://generativelanguage.googleapis.com/v1beta");
        assert_eq!(
            gateway.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let gateway = test_gateway("http://localhost:9090/");
        assert_eq!(
            gateway.endpoint(),
            "http://localhost:9090/models/gemini-3-flash-preview:generateContent"
        );
    }
}
