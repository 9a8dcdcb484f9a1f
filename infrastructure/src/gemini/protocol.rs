//! Wire types for the Gemini generateContent REST call

use serde::{Deserialize, Serialize};
use vyapar_domain::{AdviceRequest, AdvisorPrompt};

/// Fixed decoding parameters.
///
/// Policy choices controlling response diversity versus determinism;
/// passed through unchanged on every request.
pub const TEMPERATURE: f64 = 0.5;
pub const TOP_P: f64 = 0.95;
pub const TOP_K: u32 = 40;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
        }
    }
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Build the advice request payload: fixed system instruction, one
    /// user content part, fixed decoding config.
    pub fn for_advice(request: &AdviceRequest) -> Self {
        Self {
            system_instruction: Content::system(AdvisorPrompt::system_instruction()),
            contents: vec![Content::user(AdvisorPrompt::user_prompt(request))],
            generation_config: GenerationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

/// Response body of `generateContent`
///
/// Only the text path is modeled; safety metadata, citations and usage
/// counts are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, empty when absent
    pub fn text_content(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}
