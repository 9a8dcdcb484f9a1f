//! Configuration file schema

use serde::{Deserialize, Serialize};

/// Root configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Gemini endpoint configuration
///
/// The decoding parameters (temperature, topP, topK) are deliberately
/// not configurable — they are fixed policy values passed through by
/// the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Model identifier sent in the request path
    #[serde(default = "GeminiConfig::default_model")]
    pub model: String,

    /// API base URL; overridable for testing against a local stub
    #[serde(default = "GeminiConfig::default_base_url")]
    pub base_url: String,

    /// API key; usually supplied via the GEMINI_API_KEY environment
    /// variable instead of the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl GeminiConfig {
    fn default_model() -> String {
        "gemini-3-flash-preview".to_string()
    }

    fn default_base_url() -> String {
        "https://generativelanguage.googleapis.com/v1beta".to_string()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: Self::default_model(),
            base_url: Self::default_base_url(),
            api_key: None,
        }
    }
}
