//! Remote text-generation providers.
//!
//! Gemini takes the key as a `?key=` query parameter and answers with
//! `candidates[0].content.parts[*].text`. Together's `/inference` endpoint
//! takes a Bearer token and answers with `output.choices[0].text`.

use async_trait::async_trait;
use biasprobe_core::{Error, ProbeConfig, ProviderKind, Result};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::types::GenerationParams;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const TOGETHER_INFERENCE_URL: &str = "https://api.together.xyz/inference";

/// One prompt in, one response text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String>;

    fn model_name(&self) -> &str;
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(client: Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Point at a proxy or mock instead of the public endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    pub fn request_body(prompt: &str, params: &GenerationParams) -> Value {
        let mut config = json!({
            "temperature": params.temperature,
            "maxOutputTokens": params.max_tokens,
        });
        if let Some(top_p) = params.top_p {
            config["topP"] = json!(top_p);
        }
        if let Some(top_k) = params.top_k {
            config["topK"] = json!(top_k);
        }
        if !params.stop.is_empty() {
            config["stopSequences"] = json!(params.stop);
        }
        json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
            "generationConfig": config,
        })
    }

    /// Concatenated text parts of the first candidate.
    pub fn parse_response(body: &Value) -> Result<String> {
        let candidate = body["candidates"]
            .as_array()
            .and_then(|c| c.first())
            .ok_or_else(|| {
                let reason = body["promptFeedback"]["blockReason"]
                    .as_str()
                    .unwrap_or("no candidates");
                Error::Generation(format!("Gemini returned no text: {}", reason))
            })?;

        let text: String = candidate["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate["finishReason"].as_str().unwrap_or("empty content");
            return Err(Error::Generation(format!("Gemini returned no text: {}", reason)));
        }
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        debug!("Requesting completion from Gemini model {}", self.model);
        let body = Self::request_body(prompt, params);
        let response = self
            .client
            .post(self.endpoint_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request to Gemini failed: {}", e)))?;

        let json = read_json(response).await?;
        Self::parse_response(&json)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

pub struct TogetherClient {
    client: Client,
    api_key: String,
    model: String,
    url: String,
}

impl TogetherClient {
    pub fn new(client: Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            url: TOGETHER_INFERENCE_URL.to_string(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn request_body(model: &str, prompt: &str, params: &GenerationParams) -> Value {
        let mut body = json!({
            "model": model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
        });
        if let Some(top_p) = params.top_p {
            body["top_p"] = json!(top_p);
        }
        if let Some(top_k) = params.top_k {
            body["top_k"] = json!(top_k);
        }
        if let Some(penalty) = params.repetition_penalty {
            body["repetition_penalty"] = json!(penalty);
        }
        if !params.stop.is_empty() {
            body["stop"] = json!(params.stop);
        }
        body
    }

    /// First choice text, trimmed.
    pub fn parse_response(body: &Value) -> Result<String> {
        body["output"]["choices"][0]["text"]
            .as_str()
            .map(|text| text.trim().to_string())
            .ok_or_else(|| Error::Generation("Together response has no output text".into()))
    }
}

#[async_trait]
impl TextGenerator for TogetherClient {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        debug!("Requesting completion from Together model {}", self.model);
        let body = Self::request_body(&self.model, prompt, params);
        let response = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request to Together failed: {}", e)))?;

        let json = read_json(response).await?;
        Self::parse_response(&json)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Fail on non-2xx with the body attached, otherwise decode JSON.
async fn read_json(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;
    if !status.is_success() {
        return Err(Error::Provider {
            status: status.as_u16(),
            body: text,
        });
    }
    Ok(serde_json::from_str(&text)?)
}

/// Provider selected at startup.
pub enum Provider {
    Gemini(GeminiClient),
    Together(TogetherClient),
}

impl Provider {
    /// Build the client for `kind` from configuration. Fails when its API key
    /// is not set.
    pub fn from_config(kind: ProviderKind, config: &ProbeConfig) -> Result<Self> {
        let client = Client::new();
        let api_key = config.api_key(kind)?;
        let model = config.model(kind);
        Ok(match kind {
            ProviderKind::Gemini => Provider::Gemini(GeminiClient::new(client, api_key, model)),
            ProviderKind::Together => {
                Provider::Together(TogetherClient::new(client, api_key, model))
            }
        })
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Provider::Gemini(_) => ProviderKind::Gemini,
            Provider::Together(_) => ProviderKind::Together,
        }
    }
}

#[async_trait]
impl TextGenerator for Provider {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        match self {
            Provider::Gemini(c) => c.generate(prompt, params).await,
            Provider::Together(c) => c.generate(prompt, params).await,
        }
    }

    fn model_name(&self) -> &str {
        match self {
            Provider::Gemini(c) => c.model_name(),
            Provider::Together(c) => c.model_name(),
        }
    }
}
