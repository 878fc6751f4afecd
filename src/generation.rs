//! Itinerary generation via the OpenAI Chat Completions API
//!
//! A single prompt per request, returned verbatim as the itinerary text.
//! No streaming, no tools, no retries; failures carry the upstream detail
//! so the caller can surface it in place of the itinerary.

use crate::config::GenerationConfig;
use crate::models::{Itinerary, TripRequest};
use crate::{Result, WayfarerError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Produces a day-by-day itinerary for a trip request
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    async fn generate(&self, request: &TripRequest) -> Result<Itinerary>;
}

/// Build the Korean prompt requesting a day-by-day plan
#[must_use]
pub fn build_prompt(request: &TripRequest) -> String {
    format!(
        "{city} 여행 {days}일 일정, 여행 스타일: {style}로 추천 일정을 만들어주세요. \
         관광지, 맛집, 카페를 포함하고, 하루 단위로 간단한 설명도 포함해주세요. \
         출력은 반드시 한국어로 해주세요.",
        city = request.city,
        days = request.days,
        style = request.style,
    )
}

/// OpenAI-backed itinerary generator
pub struct OpenAiGenerator {
    model: String,
    api_key: String,
    base_url: String,
    max_tokens: u32,
    http: Client,
}

impl OpenAiGenerator {
    /// Create a new generator.
    ///
    /// Fails with a configuration error when no generation API key is set;
    /// the rest of the application keeps working without generation.
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            WayfarerError::config(
                "Generation API key is not configured. Set WAYFARER_GENERATION__API_KEY or generation.api_key.",
            )
        })?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("Wayfarer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WayfarerError::generation(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            max_tokens: config.max_tokens,
            http,
        })
    }

    /// Build the request body for the Chat Completions API
    fn build_request_body(&self, request: &TripRequest) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": [{"role": "user", "content": build_prompt(request)}],
            "max_tokens": self.max_tokens,
        })
    }
}

#[async_trait]
impl ItineraryGenerator for OpenAiGenerator {
    #[instrument(skip(self), fields(city = %request.city, days = request.days))]
    async fn generate(&self, request: &TripRequest) -> Result<Itinerary> {
        info!(
            "Generating {}-day {} itinerary for {}",
            request.days, request.style, request.city
        );

        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = self.build_request_body(request);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| WayfarerError::generation(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            debug!("Generation API error body: {detail}");
            return Err(WayfarerError::generation(format!(
                "Generation API returned status {status}: {detail}"
            )));
        }

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| WayfarerError::generation(format!("Malformed response: {e}")))?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| WayfarerError::generation("Response contained no itinerary text"))?;

        info!("Generated itinerary with {} lines", content.lines().count());
        Ok(Itinerary::new(content))
    }
}

// Chat Completions API response types

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
