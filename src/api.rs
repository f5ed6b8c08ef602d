//! Model service client for the `generateContent` API
//!
//! This module provides HTTP client functionality for the hosted generative
//! model with maps grounding enabled. Every transport or service failure is
//! logged for diagnostics and re-signaled as a single `RouteUnavailable`
//! error so raw provider details never reach the end user.

use crate::config::EcoRouteConfig;
use crate::models::gemini::{
    Content, GenerateContentRequest, GenerateContentResponse, LatLng, MapsGrounding, Part,
    RetrievalConfig, Tool, ToolConfig,
};
use crate::prompt::ToolParameters;
use crate::{EcoRouteError, Result};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// Client for the route-planning model service
pub struct RouteModelClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: EcoRouteConfig,
    /// API key presented on each request
    api_key: String,
}

impl RouteModelClient {
    /// Create a new model client
    ///
    /// Fails with a configuration error when no API key is available, so a
    /// misconfigured setup is rejected before any trip is submitted.
    pub fn new(config: EcoRouteConfig) -> Result<Self> {
        let api_key = config
            .model
            .api_key
            .clone()
            .ok_or_else(|| {
                EcoRouteError::config(
                    "No model API key configured. Set model.api_key or the GEMINI_API_KEY environment variable.",
                )
            })?;

        let timeout = Duration::from_secs(config.model.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent("EcoRoute/0.1.0")
            .build()
            .map_err(|e| EcoRouteError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Call the model with a prompt and tool parameters
    ///
    /// One outbound request per submission; no retries. The caller awaits
    /// the result and either renders it or discards it, so there is no
    /// latency assumption here beyond the configured request timeout.
    #[instrument(skip(self, prompt, parameters))]
    pub async fn generate_route(
        &self,
        prompt: &str,
        parameters: &ToolParameters,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.model.base_url, self.config.model.model
        );

        let body = Self::build_body(prompt, parameters);

        info!(
            "Requesting route from model '{}' (bias: {})",
            self.config.model.model,
            parameters
                .location_bias
                .map_or_else(|| "none".to_string(), |c| c.format_coordinates())
        );
        let start_time = Instant::now();

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Model request failed: {e}");
                EcoRouteError::RouteUnavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            // Log the body for diagnostics only; the surfaced error is fixed
            let error_text = response.text().await.unwrap_or_default();
            error!("Model service returned HTTP {status}: {error_text}");
            return Err(EcoRouteError::RouteUnavailable);
        }

        let reply: GenerateContentResponse = response.json().await.map_err(|e| {
            error!("Failed to decode model response: {e}");
            EcoRouteError::RouteUnavailable
        })?;

        let total_duration = start_time.elapsed();
        info!(
            "Model replied with {} candidate(s) in {:.3}s",
            reply.candidates.len(),
            total_duration.as_secs_f64()
        );

        if total_duration.as_secs() > 30 {
            warn!(
                "Slow model response detected: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(reply)
    }

    /// Assemble the wire request from prompt text and tool parameters
    fn build_body(prompt: &str, parameters: &ToolParameters) -> GenerateContentRequest {
        let tools = if parameters.maps_grounding {
            vec![Tool {
                google_maps: Some(MapsGrounding {}),
            }]
        } else {
            Vec::new()
        };

        let tool_config = parameters.location_bias.map(|coords| {
            debug!(
                "Attaching retrieval bias at {}",
                coords.format_coordinates()
            );
            ToolConfig {
                retrieval_config: Some(RetrievalConfig {
                    lat_lng: Some(LatLng {
                        latitude: coords.latitude,
                        longitude: coords.longitude,
                    }),
                }),
            }
        });

        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(prompt)],
            }],
            tools,
            tool_config,
        }
    }
}
