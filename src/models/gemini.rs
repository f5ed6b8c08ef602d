//! Wire-level payload types for the `generateContent` model API
//!
//! Request and response envelopes use the service's camelCase JSON field
//! names. Response types are tolerant: every field that may be absent in
//! practice is optional, and unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Request body for a `generateContent` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tools: Vec<Tool>,
    #[serde(rename = "toolConfig", skip_serializing_if = "Option::is_none", default)]
    pub tool_config: Option<ToolConfig>,
}

/// Content container used in both requests and responses
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single content segment; only text segments carry data we consume
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
}

impl Part {
    #[must_use]
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Tool declaration; an empty `googleMaps` object enables maps grounding
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Tool {
    #[serde(rename = "googleMaps", skip_serializing_if = "Option::is_none", default)]
    pub google_maps: Option<MapsGrounding>,
}

/// Marker object for the maps-grounding capability
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MapsGrounding {}

/// Per-request tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToolConfig {
    #[serde(
        rename = "retrievalConfig",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub retrieval_config: Option<RetrievalConfig>,
}

/// Retrieval hints for grounded tools
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RetrievalConfig {
    #[serde(rename = "latLng", skip_serializing_if = "Option::is_none", default)]
    pub lat_lng: Option<LatLng>,
}

/// Coordinate pair used to bias place resolution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// Top-level `generateContent` response envelope
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by the model
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(rename = "groundingMetadata", default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Grounding metadata attached to a candidate
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GroundingMetadata {
    #[serde(rename = "groundingChunks", default)]
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}

/// One raw citation entry
///
/// Exactly one of the alternate shapes is expected to be populated, but
/// the wire format does not enforce that; the normalizer probes them in
/// priority order.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<ChunkSource>,
    #[serde(default)]
    pub mobile: Option<ChunkSource>,
    #[serde(default)]
    pub maps: Option<ChunkSource>,
}

/// Source data shared by all three alternate chunk shapes
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChunkSource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(rename = "placeId", default)]
    pub place_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_maps_tool() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text("plan a route")],
            }],
            tools: vec![Tool {
                google_maps: Some(MapsGrounding {}),
            }],
            tool_config: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["tools"][0]["googleMaps"], serde_json::json!({}));
        assert_eq!(json["contents"][0]["parts"][0]["text"], "plan a route");
        assert!(json.get("toolConfig").is_none());
    }

    #[test]
    fn test_request_serializes_retrieval_config() {
        let request = GenerateContentRequest {
            contents: vec![],
            tools: vec![],
            tool_config: Some(ToolConfig {
                retrieval_config: Some(RetrievalConfig {
                    lat_lng: Some(LatLng {
                        latitude: 46.8182,
                        longitude: 8.2275,
                    }),
                }),
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["toolConfig"]["retrievalConfig"]["latLng"]["latitude"],
            46.8182
        );
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let reply: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(reply.candidates.is_empty());

        let reply: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"hi"},{"inlineData":{}}]}}]}"#,
        )
        .unwrap();
        let parts = &reply.candidates[0].content.as_ref().unwrap().parts;
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].text.as_deref(), Some("hi"));
        assert!(parts[1].text.is_none());
    }

    #[test]
    fn test_grounding_chunk_shapes() {
        let reply: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"groundingMetadata":{"groundingChunks":[
                {"web":{"title":"A","uri":"u1"}},
                {"maps":{"title":"B","uri":"u2","placeId":"p2"}}
            ]}}]}"#,
        )
        .unwrap();

        let chunks = reply.candidates[0]
            .grounding_metadata
            .as_ref()
            .unwrap()
            .grounding_chunks
            .as_ref()
            .unwrap();
        assert!(chunks[0].web.is_some());
        assert!(chunks[0].maps.is_none());
        assert_eq!(
            chunks[1].maps.as_ref().unwrap().place_id.as_deref(),
            Some("p2")
        );
    }
}
