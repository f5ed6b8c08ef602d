//! Response Normalizer: raw model replies to `RouteAnswer`
//!
//! Stateless request/response transform invoked once per submission. Only
//! the first candidate reply is consumed.

use crate::models::gemini::{ChunkSource, GenerateContentResponse, GroundingChunk};
use crate::models::{Citation, RouteAnswer};
use crate::{EcoRouteError, Result};
use tracing::debug;

/// Substituted when a candidate carries no text segments at all
pub const NO_DETAIL_PLACEHOLDER: &str = "No detailed route information available.";

/// One alternate citation shape probe
type ChunkExtractor = fn(&GroundingChunk) -> Option<&ChunkSource>;

fn web_source(chunk: &GroundingChunk) -> Option<&ChunkSource> {
    chunk.web.as_ref()
}

fn mobile_source(chunk: &GroundingChunk) -> Option<&ChunkSource> {
    chunk.mobile.as_ref()
}

fn maps_source(chunk: &GroundingChunk) -> Option<&ChunkSource> {
    chunk.maps.as_ref()
}

/// Alternate shapes tried in fixed priority order; the first one present
/// is selected for a given entry
const CHUNK_EXTRACTORS: [ChunkExtractor; 3] = [web_source, mobile_source, maps_source];

/// Normalize a raw model reply into a `RouteAnswer`
///
/// Fails with `EmptyResponse` when the reply contains no candidates at
/// all. A candidate without text segments is a successful outcome and
/// yields the fixed placeholder text instead.
pub fn normalize(reply: GenerateContentResponse) -> Result<RouteAnswer> {
    let candidate = reply
        .candidates
        .first()
        .ok_or(EcoRouteError::EmptyResponse)?;

    // Concatenate all text-bearing segments in order, with no separator
    let answer_text: String = candidate
        .content
        .as_ref()
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect()
        })
        .unwrap_or_default();

    let answer_text = if answer_text.is_empty() {
        NO_DETAIL_PLACEHOLDER.to_string()
    } else {
        answer_text
    };

    let raw_chunks = candidate
        .grounding_metadata
        .as_ref()
        .and_then(|metadata| metadata.grounding_chunks.as_deref())
        .unwrap_or_default();

    let citations: Vec<Citation> = raw_chunks.iter().filter_map(extract_citation).collect();

    if citations.len() < raw_chunks.len() {
        debug!(
            "Dropped {} citation entr(ies) without a usable title and locator",
            raw_chunks.len() - citations.len()
        );
    }

    Ok(RouteAnswer {
        answer_text,
        citations,
    })
}

/// Select the first populated alternate shape and validate it
///
/// The selected shape must provide both a non-empty title and a non-empty
/// locator; there is no fallback to a lower-priority shape once one is
/// present.
fn extract_citation(chunk: &GroundingChunk) -> Option<Citation> {
    let source = CHUNK_EXTRACTORS
        .iter()
        .find_map(|extractor| extractor(chunk))?;

    let title = source.title.as_deref().filter(|t| !t.is_empty())?;
    let uri = source.uri.as_deref().filter(|u| !u.is_empty())?;

    Some(Citation {
        title: title.to_string(),
        uri: uri.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).expect("test fixture must parse")
    }

    #[test]
    fn test_zero_candidates_is_empty_response() {
        let result = normalize(parse(r#"{"candidates":[]}"#));
        assert!(matches!(result, Err(EcoRouteError::EmptyResponse)));

        let result = normalize(parse("{}"));
        assert!(matches!(result, Err(EcoRouteError::EmptyResponse)));
    }

    #[test]
    fn test_text_segments_concatenated_in_order() {
        let answer = normalize(parse(
            r###"{"candidates":[{"content":{"parts":[
                {"text":"## Route Summary\n"},
                {"text":"Take the A1."}
            ]}}]}"###,
        ))
        .unwrap();
        assert_eq!(answer.answer_text, "## Route Summary\nTake the A1.");
    }

    #[test]
    fn test_missing_text_yields_placeholder() {
        // No content at all
        let answer = normalize(parse(r#"{"candidates":[{}]}"#)).unwrap();
        assert_eq!(answer.answer_text, NO_DETAIL_PLACEHOLDER);

        // Parts present but none text-bearing
        let answer = normalize(parse(
            r#"{"candidates":[{"content":{"parts":[{"inlineData":{}}]}}]}"#,
        ))
        .unwrap();
        assert_eq!(answer.answer_text, NO_DETAIL_PLACEHOLDER);

        // Text segments that concatenate to nothing behave the same
        let answer = normalize(parse(
            r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#,
        ))
        .unwrap();
        assert_eq!(answer.answer_text, NO_DETAIL_PLACEHOLDER);
    }

    #[test]
    fn test_absent_grounding_list_is_not_an_error() {
        let answer = normalize(parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"hi"}]}}]}"#,
        ))
        .unwrap();
        assert!(answer.citations.is_empty());
    }

    #[test]
    fn test_citation_filtering_preserves_order() {
        // Worked example: middle entry has an empty title and is dropped
        let answer = normalize(parse(
            r#"{"candidates":[{
                "content":{"parts":[{"text":"route"}]},
                "groundingMetadata":{"groundingChunks":[
                    {"web":{"title":"A","uri":"u1"}},
                    {"maps":{"title":"","uri":"u2"}},
                    {"mobile":{"title":"B","uri":"u3"}}
                ]}
            }]}"#,
        ))
        .unwrap();

        assert_eq!(
            answer.citations,
            vec![
                Citation {
                    title: "A".to_string(),
                    uri: "u1".to_string()
                },
                Citation {
                    title: "B".to_string(),
                    uri: "u3".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_shape_priority_order() {
        // When several shapes are populated, web wins over mobile and maps
        let answer = normalize(parse(
            r#"{"candidates":[{
                "content":{"parts":[{"text":"route"}]},
                "groundingMetadata":{"groundingChunks":[
                    {"web":{"title":"Web","uri":"w"},
                     "mobile":{"title":"Mobile","uri":"m"},
                     "maps":{"title":"Maps","uri":"p"}}
                ]}
            }]}"#,
        ))
        .unwrap();
        assert_eq!(answer.citations[0].title, "Web");
    }

    #[test]
    fn test_selected_shape_without_locator_is_dropped() {
        // The higher-priority shape is selected even when unusable; there
        // is no fallback to the maps shape underneath it
        let answer = normalize(parse(
            r#"{"candidates":[{
                "content":{"parts":[{"text":"route"}]},
                "groundingMetadata":{"groundingChunks":[
                    {"web":{"title":"Web"},
                     "maps":{"title":"Maps","uri":"p"}}
                ]}
            }]}"#,
        ))
        .unwrap();
        assert!(answer.citations.is_empty());
    }

    #[test]
    fn test_no_deduplication() {
        let answer = normalize(parse(
            r#"{"candidates":[{
                "content":{"parts":[{"text":"route"}]},
                "groundingMetadata":{"groundingChunks":[
                    {"web":{"title":"A","uri":"u1"}},
                    {"web":{"title":"A","uri":"u1"}}
                ]}
            }]}"#,
        ))
        .unwrap();
        assert_eq!(answer.citations.len(), 2);
    }

    #[test]
    fn test_only_first_candidate_is_consumed() {
        let answer = normalize(parse(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"first"}]}},
                {"content":{"parts":[{"text":"second"}]}}
            ]}"#,
        ))
        .unwrap();
        assert_eq!(answer.answer_text, "first");
    }
}
