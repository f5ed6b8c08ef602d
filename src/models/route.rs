//! Normalized route answers and place citations

use serde::{Deserialize, Serialize};

/// A place reference the model grounded its answer on
///
/// Never constructed with an empty title or URI; the normalizer drops
/// entries that cannot provide both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Display title of the place
    pub title: String,
    /// Navigable locator (usually a maps link)
    pub uri: String,
}

/// The normalized result of one route request
///
/// Held only as "latest result"; a new request replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteAnswer {
    /// Free-text answer, possibly multi-line with lightweight structural
    /// markers the display layer interprets. Line structure is preserved
    /// exactly as the model returned it.
    pub answer_text: String,
    /// Citations in model-returned order; never re-sorted, never deduplicated
    pub citations: Vec<Citation>,
}

impl RouteAnswer {
    #[must_use]
    pub fn has_citations(&self) -> bool {
        !self.citations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_citations() {
        let answer = RouteAnswer {
            answer_text: "Take the A1.".to_string(),
            citations: vec![],
        };
        assert!(!answer.has_citations());

        let answer = RouteAnswer {
            answer_text: "Take the A1.".to_string(),
            citations: vec![Citation {
                title: "Charging Hub".to_string(),
                uri: "https://maps.example/p1".to_string(),
            }],
        };
        assert!(answer.has_citations());
    }
}
