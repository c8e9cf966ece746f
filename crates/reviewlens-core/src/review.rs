use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cleaned user review, as handed over by the upstream ingestion layers.
///
/// The engine only reads `review_id`, `text` (cache keys and embedding), and
/// `date` (weekly bucketing); title and rating ride along so downstream
/// naming collaborators can resolve id → original content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub review_id: String,
    #[serde(default)]
    pub title: String,
    pub text: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
    pub date: DateTime<Utc>,
}

fn default_rating() -> u8 {
    3
}

impl Review {
    pub fn new(
        review_id: impl Into<String>,
        text: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            review_id: review_id.into(),
            title: String::new(),
            text: text.into(),
            rating: default_rating(),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{
            "review_id": "r-1",
            "text": "order stuck pending for 20 minutes",
            "date": "2025-11-15T12:00:00Z"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.review_id, "r-1");
        assert_eq!(review.rating, 3);
        assert!(review.title.is_empty());
    }
}
