//! Turns raw corpus entries into finalized, sentiment-scored records.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::corpus::RawReview;
use crate::sentiment::{self, SentimentLabel};
use crate::text;

/// A finalized review, the unit of the response batch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewRecord {
    pub product_name: String,
    pub review_text: String,
    pub rating: f64,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    /// RFC 3339 timestamp captured when the record was emitted.
    pub timestamp: String,
}

/// Cleans, classifies and finalizes a batch of raw reviews.
///
/// Entries whose text cleans to empty are silently skipped; they are not
/// errors. Output order matches input order minus the skipped entries, so the
/// result never holds more records than the input and is empty only when
/// every entry was dropped.
pub fn assemble(entries: Vec<RawReview>, product_name: &str) -> Vec<ReviewRecord> {
    let mut records = Vec::with_capacity(entries.len());

    for entry in entries {
        let cleaned = text::clean_text(&entry.text);
        if cleaned.is_empty() {
            tracing::debug!("Dropping review that cleaned to empty");
            continue;
        }

        let sentiment = sentiment::classify(&cleaned);
        records.push(ReviewRecord {
            product_name: product_name.to_string(),
            review_text: cleaned,
            rating: f64::from(entry.rating),
            sentiment_score: sentiment.score,
            sentiment_label: sentiment.label,
            timestamp: Utc::now().to_rfc3339(),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::label_for;

    fn raw(text: &str, rating: u8) -> RawReview {
        RawReview {
            text: text.to_string(),
            rating,
        }
    }

    #[test]
    fn test_preserves_input_order_around_dropped_entry() {
        let entries = vec![
            raw("Excellent product, love it!", 5),
            raw("@#$%", 3), // cleans to empty, must be skipped
            raw("Terrible quality, very disappointed.", 1),
        ];

        let records = assemble(entries, "Widget");

        assert_eq!(records.len(), 2);
        assert!(records[0].review_text.starts_with("Excellent"));
        assert!(records[1].review_text.starts_with("Terrible"));
    }

    #[test]
    fn test_never_returns_more_records_than_entries() {
        let entries = vec![raw("fine", 3), raw("good", 4)];
        assert!(assemble(entries, "Widget").len() <= 2);
    }

    #[test]
    fn test_empty_only_when_every_entry_failed() {
        let entries = vec![raw("***", 1), raw("@#$", 2), raw("   ", 3)];
        let records = assemble(entries, "Widget");
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(assemble(Vec::new(), "Widget").is_empty());
    }

    #[test]
    fn test_record_fields() {
        let records = assemble(vec![raw("Amazing   product!", 5)], "Widget");

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.product_name, "Widget");
        assert_eq!(record.review_text, "Amazing product!");
        assert_eq!(record.rating, 5.0);
        assert_eq!(record.sentiment_label, label_for(record.sentiment_score));
        assert!(!record.timestamp.is_empty());
    }
}
