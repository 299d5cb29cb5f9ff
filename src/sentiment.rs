//! Lexicon-based sentiment scoring.
//!
//! Polarity is the average semantic orientation of the lexicon words found in
//! the text, adjusted by nearby intensifiers and negations. The lexicon is a
//! process-wide lazy static: it is built exactly once on first use and
//! concurrent first callers block on the same initialization.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use utoipa::ToSchema;

/// Scores above this are labeled Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Scores below this are labeled Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Three-way sentiment label. The boundary values themselves map to Neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Negative => write!(f, "Negative"),
        }
    }
}

/// Polarity score in [-1.0, 1.0], rounded to 3 decimals, plus its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub score: f64,
    pub label: SentimentLabel,
}

impl Sentiment {
    /// The defined default for empty or unscorable input.
    pub fn neutral() -> Self {
        Sentiment {
            score: 0.0,
            label: SentimentLabel::Neutral,
        }
    }
}

// Word-level semantic orientation, -1.0 (most negative) to 1.0 (most positive).
static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    vec![
        ("excellent", 1.0),
        ("perfect", 1.0),
        ("best", 1.0),
        ("outstanding", 0.9),
        ("amazing", 0.9),
        ("wonderful", 0.9),
        ("fantastic", 0.9),
        ("superb", 0.9),
        ("brilliant", 0.9),
        ("awesome", 0.9),
        ("exceptional", 0.8),
        ("great", 0.8),
        ("happy", 0.8),
        ("delightful", 0.8),
        ("love", 0.6),
        ("loved", 0.6),
        ("good", 0.7),
        ("extraordinary", 0.7),
        ("impressive", 0.7),
        ("impressed", 0.7),
        ("remarkable", 0.7),
        ("satisfied", 0.6),
        ("satisfying", 0.6),
        ("pleasant", 0.6),
        ("reliable", 0.6),
        ("exceeded", 0.5),
        ("positive", 0.5),
        ("better", 0.5),
        ("helpful", 0.5),
        ("efficient", 0.5),
        ("effective", 0.5),
        ("recommend", 0.4),
        ("recommended", 0.4),
        ("reasonable", 0.4),
        ("special", 0.4),
        ("easy", 0.4),
        ("smooth", 0.4),
        ("solid", 0.4),
        ("sturdy", 0.4),
        ("fast", 0.3),
        ("quick", 0.3),
        ("fine", 0.3),
        ("decent", 0.3),
        ("acceptable", 0.3),
        ("worth", 0.3),
        ("okay", 0.2),
        ("ok", 0.2),
        ("average", -0.15),
        ("below", -0.2),
        ("standard", 0.0),
        ("basic", 0.0),
        ("delayed", -0.3),
        ("slow", -0.3),
        ("issue", -0.3),
        ("issues", -0.3),
        ("concerns", -0.3),
        ("flaw", -0.3),
        ("flaws", -0.3),
        ("problem", -0.4),
        ("problems", -0.4),
        ("concerning", -0.4),
        ("cheap", -0.4),
        ("worse", -0.5),
        ("broke", -0.5),
        ("broken", -0.5),
        ("mediocre", -0.5),
        ("overpriced", -0.5),
        ("damaged", -0.5),
        ("poor", -0.6),
        ("disappointing", -0.6),
        ("disappointed", -0.6),
        ("defects", -0.6),
        ("defect", -0.6),
        ("waste", -0.6),
        ("subpar", -0.6),
        ("inferior", -0.6),
        ("unhappy", -0.6),
        ("faulty", -0.6),
        ("unreliable", -0.6),
        ("frustrating", -0.6),
        ("frustrated", -0.6),
        ("bad", -0.7),
        ("angry", -0.7),
        ("defective", -0.7),
        ("hate", -0.8),
        ("useless", -0.8),
        ("unacceptable", -0.8),
        ("terrible", -1.0),
        ("awful", -1.0),
        ("horrible", -1.0),
        ("worst", -1.0),
    ]
    .into_iter()
    .collect()
});

// Negation words. Cleaning strips apostrophes, so contractions appear without
// them ("doesn't" -> "doesnt").
static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "not", "no", "never", "none", "nothing", "neither", "nobody", "nowhere", "hardly",
        "barely", "scarcely", "cannot", "cant", "dont", "doesnt", "didnt", "wont", "wouldnt",
        "shouldnt", "couldnt", "isnt", "wasnt", "arent", "werent",
    ]
    .into_iter()
    .collect()
});

static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    vec![
        ("extremely", 1.5),
        ("absolutely", 1.5),
        ("highly", 1.4),
        ("very", 1.3),
        ("really", 1.3),
        ("totally", 1.3),
        ("quite", 1.1),
        ("somewhat", 0.7),
        ("slightly", 0.5),
    ]
    .into_iter()
    .collect()
});

/// Classifies a cleaned review text.
///
/// Empty input yields the neutral default, not an error. For fixed input the
/// output is exactly reproducible.
pub fn classify(text: &str) -> Sentiment {
    if text.trim().is_empty() {
        return Sentiment::neutral();
    }

    let score = round3(polarity(text));
    Sentiment {
        score,
        label: label_for(score),
    }
}

/// Maps a score to its label per the fixed threshold partition.
pub fn label_for(score: f64) -> SentimentLabel {
    if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

fn polarity(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let mut hits = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        let Some(&base) = LEXICON.get(token) else {
            continue;
        };

        // Look back up to two tokens for a modifier.
        let mut value = base;
        for prev in &tokens[i.saturating_sub(2)..i] {
            if let Some(&boost) = INTENSIFIERS.get(prev) {
                value *= boost;
            }
            if NEGATIONS.contains(prev) {
                value *= -0.5;
            }
        }
        hits.push(value.clamp(-1.0, 1.0));
    }

    if hits.is_empty() {
        return 0.0;
    }
    hits.iter().sum::<f64>() / hits.len() as f64
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
