//! Local NLP-based sentiment analysis using VADER
//!
//! This module scores article text with the VADER (Valence Aware Dictionary
//! and sEntiment Reasoner) lexicon. The lexicon ships inside the
//! `vader_sentiment` crate, so there is nothing to download at startup.
//!
//! # Example
//! ```rust,ignore
//! use newsdesk::domain::sentiment::SentimentScorer;
//! use newsdesk::infrastructure::news::sentiment_analyzer::VaderSentimentScorer;
//!
//! let scorer = VaderSentimentScorer::new();
//! let score = scorer.compound("What a wonderful, happy day!").unwrap();
//! assert!(score > 0.5);
//! ```

use crate::domain::errors::SentimentError;
use crate::domain::sentiment::SentimentScorer;
use std::panic::{AssertUnwindSafe, catch_unwind};
use vader_sentiment::SentimentIntensityAnalyzer;

/// A thread-safe VADER scorer returning the compound polarity.
pub struct VaderSentimentScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderSentimentScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderSentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderSentimentScorer {
    /// Compound score in [-1, 1]; whitespace-only text scores 0.
    fn compound(&self, text: &str) -> Result<f64, SentimentError> {
        if text.trim().is_empty() {
            return Ok(0.0);
        }

        let scores = catch_unwind(AssertUnwindSafe(|| self.analyzer.polarity_scores(text)))
            .map_err(|payload| SentimentError::ScorerPanicked {
                reason: payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string()),
            })?;

        let compound = scores.get("compound").copied().unwrap_or(0.0);
        if !compound.is_finite() {
            return Err(SentimentError::NonFinite { score: compound });
        }
        Ok(compound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sentiment::SentimentLabel;

    #[test]
    fn test_positive_headlines() {
        let scorer = VaderSentimentScorer::new();

        let positive = [
            "Scientists celebrate a wonderful breakthrough that will help millions",
            "Local team wins the championship in a brilliant, joyful final",
            "Volunteers praised for amazing kindness after the storm",
        ];

        for headline in positive {
            let score = scorer.compound(headline).unwrap();
            assert_eq!(
                SentimentLabel::from_compound(score),
                SentimentLabel::Positive,
                "Expected positive score for '{}', got {}",
                headline,
                score
            );
        }
    }

    #[test]
    fn test_negative_headlines() {
        let scorer = VaderSentimentScorer::new();

        let negative = [
            "Deadly crash kills three and leaves dozens injured",
            "Terrible floods destroy homes, residents angry and afraid",
            "Fraud scandal: executives charged with stealing pensions",
        ];

        for headline in negative {
            let score = scorer.compound(headline).unwrap();
            assert_eq!(
                SentimentLabel::from_compound(score),
                SentimentLabel::Negative,
                "Expected negative score for '{}', got {}",
                headline,
                score
            );
        }
    }

    #[test]
    fn test_neutral_headlines() {
        let scorer = VaderSentimentScorer::new();

        for headline in [
            "The council meets on Tuesday",
            "Quarterly figures published on Monday",
        ] {
            let score = scorer.compound(headline).unwrap();
            assert!(score.abs() < 0.1, "Expected neutral score for '{}', got {}", headline, score);
        }
    }

    #[test]
    fn test_empty_text() {
        let scorer = VaderSentimentScorer::new();
        assert_eq!(scorer.compound("").unwrap(), 0.0);
        assert_eq!(scorer.compound("   ").unwrap(), 0.0);
    }

    #[test]
    fn test_score_is_bounded() {
        let scorer = VaderSentimentScorer::new();
        let score = scorer
            .compound("great great great great great amazing amazing love love love!!!")
            .unwrap();
        assert!((-1.0..=1.0).contains(&score));
    }
}
