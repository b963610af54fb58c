use crate::domain::article::Article;
use crate::domain::errors::SentimentError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const POSITIVE_THRESHOLD: f64 = 0.1;
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
            Self::Neutral => write!(f, "Neutral"),
        }
    }
}

impl SentimentLabel {
    pub fn from_compound(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Positive => "#008000", // Green
            Self::Negative => "#FF0000", // Red
            Self::Neutral => "#808080",  // Gray
        }
    }
}

/// Result of classifying one article.
///
/// `Failed` renders like `Neutral` but stays distinguishable in code and logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SentimentOutcome {
    Label { label: SentimentLabel, compound: f64 },
    Failed { reason: String },
    Empty,
}

impl SentimentOutcome {
    /// The label shown to the user: failures show as Neutral, no article shows nothing.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Label { label, .. } => match label {
                SentimentLabel::Positive => "Positive",
                SentimentLabel::Negative => "Negative",
                SentimentLabel::Neutral => "Neutral",
            },
            Self::Failed { .. } => "Neutral",
            Self::Empty => "",
        }
    }

    pub fn label(&self) -> Option<SentimentLabel> {
        match self {
            Self::Label { label, .. } => Some(*label),
            _ => None,
        }
    }

    pub fn color_hex(&self) -> &'static str {
        self.label()
            .unwrap_or(SentimentLabel::Neutral)
            .color_hex()
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Lexicon-based scorer producing a compound polarity in [-1, 1].
pub trait SentimentScorer: Send + Sync {
    fn compound(&self, text: &str) -> Result<f64, SentimentError>;
}

/// Classify an article by its title, description and body.
pub fn classify(article: Option<&Article>, scorer: &dyn SentimentScorer) -> SentimentOutcome {
    let article = match article {
        Some(a) if !a.is_blank() => a,
        _ => return SentimentOutcome::Empty,
    };

    match scorer.compound(&article.full_text()) {
        Ok(compound) => SentimentOutcome::Label {
            label: SentimentLabel::from_compound(compound),
            compound,
        },
        Err(e) => {
            tracing::warn!(
                "Sentiment scoring failed for '{}': {}",
                article.display_title(),
                e
            );
            SentimentOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScorer(Result<f64, SentimentError>);

    impl SentimentScorer for FixedScorer {
        fn compound(&self, _text: &str) -> Result<f64, SentimentError> {
            self.0.clone()
        }
    }

    fn sample_article() -> Article {
        Article {
            title: Some("Headline".to_string()),
            description: Some("Summary".to_string()),
            content: Some("Body".to_string()),
            ..Default::default()
        }
    }

    fn label_for(score: f64) -> SentimentLabel {
        let article = sample_article();
        classify(Some(&article), &FixedScorer(Ok(score)))
            .label()
            .expect("labelled")
    }

    #[test]
    fn test_threshold_mapping() {
        assert_eq!(label_for(0.5), SentimentLabel::Positive);
        assert_eq!(label_for(-0.5), SentimentLabel::Negative);
        assert_eq!(label_for(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(label_for(0.1), SentimentLabel::Positive);
        assert_eq!(label_for(0.0999), SentimentLabel::Neutral);
        assert_eq!(label_for(-0.1), SentimentLabel::Negative);
        assert_eq!(label_for(-0.0999), SentimentLabel::Neutral);
    }

    #[test]
    fn test_missing_article_is_empty_label() {
        let outcome = classify(None, &FixedScorer(Ok(0.9)));
        assert_eq!(outcome, SentimentOutcome::Empty);
        assert_eq!(outcome.display_label(), "");

        let blank = Article::default();
        assert_eq!(
            classify(Some(&blank), &FixedScorer(Ok(0.9))),
            SentimentOutcome::Empty
        );
    }

    #[test]
    fn test_scorer_failure_displays_neutral_but_is_flagged() {
        let article = sample_article();
        let outcome = classify(
            Some(&article),
            &FixedScorer(Err(SentimentError::NonFinite { score: f64::NAN })),
        );
        assert!(outcome.is_failure());
        assert_eq!(outcome.display_label(), "Neutral");
        assert_eq!(outcome.label(), None);
        assert_eq!(outcome.color_hex(), "#808080");
    }

    #[test]
    fn test_colors() {
        assert_eq!(SentimentLabel::Positive.color_hex(), "#008000");
        assert_eq!(SentimentLabel::Negative.color_hex(), "#FF0000");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
    }
}
