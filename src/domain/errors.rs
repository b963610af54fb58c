use thiserror::Error;

/// Errors raised while querying the remote news search API
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NewsSearchError {
    #[error("Request to news API failed: {reason}")]
    Transport { reason: String },

    #[error("News API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("News API rejected the request ({code}): {message}")]
    Api { code: String, message: String },

    #[error("Could not decode news API response: {reason}")]
    Decode { reason: String },

    #[error("Invalid request URL: {reason}")]
    InvalidUrl { reason: String },
}

/// Errors raised by a sentiment scorer
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SentimentError {
    #[error("Sentiment scorer panicked: {reason}")]
    ScorerPanicked { reason: String },

    #[error("Sentiment scorer produced a non-finite compound score: {score}")]
    NonFinite { score: f64 },
}

/// Strict published-date parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("Published date is empty")]
    Empty,

    #[error("Published date '{input}' does not match YYYY-MM-DDTHH:MM:SSZ")]
    Malformed { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_search_error_formatting() {
        let error = NewsSearchError::Api {
            code: "apiKeyInvalid".to_string(),
            message: "Your API key is invalid".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("apiKeyInvalid"));
        assert!(msg.contains("invalid"));
    }

    #[test]
    fn test_date_error_formatting() {
        let error = DateFormatError::Malformed {
            input: "yesterday".to_string(),
        };
        assert!(error.to_string().contains("yesterday"));
    }
}
