use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of articles to show per preference term (1..=100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultCount(u8);

impl ResultCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 10;

    /// Clamp any integer into the accepted range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

impl Default for ResultCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for ResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Split comma-separated preferences into trimmed, non-empty terms.
///
/// Order and duplicates are kept as typed.
pub fn parse_preferences(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// One submitted search: every term is fetched with the same options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub terms: Vec<String>,
    pub verified_only: bool,
    pub count: ResultCount,
}

impl SearchRequest {
    pub fn from_input(input: &str, verified_only: bool, count: ResultCount) -> Self {
        Self {
            terms: parse_preferences(input),
            verified_only,
            count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
