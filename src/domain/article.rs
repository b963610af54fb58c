use serde::{Deserialize, Serialize};

pub const MISSING_TITLE: &str = "CANNOT RETRIEVE TITLE";
pub const MISSING_SOURCE: &str = "CANNOT RETRIEVE SOURCE";
pub const MISSING_URL: &str = "N/A";
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A single news article as returned by the search API.
///
/// Every field may be absent in the upstream payload, so each one is kept
/// optional and the display helpers decide what to show instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub source_name: Option<String>,
    pub published_at: Option<String>,
    pub author: Option<String>,
}

impl Article {
    /// True when the record carries no data at all.
    pub fn is_blank(&self) -> bool {
        [
            &self.title,
            &self.description,
            &self.content,
            &self.url,
            &self.source_name,
            &self.published_at,
            &self.author,
        ]
        .iter()
        .all(|field| field.is_none())
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(MISSING_TITLE)
    }

    pub fn display_source(&self) -> &str {
        self.source_name.as_deref().unwrap_or(MISSING_SOURCE)
    }

    pub fn display_url(&self) -> &str {
        self.url.as_deref().unwrap_or(MISSING_URL)
    }

    /// Author name, or "Unknown" when missing or blank.
    pub fn display_author(&self) -> &str {
        match self.author.as_deref() {
            Some(author) if !author.trim().is_empty() => author,
            _ => UNKNOWN_AUTHOR,
        }
    }

    /// Label of the collapsible section holding this article.
    pub fn section_label(&self) -> String {
        format!("{} ({})", self.display_title(), self.display_source())
    }

    /// Title, description and body joined with single spaces.
    pub fn full_text(&self) -> String {
        [&self.title, &self.description, &self.content]
            .iter()
            .map(|field| field.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Body text when present and not empty.
    pub fn body(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_fallbacks() {
        let article = Article::default();
        assert!(article.is_blank());
        assert_eq!(article.display_title(), MISSING_TITLE);
        assert_eq!(article.display_source(), MISSING_SOURCE);
        assert_eq!(article.display_url(), MISSING_URL);
        assert_eq!(article.display_author(), "Unknown");
    }

    #[test]
    fn test_blank_author_is_unknown() {
        let article = Article {
            author: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(article.display_author(), "Unknown");
        assert!(!article.is_blank());
    }

    #[test]
    fn test_full_text_joins_with_single_spaces() {
        let article = Article {
            title: Some("Title".to_string()),
            description: None,
            content: Some("Body".to_string()),
            ..Default::default()
        };
        assert_eq!(article.full_text(), "Title  Body");
    }

    #[test]
    fn test_section_label() {
        let article = Article {
            title: Some("Rain returns".to_string()),
            source_name: Some("BBC News".to_string()),
            ..Default::default()
        };
        assert_eq!(article.section_label(), "Rain returns (BBC News)");
    }
}
