use crate::domain::article::Article;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const TOP_ENTITY_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Person,
    Org,
    Gpe,
    Product,
    Event,
    /// Any category outside the ones charted (dates, numbers, nationalities...)
    Other,
}

impl EntityKind {
    pub fn is_charted(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person => write!(f, "PERSON"),
            Self::Org => write!(f, "ORG"),
            Self::Gpe => write!(f, "GPE"),
            Self::Product => write!(f, "PRODUCT"),
            Self::Event => write!(f, "EVENT"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedEntity {
    pub text: String,
    pub kind: EntityKind,
}

impl RecognizedEntity {
    pub fn new(text: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Named-entity recognition over free text.
pub trait EntityRecognizer: Send + Sync {
    /// Entities in the order they appear in `text`.
    fn recognize(&self, text: &str) -> Vec<RecognizedEntity>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCount {
    pub text: String,
    pub count: usize,
}

/// Count charted entities by surface text and keep the `top_n` most frequent.
///
/// Ties keep first-encountered order.
pub fn rank_entities(entities: &[RecognizedEntity], top_n: usize) -> Vec<EntityCount> {
    let mut order: Vec<EntityCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entity in entities.iter().filter(|e| e.kind.is_charted()) {
        match index.get(entity.text.as_str()) {
            Some(&i) => order[i].count += 1,
            None => {
                index.insert(entity.text.as_str(), order.len());
                order.push(EntityCount {
                    text: entity.text.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    order.sort_by(|a, b| b.count.cmp(&a.count));
    order.truncate(top_n);
    order
}

/// What the entity panel of an article shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityOutcome {
    /// No body text: nothing is rendered.
    Skipped,
    NoEntities,
    Chart(Vec<EntityCount>),
}

impl EntityOutcome {
    pub const NO_ENTITIES_NOTICE: &'static str = "No named entities in article";

    pub fn from_article(article: &Article, recognizer: &dyn EntityRecognizer) -> Self {
        let Some(body) = article.body() else {
            return Self::Skipped;
        };

        let ranked = rank_entities(&recognizer.recognize(body), TOP_ENTITY_COUNT);
        if ranked.is_empty() {
            Self::NoEntities
        } else {
            Self::Chart(ranked)
        }
    }

    /// Highest count in the chart, used for the integer frequency axis.
    pub fn max_count(&self) -> usize {
        match self {
            Self::Chart(counts) => counts.iter().map(|c| c.count).max().unwrap_or(0),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ListRecognizer(Vec<RecognizedEntity>);

    impl EntityRecognizer for ListRecognizer {
        fn recognize(&self, _text: &str) -> Vec<RecognizedEntity> {
            self.0.clone()
        }
    }

    fn gpe(text: &str) -> RecognizedEntity {
        RecognizedEntity::new(text, EntityKind::Gpe)
    }

    fn org(text: &str) -> RecognizedEntity {
        RecognizedEntity::new(text, EntityKind::Org)
    }

    #[test]
    fn test_more_frequent_ranks_first() {
        let entities = vec![org("NASA"), gpe("Paris"), org("NASA"), gpe("Paris"), gpe("Paris")];
        let ranked = rank_entities(&entities, 5);
        assert_eq!(ranked[0].text, "Paris");
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[1].text, "NASA");
        assert_eq!(ranked[1].count, 2);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let entities = vec![gpe("Lyon"), org("ESA"), gpe("Oslo"), org("ESA"), gpe("Lyon")];
        let ranked = rank_entities(&entities, 5);
        let names: Vec<_> = ranked.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(names, vec!["Lyon", "ESA", "Oslo"]);
    }

    #[test]
    fn test_keeps_top_five_and_drops_uncharted() {
        let mut entities: Vec<_> = ["A", "B", "C", "D", "E", "F"].iter().map(|n| org(n)).collect();
        entities.push(RecognizedEntity::new("Tuesday", EntityKind::Other));
        entities.push(RecognizedEntity::new("Tuesday", EntityKind::Other));
        let ranked = rank_entities(&entities, TOP_ENTITY_COUNT);
        assert_eq!(ranked.len(), 5);
        assert!(ranked.iter().all(|e| e.text != "Tuesday"));
        assert_eq!(ranked[4].text, "E");
    }

    #[test]
    fn test_surface_text_is_not_normalized() {
        let entities = vec![org("Nasa"), org("NASA")];
        assert_eq!(rank_entities(&entities, 5).len(), 2);
    }

    #[test]
    fn test_outcome_for_missing_and_empty_body() {
        let recognizer = ListRecognizer(vec![org("NASA")]);
        assert_eq!(
            EntityOutcome::from_article(&Article::default(), &recognizer),
            EntityOutcome::Skipped
        );

        let article = Article {
            content: Some("quiet day".to_string()),
            ..Default::default()
        };
        assert_eq!(
            EntityOutcome::from_article(&article, &ListRecognizer(vec![])),
            EntityOutcome::NoEntities
        );

        let outcome = EntityOutcome::from_article(&article, &recognizer);
        assert_eq!(outcome.max_count(), 1);
    }
}
