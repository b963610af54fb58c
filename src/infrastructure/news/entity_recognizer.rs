//! Rule-based named-entity recognition for English news text.
//!
//! Capitalized token runs are grouped into candidate spans, split around
//! honorifics and job titles, then classified with compiled-in gazetteers
//! and a handful of head-word rules:
//!
//! - exact gazetteer hit (places, organizations, products, events)
//! - preceded by a title such as "Dr." or "CEO" -> PERSON
//! - organization heads ("Agency", "University", "Inc") -> ORG
//! - event heads ("Olympics", "Summit", "Cup") -> EVENT
//! - short all-caps acronyms -> ORG
//! - two to four title-case words -> PERSON
//!
//! Everything else is reported as [`EntityKind::Other`].

use crate::domain::entities::{EntityKind, EntityRecognizer, RecognizedEntity};
use crate::domain::stopwords::is_stopword;
use std::collections::HashSet;

const PLACES: &[&str] = &[
    // Countries and unions of states
    "Afghanistan", "Argentina", "Australia", "Austria", "Bangladesh", "Belgium", "Brazil",
    "Canada", "Chile", "China", "Colombia", "Cuba", "Czech Republic", "Denmark", "Egypt",
    "Ethiopia", "Finland", "France", "Germany", "Ghana", "Greece", "Haiti", "Hungary", "India",
    "Indonesia", "Iran", "Iraq", "Ireland", "Israel", "Italy", "Japan", "Jordan", "Kenya",
    "Lebanon", "Libya", "Malaysia", "Mexico", "Morocco", "Netherlands", "New Zealand", "Nigeria",
    "North Korea", "Norway", "Pakistan", "Peru", "Philippines", "Poland", "Portugal", "Qatar",
    "Romania", "Russia", "Saudi Arabia", "Singapore", "South Africa", "South Korea", "Spain",
    "Sudan", "Sweden", "Switzerland", "Syria", "Taiwan", "Thailand", "Turkey", "Ukraine",
    "United Arab Emirates", "United Kingdom", "United States", "United States of America",
    "Venezuela", "Vietnam", "Yemen", "Gaza", "US", "U.S.", "USA", "UK", "U.K.", "Britain",
    "England", "Scotland", "Wales",
    // US states
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa", "Kansas",
    "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota",
    "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
    "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon",
    "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota", "Tennessee", "Texas",
    "Utah", "Vermont", "Virginia", "Washington", "West Virginia", "Wisconsin", "Wyoming",
    // Cities
    "Amsterdam", "Athens", "Atlanta", "Baghdad", "Bangkok", "Barcelona", "Beijing", "Beirut",
    "Berlin", "Boston", "Brussels", "Buenos Aires", "Cairo", "Chicago", "Cupertino", "Dallas",
    "Delhi", "Detroit", "Dubai", "Dublin", "Geneva", "Hong Kong", "Houston", "Istanbul",
    "Jakarta", "Jerusalem", "Kabul", "Kyiv", "Lagos", "Lisbon", "London", "Los Angeles",
    "Madrid", "Manila", "Melbourne", "Mexico City", "Miami", "Milan", "Moscow", "Mumbai",
    "Nairobi", "New Delhi", "Paris", "Philadelphia", "Rome", "San Francisco", "Seattle",
    "Seoul", "Shanghai", "Singapore", "Stockholm", "Sydney", "Tehran", "Tel Aviv",
    "The Hague", "Tokyo", "Toronto", "Vancouver", "Vienna", "Warsaw", "Washington D.C.",
];

const ORGANIZATIONS: &[&str] = &[
    "NASA", "NOAA", "FBI", "CIA", "NATO", "EU", "UN", "WHO", "IMF", "SEC", "FDA", "CDC", "EPA",
    "OPEC", "European Union", "United Nations", "White House", "Pentagon", "Congress", "Senate",
    "Kremlin", "Federal Reserve", "Fed", "Supreme Court", "World Bank", "Red Cross", "Hamas",
    "Apple", "Google", "Alphabet", "Microsoft", "Amazon", "Meta", "Facebook", "Tesla", "OpenAI",
    "Nvidia", "Intel", "Samsung", "Sony", "Netflix", "Disney", "Boeing", "Airbus", "SpaceX",
    "Twitter", "Uber", "Walmart", "General Motors", "Ford", "Toyota", "Volkswagen", "Pfizer",
    "Moderna", "Goldman Sachs", "JPMorgan", "BBC", "CNN", "Reuters", "Bloomberg",
    "The Verge", "Associated Press", "Democrats", "Republicans",
];

const PRODUCTS: &[&str] = &[
    "iPhone", "iPad", "iOS", "Mac", "MacBook", "Android", "Windows", "Xbox", "PlayStation",
    "Kindle", "ChatGPT", "Gemini", "Copilot", "Starlink", "Starship", "Model 3", "Model Y",
    "Cybertruck", "Perseverance", "Curiosity", "Hubble", "James Webb", "Boeing 737",
];

const EVENTS: &[&str] = &[
    "Olympics", "Paralympics", "World Cup", "Super Bowl", "Wimbledon", "Brexit", "COP28",
    "COP29", "COP30", "World War I", "World War II", "Cold War", "Holocaust", "Davos",
    "Oscars", "Grammys", "Eurovision",
];

const TITLES: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Professor", "Sir", "Dame", "President", "Senator", "Sen",
    "Rep", "Gov", "Governor", "Mayor", "Minister", "Chancellor", "King", "Queen", "Prince",
    "Princess", "Pope", "CEO", "Chairman", "Chairwoman", "Secretary", "Secretary-General",
    "Judge", "Justice", "Coach", "Captain",
];

const ORG_HEADS: &[&str] = &[
    "Inc", "Corp", "Corporation", "Ltd", "LLC", "Group", "Company", "Co", "Bank", "University",
    "College", "Agency", "Association", "Institute", "Foundation", "Council", "Committee",
    "Commission", "Department", "Ministry", "Party", "Court", "Airlines", "Motors", "Labs",
    "Technologies", "Systems", "Times", "Post", "Journal", "News", "Network", "Fund",
    "Organization", "Organisation", "Authority", "Service", "Board", "Club", "Parliament",
    "Police",
];

const EVENT_HEADS: &[&str] = &[
    "Olympics", "Games", "Cup", "Summit", "Championship", "Championships", "War", "Festival",
    "Conference", "Expo", "Awards", "Bowl", "Marathon", "Open", "Battle", "Revolution",
];

const PLACE_HEADS: &[&str] = &["City", "County", "Province", "Island", "Islands", "Valley"];

/// Connectors allowed inside a name ("Bank of America").
const CONNECTORS: &[&str] = &["of", "de", "du", "da", "del", "von", "van", "&"];

/// Capitalized words that are dates or times, never part of a charted name.
const TEMPORAL: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday", "January",
    "February", "March", "April", "June", "July", "August", "September", "October",
    "November", "December", "Today", "Yesterday", "Tomorrow",
];

#[derive(Debug, Clone)]
struct Token {
    text: String,
    sentence_start: bool,
    /// Punctuation separates this token from the previous one.
    break_before: bool,
}

/// Gazetteer-backed recognizer; build once and share.
pub struct GazetteerEntityRecognizer {
    places: HashSet<&'static str>,
    organizations: HashSet<&'static str>,
    products: HashSet<&'static str>,
    events: HashSet<&'static str>,
    titles: HashSet<&'static str>,
}

impl GazetteerEntityRecognizer {
    pub fn new() -> Self {
        let set = |words: &[&'static str]| words.iter().copied().collect::<HashSet<_>>();
        Self {
            places: set(PLACES),
            organizations: set(ORGANIZATIONS),
            products: set(PRODUCTS),
            events: set(EVENTS),
            titles: set(TITLES),
        }
    }

    fn gazetteer_kind(&self, text: &str) -> Option<EntityKind> {
        if self.places.contains(text) {
            Some(EntityKind::Gpe)
        } else if self.organizations.contains(text) {
            Some(EntityKind::Org)
        } else if self.products.contains(text) {
            Some(EntityKind::Product)
        } else if self.events.contains(text) {
            Some(EntityKind::Event)
        } else {
            None
        }
    }

    fn is_title(&self, word: &str) -> bool {
        self.titles.contains(word.trim_end_matches('.'))
    }

    fn is_name_like(&self, word: &str) -> bool {
        if TEMPORAL.contains(&word) {
            return false;
        }
        word.chars().next().is_some_and(char::is_uppercase) || self.gazetteer_kind(word).is_some()
    }

    /// Split the text into capitalized runs.
    fn candidate_spans<'a>(&self, tokens: &'a [Token]) -> Vec<Vec<&'a Token>> {
        let mut spans = Vec::new();
        let mut current: Vec<&Token> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if token.break_before && !current.is_empty() {
                spans.push(std::mem::take(&mut current));
            }

            // "The" or "In" opening a sentence is capitalized but not a name
            let sentence_filler = token.sentence_start
                && is_stopword(&token.text)
                && self.gazetteer_kind(&token.text).is_none();
            if !sentence_filler && self.is_name_like(&token.text) {
                current.push(token);
                continue;
            }

            let joins_next = CONNECTORS.contains(&token.text.as_str())
                && !current.is_empty()
                && tokens
                    .get(i + 1)
                    .is_some_and(|next| !next.break_before && self.is_name_like(&next.text));
            if joins_next {
                current.push(token);
            } else if !current.is_empty() {
                spans.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            spans.push(current);
        }

        spans
    }

    fn classify_span(&self, span: &[&Token], out: &mut Vec<RecognizedEntity>) {
        let whole = join(span);
        if let Some(kind) = self.gazetteer_kind(&whole) {
            out.push(RecognizedEntity::new(whole, kind));
            return;
        }

        // Titles split a run: "Apple CEO Tim Cook" -> "Apple", titled "Tim Cook"
        let mut titled = false;
        let mut part: Vec<&Token> = Vec::new();
        for &token in span {
            if self.is_title(&token.text) {
                self.classify_part(&part, titled, out);
                part.clear();
                titled = true;
            } else {
                part.push(token);
            }
        }
        self.classify_part(&part, titled, out);
    }

    fn classify_part(&self, part: &[&Token], titled: bool, out: &mut Vec<RecognizedEntity>) {
        let mut words: Vec<&str> = part.iter().map(|t| t.text.as_str()).collect();

        while words.first().is_some_and(|w| is_stopword(w) || CONNECTORS.contains(w)) {
            words.remove(0);
        }
        while words.last().is_some_and(|w| CONNECTORS.contains(w)) {
            words.pop();
        }
        if words.is_empty() {
            return;
        }

        let text = words.join(" ");
        let kind = self.classify_words(&text, &words, titled);
        out.push(RecognizedEntity::new(text, kind));
    }

    fn classify_words(&self, text: &str, words: &[&str], titled: bool) -> EntityKind {
        if let Some(kind) = self.gazetteer_kind(text) {
            return kind;
        }
        if titled {
            return EntityKind::Person;
        }

        // "University of X" is classified by what precedes "of"
        let head = match words.iter().position(|w| CONNECTORS.contains(w)) {
            Some(pos) if pos > 0 => words[pos - 1],
            _ => words[words.len() - 1],
        };
        let last = words[words.len() - 1];

        if ORG_HEADS.contains(&head.trim_end_matches('.')) || ORG_HEADS.contains(&last.trim_end_matches('.')) {
            return EntityKind::Org;
        }
        if EVENT_HEADS.contains(&head) && words.len() > 1 {
            return EntityKind::Event;
        }
        if PLACE_HEADS.contains(&last) && words.len() > 1 {
            return EntityKind::Gpe;
        }
        if words.len() == 1 && is_acronym(words[0]) {
            return EntityKind::Org;
        }
        if (2..=4).contains(&words.len()) && words.iter().all(|w| is_title_case(w)) {
            return EntityKind::Person;
        }

        EntityKind::Other
    }
}

impl Default for GazetteerEntityRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for GazetteerEntityRecognizer {
    fn recognize(&self, text: &str) -> Vec<RecognizedEntity> {
        let tokens = tokenize(text, &self.titles);
        let mut entities = Vec::new();
        for span in self.candidate_spans(&tokens) {
            self.classify_span(&span, &mut entities);
        }
        entities
    }
}

fn join(span: &[&Token]) -> String {
    span.iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// "NASA", "U.S.", "WHO": two to six capital letters, optionally dotted.
fn is_acronym(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| *c != '.').collect();
    (2..=6).contains(&letters.len()) && letters.iter().all(|c| c.is_ascii_uppercase())
}

/// "Guterres", "Jean-Luc", "O'Brien"
fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(char::is_uppercase)
        && chars.all(|c| c.is_alphabetic() || matches!(c, '-' | '\'' | '.'))
        && !is_acronym(word)
}

/// "U.S" style run of single letters separated by dots.
fn is_dotted_abbreviation(word: &str) -> bool {
    word.contains('.') && word.split('.').all(|seg| seg.chars().count() == 1)
}

fn tokenize(text: &str, titles: &HashSet<&'static str>) -> Vec<Token> {
    let chars: Vec<char> = text
        .chars()
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .collect();
    let mut tokens = Vec::new();
    let mut sentence_start = true;
    let mut break_pending = true;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_alphanumeric() {
            let start = i;
            // Alphanumerics since the last joiner; dots only join single letters
            let mut segment = 0;
            while i < chars.len() {
                let ch = chars[i];
                let next_is_word = chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
                if ch.is_alphanumeric() {
                    segment += 1;
                } else if (matches!(ch, '\'' | '-') || (ch == '.' && segment == 1)) && next_is_word {
                    segment = 0;
                } else {
                    break;
                }
                i += 1;
            }

            let mut word: String = chars[start..i].iter().collect();
            if chars.get(i) == Some(&'.') {
                let initial = word.chars().count() == 1 && c.is_uppercase();
                if is_dotted_abbreviation(&word) || initial {
                    word.push('.');
                    i += 1;
                } else if titles.contains(word.as_str()) {
                    i += 1;
                }
            }

            for suffix in ["'s", "'S"] {
                if let Some(stripped) = word.strip_suffix(suffix) {
                    word = stripped.to_string();
                }
            }

            tokens.push(Token {
                text: word,
                sentence_start,
                break_before: break_pending,
            });
            sentence_start = false;
            break_pending = false;
            continue;
        }

        if c == '&' {
            tokens.push(Token {
                text: "&".to_string(),
                sentence_start: false,
                break_before: false,
            });
        } else if !c.is_whitespace() {
            if matches!(c, '.' | '!' | '?') {
                sentence_start = true;
            }
            break_pending = true;
        }
        i += 1;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::rank_entities;

    fn recognize(text: &str) -> Vec<(String, EntityKind)> {
        GazetteerEntityRecognizer::new()
            .recognize(text)
            .into_iter()
            .filter(|e| e.kind.is_charted())
            .map(|e| (e.text, e.kind))
            .collect()
    }

    fn has(entities: &[(String, EntityKind)], text: &str, kind: EntityKind) -> bool {
        entities.iter().any(|(t, k)| t == text && *k == kind)
    }

    #[test]
    fn test_gazetteer_places_and_acronyms() {
        let entities = recognize("Officials from NASA arrived in Paris on Monday.");
        assert!(has(&entities, "NASA", EntityKind::Org));
        assert!(has(&entities, "Paris", EntityKind::Gpe));
        assert!(!entities.iter().any(|(t, _)| t == "Monday"));
    }

    #[test]
    fn test_counts_rank_paris_above_nasa() {
        let recognizer = GazetteerEntityRecognizer::new();
        let text = "Paris hosted the meeting. Officials from NASA arrived in Paris. \
                    NASA later left Paris for Geneva.";
        let ranked = rank_entities(&recognizer.recognize(text), 5);
        assert_eq!(ranked[0].text, "Paris");
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[1].text, "NASA");
        assert_eq!(ranked[1].count, 2);
    }

    #[test]
    fn test_titles_split_runs_into_org_and_person() {
        let entities = recognize("Apple CEO Tim Cook presented the iPhone in Cupertino.");
        assert!(has(&entities, "Apple", EntityKind::Org));
        assert!(has(&entities, "Tim Cook", EntityKind::Person));
        assert!(has(&entities, "iPhone", EntityKind::Product));
        assert!(has(&entities, "Cupertino", EntityKind::Gpe));
    }

    #[test]
    fn test_multiword_names_and_heads() {
        let entities = recognize(
            "Delegates met the European Space Agency and the Bank of England before the \
             Paris Climate Summit, said Antonio Guterres.",
        );
        assert!(has(&entities, "European Space Agency", EntityKind::Org));
        assert!(has(&entities, "Bank of England", EntityKind::Org));
        assert!(has(&entities, "Paris Climate Summit", EntityKind::Event));
        assert!(has(&entities, "Antonio Guterres", EntityKind::Person));
        assert!(!entities.iter().any(|(t, _)| t == "Delegates"));
    }

    #[test]
    fn test_sentence_initial_stopword_is_stripped() {
        let entities = recognize("The European Union agreed. In Los Angeles, crowds gathered.");
        assert!(has(&entities, "European Union", EntityKind::Org));
        assert!(has(&entities, "Los Angeles", EntityKind::Gpe));
    }

    #[test]
    fn test_possessives_and_dotted_abbreviations() {
        let entities = recognize("NASA's budget grew while the U.S. economy slowed. NASA agreed.");
        assert_eq!(
            entities.iter().filter(|(t, _)| t == "NASA").count(),
            2
        );
        assert!(has(&entities, "U.S.", EntityKind::Gpe));
    }

    #[test]
    fn test_punctuation_breaks_runs() {
        let entities = recognize("Leaders from France, Germany and Italy met.");
        assert!(has(&entities, "France", EntityKind::Gpe));
        assert!(has(&entities, "Germany", EntityKind::Gpe));
        assert!(has(&entities, "Italy", EntityKind::Gpe));
    }

    #[test]
    fn test_text_without_names() {
        assert!(recognize("prices rose slightly over the week.").is_empty());
        assert!(recognize(" ").is_empty());
    }
}
