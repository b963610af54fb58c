/// NewsAPI source ids treated as verified English-language publishers.
pub const VERIFIED_SOURCES: &[&str] = &[
    // Major US outlets
    "bbc-news",
    "cnn",
    "the-new-york-times",
    "the-washington-post",
    "the-wall-street-journal",
    "usa-today",
    "abc-news",
    "cbs-news",
    "nbc-news",
    "fox-news",
    "msnbc",
    "npr",
    "politico",
    "associated-press",
    "reuters",
    "bloomberg",
    // Tech and business
    "techcrunch",
    "the-verge",
    "wired",
    "engadget",
    "ars-technica",
    "business-insider",
    "fortune",
    "forbes",
    "cnbc",
    // International
    "al-jazeera-english",
    "sky-news",
    "independent",
    "the-guardian-uk",
    "the-telegraph",
    "financial-times",
    "the-economist",
    "times-of-india",
    "hindustan-times",
    "globe-and-mail",
    "le-monde",
    "der-spiegel",
    "vice-news",
    // Science and other
    "scientific-american",
    "national-geographic",
    "new-scientist",
    "medical-news-today",
    "nature",
    "the-hill",
    // Regional
    "chicago-tribune",
    "la-times",
    "miami-herald",
    "boston-globe",
    "seattle-times",
    "houston-chronicle",
    "dallas-morning-news",
];

/// The built-in list as owned strings.
pub fn default_verified_sources() -> Vec<String> {
    VERIFIED_SOURCES.iter().map(|s| s.to_string()).collect()
}
