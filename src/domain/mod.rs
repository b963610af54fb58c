pub mod article;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod preferences;
pub mod published_date;
pub mod sentiment;
pub mod sources;
pub mod stopwords;
pub mod word_cloud;
