pub mod card;
pub mod entity_chart;
pub mod status;
pub mod word_cloud;
