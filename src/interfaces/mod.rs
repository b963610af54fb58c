pub mod article_view;
pub mod components;
pub mod design_system;
pub mod news_view;

pub use news_view::NewsDeskApp;
