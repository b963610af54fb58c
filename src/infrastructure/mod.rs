pub mod core;
pub mod factory;
pub mod news;

pub use factory::ServiceFactory;
