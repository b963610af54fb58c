pub mod aggregator;
pub mod cache;
pub mod client;
pub mod enrichment;
pub mod fetcher;
pub mod system;
pub mod worker;
