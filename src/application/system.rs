use crate::application::aggregator::NewsAggregator;
use crate::application::enrichment::ArticleEnricher;
use crate::application::fetcher::ArticleFetcher;
use crate::application::worker::{SearchHandle, SearchWorker};
use crate::config::Config;
use crate::infrastructure::ServiceFactory;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// The assembled search pipeline for one configuration.
pub struct Application {
    pub config: Config,
    pub aggregator: Arc<NewsAggregator>,
}

impl Application {
    pub fn build(config: Config) -> Result<Self> {
        info!("Building Newsdesk (Mode: {:?})...", config.mode);

        let services = ServiceFactory::create_services(&config);
        let aggregator = NewsAggregator::new(
            ArticleFetcher::new(services.provider),
            ArticleEnricher::new(services.scorer, services.recognizer),
            Duration::from_secs(config.search.cache_ttl_secs),
        );

        info!(
            "Results cache TTL: {}s, {} verified source(s)",
            config.search.cache_ttl_secs,
            config.search.verified_sources.len()
        );

        Ok(Self {
            config,
            aggregator: Arc::new(aggregator),
        })
    }

    /// Spawn the search worker on the current tokio runtime.
    pub fn start(&self) -> SearchHandle {
        let (worker, handle) = SearchWorker::new(self.aggregator.clone());
        tokio::spawn(worker.run());
        info!("Search worker spawned");
        handle
    }
}
