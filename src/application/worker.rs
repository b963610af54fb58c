use crate::application::aggregator::{NewsAggregator, TermResults};
use crate::domain::preferences::SearchRequest;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Commands sent from the UI to the search worker.
#[derive(Debug, Clone)]
pub enum SearchCommand {
    /// Run a search; `generation` increases with every submission.
    Submit {
        generation: u64,
        request: SearchRequest,
    },
    ClearCache,
    Shutdown,
}

/// Progress reported back to the UI, tagged with the submission it belongs to.
#[derive(Debug, Clone)]
pub enum SearchEvent {
    TermStarted {
        generation: u64,
        index: usize,
        term: String,
    },
    TermCompleted {
        generation: u64,
        index: usize,
        results: TermResults,
    },
    SearchFinished {
        generation: u64,
    },
}

impl SearchEvent {
    pub fn generation(&self) -> u64 {
        match self {
            Self::TermStarted { generation, .. }
            | Self::TermCompleted { generation, .. }
            | Self::SearchFinished { generation } => *generation,
        }
    }
}

/// Channel ends and shared state the UI side needs to talk to a worker.
pub struct SearchHandle {
    pub cmd_tx: mpsc::Sender<SearchCommand>,
    pub event_rx: crossbeam_channel::Receiver<SearchEvent>,
    pub latest_generation: Arc<AtomicU64>,
}

/// Runs submitted searches one at a time on the background runtime.
pub struct SearchWorker {
    aggregator: Arc<NewsAggregator>,
    cmd_rx: mpsc::Receiver<SearchCommand>,
    event_tx: crossbeam_channel::Sender<SearchEvent>,
    latest_generation: Arc<AtomicU64>,
}

impl SearchWorker {
    pub fn new(aggregator: Arc<NewsAggregator>) -> (Self, SearchHandle) {
        let (cmd_tx, cmd_rx) = mpsc::channel(32);
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        let latest_generation = Arc::new(AtomicU64::new(0));

        let worker = Self {
            aggregator,
            cmd_rx,
            event_tx,
            latest_generation: latest_generation.clone(),
        };
        let handle = SearchHandle {
            cmd_tx,
            event_rx,
            latest_generation,
        };
        (worker, handle)
    }

    pub async fn run(mut self) {
        info!("Search worker started");

        while let Some(cmd) = self.cmd_rx.recv().await {
            match cmd {
                SearchCommand::Submit {
                    generation,
                    request,
                } => {
                    if !self.search(generation, &request).await {
                        warn!("Search worker: UI receiver dropped, stopping");
                        break;
                    }
                }
                SearchCommand::ClearCache => self.aggregator.clear_cache().await,
                SearchCommand::Shutdown => {
                    info!("Search worker shutting down");
                    break;
                }
            }
        }
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.latest_generation.load(Ordering::SeqCst) > generation
    }

    /// Returns false once nobody listens for events any more.
    async fn search(&self, generation: u64, request: &SearchRequest) -> bool {
        info!(
            "Search #{}: {} term(s), verified only: {}, count: {}",
            generation,
            request.terms.len(),
            request.verified_only,
            request.count
        );

        for (index, term) in request.terms.iter().enumerate() {
            if self.is_stale(generation) {
                debug!("Search #{} superseded, abandoning", generation);
                return true;
            }

            let started = SearchEvent::TermStarted {
                generation,
                index,
                term: term.clone(),
            };
            if self.event_tx.send(started).is_err() {
                return false;
            }

            let results = self
                .aggregator
                .search_term(term, request.verified_only, request.count)
                .await;

            let completed = SearchEvent::TermCompleted {
                generation,
                index,
                results,
            };
            if self.event_tx.send(completed).is_err() {
                return false;
            }
        }

        self.event_tx
            .send(SearchEvent::SearchFinished { generation })
            .is_ok()
    }
}
