use crate::application::worker::{SearchCommand, SearchEvent, SearchHandle};
use crate::domain::preferences::SearchRequest;
use anyhow::Result;
use crossbeam_channel::Receiver;
use std::sync::atomic::Ordering;

/// Unified event type for the User Interface
#[derive(Clone, Debug)]
pub enum ClientEvent {
    Search(SearchEvent),
    Log(String),
}

/// UI-side access to the search worker.
///
/// Hides channel management; events from superseded searches are dropped
/// before they reach the caller.
pub struct SearchClient {
    log_rx: Receiver<String>,
    handle: SearchHandle,
}

impl SearchClient {
    pub fn new(handle: SearchHandle, log_rx: Receiver<String>) -> Self {
        Self { log_rx, handle }
    }

    /// Non-blocking; logs first, then search progress.
    pub fn poll_next(&mut self) -> Option<ClientEvent> {
        if let Ok(msg) = self.log_rx.try_recv() {
            return Some(ClientEvent::Log(msg));
        }

        let latest = self.latest_generation();
        while let Ok(event) = self.handle.event_rx.try_recv() {
            if event.generation() == latest {
                return Some(ClientEvent::Search(event));
            }
        }

        None
    }

    pub fn latest_generation(&self) -> u64 {
        self.handle.latest_generation.load(Ordering::SeqCst)
    }

    /// Queue a search, superseding any running one. Returns its generation.
    ///
    /// The generation only advances once the command has a slot in the
    /// queue, so a rejected submit leaves the running search current.
    pub fn submit(&self, request: SearchRequest) -> Result<u64> {
        let permit = self
            .handle
            .cmd_tx
            .try_reserve()
            .map_err(|e| anyhow::anyhow!("Failed to submit search: {}", e))?;
        let generation = self.handle.latest_generation.fetch_add(1, Ordering::SeqCst) + 1;
        permit.send(SearchCommand::Submit {
            generation,
            request,
        });
        Ok(generation)
    }

    pub fn clear_cache(&self) -> Result<()> {
        self.handle
            .cmd_tx
            .try_send(SearchCommand::ClearCache)
            .map_err(|e| anyhow::anyhow!("Failed to send clear-cache command: {}", e))
    }

    pub fn shutdown(&self) -> Result<()> {
        self.handle
            .cmd_tx
            .try_send(SearchCommand::Shutdown)
            .map_err(|e| anyhow::anyhow!("Failed to send shutdown command: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::aggregator::TermResults;
    use std::sync::Arc;
    use std::sync::atomic::AtomicU64;
    use tokio::sync::mpsc;

    type Harness = (
        SearchClient,
        mpsc::Receiver<SearchCommand>,
        crossbeam_channel::Sender<SearchEvent>,
        crossbeam_channel::Sender<String>,
    );

    fn client() -> Harness {
        client_with_capacity(8)
    }

    fn client_with_capacity(capacity: usize) -> Harness {
        let (cmd_tx, cmd_rx) = mpsc::channel(capacity);
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        let (log_tx, log_rx) = crossbeam_channel::unbounded();
        let handle = SearchHandle {
            cmd_tx,
            event_rx,
            latest_generation: Arc::new(AtomicU64::new(0)),
        };
        (SearchClient::new(handle, log_rx), cmd_rx, event_tx, log_tx)
    }

    fn completed(generation: u64, term: &str) -> SearchEvent {
        SearchEvent::TermCompleted {
            generation,
            index: 0,
            results: TermResults {
                term: term.to_string(),
                reports: Vec::new(),
                failure: None,
                from_cache: false,
            },
        }
    }

    #[test]
    fn test_submit_increments_generation() {
        let (client, mut cmd_rx, _events, _logs) = client();
        let request = SearchRequest::from_input("space", false, Default::default());

        assert_eq!(client.submit(request.clone()).unwrap(), 1);
        assert_eq!(client.submit(request).unwrap(), 2);
        assert!(matches!(
            cmd_rx.try_recv(),
            Ok(SearchCommand::Submit { generation: 1, .. })
        ));
        assert_eq!(client.latest_generation(), 2);
    }

    #[test]
    fn test_poll_drops_stale_events() {
        let (mut client, _cmd_rx, events, logs) = client();
        let request = SearchRequest::from_input("space", false, Default::default());
        client.submit(request.clone()).unwrap();
        client.submit(request).unwrap();

        events.send(completed(1, "old")).unwrap();
        events.send(completed(2, "new")).unwrap();
        logs.send("hello".to_string()).unwrap();

        assert!(matches!(client.poll_next(), Some(ClientEvent::Log(msg)) if msg == "hello"));
        match client.poll_next() {
            Some(ClientEvent::Search(SearchEvent::TermCompleted { results, .. })) => {
                assert_eq!(results.term, "new")
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(client.poll_next().is_none());
    }

    #[test]
    fn test_rejected_submit_keeps_running_search_current() {
        let (mut client, _cmd_rx, events, _logs) = client_with_capacity(1);
        let request = SearchRequest::from_input("space", false, Default::default());

        assert_eq!(client.submit(request.clone()).unwrap(), 1);
        // Queue is full until the worker picks up the first command
        assert!(client.submit(request).is_err());
        assert_eq!(client.latest_generation(), 1);

        events
            .send(SearchEvent::SearchFinished { generation: 1 })
            .unwrap();
        assert!(matches!(
            client.poll_next(),
            Some(ClientEvent::Search(SearchEvent::SearchFinished { generation: 1 }))
        ));
    }
}
