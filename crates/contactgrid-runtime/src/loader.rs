//! One-shot contact loading.
//!
//! The fetch and the normalization of the whole batch run on a tokio task;
//! the finished batch is handed to the event loop over a channel, so the grid
//! never sees a partially normalized list. Dropping the loader aborts the
//! task and closes the channel, which discards a result that arrives after
//! teardown.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;

use contactgrid_types::{Contact, normalize_all};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::source::ContactSource;

/// Result of the single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<Contact>),
    Failed(String),
}

enum LoadState {
    Idle,
    Pending {
        rx: Receiver<LoadOutcome>,
        task: JoinHandle<()>,
    },
    Finished,
}

pub struct DataLoader {
    handle: Handle,
    state: LoadState,
}

impl DataLoader {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            state: LoadState::Idle,
        }
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.state, LoadState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, LoadState::Pending { .. })
    }

    /// Start the fetch. Returns `false` if a fetch was already started during
    /// this loader's lifetime.
    pub fn load_once(&mut self, source: Arc<dyn ContactSource>) -> bool {
        if self.is_started() {
            return false;
        }

        let (tx, rx) = mpsc::channel();
        tracing::debug!(source = %source.describe(), "starting contact fetch");

        let task = self.handle.spawn(async move {
            let outcome = match source.fetch().await {
                Ok(raws) => LoadOutcome::Loaded(normalize_all(&raws)),
                Err(err) => LoadOutcome::Failed(err.to_string()),
            };
            // The receiver is gone if the grid was torn down meanwhile.
            let _ = tx.send(outcome);
        });

        self.state = LoadState::Pending { rx, task };
        true
    }

    /// Non-blocking check for the fetch result.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        let LoadState::Pending { rx, .. } = &self.state else {
            return None;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => ended_without_result(),
        };
        self.state = LoadState::Finished;
        Some(outcome)
    }

    /// Block until the fetch finishes or `timeout` elapses.
    pub fn wait(&mut self, timeout: Duration) -> Option<LoadOutcome> {
        let LoadState::Pending { rx, .. } = &self.state else {
            return None;
        };

        let outcome = match rx.recv_timeout(timeout) {
            Ok(outcome) => outcome,
            Err(RecvTimeoutError::Timeout) => return None,
            Err(RecvTimeoutError::Disconnected) => ended_without_result(),
        };
        self.state = LoadState::Finished;
        Some(outcome)
    }

    /// Abort an in-flight fetch; its result will never be delivered.
    pub fn cancel(&mut self) {
        if let LoadState::Pending { task, .. } = &self.state {
            task.abort();
            tracing::debug!("contact fetch cancelled");
        }
        if self.is_pending() {
            self.state = LoadState::Finished;
        }
    }
}

fn ended_without_result() -> LoadOutcome {
    LoadOutcome::Failed("load task ended without a result".to_string())
}

impl Drop for DataLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for DataLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            LoadState::Idle => "idle",
            LoadState::Pending { .. } => "pending",
            LoadState::Finished => "finished",
        };
        f.debug_struct("DataLoader").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use contactgrid_types::RawContact;
    use tokio::runtime::Runtime;

    const WAIT: Duration = Duration::from_secs(5);

    fn raw(name: &str, date: &str) -> RawContact {
        RawContact {
            name: name.to_string(),
            short_text: format!("{} says hi", name),
            date: date.to_string(),
            image: "i".to_string(),
            color: "red".to_string(),
        }
    }

    #[test]
    fn test_loads_and_normalizes_batch() {
        let rt = Runtime::new().unwrap();
        let mut loader = DataLoader::new(rt.handle().clone());
        let source = Arc::new(StaticSource::new(vec![
            raw("A", "2020-01-01"),
            raw("B", "garbage"),
        ]));

        assert!(loader.load_once(source));
        let outcome = loader.wait(WAIT).expect("load finished");

        let LoadOutcome::Loaded(contacts) = outcome else {
            panic!("expected contacts, got {:?}", outcome);
        };
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].iso.as_deref(), Some("2020-01-01T00:00:00.000Z"));
        assert_eq!(contacts[1].iso, None);
        assert!(!loader.is_pending());
    }

    #[test]
    fn test_second_load_is_ignored() {
        let rt = Runtime::new().unwrap();
        let mut loader = DataLoader::new(rt.handle().clone());
        assert!(loader.load_once(Arc::new(StaticSource::new(Vec::new()))));
        assert!(!loader.load_once(Arc::new(StaticSource::new(vec![raw("A", "x")]))));

        assert_eq!(loader.wait(WAIT), Some(LoadOutcome::Loaded(Vec::new())));
        assert!(!loader.load_once(Arc::new(StaticSource::new(Vec::new()))));
    }

    #[test]
    fn test_failure_is_reported() {
        let rt = Runtime::new().unwrap();
        let mut loader = DataLoader::new(rt.handle().clone());
        loader.load_once(Arc::new(StaticSource::failing("network down")));

        assert_eq!(
            loader.wait(WAIT),
            Some(LoadOutcome::Failed(
                "Data source error: network down".to_string()
            ))
        );
    }

    #[test]
    fn test_poll_before_start_is_none() {
        let rt = Runtime::new().unwrap();
        let mut loader = DataLoader::new(rt.handle().clone());
        assert_eq!(loader.poll(), None);
        assert!(!loader.is_started());
    }

    #[test]
    fn test_cancel_discards_result() {
        let rt = Runtime::new().unwrap();
        let mut loader = DataLoader::new(rt.handle().clone());
        loader.load_once(Arc::new(StaticSource::new(vec![raw("A", "2020-01-01")])));
        loader.cancel();

        assert!(!loader.is_pending());
        assert_eq!(loader.wait(WAIT), None);
        assert_eq!(loader.poll(), None);
    }
}
