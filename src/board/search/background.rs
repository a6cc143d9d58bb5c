//! Searching on a background thread.
//!
//! [`BackgroundSearch`] owns the thread and a stop flag; the result is
//! published through a shared slot once the search finishes.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::error;
use parking_lot::Mutex;

use super::{MiniMax, SearchResult};
use crate::board::eval::BoardEvaluator;
use crate::board::Board;
use crate::sync::StopFlag;

/// A minimax search running on its own thread.
///
/// The caller owns the handle: it can poll for the result, ask the search to
/// stop early, or wait for it. Dropping the handle stops the search and waits
/// for the thread to exit.
pub struct BackgroundSearch {
    stop: StopFlag,
    result: Arc<Mutex<Option<SearchResult>>>,
    handle: Option<JoinHandle<()>>,
}

impl BackgroundSearch {
    /// Start searching `board` with `strategy`.
    #[must_use]
    pub fn spawn<E>(strategy: MiniMax<E>, board: Board) -> Self
    where
        E: BoardEvaluator + Send + 'static,
    {
        let stop = StopFlag::new();
        let result = Arc::new(Mutex::new(None));

        let thread_stop = stop.clone();
        let thread_result = Arc::clone(&result);
        let handle = thread::spawn(move || {
            let found = strategy.search_with_stop(&board, &thread_stop);
            *thread_result.lock() = Some(found);
        });

        BackgroundSearch {
            stop,
            result,
            handle: Some(handle),
        }
    }

    /// Whether the search has published its result
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.lock().is_some()
    }

    /// The result, if the search has finished
    #[must_use]
    pub fn try_result(&self) -> Option<SearchResult> {
        *self.result.lock()
    }

    /// Ask the search to finish with the best move found so far.
    pub fn stop(&self) {
        self.stop.stop();
    }

    /// Wait for the search to finish and take its result.
    ///
    /// Returns `None` only if the search thread panicked.
    #[must_use]
    pub fn join(mut self) -> Option<SearchResult> {
        self.wait();
        self.result.lock().take()
    }

    fn wait(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("search thread panicked, its result is lost");
            }
        }
    }
}

impl Drop for BackgroundSearch {
    fn drop(&mut self) {
        self.stop.stop();
        self.wait();
    }
}
