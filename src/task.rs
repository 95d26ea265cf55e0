//! Background task handle polled from the UI loop
//!
//! The UI thread never awaits: it spawns work on the tokio runtime and checks
//! once per frame whether the result is in.

use futures::FutureExt;
use std::future::Future;
use tokio::task::{JoinError, JoinHandle};

/// Outcome of polling a [`BackgroundTask`]
#[derive(Debug)]
pub enum TaskPoll<T> {
    /// Nothing is running
    Idle,
    /// Still running; poll again next frame
    Pending,
    /// Finished, or failed to join (panicked or aborted)
    Done(Result<T, JoinError>),
}

/// A named tokio task whose result is picked up without blocking
#[derive(Debug)]
pub struct BackgroundTask<T> {
    name: &'static str,
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> BackgroundTask<T> {
    /// Spawn `future` on the current tokio runtime
    pub fn spawn<F>(name: &'static str, future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        tracing::debug!("Spawned background task: {}", name);
        Self {
            name,
            handle: tokio::spawn(future),
        }
    }
}

impl<T> BackgroundTask<T> {
    /// Cancel the task; its result is discarded
    pub fn abort(self) {
        tracing::debug!("Aborted background task: {}", self.name);
        self.handle.abort();
    }

    /// Take the result out of `slot` if the task in it has finished
    pub fn poll(slot: &mut Option<Self>) -> TaskPoll<T> {
        let Some(task) = slot else {
            return TaskPoll::Idle;
        };

        if !task.handle.is_finished() {
            return TaskPoll::Pending;
        }

        let Some(task) = slot.take() else {
            return TaskPoll::Idle;
        };
        let name = task.name;
        match task.handle.now_or_never() {
            Some(result) => {
                tracing::debug!("Background task finished: {}", name);
                TaskPoll::Done(result)
            }
            None => {
                tracing::warn!("Task {} not ready despite is_finished()", name);
                TaskPoll::Pending
            }
        }
    }
}
