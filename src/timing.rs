//! Debounce and throttle wrappers scheduled on the tokio runtime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::TimingError;

type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

fn current_runtime() -> Result<Handle, TimingError> {
    Handle::try_current().map_err(|_| TimingError::NoRuntime)
}

/// Runs a callback once calls have stopped arriving for `wait`.
///
/// Every `call` cancels the pending invocation and schedules a new one, so only
/// the argument of the last call in a burst reaches the callback.
pub struct Debouncer<T> {
    wait: Duration,
    callback: Callback<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer around `callback`.
    pub fn new<F>(wait: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            wait,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    /// Schedule `callback(arg)` after the wait, replacing any pending call.
    pub fn call(&self, arg: T) -> Result<(), TimingError> {
        let runtime = current_runtime()?;
        let callback = Arc::clone(&self.callback);
        let wait = self.wait;

        let mut pending = self.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
            tracing::trace!("debounced call superseded");
        }
        *pending = Some(runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            callback(arg);
        }));
        Ok(())
    }

    /// Drop the pending invocation. Returns true if one had not run yet.
    pub fn cancel(&self) -> bool {
        match self.lock().take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                tracing::trace!("debounced call cancelled");
                true
            }
            _ => false,
        }
    }

    /// Returns true while an invocation is waiting to run.
    pub fn is_pending(&self) -> bool {
        self.lock().as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Runs a callback at most once per `wait`.
///
/// The first call of a window schedules `callback(arg)` for the end of the
/// window; calls made before it runs are dropped.
pub struct Throttle<T> {
    wait: Duration,
    callback: Callback<T>,
    busy: Arc<AtomicBool>,
}

impl<T: Send + 'static> Throttle<T> {
    /// Create a throttle around `callback`.
    pub fn new<F>(wait: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            wait,
            callback: Arc::new(callback),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Schedule `callback(arg)` unless an invocation is already pending.
    ///
    /// Returns `Ok(false)` when the call was dropped.
    pub fn call(&self, arg: T) -> Result<bool, TimingError> {
        let runtime = current_runtime()?;
        if self.busy.swap(true, Ordering::AcqRel) {
            tracing::trace!("throttled call dropped");
            return Ok(false);
        }

        let callback = Arc::clone(&self.callback);
        let release = Release(Arc::clone(&self.busy));
        let wait = self.wait;
        runtime.spawn(async move {
            let _release = release;
            tokio::time::sleep(wait).await;
            callback(arg);
        });
        Ok(true)
    }

    /// Returns true while an invocation is waiting to run.
    pub fn is_pending(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Clears the throttle's busy flag when the scheduled task is dropped,
/// whether it finished, was aborted with its runtime, or panicked.
struct Release(Arc<AtomicBool>);

impl Drop for Release {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
