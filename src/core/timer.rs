//! Cancellable timers on top of the tokio clock
//!
//! Each timer is a spawned task; the returned [`TimerHandle`] is the only
//! way to stop it. Dropping a handle does not stop the timer.

use std::time::Duration;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};

#[derive(Error, Debug)]
pub enum TimerError {
    #[error("no tokio runtime available to schedule timers")]
    NoRuntime,
}

#[derive(Debug)]
pub struct TimerHandle {
    abort: AbortHandle,
}

impl TimerHandle {
    /// Stop the timer. A callback that is already running finishes, but no
    /// further callback starts.
    pub fn clear(self) {
        self.abort.abort();
    }
}

/// Call `callback` every `period`, first after one full period.
pub fn set_interval<F>(period: Duration, mut callback: F) -> Result<TimerHandle, TimerError>
where
    F: FnMut() + Send + 'static,
{
    let runtime = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;
    let task = runtime.spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            callback();
        }
    });
    Ok(TimerHandle {
        abort: task.abort_handle(),
    })
}

/// Call `callback` once after `delay`.
pub fn set_timeout<F>(delay: Duration, callback: F) -> Result<TimerHandle, TimerError>
where
    F: FnOnce() + Send + 'static,
{
    let runtime = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;
    let task = runtime.spawn(async move {
        sleep(delay).await;
        callback();
    });
    Ok(TimerHandle {
        abort: task.abort_handle(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn interval_fires_once_per_period() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&count);
        let handle = set_interval(Duration::from_secs(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        sleep(Duration::from_millis(3500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        handle.clear();
        sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn cleared_timeout_never_fires() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&count);
        let handle = set_timeout(Duration::from_secs(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        sleep(Duration::from_secs(2)).await;
        handle.clear();
        sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn scheduling_without_runtime_fails() {
        assert!(matches!(
            set_timeout(Duration::from_secs(1), || {}),
            Err(TimerError::NoRuntime)
        ));
    }
}
