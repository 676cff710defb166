//! Scoped Timers
//!
//! Every delayed action in the orchestrator goes through a [`TimerSlot`]. A slot
//! holds at most one armed timer; re-arming or disarming drops the previous
//! `Sleep`, and dropping the slot (or its owner) releases whatever is armed.
//! A released timer can never fire.
//!
//! This is the only place in the core crate allowed to create tokio sleeps.

use std::fmt;
use std::future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::{self, Instant, Sleep};

struct Armed<K> {
    kind: K,
    deadline: Instant,
    sleep: Pin<Box<Sleep>>,
}

/// A slot holding at most one pending timer tagged with `K`
pub struct TimerSlot<K> {
    name: &'static str,
    armed: Option<Armed<K>>,
}

impl<K: Copy + fmt::Debug> TimerSlot<K> {
    /// Create an empty slot; `name` only shows up in logs
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self { name, armed: None }
    }

    /// Arm the slot to fire `kind` after `delay`
    ///
    /// Returns the kind of the timer this replaced, if any.
    pub fn arm(&mut self, kind: K, delay: Duration) -> Option<K> {
        let deadline = Instant::now() + delay;
        let previous = self.armed.replace(Armed {
            kind,
            deadline,
            sleep: Box::pin(time::sleep_until(deadline)),
        });
        tracing::trace!(slot = self.name, ?kind, ?delay, "Timer armed");
        previous.map(|p| p.kind)
    }

    /// Release the armed timer without firing it
    pub fn disarm(&mut self) -> Option<K> {
        let released = self.armed.take().map(|a| a.kind);
        if let Some(kind) = released {
            tracing::trace!(slot = self.name, ?kind, "Timer released");
        }
        released
    }

    /// Whether a timer is pending
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Wait for the armed timer to fire and disarm the slot
    ///
    /// Pends forever when nothing is armed. Cancel safe: dropping the future
    /// before it completes leaves the timer armed.
    pub async fn fired(&mut self) -> K {
        let Some(armed) = self.armed.as_mut() else {
            return future::pending().await;
        };
        armed.sleep.as_mut().await;
        let kind = armed.kind;
        self.armed = None;
        kind
    }
}

impl<K> fmt::Debug for TimerSlot<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerSlot")
            .field("name", &self.name)
            .field("kind", &self.armed.as_ref().map(|a| &a.kind))
            .field("deadline", &self.armed.as_ref().map(|a| a.deadline))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready_eq, task};

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let mut slot = TimerSlot::new("test");
        slot.arm("advance", Duration::from_millis(100));

        let mut fired = task::spawn(slot.fired());
        assert_pending!(fired.poll());

        time::advance(Duration::from_millis(99)).await;
        assert_pending!(fired.poll());

        time::advance(Duration::from_millis(1)).await;
        assert_ready_eq!(fired.poll(), "advance");
        drop(fired);
        assert!(!slot.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_replaces_previous() {
        let mut slot = TimerSlot::new("test");
        slot.arm(1, Duration::from_millis(10));
        assert_eq!(slot.arm(2, Duration::from_millis(50)), Some(1));

        time::advance(Duration::from_millis(20)).await;
        let mut fired = task::spawn(slot.fired());
        assert_pending!(fired.poll());

        time::advance(Duration::from_millis(30)).await;
        assert_ready_eq!(fired.poll(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarmed_slot_never_fires() {
        let mut slot = TimerSlot::new("test");
        slot.arm((), Duration::from_millis(10));
        assert_eq!(slot.disarm(), Some(()));

        time::advance(Duration::from_secs(10)).await;
        let mut fired = task::spawn(slot.fired());
        assert_pending!(fired.poll());
    }
}
