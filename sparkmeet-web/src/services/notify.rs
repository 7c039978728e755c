//! Single-slot notification bus.
//!
//! Any caller may publish a success/error/warning message; the message
//! banner subscribes to [`Notifier::current`] and renders whatever is live.
//! A newer message silently replaces the previous one, there is no queue.

use crate::models::{Notification, NotificationKind};
use crate::services::observable::Subject;
use once_cell::unsync::OnceCell;
use std::cell::Cell;
use std::rc::Rc;

thread_local! {
    static SHARED_NOTIFIER: OnceCell<Notifier> = OnceCell::new();
}

/// Broadcast channel holding at most one live [`Notification`].
#[derive(Debug, Clone)]
pub struct Notifier {
    current: Subject<Option<Notification>>,
    // Bumped on every publish and every clear. An auto-close timer only
    // clears the slot if the epoch it was armed with is still current,
    // so a stale timer can never wipe out a newer message.
    epoch: Rc<Cell<u64>>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Subject::new(None),
            epoch: Rc::new(Cell::new(0)),
        }
    }

    /// The application-wide bus instance.
    pub fn shared() -> Self {
        SHARED_NOTIFIER.with(|cell| cell.get_or_init(Self::new).clone())
    }

    /// Live view of the current notification slot.
    #[must_use]
    pub fn current(&self) -> Subject<Option<Notification>> {
        self.current.clone()
    }

    /// Displays a success message. `auto_close_secs` of 0 means it stays
    /// until dismissed or replaced.
    pub fn show_success(&self, text: impl Into<String>, auto_close_secs: u32) {
        self.show(Notification::new(NotificationKind::Success, text), auto_close_secs);
    }

    /// Displays an error message.
    pub fn show_error(&self, text: impl Into<String>, auto_close_secs: u32) {
        self.show(Notification::new(NotificationKind::Error, text), auto_close_secs);
    }

    /// Displays a warning message.
    pub fn show_warning(&self, text: impl Into<String>, auto_close_secs: u32) {
        self.show(Notification::new(NotificationKind::Warning, text), auto_close_secs);
    }

    /// Clears the slot and invalidates any pending auto-close timer.
    pub fn clear(&self) {
        self.epoch.set(self.epoch.get() + 1);
        if self.current.get().is_some() {
            self.current.set(None);
        }
    }

    fn show(&self, notification: Notification, auto_close_secs: u32) {
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);
        self.current.set(Some(notification));
        if auto_close_secs > 0 {
            self.arm_auto_close(auto_close_secs, epoch);
        }
    }

    /// Clears the slot, but only if no newer publish or clear happened
    /// since the timer carrying `epoch` was armed.
    pub(crate) fn expire(&self, epoch: u64) {
        if self.epoch.get() == epoch {
            self.current.set(None);
        }
    }

    #[cfg(test)]
    pub(crate) fn latest_epoch(&self) -> u64 {
        self.epoch.get()
    }

    #[cfg(target_arch = "wasm32")]
    fn arm_auto_close(&self, secs: u32, epoch: u64) {
        let bus = self.clone();
        gloo_timers::callback::Timeout::new(secs.saturating_mul(1000), move || bus.expire(epoch))
            .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn arm_auto_close(&self, _secs: u32, _epoch: u64) {
        // Timers exist only in the browser; native tests drive expire().
    }
}
