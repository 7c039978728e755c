//! Tests for the notification bus.
//!
//! Timers never run on native targets, so auto-close is exercised by
//! calling the expiry path directly with the epoch a timer would carry.

#[cfg(test)]
mod tests {
    use crate::models::NotificationKind;
    use crate::services::notify::Notifier;

    #[test]
    fn show_publishes_to_the_slot() {
        let bus = Notifier::new();
        assert!(bus.current().get().is_none());

        bus.show_warning("careful now", 0);

        let note = bus.current().get().expect("warning live");
        assert_eq!(note.kind, NotificationKind::Warning);
        assert_eq!(note.text, "careful now");
    }

    /// The bus is a single-slot overwrite channel: no queue, no history.
    #[test]
    fn newer_notification_replaces_older() {
        let bus = Notifier::new();
        bus.show_error("x", 0);
        bus.show_success("y", 0);

        let note = bus.current().get().expect("success live");
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.text, "y");
    }

    /// An explicit clear empties the slot and invalidates the pending
    /// auto-close timer, which must not resurrect or re-clear anything.
    #[test]
    fn clear_invalidates_pending_timer() {
        let bus = Notifier::new();
        bus.show_error("x", 2);
        let armed = bus.latest_epoch();

        bus.clear();
        assert!(bus.current().get().is_none());

        bus.expire(armed);
        assert!(bus.current().get().is_none());
    }

    /// A timer armed for a superseded notification never clears the newer
    /// one.
    #[test]
    fn stale_timer_does_not_clear_newer_notification() {
        let bus = Notifier::new();
        bus.show_error("x", 2);
        let stale = bus.latest_epoch();

        bus.show_success("y", 0);
        bus.expire(stale);

        let note = bus.current().get().expect("newer message survives");
        assert_eq!(note.text, "y");
    }

    /// The timer armed with the current notification does clear it.
    #[test]
    fn current_timer_expires_the_slot() {
        let bus = Notifier::new();
        bus.show_success("done", 3);

        bus.expire(bus.latest_epoch());

        assert!(bus.current().get().is_none());
    }

    #[test]
    fn clear_on_empty_slot_is_a_noop() {
        let bus = Notifier::new();
        bus.clear();
        assert!(bus.current().get().is_none());
    }
}
