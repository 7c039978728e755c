//! Tests for the subject/observer broadcaster.

#[cfg(test)]
mod tests {
    use crate::services::observable::Subject;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn get_returns_latest_value() {
        let subject = Subject::new(1);
        assert_eq!(subject.get(), 1);
        subject.set(2);
        assert_eq!(subject.get(), 2);
    }

    /// New subscribers are replayed the current value immediately, then
    /// receive every later update.
    #[test]
    fn subscribe_replays_then_streams() {
        let subject = Subject::new(10);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let _subscription = subject.subscribe(move |value| sink.borrow_mut().push(*value));
        subject.set(20);
        subject.set(30);

        assert_eq!(*seen.borrow(), vec![10, 20, 30]);
    }

    #[test]
    fn every_observer_is_notified() {
        let subject = Subject::new(0);
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));

        let sink = first.clone();
        let _a = subject.subscribe(move |value| *sink.borrow_mut() = *value);
        let sink = second.clone();
        let _b = subject.subscribe(move |value| *sink.borrow_mut() = *value);

        subject.set(7);
        assert_eq!(*first.borrow(), 7);
        assert_eq!(*second.borrow(), 7);
    }

    /// Dropping the subscription unregisters the observer.
    #[test]
    fn dropped_subscription_stops_updates() {
        let subject = Subject::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let subscription = subject.subscribe(move |value| sink.borrow_mut().push(*value));
        subject.set(1);
        drop(subscription);
        subject.set(2);

        assert_eq!(*seen.borrow(), vec![0, 1]);
        assert_eq!(subject.observer_count(), 0);
    }

    /// Observers may read the subject from inside their handler without
    /// panicking on a live borrow.
    #[test]
    fn observer_may_read_subject_reentrantly() {
        let subject = Subject::new(1);
        let seen = Rc::new(RefCell::new(0));

        let sink = seen.clone();
        let handle = subject.clone();
        let _subscription = subject.subscribe(move |_| {
            *sink.borrow_mut() = handle.get();
        });

        subject.set(42);
        assert_eq!(*seen.borrow(), 42);
    }
}
