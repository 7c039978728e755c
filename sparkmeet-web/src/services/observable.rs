//! Minimal subject/observer broadcaster.
//!
//! A [`Subject`] holds the latest value and pushes changes synchronously to
//! every registered observer. New subscribers are replayed the current value
//! immediately, so components never render a stale initial state. Everything
//! runs on the single UI thread; `Rc`/`RefCell` is all the sharing we need.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use yew::prelude::*;

type Observer<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    next_id: u32,
    observers: Vec<(u32, Observer<T>)>,
}

/// A live, push-updated value with replay-on-subscribe semantics.
pub struct Subject<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("value", &self.inner.borrow().value)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> Subject<T> {
    /// Create a subject seeded with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                observers: Vec::new(),
            })),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the value and notify every observer.
    pub fn set(&self, value: T) {
        let observers: Vec<Observer<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            inner.observers.iter().map(|(_, f)| Rc::clone(f)).collect()
        };
        // The borrow is released before callbacks run, so observers may
        // freely read or subscribe from inside their handler.
        let value = self.get();
        for observer in observers {
            observer(&value);
        }
    }

    /// Register an observer. It is invoked immediately with the current
    /// value, then again on every [`Subject::set`]. Dropping the returned
    /// [`Subscription`] unregisters it.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        let observer: Observer<T> = Rc::new(observer);
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, Rc::clone(&observer)));
            id
        };
        observer(&self.get());

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .borrow_mut()
                        .observers
                        .retain(|(observer_id, _)| *observer_id != id);
                }
            })),
        }
    }

    /// Number of live observers.
    #[cfg(test)]
    pub(crate) fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }
}

/// RAII handle for an observer registration; dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Bridge a [`Subject`] into Yew component state. The component re-renders
/// whenever the subject changes and unsubscribes when it unmounts.
#[hook]
pub fn use_subject<T>(subject: &Subject<T>) -> UseStateHandle<T>
where
    T: Clone + PartialEq + 'static,
{
    let state = use_state(|| subject.get());
    {
        let state = state.clone();
        let subject = subject.clone();
        use_effect_with((), move |_| {
            let subscription = subject.subscribe(move |value| state.set(value.clone()));
            move || drop(subscription)
        });
    }
    state
}
