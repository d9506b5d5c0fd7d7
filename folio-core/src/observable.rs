// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Observable values
//!
//! A typed holder of a current value that broadcasts every mutation to its
//! observers with the `(old, new)` pair. Registration hands back a
//! [`Subscription`]; dropping it unregisters the observer.
//!
//! Notification is synchronous on the thread that calls [`Observable::set`].
//! Callbacks run outside the internal lock, so a callback may call `set`
//! again without deadlocking, but the notification order in that case is
//! unspecified.

use std::sync::{Arc, Mutex, PoisonError, Weak};

type Callback<T> = Arc<dyn Fn(&T, &T) + Send + Sync>;

struct Inner<T> {
    value: T,
    observers: Vec<(u64, Callback<T>)>,
    next_id: u64,
}

/// Observable holder of a value of type `T`.
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T: Clone> Observable<T> {
    /// Creates an observable with the given initial value.
    pub fn new(value: T) -> Self {
        Observable {
            inner: Arc::new(Mutex::new(Inner {
                value,
                observers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    /// Replaces the value and notifies every observer with `(old, new)`.
    ///
    /// Every call counts as a mutation, including one that sets the value
    /// already held.
    pub fn set(&self, value: T) {
        let (old, callbacks) = {
            let mut inner = self.lock();
            let old = std::mem::replace(&mut inner.value, value.clone());
            let callbacks: Vec<Callback<T>> = inner
                .observers
                .iter()
                .map(|(_, cb)| Arc::clone(cb))
                .collect();
            (old, callbacks)
        };

        for callback in callbacks {
            callback(&old, &value);
        }
    }

    /// Registers an observer for future mutations.
    pub fn observe<F>(&self, observer: F) -> Subscription<T>
    where
        F: Fn(&T, &T) + Send + Sync + 'static,
    {
        let id = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, Arc::new(observer)));
            id
        };

        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Registers an observer and immediately fires it once with
    /// `(current, current)`, priming initial observer state.
    pub fn observe_with_initial<F>(&self, observer: F) -> Subscription<T>
    where
        F: Fn(&T, &T) + Send + Sync + 'static,
    {
        let callback: Callback<T> = Arc::new(observer);
        let (id, current) = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, Arc::clone(&callback)));
            (id, inner.value.clone())
        };
        callback(&current, &current);

        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.lock().observers.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Observable {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Handle for a registered observer.
///
/// Dropping the subscription unregisters the observer; no further
/// notifications are delivered through it.
#[must_use = "dropping a Subscription unregisters the observer"]
pub struct Subscription<T> {
    id: u64,
    inner: Weak<Mutex<Inner<T>>>,
}

impl<T> Subscription<T> {
    /// Unregisters the observer now.
    pub fn cancel(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.observers.retain(|(id, _)| *id != self.id);
        }
    }
}
