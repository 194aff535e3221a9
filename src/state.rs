//! Observable state holders.
//!
//! An [`Observable`] keeps the latest value and notifies every subscriber
//! when it changes, independently of whatever renders it.

use tokio::sync::watch;

/// A value with get/set/subscribe semantics
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    /// Wraps an initial value
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns a clone of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the value and notifies subscribers
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutates the value in place and notifies subscribers
    pub fn update<F>(&self, modify: F)
    where
        F: FnOnce(&mut T),
    {
        self.tx.send_modify(modify);
    }

    /// Subscribes to changes; the receiver starts at the current value
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let value = Observable::new(1);
        assert_eq!(value.get(), 1);
        value.set(2);
        assert_eq!(value.get(), 2);
    }

    #[test]
    fn test_update_in_place() {
        let list = Observable::new(vec![1, 2]);
        list.update(|v| v.push(3));
        assert_eq!(list.get(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_subscriber_sees_changes() {
        let value = Observable::new(String::from("a"));
        let mut rx = value.subscribe();
        assert_eq!(*rx.borrow(), "a");

        value.set(String::from("b"));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "b");
    }
}
