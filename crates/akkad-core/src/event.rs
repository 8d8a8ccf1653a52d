//! Domain event abstractions and synchronous listener registries.

/// Trait that all domain events implement.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Returns the event type name (used for logging and routing).
    fn event_type(&self) -> &'static str;

    /// Serializes the event payload to JSON.
    fn to_payload(&self) -> serde_json::Value;
}

type Listener<E> = Box<dyn FnMut(&E) + Send>;

/// Ordered, register-only list of callbacks for one event category.
///
/// Callbacks run synchronously in registration order. A panicking
/// callback is not caught and unwinds into whoever emitted the event.
pub struct Listeners<E> {
    callbacks: Vec<Listener<E>>,
}

impl<E> Listeners<E> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Appends a callback. There is no way to remove it again.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&E) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Invokes every callback with `event`.
    pub fn emit(&mut self, event: &E) {
        for callback in &mut self.callbacks {
            callback(event);
        }
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no callback is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_emit_runs_callbacks_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut listeners: Listeners<u32> = Listeners::new();

        let first = Arc::clone(&seen);
        listeners.subscribe(move |e| first.lock().unwrap().push(("first", *e)));
        let second = Arc::clone(&seen);
        listeners.subscribe(move |e| second.lock().unwrap().push(("second", *e)));

        listeners.emit(&7);

        assert_eq!(*seen.lock().unwrap(), vec![("first", 7), ("second", 7)]);
        assert_eq!(listeners.len(), 2);
    }

    #[test]
    fn test_emit_without_listeners_is_noop() {
        let mut listeners: Listeners<&str> = Listeners::default();
        listeners.emit(&"nothing");
        assert!(listeners.is_empty());
    }

    #[test]
    #[should_panic(expected = "listener failure")]
    fn test_panicking_listener_propagates() {
        let mut listeners: Listeners<()> = Listeners::new();
        listeners.subscribe(|()| panic!("listener failure"));
        listeners.emit(&());
    }
}
