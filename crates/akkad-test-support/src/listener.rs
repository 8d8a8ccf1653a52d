//! Event recorder for listener assertions.

use std::sync::{Arc, Mutex};

/// Collects every event passed to the callbacks it hands out.
#[derive(Debug)]
pub struct Recorder<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone + Send + 'static> Recorder<E> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A callback that appends each event it receives.
    pub fn callback(&self) -> impl FnMut(&E) + Send + 'static {
        let events = Arc::clone(&self.events);
        move |event: &E| events.lock().unwrap().push(event.clone())
    }

    /// Everything recorded so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn events(&self) -> Vec<E> {
        self.events.lock().unwrap().clone()
    }
}

impl<E: Clone + Send + 'static> Default for Recorder<E> {
    fn default() -> Self {
        Self::new()
    }
}
