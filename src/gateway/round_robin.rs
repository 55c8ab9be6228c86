use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out a fixed set of backends in rotation. Shared by all workers.
#[derive(Debug)]
pub struct RoundRobin<T> {
    backends: Vec<T>,
    next: AtomicUsize,
}

impl<T> RoundRobin<T> {
    /// `None` when there is nothing to rotate over.
    pub fn new(backends: Vec<T>) -> Option<Self> {
        if backends.is_empty() {
            return None;
        }
        Some(Self {
            backends,
            next: AtomicUsize::new(0),
        })
    }

    pub fn next(&self) -> &T {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.backends.len();
        &self.backends[index]
    }

    pub fn backend_count(&self) -> usize {
        self.backends.len()
    }
}
