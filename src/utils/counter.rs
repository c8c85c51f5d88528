//! A simple counter for tracking conversion results.
use crate::types::*;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::SeqCst;

/// A counter for tracking conversion results.
pub struct Counter {
    ok: AtomicUsize,
    ignored: AtomicUsize,
    error: AtomicUsize,
    warning: AtomicUsize,
    entries: AtomicUsize,
}

impl Counter {
    /// Creates a new Counter instance.
    pub fn new() -> Self {
        Self {
            ok: AtomicUsize::new(0),
            ignored: AtomicUsize::new(0),
            error: AtomicUsize::new(0),
            warning: AtomicUsize::new(0),
            entries: AtomicUsize::new(0),
        }
    }

    /// Increments the count of errors.
    pub fn inc_error(&self) {
        self.error.fetch_add(1, SeqCst);
    }

    /// Increments the count of warnings.
    pub fn inc_warning(&self) {
        self.warning.fetch_add(1, SeqCst);
    }

    /// Adds converted entries.
    pub fn add_entries(&self, count: usize) {
        self.entries.fetch_add(count, SeqCst);
    }

    /// Increments the count of processed files.
    pub fn inc(&self, result: ConvertResult) {
        match result {
            ConvertResult::Ok => {
                self.ok.fetch_add(1, SeqCst);
            }
            ConvertResult::Ignored => {
                self.ignored.fetch_add(1, SeqCst);
            }
        }
    }

    pub fn ok(&self) -> usize {
        self.ok.load(SeqCst)
    }

    pub fn ignored(&self) -> usize {
        self.ignored.load(SeqCst)
    }

    pub fn entries(&self) -> usize {
        self.entries.load(SeqCst)
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OK: {}, Ignored: {}, Entries: {}, Error: {}, Warning: {}",
            self.ok.load(SeqCst),
            self.ignored.load(SeqCst),
            self.entries.load(SeqCst),
            self.error.load(SeqCst),
            self.warning.load(SeqCst),
        )
    }
}

#[test]
fn test_counter() {
    let counter = Counter::new();
    counter.inc(ConvertResult::Ok);
    counter.inc(ConvertResult::Ignored);
    counter.inc(ConvertResult::Ok);
    counter.add_entries(5);
    counter.inc_warning();
    assert_eq!(counter.ok(), 2);
    assert_eq!(counter.ignored(), 1);
    assert_eq!(counter.entries(), 5);
    assert_eq!(
        counter.to_string(),
        "OK: 2, Ignored: 1, Entries: 5, Error: 0, Warning: 1"
    );
}
