//! Per-kind request sequencing
//!
//! Each request kind (recipe generation, pantry analysis) owns one
//! `RequestTracker`. The tracker issues a monotonically increasing sequence
//! number per request and acknowledges only the settlement of the latest
//! one, so a response overtaken by a newer request is discarded instead of
//! overwriting newer state.

/// Tracks the outstanding request of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestTracker {
    last_seq: u64,
    in_flight: Option<u64>,
}

impl RequestTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, returning its sequence number.
    ///
    /// A newer `begin` supersedes any request still outstanding; the older
    /// one's settlement will then be reported stale.
    pub fn begin(&mut self) -> u64 {
        self.last_seq = self.last_seq.saturating_add(1);
        self.in_flight = Some(self.last_seq);
        self.last_seq
    }

    /// Settle the request with the given sequence number.
    ///
    /// Returns `true` and clears the in-flight mark iff `seq` is the latest
    /// begun request. A stale sequence returns `false` and leaves the
    /// tracker untouched; the caller must discard that response.
    pub fn settle(&mut self, seq: u64) -> bool {
        if self.in_flight == Some(seq) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Whether a request of this kind is outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }
}
