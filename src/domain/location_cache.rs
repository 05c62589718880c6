//! Per-profile cache of pre-validated landing locations.
//!
//! Prefetch workers enqueue locations the safe-location validator has already
//! certified; teleport requests dequeue them to skip the synchronous search.
//! Callers share the queue through `&self` and never lock around it.

use crossbeam_channel::{unbounded, Receiver, Sender};

use super::foundation::Location;

/// Unbounded multi-producer multi-consumer FIFO of landing locations.
#[derive(Debug)]
pub struct LocationQueue {
    sender: Sender<Location>,
    receiver: Receiver<Location>,
}

impl LocationQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Appends a location. Never blocks and never rejects.
    pub fn enqueue(&self, location: Location) {
        // The receiver lives in `self`, so the channel cannot be disconnected here.
        let _ = self.sender.send(location);
    }

    /// Removes and returns the oldest location, or `None` when the cache is empty.
    ///
    /// An empty result means the caller should run the safe-location search itself.
    pub fn dequeue(&self) -> Option<Location> {
        self.receiver.try_recv().ok()
    }

    /// Snapshot of the number of cached locations. Diagnostic only.
    pub fn size(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl Default for LocationQueue {
    fn default() -> Self {
        Self::new()
    }
}
