use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once its shared flag has been raised.
///
/// Clones share the same flag, so a clone can be handed to another thread (or registered with a
/// signal handler) and used to cancel a running search.
#[derive(Clone, Debug, Default)]
pub struct CancellationFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing flag, e.g. one which is registered with a signal handler.
    pub fn from_flag(cancelled: Arc<AtomicBool>) -> Self {
        CancellationFlag { cancelled }
    }

    /// Requests every search polling this flag (or one of its clones) to stop.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Returns the underlying shared flag.
    pub fn flag(&self) -> &Arc<AtomicBool> {
        &self.cancelled
    }
}

impl TerminationCondition for CancellationFlag {
    fn should_stop(&mut self) -> bool {
        self.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelling_a_clone_stops_the_original() {
        let mut termination = CancellationFlag::new();
        let handle = termination.clone();
        assert!(!termination.should_stop());

        handle.cancel();

        assert!(termination.should_stop());
    }

    #[test]
    fn flag_can_be_raised_from_another_thread() {
        let mut termination = CancellationFlag::new();
        let handle = termination.clone();

        std::thread::spawn(move || handle.cancel())
            .join()
            .expect("cancelling thread should not panic");

        assert!(termination.should_stop());
    }
}
