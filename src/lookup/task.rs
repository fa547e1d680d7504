//! Background lookup
//!
//! Runs the post-game lookup on its own thread so input handling never waits
//! on the network. Dropping the task discards a result that is still in flight.
//! If the worker dies without answering, the bare details are delivered instead.

use super::{PostGameDetails, WordLookup, enrich};
use log::{debug, warn};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

pub struct LookupTask {
    receiver: Receiver<PostGameDetails>,
    fallback: PostGameDetails,
    taken: bool,
}

impl LookupTask {
    /// Start looking up `details.word`
    #[must_use]
    pub fn spawn(lookup: Arc<dyn WordLookup>, details: PostGameDetails) -> Self {
        let (sender, receiver) = mpsc::channel();
        let fallback = details.clone();

        thread::spawn(move || {
            let details = enrich(lookup.as_ref(), details);
            // The receiver is gone if the player moved on; nothing to deliver
            if sender.send(details).is_err() {
                debug!("Lookup result discarded");
            }
        });

        Self {
            receiver,
            fallback,
            taken: false,
        }
    }

    /// Take the result if it has arrived
    ///
    /// Returns `None` while the lookup is still running or after the result
    /// was already taken. A worker that exited without sending yields the
    /// bare details.
    #[must_use]
    pub fn try_take(&mut self) -> Option<PostGameDetails> {
        if self.taken {
            return None;
        }
        let details = match self.receiver.try_recv() {
            Ok(details) => details,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                warn!("Lookup for {} stopped without a result", self.fallback.word);
                self.fallback.clone()
            }
        };
        self.taken = true;
        Some(details)
    }

    /// Block until the result arrives, or the worker exits
    #[must_use]
    pub fn wait(self) -> PostGameDetails {
        self.receiver.recv().unwrap_or_else(|_| {
            warn!("Lookup for {} stopped without a result", self.fallback.word);
            self.fallback
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::error::ServiceError;
    use crate::lookup::tests::FakeLookup;
    use crate::lookup::{Meaning, Outcome};

    struct PanickingLookup;

    impl WordLookup for PanickingLookup {
        fn define(&self, _: &str) -> Result<Vec<Meaning>, ServiceError> {
            panic!("dictionary client crashed");
        }

        fn translate(&self, _: &str) -> Result<String, ServiceError> {
            Ok(String::new())
        }
    }

    #[test]
    fn task_delivers_enriched_details() {
        let lookup = Arc::new(FakeLookup::new(true, true));
        let details = PostGameDetails::bare(&Word::new("mouth").unwrap(), Outcome::Lost, 6);

        let task = LookupTask::spawn(lookup, details);
        let details = task.wait();

        assert_eq!(details.word, "MOUTH");
        assert_eq!(details.meanings.len(), 1);
        assert_eq!(details.translation.as_deref(), Some("mouth-translated"));
    }

    #[test]
    fn task_result_taken_once() {
        let lookup = Arc::new(FakeLookup::new(false, false));
        let details = PostGameDetails::bare(&Word::new("crane").unwrap(), Outcome::Won, 1);
        let mut task = LookupTask::spawn(lookup, details);

        let mut taken = None;
        while taken.is_none() {
            taken = task.try_take();
            thread::yield_now();
        }
        assert!(task.try_take().is_none());
    }

    #[test]
    fn crashed_worker_yields_bare_details() {
        let bare = PostGameDetails::bare(&Word::new("lemon").unwrap(), Outcome::Won, 4);

        let task = LookupTask::spawn(Arc::new(PanickingLookup), bare.clone());
        assert_eq!(task.wait(), bare);

        let mut task = LookupTask::spawn(Arc::new(PanickingLookup), bare.clone());
        let mut taken = None;
        while taken.is_none() {
            taken = task.try_take();
            thread::yield_now();
        }
        assert_eq!(taken, Some(bare));
        assert!(task.try_take().is_none());
    }
}
