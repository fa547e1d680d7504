//! Game session
//!
//! Binds a round to its puzzle mode and runs the side effects of finishing a
//! game: the completion record for the daily puzzle and the post-game lookup.
//! Front ends talk to the game only through this type.

use super::{Dictionary, GameStatus, Round, Submission};
use crate::core::{KeyboardState, Word};
use crate::daily::{DateKey, PuzzleSetup};
use crate::device::{CompletionRecord, CompletionStore};
use crate::error::{GameError, Rejection};
use crate::lookup::{LookupTask, Outcome, PostGameDetails, WordLookup};
use log::{info, warn};
use rand::Rng;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleMode {
    /// The shared word for a date; one attempt per device
    Daily(DateKey),
    /// A private word that may be reset freely
    Practice,
}

impl PuzzleMode {
    #[must_use]
    pub const fn is_daily(self) -> bool {
        matches!(self, Self::Daily(_))
    }
}

pub struct Session {
    dictionary: Dictionary,
    mode: PuzzleMode,
    round: Round,
    completions: Box<dyn CompletionStore>,
    lookup: Option<Arc<dyn WordLookup>>,
    pending: Option<LookupTask>,
    details: Option<PostGameDetails>,
    /// Completion loaded from a previous visit; blocks all input
    restored: Option<CompletionRecord>,
    finished: bool,
    offline: bool,
}

impl Session {
    /// Start a session, restoring today's completion if this device already
    /// finished the daily puzzle
    pub fn new(
        setup: PuzzleSetup,
        completions: Box<dyn CompletionStore>,
        lookup: Option<Arc<dyn WordLookup>>,
    ) -> Self {
        let mut session = Self {
            dictionary: setup.dictionary,
            mode: setup.mode,
            round: Round::new(setup.secret),
            completions,
            lookup,
            pending: None,
            details: None,
            restored: None,
            finished: false,
            offline: setup.offline,
        };

        if let PuzzleMode::Daily(key) = session.mode {
            match session.completions.load(&key) {
                Ok(Some(record)) => {
                    info!("Daily puzzle for {key} already played");
                    session.restore(record);
                }
                Ok(None) => {}
                Err(e) => warn!("Could not read completion record for {key}: {e}"),
            }
        }

        session
    }

    fn restore(&mut self, record: CompletionRecord) {
        self.finished = true;
        match &record.details {
            Some(details) if details.looked_up => self.details = Some(details.clone()),
            Some(details) => {
                // Saved at game end, before any lookup answered
                self.details = Some(details.clone());
                self.request_lookup(details.clone());
            }
            None => {
                let bare = PostGameDetails::bare(self.round.secret(), record.outcome, 0);
                self.request_lookup(bare);
            }
        }
        self.restored = Some(record);
    }

    fn ensure_playable(&self) -> Result<(), GameError> {
        if self.restored.is_some() {
            Err(Rejection::GameOver.into())
        } else {
            Ok(())
        }
    }

    /// # Errors
    /// `InputRejected` if the letter cannot be added.
    pub fn append_letter(&mut self, c: char) -> Result<(), GameError> {
        self.ensure_playable()?;
        self.round.append_letter(c)
    }

    /// # Errors
    /// `InputRejected(GameOver)` once the game has ended.
    pub fn delete_letter(&mut self) -> Result<(), GameError> {
        self.ensure_playable()?;
        self.round.delete_letter()
    }

    /// Submit the composing guess; finishing the game runs its side effects
    ///
    /// # Errors
    /// `IllegalWord` or `InputRejected`, with the session unchanged.
    pub fn submit_guess(&mut self) -> Result<Submission, GameError> {
        self.ensure_playable()?;
        let submission = self.round.submit_guess(&self.dictionary)?;

        if submission.status.is_terminal() {
            self.finish(submission.status);
        }

        Ok(submission)
    }

    fn finish(&mut self, status: GameStatus) {
        let Some(outcome) = Outcome::from_status(status) else {
            return;
        };
        if self.finished {
            return;
        }
        self.finished = true;

        info!(
            "Game over: {outcome:?} in {} attempts ({})",
            self.round.attempts_used(),
            self.round.secret()
        );

        let bare = PostGameDetails::bare(self.round.secret(), outcome, self.round.attempts_used());
        self.save_completion(Some(&bare));
        self.request_lookup(bare);
    }

    fn request_lookup(&mut self, bare: PostGameDetails) {
        match &self.lookup {
            Some(lookup) => self.pending = Some(LookupTask::spawn(Arc::clone(lookup), bare)),
            None => self.details = Some(bare),
        }
    }

    fn save_completion(&self, details: Option<&PostGameDetails>) {
        let PuzzleMode::Daily(date) = self.mode else {
            return;
        };
        let Some(outcome) = Outcome::from_status(self.status()) else {
            return;
        };

        let record = CompletionRecord {
            date,
            outcome,
            details: details.cloned(),
        };
        if let Err(e) = self.completions.save(&record) {
            warn!("Could not save completion record for {date}: {e}");
        }
    }

    /// Collect a finished lookup; returns true when new details arrived
    pub fn poll_details(&mut self) -> bool {
        let Some(details) = self.pending.as_mut().and_then(LookupTask::try_take) else {
            return false;
        };
        self.pending = None;
        self.accept_details(details);
        true
    }

    /// Block until the pending lookup, if any, completes
    pub fn wait_for_details(&mut self) -> Option<&PostGameDetails> {
        if let Some(task) = self.pending.take() {
            self.accept_details(task.wait());
        }
        self.details.as_ref()
    }

    fn accept_details(&mut self, mut details: PostGameDetails) {
        if let Some(record) = &self.restored {
            details.outcome = record.outcome;
        }
        self.save_completion(Some(&details));
        self.details = Some(details);
    }

    /// Start over with a fresh word; practice mode only
    ///
    /// # Errors
    /// `InputRejected(DailyPuzzle)` for the daily puzzle.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.mode.is_daily() {
            return Err(Rejection::DailyPuzzle.into());
        }
        self.new_practice_round(rng);
        Ok(())
    }

    /// Leave a finished daily puzzle for practice play
    ///
    /// In practice mode this is the same as `reset`.
    ///
    /// # Errors
    /// `InputRejected(DailyInProgress)` while the daily puzzle is unfinished.
    pub fn start_practice<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.mode.is_daily() && !self.status().is_terminal() {
            return Err(Rejection::DailyInProgress.into());
        }
        self.mode = PuzzleMode::Practice;
        self.restored = None;
        self.new_practice_round(rng);
        Ok(())
    }

    fn new_practice_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let secret = self
            .dictionary
            .random_word(rng)
            .cloned()
            .unwrap_or_else(|| self.round.secret().clone());

        info!("New practice round");
        self.round = Round::new(secret);
        self.pending = None;
        self.details = None;
        self.finished = false;
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.restored
            .as_ref()
            .map_or_else(|| self.round.status(), |record| record.outcome.status())
    }

    #[must_use]
    pub const fn mode(&self) -> PuzzleMode {
        self.mode
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        self.round.secret()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        self.round.keyboard()
    }

    /// Post-game details, once available
    #[must_use]
    pub const fn details(&self) -> Option<&PostGameDetails> {
        self.details.as_ref()
    }

    #[must_use]
    pub const fn lookup_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Playing from the embedded list
    #[must_use]
    pub const fn is_offline(&self) -> bool {
        self.offline
    }

    /// The daily puzzle was finished on an earlier visit
    #[must_use]
    pub const fn is_restored(&self) -> bool {
        self.restored.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::MemoryCompletionStore;
    use crate::error::ServiceError;
    use crate::lookup::Meaning;
    use crate::lookup::tests::FakeLookup;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::atomic::Ordering;
    use std::thread;

    fn key() -> DateKey {
        "2024-09-09".parse().unwrap()
    }

    fn setup(secret: &str, mode: PuzzleMode) -> PuzzleSetup {
        PuzzleSetup {
            dictionary: Dictionary::new(["crane", "slate", "mouth", "audio", "pride", "lemon"]),
            secret: Word::new(secret).unwrap(),
            mode,
            offline: false,
        }
    }

    fn play(session: &mut Session, word: &str) -> Result<Submission, GameError> {
        for c in word.chars() {
            session.append_letter(c)?;
        }
        session.submit_guess()
    }

    /// Shares records between sessions, like files on one device
    #[derive(Clone, Default)]
    struct SharedStore(Arc<MemoryCompletionStore>);

    impl CompletionStore for SharedStore {
        fn load(&self, key: &DateKey) -> Result<Option<CompletionRecord>, ServiceError> {
            self.0.load(key)
        }

        fn save(&self, record: &CompletionRecord) -> Result<(), ServiceError> {
            self.0.save(record)
        }
    }

    struct CrashingLookup;

    impl WordLookup for CrashingLookup {
        fn define(&self, _: &str) -> Result<Vec<Meaning>, ServiceError> {
            panic!("dictionary client crashed");
        }

        fn translate(&self, _: &str) -> Result<String, ServiceError> {
            Ok(String::new())
        }
    }

    #[test]
    fn daily_win_saves_completion() {
        let store = SharedStore::default();
        let mut session = Session::new(
            setup("crane", PuzzleMode::Daily(key())),
            Box::new(store.clone()),
            None,
        );

        play(&mut session, "slate").unwrap();
        let submission = play(&mut session, "crane").unwrap();

        assert_eq!(submission.status, GameStatus::Won);
        let record = store.load(&key()).unwrap().unwrap();
        assert_eq!(record.outcome, Outcome::Won);
        assert_eq!(record.details.unwrap().attempts, 2);
        assert_eq!(session.details().unwrap().word, "CRANE");
    }

    #[test]
    fn revisit_restores_terminal_state() {
        let store = SharedStore::default();
        let mut first = Session::new(
            setup("crane", PuzzleMode::Daily(key())),
            Box::new(store.clone()),
            None,
        );
        play(&mut first, "crane").unwrap();

        let mut second = Session::new(
            setup("crane", PuzzleMode::Daily(key())),
            Box::new(store),
            None,
        );
        assert!(second.is_restored());
        assert_eq!(second.status(), GameStatus::Won);
        assert_eq!(
            second.append_letter('c'),
            Err(GameError::InputRejected(Rejection::GameOver))
        );
        assert_eq!(
            second.submit_guess().map(|_| ()),
            Err(GameError::InputRejected(Rejection::GameOver))
        );
        assert_eq!(second.details().unwrap().attempts, 1);
    }

    #[test]
    fn practice_never_saves_completion() {
        let store = SharedStore::default();
        let mut session = Session::new(
            setup("crane", PuzzleMode::Practice),
            Box::new(store.clone()),
            None,
        );
        play(&mut session, "crane").unwrap();
        assert!(store.load(&key()).unwrap().is_none());
    }

    #[test]
    fn reset_rejected_for_daily() {
        let mut session = Session::new(
            setup("crane", PuzzleMode::Daily(key())),
            Box::new(MemoryCompletionStore::new()),
            None,
        );
        play(&mut session, "crane").unwrap();

        assert_eq!(
            session.reset(&mut StdRng::seed_from_u64(1)),
            Err(GameError::InputRejected(Rejection::DailyPuzzle))
        );
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn reset_in_practice_starts_fresh_round() {
        let mut session = Session::new(
            setup("crane", PuzzleMode::Practice),
            Box::new(MemoryCompletionStore::new()),
            None,
        );
        play(&mut session, "slate").unwrap();
        session.reset(&mut StdRng::seed_from_u64(9)).unwrap();

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.round().round(), 0);
        assert!(session.round().history().is_empty());
        assert!(session.dictionary().is_legal_guess(session.secret().text()));
        assert!(session.details().is_none());
    }

    #[test]
    fn practice_after_daily_requires_finished_daily() {
        let mut session = Session::new(
            setup("crane", PuzzleMode::Daily(key())),
            Box::new(MemoryCompletionStore::new()),
            None,
        );
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(
            session.start_practice(&mut rng),
            Err(GameError::InputRejected(Rejection::DailyInProgress))
        );

        play(&mut session, "crane").unwrap();
        session.start_practice(&mut rng).unwrap();
        assert_eq!(session.mode(), PuzzleMode::Practice);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn lookup_requested_once_per_game() {
        let lookup = Arc::new(FakeLookup::new(true, true));
        let store = SharedStore::default();
        let mut session = Session::new(
            setup("mouth", PuzzleMode::Daily(key())),
            Box::new(store.clone()),
            Some(lookup.clone()),
        );

        for word in ["crane", "slate", "audio", "pride", "lemon", "crane"] {
            play(&mut session, word).unwrap();
        }
        assert_eq!(session.status(), GameStatus::Lost);
        assert!(session.lookup_pending());

        let details = session.wait_for_details().unwrap();
        assert_eq!(details.outcome, Outcome::Lost);
        assert_eq!(details.meanings.len(), 1);
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);

        // The enriched details replace the bare ones in the cache
        let cached = store.load(&key()).unwrap().unwrap().details.unwrap();
        assert_eq!(cached.translation.as_deref(), Some("mouth-translated"));

        // Further input after the game neither counts nor looks up again
        assert!(play(&mut session, "crane").is_err());
        assert!(!session.poll_details());
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn revisit_with_cached_details_skips_lookup() {
        let lookup = Arc::new(FakeLookup::new(true, false));
        let store = SharedStore::default();
        let mut first = Session::new(
            setup("crane", PuzzleMode::Daily(key())),
            Box::new(store.clone()),
            Some(lookup.clone()),
        );
        play(&mut first, "crane").unwrap();
        assert_eq!(first.wait_for_details().unwrap().meanings.len(), 1);
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);

        let mut second = Session::new(
            setup("crane", PuzzleMode::Daily(key())),
            Box::new(store),
            Some(lookup.clone()),
        );
        assert!(second.is_restored());
        assert!(!second.lookup_pending());
        assert!(!second.poll_details());
        assert_eq!(second.details().unwrap().meanings.len(), 1);
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropped_lookup_runs_again_on_revisit() {
        let lookup = Arc::new(FakeLookup::new(true, true));
        let store = SharedStore::default();
        let mut first = Session::new(
            setup("crane", PuzzleMode::Daily(key())),
            Box::new(store.clone()),
            Some(lookup.clone()),
        );
        play(&mut first, "slate").unwrap();
        play(&mut first, "crane").unwrap();

        // Leaving for practice discards the lookup before it is collected
        first.start_practice(&mut StdRng::seed_from_u64(4)).unwrap();
        assert!(!first.lookup_pending());
        let cached = store.load(&key()).unwrap().unwrap().details.unwrap();
        assert!(!cached.looked_up);

        let mut second = Session::new(
            setup("crane", PuzzleMode::Daily(key())),
            Box::new(store.clone()),
            Some(lookup),
        );
        assert!(second.is_restored());
        assert!(second.lookup_pending());
        assert_eq!(second.details().unwrap().attempts, 2);

        let details = second.wait_for_details().unwrap();
        assert_eq!(details.meanings.len(), 1);
        assert_eq!(details.attempts, 2);
        assert_eq!(details.outcome, Outcome::Won);
        let cached = store.load(&key()).unwrap().unwrap().details.unwrap();
        assert!(cached.looked_up);
        assert_eq!(cached.translation.as_deref(), Some("crane-translated"));
    }

    #[test]
    fn crashed_lookup_clears_pending() {
        let mut session = Session::new(
            setup("crane", PuzzleMode::Practice),
            Box::new(MemoryCompletionStore::new()),
            Some(Arc::new(CrashingLookup)),
        );
        play(&mut session, "crane").unwrap();

        while !session.poll_details() {
            thread::yield_now();
        }
        assert!(!session.lookup_pending());
        let details = session.details().unwrap();
        assert_eq!(details.word, "CRANE");
        assert!(details.meanings.is_empty());
    }

    #[test]
    fn illegal_word_keeps_session_unchanged() {
        let mut session = Session::new(
            setup("crane", PuzzleMode::Daily(key())),
            Box::new(MemoryCompletionStore::new()),
            None,
        );
        assert_eq!(
            play(&mut session, "qqzzz"),
            Err(GameError::IllegalWord("QQZZZ".to_string()))
        );
        assert_eq!(session.round().round(), 0);
        assert!(session.round().history().is_empty());
    }
}
