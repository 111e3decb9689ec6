use std::mem;
use log::{info, warn};
use rand::rngs::StdRng;
use crate::models::{Banner, GuessOutcome, RejectReason, RoundState, RoundStatus, RoundView};
use crate::services::catalog_loader::Catalog;
use crate::services::figure::{figure_index, part_at};
use crate::services::round::{evaluate_guess, masked_word, start_round, status, LOSS_THRESHOLD};

/// Holds the current round for a front end and turns player events into
/// round transitions. The round itself is replaced, never edited.
pub struct Session {
    catalog: Catalog,
    rng: StdRng,
    state: RoundState,
    input: String,
}

impl Session {
    /// Mount: start the first round
    pub fn new(catalog: Catalog, mut rng: StdRng) -> Self {
        let state = start_round(&catalog, None, &mut rng);
        info!("Started round: {} letters", state.word().chars().count());

        Self {
            catalog,
            rng,
            state,
            input: String::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn status(&self) -> RoundStatus {
        status(&self.state)
    }

    /// Replace the pending input buffer
    pub fn set_input(&mut self, raw: &str) {
        self.input = raw.to_string();
    }

    /// Submit the pending input. Returns `None` when guessing is closed
    /// because the round is already decided.
    pub fn submit(&mut self) -> Option<GuessOutcome> {
        let raw = mem::take(&mut self.input);

        if self.status().is_over() {
            warn!("Ignoring guess {:?}: round is over", raw);
            return None;
        }

        if raw.is_empty() {
            return Some(GuessOutcome::Rejected(RejectReason::Empty));
        }

        let (next, outcome) = evaluate_guess(&self.state, &raw);
        self.state = next;

        match self.status() {
            RoundStatus::Won => info!("Round won: {}", self.state.word()),
            RoundStatus::Lost => info!("Round lost: {}", self.state.word()),
            RoundStatus::Active => {}
        }

        Some(outcome)
    }

    /// Type a letter and submit it
    pub fn guess(&mut self, raw: &str) -> Option<GuessOutcome> {
        self.set_input(raw);
        self.submit()
    }

    /// Start a new round, avoiding the word just played. Only available once
    /// the current round is decided; returns whether a new round started.
    pub fn replay(&mut self) -> bool {
        if !self.status().is_over() {
            warn!("Ignoring replay: round still active");
            return false;
        }

        self.state = start_round(&self.catalog, Some(self.state.word()), &mut self.rng);
        self.input.clear();
        info!("Started round: {} letters", self.state.word().chars().count());
        true
    }

    pub fn view(&self) -> RoundView {
        let status = self.status();
        let wrong_guesses = self.state.wrong_guesses();
        let figure_index = figure_index(wrong_guesses);
        let part = part_at(figure_index);

        let banner = match status {
            RoundStatus::Won => Some(Banner::Win),
            RoundStatus::Lost => Some(Banner::Lose),
            RoundStatus::Active => None,
        };

        RoundView {
            masked_word: masked_word(&self.state),
            hint: self.state.hint().to_string(),
            status,
            banner,
            figure_index,
            figure_part: part.name(),
            figure_asset: part.asset(),
            wrong_guesses,
            attempts_left: LOSS_THRESHOLD.saturating_sub(wrong_guesses),
            word_length: self.state.word().chars().count(),
            guess_enabled: !status.is_over(),
            replay_enabled: status.is_over(),
            answer: status.is_over().then(|| self.state.word().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WordEntry;
    use rand::SeedableRng;

    fn session(words: &[&str]) -> Session {
        let catalog = Catalog::new(
            words
                .iter()
                .map(|w| WordEntry { word: w.to_string(), hint: format!("Hint for {}", w) })
                .collect(),
        )
        .unwrap();
        Session::new(catalog, StdRng::seed_from_u64(3))
    }

    fn lose(session: &mut Session) {
        for letter in ["B", "E", "F", "H", "J", "K"] {
            session.guess(letter);
        }
    }

    #[test]
    fn test_mount_starts_active_round() {
        let session = session(&["CAT"]);
        let view = session.view();

        assert_eq!(view.masked_word, "_ _ _");
        assert_eq!(view.hint, "Hint for CAT");
        assert_eq!(view.status, RoundStatus::Active);
        assert_eq!(view.banner, None);
        assert_eq!(view.figure_index, 0);
        assert_eq!(view.attempts_left, 6);
        assert_eq!(view.word_length, 3);
        assert!(view.guess_enabled);
        assert!(!view.replay_enabled);
        assert_eq!(view.answer, None);
    }

    #[test]
    fn test_submit_clears_input() {
        let mut session = session(&["CAT"]);
        session.set_input("c");

        assert_eq!(session.submit(), Some(GuessOutcome::Hit('C')));
        assert_eq!(session.view().masked_word, "C _ _");
        // Buffer was consumed, so a second submit sees nothing
        assert_eq!(session.submit(), Some(GuessOutcome::Rejected(RejectReason::Empty)));
        assert_eq!(session.view().masked_word, "C _ _");
    }

    #[test]
    fn test_win_shows_banner_and_replay() {
        let mut session = session(&["CAT"]);
        for letter in ["c", "a", "t"] {
            session.guess(letter);
        }
        let view = session.view();

        assert_eq!(view.status, RoundStatus::Won);
        assert_eq!(view.banner, Some(Banner::Win));
        assert!(!view.guess_enabled);
        assert!(view.replay_enabled);
        assert_eq!(view.answer.as_deref(), Some("CAT"));
    }

    #[test]
    fn test_loss_clamps_figure_index() {
        let mut session = session(&["CAT"]);
        lose(&mut session);
        let view = session.view();

        assert_eq!(view.status, RoundStatus::Lost);
        assert_eq!(view.banner, Some(Banner::Lose));
        assert_eq!(view.wrong_guesses, 6);
        assert_eq!(view.figure_index, 5);
        assert_eq!(view.figure_part, "left-leg");
        assert_eq!(view.attempts_left, 0);
    }

    #[test]
    fn test_guesses_gated_after_round_ends() {
        let mut session = session(&["CAT"]);
        lose(&mut session);

        assert_eq!(session.guess("c"), None);
        assert_eq!(session.guess("z"), None);
        assert_eq!(session.state().wrong_guesses(), 6);
        assert_eq!(session.status(), RoundStatus::Lost);
    }

    #[test]
    fn test_replay_gated_while_active() {
        let mut session = session(&["CAT", "DOG"]);
        session.guess("z");
        let before = session.state().clone();

        assert!(!session.replay());
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_replay_starts_different_word() {
        let mut session = session(&["CAT", "DOG"]);
        for _ in 0..20 {
            let previous = session.state().word().to_string();
            lose(&mut session);
            assert!(session.replay());

            let view = session.view();
            assert_ne!(session.state().word(), previous);
            assert_eq!(view.status, RoundStatus::Active);
            assert_eq!(view.wrong_guesses, 0);
            assert!(!view.masked_word.chars().any(char::is_alphabetic));
        }
    }

    #[test]
    fn test_replay_with_single_word() {
        let mut session = session(&["CAT"]);
        lose(&mut session);
        assert!(session.replay());
        assert_eq!(session.state().word(), "CAT");
        assert_eq!(session.status(), RoundStatus::Active);
    }
}
