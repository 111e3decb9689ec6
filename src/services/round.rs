use log::debug;
use rand::Rng;
use crate::models::{GuessOutcome, RejectReason, RoundState, RoundStatus};
use crate::services::catalog_loader::Catalog;
use crate::utils::{join_symbols, normalize_guess, PLACEHOLDER};

/// Wrong guesses allowed before the round is lost
pub const LOSS_THRESHOLD: u32 = 6;

/// Start a fresh round with a random catalog entry.
/// `exclude_word` is the previous round's word; it is re-rolled away unless
/// the catalog has nothing else to offer.
pub fn start_round<R: Rng + ?Sized>(
    catalog: &Catalog,
    exclude_word: Option<&str>,
    rng: &mut R,
) -> RoundState {
    let exclude_word = if catalog.len() > 1 { exclude_word } else { None };

    let entry = loop {
        let candidate = catalog.pick(rng);
        if exclude_word != Some(candidate.word.as_str()) {
            break candidate;
        }
    };

    RoundState::new(entry)
}

/// Decide what a raw submission would do to the round without applying it
pub fn classify_guess(state: &RoundState, raw_input: &str) -> GuessOutcome {
    let letter = match normalize_guess(raw_input) {
        Ok(letter) => letter,
        Err(reason) => return GuessOutcome::Rejected(reason),
    };

    if state.guessed_letters.contains(&letter) {
        return GuessOutcome::Rejected(RejectReason::AlreadyGuessed);
    }

    if state.word.contains(letter) {
        GuessOutcome::Hit(letter)
    } else {
        GuessOutcome::Miss(letter)
    }
}

/// Apply a raw submission, returning the next state and what happened
pub fn evaluate_guess(state: &RoundState, raw_input: &str) -> (RoundState, GuessOutcome) {
    let outcome = classify_guess(state, raw_input);
    let mut next = state.clone();

    match outcome {
        GuessOutcome::Hit(letter) => {
            next.guessed_letters.insert(letter);
        }
        GuessOutcome::Miss(_) => next.wrong_guesses += 1,
        GuessOutcome::Rejected(_) => {}
    }

    debug!("Guess {:?} on {}: {:?}", raw_input, masked_word(&next), outcome);
    (next, outcome)
}

/// Apply a raw submission. Rejected input returns an identical state.
pub fn submit_guess(state: &RoundState, raw_input: &str) -> RoundState {
    evaluate_guess(state, raw_input).0
}

pub fn is_revealed(state: &RoundState) -> bool {
    state.word.chars().all(|c| state.guessed_letters.contains(&c))
}

/// Win is checked before loss
pub fn status(state: &RoundState) -> RoundStatus {
    if is_revealed(state) {
        RoundStatus::Won
    } else if state.wrong_guesses >= LOSS_THRESHOLD {
        RoundStatus::Lost
    } else {
        RoundStatus::Active
    }
}

/// Display form of the word, e.g. `"C _ _"`
pub fn masked_word(state: &RoundState) -> String {
    join_symbols(state.word.chars().map(|c| {
        if state.guessed_letters.contains(&c) { c } else { PLACEHOLDER }
    }))
}
