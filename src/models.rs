use std::collections::BTreeSet;
use std::sync::Mutex;
use serde::{Deserialize, Serialize};
use crate::session::Session;

/// Application state shared across all handlers
pub struct AppState {
    pub session: Mutex<Session>,
}

/// A word to guess and the hint shown alongside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    Active,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(self) -> bool {
        self != RoundStatus::Active
    }
}

/// One round of play. Never updated in place: every transition in
/// `services::round` hands back a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub(crate) word: String,
    pub(crate) hint: String,
    /// Correct letters only; misses are counted, not stored.
    pub(crate) guessed_letters: BTreeSet<char>,
    pub(crate) wrong_guesses: u32,
}

impl RoundState {
    pub fn new(entry: &WordEntry) -> Self {
        Self {
            word: entry.word.clone(),
            hint: entry.hint.clone(),
            guessed_letters: BTreeSet::new(),
            wrong_guesses: 0,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }
}

/// Why a submission left the round untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Empty,
    NotSingleLetter,
    AlreadyGuessed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit(char),
    Miss(char),
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Banner {
    Win,
    Lose,
}

/// Everything a front end needs to draw the current round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundView {
    pub masked_word: String,
    pub hint: String,
    pub status: RoundStatus,
    pub banner: Option<Banner>,
    pub figure_index: usize,
    pub figure_part: &'static str,
    pub figure_asset: &'static str,
    pub wrong_guesses: u32,
    pub attempts_left: u32,
    pub word_length: usize,
    pub guess_enabled: bool,
    pub replay_enabled: bool,
    /// Only revealed once the round is over
    pub answer: Option<String>,
}

#[derive(Deserialize)]
pub struct GuessRequest {
    pub letter: String,
}

#[derive(Serialize)]
pub struct ConfigResponse {
    pub loss_threshold: u32,
    pub catalog_size: usize,
    pub placeholder: char,
    pub figure_parts: Vec<&'static str>,
}
