//! Hangman: guess a word one letter at a time before six wrong guesses
//! complete the figure.
//!
//! The round rules live in [`services::round`] as pure functions over
//! [`models::RoundState`]. [`session::Session`] holds the current round for a
//! front end; [`terminal`] and [`handlers`] are the two front ends.

pub mod handlers;
pub mod models;
pub mod services;
pub mod session;
pub mod terminal;
pub mod utils;
