use crate::models::RejectReason;

/// Symbol shown in place of a letter that has not been guessed yet
pub const PLACEHOLDER: char = '_';

/// Separator between symbols of the masked word
pub const SEPARATOR: &str = " ";

/// Normalize raw player input to a single uppercase letter.
/// Surrounding whitespace is ignored; anything else must be exactly one
/// alphabetic character.
pub fn normalize_guess(raw: &str) -> Result<char, RejectReason> {
    let mut chars = raw.trim().chars();
    let first = chars.next().ok_or(RejectReason::Empty)?;

    if chars.next().is_some() || !first.is_alphabetic() {
        return Err(RejectReason::NotSingleLetter);
    }

    // Some letters uppercase to more than one char (e.g. 'ß'); those can never
    // match a single catalog letter.
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(RejectReason::NotSingleLetter),
    }
}

/// Check that a catalog word is non-empty and made of letters only
pub fn is_letters_only(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Join display symbols with the masked-word separator
pub fn join_symbols<I>(symbols: I) -> String
where
    I: IntoIterator<Item = char>,
{
    symbols
        .into_iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
