use std::collections::HashSet;
use std::fs;
use std::io;
use log::info;
use rand::Rng;
use thiserror::Error;
use crate::models::WordEntry;
use crate::utils::is_letters_only;

/// Formula 1 teams catalog bundled with the binary
const BUILTIN_CATALOG: &str = include_str!("../../share/words.json");

/// Configuration defects found while loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no entries")]
    Empty,

    #[error("entry {index}: word is empty")]
    EmptyWord { index: usize },

    #[error("entry {index}: word {word:?} must contain letters only")]
    NonLetterWord { index: usize, word: String },

    #[error("entry {index}: hint for {word} is empty")]
    EmptyHint { index: usize, word: String },

    #[error("entry {index}: duplicate word {word}")]
    DuplicateWord { index: usize, word: String },
}

/// Validated, non-empty word list. Words are stored uppercase.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<WordEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            let word = entry.word.trim().to_uppercase();
            let hint = entry.hint.trim().to_string();

            if word.is_empty() {
                return Err(CatalogError::EmptyWord { index });
            }
            if !is_letters_only(&word) {
                return Err(CatalogError::NonLetterWord { index, word });
            }
            if hint.is_empty() {
                return Err(CatalogError::EmptyHint { index, word });
            }
            // Duplicates would let the repeat-avoidance loop keep landing on the same word
            if !seen.insert(word.clone()) {
                return Err(CatalogError::DuplicateWord { index, word });
            }

            normalized.push(WordEntry { word, hint });
        }

        Ok(Self { entries: normalized })
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick an entry uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &WordEntry {
        // Never empty, see `Catalog::new`
        &self.entries[rng.gen_range(0..self.entries.len())]
    }
}

/// Parse a JSON array of `{ "word": ..., "hint": ... }` objects
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let entries: Vec<WordEntry> = serde_json::from_str(json)?;
    Catalog::new(entries)
}

/// Load a catalog from a JSON file on disk
pub fn load_catalog(file_path: &str) -> Result<Catalog, CatalogError> {
    let json = fs::read_to_string(file_path).map_err(|source| CatalogError::Io {
        path: file_path.to_string(),
        source,
    })?;

    let catalog = parse_catalog(&json)?;
    info!("Loaded {} catalog entries from {}.", catalog.len(), file_path);
    Ok(catalog)
}

/// The catalog compiled into the binary
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    let catalog = parse_catalog(BUILTIN_CATALOG)?;
    info!("Loaded {} built-in catalog entries.", catalog.len());
    Ok(catalog)
}
