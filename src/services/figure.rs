//! The hangman figure: six body parts in drawing order, one image per index.
//!
//! Index `n` shows parts `0..=n`, so index 0 already draws the head and index
//! 5 is the complete figure. Wrong-guess counts past the last image (the losing
//! sixth miss) are clamped to it.

use crate::services::round::LOSS_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigurePart {
    Head,
    Body,
    LeftArm,
    RightArm,
    RightLeg,
    LeftLeg,
}

pub const FIGURE_PARTS: [FigurePart; 6] = [
    FigurePart::Head,
    FigurePart::Body,
    FigurePart::LeftArm,
    FigurePart::RightArm,
    FigurePart::RightLeg,
    FigurePart::LeftLeg,
];

pub const LAST_INDEX: usize = FIGURE_PARTS.len() - 1;

const GALLOWS: [&str; 7] = [
    "  +---+",
    "  |   |",
    "      |",
    "      |",
    "      |",
    "      |",
    "=========",
];

impl FigurePart {
    pub fn name(self) -> &'static str {
        match self {
            FigurePart::Head => "head",
            FigurePart::Body => "body",
            FigurePart::LeftArm => "left-arm",
            FigurePart::RightArm => "right-arm",
            FigurePart::RightLeg => "right-leg",
            FigurePart::LeftLeg => "left-leg",
        }
    }

    /// Image file an external renderer should show for this index
    pub fn asset(self) -> &'static str {
        match self {
            FigurePart::Head => "head.png",
            FigurePart::Body => "body.png",
            FigurePart::LeftArm => "left-arm.png",
            FigurePart::RightArm => "right-arm.png",
            FigurePart::RightLeg => "right-leg.png",
            FigurePart::LeftLeg => "left-leg.png",
        }
    }

    /// (row, column, glyph) on the gallows
    fn glyph(self) -> (usize, usize, char) {
        match self {
            FigurePart::Head => (2, 2, 'O'),
            FigurePart::Body => (3, 2, '|'),
            FigurePart::LeftArm => (3, 1, '/'),
            FigurePart::RightArm => (3, 3, '\\'),
            FigurePart::RightLeg => (4, 3, '\\'),
            FigurePart::LeftLeg => (4, 1, '/'),
        }
    }
}

/// Image index for a wrong-guess count
pub fn figure_index(wrong_guesses: u32) -> usize {
    (wrong_guesses as usize).min(LAST_INDEX)
}

pub fn part_at(index: usize) -> FigurePart {
    FIGURE_PARTS[index.min(LAST_INDEX)]
}

/// Text rendering of the image at `index` for the terminal front end
pub fn render_ascii(index: usize) -> String {
    let mut rows: Vec<Vec<char>> = GALLOWS.iter().map(|row| row.chars().collect()).collect();

    for part in &FIGURE_PARTS[..=index.min(LAST_INDEX)] {
        let (row, col, glyph) = part.glyph();
        rows[row][col] = glyph;
    }

    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

// One image per wrong guess short of the losing one
const _: () = assert!(FIGURE_PARTS.len() as u32 == LOSS_THRESHOLD);
