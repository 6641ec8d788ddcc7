use std::fmt;

use log::warn;

use crate::types::{Pip, Tile};

/// Characters that separate numbers in a tile list, besides whitespace
pub const SEPARATORS: [char; 2] = [',', ';'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A pair where at least one side is not an integer
    InvalidPair { left: String, right: String },
    /// Trailing token left over from an odd token count
    DanglingToken(String),
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::InvalidPair { left, right } => {
                write!(f, "Invalid pair: '{left} {right}'. Skipping.")
            }
            ParseWarning::DanglingToken(token) => {
                write!(f, "Incomplete pair: '{token}'. Skipping.")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTiles {
    pub tiles: Vec<Tile>,
    pub warnings: Vec<ParseWarning>,
}

/// Reads a free-form tile list such as `2 1, 2 3; 1 3`.
///
/// Numbers are taken two at a time. Malformed pairs are skipped and
/// reported in `warnings`; the rest of the input is still read.
pub fn parse_tiles(text: &str) -> ParsedTiles {
    let tokens: Vec<&str> = text
        .split(|c: char| SEPARATORS.contains(&c) || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    let mut parsed = ParsedTiles::default();
    let mut pairs = tokens.chunks_exact(2);

    for pair in pairs.by_ref() {
        match (pair[0].parse::<Pip>(), pair[1].parse::<Pip>()) {
            (Ok(left), Ok(right)) => parsed.tiles.push(Tile::new(left, right)),
            _ => parsed.warnings.push(ParseWarning::InvalidPair {
                left: pair[0].to_string(),
                right: pair[1].to_string(),
            }),
        }
    }

    if let [token] = pairs.remainder() {
        parsed
            .warnings
            .push(ParseWarning::DanglingToken(token.to_string()));
    }

    for warning in &parsed.warnings {
        warn!("{warning}");
    }

    parsed
}
