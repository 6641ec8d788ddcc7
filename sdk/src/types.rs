use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type SdkResult<T> = Result<T, SdkError>;

/// Face value of one half of a tile
pub type Pip = i32;

/// A two-sided tile. Placing it in a chain may flip it, which swaps the
/// presentation but not the identity of the pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub left: Pip,
    pub right: Pip,
}

impl Tile {
    pub const fn new(left: Pip, right: Pip) -> Self {
        Self { left, right }
    }

    /// The same tile presented as (right, left)
    pub const fn flipped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// Smaller face first, so tiles can be compared as unordered pairs
    pub fn normalized(self) -> Self {
        if self.left > self.right {
            self.flipped()
        } else {
            self
        }
    }
}

impl From<(Pip, Pip)> for Tile {
    fn from(value: (Pip, Pip)) -> Self {
        Self {
            left: value.0,
            right: value.1,
        }
    }
}

impl From<Tile> for (Pip, Pip) {
    fn from(value: Tile) -> Self {
        (value.left, value.right)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// An ordered run of oriented tiles
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain(Vec<Tile>);

impl Chain {
    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every touching pair matches, including the wrap from the last tile
    /// back to the first. An empty chain is not circular.
    pub fn is_circular(&self) -> bool {
        let (Some(first), Some(last)) = (self.0.first(), self.0.last()) else {
            return false;
        };

        first.left == last.right && self.0.windows(2).all(|w| w[0].right == w[1].left)
    }

    /// True if this chain uses exactly the given tiles, each once, in either
    /// orientation.
    pub fn is_permutation_of(&self, tiles: &[Tile]) -> bool {
        if self.0.len() != tiles.len() {
            return false;
        }

        let mut ours: Vec<Tile> = self.0.iter().map(|t| t.normalized()).collect();
        let mut theirs: Vec<Tile> = tiles.iter().map(|t| t.normalized()).collect();
        ours.sort_unstable_by_key(|t| (t.left, t.right));
        theirs.sort_unstable_by_key(|t| (t.left, t.right));

        ours == theirs
    }
}

impl From<Vec<Tile>> for Chain {
    fn from(value: Vec<Tile>) -> Self {
        Self(value)
    }
}

impl From<&[Tile]> for Chain {
    fn from(value: &[Tile]) -> Self {
        Self(value.to_vec())
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("invalid count '{0}', expected a positive number")]
    InvalidCount(String),
    #[error("no tiles given")]
    NoTiles,
}
