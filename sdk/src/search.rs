use std::ops::{Deref, DerefMut};

use log::{debug, trace};

use crate::types::{Chain, Tile};

/// Every circular chain that uses all of `tiles`, in discovery order.
pub fn search(tiles: &[Tile]) -> Vec<Chain> {
    ChainSearch::new(tiles).run().solutions
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub solutions: Vec<Chain>,
    /// number of explore calls, root included
    pub nodes: u64,
    /// full-length chains that did not close
    pub rejected: u64,
}

/// Depth-first search for circular chains.
///
/// Candidates are tried in input order at every depth. A candidate is placed
/// as given when its left face matches the open end (or the chain is empty),
/// otherwise flipped when its right face matches. Rotations and reflections
/// of the same cycle are all reported.
pub struct ChainSearch<'a> {
    tiles: &'a [Tile],
    used: Vec<bool>,
    chain: Vec<Tile>,
    solutions: Vec<Chain>,
    nodes: u64,
    rejected: u64,
}

impl<'a> ChainSearch<'a> {
    pub fn new(tiles: &'a [Tile]) -> Self {
        Self {
            tiles,
            used: vec![false; tiles.len()],
            chain: Vec::with_capacity(tiles.len()),
            solutions: Vec::new(),
            nodes: 0,
            rejected: 0,
        }
    }

    pub fn run(mut self) -> SearchOutcome {
        debug!("searching circular chains over {} tiles", self.tiles.len());
        self.explore();
        debug!(
            "search finished: {} solutions, {} nodes, {} rejected leaves",
            self.solutions.len(),
            self.nodes,
            self.rejected
        );

        SearchOutcome {
            solutions: self.solutions,
            nodes: self.nodes,
            rejected: self.rejected,
        }
    }

    fn explore(&mut self) {
        self.nodes += 1;

        if self.chain.len() == self.tiles.len() {
            if self.closes() {
                trace!("accepted chain #{}", self.solutions.len() + 1);
                self.solutions.push(Chain::from(self.chain.as_slice()));
            } else {
                self.rejected += 1;
            }
            return;
        }

        for index in 0..self.tiles.len() {
            if self.used[index] {
                continue;
            }
            let Some(oriented) = self.orient(self.tiles[index]) else {
                continue;
            };

            self.place(index, oriented).explore();
        }
    }

    /// How `tile` would sit at the open end of the chain, if at all.
    /// A double always takes the first arm.
    fn orient(&self, tile: Tile) -> Option<Tile> {
        match self.chain.last() {
            None => Some(tile),
            Some(last) if last.right == tile.left => Some(tile),
            Some(last) if last.right == tile.right => Some(tile.flipped()),
            Some(_) => None,
        }
    }

    // the empty chain never closes, so zero tiles yield zero solutions
    fn closes(&self) -> bool {
        matches!(
            (self.chain.first(), self.chain.last()),
            (Some(first), Some(last)) if first.left == last.right
        )
    }

    fn place(&mut self, index: usize, oriented: Tile) -> Placement<'_, 'a> {
        self.used[index] = true;
        self.chain.push(oriented);
        Placement {
            search: self,
            index,
        }
    }
}

/// A tile placed on the chain. Dropping it takes the tile back off and
/// frees its index.
struct Placement<'s, 'a> {
    search: &'s mut ChainSearch<'a>,
    index: usize,
}

impl<'a> Deref for Placement<'_, 'a> {
    type Target = ChainSearch<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.search
    }
}

impl DerefMut for Placement<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.search
    }
}

impl Drop for Placement<'_, '_> {
    fn drop(&mut self) {
        self.search.chain.pop();
        self.search.used[self.index] = false;
    }
}
