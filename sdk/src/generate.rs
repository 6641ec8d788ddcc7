use log::debug;
use rand::Rng;

use crate::types::{Pip, SdkError, SdkResult, Tile};

/// Highest face on a standard double-six set
pub const STANDARD_MAX_PIP: Pip = 6;

/// `count` tiles with both faces drawn uniformly from `0..=max_pip`.
pub fn random_tiles<R: Rng>(rng: &mut R, count: usize, max_pip: Pip) -> Vec<Tile> {
    let tiles: Vec<Tile> = (0..count)
        .map(|_| Tile::new(rng.gen_range(0..=max_pip), rng.gen_range(0..=max_pip)))
        .collect();
    debug!("generated {count} random tiles up to {max_pip}");

    tiles
}

/// Parses how many tiles to generate. Must be a positive integer.
pub fn parse_count(input: &str) -> SdkResult<usize> {
    match input.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(SdkError::InvalidCount(input.trim().to_string())),
    }
}
