use std::io::Write;

use domino_sdk::{Chain, Tile};
use serde::Serialize;

use crate::error::CircleResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    count: usize,
    chains: &'a [Chain],
}

/// `[a|b], [c|d], ...`
pub fn render_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(Tile::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn write_report<W: Write>(
    out: &mut W,
    chains: &[Chain],
    format: OutputFormat,
) -> CircleResult<()> {
    match format {
        OutputFormat::Text if chains.is_empty() => {
            writeln!(out, "No circular chain is possible.")?;
        }
        OutputFormat::Text => {
            writeln!(out, "Found {} circular domino chains:", chains.len())?;
            for chain in chains {
                writeln!(out, "{chain}")?;
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                count: chains.len(),
                chains,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
