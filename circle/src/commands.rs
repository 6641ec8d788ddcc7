use std::{io::Write, path::Path};

use domino_sdk::{load_tiles, parse_tiles, random_tiles, save_tiles, search, ParsedTiles, Tile};
use log::info;
use rand::Rng;

use crate::{
    config::CircleConfig,
    error::{CircleError, CircleResult},
    report::{render_tiles, write_report, OutputFormat},
};

/// Parses `text` as a tile list and reports every circular chain.
pub fn solve_text<W: Write>(out: &mut W, text: &str, config: &CircleConfig) -> CircleResult<()> {
    let tiles = take_tiles(out, parse_tiles(text), config.output_format)?;
    solve(out, &tiles, config)
}

pub fn solve_file<W: Write>(
    out: &mut W,
    path: impl AsRef<Path>,
    config: &CircleConfig,
) -> CircleResult<()> {
    let tiles = take_tiles(out, load_tiles(path)?, config.output_format)?;
    solve(out, &tiles, config)
}

pub fn save_text<W: Write>(out: &mut W, path: impl AsRef<Path>, text: &str) -> CircleResult<()> {
    let path = path.as_ref();
    let tiles = take_tiles(out, parse_tiles(text), OutputFormat::Text)?;
    save_tiles(path, &tiles)?;
    writeln!(out, "Dominos saved successfully to {}.", path.display())?;

    Ok(())
}

pub fn solve_random<W: Write, G: Rng>(
    out: &mut W,
    rng: &mut G,
    count: usize,
    config: &CircleConfig,
) -> CircleResult<()> {
    if count == 0 {
        return Err(CircleError::InvalidInput(
            "count must be a positive number".to_string(),
        ));
    }

    let tiles = random_tiles(rng, count, config.max_pip());
    if config.output_format == OutputFormat::Text {
        writeln!(out, "Generated {count} random dominos:")?;
        writeln!(out, "{}", render_tiles(&tiles))?;
    }
    solve(out, &tiles, config)
}

fn solve<W: Write>(out: &mut W, tiles: &[Tile], config: &CircleConfig) -> CircleResult<()> {
    let chains = search(tiles);
    info!("{} tiles, {} circular chains", tiles.len(), chains.len());

    write_report(out, &chains, config.output_format)
}

/// Reports every skipped pair, then hands back the tiles that parsed.
/// JSON output stays a single document, so warnings go to stderr there.
fn take_tiles<W: Write>(
    out: &mut W,
    parsed: ParsedTiles,
    format: OutputFormat,
) -> CircleResult<Vec<Tile>> {
    for warning in &parsed.warnings {
        match format {
            OutputFormat::Text => writeln!(out, "{warning}")?,
            OutputFormat::Json => eprintln!("{warning}"),
        }
    }

    if parsed.tiles.is_empty() {
        return Err(CircleError::InvalidInput(
            "no valid dominos given".to_string(),
        ));
    }
    Ok(parsed.tiles)
}
