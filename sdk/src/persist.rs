use std::{fs, io::ErrorKind, path::Path};

use log::{debug, info};

use crate::{
    parse::{parse_tiles, ParsedTiles},
    types::{SdkError, SdkResult, Tile},
};

/// `a b, c d, ...` with no trailing delimiter
pub fn format_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| format!("{} {}", tile.left, tile.right))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn save_tiles(path: impl AsRef<Path>, tiles: &[Tile]) -> SdkResult<()> {
    if tiles.is_empty() {
        return Err(SdkError::NoTiles);
    }

    let path = path.as_ref();
    fs::write(path, format_tiles(tiles))?;
    info!("saved {} tiles to {}", tiles.len(), path.display());

    Ok(())
}

/// Reads a whole file and parses it the same way as typed input.
pub fn load_tiles(path: impl AsRef<Path>) -> SdkResult<ParsedTiles> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SdkError::FileNotFound(path.to_path_buf()),
        _ => SdkError::Io(e),
    })?;

    let parsed = parse_tiles(&content);
    let count = parsed.tiles.len();
    debug!("loaded {count} tiles from {}", path.display());

    Ok(parsed)
}
