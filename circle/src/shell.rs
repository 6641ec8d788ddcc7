use std::io::{BufRead, Write};

use domino_sdk::{
    load_tiles, parse_count, parse_tiles, random_tiles, save_tiles, search, ParsedTiles,
    SdkError, Tile,
};
use log::{info, warn};
use rand::Rng;

use crate::{
    config::CircleConfig,
    error::{CircleError, CircleResult},
    report::{render_tiles, write_report},
};

const MENU: &str = "=== Circular Domino Chain Program ===
1. Enter dominos manually
2. Load dominos from a file
3. Save dominos to a file
4. Generate random dominos
5. Exit";

const PAIRS_PROMPT: &str = "Enter domino pairs on a single line (e.g., '2 1, 2 3, 1 3, 0 0'):";
const FILE_NOT_FOUND: &str = "File not found. Please check the path and try again.";
const EMPTY_FILE: &str = "The file did not contain any valid dominos.";
const INVALID_COUNT: &str = "Invalid input. Please enter a positive number.";
const GOODBYE: &str = "Thank you for using the program. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Manual,
    Load,
    Save,
    Random,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Manual),
            "2" => Some(Self::Load),
            "3" => Some(Self::Save),
            "4" => Some(Self::Random),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive menu over injected input, output and random source.
pub struct Shell<R, W, G> {
    input: R,
    output: W,
    rng: G,
    config: CircleConfig,
}

impl<R: BufRead, W: Write, G: Rng> Shell<R, W, G> {
    pub fn new(input: R, output: W, rng: G, config: CircleConfig) -> Self {
        Self {
            input,
            output,
            rng,
            config,
        }
    }

    /// Runs the menu until the user exits or input ends. Only failures to
    /// write output end the loop with an error.
    pub fn run(&mut self) -> CircleResult<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            self.prompt("\nEnter your choice: ")?;

            let Some(line) = self.read_line()? else {
                return self.goodbye();
            };

            let result = match MenuChoice::parse(&line) {
                Some(MenuChoice::Manual) => self.enter_manually(),
                Some(MenuChoice::Load) => self.load_from_file(),
                Some(MenuChoice::Save) => self.save_to_file(),
                Some(MenuChoice::Random) => self.generate_random(),
                Some(MenuChoice::Exit) => return self.goodbye(),
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Ok(())
                }
            };

            match result {
                Ok(()) => {}
                Err(CircleError::Sdk(e)) => {
                    warn!("menu operation failed: {e}");
                    writeln!(self.output, "\nError: {e}")?;
                }
                Err(e) => return Err(e),
            }

            self.prompt("\nPress Enter to return to the menu...")?;
            if self.read_line()?.is_none() {
                return self.goodbye();
            }
            writeln!(self.output)?;
        }
    }

    fn enter_manually(&mut self) -> CircleResult<()> {
        writeln!(self.output, "\n{PAIRS_PROMPT}")?;
        let parsed = self.read_tiles()?;

        if parsed.tiles.is_empty() {
            writeln!(self.output, "\nNo valid dominos entered.")?;
            return Ok(());
        }
        self.solve(&parsed.tiles)
    }

    fn load_from_file(&mut self) -> CircleResult<()> {
        self.prompt("\nEnter the file path to load dominos: ")?;
        let path = self.read_line()?.unwrap_or_default();

        let parsed = match load_tiles(path.trim()) {
            Ok(parsed) => parsed,
            Err(SdkError::FileNotFound(_)) => {
                writeln!(self.output, "\n{FILE_NOT_FOUND}")?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        self.print_warnings(&parsed)?;

        if parsed.tiles.is_empty() {
            writeln!(self.output, "\n{EMPTY_FILE}")?;
            return Ok(());
        }
        let count = parsed.tiles.len();
        writeln!(self.output, "\nLoaded {count} dominos from the file.")?;
        self.solve(&parsed.tiles)
    }

    fn save_to_file(&mut self) -> CircleResult<()> {
        self.prompt("\nEnter the file path to save dominos: ")?;
        let path = self.read_line()?.unwrap_or_default();
        let path = path.trim();

        writeln!(self.output, "\n{PAIRS_PROMPT}")?;
        let parsed = self.read_tiles()?;

        if parsed.tiles.is_empty() {
            writeln!(self.output, "\nNo valid dominos to save.")?;
            return Ok(());
        }
        save_tiles(path, &parsed.tiles)?;
        writeln!(self.output, "\nDominos saved successfully to {path}.")?;

        Ok(())
    }

    fn generate_random(&mut self) -> CircleResult<()> {
        self.prompt("\nEnter the number of dominos to generate: ")?;
        let line = self.read_line()?.unwrap_or_default();

        let Ok(count) = parse_count(&line) else {
            writeln!(self.output, "\n{INVALID_COUNT}")?;
            return Ok(());
        };

        let tiles = random_tiles(&mut self.rng, count, self.config.max_pip());
        writeln!(self.output, "\nGenerated {count} random dominos:")?;
        writeln!(self.output, "{}", render_tiles(&tiles))?;

        self.solve(&tiles)
    }

    fn solve(&mut self, tiles: &[Tile]) -> CircleResult<()> {
        let chains = search(tiles);
        info!("{} tiles, {} circular chains", tiles.len(), chains.len());

        writeln!(self.output)?;
        write_report(&mut self.output, &chains, self.config.output_format)
    }

    fn read_tiles(&mut self) -> CircleResult<ParsedTiles> {
        let line = self.read_line()?.unwrap_or_default();
        let parsed = parse_tiles(&line);
        self.print_warnings(&parsed)?;

        Ok(parsed)
    }

    fn print_warnings(&mut self, parsed: &ParsedTiles) -> CircleResult<()> {
        for warning in &parsed.warnings {
            writeln!(self.output, "{warning}")?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> CircleResult<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next line without its line ending, `None` at end of input. Bytes
    /// that are not UTF-8 become U+FFFD instead of failing the session.
    fn read_line(&mut self) -> CircleResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn goodbye(&mut self) -> CircleResult<()> {
        writeln!(self.output, "\n{GOODBYE}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn session(script: &str) -> String {
        session_bytes(script.as_bytes(), CircleConfig::default())
    }

    fn session_bytes(input: &[u8], config: CircleConfig) -> String {
        let mut output: Vec<u8> = Vec::new();
        let mut shell = Shell::new(input, &mut output, StdRng::seed_from_u64(1), config);
        shell.run().expect("shell session");

        String::from_utf8(output).expect("utf8 output")
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::Manual));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_exit_immediately() {
        let out = session("5\n");

        assert!(out.starts_with("=== Circular Domino Chain Program ==="));
        assert!(out.ends_with("Thank you for using the program. Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let out = session("");

        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_manual_entry_solves() {
        let out = session("1\n2 1, 2 3, 1 3\n\n5\n");

        let first = "Found 3 circular domino chains:\n[2|1] [1|3] [3|2]\n";
        assert!(out.contains(first));
        assert!(out.contains("[2|3] [3|1] [1|2]\n"));
        assert!(out.contains("[1|3] [3|2] [2|1]\n"));
    }

    #[test]
    fn test_manual_entry_without_solution() {
        let out = session("1\n0 1, 2 3\n\n5\n");

        assert!(out.contains("No circular chain is possible."));
    }

    #[test]
    fn test_manual_entry_reports_warnings() {
        let out = session("1\na b, 4 4\n\n5\n");

        assert!(out.contains("Invalid pair: 'a b'. Skipping."));
        assert!(out.contains("Found 1 circular domino chains:\n[4|4]\n"));
    }

    #[test]
    fn test_manual_entry_nothing_valid() {
        let out = session("1\nx y\n\n5\n");

        assert!(out.contains("No valid dominos entered."));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let out = session("9\n\n5\n");

        assert!(out.contains("Invalid choice. Please try again."));
        assert_eq!(out.matches("Enter your choice:").count(), 2);
    }

    #[test]
    fn test_non_utf8_choice_reprompts() {
        let out = session_bytes(b"\xff\n\n5\n", CircleConfig::default());

        assert!(out.contains("Invalid choice. Please try again."));
        assert_eq!(out.matches("Enter your choice:").count(), 2);
        assert!(out.ends_with("Thank you for using the program. Goodbye!\n"));
    }

    #[test]
    fn test_non_utf8_tile_line_is_skipped() {
        let out = session_bytes(b"1\n\xff 2, 3 3\n\n5\n", CircleConfig::default());

        assert!(out.contains("Invalid pair: '\u{FFFD} 2'. Skipping."));
        assert!(out.contains("Found 1 circular domino chains:\n[3|3]\n"));
    }

    #[test]
    fn test_load_missing_file() {
        let out = session("2\n/definitely/not/here.txt\n\n5\n");

        assert!(out.contains(FILE_NOT_FOUND));
    }

    #[test]
    fn test_save_then_load() {
        let name = format!("domino-circle-shell-{}.txt", std::process::id());
        let path = std::env::temp_dir().join(name).display().to_string();

        let out = session(&format!("3\n{path}\n1 2, 2 1\n\n2\n{path}\n\n5\n"));
        std::fs::remove_file(&path).ok();

        let saved = format!("Dominos saved successfully to {path}.");
        let chains = "Found 2 circular domino chains:\n[1|2] [2|1]\n[2|1] [1|2]\n";
        assert!(out.contains(&saved));
        assert!(out.contains("Loaded 2 dominos from the file."));
        assert!(out.contains(chains));
    }

    #[test]
    fn test_load_file_without_tiles() {
        let name = format!("domino-circle-shell-empty-{}.txt", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, "a b").expect("write scratch file");

        let out = session(&format!("2\n{}\n\n5\n", path.display()));
        std::fs::remove_file(&path).ok();

        assert!(out.contains("Invalid pair: 'a b'. Skipping."));
        assert!(out.contains(EMPTY_FILE));
    }

    #[test]
    fn test_save_nothing_valid() {
        let out = session("3\n/tmp/unused.txt\n\n\n5\n");

        assert!(out.contains("No valid dominos to save."));
    }

    #[test]
    fn test_random_invalid_count() {
        let out = session("4\n-4\n\n4\nmany\n\n5\n");

        assert_eq!(out.matches(INVALID_COUNT).count(), 2);
    }

    #[test]
    fn test_random_generation_uses_config() {
        let config = CircleConfig {
            max_pip: Some(0),
            ..Default::default()
        };
        let out = session_bytes(b"4\n2\n\n5\n", config);

        assert!(out.contains("Generated 2 random dominos:\n[0|0], [0|0]\n"));
        assert!(out.contains("Found 2 circular domino chains:"));
    }

    #[test]
    fn test_random_generation_is_seeded() {
        let script = "4\n6\n\n5\n";

        assert_eq!(session(script), session(script));
    }
}
