use std::{env, str::FromStr};

use domino_sdk::{Pip, STANDARD_MAX_PIP};
use log::warn;
use rand::{rngs::StdRng, SeedableRng};

use crate::report::OutputFormat;

pub const SEED_VAR: &str = "DOMINO_SEED";
pub const MAX_PIP_VAR: &str = "DOMINO_MAX_PIP";

#[derive(Debug, Clone, Default)]
pub struct CircleConfig {
    /// fixed seed for random tiles, entropy when unset
    pub seed: Option<u64>,

    /// highest face for random tiles, defaults to a double-six set
    pub max_pip: Option<Pip>,

    pub output_format: OutputFormat,
}

impl CircleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Values that do not parse are
    /// ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            seed: read_var(&lookup, SEED_VAR),
            max_pip: read_var::<Pip>(&lookup, MAX_PIP_VAR).filter(|max| {
                let valid = *max >= 0;
                if !valid {
                    warn!("{MAX_PIP_VAR} must not be negative, got {max}");
                }
                valid
            }),
            output_format: OutputFormat::default(),
        }
    }

    pub fn max_pip(&self) -> Pip {
        self.max_pip.unwrap_or(STANDARD_MAX_PIP)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn read_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {key}={raw:?}, not a valid value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CircleConfig::from_lookup(lookup(&[]));

        assert_eq!(config.seed, None);
        assert_eq!(config.max_pip(), STANDARD_MAX_PIP);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_reads_vars() {
        let config = CircleConfig::from_lookup(lookup(&[(SEED_VAR, "99"), (MAX_PIP_VAR, " 9 ")]));

        assert_eq!(config.seed, Some(99));
        assert_eq!(config.max_pip(), 9);
    }

    #[test]
    fn test_ignores_bad_values() {
        let config =
            CircleConfig::from_lookup(lookup(&[(SEED_VAR, "soon"), (MAX_PIP_VAR, "-2")]));

        assert_eq!(config.seed, None);
        assert_eq!(config.max_pip(), STANDARD_MAX_PIP);
    }
}
