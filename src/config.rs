use std::path::PathBuf;

use crate::{
    Tier,
    error::{Error, Result},
};

pub const DEFAULT_SUFFIX: &str = "_fake";
pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_ARTISTS: usize = 10;
pub const DEFAULT_ALBUMS: usize = 40;
pub const DEFAULT_TRACKS: usize = 100;

/// Everything one generation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Appended to each file prefix, before the extension.
    pub suffix: String,
    pub artists: usize,
    pub albums: usize,
    pub tracks: usize,
    /// Must already exist; it is never created.
    pub output_dir: PathBuf,
    /// Fixed seed for reproducible output. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Quote fields containing delimiters instead of writing them raw.
    pub quoted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            suffix: DEFAULT_SUFFIX.to_string(),
            artists: DEFAULT_ARTISTS,
            albums: DEFAULT_ALBUMS,
            tracks: DEFAULT_TRACKS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            quoted: false,
        }
    }
}

impl Config {
    pub fn count(&self, tier: Tier) -> usize {
        match tier {
            Tier::Artists => self.artists,
            Tier::Albums => self.albums,
            Tier::Tracks => self.tracks,
        }
    }

    /// Rejects zero counts and a missing output directory before anything is
    /// generated or written.
    pub fn validate(&self) -> Result<()> {
        for tier in Tier::ALL {
            if self.count(tier) == 0 {
                let reason = match tier.dependent() {
                    Some(dependent) => format!(
                        "must be at least 1, {} pick their {} from this tier",
                        dependent,
                        tier.singular()
                    ),
                    None => "must be at least 1".to_string(),
                };
                return Err(Error::InvalidCount { tier, reason });
            }
        }

        if !self.output_dir.is_dir() {
            return Err(Error::MissingOutputDir(self.output_dir.clone()));
        }

        Ok(())
    }
}
