use std::{fmt, path::PathBuf};

use log::info;
use rand::{SeedableRng, rngs::StdRng};

pub mod album;
pub mod artist;
pub mod config;
pub mod error;
pub mod faker;
pub mod fs;
pub mod generator;
pub mod record;
pub mod track;

pub use config::Config;
pub use error::{Error, Result};
pub use generator::{Dataset, Generator};

/// One of the three entity kinds, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Artists,
    Albums,
    Tracks,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Artists, Tier::Albums, Tier::Tracks];

    pub fn file_prefix(self) -> &'static str {
        match self {
            Tier::Artists => "artists",
            Tier::Albums => "albums",
            Tier::Tracks => "tracks",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            Tier::Artists => "artist",
            Tier::Albums => "album",
            Tier::Tracks => "track",
        }
    }

    /// The tier whose rows copy fields from this one.
    pub fn dependent(self) -> Option<Tier> {
        match self {
            Tier::Artists => Some(Tier::Albums),
            Tier::Albums => Some(Tier::Tracks),
            Tier::Tracks => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_prefix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub tier: Tier,
    pub path: PathBuf,
    pub rows: usize,
}

/// What a run produced, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: Vec<WrittenFile>,
}

/// Validates the config, generates every tier and writes the three files.
pub fn run(config: &Config) -> Result<Summary> {
    config.validate()?;

    let rng = match config.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let data = Generator::new(rng).generate(config.artists, config.albums, config.tracks)?;
    info!(
        "Generated {} artists, {} albums and {} tracks",
        data.artists.len(),
        data.albums.len(),
        data.tracks.len()
    );

    let mut summary = Summary::default();
    summary.files.push(write_tier(config, &data.artists)?);
    summary.files.push(write_tier(config, &data.albums)?);
    summary.files.push(write_tier(config, &data.tracks)?);

    Ok(summary)
}

fn write_tier<T: record::Row>(config: &Config, rows: &[T]) -> Result<WrittenFile> {
    let tier = T::TIER;
    let path = fs::output_path(&config.output_dir, tier, &config.suffix);
    let rows = fs::write_table(&path, rows, config.quoted)?;
    info!("Wrote {} {} to {:?}", rows, tier, path);

    Ok(WrittenFile { tier, path, rows })
}
