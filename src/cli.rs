// Clap definitions in derive style

use std::path::PathBuf;

use log::LevelFilter;
use mugen::config::{
    Config, DEFAULT_ALBUMS, DEFAULT_ARTISTS, DEFAULT_OUTPUT_DIR, DEFAULT_SUFFIX, DEFAULT_TRACKS,
};

#[derive(clap::Parser)]
#[command(name = "mugen", version, about)]
pub struct Cli {
    /// Set the level of verbosity
    /// -v for info, -vv for debug, -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Appended to each file name, e.g. artists<SUFFIX>.csv
    #[arg(short, long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Number of artists to generate
    #[arg(long, default_value_t = DEFAULT_ARTISTS)]
    pub artists: usize,

    /// Number of albums to generate
    #[arg(long, default_value_t = DEFAULT_ALBUMS)]
    pub albums: usize,

    /// Number of tracks to generate
    #[arg(long, default_value_t = DEFAULT_TRACKS)]
    pub tracks: usize,

    /// Existing directory the csv files are written to
    #[arg(short, long = "output-dir", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Seed the generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Quote fields that contain commas, quotes or newlines
    #[arg(long, default_value_t = false)]
    pub quoted: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            suffix: cli.suffix,
            artists: cli.artists,
            albums: cli.albums,
            tracks: cli.tracks,
            output_dir: cli.output_dir,
            seed: cli.seed,
            quoted: cli.quoted,
        }
    }
}
