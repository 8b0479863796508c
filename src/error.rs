use std::path::PathBuf;

use thiserror::Error;

use crate::Tier;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid {tier} count: {reason}")]
    InvalidCount { tier: Tier, reason: String },

    #[error("output directory {0:?} does not exist or is not a directory")]
    MissingOutputDir(PathBuf),

    #[error("cannot generate {dependent}: no {tier} to pick from")]
    EmptyTier { tier: Tier, dependent: Tier },

    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write csv row to {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
