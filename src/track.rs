use serde::Serialize;

use crate::{Tier, record::Row};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Length in seconds.
    pub length: u16,
    pub year: u16,

    #[serde(skip)]
    pub album_index: usize,
}

impl Row for Track {
    const TIER: Tier = Tier::Tracks;
    const HEADER: &'static [&'static str] = &["Name", "Artist", "Album", "Length", "Year"];

    fn text_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", self.title.as_str()),
            ("Artist", self.artist.as_str()),
            ("Album", self.album.as_str()),
        ]
    }
}
