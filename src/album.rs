use serde::Serialize;

use crate::{Tier, record::Row};

/// An album, holding a copy of its artist's name rather than a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album {
    pub title: String,
    pub artist: String,
    pub tracks: u8,
    pub label: String,
    pub year: u16,

    /// Position of the artist this album was drawn from. Not written out.
    #[serde(skip)]
    pub artist_index: usize,
}

impl Row for Album {
    const TIER: Tier = Tier::Albums;
    const HEADER: &'static [&'static str] = &["Name", "Artist", "Tracks", "Label", "Year"];

    fn text_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", self.title.as_str()),
            ("Artist", self.artist.as_str()),
            ("Label", self.label.as_str()),
        ]
    }
}
