use log::debug;
use rand::Rng;

use crate::{
    Tier,
    album::Album,
    artist::Artist,
    error::{Error, Result},
    faker,
    track::Track,
};

/// The three generated tiers, in dependency order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub tracks: Vec<Track>,
}

/// Builds linked artists, albums and tracks from one random source.
///
/// Random state is consumed in a fixed order: every artist, then every album,
/// then every track. Albums and tracks pick their parent from the tier that
/// is already fully built.
pub struct Generator<R: Rng> {
    rng: R,
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Generator { rng }
    }

    pub fn generate(&mut self, artists: usize, albums: usize, tracks: usize) -> Result<Dataset> {
        let artists = self.artists(artists);
        let albums = self.albums(&artists, albums)?;
        let tracks = self.tracks(&albums, tracks)?;

        Ok(Dataset {
            artists,
            albums,
            tracks,
        })
    }

    pub fn artists(&mut self, count: usize) -> Vec<Artist> {
        let artists: Vec<Artist> = (0..count)
            .map(|_| Artist {
                name: faker::name(&mut self.rng),
                year: faker::year(&mut self.rng),
            })
            .collect();

        debug!("Generated {} artists", artists.len());
        artists
    }

    pub fn albums(&mut self, artists: &[Artist], count: usize) -> Result<Vec<Album>> {
        if count > 0 && artists.is_empty() {
            return Err(Error::EmptyTier {
                tier: Tier::Artists,
                dependent: Tier::Albums,
            });
        }

        let mut albums = Vec::with_capacity(count);
        for _ in 0..count {
            let artist_index = self.rng.random_range(0..artists.len());
            albums.push(Album {
                title: faker::name(&mut self.rng),
                artist: artists[artist_index].name.clone(),
                tracks: self.rng.random_range(1..=10),
                label: faker::company(&mut self.rng),
                year: faker::year(&mut self.rng),
                artist_index,
            });
        }

        debug!("Generated {} albums", albums.len());
        Ok(albums)
    }

    pub fn tracks(&mut self, albums: &[Album], count: usize) -> Result<Vec<Track>> {
        if count > 0 && albums.is_empty() {
            return Err(Error::EmptyTier {
                tier: Tier::Albums,
                dependent: Tier::Tracks,
            });
        }

        let mut tracks = Vec::with_capacity(count);
        for _ in 0..count {
            let album_index = self.rng.random_range(0..albums.len());
            let album = &albums[album_index];
            tracks.push(Track {
                title: faker::last_name(&mut self.rng),
                artist: album.artist.clone(),
                album: album.title.clone(),
                length: self.rng.random_range(100..=300),
                year: faker::year(&mut self.rng),
                album_index,
            });
        }

        debug!("Generated {} tracks", tracks.len());
        Ok(tracks)
    }
}
