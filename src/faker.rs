//! Fake data provider: plausible names, surnames, record labels and years.
//!
//! Every function draws from the random source it is handed, so a seeded
//! [`rand::rngs::StdRng`] gives the same strings on every run.

use fake::{
    Fake,
    faker::{
        company::en::CompanySuffix,
        name::en::{LastName, Name},
    },
};
use rand::Rng;

pub const MIN_YEAR: u16 = 1970;
pub const MAX_YEAR: u16 = 2025;

/// A full person name, e.g. "Marcus Jensen".
pub fn name<R: Rng + ?Sized>(rng: &mut R) -> String {
    Name().fake_with_rng(rng)
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    LastName().fake_with_rng(rng)
}

/// A company name in one of three shapes. The partnership shape
/// ("Smith, Clark and Ford") contains a comma.
pub fn company<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.random_range(0..3) {
        0 => format!(
            "{} {}",
            last_name(rng),
            CompanySuffix().fake_with_rng::<String, _>(rng)
        ),
        1 => format!("{}-{}", last_name(rng), last_name(rng)),
        _ => format!(
            "{}, {} and {}",
            last_name(rng),
            last_name(rng),
            last_name(rng)
        ),
    }
}

pub fn year<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    rng.random_range(MIN_YEAR..=MAX_YEAR)
}
