use serde::Serialize;

use crate::Tier;

/// A generated row that can be written to its tier's csv file.
pub trait Row: Serialize {
    const TIER: Tier;
    /// Column names, in the same order serde writes the fields.
    const HEADER: &'static [&'static str];

    /// The free-text columns of this row, paired with their column name.
    fn text_fields(&self) -> Vec<(&'static str, &str)>;
}
