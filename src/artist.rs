use serde::Serialize;

use crate::{Tier, record::Row};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    pub name: String,
    pub year: u16,
}

impl Row for Artist {
    const TIER: Tier = Tier::Artists;
    const HEADER: &'static [&'static str] = &["Name", "Year"];

    fn text_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("Name", self.name.as_str())]
    }
}
