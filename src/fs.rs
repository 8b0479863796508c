use std::{
    fs::File,
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, WriterBuilder};
use log::{debug, warn};

use crate::{
    Tier,
    error::{Error, Result},
    record::Row,
};

const EXTENSION: &str = "csv";

/// `<dir>/<prefix><suffix>.csv`, e.g. `data/albums_fake.csv`.
pub fn output_path(dir: &Path, tier: Tier, suffix: &str) -> PathBuf {
    dir.join(format!("{}{}.{}", tier.file_prefix(), suffix, EXTENSION))
}

/// Returns true if the value would break an unquoted comma separated line.
pub fn breaks_columns(value: &str) -> bool {
    value.contains([',', '"', '\n', '\r'])
}

/// Every free-text field that would shift the columns of an unquoted line,
/// as `(row, column, value)` with rows counted from 1 below the header.
pub fn column_breakers<T: Row>(rows: &[T]) -> Vec<(usize, &'static str, &str)> {
    rows.iter()
        .enumerate()
        .flat_map(|(i, row)| {
            row.text_fields()
                .into_iter()
                .filter(|(_, value)| breaks_columns(value))
                .map(move |(column, value)| (i + 1, column, value))
        })
        .collect()
}

/// Writes the header followed by one line per row, truncating any previous
/// file at `path`.
///
/// Unless `quoted` is set, fields are joined with `,` as-is. Rows whose text
/// would shift the columns are reported with a warning, not rewritten.
pub fn write_table<T: Row>(path: &Path, rows: &[T], quoted: bool) -> Result<usize> {
    let file = File::create(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let quote_style = if quoted {
        QuoteStyle::Necessary
    } else {
        QuoteStyle::Never
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(quote_style)
        .from_writer(file);

    let csv_err = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    writer.write_record(T::HEADER).map_err(csv_err)?;

    if !quoted {
        for (line, column, value) in column_breakers(rows) {
            warn!(
                "{:?} row {}: {} {:?} contains a delimiter and is written unquoted",
                path, line, column, value
            );
        }
    }

    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }

    writer.flush().map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} {} to {:?}", rows.len(), T::TIER, path);
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{album::Album, artist::Artist};

    fn album(label: &str) -> Album {
        Album {
            title: "Grace Smith".into(),
            artist: "Bob King".into(),
            tracks: 4,
            label: label.into(),
            year: 1999,
            artist_index: 0,
        }
    }

    #[test]
    fn path_is_prefix_suffix_extension() {
        let path = output_path(Path::new("data"), Tier::Tracks, "_t");
        assert_eq!(path, Path::new("data").join("tracks_t.csv"));
    }

    #[test]
    fn detects_column_breakers() {
        assert!(breaks_columns("Smith, Clark and Ford"));
        assert!(breaks_columns("say \"hi\""));
        assert!(breaks_columns("two\nlines"));
        assert!(!breaks_columns("Smith-Clark"));
    }

    #[test]
    fn flags_each_unsafe_field_by_row_and_column() {
        let mut quoted_title = album("Ford Inc");
        quoted_title.title = "The \"Best\" Of".into();
        let rows = vec![
            album("Ford Inc"),
            album("Smith, Clark and Ford"),
            quoted_title,
        ];

        assert_eq!(
            column_breakers(&rows),
            vec![
                (2, "Label", "Smith, Clark and Ford"),
                (3, "Name", "The \"Best\" Of"),
            ]
        );
    }

    #[test]
    fn clean_rows_are_not_flagged() {
        assert!(column_breakers(&[album("Ford Inc"), album("Hughes-Moreno")]).is_empty());
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artists.csv");
        let artists = vec![
            Artist {
                name: "Alice Brown".into(),
                year: 1984,
            },
            Artist {
                name: "Hugo Zhang".into(),
                year: 2001,
            },
        ];

        let written = write_table(&path, &artists, false).unwrap();

        assert_eq!(written, 2);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Name,Year\nAlice Brown,1984\nHugo Zhang,2001\n");
    }

    #[test]
    fn unquoted_mode_keeps_commas_raw() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("albums.csv");

        write_table(&path, &[album("Smith, Clark and Ford")], false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Name,Artist,Tracks,Label,Year\nGrace Smith,Bob King,4,Smith, Clark and Ford,1999\n"
        );
    }

    #[test]
    fn quoted_mode_wraps_only_what_needs_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("albums.csv");

        write_table(&path, &[album("Smith, Clark and Ford")], true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Name,Artist,Tracks,Label,Year\nGrace Smith,Bob King,4,\"Smith, Clark and Ford\",1999\n"
        );
    }

    #[test]
    fn rewriting_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("albums.csv");

        write_table(&path, &[album("A Inc"), album("B Inc")], false).unwrap();
        write_table(&path, &[album("C Inc")], false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("C Inc"));
        assert!(!content.contains("A Inc"));
    }

    #[test]
    fn missing_directory_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("artists.csv");

        let err = write_table::<Artist>(&path, &[], false).unwrap_err();

        match err {
            Error::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
