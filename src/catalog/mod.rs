// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Comma-separated inputs: the CV catalog and the object-identifier allow
//! lists.
//!
//! The catalog's first three columns are always the source name, RA
//! ("HH:MM:SS") and Dec ("DD:MM:SS"); the Galactic coordinates are found by
//! their header names, `l` and `b`. Rows may carry more fields than the header
//! declares; the extra fields are ignored.

mod error;

pub use error::CatalogError;

use std::{
    collections::HashSet,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use log::{debug, trace};
use serde::Deserialize;

use crate::constants::{ALLOW_LIST_ID_COLUMN, GALACTIC_LAT_COLUMN, GALACTIC_LONG_COLUMN};

/// Values in the Galactic coordinate columns that mean "no value".
const MISSING_VALUES: [&str; 7] = ["", "nan", "-nan", "na", "n/a", "null", "none"];

/// A single source in the CV catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub name: String,

    /// Right ascension as a sexagesimal string, e.g. "12:30:00".
    pub ra: String,

    /// Declination as a sexagesimal string, e.g. "-05:30:00".
    pub dec: String,

    /// Galactic longitude [degrees].
    pub l: Option<f64>,

    /// Galactic latitude [degrees].
    pub b: Option<f64>,
}

impl CatalogRow {
    /// Get the Galactic coordinates, if both are available.
    pub fn galactic(&self) -> Option<(f64, f64)> {
        self.l.zip(self.b)
    }
}

/// Read the CV catalog at `path`.
pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogRow>, CatalogError> {
    let path = path.as_ref();
    debug!("Reading catalog {}", path.display());
    let f = File::open(path).map_err(|err| CatalogError::File {
        path: path.to_path_buf(),
        err,
    })?;
    let rows = parse_catalog(BufReader::new(f)).map_err(|err| CatalogError::InFile {
        path: path.to_path_buf(),
        err: Box::new(err),
    })?;
    debug!("Read {} catalog rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse a comma-separated CV catalog.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Vec<CatalogRow>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.len() < 3 {
        return Err(CatalogError::TooFewColumns(headers.len()));
    }
    let find = |column: &'static str| {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or(CatalogError::MissingColumn { column })
    };
    let i_l = find(GALACTIC_LONG_COLUMN)?;
    let i_b = find(GALACTIC_LAT_COLUMN)?;
    trace!("Catalog columns: {:?}", headers);

    let mut rows = vec![];
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let field = |i: usize| record.get(i).unwrap_or("");

        rows.push(CatalogRow {
            name: field(0).to_string(),
            ra: field(1).to_string(),
            dec: field(2).to_string(),
            l: parse_coordinate(field(i_l), GALACTIC_LONG_COLUMN, line)?,
            b: parse_coordinate(field(i_b), GALACTIC_LAT_COLUMN, line)?,
        });
    }

    Ok(rows)
}

/// Parse a Galactic coordinate. Blanks and the usual spellings of "not a
/// number" are treated as missing.
fn parse_coordinate(
    value: &str,
    column: &'static str,
    line: u64,
) -> Result<Option<f64>, CatalogError> {
    if MISSING_VALUES.contains(&value.to_lowercase().as_str()) {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(v) if v.is_nan() => Ok(None),
        Ok(v) => Ok(Some(v)),
        Err(_) => Err(CatalogError::BadCoordinate {
            line,
            column,
            value: value.to_string(),
        }),
    }
}

#[derive(Deserialize)]
struct AllowListRow {
    id_col: i64,
}

/// Read the object identifiers in the allow-list file at `path`.
pub fn read_allow_list<P: AsRef<Path>>(path: P) -> Result<HashSet<i64>, CatalogError> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|err| CatalogError::File {
        path: path.to_path_buf(),
        err,
    })?;
    let ids = parse_allow_list(BufReader::new(f)).map_err(|err| CatalogError::InFile {
        path: path.to_path_buf(),
        err: Box::new(err),
    })?;
    debug!("Read {} unique IDs from {}", ids.len(), path.display());
    Ok(ids)
}

/// Parse a comma-separated allow list. Only the `id_col` column is used, and
/// its values must be integers.
pub fn parse_allow_list<R: Read>(reader: R) -> Result<HashSet<i64>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    if !reader.headers()?.iter().any(|h| h == ALLOW_LIST_ID_COLUMN) {
        return Err(CatalogError::MissingColumn {
            column: ALLOW_LIST_ID_COLUMN,
        });
    }

    reader
        .deserialize::<AllowListRow>()
        .map(|row| row.map(|r| r.id_col).map_err(CatalogError::from))
        .collect()
}
