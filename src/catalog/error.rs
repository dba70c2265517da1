// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

/// Errors associated with reading comma-separated inputs.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Expected at least 3 columns (name, RA, Dec), but the header only has {0}")]
    TooFewColumns(usize),

    #[error("Column '{column}' wasn't found in the header")]
    MissingColumn { column: &'static str },

    #[error("Line {line}: Couldn't parse '{value}' as a number for column '{column}'")]
    BadCoordinate {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("Couldn't read {path}: {err}")]
    File { path: PathBuf, err: std::io::Error },

    #[error("In {path}: {err}")]
    InFile {
        path: PathBuf,
        err: Box<CatalogError>,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
