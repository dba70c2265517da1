// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use crate::ipac::{ColumnType, ReadIpacError};

/// Errors associated with getting photometric records.
#[derive(Error, Debug)]
pub enum PhotometryError {
    #[error("Photometry table is missing the required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("Photometry column '{column}' must be numeric, but it is {col_type}")]
    NotNumeric {
        column: &'static str,
        col_type: ColumnType,
    },

    #[error("Photometry column '{column}' must hold integers, but it is {col_type}")]
    NotInteger {
        column: &'static str,
        col_type: ColumnType,
    },

    #[error("Photometry column '{column}' has a null value on data row {row}")]
    NullValue { column: &'static str, row: usize },

    #[error("In {path}: {err}")]
    Table {
        path: PathBuf,
        err: Box<PhotometryError>,
    },

    #[error(transparent)]
    Ipac(#[from] ReadIpacError),
}

/// Errors associated with eruption statistics.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("No sources were selected; can't get statistics from an empty selection")]
    EmptySelection,
}
