// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use super::ColumnType;

/// Errors associated with reading an IPAC table.
#[derive(Error, Debug)]
pub enum ReadIpacError {
    #[error("IPAC table has no header (a line starting with '|')")]
    NoHeader,

    #[error("IPAC table line {line_num}: The header has column names, but no column types")]
    NoTypes { line_num: u32 },

    #[error("IPAC table line {line_num}: The header declares {expected} columns, but this header line has {got}")]
    HeaderColumnMismatch {
        line_num: u32,
        expected: usize,
        got: usize,
    },

    #[error("IPAC table line {line_num}: Found a header line after data lines")]
    HeaderAfterData { line_num: u32 },

    #[error("IPAC table line {line_num}: Column number {column} has an empty name")]
    EmptyColumnName { line_num: u32, column: usize },

    #[error("IPAC table line {line_num}: Column '{column}' is declared twice")]
    DuplicateColumn { line_num: u32, column: String },

    #[error("IPAC table line {line_num}: Unrecognised type '{col_type}' for column '{column}'")]
    UnknownType {
        line_num: u32,
        column: String,
        col_type: String,
    },

    #[error("IPAC table line {line_num}: Found data before the first header column: '{data}'")]
    DataBeforeFirstColumn { line_num: u32, data: String },

    #[error("IPAC table line {line_num}: The line ends before column '{column}'")]
    MissingData { line_num: u32, column: String },

    #[error("IPAC table line {line_num}: Found data beyond the last header column: '{data}'")]
    ExtraData { line_num: u32, data: String },

    #[error("IPAC table line {line_num}: Could not parse '{value}' as {col_type} for column '{column}'")]
    BadValue {
        line_num: u32,
        column: String,
        col_type: ColumnType,
        value: String,
    },

    #[error("IPAC table line {line_num}: Data isn't aligned to valid UTF-8 column boundaries")]
    Misaligned { line_num: u32 },

    #[error("Couldn't read IPAC table {path}: {err}")]
    File { path: PathBuf, err: std::io::Error },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Errors associated with writing an IPAC table.
#[derive(Error, Debug)]
pub enum WriteIpacError {
    #[error("Couldn't create IPAC table {path}: {err}")]
    Create { path: PathBuf, err: std::io::Error },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
