// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for IPAC tables. See for more info:
//! <https://irsa.ipac.caltech.edu/applications/DDGEN/Doc/ipac_tbl.html>
//!
//! Only what's needed to read ZTF query results and write coordinate
//! uploads is supported; the writer only handles two-column `ra`/`dec` tables.

mod error;
mod read;
mod write;

pub use error::{ReadIpacError, WriteIpacError};
pub use read::{parse_ipac_table, read_ipac_table};
pub use write::{write_radec, write_radec_table, RADEC_HEADER};

use indexmap::IndexMap;
use strum_macros::Display;

/// The types of data an IPAC column can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ColumnType {
    #[strum(serialize = "int")]
    Int,

    #[strum(serialize = "double")]
    Double,

    #[strum(serialize = "char")]
    Char,
}

impl ColumnType {
    /// Interpret the type declared in an IPAC header. IPAC allows any prefix
    /// of the type names, e.g. "i", "d", "c".
    pub(crate) fn from_ipac(s: &str) -> Option<ColumnType> {
        let s = s.trim().to_lowercase();
        if s.is_empty() {
            return None;
        }
        let matches = |full: &str| full.starts_with(s.as_str());
        if matches("int") || matches("long") {
            Some(ColumnType::Int)
        } else if matches("double") || matches("real") || matches("float") {
            Some(ColumnType::Double)
        } else if matches("char") || matches("date") {
            Some(ColumnType::Char)
        } else {
            None
        }
    }
}

/// The values of a single IPAC column. Null values are `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int(Vec<Option<i64>>),
    Double(Vec<Option<f64>>),
    Char(Vec<Option<String>>),
}

impl Column {
    fn new(col_type: ColumnType) -> Column {
        match col_type {
            ColumnType::Int => Column::Int(vec![]),
            ColumnType::Double => Column::Double(vec![]),
            ColumnType::Char => Column::Char(vec![]),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Int(v) => v.len(),
            Column::Double(v) => v.len(),
            Column::Char(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Int(_) => ColumnType::Int,
            Column::Double(_) => ColumnType::Double,
            Column::Char(_) => ColumnType::Char,
        }
    }

    pub fn as_ints(&self) -> Option<&[Option<i64>]> {
        match self {
            Column::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Get the values of this column as doubles. Integer columns are
    /// converted.
    pub fn to_doubles(&self) -> Option<Vec<Option<f64>>> {
        match self {
            Column::Int(v) => Some(v.iter().map(|i| i.map(|i| i as f64)).collect()),
            Column::Double(v) => Some(v.clone()),
            Column::Char(_) => None,
        }
    }
}

/// An IPAC table held in memory. The order of the columns is the same as in
/// the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IpacTable {
    /// `\key = value` lines.
    pub keywords: IndexMap<String, String>,

    /// `\ comment` lines, without the leading backslash.
    pub comments: Vec<String>,

    pub(crate) columns: IndexMap<String, Column>,
}

impl IpacTable {
    pub fn num_rows(&self) -> usize {
        self.columns.values().next().map(Column::len).unwrap_or(0)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|s| s.as_str())
    }
}
