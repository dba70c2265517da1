// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! ZTF photometry of CVs: reading per-object records, selecting the objects
//! of interest and getting eruption statistics from them.

mod error;
mod select;
mod stats;

pub use error::{PhotometryError, StatsError};
pub use select::select_sources;
pub use stats::{
    compute_eruptions, histogram_counts, summarise, EruptionMeasurement, RegionSummary,
};

use std::path::Path;

use log::debug;

use crate::{
    constants::{MEDIAN_MAG_COLUMN, MEDIAN_MAG_ERR_COLUMN, MIN_MAG_COLUMN, OBJECT_ID_COLUMN},
    ipac::{read_ipac_table, Column, IpacTable},
};

/// A single row of ZTF photometry. Many records may share the same object
/// identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotometricRecord {
    pub oid: i64,

    /// [mag]
    pub median_mag: f64,

    /// The brightest magnitude seen [mag].
    pub min_mag: f64,

    /// [mag]
    pub median_mag_err: f64,
}

impl PhotometricRecord {
    /// Get records out of an IPAC table. The table must have the `oid`,
    /// `medianmag`, `minmag` and `medmagerr` columns, and none of their values
    /// may be null.
    pub fn from_ipac_table(table: &IpacTable) -> Result<Vec<PhotometricRecord>, PhotometryError> {
        let oid_column = get_column(table, OBJECT_ID_COLUMN)?;
        let oids = oid_column
            .as_ints()
            .ok_or(PhotometryError::NotInteger {
                column: OBJECT_ID_COLUMN,
                col_type: oid_column.column_type(),
            })?;
        let median_mags = get_doubles(table, MEDIAN_MAG_COLUMN)?;
        let min_mags = get_doubles(table, MIN_MAG_COLUMN)?;
        let median_mag_errs = get_doubles(table, MEDIAN_MAG_ERR_COLUMN)?;

        let mut records = Vec::with_capacity(oids.len());
        for (i_row, (((oid, median_mag), min_mag), median_mag_err)) in oids
            .iter()
            .zip(median_mags)
            .zip(min_mags)
            .zip(median_mag_errs)
            .enumerate()
        {
            let not_null = |v: Option<f64>, column| {
                v.ok_or(PhotometryError::NullValue {
                    column,
                    row: i_row + 1,
                })
            };
            records.push(PhotometricRecord {
                oid: oid.ok_or(PhotometryError::NullValue {
                    column: OBJECT_ID_COLUMN,
                    row: i_row + 1,
                })?,
                median_mag: not_null(median_mag, MEDIAN_MAG_COLUMN)?,
                min_mag: not_null(min_mag, MIN_MAG_COLUMN)?,
                median_mag_err: not_null(median_mag_err, MEDIAN_MAG_ERR_COLUMN)?,
            });
        }

        Ok(records)
    }
}

/// Read ZTF photometry from the IPAC table at `path`. The `oid` column is
/// always read as a 64-bit integer.
pub fn read_photometry<P: AsRef<Path>>(path: P) -> Result<Vec<PhotometricRecord>, PhotometryError> {
    let path = path.as_ref();
    let table = read_ipac_table(path, &[OBJECT_ID_COLUMN])?;
    let records =
        PhotometricRecord::from_ipac_table(&table).map_err(|err| PhotometryError::Table {
            path: path.to_path_buf(),
            err: Box::new(err),
        })?;
    debug!(
        "Got {} photometric records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

fn get_column<'a>(table: &'a IpacTable, column: &'static str) -> Result<&'a Column, PhotometryError> {
    table
        .column(column)
        .ok_or(PhotometryError::MissingColumn { column })
}

fn get_doubles(table: &IpacTable, column: &'static str) -> Result<Vec<Option<f64>>, PhotometryError> {
    let c = get_column(table, column)?;
    c.to_doubles().ok_or(PhotometryError::NotNumeric {
        column,
        col_type: c.column_type(),
    })
}
