// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use indexmap::IndexMap;
use log::{debug, info, trace};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::{
    catalog::{read_catalog, CatalogError},
    coord::{classify, sexagesimal_to_degrees, AngleKind, Region, SexagesimalError},
    ipac::{write_radec_table, WriteIpacError},
};

/// Split a CV catalog into Galactic regions, writing one RA/Dec IPAC table per
/// region.
#[derive(Debug, Clone)]
pub struct ClassifyParams {
    /// The comma-separated CV catalog.
    pub catalog: PathBuf,

    /// Where the region tables are written.
    pub output_dir: PathBuf,
}

/// What happened to the catalog's rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifySummary {
    pub num_rows: usize,

    /// The names of rows without both `l` and `b`; these weren't classified.
    pub missing_coords: Vec<String>,

    /// Rows that fell between the regions.
    pub num_untagged: usize,

    /// The number of sources written for each region. Sources can be counted
    /// in more than one region.
    pub region_counts: IndexMap<Region, usize>,
}

impl ClassifyParams {
    /// The path of the table written for `region`, e.g.
    /// "<output_dir>/inDisk.ipac".
    pub fn output_path(&self, region: Region) -> PathBuf {
        self.output_dir.join(format!("{}.ipac", region.file_stem()))
    }

    pub fn run(&self) -> Result<ClassifySummary, ClassifyError> {
        let rows = read_catalog(&self.catalog)?;

        let mut radecs: IndexMap<Region, Vec<(f64, f64)>> =
            Region::iter().map(|r| (r, vec![])).collect();
        let mut summary = ClassifySummary {
            num_rows: rows.len(),
            ..Default::default()
        };

        for row in &rows {
            let (l, b) = match row.galactic() {
                Some(lb) => lb,
                None => {
                    trace!("Skipping '{}'; it has no Galactic coordinates", row.name);
                    summary.missing_coords.push(row.name.clone());
                    continue;
                }
            };

            let tags = classify(l, b);
            if tags.is_empty() {
                summary.num_untagged += 1;
                continue;
            }

            // Only sources that are going somewhere need their RA and Dec.
            let to_degrees = |angle: &str, kind| {
                sexagesimal_to_degrees(angle, kind).map_err(|err| ClassifyError::Coordinates {
                    name: row.name.clone(),
                    err,
                })
            };
            let radec = (
                to_degrees(&row.ra, AngleKind::Hours)?,
                to_degrees(&row.dec, AngleKind::Degrees)?,
            );
            for region in tags.regions() {
                if let Some(v) = radecs.get_mut(&region) {
                    v.push(radec);
                }
            }
        }

        debug!(
            "{} catalog rows have no Galactic coordinates",
            summary.missing_coords.len()
        );
        debug!(
            "{} catalog rows aren't in any region",
            summary.num_untagged
        );

        if !self.output_dir.exists() {
            std::fs::create_dir_all(&self.output_dir)?;
        }
        for (region, radecs) in radecs {
            let path = self.output_path(region);
            write_radec_table(&path, &radecs)?;
            info!("{region}: wrote {} sources to {}", radecs.len(), path.display());
            summary.region_counts.insert(region, radecs.len());
        }

        Ok(summary)
    }
}

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Catalog source '{name}' has bad coordinates: {err}")]
    Coordinates {
        name: String,
        err: SexagesimalError,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    WriteIpac(#[from] WriteIpacError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
