// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use indexmap::IndexMap;
use log::{debug, info};
use thiserror::Error;
use vec1::Vec1;

use crate::{
    catalog::{read_allow_list, CatalogError},
    coord::Region,
    photometry::{
        compute_eruptions, read_photometry, select_sources, summarise, PhotometryError,
        RegionSummary, StatsError,
    },
    report::{HistogramBinning, LogReporter, ReportError, Reporter},
};

/// The inputs for a single region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionInput {
    pub region: Region,

    /// The IPAC table of ZTF photometry for the region's sources.
    pub ztf_table: PathBuf,

    /// The comma-separated list of object identifiers to use.
    pub allow_list: PathBuf,
}

/// Get eruption statistics for CVs in each region.
#[derive(Debug, Clone)]
pub struct EruptionsParams {
    /// Regions are processed and reported in this order. There is at most
    /// one input per region.
    pub inputs: Vec1<RegionInput>,

    pub binning: HistogramBinning,

    /// Where plots are written. If this is `None`, statistics are only
    /// logged.
    pub plot_dir: Option<PathBuf>,
}

impl EruptionsParams {
    /// Run with the default [Reporter] for these parameters.
    pub fn run(&self) -> Result<IndexMap<Region, RegionSummary>, EruptionsError> {
        match self.plot_dir.as_ref() {
            #[cfg(feature = "plotting")]
            Some(plot_dir) => {
                let mut reporter = crate::report::PlotReporter::new(plot_dir, self.binning)?;
                self.run_with(&mut reporter)
            }

            _ => self.run_with(&mut LogReporter::new(self.binning)),
        }
    }

    /// Get statistics for each region, handing everything to `reporter`. All
    /// region statistics are reported before any histograms are rendered, and
    /// the boxplot comes last.
    pub fn run_with<R: Reporter + ?Sized>(
        &self,
        reporter: &mut R,
    ) -> Result<IndexMap<Region, RegionSummary>, EruptionsError> {
        let mut summaries = IndexMap::with_capacity(self.inputs.len());
        let mut populations: Vec<(Region, Vec<f64>)> = Vec::with_capacity(self.inputs.len());

        for RegionInput {
            region,
            ztf_table,
            allow_list,
        } in &self.inputs
        {
            let region = *region;
            let records = read_photometry(ztf_table)?;
            let allowed_ids = read_allow_list(allow_list)?;
            let selected = select_sources(&records, &allowed_ids);
            debug!(
                "{region}: {} of {} records are in {}",
                selected.len(),
                records.len(),
                allow_list.display()
            );

            let eruptions = compute_eruptions(selected);
            let summary = summarise(&eruptions).map_err(|err| EruptionsError::Stats {
                region,
                ztf_table: ztf_table.clone(),
                allow_list: allow_list.clone(),
                err,
            })?;
            reporter.report_region_stats(region, &summary)?;

            summaries.insert(region, summary);
            populations.push((region, eruptions.into_iter().map(|e| e.eruption).collect()));
        }

        for (region, eruptions) in &populations {
            reporter.render_histogram(*region, eruptions)?;
        }
        reporter.render_boxplot(&populations)?;
        info!("Got eruption statistics for {} regions", summaries.len());

        Ok(summaries)
    }
}

#[derive(Error, Debug)]
pub enum EruptionsError {
    #[error("{region}: No records in {} have an ID in {}\n{err}", ztf_table.display(), allow_list.display())]
    Stats {
        region: Region,
        ztf_table: PathBuf,
        allow_list: PathBuf,
        err: StatsError,
    },

    #[error(transparent)]
    Photometry(#[from] PhotometryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
