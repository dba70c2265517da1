// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reporting eruption statistics. Everything that leaves the statistics
//! stage, be it log lines or plots, goes through a [Reporter].

mod error;
#[cfg(feature = "plotting")]
mod plot;

pub use error::ReportError;
#[cfg(feature = "plotting")]
pub use plot::PlotReporter;

use log::{debug, info};

use crate::{
    constants::{DEFAULT_HISTOGRAM_NUM_BINS, DEFAULT_HISTOGRAM_RANGE},
    coord::Region,
    photometry::{histogram_counts, RegionSummary},
};

/// The order of the regions on boxplots.
pub const BOXPLOT_ORDER: [Region; 3] = [Region::Disk, Region::Halo, Region::Bulge];

pub(crate) const ERUPTION_AXIS_LABEL: &str = "Eruption Magnitude";
pub(crate) const COUNTS_AXIS_LABEL: &str = "Counts";
pub(crate) const BOXPLOT_TITLE: &str =
    "Eruption Magnitude of CVs in the 3 Regions of the Milky Way";

/// How eruption magnitudes are binned into histograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBinning {
    pub num_bins: usize,

    /// [mag]
    pub range: (f64, f64),
}

impl Default for HistogramBinning {
    fn default() -> Self {
        Self {
            num_bins: DEFAULT_HISTOGRAM_NUM_BINS,
            range: DEFAULT_HISTOGRAM_RANGE,
        }
    }
}

impl HistogramBinning {
    /// The width of a single bin [mag].
    pub fn bin_width(&self) -> f64 {
        (self.range.1 - self.range.0) / self.num_bins as f64
    }
}

/// Something that can present eruption statistics.
pub trait Reporter {
    /// Report the summary statistics of a region.
    fn report_region_stats(
        &mut self,
        region: Region,
        summary: &RegionSummary,
    ) -> Result<(), ReportError>;

    /// Present the distribution of a region's eruption magnitudes [mag].
    fn render_histogram(&mut self, region: Region, eruptions: &[f64]) -> Result<(), ReportError>;

    /// Compare the eruption magnitudes [mag] of several regions. The regions
    /// are presented in the given order.
    fn render_boxplot(&mut self, populations: &[(Region, Vec<f64>)]) -> Result<(), ReportError>;
}

/// The line used to report a region's statistics, e.g.
/// "Disk average: 2.0, Error: 0.15811388300841897".
pub fn region_stats_line(region: Region, summary: &RegionSummary) -> String {
    format!(
        "{region} average: {:?}, Error: {:?}",
        summary.mean, summary.sem
    )
}

/// The title of a region's histogram.
pub fn histogram_title(region: Region) -> String {
    format!("Eruption Magnitudes of CVs in the {region}")
}

/// The label of a region on boxplots.
pub fn boxplot_label(region: Region) -> String {
    format!("{region} CVs")
}

/// Sort populations into [BOXPLOT_ORDER]. Regions not in the populations are
/// skipped.
pub fn boxplot_populations<'a>(
    populations: &'a [(Region, Vec<f64>)],
) -> impl Iterator<Item = &'a (Region, Vec<f64>)> {
    BOXPLOT_ORDER
        .into_iter()
        .filter_map(move |region| populations.iter().find(|(r, _)| *r == region))
}

/// A [Reporter] that only writes to the log. Histograms are logged as a table
/// of bin counts at debug level.
#[derive(Debug, Clone, Default)]
pub struct LogReporter {
    pub binning: HistogramBinning,
}

impl LogReporter {
    pub fn new(binning: HistogramBinning) -> LogReporter {
        LogReporter { binning }
    }
}

impl Reporter for LogReporter {
    fn report_region_stats(
        &mut self,
        region: Region,
        summary: &RegionSummary,
    ) -> Result<(), ReportError> {
        info!("{}", region_stats_line(region, summary));
        debug!("{region}: {} eruptions", summary.count);
        Ok(())
    }

    fn render_histogram(&mut self, region: Region, eruptions: &[f64]) -> Result<(), ReportError> {
        let HistogramBinning { num_bins, range } = self.binning;
        let width = self.binning.bin_width();
        debug!("{}", histogram_title(region));
        for (i_bin, count) in histogram_counts(eruptions, num_bins, range)
            .into_iter()
            .enumerate()
        {
            let lo = range.0 + i_bin as f64 * width;
            debug!("    {:>6.3} - {:>6.3}: {count}", lo, lo + width);
        }
        Ok(())
    }

    fn render_boxplot(&mut self, populations: &[(Region, Vec<f64>)]) -> Result<(), ReportError> {
        debug!("{BOXPLOT_TITLE}");
        for (region, eruptions) in boxplot_populations(populations) {
            debug!("    {}: {} eruptions", boxplot_label(*region), eruptions.len());
        }
        Ok(())
    }
}
