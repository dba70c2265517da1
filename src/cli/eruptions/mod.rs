// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::{borrow::Cow, path::PathBuf};

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use vec1::Vec1;

use super::common::{display_warnings, InfoPrinter, Warn, ARG_FILE_HELP};
use crate::{
    constants::{DEFAULT_HISTOGRAM_NUM_BINS, DEFAULT_HISTOGRAM_RANGE},
    coord::Region,
    params::{EruptionsParams, RegionInput},
    report::HistogramBinning,
    CvRegionsError,
};

lazy_static::lazy_static! {
    static ref NUM_BINS_HELP: String =
        format!("The number of bins in the eruption-magnitude histograms. Default: {DEFAULT_HISTOGRAM_NUM_BINS}");

    static ref HISTOGRAM_RANGE_HELP: String =
        format!("The lower and upper edges of the eruption-magnitude histograms [mag]. Default: {} {}",
                DEFAULT_HISTOGRAM_RANGE.0, DEFAULT_HISTOGRAM_RANGE.1);
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct EruptionsArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// The IPAC table of ZTF photometry for CVs in the Galactic disk.
    #[clap(long, parse(from_os_str), help_heading = "DISK")]
    pub(super) disk_ztf: Option<PathBuf>,

    /// The comma-separated list of ZTF object IDs (column "id_col") of disk
    /// CVs to use.
    #[clap(long, parse(from_os_str), help_heading = "DISK")]
    pub(super) disk_ids: Option<PathBuf>,

    /// The IPAC table of ZTF photometry for CVs in the Galactic bulge.
    #[clap(long, parse(from_os_str), help_heading = "BULGE")]
    pub(super) bulge_ztf: Option<PathBuf>,

    /// The comma-separated list of ZTF object IDs (column "id_col") of bulge
    /// CVs to use.
    #[clap(long, parse(from_os_str), help_heading = "BULGE")]
    pub(super) bulge_ids: Option<PathBuf>,

    /// The IPAC table of ZTF photometry for CVs in the Galactic halo.
    #[clap(long, parse(from_os_str), help_heading = "HALO")]
    pub(super) halo_ztf: Option<PathBuf>,

    /// The comma-separated list of ZTF object IDs (column "id_col") of halo
    /// CVs to use.
    #[clap(long, parse(from_os_str), help_heading = "HALO")]
    pub(super) halo_ids: Option<PathBuf>,

    #[clap(long, help = NUM_BINS_HELP.as_str(), help_heading = "PLOTTING")]
    pub(super) num_bins: Option<usize>,

    #[clap(long, number_of_values = 2, allow_hyphen_values = true, help = HISTOGRAM_RANGE_HELP.as_str(), help_heading = "PLOTTING")]
    pub(super) histogram_range: Option<Vec<f64>>,

    /// The directory to write plots into. It is created if it doesn't exist.
    /// The default is the current directory.
    #[clap(short, long, parse(from_os_str), help_heading = "PLOTTING")]
    pub(super) plot_dir: Option<PathBuf>,

    /// Don't draw any plots; only report statistics.
    #[clap(long, help_heading = "PLOTTING")]
    #[serde(default)]
    pub(super) no_plots: bool,
}

impl EruptionsArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<EruptionsArgs, CvRegionsError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let EruptionsArgs {
                args_file: _,
                disk_ztf,
                disk_ids,
                bulge_ztf,
                bulge_ids,
                halo_ztf,
                halo_ids,
                num_bins,
                histogram_range,
                plot_dir,
                no_plots,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(EruptionsArgs {
                args_file: None,
                disk_ztf: cli_args.disk_ztf.or(disk_ztf),
                disk_ids: cli_args.disk_ids.or(disk_ids),
                bulge_ztf: cli_args.bulge_ztf.or(bulge_ztf),
                bulge_ids: cli_args.bulge_ids.or(bulge_ids),
                halo_ztf: cli_args.halo_ztf.or(halo_ztf),
                halo_ids: cli_args.halo_ids.or(halo_ids),
                num_bins: cli_args.num_bins.or(num_bins),
                histogram_range: cli_args.histogram_range.or(histogram_range),
                plot_dir: cli_args.plot_dir.or(plot_dir),
                no_plots: cli_args.no_plots || no_plots,
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<EruptionsParams, CvRegionsError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            disk_ztf,
            disk_ids,
            bulge_ztf,
            bulge_ids,
            halo_ztf,
            halo_ids,
            num_bins,
            histogram_range,
            plot_dir,
            no_plots,
        } = self;

        // Regions are reported in this order.
        let mut inputs = vec![];
        for (region, ztf_table, allow_list) in [
            (Region::Disk, disk_ztf, disk_ids),
            (Region::Bulge, bulge_ztf, bulge_ids),
            (Region::Halo, halo_ztf, halo_ids),
        ] {
            match (ztf_table, allow_list) {
                (None, None) => {
                    debug!("No inputs for the {region}");
                }
                (Some(_), None) | (None, Some(_)) => {
                    return Err(EruptionsArgsError::IncompleteRegion(region).into())
                }
                (Some(ztf_table), Some(allow_list)) => {
                    for path in [&ztf_table, &allow_list] {
                        if !path.exists() {
                            return Err(EruptionsArgsError::FileNotFound {
                                region,
                                path: path.clone(),
                            }
                            .into());
                        }
                    }
                    inputs.push(RegionInput {
                        region,
                        ztf_table,
                        allow_list,
                    });
                }
            }
        }
        let inputs = Vec1::try_from_vec(inputs).map_err(|_| EruptionsArgsError::NoInputs)?;

        let num_bins = num_bins.unwrap_or(DEFAULT_HISTOGRAM_NUM_BINS);
        if num_bins == 0 {
            return Err(EruptionsArgsError::ZeroBins.into());
        }
        let range = match histogram_range.as_deref() {
            None => DEFAULT_HISTOGRAM_RANGE,
            Some(&[lo, hi]) if lo.is_finite() && hi.is_finite() && lo < hi => (lo, hi),
            Some(r) => return Err(EruptionsArgsError::BadHistogramRange(r.to_vec()).into()),
        };
        let binning = HistogramBinning { num_bins, range };

        let plot_dir = if no_plots {
            None
        } else if cfg!(feature = "plotting") {
            Some(plot_dir.unwrap_or_else(|| PathBuf::from(".")))
        } else {
            "cv-regions was not compiled with the \"plotting\" feature; only statistics will be reported".warn();
            None
        };
        if plot_dir.as_ref().map(|d| d.is_file()).unwrap_or(false) {
            return Err(EruptionsArgsError::PlotDirIsFile(plot_dir.unwrap_or_default()).into());
        }

        let mut printer = InfoPrinter::new("Getting CV eruption statistics".into());
        for RegionInput {
            region,
            ztf_table,
            allow_list,
        } in &inputs
        {
            let block: Vec<Cow<'static, str>> = vec![
                format!("{region}: ZTF data {}", ztf_table.display()).into(),
                format!("IDs from {}", allow_list.display()).into(),
            ];
            printer.push_block(block);
        }
        printer.push_line(
            format!(
                "Histograms: {num_bins} bins from {} to {} mag",
                range.0, range.1
            )
            .into(),
        );
        match plot_dir.as_ref() {
            Some(d) => printer.push_line(format!("Plots into {}", d.display()).into()),
            None => printer.push_line("No plots".into()),
        }
        printer.display();
        display_warnings();

        Ok(EruptionsParams {
            inputs,
            binning,
            plot_dir,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), CvRegionsError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub(super) enum EruptionsArgsError {
    #[error("No regions were specified; at least one region needs both a ZTF table and an ID list")]
    NoInputs,

    #[error("The {0} needs both a ZTF table and an ID list")]
    IncompleteRegion(Region),

    #[error("The {region} input {} doesn't exist", path.display())]
    FileNotFound { region: Region, path: PathBuf },

    #[error("The number of histogram bins can't be 0")]
    ZeroBins,

    #[error("The histogram range must be two increasing finite values, but got {0:?}")]
    BadHistogramRange(Vec<f64>),

    #[error("The plot directory {} is a file", .0.display())]
    PlotDirIsFile(PathBuf),
}
