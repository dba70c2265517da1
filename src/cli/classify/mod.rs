// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::{borrow::Cow, path::PathBuf};

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::common::{display_warnings, InfoPrinter, Warn, ARG_FILE_HELP};
use crate::{
    coord::Region,
    params::{ClassifyParams, ClassifySummary},
    CvRegionsError,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct ClassifyArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// The comma-separated CV catalog. The first three columns must be the
    /// source name, RA (HH:MM:SS) and Dec (DD:MM:SS); the Galactic
    /// coordinates are taken from the columns named "l" and "b".
    #[clap(short, long, parse(from_os_str), help_heading = "INPUT FILES")]
    pub(super) catalog: Option<PathBuf>,

    /// The directory to write inBulge.ipac, inDisk.ipac and inHalo.ipac into.
    /// It is created if it doesn't exist. The default is the current
    /// directory.
    #[clap(short, long, parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output_dir: Option<PathBuf>,
}

impl ClassifyArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<ClassifyArgs, CvRegionsError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let ClassifyArgs {
                args_file: _,
                catalog,
                output_dir,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(ClassifyArgs {
                args_file: None,
                catalog: cli_args.catalog.or(catalog),
                output_dir: cli_args.output_dir.or(output_dir),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<ClassifyParams, CvRegionsError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            catalog,
            output_dir,
        } = self;

        let catalog = catalog.ok_or(ClassifyArgsError::NoCatalog)?;
        if !catalog.exists() {
            return Err(ClassifyArgsError::CatalogNotFound(catalog).into());
        }

        let output_dir = output_dir.unwrap_or_else(|| PathBuf::from("."));
        if output_dir.is_file() {
            return Err(ClassifyArgsError::OutputDirIsFile(output_dir).into());
        }

        let params = ClassifyParams {
            catalog,
            output_dir,
        };

        let mut printer = InfoPrinter::new("Classifying CVs by Galactic region".into());
        printer.push_line(format!("Catalog: {}", params.catalog.display()).into());
        let outputs: Vec<Cow<'static, str>> = Region::iter()
            .map(|r| format!("{r}: {}", params.output_path(r).display()).into())
            .collect();
        printer.push_block(outputs);
        printer.display();

        for region in Region::iter() {
            let path = params.output_path(region);
            if path.exists() {
                format!("{} will be overwritten", path.display()).warn();
            }
        }
        display_warnings();

        Ok(params)
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), CvRegionsError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        let summary = params.run()?;
        if let Some(block) = missing_coords_warning(&summary) {
            block.warn();
        }
        display_warnings();
        Ok(())
    }
}

/// A warning block listing the catalog rows that couldn't be classified, if
/// there were any.
fn missing_coords_warning(summary: &ClassifySummary) -> Option<Vec<Cow<'static, str>>> {
    if summary.missing_coords.is_empty() {
        return None;
    }
    Some(vec![
        format!(
            "{} of {} catalog rows have no Galactic coordinates and were skipped:",
            summary.missing_coords.len(),
            summary.num_rows
        )
        .into(),
        summary.missing_coords.join(", ").into(),
    ])
}

#[derive(thiserror::Error, Debug)]
pub(super) enum ClassifyArgsError {
    #[error("No CV catalog was specified")]
    NoCatalog,

    #[error("The CV catalog {} doesn't exist", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("The output directory {} is a file", .0.display())]
    OutputDirIsFile(PathBuf),
}
