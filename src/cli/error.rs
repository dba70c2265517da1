// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all cv-regions-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use super::{classify::ClassifyArgsError, eruptions::EruptionsArgsError};
use crate::{
    catalog::CatalogError,
    ipac::{ReadIpacError, WriteIpacError},
    params::{ClassifyError, EruptionsError},
    photometry::PhotometryError,
    report::ReportError,
};

/// The *only* publicly visible error from cv-regions.
#[derive(Error, Debug)]
pub enum CvRegionsError {
    /// An error related to classify.
    #[error("{0}")]
    Classify(String),

    /// An error related to eruptions.
    #[error("{0}")]
    Eruptions(String),

    /// An error related to reading the CV catalog or allow lists.
    #[error("{0}\n\nCatalogs and allow lists must be comma separated, with a header row.")]
    Catalog(String),

    /// An error related to IPAC tables.
    #[error("{0}\n\nSee for more info: https://irsa.ipac.caltech.edu/applications/DDGEN/Doc/ipac_tbl.html")]
    Ipac(String),

    /// An error related to ZTF photometry.
    #[error("{0}")]
    Photometry(String),

    /// An error related to plotting.
    #[error("{0}\n\nIf you don't need plots, try --no-plots.")]
    Plot(String),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

// Binary sub-command errors.

impl From<ClassifyArgsError> for CvRegionsError {
    fn from(e: ClassifyArgsError) -> Self {
        Self::Classify(e.to_string())
    }
}

impl From<EruptionsArgsError> for CvRegionsError {
    fn from(e: EruptionsArgsError) -> Self {
        Self::Eruptions(e.to_string())
    }
}

// Library code errors.

impl From<ClassifyError> for CvRegionsError {
    fn from(e: ClassifyError) -> Self {
        match e {
            ClassifyError::Coordinates { .. } => Self::Classify(e.to_string()),
            ClassifyError::Catalog(e) => Self::from(e),
            ClassifyError::WriteIpac(e) => Self::from(e),
            ClassifyError::IO(e) => Self::from(e),
        }
    }
}

impl From<EruptionsError> for CvRegionsError {
    fn from(e: EruptionsError) -> Self {
        match e {
            EruptionsError::Stats { .. } => Self::Eruptions(e.to_string()),
            EruptionsError::Photometry(e) => Self::from(e),
            EruptionsError::Catalog(e) => Self::from(e),
            EruptionsError::Report(e) => Self::from(e),
        }
    }
}

impl From<CatalogError> for CvRegionsError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e.to_string())
    }
}

impl From<PhotometryError> for CvRegionsError {
    fn from(e: PhotometryError) -> Self {
        match e {
            PhotometryError::Ipac(e) => Self::from(e),
            _ => Self::Photometry(e.to_string()),
        }
    }
}

impl From<ReadIpacError> for CvRegionsError {
    fn from(e: ReadIpacError) -> Self {
        match e {
            ReadIpacError::File { .. } | ReadIpacError::IO(_) => Self::Generic(e.to_string()),
            _ => Self::Ipac(e.to_string()),
        }
    }
}

impl From<WriteIpacError> for CvRegionsError {
    fn from(e: WriteIpacError) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<ReportError> for CvRegionsError {
    fn from(e: ReportError) -> Self {
        match e {
            ReportError::IO(e) => Self::from(e),
            #[allow(unreachable_patterns)]
            _ => Self::Plot(e.to_string()),
        }
    }
}

impl From<std::io::Error> for CvRegionsError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
