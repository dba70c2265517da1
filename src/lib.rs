// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Classification of cataclysmic variables (CVs) by Galactic region, and eruption
statistics of those CVs from Zwicky Transient Facility (ZTF) photometry.
 */

pub mod catalog;
mod cli;
pub mod constants;
pub mod coord;
pub mod ipac;
pub mod params;
pub mod photometry;
pub mod report;

// Re-exports.
pub use cli::{CvRegions, CvRegionsError};
