// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters for the `cv-regions` pipelines.
//!
//! The code here is kind of "mirroring" the code within the `cli` module; the
//! idea is that `cli` is unparsed, user-facing code, whereas parameters have
//! been parsed and are ready to be used directly. Every input and output path
//! a pipeline touches is listed in its parameters.

mod classify;
mod eruptions;
#[cfg(test)]
mod tests;

pub use classify::{ClassifyError, ClassifyParams, ClassifySummary};
pub use eruptions::{EruptionsError, EruptionsParams, RegionInput};
