// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Coordinate handling: sexagesimal conversion and Galactic-region
//! classification.

mod error;
mod region;
mod sexagesimal;
#[cfg(test)]
mod tests;

pub use error::SexagesimalError;
pub use region::{classify, Region, RegionTags};
pub use sexagesimal::{sexagesimal_to_degrees, AngleKind};
