// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Galactic-region classification from Galactic coordinates.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::constants::{
    BULGE_LONG_HALF_WIDTH, BULGE_MAX_ABS_LAT, DISK_MAX_ABS_LAT, HALO_MIN_ABS_LAT,
};

/// A region of the Milky Way.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Bulge,
    Disk,
    Halo,
}

impl Region {
    /// The stem used when naming files for this region, e.g. "inBulge".
    pub fn file_stem(self) -> &'static str {
        match self {
            Region::Bulge => "inBulge",
            Region::Disk => "inDisk",
            Region::Halo => "inHalo",
        }
    }
}

/// The regions that a source may belong to. Each tag is evaluated on its own,
/// so nothing here stops a source from having no tags at all (e.g. 7° < |b| <=
/// 10°).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionTags {
    pub bulge: bool,
    pub disk: bool,
    pub halo: bool,
}

impl RegionTags {
    pub fn contains(&self, region: Region) -> bool {
        match region {
            Region::Bulge => self.bulge,
            Region::Disk => self.disk,
            Region::Halo => self.halo,
        }
    }

    /// Iterate over the regions that have been tagged.
    pub fn regions(self) -> impl Iterator<Item = Region> {
        Region::iter().filter(move |&r| self.contains(r))
    }

    pub fn is_empty(&self) -> bool {
        !(self.bulge || self.disk || self.halo)
    }
}

/// Tag a source with Galactic longitude `l` and latitude `b` [degrees].
///
/// `l` is not wrapped; it must already be in [0°, 360°). The boundaries are
/// asymmetric: a source at exactly |b| = 7° or l = 7° is bulge-eligible, but
/// not disk-eligible.
pub fn classify(l: f64, b: f64) -> RegionTags {
    let abs_b = b.abs();
    let bulge_longitude = l <= BULGE_LONG_HALF_WIDTH || l >= 360.0 - BULGE_LONG_HALF_WIDTH;

    RegionTags {
        bulge: abs_b <= BULGE_MAX_ABS_LAT && bulge_longitude,
        disk: abs_b < DISK_MAX_ABS_LAT
            && l > BULGE_LONG_HALF_WIDTH
            && l < 360.0 - BULGE_LONG_HALF_WIDTH,
        halo: abs_b > HALO_MIN_ABS_LAT,
    }
}
