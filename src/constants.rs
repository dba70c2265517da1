// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All angles are in degrees. Magnitudes are in the survey's native magnitude
system.
 */

/// Sources with |b| at or below this latitude [degrees] may be in the Galactic
/// bulge.
pub const BULGE_MAX_ABS_LAT: f64 = 7.0;

/// Sources within this many degrees of l = 0° may be in the Galactic bulge.
/// On the other side of l = 0°, the limit is 360° minus this value.
pub const BULGE_LONG_HALF_WIDTH: f64 = 7.0;

/// Sources with |b| strictly below this latitude [degrees] may be in the
/// Galactic disk.
pub const DISK_MAX_ABS_LAT: f64 = 7.0;

/// Sources with |b| strictly above this latitude [degrees] are in the Galactic
/// halo.
pub const HALO_MIN_ABS_LAT: f64 = 10.0;

/// The number of degrees in an hour of right ascension.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// The default number of bins in eruption-magnitude histograms.
pub const DEFAULT_HISTOGRAM_NUM_BINS: usize = 20;

/// The default (inclusive) range of eruption-magnitude histograms [mag].
pub const DEFAULT_HISTOGRAM_RANGE: (f64, f64) = (0.0, 6.15);

/// The name of the ZTF object-identifier column. This must always be read as a
/// 64-bit integer; it doesn't fit in the mantissa of a double.
pub const OBJECT_ID_COLUMN: &str = "oid";

/// The name of the allow-list column containing object identifiers.
pub const ALLOW_LIST_ID_COLUMN: &str = "id_col";

/// The name of the ZTF median-magnitude column.
pub const MEDIAN_MAG_COLUMN: &str = "medianmag";

/// The name of the ZTF minimum-magnitude (i.e. brightest) column.
pub const MIN_MAG_COLUMN: &str = "minmag";

/// The name of the ZTF median-magnitude-error column.
pub const MEDIAN_MAG_ERR_COLUMN: &str = "medmagerr";

/// The name of the catalog's Galactic longitude column.
pub const GALACTIC_LONG_COLUMN: &str = "l";

/// The name of the catalog's Galactic latitude column.
pub const GALACTIC_LAT_COLUMN: &str = "b";
