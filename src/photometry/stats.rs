// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Eruption statistics.

use super::{PhotometricRecord, StatsError};

/// The eruption of a single record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EruptionMeasurement {
    pub oid: i64,

    /// Median minus minimum magnitude [mag].
    pub eruption: f64,

    /// The median magnitude error propagated through both terms of the
    /// eruption [mag].
    pub eruption_err: f64,
}

/// Summary statistics over the eruptions of a population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionSummary {
    /// [mag]
    pub mean: f64,

    /// Standard error of the mean from the propagated measurement errors
    /// [mag].
    pub sem: f64,

    pub count: usize,
}

/// Get the eruption magnitude of every record.
///
/// The minimum magnitude doesn't come with its own error in ZTF tables, so
/// the median magnitude error is used for both terms.
pub fn compute_eruptions<'a, I>(records: I) -> Vec<EruptionMeasurement>
where
    I: IntoIterator<Item = &'a PhotometricRecord>,
{
    records
        .into_iter()
        .map(|r| EruptionMeasurement {
            oid: r.oid,
            eruption: r.median_mag - r.min_mag,
            eruption_err: (2.0 * r.median_mag_err * r.median_mag_err).sqrt(),
        })
        .collect()
}

/// Get the mean eruption and its standard error, sqrt(Σ err²) / n.
pub fn summarise(measurements: &[EruptionMeasurement]) -> Result<RegionSummary, StatsError> {
    if measurements.is_empty() {
        return Err(StatsError::EmptySelection);
    }

    let count = measurements.len();
    let n = count as f64;
    let (sum, sum_sq_err) = measurements.iter().fold((0.0, 0.0), |(s, e), m| {
        (s + m.eruption, e + m.eruption_err * m.eruption_err)
    });

    Ok(RegionSummary {
        mean: sum / n,
        sem: sum_sq_err.sqrt() / n,
        count,
    })
}

/// Count `values` into `num_bins` equal-width bins spanning `range`. Every bin
/// is half open except the last, which includes the upper edge. Values outside
/// the range (and NaNs) aren't counted.
///
/// If `num_bins` is 0, the result is empty. If the range is empty or
/// inverted, all counts are 0.
pub fn histogram_counts(values: &[f64], num_bins: usize, range: (f64, f64)) -> Vec<usize> {
    let mut counts = vec![0; num_bins];
    let (lo, hi) = range;
    if num_bins == 0 || !(hi > lo) {
        return counts;
    }

    let width = hi - lo;
    for &v in values {
        if !(lo..=hi).contains(&v) {
            continue;
        }
        let i_bin = (((v - lo) / width) * num_bins as f64) as usize;
        counts[i_bin.min(num_bins - 1)] += 1;
    }

    counts
}
