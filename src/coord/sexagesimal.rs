// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversion of "HH:MM:SS.SS" and "DD:MM:SS.SS" strings to decimal degrees.

use super::SexagesimalError;
use crate::constants::DEGREES_PER_HOUR;

/// What the leading component of a sexagesimal string counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleKind {
    /// Hours of right ascension (1 hour = 15 degrees).
    Hours,

    /// Degrees of declination.
    Degrees,
}

const COMPONENT_NAMES: [&str; 3] = ["leading", "minutes", "seconds"];

/// Convert a sexagesimal string into decimal degrees.
///
/// Missing or empty components are treated as 0, so "10::" and "10" are both
/// 10 hours (or degrees). Whitespace around the string and around each
/// component is ignored. The sign is only read from the leading component and
/// applies to the whole angle, i.e. "-05:30:00" is -5.5 degrees.
pub fn sexagesimal_to_degrees(angle: &str, kind: AngleKind) -> Result<f64, SexagesimalError> {
    let mut components = [0.0; 3];
    let mut negative = false;
    for (i, part) in angle.trim().split(':').enumerate() {
        if i == components.len() {
            return Err(SexagesimalError::TooManyComponents(angle.to_string()));
        }

        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if i == 0 {
            negative = part.starts_with('-');
        }
        let value: f64 = part.parse().map_err(|_| SexagesimalError::BadComponent {
            input: angle.to_string(),
            component: COMPONENT_NAMES[i],
            value: part.to_string(),
        })?;
        components[i] = value;
    }

    let [leading, minutes, seconds] = components;
    let magnitude = leading.abs() + minutes / 60.0 + seconds / 3600.0;
    let value = if negative { -magnitude } else { magnitude };

    Ok(match kind {
        AngleKind::Hours => DEGREES_PER_HOUR * value,
        AngleKind::Degrees => value,
    })
}
