// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::HashSet;

use log::trace;

use super::PhotometricRecord;

/// Get the records whose object identifier is in `allowed_ids`. The order of
/// `records` is preserved, and nothing is copied.
pub fn select_sources<'a>(
    records: &'a [PhotometricRecord],
    allowed_ids: &HashSet<i64>,
) -> Vec<&'a PhotometricRecord> {
    let selected: Vec<&PhotometricRecord> = records
        .iter()
        .filter(|r| allowed_ids.contains(&r.oid))
        .collect();
    trace!(
        "Selected {} of {} records with {} allowed IDs",
        selected.len(),
        records.len(),
        allowed_ids.len()
    );
    selected
}
