// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writing two-column RA/Dec IPAC tables, suitable for uploading to the IRSA
//! ZTF archive.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;

use super::WriteIpacError;

/// The header lines of an RA/Dec table. The data lines are aligned to these.
pub const RADEC_HEADER: [&str; 2] = [
    "|    ra        |     dec      |",
    "|    double    |     double   |",
];

/// Write RA/Dec pairs [degrees] as an IPAC table to a buffer.
pub fn write_radec<T: Write>(buf: &mut T, radecs: &[(f64, f64)]) -> Result<(), WriteIpacError> {
    for header in RADEC_HEADER {
        writeln!(buf, "{header}")?;
    }
    for (ra, dec) in radecs {
        writeln!(buf, "    {ra:<11.6}  {dec:<11.6}")?;
    }

    Ok(())
}

/// Write RA/Dec pairs [degrees] as an IPAC table to the file at `path`. An
/// existing file is overwritten.
pub fn write_radec_table<P: AsRef<Path>>(
    path: P,
    radecs: &[(f64, f64)],
) -> Result<(), WriteIpacError> {
    let path = path.as_ref();
    let f = File::create(path).map_err(|err| WriteIpacError::Create {
        path: path.to_path_buf(),
        err,
    })?;
    let mut buf = BufWriter::new(f);
    write_radec(&mut buf, radecs)?;
    buf.flush()?;
    debug!("Wrote {} rows to {}", radecs.len(), path.display());

    Ok(())
}
