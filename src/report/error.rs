// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[cfg(feature = "plotting")]
    #[error("Error from the plotters library: {0}")]
    Plotters(Box<dyn std::error::Error>),

    #[cfg(feature = "plotting")]
    #[error("Can't plot {what}: there is nothing to plot")]
    NothingToPlot { what: String },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
