// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SexagesimalError {
    #[error("Could not parse the {component} component '{value}' of sexagesimal angle '{input}'")]
    BadComponent {
        input: String,
        component: &'static str,
        value: String,
    },

    #[error("Sexagesimal angle '{0}' has more than 3 colon-separated components")]
    TooManyComponents(String),
}
