// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpectrumReadError {
    #[error("Spectrum line {line_num}: Expected at least 2 columns (wavelength and flux), but found {found}")]
    TooFewColumns { line_num: usize, found: usize },

    #[error("Spectrum line {line_num}: Couldn't parse '{string}' as a float")]
    ParseFloat { line_num: usize, string: String },

    #[error("The spectrum contains no samples")]
    Empty,

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
