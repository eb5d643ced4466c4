// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all spectools-related errors. This should be the *only*
//! error enum that is publicly visible from the CLI.

use thiserror::Error;

use super::{convolve::ConvolveArgsError, lines::LinesArgsError};
use crate::{
    convolve::ConvolveError, linelist::LineListError, spectrum::SpectrumReadError,
    units::UnitParseError, LookupError,
};

/// The *only* publicly visible error from the spectools binary.
#[derive(Error, Debug)]
pub enum SpectoolsError {
    /// An error related to convolving a spectrum.
    #[error("{0}")]
    Convolve(String),

    /// An error from looking up molecular or instrumental constants.
    #[error("{0}")]
    Lookup(String),

    /// An error related to reading line lists.
    #[error("{0}\n\nLine lists must be in the HITRAN2004+ (160-character) format, or the fixed-width CH3+ format")]
    LineList(String),

    /// An error related to reading spectra.
    #[error("{0}\n\nSpectra must be whitespace-separated text columns of wavelength [microns] and flux")]
    Spectrum(String),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<ConvolveArgsError> for SpectoolsError {
    fn from(e: ConvolveArgsError) -> Self {
        Self::Convolve(e.to_string())
    }
}

impl From<LinesArgsError> for SpectoolsError {
    fn from(e: LinesArgsError) -> Self {
        Self::LineList(e.to_string())
    }
}

impl From<ConvolveError> for SpectoolsError {
    fn from(e: ConvolveError) -> Self {
        Self::Convolve(e.to_string())
    }
}

impl From<LookupError> for SpectoolsError {
    fn from(e: LookupError) -> Self {
        Self::Lookup(e.to_string())
    }
}

impl From<LineListError> for SpectoolsError {
    fn from(e: LineListError) -> Self {
        let s = e.to_string();
        match e {
            LineListError::FileNotFound(_) | LineListError::IO(_) => Self::Generic(s),
            LineListError::ShortRecord { .. }
            | LineListError::NonAscii(_)
            | LineListError::ParseInt { .. }
            | LineListError::ParseFloat { .. }
            | LineListError::InvalidIsotopologue { .. }
            | LineListError::MissingColumn { .. } => Self::LineList(s),
        }
    }
}

impl From<SpectrumReadError> for SpectoolsError {
    fn from(e: SpectrumReadError) -> Self {
        let s = e.to_string();
        match e {
            SpectrumReadError::IO(e) => Self::from(e),
            SpectrumReadError::TooFewColumns { .. }
            | SpectrumReadError::ParseFloat { .. }
            | SpectrumReadError::Empty => Self::Spectrum(s),
        }
    }
}

impl From<UnitParseError> for SpectoolsError {
    fn from(e: UnitParseError) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<std::io::Error> for SpectoolsError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<serde_json::Error> for SpectoolsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
