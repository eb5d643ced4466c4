// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors associated with degrading a spectrum to an instrumental resolution.
#[derive(Error, Debug)]
pub enum ConvolveError {
    #[error("The wavelength and flux arrays have different lengths ({wave} vs. {flux})")]
    LengthMismatch { wave: usize, flux: usize },

    #[error("The resolving-power array has {resolution} elements, but there are {wave} wavelengths")]
    ResolutionLengthMismatch { wave: usize, resolution: usize },

    #[error("A spectrum needs at least 2 samples to be convolved, but {0} were supplied")]
    TooFewPoints(usize),

    #[error("The {array} array contains a non-finite value ({value}) at index {index}")]
    NonFinite {
        array: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Wavelengths must be positive, but got {value} at index {index}")]
    NonPositiveWavelength { index: usize, value: f64 },

    #[error("Wavelengths must be strictly increasing, but {current} at index {index} follows {previous}")]
    NotIncreasing {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("Resolving powers must be positive, but got {value} at index {index}")]
    NonPositiveResolution { index: usize, value: f64 },

    #[error("The velocity resolution must be a positive number of km/s, but got {0}")]
    InvalidVelocity(f64),

    #[error("The Gaussian kernel (sigma = {sigma} samples) is far wider than the {grid_len}-sample resampled spectrum; the resolving power is too low for these wavelengths")]
    KernelTooWide { sigma: f64, grid_len: usize },

    #[error("FFT error: {0}")]
    Fft(#[from] realfft::FftError),
}
