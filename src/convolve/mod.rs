// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Degrade a spectrum to an instrumental resolving power.
//!
//! The resolving power R = λ/Δλ may be constant or vary with wavelength.
//! Because a Gaussian of fixed width cannot describe a wavelength-dependent
//! resolution element, the spectrum is first resampled onto a grid whose step
//! is proportional to the local resolution element, so that every resolution
//! element spans the same number of grid samples. A single Gaussian is then
//! convolved over the resampled spectrum before it is interpolated back onto
//! the input wavelengths.
//!
//! The approximation is good when the resolving power varies smoothly.

mod error;
pub(crate) mod fft;

pub use error::ConvolveError;

use log::{debug, trace, warn};

use crate::{
    constants::{NYQUIST_SAMPLING, VEL_C},
    math::{fwhm_to_sigma, interp},
};
use fft::{convolve_extend, gaussian_kernel, kernel_half_width, MAX_FOLDED_KERNEL_HALF_WIDTH};

/// The resolving power (λ/Δλ) of an instrument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// The same resolving power at all wavelengths.
    Constant(f64),

    /// A resolving power for each wavelength of a spectrum.
    PerPoint(&'a [f64]),
}

impl Resolution<'static> {
    /// The constant resolving power corresponding to a velocity resolution
    /// \[km/s\], i.e. R = c / Δv.
    pub fn from_velocity_kms(dv: f64) -> Result<Resolution<'static>, ConvolveError> {
        if !(dv.is_finite() && dv > 0.0) {
            return Err(ConvolveError::InvalidVelocity(dv));
        }
        Ok(Resolution::Constant(VEL_C / (dv * 1e3)))
    }
}

impl Resolution<'_> {
    /// The resolving power at the sample `i`.
    fn at(&self, i: usize) -> f64 {
        match self {
            Resolution::Constant(r) => *r,
            Resolution::PerPoint(rs) => rs[i],
        }
    }

    fn validate(&self, num_waves: usize) -> Result<(), ConvolveError> {
        let check = |index: usize, value: f64| {
            if !value.is_finite() {
                Err(ConvolveError::NonFinite {
                    array: "resolving power",
                    index,
                    value,
                })
            } else if value <= 0.0 {
                Err(ConvolveError::NonPositiveResolution { index, value })
            } else {
                Ok(())
            }
        };

        match self {
            Resolution::Constant(r) => check(0, *r),
            Resolution::PerPoint(rs) => {
                if rs.len() != num_waves {
                    return Err(ConvolveError::ResolutionLengthMismatch {
                        wave: num_waves,
                        resolution: rs.len(),
                    });
                }
                rs.iter().enumerate().try_for_each(|(i, &r)| check(i, r))
            }
        }
    }
}

impl From<f64> for Resolution<'static> {
    fn from(r: f64) -> Self {
        Resolution::Constant(r)
    }
}

impl<'a> From<&'a [f64]> for Resolution<'a> {
    fn from(rs: &'a [f64]) -> Self {
        Resolution::PerPoint(rs)
    }
}

impl<'a> From<&'a Vec<f64>> for Resolution<'a> {
    fn from(rs: &'a Vec<f64>) -> Self {
        Resolution::PerPoint(rs)
    }
}

/// Everything about a resolution-degrading convolution that depends only on
/// the wavelengths and resolving power; the flux is supplied to
/// [ConvolutionPlan::apply]. A plan can be applied to any number of fluxes
/// sampled on the same wavelengths.
#[derive(Debug, Clone)]
pub struct ConvolutionPlan {
    /// The input wavelengths \[microns\].
    pub wave: Vec<f64>,

    /// The smallest spacing between consecutive input wavelengths.
    pub dw_min: f64,

    /// The smallest number of minimum-spacing samples per resolution element
    /// across the spectrum, before being floored.
    pub fwhm_s_unclamped: f64,

    /// The number of resampled-grid samples per resolution element. This is
    /// `fwhm_s_unclamped`, but never less than 2.
    pub fwhm_s: f64,

    /// The standard deviation of the Gaussian kernel \[resampled-grid
    /// samples\].
    pub sigma: f64,

    /// The resampled wavelengths. The step into each sample is its local
    /// resolution element divided by `fwhm_s`.
    pub grid: Vec<f64>,
}

impl ConvolutionPlan {
    /// Validate the wavelengths and resolving power and build the resampled
    /// grid.
    pub fn new<'a, R: Into<Resolution<'a>>>(
        wave: &[f64],
        resolution: R,
    ) -> Result<ConvolutionPlan, ConvolveError> {
        let resolution = resolution.into();
        validate_wavelengths(wave)?;
        resolution.validate(wave.len())?;

        // The FWHM of the resolution element at each wavelength.
        let fwhm: Vec<f64> = wave
            .iter()
            .enumerate()
            .map(|(i, &w)| w / resolution.at(i))
            .collect();

        let dw_min = wave
            .windows(2)
            .map(|w| w[1] - w[0])
            .fold(f64::INFINITY, f64::min);

        // The sampling of the most poorly sampled wavelength.
        let fwhm_s_unclamped = fwhm
            .iter()
            .map(|f| f / dw_min)
            .fold(f64::INFINITY, f64::min);
        let fwhm_s = fwhm_s_unclamped.max(NYQUIST_SAMPLING);
        if fwhm_s_unclamped < NYQUIST_SAMPLING {
            debug!(
                "Spectrum has only {fwhm_s_unclamped:.3} samples per resolution element; using {NYQUIST_SAMPLING}"
            );
        }

        let sigma = fwhm_to_sigma(fwhm_s);
        let half_width = kernel_half_width(sigma);
        if half_width >= wave.len() && half_width > MAX_FOLDED_KERNEL_HALF_WIDTH {
            return Err(ConvolveError::KernelTooWide {
                sigma,
                grid_len: wave.len(),
            });
        }

        let mut grid = Vec::with_capacity(wave.len());
        grid.push(wave[0]);
        let mut current = wave[0];
        for f in &fwhm[1..] {
            current += f / fwhm_s;
            grid.push(current);
        }

        let last_wave = wave[wave.len() - 1];
        if current < last_wave {
            warn!("The resampled wavelength grid ends at {current} um, before the spectrum's last wavelength ({last_wave} um); convolved fluxes beyond it take the edge value");
        }

        trace!("Convolution plan: dw_min = {dw_min}, fwhm_s = {fwhm_s}, sigma = {sigma}");

        Ok(ConvolutionPlan {
            wave: wave.to_vec(),
            dw_min,
            fwhm_s_unclamped,
            fwhm_s,
            sigma,
            grid,
        })
    }

    /// Convolve `flux`, sampled at this plan's wavelengths. The result is on
    /// the same wavelengths.
    pub fn apply(&self, flux: &[f64]) -> Result<Vec<f64>, ConvolveError> {
        if flux.len() != self.wave.len() {
            return Err(ConvolveError::LengthMismatch {
                wave: self.wave.len(),
                flux: flux.len(),
            });
        }
        if let Some((index, &value)) = flux.iter().enumerate().find(|(_, f)| !f.is_finite()) {
            return Err(ConvolveError::NonFinite {
                array: "flux",
                index,
                value,
            });
        }

        let resampled = interp(&self.grid, &self.wave, flux);
        let kernel = gaussian_kernel(self.sigma, self.grid.len() - 1);
        let smoothed = convolve_extend(&resampled, &kernel)?;
        Ok(interp(&self.wave, &self.grid, &smoothed))
    }
}

/// Convolve a spectrum to the given resolving power, which may be a single
/// value or one value per wavelength. Wavelengths are in microns and must be
/// strictly increasing; the flux may have any units, and the result has the
/// same units on the same wavelengths.
///
/// # Examples
///
/// ```
/// use spectools_ir::convolve;
///
/// let wave: Vec<f64> = (0..11).map(|i| 1.0 + i as f64 * 0.1).collect();
/// let flux = vec![1.0; 11];
/// let smoothed = convolve(&wave, &flux, 3000.0).unwrap();
/// assert_eq!(smoothed.len(), wave.len());
/// ```
pub fn convolve<'a, R: Into<Resolution<'a>>>(
    wave: &[f64],
    flux: &[f64],
    resolution: R,
) -> Result<Vec<f64>, ConvolveError> {
    if wave.len() != flux.len() {
        return Err(ConvolveError::LengthMismatch {
            wave: wave.len(),
            flux: flux.len(),
        });
    }
    ConvolutionPlan::new(wave, resolution)?.apply(flux)
}

fn validate_wavelengths(wave: &[f64]) -> Result<(), ConvolveError> {
    if wave.len() < 2 {
        return Err(ConvolveError::TooFewPoints(wave.len()));
    }
    for (index, &value) in wave.iter().enumerate() {
        if !value.is_finite() {
            return Err(ConvolveError::NonFinite {
                array: "wavelength",
                index,
                value,
            });
        }
        if value <= 0.0 {
            return Err(ConvolveError::NonPositiveWavelength { index, value });
        }
    }
    for (i, w) in wave.windows(2).enumerate() {
        if w[1] <= w[0] {
            return Err(ConvolveError::NotIncreasing {
                index: i + 1,
                previous: w[0],
                current: w[1],
            });
        }
    }
    Ok(())
}
