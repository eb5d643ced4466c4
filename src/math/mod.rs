// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.


use std::f64::consts::TAU;

use crate::constants::FWHM_FACTOR;

/// An area-normalised Gaussian evaluated at `x`.
///
/// # Examples
///
/// `assert_abs_diff_eq!(gaussian(0.0, 0.0, 1.0, 1.0), 0.3989422804014327);`
pub fn gaussian(x: f64, mean: f64, sigma: f64, area: f64) -> f64 {
    let u = ((x - mean) / sigma.abs()).powi(2);
    let norm = area / (TAU.sqrt() * sigma);
    norm * (-0.5 * u).exp()
}

/// Convert the standard deviation of a Gaussian to its full width at half
/// maximum.
#[inline]
pub fn sigma_to_fwhm(sigma: f64) -> f64 {
    sigma * FWHM_FACTOR
}

/// Convert the full width at half maximum of a Gaussian to its standard
/// deviation.
#[inline]
pub fn fwhm_to_sigma(fwhm: f64) -> f64 {
    fwhm / FWHM_FACTOR
}

/// One-dimensional piecewise-linear interpolation of the points (`xp`, `fp`)
/// at each of `x`. `xp` must be increasing. Values of `x` outside of `xp` are
/// given the nearest edge value of `fp`, and NaN inputs produce NaN.
///
/// # Panics
///
/// Panics if `xp` is empty or shorter than `fp`.
pub fn interp(x: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    debug_assert_eq!(xp.len(), fp.len());
    let last = xp.len() - 1;
    x.iter()
        .map(|&x| {
            if x.is_nan() {
                f64::NAN
            } else if x <= xp[0] {
                fp[0]
            } else if x >= xp[last] {
                fp[last]
            } else {
                // The first index with xp > x; this is always within 1..=last
                // here.
                let i = xp.partition_point(|&v| v <= x);
                let (x0, x1) = (xp[i - 1], xp[i]);
                let t = (x - x0) / (x1 - x0);
                fp[i - 1] + t * (fp[i] - fp[i - 1])
            }
        })
        .collect()
}

/// Integrate `y` over `x` with the trapezoidal rule.
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(x, y)| 0.5 * (x[1] - x[0]) * (y[0] + y[1]))
        .sum()
}
