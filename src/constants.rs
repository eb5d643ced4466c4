// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. Physical constants are the CODATA
2018 values.
 */

/// Speed of light \[m/s\]
pub const VEL_C: f64 = 299_792_458.0;

/// Speed of light \[cm/s\]
pub const VEL_C_CGS: f64 = VEL_C * 1e2;

/// Planck constant \[J s\]
pub const PLANCK_H: f64 = 6.626_070_15e-34;

/// Boltzmann constant \[J/K\]
pub const BOLTZMANN_K: f64 = 1.380_649e-23;

/// Atomic mass unit \[kg\]
pub const ATOMIC_MASS_UNIT: f64 = 1.660_539_066_60e-27;

/// Microns in a centimetre. A wavelength in microns is this divided by the
/// wavenumber in cm^-1.
pub const MICRONS_PER_CM: f64 = 1e4;

/// The ratio of a Gaussian's FWHM to its standard deviation, 2 sqrt(2 ln 2).
pub const FWHM_FACTOR: f64 = 2.354_820_045_030_949_3;

/// The smallest number of samples allowed per resolution element when
/// resampling a spectrum.
pub const NYQUIST_SAMPLING: f64 = 2.0;

/// Gaussian kernels extend this many standard deviations either side of their
/// centre.
pub const KERNEL_HALF_WIDTH_SIGMAS: f64 = 4.0;
