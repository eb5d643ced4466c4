// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
JWST MIRI Medium Resolution Spectrometer (MRS) properties.

The resolving power of each sub-band is a linear function of wavelength,
R = A + Bλ, valid for w0 < λ ≤ w1.
 */


use itertools::Itertools;
use log::trace;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::LookupError;

/// The twelve MIRI MRS sub-bands (four channels, three gratings each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum MrsSubband {
    #[strum(serialize = "1A")]
    Ch1A,
    #[strum(serialize = "1B")]
    Ch1B,
    #[strum(serialize = "1C")]
    Ch1C,
    #[strum(serialize = "2A")]
    Ch2A,
    #[strum(serialize = "2B")]
    Ch2B,
    #[strum(serialize = "2C")]
    Ch2C,
    #[strum(serialize = "3A")]
    Ch3A,
    #[strum(serialize = "3B")]
    Ch3B,
    #[strum(serialize = "3C")]
    Ch3C,
    #[strum(serialize = "4A")]
    Ch4A,
    #[strum(serialize = "4B")]
    Ch4B,
    #[strum(serialize = "4C")]
    Ch4C,
}

lazy_static::lazy_static! {
    pub static ref MRS_SUBBANDS_COMMA_SEPARATED: String = MrsSubband::iter().join(", ");
}

/// The linear resolving-power model of a sub-band.
#[derive(Debug, Clone, Copy)]
struct ResolutionModel {
    /// Exclusive lower wavelength bound \[microns\].
    w0: f64,
    /// Inclusive upper wavelength bound \[microns\].
    w1: f64,
    a: f64,
    b: f64,
}

impl MrsSubband {
    /// Parse a sub-band name like "1A" (case insensitive).
    pub fn from_name(name: &str) -> Result<MrsSubband, LookupError> {
        name.trim()
            .parse()
            .map_err(|_| LookupError::UnknownSubband(name.to_string()))
    }

    fn resolution_model(self) -> ResolutionModel {
        let (w0, w1, a, b) = match self {
            MrsSubband::Ch1A => (4.90, 5.74, -19.5, 572.0),
            MrsSubband::Ch1B => (5.66, 6.63, 2742.0, 150.0),
            MrsSubband::Ch1C => (6.53, 7.65, -543.0, 601.0),
            MrsSubband::Ch2A => (7.51, 8.77, 332.0, 400.0),
            MrsSubband::Ch2B => (8.67, 10.13, -331.0, 400.0),
            MrsSubband::Ch2C => (10.02, 11.70, 430.0, 264.0),
            MrsSubband::Ch3A => (11.55, 13.47, -5120.0, 633.0),
            MrsSubband::Ch3B => (13.34, 15.57, -1871.0, 317.0),
            MrsSubband::Ch3C => (15.41, 17.98, -2440.0, 312.0),
            MrsSubband::Ch4A => (17.70, 20.95, -2066.0, 225.0),
            MrsSubband::Ch4B => (20.69, 24.48, -1076.0, 150.0),
            MrsSubband::Ch4C => (24.19, 28.10, -3451.0, 216.0),
        };
        ResolutionModel { w0, w1, a, b }
    }

    /// The resolving power of this sub-band at `wave` \[microns\], or `None`
    /// if the resolution model doesn't cover it.
    pub fn resolving_power(self, wave: f64) -> Option<f64> {
        let m = self.resolution_model();
        if m.w0 < wave && wave <= m.w1 {
            Some(m.a + m.b * wave)
        } else {
            None
        }
    }

    /// The nominal wavelength coverage of this sub-band \[microns\].
    pub fn wavelength_range(self) -> (f64, f64) {
        match self {
            MrsSubband::Ch1A => (4.87, 5.82),
            MrsSubband::Ch1B => (5.62, 6.73),
            MrsSubband::Ch1C => (6.49, 7.76),
            MrsSubband::Ch2A => (7.45, 8.90),
            MrsSubband::Ch2B => (8.61, 10.28),
            MrsSubband::Ch2C => (9.91, 11.87),
            MrsSubband::Ch3A => (11.47, 13.67),
            MrsSubband::Ch3B => (13.25, 15.80),
            MrsSubband::Ch3C => (15.30, 18.24),
            MrsSubband::Ch4A => (17.54, 21.10),
            MrsSubband::Ch4B => (20.44, 24.72),
            MrsSubband::Ch4C => (23.84, 28.82),
        }
    }
}

/// The lowest resolving power over all sub-bands covering `wave`.
fn min_resolving_power(wave: f64) -> Option<f64> {
    MrsSubband::iter()
        .filter_map(|s| s.resolving_power(wave))
        .reduce(f64::min)
}

/// Get the MIRI MRS resolving power at the given wavelengths \[microns\].
///
/// The returned wavelengths are the unique input wavelengths covered by at
/// least one sub-band, in increasing order. Where sub-bands overlap, the
/// lowest resolving power is used. Wavelengths no sub-band covers are
/// dropped.
pub fn get_miri_mrs_resolution(waves: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut covered: Vec<(f64, f64)> = waves
        .iter()
        .filter_map(|&w| min_resolving_power(w).map(|r| (w, r)))
        .collect();
    covered.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));
    covered.dedup_by(|a, b| a.0 == b.0);
    trace!(
        "{} of {} wavelengths are covered by MIRI MRS",
        covered.len(),
        waves.len()
    );

    covered.into_iter().unzip()
}

/// Get the MIRI MRS resolving power for each of `waves` \[microns\], keeping
/// the input order. The result can be given directly to
/// [crate::convolve()]. Every wavelength must be covered by a sub-band.
pub fn mrs_resolving_power(waves: &[f64]) -> Result<Vec<f64>, LookupError> {
    waves
        .iter()
        .map(|&w| min_resolving_power(w).ok_or(LookupError::OutsideMrsCoverage(w)))
        .collect()
}

/// Get the nominal wavelength coverage \[microns\] of a MIRI MRS sub-band
/// named like "1A".
pub fn get_miri_mrs_wavelengths(subband: &str) -> Result<(f64, f64), LookupError> {
    Ok(MrsSubband::from_name(subband)?.wavelength_range())
}
