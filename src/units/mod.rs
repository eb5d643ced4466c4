// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Unit conversions between wavenumber, wavelength, frequency and energy
//! expressed as a temperature, and code to parse strings into wavelengths.

mod error;
#[cfg(test)]
mod tests;

pub use error::UnitParseError;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::constants::{BOLTZMANN_K, MICRONS_PER_CM, PLANCK_H, VEL_C, VEL_C_CGS};

/// Convert a wavenumber \[cm^-1\] to the equivalent energy expressed as a
/// temperature \[K\], i.e. E/k_B = ν̃ h c / k_B.
#[inline]
pub fn wn_to_k(wn: f64) -> f64 {
    // cm^-1 -> m^-1
    wn * 1e2 * PLANCK_H * VEL_C / BOLTZMANN_K
}

/// Convert an energy expressed as a temperature \[K\] to a wavenumber
/// \[cm^-1\]. The inverse of [wn_to_k].
#[inline]
pub fn k_to_wn(kelvin: f64) -> f64 {
    kelvin * BOLTZMANN_K / (PLANCK_H * VEL_C) / 1e2
}

/// Convert a wavenumber \[cm^-1\] to a wavelength \[microns\].
#[inline]
pub fn wn_to_wave_um(wn: f64) -> f64 {
    MICRONS_PER_CM / wn
}

/// Convert a wavelength \[microns\] to a wavenumber \[cm^-1\].
#[inline]
pub fn wave_um_to_wn(wave_um: f64) -> f64 {
    MICRONS_PER_CM / wave_um
}

/// Convert a wavenumber \[cm^-1\] to a frequency \[Hz\].
#[inline]
pub fn wn_to_freq_hz(wn: f64) -> f64 {
    wn * VEL_C_CGS
}

/// Units that a wavelength may be specified with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum WavelengthUnit {
    /// Microns
    #[strum(serialize = "um")]
    Um,

    /// Microns
    #[strum(serialize = "micron")]
    Micron,

    /// Nanometres
    #[strum(serialize = "nm")]
    Nm,

    /// Angstroms
    #[strum(serialize = "A")]
    Angstrom,

    /// A wavenumber \[cm^-1\]
    #[strum(serialize = "cm-1")]
    Wavenumber,

    /// A naked number; microns are assumed.
    #[strum(serialize = "")]
    NoUnit,
}

impl WavelengthUnit {
    /// Convert a value in these units to a wavelength in microns.
    pub fn to_microns(self, value: f64) -> f64 {
        match self {
            WavelengthUnit::Um | WavelengthUnit::Micron | WavelengthUnit::NoUnit => value,
            WavelengthUnit::Nm => value * 1e-3,
            WavelengthUnit::Angstrom => value * 1e-4,
            WavelengthUnit::Wavenumber => wn_to_wave_um(value),
        }
    }
}

/// Parse a string that may have a unit of wavelength (or wavenumber) attached
/// to it.
pub fn parse_wavelength(s: &str) -> Result<(f64, WavelengthUnit), UnitParseError> {
    let s = s.trim();

    // Try to parse a naked number.
    let maybe_number: Option<f64> = s.parse().ok();
    if let Some(number) = maybe_number {
        return Ok((number, WavelengthUnit::NoUnit));
    };

    // That didn't work; let's search over our supported units.
    let lowercase = s.to_lowercase();
    for unit in WavelengthUnit::iter().filter(|&u| u != WavelengthUnit::NoUnit) {
        let unit_str: &'static str = unit.into();
        if let Some(prefix) = lowercase.strip_suffix(&unit_str.to_lowercase()) {
            let number: f64 = match prefix.trim().parse() {
                Ok(n) => n,
                Err(_) => {
                    return Err(UnitParseError::GotUnitButCantParse {
                        input: s.to_string(),
                        unit: unit_str,
                    })
                }
            };
            return Ok((number, unit));
        }
    }

    // If we made it this far, we don't know how to parse the string.
    Err(UnitParseError::Unknown {
        input: s.to_string(),
        unit_type: "wavelength",
    })
}

/// Parse a string that may have a unit of wavelength (or wavenumber) attached
/// to it, and return the wavelength in microns. The result must be positive.
pub fn parse_wavelength_um(s: &str) -> Result<f64, UnitParseError> {
    let (value, unit) = parse_wavelength(s)?;
    let microns = unit.to_microns(value);
    if microns.is_finite() && microns > 0.0 {
        Ok(microns)
    } else {
        Err(UnitParseError::NotPositive(s.trim().to_string()))
    }
}
