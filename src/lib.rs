// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Utilities for infrared molecular spectroscopy.

The centrepiece is [convolve()], which degrades a spectrum to an
instrumental resolving power that may vary with wavelength. Around it are
readers for HITRAN-format line lists, molecular constants, the resolving
power of JWST MIRI MRS and rotation diagrams.
 */

pub mod cli;
pub mod constants;
pub mod convolve;
mod error;
pub mod instrument;
pub mod linelist;
pub mod math;
pub mod molecules;
pub mod rotation;
pub mod spectrum;
pub mod units;

// Re-exports.
pub use cli::{Spectools, SpectoolsError};
pub use convolve::{convolve, ConvolutionPlan, ConvolveError, Resolution};
pub use error::LookupError;
pub use instrument::{
    get_miri_mrs_resolution, get_miri_mrs_wavelengths, mrs_resolving_power, MrsSubband,
};
pub use linelist::{
    extract_hitran_from_par, parse_ch3p, parse_par, read_par_file, Ch3pLine, HitranLine,
    LineFilter, LineListError, SpectralLine,
};
pub use molecules::{
    compute_thermal_velocity, get_global_identifier, get_molecule_identifier, get_molmass,
    translate_molecule_identifier,
};
pub use rotation::{make_rotation_diagram, LineFlux, RotationDiagram, RotationUnits};
pub use spectrum::{read_spectrum, write_spectrum, Spectrum, SpectrumReadError};
