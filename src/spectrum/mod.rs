// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading and writing plain-text spectra.
//!
//! A spectrum file has whitespace-separated columns; the first is the
//! wavelength \[microns\] and the second the flux. Any further columns are
//! ignored. Lines starting with `#` and blank lines are skipped.

mod error;

pub use error::SpectrumReadError;

use std::io::{BufRead, Write};

use log::trace;

/// A sampled spectrum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    /// Wavelengths \[microns\].
    pub wave: Vec<f64>,

    pub flux: Vec<f64>,
}

/// Read a spectrum from a buffer.
pub fn read_spectrum<R: BufRead>(buf: &mut R) -> Result<Spectrum, SpectrumReadError> {
    let mut spectrum = Spectrum::default();
    let mut line = String::new();
    let mut line_num = 0;

    let parse_float = |string: &str, line_num: usize| -> Result<f64, SpectrumReadError> {
        string.parse().map_err(|_| SpectrumReadError::ParseFloat {
            line_num,
            string: string.to_string(),
        })
    };

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            line.clear();
            continue;
        }

        let columns: Vec<&str> = trimmed.split_whitespace().take(2).collect();
        match columns.as_slice() {
            [wave, flux] => {
                spectrum.wave.push(parse_float(wave, line_num)?);
                spectrum.flux.push(parse_float(flux, line_num)?);
            }
            _ => {
                return Err(SpectrumReadError::TooFewColumns {
                    line_num,
                    found: columns.len(),
                })
            }
        }
        line.clear();
    }

    if spectrum.wave.is_empty() {
        return Err(SpectrumReadError::Empty);
    }
    trace!("Read {} spectrum samples", spectrum.wave.len());
    Ok(spectrum)
}

/// Write a spectrum as two columns. Values are written with enough precision
/// to be read back exactly.
pub fn write_spectrum<W: Write>(
    buf: &mut W,
    wave: &[f64],
    flux: &[f64],
) -> Result<(), std::io::Error> {
    writeln!(buf, "# wave flux")?;
    for (w, f) in wave.iter().zip(flux) {
        writeln!(buf, "{w:e} {f:e}")?;
    }
    Ok(())
}
