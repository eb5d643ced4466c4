// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Code to read molecular line lists and select transitions from them.

Two formats are supported: HITRAN2004+ `.par` files and the fixed-width
CH3+ list. Both produce records implementing [SpectralLine], so downstream
code need not care where a line came from.
 */

mod ch3p;
mod error;
mod hitran;

pub use ch3p::{parse_ch3p, Ch3pLine};
pub use error::LineListError;
pub use hitran::{parse_par, HitranLine, HITRAN_RECORD_LENGTH};

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use flate2::read::MultiGzDecoder;
use itertools::Itertools;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The properties of a transition needed to analyse it, regardless of the
/// line list it came from.
pub trait SpectralLine {
    /// Wavelength \[microns\].
    fn wave(&self) -> f64;

    /// Wavenumber \[cm^-1\].
    fn wn(&self) -> f64;

    /// Upper-state energy \[K\].
    fn eup_k(&self) -> f64;

    /// Einstein A coefficient \[s^-1\].
    fn einstein_a(&self) -> f64;

    /// Statistical weight of the upper state.
    fn gup(&self) -> f64;

    /// The isotopologue number, if the line list records one.
    fn local_iso_id(&self) -> Option<u8> {
        None
    }

    /// The line intensity, if the line list records one.
    fn line_strength(&self) -> Option<f64> {
        None
    }

    /// The upper-state global quanta, if the line list records them.
    fn upper_global_quanta(&self) -> Option<&str> {
        None
    }
}

/// The supported line-list formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum LineListType {
    /// HITRAN2004+ 160-character records.
    #[strum(serialize = "hitran")]
    Hitran,

    /// The fixed-width CH3+ list.
    #[strum(serialize = "ch3p")]
    Ch3p,
}

lazy_static::lazy_static! {
    pub static ref LINE_LIST_TYPES_COMMA_SEPARATED: String = LineListType::iter().join(", ");
}

/// Criteria for selecting transitions. Every criterion is optional; a line
/// is kept only if it satisfies all of those given. Criteria on a quantity
/// a line list doesn't record are ignored for that list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineFilter {
    /// Keep lines with wavelengths greater than this \[microns\].
    pub wavemin: Option<f64>,

    /// Keep lines with wavelengths less than this \[microns\].
    pub wavemax: Option<f64>,

    /// Keep lines of this isotopologue.
    pub isotopologue: Option<u8>,

    /// Keep lines with upper-state energies less than this \[K\].
    pub eupmax: Option<f64>,

    /// Keep lines with Einstein A coefficients greater than this \[s^-1\].
    pub aupmin: Option<f64>,

    /// Keep lines with intensities greater than this.
    pub swmin: Option<f64>,

    /// Keep lines whose upper-state global quanta are this integer.
    pub vup: Option<i64>,
}

impl LineFilter {
    /// Does this line satisfy every criterion?
    pub fn matches<L: SpectralLine>(&self, line: &L) -> bool {
        let wave = line.wave();
        if self.wavemin.map_or(false, |min| !(wave > min))
            || self.wavemax.map_or(false, |max| !(wave < max))
            || self.eupmax.map_or(false, |max| !(line.eup_k() < max))
            || self.aupmin.map_or(false, |min| !(line.einstein_a() > min))
        {
            return false;
        }

        if let (Some(iso), Some(line_iso)) = (self.isotopologue, line.local_iso_id()) {
            if iso != line_iso {
                return false;
            }
        }
        if let (Some(min), Some(sw)) = (self.swmin, line.line_strength()) {
            if !(sw > min) {
                return false;
            }
        }
        if let (Some(vup), Some(quanta)) = (self.vup, line.upper_global_quanta()) {
            // Quanta that aren't a single integer never match.
            if quanta.trim().parse::<i64>().ok() != Some(vup) {
                return false;
            }
        }

        true
    }

    /// Keep the lines satisfying every criterion, in their original order.
    pub fn apply<L: SpectralLine>(&self, lines: Vec<L>) -> Vec<L> {
        lines.into_iter().filter(|l| self.matches(l)).collect()
    }
}

fn parse_f64(s: &str, line_num: usize, field: &'static str) -> Result<f64, LineListError> {
    s.trim().parse().map_err(|_| LineListError::ParseFloat {
        line_num,
        field,
        string: s.to_string(),
    })
}

fn parse_int<T: FromStr>(s: &str, line_num: usize, field: &'static str) -> Result<T, LineListError> {
    s.trim().parse().map_err(|_| LineListError::ParseInt {
        line_num,
        field,
        string: s.to_string(),
    })
}

/// Open a line-list file for buffered reading. Files ending in `.gz` are
/// decompressed on the fly.
fn open_line_list(path: &Path) -> Result<Box<dyn BufRead>, LineListError> {
    if !path.exists() {
        return Err(LineListError::FileNotFound(path.to_path_buf()));
    }
    info!("Reading \"{}\" ...", path.display());

    let file = File::open(path)?;
    let is_gzipped = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("gz"));
    if is_gzipped {
        debug!("Decompressing {} with gzip", path.display());
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read every record of a HITRAN2004+ `.par` file (optionally gzipped).
pub fn read_par_file<P: AsRef<Path>>(path: P) -> Result<Vec<HitranLine>, LineListError> {
    let mut buf = open_line_list(path.as_ref())?;
    parse_par(&mut buf)
}

/// Read every record of a CH3+ line-list file (optionally gzipped).
pub fn read_ch3p_file<P: AsRef<Path>>(path: P) -> Result<Vec<Ch3pLine>, LineListError> {
    let mut buf = open_line_list(path.as_ref())?;
    parse_ch3p(&mut buf)
}

/// Read a HITRAN2004+ `.par` file and keep the lines satisfying `filter`. If
/// the filter doesn't name an isotopologue, only isotopologue 1 is kept.
pub fn extract_hitran_from_par<P: AsRef<Path>>(
    path: P,
    filter: &LineFilter,
) -> Result<Vec<HitranLine>, LineListError> {
    let filter = LineFilter {
        isotopologue: Some(filter.isotopologue.unwrap_or(1)),
        ..filter.clone()
    };
    let lines = read_par_file(path)?;
    let num_read = lines.len();
    let lines = filter.apply(lines);
    debug!("Kept {} of {num_read} HITRAN lines", lines.len());
    Ok(lines)
}

/// Read a CH3+ line-list file and keep the lines satisfying `filter`.
pub fn extract_ch3p<P: AsRef<Path>>(
    path: P,
    filter: &LineFilter,
) -> Result<Vec<Ch3pLine>, LineListError> {
    let lines = read_ch3p_file(path)?;
    let num_read = lines.len();
    let lines = filter.apply(lines);
    debug!("Kept {} of {num_read} CH3+ lines", lines.len());
    Ok(lines)
}
