// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsing of HITRAN2004+ ("160-character") `.par` records.
//!
//! See for more info:
//! <https://hitran.org/media/refs/HITRAN_QN_formats.pdf>

use std::io::BufRead;

use log::trace;
use serde::{Deserialize, Serialize};

use super::{parse_f64, parse_int, LineListError, SpectralLine};
use crate::{
    constants::{MICRONS_PER_CM, VEL_C_CGS},
    units::wn_to_k,
};

/// The number of characters in a HITRAN2004+ record.
pub const HITRAN_RECORD_LENGTH: usize = 160;

/// A single HITRAN transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitranLine {
    /// HITRAN molecule identifier.
    pub molec_id: u32,

    /// Isotopologue number within the molecule (1 is the most abundant).
    pub local_iso_id: u8,

    /// Line centre \[cm^-1\].
    pub wn: f64,

    /// Line intensity at 296 K \[cm^-1 / (molecule cm^-2)\].
    pub sw: f64,

    /// Einstein A coefficient \[s^-1\].
    pub a: f64,

    /// Air-broadened half width at half maximum \[cm^-1 atm^-1\].
    pub gamma_air: f64,

    /// Self-broadened half width at half maximum \[cm^-1 atm^-1\].
    pub gamma_self: f64,

    /// Lower-state energy \[cm^-1\].
    pub elower: f64,

    /// Temperature-dependence exponent of `gamma_air`.
    pub n_air: f64,

    /// Air-pressure-induced line shift \[cm^-1 atm^-1\].
    pub delta_air: f64,

    /// Upper-state global quanta.
    pub vp: String,
    /// Lower-state global quanta.
    pub vpp: String,
    /// Upper-state local quanta.
    pub qp: String,
    /// Lower-state local quanta.
    pub qpp: String,

    /// Uncertainty indices.
    pub ierr: String,
    /// Reference indices.
    pub iref: String,

    pub line_mixing_flag: char,

    /// Statistical weight of the upper state.
    pub gp: f64,
    /// Statistical weight of the lower state.
    pub gpp: f64,

    /// Transition frequency \[Hz\].
    pub nu: f64,

    /// Upper-state energy \[K\].
    pub eup_k: f64,

    /// Transition wavelength \[microns\].
    pub wave: f64,
}

impl SpectralLine for HitranLine {
    fn wave(&self) -> f64 {
        self.wave
    }

    fn wn(&self) -> f64 {
        self.wn
    }

    fn eup_k(&self) -> f64 {
        self.eup_k
    }

    fn einstein_a(&self) -> f64 {
        self.a
    }

    fn gup(&self) -> f64 {
        self.gp
    }

    fn local_iso_id(&self) -> Option<u8> {
        Some(self.local_iso_id)
    }

    fn line_strength(&self) -> Option<f64> {
        Some(self.sw)
    }

    fn upper_global_quanta(&self) -> Option<&str> {
        Some(&self.vp)
    }
}

/// HITRAN packs isotopologue numbers above 9 into one character.
fn parse_isotopologue(c: char, line_num: usize) -> Result<u8, LineListError> {
    match c {
        '1'..='9' => Ok(c as u8 - b'0'),
        '0' => Ok(10),
        'A' => Ok(11),
        'B' => Ok(12),
        _ => Err(LineListError::InvalidIsotopologue { line_num, iso: c }),
    }
}

fn parse_record(record: &str, line_num: usize) -> Result<HitranLine, LineListError> {
    if !record.is_ascii() {
        return Err(LineListError::NonAscii(line_num));
    }
    if record.len() < HITRAN_RECORD_LENGTH {
        return Err(LineListError::ShortRecord {
            line_num,
            len: record.len(),
            expected: HITRAN_RECORD_LENGTH,
        });
    }

    let float = |range: std::ops::Range<usize>, field| parse_f64(&record[range], line_num, field);
    let text = |range: std::ops::Range<usize>| record[range].trim().to_string();
    let bytes = record.as_bytes();

    let molec_id = parse_int(&record[0..2], line_num, "molec_id")?;
    let local_iso_id = parse_isotopologue(bytes[2] as char, line_num)?;
    let wn = float(3..15, "wn")?;
    let elower = float(45..55, "elower")?;

    Ok(HitranLine {
        molec_id,
        local_iso_id,
        wn,
        sw: float(15..25, "sw")?,
        a: float(25..35, "a")?,
        gamma_air: float(35..40, "gamma_air")?,
        gamma_self: float(40..45, "gamma_self")?,
        elower,
        n_air: float(55..59, "n_air")?,
        delta_air: float(59..67, "delta_air")?,
        vp: text(67..82),
        vpp: text(82..97),
        qp: text(97..112),
        qpp: text(112..127),
        ierr: record[127..133].to_string(),
        iref: record[133..145].to_string(),
        line_mixing_flag: bytes[145] as char,
        gp: float(146..153, "gp")?,
        gpp: float(153..160, "gpp")?,
        nu: wn * VEL_C_CGS,
        eup_k: wn_to_k(wn + elower),
        wave: MICRONS_PER_CM / wn,
    })
}

/// Parse a buffer of HITRAN2004+ records. Any malformed record aborts
/// parsing; blank lines are skipped.
pub fn parse_par<R: BufRead>(buf: &mut R) -> Result<Vec<HitranLine>, LineListError> {
    let mut lines = vec![];
    let mut line = String::new();
    let mut line_num = 0;

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;
        let record = line.trim_end_matches(&['\n', '\r'][..]);
        if record.trim().is_empty() {
            line.clear();
            continue;
        }

        lines.push(parse_record(record, line_num)?);
        line.clear();
    }

    trace!("Parsed {} HITRAN records from {line_num} lines", lines.len());
    Ok(lines)
}
