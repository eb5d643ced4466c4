// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsing of the fixed-width CH3+ line list (Changala et al. 2023).

use std::io::BufRead;

use log::trace;
use serde::{Deserialize, Serialize};

use super::{parse_f64, parse_int, LineListError, SpectralLine};
use crate::{
    constants::MICRONS_PER_CM,
    units::{k_to_wn, wn_to_k},
};

/// The number of header rows before the first record.
const NUM_HEADER_ROWS: usize = 2;

/// Column widths of a record, in order.
const COLUMN_WIDTHS: [usize; 10] = [6, 30, 30, 11, 15, 13, 15, 15, 7, 7];

/// A single CH3+ transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ch3pLine {
    pub nr: u32,
    pub lev_up: String,
    pub lev_low: String,

    /// Transition wavelength \[microns\].
    pub wave: f64,

    pub frequency: f64,

    /// Einstein A coefficient \[s^-1\].
    pub a: f64,

    pub eupper: f64,

    /// Lower-state energy \[cm^-1\]. The file lists this in K.
    pub elower: f64,

    pub gp: f64,
    pub gpp: f64,

    /// Wavenumber \[cm^-1\].
    pub wn: f64,

    /// Upper-state energy \[K\].
    pub eup_k: f64,
}

impl SpectralLine for Ch3pLine {
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
}

/// Split a record into its fixed-width columns. Columns past the end of the
/// record are `None`.
fn split_columns(record: &str) -> [Option<&str>; 10] {
    let mut columns = [None; 10];
    let mut start = 0;
    for (column, width) in columns.iter_mut().zip(COLUMN_WIDTHS) {
        if start < record.len() {
            let end = (start + width).min(record.len());
            *column = Some(&record[start..end]);
        }
        start += width;
    }
    columns
}

fn parse_record(record: &str, line_num: usize) -> Result<Ch3pLine, LineListError> {
    if !record.is_ascii() {
        return Err(LineListError::NonAscii(line_num));
    }
    let columns = split_columns(record);
    let column = |i: usize, field: &'static str| {
        columns[i]
            .filter(|c| !c.trim().is_empty())
            .ok_or(LineListError::MissingColumn { line_num, field })
    };
    let float = |i, field| column(i, field).and_then(|c| parse_f64(c, line_num, field));

    let wave = float(3, "wave")?;
    let wn = MICRONS_PER_CM / wave;
    let elower = k_to_wn(float(7, "elower")?);

    Ok(Ch3pLine {
        nr: parse_int(column(0, "nr")?, line_num, "nr")?,
        lev_up: columns[1].unwrap_or_default().trim().to_string(),
        lev_low: columns[2].unwrap_or_default().trim().to_string(),
        wave,
        frequency: float(4, "frequency")?,
        a: float(5, "a")?,
        eupper: float(6, "eupper")?,
        elower,
        gp: float(8, "gp")?,
        gpp: float(9, "gpp")?,
        wn,
        eup_k: wn_to_k(wn + elower),
    })
}

/// Parse a buffer containing the CH3+ line list. The first two rows are
/// headers; blank lines are skipped.
pub fn parse_ch3p<R: BufRead>(buf: &mut R) -> Result<Vec<Ch3pLine>, LineListError> {
    let mut lines = vec![];
    let mut line = String::new();
    let mut line_num = 0;

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;
        let record = line.trim_end_matches(&['\n', '\r'][..]);
        if line_num <= NUM_HEADER_ROWS || record.trim().is_empty() {
            line.clear();
            continue;
        }

        lines.push(parse_record(record, line_num)?);
        line.clear();
    }

    trace!("Parsed {} CH3+ records from {line_num} lines", lines.len());
    Ok(lines)
}
