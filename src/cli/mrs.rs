// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Report the resolving power and wavelength coverage of JWST MIRI MRS.

use clap::Parser;
use log::{info, warn};
use strum::IntoEnumIterator;

use super::{
    common::{InfoPrinter, MRS_SUBBAND_HELP, WAVELENGTH_UNITS_HELP},
    SpectoolsError,
};
use crate::{
    instrument::{get_miri_mrs_resolution, MrsSubband},
    units::parse_wavelength_um,
};

#[derive(Parser, Debug)]
pub(super) struct MrsArgs {
    /// The wavelengths to report the resolving power at. If none are given,
    /// the sub-band wavelength coverage is reported.
    #[clap(name = "WAVELENGTHS", help_heading = "WAVELENGTHS", long_help = WAVELENGTH_UNITS_HELP.as_str())]
    wavelengths: Vec<String>,

    #[clap(short, long, help = MRS_SUBBAND_HELP.as_str())]
    subband: Option<String>,
}

impl MrsArgs {
    pub(super) fn run(self) -> Result<(), SpectoolsError> {
        let MrsArgs {
            wavelengths,
            subband,
        } = self;

        let subband = subband.as_deref().map(MrsSubband::from_name).transpose()?;
        let waves = wavelengths
            .iter()
            .map(|w| parse_wavelength_um(w))
            .collect::<Result<Vec<f64>, _>>()?;

        if waves.is_empty() {
            let mut printer = InfoPrinter::new("MIRI MRS wavelength coverage".into());
            let subbands: Vec<MrsSubband> = match subband {
                Some(s) => vec![s],
                None => MrsSubband::iter().collect(),
            };
            for s in subbands {
                let (w0, w1) = s.wavelength_range();
                printer.push_line(format!("{s}: {w0:5.2} - {w1:5.2} um").into());
            }
            printer.display();
            return Ok(());
        }

        let (covered, resolving_power) = match subband {
            Some(s) => waves
                .iter()
                .filter_map(|&w| s.resolving_power(w).map(|r| (w, r)))
                .unzip(),
            None => get_miri_mrs_resolution(&waves),
        };
        if covered.len() < waves.len() {
            warn!(
                "{} wavelength(s) are not covered and have been dropped",
                waves.len() - covered.len()
            );
        }

        let title = match subband {
            Some(s) => format!("MIRI MRS {s} resolving power"),
            None => "MIRI MRS resolving power".to_string(),
        };
        let mut printer = InfoPrinter::new(title.into());
        for (w, r) in covered.iter().zip(resolving_power.iter()) {
            printer.push_line(format!("{w:>9.4} um: R = {r:.1}").into());
        }
        printer.display();
        info!("Done.");

        Ok(())
    }
}
