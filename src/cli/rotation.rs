// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Compute a rotation diagram from line fluxes.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
    str::FromStr,
};

use clap::Parser;
use itertools::Itertools;
use log::{debug, info};
use strum::IntoEnumIterator;

use super::{common::ROTATION_UNITS_HELP, SpectoolsError};
use crate::rotation::{make_rotation_diagram, LineFlux, RotationUnits};

#[derive(Parser, Debug)]
pub(super) struct RotationDiagramArgs {
    /// A JSON file containing an array of line fluxes. Each element has the
    /// keys eup_k [K], wn [cm^-1], gup, a [s^-1], lineflux [W m^-2] and
    /// optionally lineflux_err.
    #[clap(name = "LINE_FLUXES", parse(from_os_str))]
    line_fluxes: PathBuf,

    #[clap(short, long, help = ROTATION_UNITS_HELP.as_str())]
    units: Option<String>,

    /// Write the rotation diagram to this JSON file.
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

impl RotationDiagramArgs {
    pub(super) fn run(self) -> Result<(), SpectoolsError> {
        let RotationDiagramArgs {
            line_fluxes,
            units,
            output,
        } = self;

        let units = match units {
            None => RotationUnits::default(),
            Some(u) => RotationUnits::from_str(&u.to_lowercase()).map_err(|_| {
                SpectoolsError::Generic(format!(
                    "Rotation-diagram units '{u}' are not supported. Supported units: {}",
                    RotationUnits::iter().join(", ")
                ))
            })?,
        };

        debug!("Reading line fluxes from {}", line_fluxes.display());
        let lines: Vec<LineFlux> =
            serde_json::from_reader(BufReader::new(File::open(&line_fluxes)?))?;
        let rot = make_rotation_diagram(&lines, units);

        info!("Rotation diagram ({} units) of {} lines", rot.units, rot.x.len());
        info!("{:>10} {:>12} {:>10}", "E_up [K]", "y", "y_err");
        for (i, (x, y)) in rot.x.iter().zip(rot.y.iter()).enumerate() {
            match &rot.yerr {
                Some(yerr) => info!("{x:>10.1} {y:>12.5} {:>10.5}", yerr[i]),
                None => info!("{x:>10.1} {y:>12.5} {:>10}", "-"),
            }
        }

        if let Some(output) = output {
            let mut out = BufWriter::new(File::create(&output)?);
            serde_json::to_writer_pretty(&mut out, &rot)?;
            out.flush()?;
            info!("Wrote {}", output.display());
        }

        Ok(())
    }
}
