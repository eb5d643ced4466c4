// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rotation diagrams: the log of each line's flux per upper-state population
//! against its upper-state energy.


use log::warn;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::linelist::SpectralLine;

/// The unit system of a rotation diagram's y axis.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RotationUnits {
    /// Fluxes in W m^-2, wavenumbers in m^-1.
    #[default]
    #[strum(serialize = "mks")]
    Mks,

    /// Fluxes in erg s^-1 cm^-2, wavenumbers in cm^-1.
    #[strum(serialize = "cgs")]
    Cgs,

    /// Fluxes in W m^-2, wavenumbers in cm^-1.
    #[strum(serialize = "mixed")]
    Mixed,
}

/// A measured line flux and the properties of its transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineFlux {
    /// Upper-state energy \[K\].
    pub eup_k: f64,

    /// Wavenumber \[cm^-1\].
    pub wn: f64,

    /// Statistical weight of the upper state.
    pub gup: f64,

    /// Einstein A coefficient \[s^-1\].
    pub a: f64,

    /// Line flux \[W m^-2\].
    pub lineflux: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineflux_err: Option<f64>,
}

impl LineFlux {
    /// Attach a measured flux to a transition from a line list.
    pub fn from_line<L: SpectralLine>(line: &L, lineflux: f64, lineflux_err: Option<f64>) -> Self {
        LineFlux {
            eup_k: line.eup_k(),
            wn: line.wn(),
            gup: line.gup(),
            a: line.einstein_a(),
            lineflux,
            lineflux_err,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationDiagram {
    /// Upper-state energies \[K\].
    pub x: Vec<f64>,

    pub y: Vec<f64>,

    /// The uncertainties on `y`. Only present if every line flux has an
    /// uncertainty.
    pub yerr: Option<Vec<f64>>,

    pub units: RotationUnits,
}

/// Compute rotation-diagram coordinates for some line fluxes.
pub fn make_rotation_diagram(lines: &[LineFlux], units: RotationUnits) -> RotationDiagram {
    let y = lines
        .iter()
        .map(|l| {
            let per_population = l.wn * l.gup * l.a;
            match units {
                RotationUnits::Mks => (l.lineflux / (per_population * 1e2)).ln(),
                RotationUnits::Cgs => (1e3 * l.lineflux / per_population).ln(),
                RotationUnits::Mixed => (l.lineflux / per_population).ln(),
            }
        })
        .collect::<Vec<f64>>();
    let num_undefined = y.iter().filter(|y| !y.is_finite()).count();
    if num_undefined > 0 {
        warn!("{num_undefined} line(s) have non-positive fluxes or transition properties; their rotation-diagram values are undefined");
    }

    let yerr = lines
        .iter()
        .map(|l| l.lineflux_err.map(|err| err / l.lineflux))
        .collect::<Option<Vec<f64>>>();

    RotationDiagram {
        x: lines.iter().map(|l| l.eup_k).collect(),
        y,
        yerr,
        units,
    }
}
