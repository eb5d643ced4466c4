// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Print the identifiers and constants of a molecule.

use std::borrow::Cow;

use clap::Parser;
use log::info;

use super::{common::InfoPrinter, SpectoolsError};
use crate::{
    molecules::{
        compute_thermal_velocity, get_global_identifier, get_molecule_identifier, get_molmass,
        line_database, translate_molecule_identifier, LineDatabase,
    },
    LookupError,
};

#[derive(Parser, Debug)]
pub(super) struct MoleculeArgs {
    /// A molecular formula (e.g. CO) or a HITRAN molecule identifier (e.g.
    /// 5).
    #[clap(name = "MOLECULE")]
    molecule: String,

    /// The isotopologue number; 1 is the most abundant.
    #[clap(short, long, default_value = "1")]
    isotopologue: u8,

    /// Also report the thermal velocity at this temperature [K].
    #[clap(short, long)]
    temperature: Option<f64>,
}

impl MoleculeArgs {
    pub(super) fn run(self) -> Result<(), SpectoolsError> {
        let MoleculeArgs {
            molecule,
            isotopologue,
            temperature,
        } = self;

        let name = match molecule.trim().parse::<u32>() {
            Ok(id) => translate_molecule_identifier(id)?,
            Err(_) => molecule.trim(),
        };
        let database =
            line_database(name).ok_or_else(|| LookupError::UnknownMolecule(name.to_string()))?;

        let mut printer = InfoPrinter::new(format!("{name}_{isotopologue}").into());
        let mut ids: Vec<Cow<'static, str>> = vec![format!("Line database: {database}").into()];
        if database == LineDatabase::Hitran {
            ids.push(format!("HITRAN molecule identifier: {}", get_molecule_identifier(name)?).into());
        }
        ids.push(
            format!(
                "Global isotopologue identifier: {}",
                get_global_identifier(name, isotopologue)?
            )
            .into(),
        );
        printer.push_block(ids);
        printer.push_line(
            format!(
                "Molecular mass: {} amu",
                get_molmass(name, isotopologue)?
            )
            .into(),
        );
        if let Some(t) = temperature {
            let v = compute_thermal_velocity(name, t, isotopologue)?;
            printer.push_line(format!("Thermal velocity at {t} K: {:.4} km/s", v / 1e3).into());
        }
        printer.display();
        info!("Done.");

        Ok(())
    }
}
