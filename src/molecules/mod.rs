// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Molecule metadata: HITRAN identifiers, molecular masses and the line
//! databases that species come from.

mod tables;
#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};

use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    constants::{ATOMIC_MASS_UNIT, BOLTZMANN_K},
    LookupError,
};
use tables::*;

lazy_static::lazy_static! {
    static ref MOLECULE_NAME_TO_ID: HashMap<&'static str, u32> =
        MOLECULE_IDENTIFIERS.iter().map(|&(id, name)| (name, id)).collect();

    static ref MOLECULE_ID_TO_NAME: HashMap<u32, &'static str> =
        MOLECULE_IDENTIFIERS.iter().copied().collect();

    static ref GLOBAL_ID_MAP: HashMap<&'static str, BTreeMap<u8, u32>> =
        by_isotopologue(GLOBAL_IDENTIFIERS);

    static ref MOLMASS_MAP: HashMap<&'static str, BTreeMap<u8, f64>> =
        by_isotopologue(MOLECULAR_MASSES);
}

fn by_isotopologue<T: Copy>(
    table: &[(&'static str, u8, T)],
) -> HashMap<&'static str, BTreeMap<u8, T>> {
    let mut map: HashMap<&'static str, BTreeMap<u8, T>> = HashMap::new();
    for &(name, iso, value) in table {
        map.entry(name).or_default().insert(iso, value);
    }
    map
}

fn lookup_isotopologue<T: Copy>(
    map: &HashMap<&'static str, BTreeMap<u8, T>>,
    molecule_name: &str,
    isotopologue_number: u8,
) -> Result<T, LookupError> {
    map.get(molecule_name)
        .and_then(|isos| isos.get(&isotopologue_number))
        .copied()
        .ok_or_else(|| LookupError::UnknownIsotopologue {
            molecule: molecule_name.to_string(),
            isotopologue: isotopologue_number,
        })
}

/// The databases that line lists are sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum LineDatabase {
    #[strum(serialize = "HITRAN")]
    Hitran,

    #[strum(serialize = "exomol")]
    Exomol,

    #[strum(serialize = "GEISA")]
    Geisa,

    #[strum(serialize = "other")]
    Other,
}

/// For a molecular formula (e.g. "CO"), get the HITRAN molecule identifier.
pub fn get_molecule_identifier(molecule_name: &str) -> Result<u32, LookupError> {
    MOLECULE_NAME_TO_ID
        .get(molecule_name)
        .copied()
        .ok_or_else(|| LookupError::UnknownMolecule(molecule_name.to_string()))
}

/// For a HITRAN molecule identifier, get the molecular formula.
pub fn translate_molecule_identifier(id: u32) -> Result<&'static str, LookupError> {
    MOLECULE_ID_TO_NAME
        .get(&id)
        .copied()
        .ok_or(LookupError::UnknownMoleculeId(id))
}

/// For a molecular formula and isotopologue number (1 is the most abundant),
/// get the HITRAN *global* isotopologue identifier.
pub fn get_global_identifier(
    molecule_name: &str,
    isotopologue_number: u8,
) -> Result<u32, LookupError> {
    lookup_isotopologue(&GLOBAL_ID_MAP, molecule_name, isotopologue_number)
}

/// For a molecular formula and isotopologue number (1 is the most abundant),
/// get the molecular mass \[amu\].
pub fn get_molmass(molecule_name: &str, isotopologue_number: u8) -> Result<f64, LookupError> {
    lookup_isotopologue(&MOLMASS_MAP, molecule_name, isotopologue_number)
}

/// Which database provides line data for this molecule? `None` if the
/// molecule isn't known.
pub fn line_database(molecule_name: &str) -> Option<LineDatabase> {
    if MOLECULE_NAME_TO_ID.contains_key(molecule_name) {
        Some(LineDatabase::Hitran)
    } else if EXOMOL_MOLECULES.contains(&molecule_name) {
        Some(LineDatabase::Exomol)
    } else if GEISA_MOLECULES.contains(&molecule_name) {
        Some(LineDatabase::Geisa)
    } else if OTHER_MOLECULES.contains(&molecule_name) {
        Some(LineDatabase::Other)
    } else {
        None
    }
}

/// The thermal velocity sqrt(k_B T / m) \[m/s\] of a molecule at temperature
/// `temp` \[K\].
pub fn compute_thermal_velocity(
    molecule_name: &str,
    temp: f64,
    isotopologue_number: u8,
) -> Result<f64, LookupError> {
    let m_amu = get_molmass(molecule_name, isotopologue_number)?;
    let mu = m_amu * ATOMIC_MASS_UNIT;
    Ok((BOLTZMANN_K * temp / mu).sqrt())
}
