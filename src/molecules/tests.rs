// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use super::*;

#[test]
fn test_molecule_identifier() {
    assert_eq!(get_molecule_identifier("CO"), Ok(5));
    assert_eq!(get_molecule_identifier("H2O"), Ok(1));
    assert_eq!(get_molecule_identifier("SO3"), Ok(47));
    assert_eq!(
        get_molecule_identifier("XYZ"),
        Err(LookupError::UnknownMolecule("XYZ".to_string()))
    );
    // Formulae are case sensitive.
    assert!(get_molecule_identifier("co").is_err());
}

#[test]
fn test_identifiers_round_trip() {
    for id in 1..=47 {
        let name = translate_molecule_identifier(id).unwrap();
        assert_eq!(get_molecule_identifier(name), Ok(id));
    }
    assert_eq!(translate_molecule_identifier(5), Ok("CO"));
    assert_eq!(
        translate_molecule_identifier(0),
        Err(LookupError::UnknownMoleculeId(0))
    );
    assert!(translate_molecule_identifier(48).is_err());
}

#[test]
fn test_global_identifier() {
    assert_eq!(get_global_identifier("H2O", 1), Ok(1));
    assert_eq!(get_global_identifier("H2O", 7), Ok(129));
    assert_eq!(get_global_identifier("CO", 1), Ok(26));
    assert_eq!(get_global_identifier("CO2", 12), Ok(122));
    assert_eq!(get_global_identifier("CH3Cl", 2), Ok(74));
    assert_eq!(get_global_identifier("SiO", 1), Ok(200));
    assert_eq!(get_global_identifier("CH3+", 1), Ok(400));
    assert_eq!(
        get_global_identifier("CO", 7),
        Err(LookupError::UnknownIsotopologue {
            molecule: "CO".to_string(),
            isotopologue: 7
        })
    );
    assert!(get_global_identifier("XYZ", 1).is_err());
}

#[test]
fn test_molmass() {
    assert_abs_diff_eq!(get_molmass("H2O", 1).unwrap(), 18.010565);
    assert_abs_diff_eq!(get_molmass("CO", 1).unwrap(), 27.994915);
    assert_abs_diff_eq!(get_molmass("CO", 2).unwrap(), 28.99827);
    assert_abs_diff_eq!(get_molmass("OCS", 6).unwrap(), 62.966136);
    assert_abs_diff_eq!(get_molmass("C3H4", 1).unwrap(), 40.06);
    assert!(matches!(
        get_molmass("XYZ", 1),
        Err(LookupError::UnknownIsotopologue { .. })
    ));
    assert!(get_molmass("H2O", 0).is_err());
}

#[test]
fn test_every_global_identifier_is_unique() {
    let mut ids: Vec<u32> = GLOBAL_IDENTIFIERS.iter().map(|&(_, _, id)| id).collect();
    let num_ids = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), num_ids);
}

#[test]
fn test_line_database() {
    assert_eq!(line_database("CO"), Some(LineDatabase::Hitran));
    assert_eq!(line_database("NO+"), Some(LineDatabase::Hitran));
    assert_eq!(line_database("SiO"), Some(LineDatabase::Exomol));
    assert_eq!(line_database("C6H6"), Some(LineDatabase::Geisa));
    assert_eq!(line_database("CH3+"), Some(LineDatabase::Other));
    assert_eq!(line_database("C3H4"), Some(LineDatabase::Other));
    assert_eq!(line_database("XYZ"), None);
    assert_eq!(LineDatabase::Hitran.to_string(), "HITRAN");
}

#[test]
fn test_thermal_velocity() {
    let v = compute_thermal_velocity("CO", 1000.0, 1).unwrap();
    assert_relative_eq!(v, 544.9761744824237, max_relative = 1e-10);

    // v scales as sqrt(T / m).
    let v_hot = compute_thermal_velocity("CO", 4000.0, 1).unwrap();
    assert_relative_eq!(v_hot, 2.0 * v, max_relative = 1e-12);
    let v_h2 = compute_thermal_velocity("H2", 1000.0, 1).unwrap();
    assert_relative_eq!(
        v_h2 / v,
        (27.994915_f64 / 2.01565).sqrt(),
        max_relative = 1e-12
    );

    assert!(compute_thermal_velocity("XYZ", 1000.0, 1).is_err());
}
