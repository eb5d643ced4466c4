// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use super::*;

#[test]
fn test_wn_to_k() {
    // The second radiation constant, hc/k_B, is 1.438776877 cm K.
    assert_relative_eq!(wn_to_k(1.0), 1.4387768775039336, max_relative = 1e-12);
    // CO v=1-0 band centre.
    assert_relative_eq!(wn_to_k(2143.27), 3083.6873182478557, max_relative = 1e-12);
}

#[test]
fn test_wn_to_k_round_trip() {
    for wn in [1e-3, 0.5, 1.0, 667.4, 2143.27, 3756.0, 1e5] {
        assert_relative_eq!(k_to_wn(wn_to_k(wn)), wn, max_relative = 1e-14);
    }
}

#[test]
fn test_wavelength_wavenumber() {
    assert_abs_diff_eq!(wn_to_wave_um(2000.0), 5.0);
    assert_abs_diff_eq!(wave_um_to_wn(5.0), 2000.0);
    assert_relative_eq!(wave_um_to_wn(wn_to_wave_um(1234.5)), 1234.5, max_relative = 1e-15);
    assert_abs_diff_eq!(wn_to_freq_hz(1.0), 2.99792458e10);
}

#[test]
fn test_parse_wavelength_str_without_units() {
    let result = parse_wavelength("1");
    assert!(result.is_ok(), "{:?}", result.unwrap_err());
    let pair = result.unwrap();
    assert_abs_diff_eq!(pair.0, 1.0);
    assert_eq!(pair.1, WavelengthUnit::NoUnit);

    let result = parse_wavelength(" 4.9 ");
    assert!(result.is_ok(), "{:?}", result.unwrap_err());
    let pair = result.unwrap();
    assert_abs_diff_eq!(pair.0, 4.9);
    assert_eq!(pair.1, WavelengthUnit::NoUnit);
}

#[test]
fn test_parse_wavelength_str_with_units() {
    // Iterate over all possible units.
    for unit in WavelengthUnit::iter().filter(|&u| u != WavelengthUnit::NoUnit) {
        let unit_str: &'static str = unit.into();
        for unit_str in [unit_str.to_lowercase(), unit_str.to_uppercase()] {
            for input in [
                format!("20{unit_str}"),
                format!("20.0{unit_str}"),
                format!(" 20.0{unit_str} "),
                format!(" 20.0 {unit_str} "),
            ] {
                let result = parse_wavelength(&input);
                assert!(result.is_ok(), "{input}: {:?}", result.unwrap_err());
                let pair = result.unwrap();
                assert_abs_diff_eq!(pair.0, 20.0);
                assert_eq!(pair.1, unit);
            }
        }
    }
}

#[test]
fn test_parse_wavelength_um() {
    assert_abs_diff_eq!(parse_wavelength_um("4.9").unwrap(), 4.9);
    assert_abs_diff_eq!(parse_wavelength_um("4.9um").unwrap(), 4.9);
    assert_abs_diff_eq!(parse_wavelength_um("4.9 micron").unwrap(), 4.9);
    assert_abs_diff_eq!(parse_wavelength_um("4900nm").unwrap(), 4.9, epsilon = 1e-12);
    assert_abs_diff_eq!(parse_wavelength_um("49000A").unwrap(), 4.9, epsilon = 1e-12);
    assert_abs_diff_eq!(parse_wavelength_um("2000cm-1").unwrap(), 5.0);
}

#[test]
fn test_parse_wavelength_errors() {
    let result = parse_wavelength("abcum");
    assert!(matches!(
        result,
        Err(UnitParseError::GotUnitButCantParse { unit: "um", .. })
    ));

    let result = parse_wavelength("5 parsecs");
    assert!(matches!(
        result,
        Err(UnitParseError::Unknown {
            unit_type: "wavelength",
            ..
        })
    ));

    assert!(matches!(
        parse_wavelength_um("0cm-1"),
        Err(UnitParseError::NotPositive(_))
    ));
    assert!(matches!(
        parse_wavelength_um("-4.9"),
        Err(UnitParseError::NotPositive(_))
    ));
}
