// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests of the small lookup subcommands.

use std::fs::File;

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use crate::{get_cmd_output, make_file_in_dir, spectools};
use spectools_ir::{RotationDiagram, RotationUnits};

#[test]
fn test_molecule() {
    let cmd = spectools().args(["molecule", "CO", "-t", "1000"]).ok();
    assert!(cmd.is_ok(), "molecule failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("HITRAN molecule identifier: 5"), "{stdout}");
    assert!(stdout.contains("Global isotopologue identifier: 26"), "{stdout}");
    assert!(stdout.contains("0.5450 km/s"), "{stdout}");

    // Identifiers are translated.
    let cmd = spectools().args(["molecule", "5", "-i", "2"]).ok();
    assert!(cmd.is_ok(), "molecule failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("CO_2"), "{stdout}");

    let cmd = spectools().args(["molecule", "XYZ"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("XYZ"), "{stderr}");
}

#[test]
fn test_mrs() {
    let cmd = spectools().args(["mrs", "5.0", "5700nm", "30"]).ok();
    assert!(cmd.is_ok(), "mrs failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("R = 2840.5"), "{stdout}");
    assert!(stdout.contains("R = 3240.9"), "{stdout}");
    assert!(stdout.contains("not covered"), "{stdout}");

    let cmd = spectools().args(["mrs"]).ok();
    assert!(cmd.is_ok(), "mrs failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("1A:  4.87 -  5.82 um"), "{stdout}");
    assert!(stdout.contains("4C: 23.84 - 28.82 um"), "{stdout}");

    let cmd = spectools().args(["mrs", "--subband", "9Z"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("1A, 1B"), "{stderr}");
}

#[test]
fn test_rotation_diagram() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let fluxes = make_file_in_dir(
        "fluxes.json",
        tmp_dir.path(),
        r#"[
            {"eup_k": 3089.2, "wn": 2143.27, "gup": 3.0, "a": 14.19, "lineflux": 1e-17, "lineflux_err": 1e-18},
            {"eup_k": 10071.3, "wn": 2000.0, "gup": 39.0, "a": 30.0, "lineflux": 4e-18, "lineflux_err": 2e-18}
        ]"#,
    );
    let output = tmp_dir.path().join("rot.json");

    let cmd = spectools()
        .args(["rotation-diagram", &fluxes.display().to_string()])
        .args(["-u", "mixed", "-o", &output.display().to_string()])
        .ok();
    assert!(cmd.is_ok(), "rotation-diagram failed: {}", cmd.err().unwrap());

    let rot: RotationDiagram = serde_json::from_reader(File::open(&output).unwrap()).unwrap();
    assert_eq!(rot.units, RotationUnits::Mixed);
    assert_eq!(rot.x, vec![3089.2, 10071.3]);
    assert_abs_diff_eq!(
        rot.y[1],
        (4e-18_f64 / (2000.0 * 39.0 * 30.0)).ln(),
        epsilon = 1e-10
    );
    assert_abs_diff_eq!(rot.yerr.unwrap()[1], 0.5, epsilon = 1e-12);

    let cmd = spectools()
        .args(["rotation-diagram", &fluxes.display().to_string(), "-u", "si"])
        .ok();
    assert!(cmd.is_err());
}
