// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs::File;

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use crate::{get_cmd_output, make_file_in_dir, spectools};
use spectools_ir::HitranLine;

const PAR_RECORDS: [&str; 4] = [
    " 51 2143.271059 3.410E-19 1.419E+01.0510.0580    3.84500.69-.003000              1              0                          R  0465554123456789012     3.0    1.0",
    " 52 2096.067000 3.270E-21 1.353E+01.0510.0580    3.67500.69-.003000              1              0                          R  0465554123456789012     6.0    2.0",
    " 51 2000.000000 1.000E-21 3.000E+01.0510.0580 5000.00000.69-.003000              2              1                          P 20465554123456789012    39.0   41.0",
    " 51 1800.000000 1.000E-25 3.000E+01.0510.0580  100.00000.69-.003000                                                            465554123456789012    39.0   41.0",
];

fn read_lines_json(path: &std::path::Path) -> Vec<HitranLine> {
    serde_json::from_reader(File::open(path).unwrap()).unwrap()
}

#[test]
fn test_lines_selection() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let par = make_file_in_dir("co.par", tmp_dir.path(), &PAR_RECORDS.join("\n"));
    let output = tmp_dir.path().join("lines.json");

    #[rustfmt::skip]
    let cmd = spectools()
        .args([
            "lines",
            "-l", &par.display().to_string(),
            "--wavemax", "5.5um",
            "-o", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "lines failed: {}", cmd.err().unwrap());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stdout.contains("Selected 2 lines"), "{stdout}");
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");

    let lines = read_lines_json(&output);
    assert_eq!(lines.len(), 2);
    assert_abs_diff_eq!(lines[0].wn, 2143.271059);
    assert_abs_diff_eq!(lines[1].wn, 2000.0);
}

#[test]
fn test_lines_wavenumber_bounds_and_args_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let par = make_file_in_dir("co.par", tmp_dir.path(), &PAR_RECORDS.join("\n"));
    let output = tmp_dir.path().join("lines.json");
    let args_file = make_file_in_dir(
        "args.json",
        tmp_dir.path(),
        &format!(
            r#"{{"line_list": {:?}, "isotopologue": 2, "wavemin": "2200cm-1", "wavemax": "2050cm-1"}}"#,
            par.display().to_string()
        ),
    );

    let cmd = spectools()
        .args(["lines", &args_file.display().to_string()])
        .args(["-o", &output.display().to_string()])
        .ok();
    assert!(cmd.is_ok(), "lines failed: {}", cmd.err().unwrap());

    let lines = read_lines_json(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].local_iso_id, 2);
}

#[test]
fn test_lines_bad_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let par = make_file_in_dir("short.par", tmp_dir.path(), &PAR_RECORDS[0][..120]);

    let cmd = spectools()
        .args(["lines", "-l", &par.display().to_string()])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("line 1"), "{stderr}");
    assert!(stderr.contains("HITRAN2004+"), "{stderr}");

    let cmd = spectools()
        .args(["lines", "-l", &par.display().to_string(), "--line-list-type", "exomol"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("hitran, ch3p"), "{stderr}");
}

#[test]
fn test_lines_help_mentions_wavelength_units() {
    let cmd = spectools().args(["lines", "--help"]).ok();
    assert!(cmd.is_ok(), "lines --help failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    let wavemin_help = stdout
        .split("--wavemin")
        .nth(1)
        .expect("--wavemin is in the help");
    assert!(wavemin_help.contains("2130cm-1"), "{stdout}");
}
