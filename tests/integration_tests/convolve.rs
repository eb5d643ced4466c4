// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{fs::File, io::BufReader};

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use crate::{get_cmd_output, make_file_in_dir, spectools};
use spectools_ir::read_spectrum;

/// A spectrum with one Gaussian line on a unit continuum.
fn line_spectrum(start: f64, num_samples: usize, step: f64) -> String {
    let centre = start + step * num_samples as f64 / 2.0;
    let mut s = String::from("# wave flux\n");
    for i in 0..num_samples {
        let w = start + i as f64 * step;
        let f = 1.0 + (-0.5 * ((w - centre) / (5.0 * step)).powi(2)).exp();
        s.push_str(&format!("{w:e} {f:e}\n"));
    }
    s
}

#[test]
fn test_convolve_constant_resolution() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let input = make_file_in_dir("in.txt", tmp_dir.path(), &line_spectrum(5.0, 2000, 1e-5));
    let output = tmp_dir.path().join("out.txt");

    #[rustfmt::skip]
    let cmd = spectools()
        .args([
            "convolve",
            "-i", &input.display().to_string(),
            "-o", &output.display().to_string(),
            "--resolution", "3000",
        ])
        .ok();
    assert!(cmd.is_ok(), "convolve failed: {}", cmd.err().unwrap());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stdout.contains("spectools convolve"), "{stdout}");
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");

    let before = read_spectrum(&mut BufReader::new(File::open(&input).unwrap())).unwrap();
    let after = read_spectrum(&mut BufReader::new(File::open(&output).unwrap())).unwrap();
    assert_eq!(after.wave, before.wave);
    // The line is broadened, so its peak drops, but the continuum is kept.
    let peak_before = before.flux.iter().cloned().fold(f64::MIN, f64::max);
    let peak_after = after.flux.iter().cloned().fold(f64::MIN, f64::max);
    assert!(peak_after < peak_before);
    assert!(peak_after > 1.0);
    assert_abs_diff_eq!(after.flux[0], 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(after.flux[1999], 1.0, epsilon = 1e-6);
}

#[test]
fn test_convolve_mrs_and_velocity() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let input = make_file_in_dir("in.txt", tmp_dir.path(), &line_spectrum(5.6, 2000, 1e-5));

    for resolution in [&["--mrs"][..], &["--velocity", "100"][..]] {
        let output = tmp_dir.path().join("out.txt");
        let cmd = spectools()
            .args(["convolve", "-i", &input.display().to_string()])
            .args(["-o", &output.display().to_string()])
            .args(resolution)
            .ok();
        assert!(cmd.is_ok(), "convolve failed: {}", cmd.err().unwrap());
        let after = read_spectrum(&mut BufReader::new(File::open(&output).unwrap())).unwrap();
        assert_eq!(after.wave.len(), 2000);
    }
}

#[test]
fn test_convolve_args_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let input = make_file_in_dir("in.txt", tmp_dir.path(), &line_spectrum(5.0, 500, 1e-5));
    let output = tmp_dir.path().join("out.txt");
    let args_file = make_file_in_dir(
        "args.toml",
        tmp_dir.path(),
        &format!(
            "input = {:?}\noutput = {:?}\nresolution = 2000.0\n",
            input.display().to_string(),
            output.display().to_string()
        ),
    );

    let cmd = spectools()
        .args(["convolve", &args_file.display().to_string()])
        .ok();
    assert!(cmd.is_ok(), "convolve failed: {}", cmd.err().unwrap());
    assert!(output.exists());
}

#[test]
fn test_convolve_dry_run_writes_nothing() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let input = make_file_in_dir("in.txt", tmp_dir.path(), &line_spectrum(5.0, 100, 1e-5));
    let output = tmp_dir.path().join("out.txt");

    #[rustfmt::skip]
    let cmd = spectools()
        .args([
            "convolve",
            "-i", &input.display().to_string(),
            "-o", &output.display().to_string(),
            "-r", "3000",
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "convolve failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dry run"), "{stdout}");
    assert!(!output.exists());
}

#[test]
fn test_convolve_errors() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let input = make_file_in_dir("in.txt", tmp_dir.path(), "1.0 1.0\n0.9 1.0\n");
    let output = tmp_dir.path().join("out.txt");

    // No resolution.
    let cmd = spectools()
        .args(["convolve", "-i", &input.display().to_string()])
        .args(["-o", &output.display().to_string()])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No resolution"), "{stderr}");

    // Decreasing wavelengths.
    let cmd = spectools()
        .args(["convolve", "-i", &input.display().to_string()])
        .args(["-o", &output.display().to_string(), "-r", "3000"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("strictly increasing"), "{stderr}");
    assert!(!output.exists());

    // Outside MIRI MRS coverage.
    let input = make_file_in_dir("in2.txt", tmp_dir.path(), "1.0 1.0\n1.1 1.0\n");
    let cmd = spectools()
        .args(["convolve", "-i", &input.display().to_string()])
        .args(["-o", &output.display().to_string(), "--mrs"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("not covered"), "{stderr}");
}
