// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{io::Write, path::PathBuf};

use clap::Parser;
use indoc::indoc;
use tempfile::Builder;

use super::*;

fn arg_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut f = Builder::new().suffix(suffix).tempfile().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn test_convolve_args_merge_prefers_cli() {
    let f = arg_file(
        ".toml",
        indoc! {r#"
            input = "model.txt"
            output = "from_file.txt"
            resolution = 3000.0
            mrs = false
        "#},
    );
    let cli_args = convolve::ConvolveArgs {
        args_file: Some(f.path().to_path_buf()),
        output: Some(PathBuf::from("from_cli.txt")),
        ..Default::default()
    };
    let merged = cli_args.merge().unwrap();
    assert_eq!(merged.args_file, None);
    assert_eq!(merged.input, Some(PathBuf::from("model.txt")));
    assert_eq!(merged.output, Some(PathBuf::from("from_cli.txt")));
    assert_eq!(merged.resolution, Some(3000.0));
    assert_eq!(merged.velocity, None);
    assert!(!merged.mrs);
}

#[test]
fn test_lines_args_merge_json() {
    let f = arg_file(
        ".json",
        r#"{"line_list": "co.par", "wavemin": "4.6um", "wavemax": "5.2", "vup": 1}"#,
    );
    let cli_args = lines::LinesArgs {
        args_file: Some(f.path().to_path_buf()),
        vup: Some(2),
        ..Default::default()
    };
    let merged = cli_args.merge().unwrap();
    assert_eq!(merged.line_list, Some(PathBuf::from("co.par")));
    assert_eq!(merged.wavemin.as_deref(), Some("4.6um"));
    assert_eq!(merged.wavemax.as_deref(), Some("5.2"));
    assert_eq!(merged.vup, Some(2));
    assert_eq!(merged.isotopologue, None);
}

#[test]
fn test_bad_arg_files() {
    let f = arg_file(".yaml", "input: model.txt\n");
    let cli_args = convolve::ConvolveArgs {
        args_file: Some(f.path().to_path_buf()),
        ..Default::default()
    };
    assert!(matches!(cli_args.merge(), Err(SpectoolsError::ArgFile(_))));

    let f = arg_file(".toml", "resolution = \"high\"\n");
    let cli_args = convolve::ConvolveArgs {
        args_file: Some(f.path().to_path_buf()),
        ..Default::default()
    };
    assert!(matches!(cli_args.merge(), Err(SpectoolsError::ArgFile(_))));
}

#[test]
fn test_convolve_needs_one_resolution() {
    let args = convolve::ConvolveArgs {
        input: Some(PathBuf::from("in.txt")),
        output: Some(PathBuf::from("out.txt")),
        ..Default::default()
    };
    let result = args.clone().run(true);
    assert!(matches!(result, Err(SpectoolsError::Convolve(_))));

    let args = convolve::ConvolveArgs {
        resolution: Some(3000.0),
        mrs: true,
        ..args
    };
    let result = args.run(true);
    match result {
        Err(SpectoolsError::Convolve(s)) => assert!(s.contains("More than one resolution")),
        other => panic!("Expected a convolve error, got {other:?}"),
    }
}

#[test]
fn test_cli_parses() {
    let args = Spectools::try_parse_from([
        "spectools", "-vv", "convolve", "-i", "in.txt", "-o", "out.txt", "--velocity", "10",
    ])
    .unwrap();
    assert_eq!(args.global_opts.verbosity, 2);
    assert!(!args.global_opts.dry_run);
    match args.command {
        Command::Convolve(c) => {
            assert_eq!(c.velocity, Some(10.0));
            assert_eq!(c.input, Some(PathBuf::from("in.txt")));
        }
        _ => panic!("Expected the convolve subcommand"),
    }

    let args =
        Spectools::try_parse_from(["spectools", "mrs", "5.0", "5.7um", "--dry-run"]).unwrap();
    assert!(args.global_opts.dry_run);
    assert!(matches!(args.command, Command::Mrs(_)));

    assert!(Spectools::try_parse_from(["spectools", "rotation-diagram"]).is_err());
}
