// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Degrade a spectrum file to an instrumental resolving power.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    common::{InfoPrinter, ARG_FILE_HELP},
    SpectoolsError,
};
use crate::{
    convolve::{ConvolutionPlan, Resolution},
    instrument::mrs_resolving_power,
    spectrum::{read_spectrum, write_spectrum},
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct ConvolveArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// The spectrum to convolve. Its first two whitespace-separated columns
    /// are the wavelength [microns] and flux; lines starting with # are
    /// ignored.
    #[clap(short, long, parse(from_os_str), help_heading = "INPUT AND OUTPUT")]
    pub(super) input: Option<PathBuf>,

    /// Where to write the convolved spectrum.
    #[clap(short, long, parse(from_os_str), help_heading = "INPUT AND OUTPUT")]
    pub(super) output: Option<PathBuf>,

    /// Convolve to this constant resolving power (λ/Δλ).
    #[clap(short, long, help_heading = "RESOLUTION")]
    pub(super) resolution: Option<f64>,

    /// Convolve to this constant velocity resolution [km/s].
    #[clap(long, help_heading = "RESOLUTION")]
    pub(super) velocity: Option<f64>,

    /// Convolve to the resolving power of JWST MIRI MRS, which varies with
    /// wavelength. Every wavelength must be covered by a MRS sub-band.
    #[clap(long, help_heading = "RESOLUTION")]
    #[serde(default)]
    pub(super) mrs: bool,
}

#[derive(Error, Debug)]
pub(super) enum ConvolveArgsError {
    #[error("No input spectrum was supplied")]
    NoInput,

    #[error("No output file was supplied")]
    NoOutput,

    #[error("No resolution was supplied; use one of --resolution, --velocity or --mrs")]
    NoResolution,

    #[error("More than one resolution was supplied; use only one of --resolution, --velocity or --mrs")]
    MultipleResolutions,
}

/// The resolution requested by the user.
#[derive(Debug, Clone, Copy)]
enum TargetResolution {
    Constant(f64),
    VelocityKms(f64),
    MiriMrs,
}

impl std::fmt::Display for TargetResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetResolution::Constant(r) => write!(f, "R = {r}"),
            TargetResolution::VelocityKms(dv) => write!(f, "Δv = {dv} km/s"),
            TargetResolution::MiriMrs => write!(f, "JWST MIRI MRS"),
        }
    }
}

impl ConvolveArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified
    /// into a single struct. Where applicable, it will prefer CLI parameters
    /// over those in the file.
    pub(super) fn merge(self) -> Result<ConvolveArgs, SpectoolsError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let ConvolveArgs {
                args_file: _,
                input,
                output,
                resolution,
                velocity,
                mrs,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(ConvolveArgs {
                args_file: None,
                input: cli_args.input.or(input),
                output: cli_args.output.or(output),
                resolution: cli_args.resolution.or(resolution),
                velocity: cli_args.velocity.or(velocity),
                mrs: cli_args.mrs || mrs,
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), SpectoolsError> {
        debug!("{:#?}", self);

        let ConvolveArgs {
            args_file: _,
            input,
            output,
            resolution,
            velocity,
            mrs,
        } = self;

        let input = input.ok_or(ConvolveArgsError::NoInput)?;
        let output = output.ok_or(ConvolveArgsError::NoOutput)?;
        let target = match (resolution, velocity, mrs) {
            (Some(r), None, false) => TargetResolution::Constant(r),
            (None, Some(dv), false) => TargetResolution::VelocityKms(dv),
            (None, None, true) => TargetResolution::MiriMrs,
            (None, None, false) => return Err(ConvolveArgsError::NoResolution.into()),
            _ => return Err(ConvolveArgsError::MultipleResolutions.into()),
        };

        let mut printer = InfoPrinter::new("Convolving spectrum".into());
        printer.push_block(vec![
            format!("Input:  {}", input.display()).into(),
            format!("Output: {}", output.display()).into(),
        ]);
        printer.push_line(format!("Resolution: {target}").into());
        printer.display();

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        let spectrum = read_spectrum(&mut BufReader::new(File::open(&input)?))?;
        info!(
            "Read {} samples ({} - {} um)",
            spectrum.wave.len(),
            spectrum.wave[0],
            spectrum.wave[spectrum.wave.len() - 1]
        );

        let mrs_r;
        let resolution = match target {
            TargetResolution::Constant(r) => Resolution::Constant(r),
            TargetResolution::VelocityKms(dv) => Resolution::from_velocity_kms(dv)?,
            TargetResolution::MiriMrs => {
                mrs_r = mrs_resolving_power(&spectrum.wave)?;
                Resolution::PerPoint(&mrs_r)
            }
        };
        let plan = ConvolutionPlan::new(&spectrum.wave, resolution)?;
        debug!(
            "Resampled grid has {:.3} samples per resolution element",
            plan.fwhm_s
        );
        let convolved = plan.apply(&spectrum.flux)?;

        let mut out = BufWriter::new(File::create(&output)?);
        write_spectrum(&mut out, &spectrum.wave, &convolved)?;
        out.flush()?;
        info!("Wrote {}", output.display());

        Ok(())
    }
}
