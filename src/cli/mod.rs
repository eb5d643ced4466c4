// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code. More specific options for `spectools`
//! subcommands are contained in modules.
//!
//! All booleans must have `#[serde(default)]` annotated, and anything that
//! isn't a boolean must be optional. This allows all arguments to be optional
//! *and* usable in an arguments file.
//!
//! Only 3 things should be public in this module: `Spectools`,
//! `Spectools::run`, and `SpectoolsError`.

#[macro_use]
mod common;
mod convolve;
mod error;
mod lines;
mod molecule;
mod mrs;
mod rotation;
#[cfg(test)]
mod tests;

pub use error::SpectoolsError;

use clap::{AppSettings, Args, Parser, Subcommand};
use log::info;

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    version,
    author,
    about = "Utilities for infrared molecular spectroscopy: line lists, molecular constants and resolution-matched spectral convolution"
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(disable_help_subcommand = true)]
#[clap(infer_subcommands = true)]
#[clap(propagate_version = true)]
#[clap(infer_long_args = true)]
pub struct Spectools {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    #[clap(global = true)]
    verbosity: u8,

    /// Only verify that arguments were correctly ingested and print out
    /// high-level information.
    #[clap(long)]
    #[clap(global = true)]
    dry_run: bool,
}

#[derive(Debug, Subcommand)]
#[clap(arg_required_else_help = true)]
enum Command {
    #[clap(about = "Degrade a spectrum to an instrumental resolving power, which may vary with wavelength.")]
    Convolve(convolve::ConvolveArgs),

    #[clap(about = "Select transitions from a HITRAN or CH3+ line list.")]
    Lines(lines::LinesArgs),

    #[clap(about = "Print the HITRAN identifiers, mass and thermal velocity of a molecule.")]
    Molecule(molecule::MoleculeArgs),

    #[clap(about = "Report the resolving power and wavelength coverage of JWST MIRI MRS.")]
    Mrs(mrs::MrsArgs),

    #[clap(about = "Compute a rotation diagram from line fluxes.")]
    RotationDiagram(rotation::RotationDiagramArgs),
}

impl Spectools {
    pub fn run(self) -> Result<(), SpectoolsError> {
        // Set up logging.
        let GlobalArgs { verbosity, dry_run } = self.global_opts;
        setup_logging(verbosity)?;

        // Print the version of spectools and its build-time information.
        let sub_command = match &self.command {
            Command::Convolve(_) => "convolve",
            Command::Lines(_) => "lines",
            Command::Molecule(_) => "molecule",
            Command::Mrs(_) => "mrs",
            Command::RotationDiagram(_) => "rotation-diagram",
        };
        info!("spectools {} {}", sub_command, env!("CARGO_PKG_VERSION"));
        display_build_info();

        match self.command {
            Command::Convolve(args) => args.merge()?.run(dry_run)?,
            Command::Lines(args) => args.merge()?.run(dry_run)?,
            Command::Molecule(args) => args.run()?,
            Command::Mrs(args) => args.run()?,
            Command::RotationDiagram(args) => args.run()?,
        }

        info!("spectools {} complete.", sub_command);
        Ok(())
    }
}

/// Activate a logger. All log messages are put onto `stdout`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty (e.g. a
/// terminal); piped output will be formatted sensibly. Source code lines are
/// displayed in log messages when verbosity >= 3.
fn setup_logging(verbosity: u8) -> Result<(), SpectoolsError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                use std::io::Write;

                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder
        .try_init()
        .map_err(|e| SpectoolsError::Generic(format!("Failed to initialise logging: {e}")))
}

/// Write info-level log lines of how this executable was compiled.
fn display_build_info() {
    info!("Compiled at {}", BUILT_TIME_UTC);
    info!("    with compiler {}", RUSTC_VERSION);
    info!("");
}
