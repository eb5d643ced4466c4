// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Select transitions from a line list.

use std::{
    borrow::Cow,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    str::FromStr,
};

use clap::Parser;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    common::{
        parse_wavelength_bounds, InfoPrinter, ARG_FILE_HELP, LINE_LIST_TYPE_HELP,
        WAVELENGTH_UNITS_HELP,
    },
    SpectoolsError,
};
use crate::linelist::{
    extract_ch3p, extract_hitran_from_par, LineFilter, LineListType, SpectralLine,
    LINE_LIST_TYPES_COMMA_SEPARATED,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct LinesArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// The line list to read. Files ending in .gz are decompressed.
    #[clap(short, long, parse(from_os_str), help_heading = "INPUT AND OUTPUT")]
    pub(super) line_list: Option<PathBuf>,

    #[clap(long, help = LINE_LIST_TYPE_HELP.as_str(), help_heading = "INPUT AND OUTPUT")]
    pub(super) line_list_type: Option<String>,

    /// Write the selected lines to this JSON file.
    #[clap(short, long, parse(from_os_str), help_heading = "INPUT AND OUTPUT")]
    pub(super) output: Option<PathBuf>,

    /// Keep lines with wavelengths greater than this.
    #[clap(long, help_heading = "SELECTION", long_help = WAVELENGTH_UNITS_HELP.as_str())]
    pub(super) wavemin: Option<String>,

    /// Keep lines with wavelengths less than this.
    #[clap(long, help_heading = "SELECTION", long_help = WAVELENGTH_UNITS_HELP.as_str())]
    pub(super) wavemax: Option<String>,

    /// Keep lines of this isotopologue (HITRAN only). Default: 1
    #[clap(long, help_heading = "SELECTION")]
    pub(super) isotopologue: Option<u8>,

    /// Keep lines with upper-state energies less than this [K].
    #[clap(long, help_heading = "SELECTION")]
    pub(super) eupmax: Option<f64>,

    /// Keep lines with Einstein A coefficients greater than this [s^-1].
    #[clap(long, help_heading = "SELECTION")]
    pub(super) aupmin: Option<f64>,

    /// Keep lines with intensities greater than this [cm^-1 / (molecule
    /// cm^-2)] (HITRAN only).
    #[clap(long, help_heading = "SELECTION")]
    pub(super) swmin: Option<f64>,

    /// Keep lines whose upper-state global quanta are this integer (HITRAN
    /// only).
    #[clap(long, help_heading = "SELECTION")]
    pub(super) vup: Option<i64>,
}

#[derive(Error, Debug)]
pub(super) enum LinesArgsError {
    #[error("No line list was supplied")]
    NoLineList,

    #[error("Line list type '{0}' is not supported. Supported types: {}", *LINE_LIST_TYPES_COMMA_SEPARATED)]
    UnknownLineListType(String),
}

impl LinesArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified
    /// into a single struct. Where applicable, it will prefer CLI parameters
    /// over those in the file.
    pub(super) fn merge(self) -> Result<LinesArgs, SpectoolsError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let LinesArgs {
                args_file: _,
                line_list,
                line_list_type,
                output,
                wavemin,
                wavemax,
                isotopologue,
                eupmax,
                aupmin,
                swmin,
                vup,
            } = unpack_arg_file!(arg_file);

            Ok(LinesArgs {
                args_file: None,
                line_list: cli_args.line_list.or(line_list),
                line_list_type: cli_args.line_list_type.or(line_list_type),
                output: cli_args.output.or(output),
                wavemin: cli_args.wavemin.or(wavemin),
                wavemax: cli_args.wavemax.or(wavemax),
                isotopologue: cli_args.isotopologue.or(isotopologue),
                eupmax: cli_args.eupmax.or(eupmax),
                aupmin: cli_args.aupmin.or(aupmin),
                swmin: cli_args.swmin.or(swmin),
                vup: cli_args.vup.or(vup),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), SpectoolsError> {
        debug!("{:#?}", self);

        let LinesArgs {
            args_file: _,
            line_list,
            line_list_type,
            output,
            wavemin,
            wavemax,
            isotopologue,
            eupmax,
            aupmin,
            swmin,
            vup,
        } = self;

        let line_list = line_list.ok_or(LinesArgsError::NoLineList)?;
        let line_list_type = match line_list_type {
            None => LineListType::Hitran,
            Some(t) => LineListType::from_str(&t.to_lowercase())
                .map_err(|_| LinesArgsError::UnknownLineListType(t))?,
        };
        let (wavemin, wavemax) = parse_wavelength_bounds(wavemin.as_deref(), wavemax.as_deref())?;
        let filter = LineFilter {
            wavemin,
            wavemax,
            isotopologue,
            eupmax,
            aupmin,
            swmin,
            vup,
        };

        let mut printer = InfoPrinter::new("Selecting lines".into());
        printer.push_line(format!("Line list: {} ({line_list_type})", line_list.display()).into());
        let mut criteria: Vec<Cow<'static, str>> = vec![];
        if let Some(w) = filter.wavemin {
            criteria.push(format!("wavelength > {w} um").into());
        }
        if let Some(w) = filter.wavemax {
            criteria.push(format!("wavelength < {w} um").into());
        }
        if let Some(e) = filter.eupmax {
            criteria.push(format!("E_up < {e} K").into());
        }
        if let Some(a) = filter.aupmin {
            criteria.push(format!("A > {a} s^-1").into());
        }
        if line_list_type == LineListType::Hitran {
            criteria.push(format!("isotopologue {}", filter.isotopologue.unwrap_or(1)).into());
            if let Some(sw) = filter.swmin {
                criteria.push(format!("S > {sw}").into());
            }
            if let Some(v) = filter.vup {
                criteria.push(format!("v_up = {v}").into());
            }
        }
        if !criteria.is_empty() {
            printer.push_block(criteria);
        }
        if let Some(o) = &output {
            printer.push_line(format!("Output: {}", o.display()).into());
        }
        printer.display();

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        let json = match line_list_type {
            LineListType::Hitran => {
                let lines = extract_hitran_from_par(&line_list, &filter)?;
                log_lines(&lines);
                serde_json::to_string_pretty(&lines)?
            }
            LineListType::Ch3p => {
                let lines = extract_ch3p(&line_list, &filter)?;
                log_lines(&lines);
                serde_json::to_string_pretty(&lines)?
            }
        };

        if let Some(output) = output {
            let mut out = BufWriter::new(File::create(&output)?);
            out.write_all(json.as_bytes())?;
            out.flush()?;
            info!("Wrote {}", output.display());
        }

        Ok(())
    }
}

fn log_lines<L: SpectralLine>(lines: &[L]) {
    info!("Selected {} lines", lines.len());
    if lines.is_empty() {
        return;
    }
    info!(
        "{:>12} {:>14} {:>10} {:>12} {:>6}",
        "wave [um]", "wn [cm^-1]", "E_up [K]", "A [s^-1]", "g_up"
    );
    for line in lines {
        info!(
            "{:>12.6} {:>14.6} {:>10.1} {:>12.4e} {:>6}",
            line.wave(),
            line.wn(),
            line.eup_k(),
            line.einstein_a(),
            line.gup()
        );
    }
}
