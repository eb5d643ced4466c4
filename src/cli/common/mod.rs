// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code shared between `spectools` subcommands.

mod printers;

pub(super) use printers::InfoPrinter;

use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::SpectoolsError;
use crate::{
    instrument::MRS_SUBBANDS_COMMA_SEPARATED,
    linelist::LINE_LIST_TYPES_COMMA_SEPARATED,
    rotation::RotationUnits,
    units::{parse_wavelength_um, WavelengthUnit},
};

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    static ref WAVELENGTH_UNITS_COMMA_SEPARATED: String = WavelengthUnit::iter()
        .filter(|&u| u != WavelengthUnit::NoUnit)
        .join(", ");

    pub(super) static ref WAVELENGTH_UNITS_HELP: String =
        format!("Wavelengths are in microns unless a unit is attached (e.g. 4.7um, 4700nm, 2130cm-1). Supported units: {}", *WAVELENGTH_UNITS_COMMA_SEPARATED);

    pub(super) static ref LINE_LIST_TYPE_HELP: String =
        format!("The format of the line list. Default: hitran. Supported formats: {}", *LINE_LIST_TYPES_COMMA_SEPARATED);

    pub(super) static ref ROTATION_UNITS_HELP: String =
        format!("The unit system of the rotation diagram. Default: {}. Supported units: {}",
                RotationUnits::default(), RotationUnits::iter().join(", "));

    pub(super) static ref MRS_SUBBAND_HELP: String =
        format!("Only report on this MIRI MRS sub-band. Supported sub-bands: {}", *MRS_SUBBANDS_COMMA_SEPARATED);
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(SpectoolsError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(SpectoolsError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(SpectoolsError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

/// Parse a pair of user-supplied wavelength bounds into microns. Wavenumber
/// bounds are reversed by the conversion, so the pair is put back in order.
pub(super) fn parse_wavelength_bounds(
    min: Option<&str>,
    max: Option<&str>,
) -> Result<(Option<f64>, Option<f64>), SpectoolsError> {
    let min = min.map(parse_wavelength_um).transpose()?;
    let max = max.map(parse_wavelength_um).transpose()?;
    match (min, max) {
        (Some(a), Some(b)) if a > b => Ok((Some(b), Some(a))),
        bounds => Ok(bounds),
    }
}
