// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from looking things up in the static molecule and instrument
//! tables.

use thiserror::Error;

use crate::instrument::MRS_SUBBANDS_COMMA_SEPARATED;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("The molecule '{0}' is not in HITRAN and not covered by spectools")]
    UnknownMolecule(String),

    #[error("The molecule/isotopologue combination {molecule}_{isotopologue} is not in HITRAN and not covered by spectools")]
    UnknownIsotopologue { molecule: String, isotopologue: u8 },

    #[error("There is no HITRAN molecule with identifier {0}")]
    UnknownMoleculeId(u32),

    #[error("'{0}' is not a MIRI MRS sub-band. Valid sub-bands are: {}", *MRS_SUBBANDS_COMMA_SEPARATED)]
    UnknownSubband(String),

    #[error("The wavelength {0} um is not covered by any MIRI MRS sub-band")]
    OutsideMrsCoverage(f64),
}
