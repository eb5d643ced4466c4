// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

/// Errors associated with reading line lists.
#[derive(Error, Debug)]
pub enum LineListError {
    #[error("Line list line {line_num}: Record has {len} characters, but HITRAN records have {expected}; this doesn't appear to be a HITRAN2004+ format file")]
    ShortRecord {
        line_num: usize,
        len: usize,
        expected: usize,
    },

    #[error("Line list line {0}: Record contains non-ASCII characters")]
    NonAscii(usize),

    #[error("Line list line {line_num}: Couldn't parse '{string}' as an integer for the {field} field")]
    ParseInt {
        line_num: usize,
        field: &'static str,
        string: String,
    },

    #[error("Line list line {line_num}: Couldn't parse '{string}' as a float for the {field} field")]
    ParseFloat {
        line_num: usize,
        field: &'static str,
        string: String,
    },

    #[error("Line list line {line_num}: '{iso}' is not a valid isotopologue code")]
    InvalidIsotopologue { line_num: usize, iso: char },

    #[error("Line list line {line_num}: The {field} column is missing")]
    MissingColumn {
        line_num: usize,
        field: &'static str,
    },

    #[error("Line list file {0} does not exist")]
    FileNotFound(PathBuf),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
