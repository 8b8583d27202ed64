// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// Address of one cell in the tally grid: `(col, row)`, both 0-indexed.
///
/// The derived ordering compares `col` first, so iterating a `BTreeMap<CellKey, _>` visits cells
/// in the same column-major order the walker uses. The string form `"<col>_<row>"` only exists at
/// the storage boundary (`Display` / `FromStr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    col: usize,
    row: usize,
}

impl CellKey {
    pub const ORIGIN: Self = Self { col: 0, row: 0 };

    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    pub const fn col(self) -> usize {
        self.col
    }

    pub const fn row(self) -> usize {
        self.row
    }

    pub const fn is_origin(self) -> bool {
        self.col == 0 && self.row == 0
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.col, self.row)
    }
}

impl FromStr for CellKey {
    type Err = CellKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((col, row)) = s.split_once('_') else {
            return Err(CellKeyError::MissingSeparator);
        };
        Ok(Self {
            col: parse_index(col)?,
            row: parse_index(row)?,
        })
    }
}

impl TryFrom<&str> for CellKey {
    type Error = CellKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKeyError {
    MissingSeparator,
    InvalidIndex { value: String },
}

impl fmt::Display for CellKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => f.write_str("cell key must look like '<col>_<row>'"),
            Self::InvalidIndex { value } => {
                write!(f, "cell key index must be a decimal number, got {value:?}")
            }
        }
    }
}

impl std::error::Error for CellKeyError {}

// `usize::from_str` accepts a leading '+', which would let "+1_0" alias "1_0".
fn parse_index(value: &str) -> Result<usize, CellKeyError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CellKeyError::InvalidIndex {
            value: value.to_owned(),
        });
    }
    value.parse().map_err(|_| CellKeyError::InvalidIndex {
        value: value.to_owned(),
    })
}
