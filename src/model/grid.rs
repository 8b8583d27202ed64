// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::cell_key::CellKey;

pub const MIN_ROWS: usize = 1;
pub const MAX_ROWS: usize = 50;
pub const MIN_COLS: usize = 1;
pub const MAX_COLS: usize = 20;

/// Grid dimensions: `rows` attempts per category × `cols` categories.
///
/// Both values are clamped into their allowed ranges on construction, so a `GridSize` is never
/// empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            rows: MIN_ROWS,
            cols: MIN_COLS,
        }
    }
}

impl GridSize {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.clamp(MIN_ROWS, MAX_ROWS),
            cols: cols.clamp(MIN_COLS, MAX_COLS),
        }
    }

    pub fn rows(self) -> usize {
        self.rows
    }

    pub fn cols(self) -> usize {
        self.cols
    }

    pub fn with_rows(self, rows: usize) -> Self {
        Self::new(rows, self.cols)
    }

    pub fn with_cols(self, cols: usize) -> Self {
        Self::new(self.rows, cols)
    }

    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(self, key: CellKey) -> bool {
        key.col() < self.cols && key.row() < self.rows
    }

    pub fn last_cell(self) -> CellKey {
        CellKey::new(self.cols - 1, self.rows - 1)
    }
}
