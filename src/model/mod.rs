// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A session holds the grid dimensions, per-column labels, recorded cells and the walk cursor.

pub mod cell;
pub mod cell_key;
pub mod grid;
pub mod selection;
pub mod session;

pub use cell::{CellRecord, ColumnConfig};
pub use cell_key::{CellKey, CellKeyError};
pub use grid::{GridSize, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};
pub use selection::Selection;
pub use session::{Session, DEFAULT_PARTS, MAX_PARTS, MIN_PARTS};
