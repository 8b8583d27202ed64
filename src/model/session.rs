// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::cell::{CellRecord, ColumnConfig};
use super::cell_key::CellKey;
use super::grid::GridSize;

pub const MIN_PARTS: u32 = 1;
pub const MAX_PARTS: u32 = 2000;
pub const DEFAULT_PARTS: u32 = 3;

/// Everything that survives a restart: grid configuration, recorded cells and the walk cursor.
///
/// The default value is the state a fresh install (or an unreadable store) starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    size: GridSize,
    parts_count: u32,
    column_configs: BTreeMap<usize, ColumnConfig>,
    cells: BTreeMap<CellKey, CellRecord>,
    started: bool,
    cursor: Option<CellKey>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            size: GridSize::default(),
            parts_count: DEFAULT_PARTS,
            column_configs: BTreeMap::new(),
            cells: BTreeMap::new(),
            started: false,
            cursor: None,
        }
    }
}

impl Session {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn set_size(&mut self, size: GridSize) {
        self.size = size;
    }

    pub fn parts_count(&self) -> u32 {
        self.parts_count
    }

    pub fn set_parts_count(&mut self, parts_count: u32) {
        self.parts_count = parts_count.clamp(MIN_PARTS, MAX_PARTS);
    }

    pub fn column_configs(&self) -> &BTreeMap<usize, ColumnConfig> {
        &self.column_configs
    }

    pub fn column_config(&self, col: usize) -> Option<&ColumnConfig> {
        self.column_configs.get(&col)
    }

    /// Replaces the config of `col`; an empty config removes the entry.
    pub fn set_column_config(&mut self, col: usize, config: ColumnConfig) {
        if config.is_empty() {
            self.column_configs.remove(&col);
        } else {
            self.column_configs.insert(col, config);
        }
    }

    pub fn cells(&self) -> &BTreeMap<CellKey, CellRecord> {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut BTreeMap<CellKey, CellRecord> {
        &mut self.cells
    }

    pub fn cell(&self, key: CellKey) -> Option<&CellRecord> {
        self.cells.get(&key)
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn set_started(&mut self, started: bool) {
        self.started = started;
    }

    /// The raw cursor, which may point outside the grid after the dimensions shrank.
    pub fn cursor(&self) -> Option<CellKey> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Option<CellKey>) {
        self.cursor = cursor;
    }

    /// The cursor, if it addresses a cell inside the current grid.
    pub fn active_cursor(&self) -> Option<CellKey> {
        self.cursor.filter(|key| self.size.contains(*key))
    }

    /// Drops a cursor that no longer fits the grid.
    pub fn normalize_cursor(&mut self) {
        self.cursor = self.active_cursor();
    }

    /// A walk is in progress: started and waiting for input on some cell.
    pub fn is_walking(&self) -> bool {
        self.started && self.active_cursor().is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.started && self.active_cursor().is_none()
    }

    /// Clears recorded cells and the cursor; dimensions, parts and column configs stay.
    pub fn clear_contents(&mut self) {
        self.cells.clear();
        self.cursor = None;
        self.started = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{Session, DEFAULT_PARTS, MAX_PARTS};
    use crate::model::{CellKey, CellRecord, ColumnConfig, GridSize};

    #[test]
    fn default_session_is_idle_one_by_one() {
        let session = Session::default();
        assert_eq!(session.size(), GridSize::new(1, 1));
        assert_eq!(session.parts_count(), DEFAULT_PARTS);
        assert!(session.column_configs().is_empty());
        assert!(session.cells().is_empty());
        assert!(!session.is_started());
        assert_eq!(session.cursor(), None);
        assert!(!session.is_complete());
    }

    #[test]
    fn active_cursor_hides_out_of_bounds_cursor() {
        let mut session = Session::new(GridSize::new(3, 3));
        session.set_started(true);
        session.set_cursor(Some(CellKey::new(2, 2)));
        assert!(session.is_walking());

        session.set_size(GridSize::new(2, 2));
        assert_eq!(session.cursor(), Some(CellKey::new(2, 2)));
        assert_eq!(session.active_cursor(), None);
        assert!(session.is_complete());

        session.normalize_cursor();
        assert_eq!(session.cursor(), None);
    }

    #[test]
    fn clear_contents_keeps_configuration() {
        let mut session = Session::new(GridSize::new(4, 2));
        session.set_parts_count(40);
        session.set_column_config(1, ColumnConfig::new(Some("大剣".to_owned()), None));
        session.set_started(true);
        session.set_cursor(Some(CellKey::new(0, 1)));
        session.cells_mut().insert(CellKey::ORIGIN, CellRecord::Skipped);

        session.clear_contents();

        assert_eq!(session.size(), GridSize::new(4, 2));
        assert_eq!(session.parts_count(), 40);
        assert_eq!(session.column_config(1).and_then(|c| c.weapon()), Some("大剣"));
        assert!(session.cells().is_empty());
        assert!(!session.is_started());
        assert_eq!(session.cursor(), None);
    }

    #[test]
    fn empty_column_config_removes_entry() {
        let mut session = Session::default();
        session.set_column_config(0, ColumnConfig::new(None, Some("毒".to_owned())));
        assert_eq!(session.column_configs().len(), 1);
        session.set_column_config(0, ColumnConfig::default());
        assert!(session.column_configs().is_empty());
    }

    #[test]
    fn parts_count_is_clamped() {
        let mut session = Session::default();
        session.set_parts_count(0);
        assert_eq!(session.parts_count(), 1);
        session.set_parts_count(9999);
        assert_eq!(session.parts_count(), MAX_PARTS);
    }
}
