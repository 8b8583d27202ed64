// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use artian::catalog::{group_skills, series_skills};
use artian::model::{CellKey, CellRecord, ColumnConfig, GridSize, Session};
use artian::walk::traversal;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("artian_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// 10 attempts × 3 categories, first half recorded.
    Small,
    /// 50 × 20, every cell visited, every fifth skipped.
    Full,
}

pub fn size(case: Case) -> GridSize {
    match case {
        Case::Small => GridSize::new(10, 3),
        Case::Full => GridSize::new(50, 20),
    }
}

pub fn session(case: Case) -> Session {
    let size = size(case);
    let visited = match case {
        Case::Small => size.cell_count() / 2,
        Case::Full => size.cell_count(),
    };

    let groups = group_skills();
    let series = series_skills();
    let mut session = Session::new(size);
    session.set_parts_count(300);
    session.set_started(true);
    for col in 0..size.cols() {
        session.set_column_config(
            col,
            ColumnConfig::new(Some("大剣".to_owned()), Some("火属性".to_owned())),
        );
    }

    let mut last = None;
    for (idx, key) in traversal(size).take(visited).enumerate() {
        let record = if idx % 5 == 4 {
            CellRecord::Skipped
        } else {
            let group = groups.entries()[idx % groups.len()].ja;
            let series = series.entries()[idx % series.len()].ja;
            CellRecord::recorded(group, series).expect("catalog labels are non-empty")
        };
        session.cells_mut().insert(key, record);
        last = Some(key);
    }
    let cursor = last.and_then(|key| artian::walk::next_cell(size, key));
    session.set_cursor(if visited == 0 { Some(CellKey::ORIGIN) } else { cursor });
    session
}
