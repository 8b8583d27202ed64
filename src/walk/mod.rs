// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grid walker: the cursor state machine.
//!
//! Transitions are pure: each takes the current `Session` snapshot and returns a new one together
//! with what should happen to the pending selection. Cells are visited column-major, one at a
//! time: every row of column 0, then column 1, and so on. Once the last cell is left the cursor
//! becomes terminal (`None`) and further moves are no-ops.
//!
//! A cursor outside the current grid (left behind by a dimension shrink) counts as terminal.

use crate::model::{CellKey, CellRecord, GridSize, Selection, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkOp {
    Start,
    Advance,
    Retreat,
    Commit(Selection),
    Skip,
    ResumeAt(CellKey),
}

/// What a transition does to the pending selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionUpdate {
    Unchanged,
    Cleared,
    Restored(Selection),
}

impl SelectionUpdate {
    pub fn apply_to(self, pending: &mut Selection) {
        match self {
            Self::Unchanged => {}
            Self::Cleared => pending.clear(),
            Self::Restored(selection) => *pending = selection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub session: Session,
    pub selection: SelectionUpdate,
}

impl Step {
    fn unchanged(session: &Session) -> Self {
        let mut session = session.clone();
        session.normalize_cursor();
        Self {
            session,
            selection: SelectionUpdate::Unchanged,
        }
    }
}

pub fn apply_walk(session: &Session, op: &WalkOp) -> Step {
    match op {
        WalkOp::Start => start(session),
        WalkOp::Advance => advance(session),
        WalkOp::Retreat => retreat(session),
        WalkOp::Commit(selection) => commit(session, selection),
        WalkOp::Skip => skip(session),
        WalkOp::ResumeAt(key) => resume_at(session, *key),
    }
}

/// Cell after `key` in column-major order, `None` past the last cell.
pub fn next_cell(size: GridSize, key: CellKey) -> Option<CellKey> {
    if key.row() + 1 < size.rows() {
        Some(CellKey::new(key.col(), key.row() + 1))
    } else if key.col() + 1 < size.cols() {
        Some(CellKey::new(key.col() + 1, 0))
    } else {
        None
    }
}

/// Cell before `key` in column-major order, `None` at the origin.
pub fn prev_cell(size: GridSize, key: CellKey) -> Option<CellKey> {
    if key.row() > 0 {
        Some(CellKey::new(key.col(), key.row() - 1))
    } else if key.col() > 0 {
        Some(CellKey::new(key.col() - 1, size.rows() - 1))
    } else {
        None
    }
}

/// Every cell of `size` in visiting order.
pub fn traversal(size: GridSize) -> impl Iterator<Item = CellKey> {
    (0..size.cols()).flat_map(move |col| (0..size.rows()).map(move |row| CellKey::new(col, row)))
}

pub fn start(session: &Session) -> Step {
    let mut next = session.clone();
    next.cells_mut().clear();
    next.set_started(true);
    next.set_cursor(Some(CellKey::ORIGIN));
    Step {
        session: next,
        selection: SelectionUpdate::Cleared,
    }
}

pub fn advance(session: &Session) -> Step {
    let Some(cursor) = session.active_cursor() else {
        return Step::unchanged(session);
    };
    let mut next = session.clone();
    next.set_cursor(next_cell(session.size(), cursor));
    Step {
        session: next,
        selection: SelectionUpdate::Cleared,
    }
}

pub fn retreat(session: &Session) -> Step {
    let Some(target) = session
        .active_cursor()
        .and_then(|cursor| prev_cell(session.size(), cursor))
    else {
        return Step::unchanged(session);
    };
    move_to(session, target)
}

/// Records both skills at the cursor and advances. Incomplete selections are ignored.
pub fn commit(session: &Session, selection: &Selection) -> Step {
    let (Some(cursor), Some(record)) = (session.active_cursor(), selection.to_record()) else {
        return Step::unchanged(session);
    };
    record_and_advance(session, cursor, record)
}

pub fn skip(session: &Session) -> Step {
    let Some(cursor) = session.active_cursor() else {
        return Step::unchanged(session);
    };
    record_and_advance(session, cursor, CellRecord::Skipped)
}

/// Jumps the cursor to any cell of a started walk, restoring what was recorded there.
pub fn resume_at(session: &Session, target: CellKey) -> Step {
    if !session.is_started() || !session.size().contains(target) {
        return Step::unchanged(session);
    }
    move_to(session, target)
}

pub fn can_retreat(session: &Session) -> bool {
    session.active_cursor().is_some_and(|cursor| !cursor.is_origin())
}

fn move_to(session: &Session, target: CellKey) -> Step {
    let mut next = session.clone();
    next.set_cursor(Some(target));
    let restored = Selection::from_record(session.cell(target));
    Step {
        session: next,
        selection: SelectionUpdate::Restored(restored),
    }
}

fn record_and_advance(session: &Session, cursor: CellKey, record: CellRecord) -> Step {
    let mut next = session.clone();
    next.cells_mut().insert(cursor, record);
    next.set_cursor(next_cell(session.size(), cursor));
    Step {
        session: next,
        selection: SelectionUpdate::Cleared,
    }
}
