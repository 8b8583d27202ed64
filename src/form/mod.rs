// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interactive session: owns the current [`Session`], the pending selection and the transient UI
//! flags, runs walker transitions and persists every change.

use crate::catalog::{self, Catalog};
use crate::model::{CellKey, ColumnConfig, GridSize, Selection, Session};
use crate::notify::ToastNotifier;
use crate::store::{KeyValueStore, StateStore};
use crate::walk::{self, WalkOp};

pub const COMPLETE_MESSAGE: &str = "入力が完了しました。";

/// Composition root for one user at one terminal.
///
/// Dropping it drops the [`ToastNotifier`], which aborts any pending dismissal timer.
#[derive(Debug)]
pub struct FormSession<S> {
    session: Session,
    store: StateStore<S>,
    pending: Selection,
    reset_dialog_open: bool,
    editing_column: Option<usize>,
    toast: ToastNotifier,
    last_saved: Option<Session>,
}

impl<S: KeyValueStore> FormSession<S> {
    /// Loads the stored session (or defaults) and resumes from it.
    pub fn open(store: StateStore<S>, toast: ToastNotifier) -> Self {
        let session = store.load();
        let pending = session
            .active_cursor()
            .map(|cursor| Selection::from_record(session.cell(cursor)))
            .unwrap_or_default();
        Self {
            last_saved: Some(session.clone()),
            session,
            store,
            pending,
            reset_dialog_open: false,
            editing_column: None,
            toast,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &StateStore<S> {
        &self.store
    }

    pub fn pending(&self) -> &Selection {
        &self.pending
    }

    pub fn toast_message(&self) -> Option<String> {
        self.toast.current()
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.toast.show(message);
    }

    pub fn dismiss_toast(&mut self) {
        self.toast.dismiss();
    }

    // Walk

    pub fn start(&mut self) {
        self.reset_dialog_open = false;
        self.apply(WalkOp::Start);
        log::info!(
            "walk started on a {}x{} grid",
            self.session.size().rows(),
            self.session.size().cols()
        );
        self.toast.show("記録を開始しました");
    }

    /// Records the pending selection at the cursor and moves on. Returns whether it was recorded.
    pub fn proceed(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        let selection = self.pending.clone();
        if !self.apply(WalkOp::Commit(selection)) {
            return false;
        }
        self.announce_progress("記録しました");
        true
    }

    pub fn skip(&mut self) -> bool {
        if !self.can_skip() {
            return false;
        }
        if !self.apply(WalkOp::Skip) {
            return false;
        }
        self.announce_progress("スキップしました");
        true
    }

    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.apply(WalkOp::Retreat)
    }

    /// Moves the cursor to `key` of a started walk, including one that already finished.
    pub fn resume_at(&mut self, key: CellKey) -> bool {
        let moved = self.apply(WalkOp::ResumeAt(key));
        if moved {
            log::debug!("resumed at {key}");
        }
        moved
    }

    // Grid configuration

    pub fn set_rows(&mut self, rows: usize) {
        let size = self.session.size().with_rows(rows);
        self.resize(size);
    }

    pub fn set_cols(&mut self, cols: usize) {
        let size = self.session.size().with_cols(cols);
        if self.editing_column.is_some_and(|col| col >= size.cols()) {
            self.editing_column = None;
        }
        self.resize(size);
    }

    pub fn set_parts_count(&mut self, parts_count: u32) {
        self.session.set_parts_count(parts_count);
        self.persist();
    }

    // Column popover

    pub fn editing_column(&self) -> Option<usize> {
        self.editing_column
    }

    /// Opens the editor for `col`, or closes it when it is already open there.
    pub fn open_column_editor(&mut self, col: usize) {
        if col >= self.session.size().cols() {
            return;
        }
        self.editing_column = if self.editing_column == Some(col) {
            None
        } else {
            Some(col)
        };
    }

    pub fn close_column_editor(&mut self) {
        self.editing_column = None;
    }

    pub fn set_column_weapon(&mut self, col: usize, weapon: Option<&str>) -> bool {
        self.update_column(col, &catalog::weapons(), weapon, ColumnConfig::set_weapon)
    }

    pub fn set_column_attribute(&mut self, col: usize, attribute: Option<&str>) -> bool {
        self.update_column(col, &catalog::attributes(), attribute, ColumnConfig::set_attribute)
    }

    // Pending selection

    pub fn set_group_skill(&mut self, label: Option<&str>) -> bool {
        let Some(label) = checked_label(&catalog::group_skills(), label) else {
            return false;
        };
        self.pending.set_group_skill(label.unwrap_or_default());
        true
    }

    pub fn set_series_skill(&mut self, label: Option<&str>) -> bool {
        let Some(label) = checked_label(&catalog::series_skills(), label) else {
            return false;
        };
        self.pending.set_series_skill(label.unwrap_or_default());
        true
    }

    // Reset

    pub fn is_reset_dialog_open(&self) -> bool {
        self.reset_dialog_open
    }

    pub fn request_reset(&mut self) {
        self.reset_dialog_open = true;
    }

    pub fn confirm_reset(&mut self) -> bool {
        if !self.reset_dialog_open {
            return false;
        }
        self.reset_dialog_open = false;
        self.session.clear_contents();
        self.pending.clear();
        self.persist();
        log::info!("session contents reset");
        self.toast.show("リセットしました");
        true
    }

    pub fn cancel_reset(&mut self) {
        self.reset_dialog_open = false;
    }

    // Queries

    /// Weapon and attribute joined by `" × "`, or `種類N` when neither is set.
    pub fn header_label(&self, col: usize) -> String {
        header_label(&self.session, col)
    }

    /// `"<header>・<n>回目"` for the cell under the cursor.
    pub fn cursor_caption(&self) -> Option<String> {
        let cursor = self.session.active_cursor()?;
        Some(format!(
            "{}・{}回目",
            self.header_label(cursor.col()),
            cursor.row() + 1
        ))
    }

    pub fn can_proceed(&self) -> bool {
        self.session.is_walking() && self.pending.can_proceed()
    }

    pub fn can_skip(&self) -> bool {
        self.session.is_walking()
    }

    pub fn show_action_bar(&self) -> bool {
        self.can_skip()
    }

    pub fn can_go_back(&self) -> bool {
        walk::can_retreat(&self.session)
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    fn apply(&mut self, op: WalkOp) -> bool {
        let step = walk::apply_walk(&self.session, &op);
        let changed = step.session != self.session;
        step.selection.apply_to(&mut self.pending);
        self.session = step.session;
        self.persist();
        changed
    }

    fn announce_progress(&mut self, message: &str) {
        if self.session.is_complete() {
            log::info!("walk complete with {} cells", self.session.cells().len());
            self.toast.show(COMPLETE_MESSAGE);
        } else {
            self.toast.show(message);
        }
    }

    fn resize(&mut self, size: GridSize) {
        if size == self.session.size() {
            return;
        }
        self.session.set_size(size);
        let had_cursor = self.session.cursor().is_some();
        self.session.normalize_cursor();
        if had_cursor && self.session.cursor().is_none() {
            log::debug!("cursor dropped after resize to {}x{}", size.rows(), size.cols());
            self.pending.clear();
        }
        self.persist();
    }

    fn update_column(
        &mut self,
        col: usize,
        catalog: &Catalog,
        label: Option<&str>,
        set: fn(&mut ColumnConfig, Option<String>),
    ) -> bool {
        let Some(label) = checked_label(catalog, label) else {
            return false;
        };
        let mut config = self.session.column_config(col).cloned().unwrap_or_default();
        set(&mut config, label.map(ToOwned::to_owned));
        self.session.set_column_config(col, config);
        self.persist();
        true
    }

    fn persist(&mut self) {
        if self.last_saved.as_ref() == Some(&self.session) {
            return;
        }
        if self.store.save(&self.session) {
            self.last_saved = Some(self.session.clone());
        }
    }
}

pub fn header_label(session: &Session, col: usize) -> String {
    let labels: Vec<&str> = session
        .column_config(col)
        .map(|config| config.weapon().into_iter().chain(config.attribute()).collect())
        .unwrap_or_default();
    if labels.is_empty() {
        format!("種類{}", col + 1)
    } else {
        labels.join(" × ")
    }
}

// `Some(None)` clears, `Some(Some(label))` sets, `None` rejects an unknown label.
fn checked_label<'a>(catalog: &Catalog, label: Option<&'a str>) -> Option<Option<&'a str>> {
    match label {
        None | Some("") => Some(None),
        Some(label) if catalog.contains(label) => Some(Some(label)),
        Some(label) => {
            log::warn!("ignoring unknown {} {label:?}", catalog.kind().title());
            None
        }
    }
}
