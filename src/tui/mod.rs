// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI (ratatui + crossterm).
//!
//! Draws the header controls, the tally grid, the bottom action bar and the overlays (pickers,
//! reset dialog, help), and maps key presses onto [`FormSession`] actions.

use std::{error::Error, io, ops::Range, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{
        Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState,
        Wrap,
    },
};

use crate::catalog::{self, Catalog, CatalogKind};
use crate::form::FormSession;
use crate::model::{CellKey, CellRecord, Session};
use crate::store::KeyValueStore;

mod theme;

use theme::TuiTheme;

/// Parts one attempt is assumed to consume, for the running estimate in the action bar.
pub const PARTS_PER_ATTEMPT: u32 = 3;

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const GRID_ROW_LABEL_WIDTH: u16 = 8;
const GRID_COLUMN_WIDTH: u16 = 24;

/// Runs the interactive terminal UI until the user quits.
pub fn run<S: KeyValueStore>(form: FormSession<S>) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(form, TuiTheme::default());

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw<S: KeyValueStore>(frame: &mut Frame<'_>, app: &mut App<S>) {
    let area = frame.area();
    let action_bar_height = if app.form.show_action_bar() || app.form.is_complete() {
        5
    } else {
        0
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(action_bar_height),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(Block::default().style(app.theme.base_style()), area);
    render_header_controls(frame, app, layout[0]);
    render_grid(frame, app, layout[1]);
    if action_bar_height > 0 {
        render_action_bar(frame, app, layout[2]);
    }
    frame.render_widget(Paragraph::new(footer_line(app)), layout[3]);

    if let Some(picker) = &app.picker {
        render_picker(frame, &app.form, &app.theme, picker, area);
    }
    if app.form.is_reset_dialog_open() {
        render_reset_dialog(frame, &app.theme, area);
    }
    if app.show_help {
        render_help(frame, app, area);
    }
}

include!("chrome.rs");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerTarget {
    GroupSkill,
    SeriesSkill,
    Weapon(usize),
    Attribute(usize),
}

impl PickerTarget {
    fn kind(self) -> CatalogKind {
        match self {
            Self::GroupSkill => CatalogKind::GroupSkill,
            Self::SeriesSkill => CatalogKind::SeriesSkill,
            Self::Weapon(_) => CatalogKind::Weapon,
            Self::Attribute(_) => CatalogKind::Attribute,
        }
    }

    fn catalog(self) -> Catalog {
        catalog::catalog(self.kind())
    }

    fn column(self) -> Option<usize> {
        match self {
            Self::Weapon(col) | Self::Attribute(col) => Some(col),
            Self::GroupSkill | Self::SeriesSkill => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerItem {
    Clear,
    Entry(usize),
}

/// Filterable option list over one catalog.
#[derive(Debug, Clone)]
struct Picker {
    target: PickerTarget,
    query: String,
    items: Vec<PickerItem>,
    selected: usize,
}

impl Picker {
    fn new(target: PickerTarget, current: Option<&str>) -> Self {
        let mut picker = Self {
            target,
            query: String::new(),
            items: Vec::new(),
            selected: 0,
        };
        picker.refresh();
        if let Some(index) = current.and_then(|label| target.catalog().position(label)) {
            picker.selected = picker
                .items
                .iter()
                .position(|item| *item == PickerItem::Entry(index))
                .unwrap_or(0);
        }
        picker
    }

    fn refresh(&mut self) {
        let catalog = self.target.catalog();
        let mut items = Vec::new();
        if self.query.trim().is_empty() {
            items.push(PickerItem::Clear);
        }
        items.extend(catalog::search(&catalog, &self.query).into_iter().map(PickerItem::Entry));
        self.items = items;
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    fn push_char(&mut self, ch: char) {
        self.query.push(ch);
        self.selected = 0;
        self.refresh();
    }

    fn pop_char(&mut self) {
        self.query.pop();
        self.selected = 0;
        self.refresh();
    }

    fn move_by(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    /// `Some(None)` clears the value, `Some(Some(label))` picks it, `None` means nothing matched.
    fn chosen(&self) -> Option<Option<&'static str>> {
        match self.items.get(self.selected)? {
            PickerItem::Clear => Some(None),
            PickerItem::Entry(index) => {
                let entry = self.target.catalog().entries().get(*index)?;
                Some(Some(entry.ja))
            }
        }
    }
}

struct App<S> {
    form: FormSession<S>,
    theme: TuiTheme,
    /// Cell highlighted for `Space` (resume); follows the walk cursor.
    grid_cursor: CellKey,
    selected_col: usize,
    picker: Option<Picker>,
    show_help: bool,
    help_scroll: u16,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    fn new(form: FormSession<S>, theme: TuiTheme) -> Self {
        let mut app = Self {
            form,
            theme,
            grid_cursor: CellKey::ORIGIN,
            selected_col: 0,
            picker: None,
            show_help: false,
            help_scroll: 0,
            should_quit: false,
        };
        app.follow_walk_cursor();
        app
    }

    fn session(&self) -> &Session {
        self.form.session()
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the app should quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                _ => {}
            }
            return false;
        }

        if self.form.is_reset_dialog_open() {
            match code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    self.form.confirm_reset();
                    self.follow_walk_cursor();
                }
                KeyCode::Char('n') | KeyCode::Esc => self.form.cancel_reset(),
                _ => {}
            }
            return false;
        }

        if self.picker.is_some() {
            self.handle_picker_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => {
                self.show_help = true;
                self.help_scroll = 0;
            }
            KeyCode::Char('+') => self.resize_rows(1),
            KeyCode::Char('-') => self.resize_rows(-1),
            KeyCode::Char('>') => self.resize_cols(1),
            KeyCode::Char('<') => self.resize_cols(-1),
            KeyCode::Char('P') => self.adjust_parts(1),
            KeyCode::Char('p') => self.adjust_parts(-1),
            KeyCode::Char(']') => self.adjust_parts(10),
            KeyCode::Char('[') => self.adjust_parts(-10),
            KeyCode::Char('h') => self.select_col(-1),
            KeyCode::Char('l') => self.select_col(1),
            KeyCode::Char('w') => self.open_column_picker(PickerTarget::Weapon(self.selected_col)),
            KeyCode::Char('e') => {
                self.open_column_picker(PickerTarget::Attribute(self.selected_col));
            }
            KeyCode::Char('s') => {
                self.form.start();
                self.follow_walk_cursor();
            }
            KeyCode::Char('r') => self.form.request_reset(),
            KeyCode::Char('g') => self.open_skill_picker(PickerTarget::GroupSkill),
            KeyCode::Char('t') => self.open_skill_picker(PickerTarget::SeriesSkill),
            KeyCode::Enter => {
                if self.form.proceed() {
                    self.follow_walk_cursor();
                } else if self.form.show_action_bar() {
                    self.form.notify("スキルを2つとも選んでください");
                }
            }
            KeyCode::Char('x') => {
                if self.form.skip() {
                    self.follow_walk_cursor();
                }
            }
            KeyCode::Char('b') | KeyCode::Backspace => {
                if self.form.back() {
                    self.follow_walk_cursor();
                }
            }
            KeyCode::Left => self.move_grid_cursor(-1, 0),
            KeyCode::Right => self.move_grid_cursor(1, 0),
            KeyCode::Up => self.move_grid_cursor(0, -1),
            KeyCode::Down => self.move_grid_cursor(0, 1),
            KeyCode::Char(' ') => {
                if self.form.resume_at(self.grid_cursor) {
                    self.follow_walk_cursor();
                } else if !self.session().is_started() {
                    self.form.notify("開始すると任意のマスから再開できます");
                }
            }
            KeyCode::Esc => self.form.dismiss_toast(),
            _ => {}
        }
        false
    }

    fn handle_picker_key(&mut self, code: KeyCode) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => self.close_picker(),
            KeyCode::Enter => {
                let target = picker.target;
                if let Some(label) = picker.chosen() {
                    self.apply_pick(target, label);
                }
                self.close_picker();
            }
            KeyCode::Up => picker.move_by(-1),
            KeyCode::Down | KeyCode::Tab => picker.move_by(1),
            KeyCode::Backspace => picker.pop_char(),
            KeyCode::Char(ch) => picker.push_char(ch),
            _ => {}
        }
    }

    fn apply_pick(&mut self, target: PickerTarget, label: Option<&str>) {
        match target {
            PickerTarget::GroupSkill => {
                self.form.set_group_skill(label);
            }
            PickerTarget::SeriesSkill => {
                self.form.set_series_skill(label);
            }
            PickerTarget::Weapon(col) => {
                self.form.set_column_weapon(col, label);
            }
            PickerTarget::Attribute(col) => {
                self.form.set_column_attribute(col, label);
            }
        }
    }

    fn open_skill_picker(&mut self, target: PickerTarget) {
        if !self.form.show_action_bar() {
            self.form.notify("記録中のみ選択できます");
            return;
        }
        let pending = self.form.pending();
        let current = match target {
            PickerTarget::GroupSkill => pending.group_skill(),
            _ => pending.series_skill(),
        };
        let current = (!current.is_empty()).then_some(current);
        self.picker = Some(Picker::new(target, current));
    }

    fn open_column_picker(&mut self, target: PickerTarget) {
        let Some(col) = target.column() else {
            return;
        };
        self.form.open_column_editor(col);
        if self.form.editing_column() != Some(col) {
            return;
        }
        let config = self.session().column_config(col);
        let current = match target {
            PickerTarget::Weapon(_) => config.and_then(|config| config.weapon()),
            _ => config.and_then(|config| config.attribute()),
        };
        self.picker = Some(Picker::new(target, current));
    }

    fn close_picker(&mut self) {
        if let Some(picker) = self.picker.take() {
            if picker.target.column().is_some() {
                self.form.close_column_editor();
            }
        }
    }

    fn resize_rows(&mut self, delta: isize) {
        let rows = self.session().size().rows().saturating_add_signed(delta);
        self.form.set_rows(rows);
        self.clamp_grid_cursor();
    }

    fn resize_cols(&mut self, delta: isize) {
        let cols = self.session().size().cols().saturating_add_signed(delta);
        self.form.set_cols(cols);
        self.clamp_grid_cursor();
    }

    fn adjust_parts(&mut self, delta: i64) {
        let parts = i64::from(self.session().parts_count()).saturating_add(delta);
        let parts = u32::try_from(parts.max(0)).unwrap_or(u32::MAX);
        self.form.set_parts_count(parts);
    }

    fn select_col(&mut self, delta: isize) {
        let last = self.session().size().cols() - 1;
        self.selected_col = self.selected_col.saturating_add_signed(delta).min(last);
    }

    fn move_grid_cursor(&mut self, dcol: isize, drow: isize) {
        let size = self.session().size();
        let col = self.grid_cursor.col().saturating_add_signed(dcol).min(size.cols() - 1);
        let row = self.grid_cursor.row().saturating_add_signed(drow).min(size.rows() - 1);
        self.grid_cursor = CellKey::new(col, row);
        self.selected_col = col;
    }

    fn follow_walk_cursor(&mut self) {
        if let Some(cursor) = self.session().active_cursor() {
            self.grid_cursor = cursor;
            self.selected_col = cursor.col();
        }
        self.clamp_grid_cursor();
    }

    fn clamp_grid_cursor(&mut self) {
        let size = self.session().size();
        self.grid_cursor = CellKey::new(
            self.grid_cursor.col().min(size.cols() - 1),
            self.grid_cursor.row().min(size.rows() - 1),
        );
        self.selected_col = self.selected_col.min(size.cols() - 1);
    }
}

/// Remaining parts after `row` attempts, assuming [`PARTS_PER_ATTEMPT`] per attempt.
pub fn estimated_parts(parts_count: u32, row: usize) -> u32 {
    let used = u32::try_from(row)
        .unwrap_or(u32::MAX)
        .saturating_mul(PARTS_PER_ATTEMPT);
    parts_count.saturating_sub(used)
}

/// Plain-text dump of the grid, one line per attempt.
pub fn grid_as_text(session: &Session) -> String {
    let size = session.size();
    let mut out = String::new();
    out.push_str("回数");
    for col in 0..size.cols() {
        out.push('\t');
        out.push_str(&crate::form::header_label(session, col));
    }
    out.push('\n');
    for row in 0..size.rows() {
        out.push_str(&format!("{}回目", row + 1));
        for col in 0..size.cols() {
            out.push('\t');
            let key = CellKey::new(col, row);
            let text = cell_text(session.cell(key));
            if text.is_empty() {
                out.push('-');
            } else {
                out.push_str(&text);
            }
        }
        out.push('\n');
    }
    out
}

fn cell_text(record: Option<&CellRecord>) -> String {
    match record {
        Some(CellRecord::Recorded {
            group_skill,
            series_skill,
        }) => format!("{group_skill} / {series_skill}"),
        Some(CellRecord::Skipped) => "×".to_owned(),
        None => String::new(),
    }
}

/// Columns that fit `width`, scrolled so `selected` stays visible.
fn visible_columns(width: u16, cols: usize, selected: usize) -> Range<usize> {
    let available = width.saturating_sub(GRID_ROW_LABEL_WIDTH + 2);
    let fit = usize::from((available / (GRID_COLUMN_WIDTH + 1)).max(1)).min(cols);
    let start = selected.saturating_add(1).saturating_sub(fit).min(cols - fit);
    start..start + fit
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
