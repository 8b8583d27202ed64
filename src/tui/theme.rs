// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::{Color, Modifier, Style};

use crate::model::CellRecord;

/// Styles for the tally sheet, on the terminal's own foreground and background.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TuiTheme;

impl TuiTheme {
    pub(crate) fn base_style(&self) -> Style {
        Style::default()
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(Color::Yellow)
        } else {
            self.base_style()
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style()
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style().fg(Color::Red)
    }

    pub(crate) fn success_style(&self) -> Style {
        self.base_style()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn active_status_style(&self) -> Style {
        self.base_style()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn toast_style(&self) -> Style {
        self.base_style().fg(Color::LightCyan)
    }

    pub(crate) fn label_style(&self) -> Style {
        self.base_style().fg(Color::Gray)
    }

    pub(crate) fn value_style(&self) -> Style {
        self.base_style()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn disabled_style(&self) -> Style {
        self.base_style().fg(Color::DarkGray)
    }

    pub(crate) fn column_header_style(&self, selected: bool) -> Style {
        let style = self.base_style().add_modifier(Modifier::BOLD);
        if selected {
            style.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    /// Cell under the walk cursor.
    pub(crate) fn active_cell_style(&self) -> Style {
        self.base_style()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Recorded cells are green, skipped ones dimmed, unvisited ones plain.
    pub(crate) fn cell_style(&self, record: Option<&CellRecord>) -> Style {
        match record {
            Some(CellRecord::Recorded { .. }) => self.base_style().fg(Color::Green),
            Some(CellRecord::Skipped) => self.disabled_style(),
            None => self.base_style(),
        }
    }
}
