// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Header, grid, action bar, footer, overlay, and style helpers used by TUI rendering.
fn render_header_controls<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let session = app.session();
    let theme = &app.theme;
    let size = session.size();

    let status = if session.is_walking() {
        Span::styled("記録中", theme.active_status_style())
    } else if session.is_complete() {
        Span::styled("完了", theme.success_style())
    } else {
        Span::styled("未開始", theme.disabled_style())
    };

    let mut spans = Vec::<Span<'static>>::new();
    push_control(&mut spans, theme, "何回やるか", size.rows().to_string(), "-/+");
    push_control(&mut spans, theme, "いくつの種類でやるか", size.cols().to_string(), "</>");
    push_control(
        &mut spans,
        theme,
        "所持パーツ",
        session.parts_count().to_string(),
        "p/P [/]",
    );
    spans.push(Span::raw("  "));
    spans.push(status);
    spans.push(Span::raw("  "));
    spans.push(Span::styled("[s]", help_key_style()));
    spans.push(Span::raw(" 開始 "));
    spans.push(Span::styled("[r]", help_key_style()));
    spans.push(Span::raw(" リセット"));

    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ アーティア武器 強化記録 ")
        .border_style(theme.panel_border_style(false));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn push_control(
    spans: &mut Vec<Span<'static>>,
    theme: &TuiTheme,
    label: &str,
    value: String,
    keys: &str,
) {
    if !spans.is_empty() {
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(format!("{label} "), theme.label_style()));
    spans.push(Span::styled(value, theme.value_style()));
    spans.push(Span::styled(format!(" ({keys})"), theme.disabled_style()));
}

fn render_grid<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let session = app.session();
    let theme = &app.theme;
    let size = session.size();
    let columns = visible_columns(area.width, size.cols(), app.selected_col);
    let walk_cursor = session.active_cursor();

    let header = Row::new(std::iter::once(Cell::from("")).chain(columns.clone().map(|col| {
        let label = app.form.header_label(col);
        let label = if app.form.editing_column() == Some(col) {
            format!("▾ {label}")
        } else {
            label
        };
        Cell::from(label).style(theme.column_header_style(col == app.selected_col))
    })));

    let rows = (0..size.rows()).map(|row| {
        let label = Cell::from(format!("{}回目", row + 1)).style(theme.label_style());
        let cells = columns.clone().map(|col| {
            let key = CellKey::new(col, row);
            let record = session.cell(key);
            let mut style = theme.cell_style(record);
            if walk_cursor == Some(key) {
                style = theme.active_cell_style();
            } else if session.is_started() && app.grid_cursor == key {
                style = style.patch(theme.selection_style());
            }
            Cell::from(cell_text(record)).style(style)
        });
        Row::new(std::iter::once(label).chain(cells))
    });

    let widths = std::iter::once(Constraint::Length(GRID_ROW_LABEL_WIDTH))
        .chain(columns.clone().map(|_| Constraint::Length(GRID_COLUMN_WIDTH)));

    let mut title = format!("─ 記録 {}×{} ", size.rows(), size.cols());
    if columns.len() < size.cols() {
        title.push_str(&format!("[{}-{}/{}] ", columns.start + 1, columns.end, size.cols()));
    }
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme.panel_border_style(session.is_walking())),
        );
    let mut state = TableState::default().with_selected(Some(app.grid_cursor.row()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_action_bar<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let theme = &app.theme;
    let form = &app.form;

    if form.is_complete() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.success_style());
        let lines = vec![
            Line::from(Span::styled(crate::form::COMPLETE_MESSAGE, theme.success_style())),
            Line::from(vec![
                Span::styled("Space", help_key_style()),
                Span::raw(" 選んだマスから再開  "),
                Span::styled("r", help_key_style()),
                Span::raw(" リセット"),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let Some(cursor) = form.session().active_cursor() else {
        return;
    };
    let caption = form.cursor_caption().unwrap_or_default();
    let pending = form.pending();
    let estimate = estimated_parts(form.session().parts_count(), cursor.row());

    let lines = vec![
        Line::from(vec![
            Span::styled("グループスキル ", theme.label_style()),
            pending_value(theme, pending.group_skill()),
            Span::styled(" (g)", theme.disabled_style()),
            Span::raw("   "),
            Span::styled("シリーズスキル ", theme.label_style()),
            pending_value(theme, pending.series_skill()),
            Span::styled(" (t)", theme.disabled_style()),
        ]),
        Line::from(vec![
            Span::styled("推定所持パーツ ", theme.label_style()),
            Span::styled(estimate.to_string(), theme.value_style()),
        ]),
        action_keys_line(theme, form.can_proceed(), form.can_go_back()),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("─ {caption} "))
        .border_style(theme.panel_border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn pending_value(theme: &TuiTheme, value: &str) -> Span<'static> {
    if value.is_empty() {
        Span::styled("未選択", theme.disabled_style())
    } else {
        Span::styled(value.to_owned(), theme.value_style())
    }
}

fn action_keys_line(theme: &TuiTheme, can_proceed: bool, can_go_back: bool) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    push_footer_entry_maybe_disabled(&mut spans, "次へ", "Enter", !can_proceed);
    push_footer_entry(&mut spans, "スキップ", "x");
    push_footer_entry_maybe_disabled(&mut spans, "戻る", "b", !can_go_back);
    let mut line = Line::from(spans);
    line.style = theme.base_style();
    line
}

fn footer_line<S: KeyValueStore>(app: &App<S>) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    push_footer_entry(&mut spans, "HELP", "?");
    push_footer_entry(&mut spans, "QUIT", "q");
    push_footer_entry(&mut spans, "COLUMN", "h/l w/e");
    push_footer_entry(&mut spans, "CELL", "←↑↓→ Space");
    if let Some(toast) = app.form.toast_message() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(toast, app.theme.toast_style()));
    }
    Line::from(spans)
}

fn render_picker<S: KeyValueStore>(
    frame: &mut Frame<'_>,
    form: &FormSession<S>,
    theme: &TuiTheme,
    picker: &Picker,
    area: Rect,
) {
    let area = centered_rect(56, 70, area);
    frame.render_widget(Clear, area);

    let kind = picker.target.kind();
    let title = match picker.target.column() {
        Some(col) => format!("─ {}: {} ", form.header_label(col), kind.title()),
        None => format!("─ {} ", kind.title()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.panel_border_style(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let query = Line::from(vec![
        Span::styled("絞り込み: ", theme.label_style()),
        Span::raw(picker.query.clone()),
        Span::styled("▏", help_key_style()),
    ]);
    frame.render_widget(Paragraph::new(query), parts[0]);

    let catalog = picker.target.catalog();
    let items: Vec<ListItem<'static>> = picker
        .items
        .iter()
        .map(|item| match item {
            PickerItem::Clear => ListItem::new(Line::from(Span::styled(
                "（未選択に戻す）",
                theme.disabled_style(),
            ))),
            PickerItem::Entry(index) => match catalog.entries().get(*index) {
                Some(entry) => ListItem::new(picker_entry_line(theme, entry)),
                None => ListItem::new(""),
            },
        })
        .collect();
    let list = List::new(items).highlight_style(theme.selection_style());
    let mut state = ListState::default().with_selected(Some(picker.selected));
    frame.render_stateful_widget(list, parts[1], &mut state);
}

fn picker_entry_line(theme: &TuiTheme, entry: &catalog::CatalogEntry) -> Line<'static> {
    let mut spans = vec![
        Span::raw(entry.ja.to_owned()),
        Span::styled(format!("  {}", entry.en), theme.disabled_style()),
    ];
    if let Some(sub_label) = entry.sub_label {
        spans.push(Span::styled(format!("  [{sub_label}]"), theme.label_style()));
    }
    Line::from(spans)
}

fn render_reset_dialog(frame: &mut Frame<'_>, theme: &TuiTheme, area: Rect) {
    let area = centered_rect(50, 30, area);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled("記録をリセットしますか？", help_header_style())),
        Line::from("入力したデータはすべて消去されます。"),
        Line::from("回数・種類・武器と属性の設定は残ります。"),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", help_key_style()),
            Span::raw(" リセット   "),
            Span::styled("[n]", help_key_style()),
            Span::raw(" キャンセル"),
        ]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ リセット ")
        .border_style(theme.error_style());
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn help_key_style() -> Style {
    Style::default()
        .fg(FOOTER_KEY_COLOR)
        .add_modifier(Modifier::BOLD)
}

fn help_header_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

const HELP_ENTRIES: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[("?", "Help (toggle)"), ("q", "Quit"), ("Esc", "Dismiss message")],
    ),
    (
        "Grid",
        &[
            ("-/+", "Fewer/more attempts (1-50)"),
            ("</>", "Fewer/more categories (1-20)"),
            ("p/P, [/]", "Owned parts -1/+1, -10/+10"),
            ("h/l", "Select column"),
            ("w/e", "Set weapon/attribute of selected column"),
        ],
    ),
    (
        "Walk",
        &[
            ("s", "Start (clears recorded cells)"),
            ("g/t", "Pick group/series skill"),
            ("Enter", "Record and go to next cell"),
            ("x", "Skip cell"),
            ("b/Backspace", "Back to previous cell"),
            ("←↑↓→ Space", "Pick a cell and resume there"),
            ("r", "Reset (asks for confirmation)"),
        ],
    ),
    (
        "Picker",
        &[
            ("Type", "Filter options"),
            ("↑/↓", "Move selection"),
            ("Enter", "Choose"),
            ("Esc", "Close"),
        ],
    ),
];

fn render_help<S: KeyValueStore>(frame: &mut Frame<'_>, app: &mut App<S>, area: Rect) {
    let area = centered_rect(70, 80, area);
    frame.render_widget(Clear, area);

    let key_style = help_key_style();
    let header_style = help_header_style();
    let key_col_width = HELP_ENTRIES
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();
    for (section, entries) in HELP_ENTRIES {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(format!("--- {section} ---"), header_style)));
        for (key, desc) in *entries {
            lines.push(help_kv(key, desc, key_col_width, key_style));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ Help ─")
        .border_style(app.theme.panel_border_style(true))
        .title_style(app.theme.panel_border_style(true).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    let max_scroll = lines
        .len()
        .saturating_sub(inner.height.max(1) as usize)
        .min(u16::MAX as usize) as u16;
    app.help_scroll = app.help_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    push_footer_entry_maybe_disabled(spans, label, value, false);
}

fn push_footer_entry_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    disabled: bool,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(
            " | ".to_owned(),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.extend(footer_value_spans(value, disabled));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}

fn footer_value_spans(value: &str, disabled: bool) -> Vec<Span<'static>> {
    let color = if disabled {
        Color::DarkGray
    } else {
        FOOTER_KEY_COLOR
    };
    vec![Span::styled(
        value.to_owned(),
        Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD),
    )]
}
