// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// JSON mirror of the stored record and its conversion to/from `Session`.
/// Field names are camelCase to stay readable by records written by earlier versions.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredStateJson {
    #[serde(default)]
    count: Option<i64>,
    #[serde(default)]
    types: Option<i64>,
    #[serde(default)]
    parts_count: Option<i64>,
    #[serde(default)]
    column_configs: Option<BTreeMap<String, ColumnConfigJson>>,
    #[serde(default)]
    cell_data: Option<BTreeMap<String, CellJson>>,
    #[serde(default)]
    is_started: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_cursor")]
    cursor: Option<CursorJson>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredStateRef<'a> {
    count: usize,
    types: usize,
    parts_count: u32,
    #[serde(serialize_with = "serialize_column_configs")]
    column_configs: &'a BTreeMap<usize, ColumnConfig>,
    #[serde(serialize_with = "serialize_cells")]
    cell_data: &'a BTreeMap<CellKey, CellRecord>,
    is_started: bool,
    cursor: Option<CursorJson>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct ColumnConfigJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weapon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attribute: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CellJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_skill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    series_skill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    skipped: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CursorJson {
    col: i64,
    row: i64,
}

impl<'a> From<&'a Session> for StoredStateRef<'a> {
    fn from(session: &'a Session) -> Self {
        Self {
            count: session.size().rows(),
            types: session.size().cols(),
            parts_count: session.parts_count(),
            column_configs: session.column_configs(),
            cell_data: session.cells(),
            is_started: session.is_started(),
            cursor: session.cursor().map(|key| CursorJson {
                col: key.col() as i64,
                row: key.row() as i64,
            }),
        }
    }
}

impl From<&ColumnConfig> for ColumnConfigJson {
    fn from(config: &ColumnConfig) -> Self {
        Self {
            weapon: config.weapon().map(ToOwned::to_owned),
            attribute: config.attribute().map(ToOwned::to_owned),
        }
    }
}

impl From<&CellRecord> for CellJson {
    fn from(record: &CellRecord) -> Self {
        match record {
            CellRecord::Recorded {
                group_skill,
                series_skill,
            } => Self {
                group_skill: Some(group_skill.clone()),
                series_skill: Some(series_skill.clone()),
                skipped: None,
            },
            CellRecord::Skipped => Self {
                skipped: Some(true),
                ..Self::default()
            },
        }
    }
}

fn serialize_column_configs<S: Serializer>(
    configs: &&BTreeMap<usize, ColumnConfig>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(
        configs
            .iter()
            .map(|(col, config)| (col.to_string(), ColumnConfigJson::from(config))),
    )
}

// Emitted in `CellKey` order (column-major), not string order.
fn serialize_cells<S: Serializer>(
    cells: &&BTreeMap<CellKey, CellRecord>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(
        cells
            .iter()
            .map(|(key, record)| (key.to_string(), CellJson::from(record))),
    )
}

// A malformed cursor only costs the cursor, not the rest of the record.
fn deserialize_cursor<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<CursorJson>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match CursorJson::deserialize(&value) {
        Ok(cursor) => Ok(Some(cursor)),
        Err(err) => {
            log::debug!("dropping unreadable stored cursor {value}: {err}");
            Ok(None)
        }
    }
}

fn clamp_dimension(value: Option<i64>, default: usize) -> usize {
    match value {
        Some(value) if value > 0 => usize::try_from(value).unwrap_or(usize::MAX),
        _ => default,
    }
}

fn cell_record_from_json(cell: CellJson) -> Option<CellRecord> {
    if cell.skipped == Some(true) {
        return Some(CellRecord::Skipped);
    }
    CellRecord::recorded(cell.group_skill?, cell.series_skill?)
}

fn session_from_json(stored: StoredStateJson) -> Session {
    let defaults = Session::default();
    let size = GridSize::new(
        clamp_dimension(stored.count, defaults.size().rows()),
        clamp_dimension(stored.types, defaults.size().cols()),
    );

    let mut session = Session::new(size);
    let parts_count = match stored.parts_count {
        Some(value) if value > 0 => u32::try_from(value).unwrap_or(u32::MAX),
        _ => defaults.parts_count(),
    };
    session.set_parts_count(parts_count);
    session.set_started(stored.is_started.unwrap_or(defaults.is_started()));

    for (raw_col, config) in stored.column_configs.unwrap_or_default() {
        let Ok(col) = raw_col.parse::<usize>() else {
            log::debug!("dropping column config with key {raw_col:?}");
            continue;
        };
        session.set_column_config(col, ColumnConfig::new(config.weapon, config.attribute));
    }

    for (raw_key, cell) in stored.cell_data.unwrap_or_default() {
        let Ok(key) = raw_key.parse::<CellKey>() else {
            log::debug!("dropping cell with key {raw_key:?}");
            continue;
        };
        if let Some(record) = cell_record_from_json(cell) {
            session.cells_mut().insert(key, record);
        }
    }

    let cursor = stored.cursor.and_then(|cursor| {
        let col = usize::try_from(cursor.col).ok()?;
        let row = usize::try_from(cursor.row).ok()?;
        Some(CellKey::new(col, row)).filter(|key| size.contains(*key))
    });
    if cursor.is_none() && stored.cursor.is_some() {
        log::debug!("dropping stored cursor outside {}x{} grid", size.rows(), size.cols());
    }
    session.set_cursor(cursor);

    session
}
