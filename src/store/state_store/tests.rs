// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::{decode_session, encode_session, StateStore, StoreError, STORAGE_KEY};
use crate::model::{CellKey, CellRecord, ColumnConfig, GridSize, Session, DEFAULT_PARTS};
use crate::store::kv::{FileStore, KeyValueStore, MemoryStore, WriteDurability};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: std::path::PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("artian-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

struct StateStoreTestCtx {
    _tmp: TempDir,
    record_path: std::path::PathBuf,
    store: StateStore<FileStore>,
}

impl StateStoreTestCtx {
    fn new(prefix: &str) -> Self {
        let tmp = TempDir::new(prefix);
        let kv = FileStore::new(tmp.path().join("state"));
        let record_path = kv.path_for(STORAGE_KEY).unwrap();
        let store = StateStore::new(kv);
        Self {
            _tmp: tmp,
            record_path,
            store,
        }
    }

    fn write_raw(&self, raw: &str) {
        std::fs::create_dir_all(self.record_path.parent().unwrap()).unwrap();
        std::fs::write(&self.record_path, raw).unwrap();
    }

    fn read_raw(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(&self.record_path).unwrap();
        serde_json::from_str(&raw).unwrap()
    }
}

#[fixture]
fn ctx() -> StateStoreTestCtx {
    StateStoreTestCtx::new("state-store")
}

struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: key.into(),
            source: std::io::Error::other("quota exceeded"),
        })
    }
}

fn sample_session() -> Session {
    let mut session = Session::new(GridSize::new(2, 3));
    session.set_parts_count(120);
    session.set_column_config(
        0,
        ColumnConfig::new(Some("大剣".to_owned()), Some("火属性".to_owned())),
    );
    session.set_column_config(2, ColumnConfig::new(None, Some("水属性".to_owned())));
    session.cells_mut().insert(
        CellKey::new(0, 0),
        CellRecord::recorded("護竜の守り", "ドドブランゴの真髄").unwrap(),
    );
    session.cells_mut().insert(CellKey::new(0, 1), CellRecord::Skipped);
    session.set_started(true);
    session.set_cursor(Some(CellKey::new(1, 0)));
    session
}

#[rstest]
fn load_without_record_returns_defaults(ctx: StateStoreTestCtx) {
    assert!(ctx.store.try_load().unwrap().is_none());
    assert_eq!(ctx.store.load(), Session::default());
}

#[rstest]
#[case::truncated("{\"count\": 3, \"types\"")]
#[case::not_an_object("[1, 2, 3]")]
#[case::wrong_field_type("{\"count\": \"three\"}")]
#[case::empty("")]
fn unreadable_record_loads_as_defaults(ctx: StateStoreTestCtx, #[case] raw: &str) {
    ctx.write_raw(raw);

    assert!(matches!(ctx.store.try_load(), Err(StoreError::Json { .. })));
    assert_eq!(ctx.store.load(), Session::default());
}

#[rstest]
fn save_then_load_round_trips(ctx: StateStoreTestCtx) {
    let session = sample_session();
    assert!(ctx.store.save(&session));
    assert_eq!(ctx.store.load(), session);
}

#[rstest]
fn saved_record_uses_stored_field_names_and_cell_keys(ctx: StateStoreTestCtx) {
    ctx.store.save(&sample_session());
    let json = ctx.read_raw();

    assert_eq!(json["count"], 2);
    assert_eq!(json["types"], 3);
    assert_eq!(json["partsCount"], 120);
    assert_eq!(json["isStarted"], true);
    assert_eq!(json["cursor"], serde_json::json!({ "col": 1, "row": 0 }));
    assert_eq!(json["columnConfigs"]["0"]["weapon"], "大剣");
    assert_eq!(json["columnConfigs"]["2"]["attribute"], "水属性");
    assert!(json["columnConfigs"]["2"].get("weapon").is_none());
    assert_eq!(json["cellData"]["0_0"]["groupSkill"], "護竜の守り");
    assert_eq!(json["cellData"]["0_0"]["seriesSkill"], "ドドブランゴの真髄");
    assert_eq!(json["cellData"]["0_1"], serde_json::json!({ "skipped": true }));
}

#[rstest]
fn finished_session_stores_null_cursor(ctx: StateStoreTestCtx) {
    let mut session = sample_session();
    session.set_cursor(None);
    ctx.store.save(&session);

    assert!(ctx.read_raw()["cursor"].is_null());
    assert_eq!(ctx.store.load().cursor(), None);
}

#[rstest]
fn partial_record_fills_missing_fields(ctx: StateStoreTestCtx) {
    ctx.write_raw(r#"{"count": 4, "isStarted": true}"#);

    let session = ctx.store.load();
    assert_eq!(session.size(), GridSize::new(4, 1));
    assert_eq!(session.parts_count(), DEFAULT_PARTS);
    assert!(session.is_started());
    assert!(session.cells().is_empty());
    assert!(session.column_configs().is_empty());
    assert_eq!(session.cursor(), None);
}

#[rstest]
fn cursor_outside_loaded_grid_is_dropped(ctx: StateStoreTestCtx) {
    ctx.write_raw(r#"{"count": 3, "types": 3, "isStarted": true, "cursor": {"col": 5, "row": 2}}"#);
    assert_eq!(ctx.store.load().cursor(), None);

    ctx.write_raw(r#"{"count": 3, "types": 3, "isStarted": true, "cursor": {"col": 2, "row": 2}}"#);
    assert_eq!(ctx.store.load().cursor(), Some(CellKey::new(2, 2)));
}

#[rstest]
fn negative_cursor_is_dropped() {
    let session =
        decode_session(r#"{"count": 2, "types": 2, "cursor": {"col": -1, "row": 0}}"#).unwrap();
    assert_eq!(session.cursor(), None);
}

#[rstest]
#[case::huge_float(r#"{"col": 1e30, "row": 0}"#)]
#[case::string_index(r#"{"col": "1", "row": 0}"#)]
#[case::missing_row(r#"{"col": 1}"#)]
#[case::not_an_object(r#""0_0""#)]
fn unreadable_cursor_keeps_rest_of_record(#[case] cursor: &str) {
    let raw = format!(
        r#"{{"count": 2, "types": 3, "partsCount": 40, "isStarted": true,
            "cellData": {{"0_0": {{"skipped": true}}}}, "cursor": {cursor}}}"#
    );
    let session = decode_session(&raw).unwrap();

    assert_eq!(session.size(), GridSize::new(2, 3));
    assert_eq!(session.parts_count(), 40);
    assert!(session.is_started());
    assert_eq!(session.cell(CellKey::ORIGIN), Some(&CellRecord::Skipped));
    assert_eq!(session.cursor(), None);
}

#[rstest]
fn out_of_range_dimensions_are_clamped() {
    let session = decode_session(r#"{"count": 0, "types": 999, "partsCount": -4}"#).unwrap();
    assert_eq!(session.size(), GridSize::new(1, 20));
    assert_eq!(session.parts_count(), DEFAULT_PARTS);
}

#[rstest]
fn malformed_cells_and_column_keys_are_dropped() {
    let raw = r#"{
        "count": 2,
        "types": 2,
        "columnConfigs": { "x": { "weapon": "大剣" }, "1": { "attribute": "氷属性" } },
        "cellData": {
            "0_0": { "groupSkill": "A", "seriesSkill": "B" },
            "0_1": { "groupSkill": "A" },
            "bogus": { "skipped": true },
            "1_0": { "skipped": true },
            "1_1": { "skipped": false }
        }
    }"#;
    let session = decode_session(raw).unwrap();

    assert_eq!(session.column_configs().len(), 1);
    assert_eq!(session.column_config(1).and_then(ColumnConfig::attribute), Some("氷属性"));
    assert_eq!(session.cells().len(), 2);
    assert_eq!(session.cell(CellKey::new(1, 0)), Some(&CellRecord::Skipped));
    assert!(session.cell(CellKey::new(0, 1)).is_none());
}

#[rstest]
fn cells_outside_the_grid_are_kept() {
    let raw = r#"{"count": 1, "types": 1, "cellData": {"3_4": {"skipped": true}}}"#;
    let session = decode_session(raw).unwrap();
    assert_eq!(session.cell(CellKey::new(3, 4)), Some(&CellRecord::Skipped));
}

#[rstest]
fn encoded_cells_follow_column_major_order() {
    let mut session = Session::new(GridSize::new(11, 2));
    session.cells_mut().insert(CellKey::new(1, 0), CellRecord::Skipped);
    session.cells_mut().insert(CellKey::new(0, 10), CellRecord::Skipped);
    session.cells_mut().insert(CellKey::new(0, 2), CellRecord::Skipped);

    let raw = encode_session(&session).unwrap();
    let first = raw.find("\"0_2\"").unwrap();
    let second = raw.find("\"0_10\"").unwrap();
    let third = raw.find("\"1_0\"").unwrap();
    assert!(first < second && second < third, "{raw}");
}

#[rstest]
fn failed_save_is_swallowed() {
    let store = StateStore::new(FailingStore);
    assert!(!store.save(&sample_session()));
    assert!(matches!(store.try_save(&sample_session()), Err(StoreError::Io { .. })));
}

#[rstest]
fn invalid_storage_key_is_rejected() {
    let tmp = TempDir::new("invalid-key");
    let store = StateStore::with_key(FileStore::new(tmp.path()), "../escape");

    assert!(matches!(store.try_save(&Session::default()), Err(StoreError::InvalidKey { .. })));
    assert!(!tmp.path().parent().unwrap().join("escape.json").exists());
}

#[rstest]
fn durable_writes_round_trip() {
    let tmp = TempDir::new("durable");
    let kv = FileStore::new(tmp.path()).with_durability(WriteDurability::Durable);
    let store = StateStore::new(kv);

    let session = sample_session();
    store.try_save(&session).unwrap();
    assert_eq!(store.try_load().unwrap(), Some(session));

    let leftovers: Vec<_> = std::fs::read_dir(tmp.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp."))
        .collect();
    assert!(leftovers.is_empty());
}

#[rstest]
fn memory_store_shares_the_record_format() {
    let raw = encode_session(&sample_session()).unwrap();
    let store = StateStore::new(MemoryStore::with_entry(STORAGE_KEY, raw));
    assert_eq!(store.load(), sample_session());
}
