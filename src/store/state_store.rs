// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::kv::KeyValueStore;
use crate::model::{CellKey, CellRecord, ColumnConfig, GridSize, Session};

/// Key the whole session is stored under.
pub const STORAGE_KEY: &str = "wilds-artian-tool";

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        key: String,
        source: serde_json::Error,
    },
    InvalidKey {
        key: String,
    },
    SymlinkRefused {
        path: PathBuf,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { key, source } => write!(f, "json error for key {key:?}: {source}"),
            Self::InvalidKey { key } => write!(f, "invalid storage key {key:?}"),
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to write through symlink at {path:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidKey { .. } => None,
            Self::SymlinkRefused { .. } => None,
        }
    }
}

/// Round-trips the full [`Session`] through a [`KeyValueStore`] under a single key.
///
/// `load` and `save` never fail from the caller's point of view: an unreadable record loads as
/// the default session and a failed write is logged and dropped. `try_load` / `try_save` expose
/// the underlying errors.
#[derive(Debug, Clone)]
pub struct StateStore<S> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> StateStore<S> {
    pub fn new(kv: S) -> Self {
        Self::with_key(kv, STORAGE_KEY)
    }

    pub fn with_key(kv: S, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns `Ok(None)` when nothing has been stored yet.
    pub fn try_load(&self) -> Result<Option<Session>, StoreError> {
        let Some(raw) = self.kv.get(&self.key)? else {
            return Ok(None);
        };
        decode_session(&raw)
            .map(Some)
            .map_err(|source| StoreError::Json {
                key: self.key.clone(),
                source,
            })
    }

    pub fn load(&self) -> Session {
        match self.try_load() {
            Ok(Some(session)) => {
                log::debug!(
                    "loaded session: {}x{} started={} cursor={:?}",
                    session.size().rows(),
                    session.size().cols(),
                    session.is_started(),
                    session.cursor()
                );
                session
            }
            Ok(None) => Session::default(),
            Err(err) => {
                log::warn!("discarding stored session: {err}");
                Session::default()
            }
        }
    }

    pub fn try_save(&self, session: &Session) -> Result<(), StoreError> {
        let raw = encode_session(session).map_err(|source| StoreError::Json {
            key: self.key.clone(),
            source,
        })?;
        self.kv.set(&self.key, &raw)
    }

    /// Best-effort write; returns whether it landed.
    pub fn save(&self, session: &Session) -> bool {
        match self.try_save(session) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("session not saved: {err}");
                false
            }
        }
    }
}

pub fn encode_session(session: &Session) -> Result<String, serde_json::Error> {
    serde_json::to_string(&StoredStateRef::from(session))
}

/// Parses a stored record, filling absent fields with defaults and repairing the cursor.
pub fn decode_session(raw: &str) -> Result<Session, serde_json::Error> {
    let stored: StoredStateJson = serde_json::from_str(raw)?;
    Ok(session_from_json(stored))
}

include!("state_store/helpers.rs");

#[cfg(test)]
mod tests;
