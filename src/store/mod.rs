// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for the tally session.
//!
//! A [`KeyValueStore`] holds opaque strings; [`StateStore`] maps the whole session to one JSON
//! record under [`STORAGE_KEY`].

pub mod kv;
pub mod state_store;

pub use kv::{FileStore, KeyValueStore, MemoryStore, WriteDurability};
pub use state_store::{decode_session, encode_session, StateStore, StoreError, STORAGE_KEY};
