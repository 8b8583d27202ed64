// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Artian: terminal tally sheet for Artian weapon reinforcement runs.
//!
//! The grid is `attempts × categories`; each cell records the group skill and series skill rolled
//! on one attempt, or that the attempt was skipped. Cells are filled column by column.

pub mod catalog;
pub mod form;
pub mod model;
pub mod notify;
pub mod store;
pub mod tui;
pub mod walk;
