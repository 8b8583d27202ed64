// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::cell::CellRecord;

/// Skills picked for the cell under the cursor but not committed yet.
///
/// Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    group_skill: String,
    series_skill: String,
}

impl Selection {
    pub fn new(group_skill: impl Into<String>, series_skill: impl Into<String>) -> Self {
        Self {
            group_skill: group_skill.into(),
            series_skill: series_skill.into(),
        }
    }

    /// Pre-fills from a stored cell; skipped or unvisited cells give an empty selection.
    pub fn from_record(record: Option<&CellRecord>) -> Self {
        match record {
            Some(CellRecord::Recorded {
                group_skill,
                series_skill,
            }) => Self::new(group_skill.clone(), series_skill.clone()),
            Some(CellRecord::Skipped) | None => Self::default(),
        }
    }

    pub fn group_skill(&self) -> &str {
        &self.group_skill
    }

    pub fn series_skill(&self) -> &str {
        &self.series_skill
    }

    pub fn set_group_skill(&mut self, group_skill: impl Into<String>) {
        self.group_skill = group_skill.into();
    }

    pub fn set_series_skill(&mut self, series_skill: impl Into<String>) {
        self.series_skill = series_skill.into();
    }

    pub fn can_proceed(&self) -> bool {
        !self.group_skill.is_empty() && !self.series_skill.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.group_skill.is_empty() && self.series_skill.is_empty()
    }

    pub fn clear(&mut self) {
        self.group_skill.clear();
        self.series_skill.clear();
    }

    pub fn to_record(&self) -> Option<CellRecord> {
        CellRecord::recorded(self.group_skill.clone(), self.series_skill.clone())
    }
}
