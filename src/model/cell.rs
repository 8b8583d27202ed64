// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Outcome stored for a visited cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellRecord {
    /// Both skills were picked. Neither field is ever empty.
    Recorded {
        group_skill: String,
        series_skill: String,
    },
    /// The attempt was not worth writing down.
    Skipped,
}

impl CellRecord {
    /// Builds a `Recorded` cell, or `None` when either skill is blank.
    pub fn recorded(group_skill: impl Into<String>, series_skill: impl Into<String>) -> Option<Self> {
        let group_skill = group_skill.into();
        let series_skill = series_skill.into();
        if group_skill.is_empty() || series_skill.is_empty() {
            return None;
        }
        Some(Self::Recorded {
            group_skill,
            series_skill,
        })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    pub fn group_skill(&self) -> Option<&str> {
        match self {
            Self::Recorded { group_skill, .. } => Some(group_skill),
            Self::Skipped => None,
        }
    }

    pub fn series_skill(&self) -> Option<&str> {
        match self {
            Self::Recorded { series_skill, .. } => Some(series_skill),
            Self::Skipped => None,
        }
    }
}

/// Optional weapon/attribute labels shown in a column header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfig {
    weapon: Option<String>,
    attribute: Option<String>,
}

impl ColumnConfig {
    pub fn new(weapon: Option<String>, attribute: Option<String>) -> Self {
        Self {
            weapon: weapon.filter(|value| !value.is_empty()),
            attribute: attribute.filter(|value| !value.is_empty()),
        }
    }

    pub fn weapon(&self) -> Option<&str> {
        self.weapon.as_deref()
    }

    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    pub fn set_weapon(&mut self, weapon: Option<String>) {
        self.weapon = weapon.filter(|value| !value.is_empty());
    }

    pub fn set_attribute(&mut self, attribute: Option<String>) {
        self.attribute = attribute.filter(|value| !value.is_empty());
    }

    pub fn is_empty(&self) -> bool {
        self.weapon.is_none() && self.attribute.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{CellRecord, ColumnConfig};

    #[test]
    fn recorded_requires_both_skills() {
        assert!(CellRecord::recorded("", "B").is_none());
        assert!(CellRecord::recorded("A", "").is_none());

        let record = CellRecord::recorded("A", "B").expect("record");
        assert_eq!(record.group_skill(), Some("A"));
        assert_eq!(record.series_skill(), Some("B"));
        assert!(!record.is_skipped());
    }

    #[test]
    fn skipped_has_no_skills() {
        let record = CellRecord::Skipped;
        assert!(record.is_skipped());
        assert_eq!(record.group_skill(), None);
        assert_eq!(record.series_skill(), None);
    }

    #[test]
    fn column_config_treats_blank_labels_as_unset() {
        let mut config = ColumnConfig::new(Some(String::new()), Some("火属性".to_owned()));
        assert_eq!(config.weapon(), None);
        assert_eq!(config.attribute(), Some("火属性"));

        config.set_attribute(None);
        assert!(config.is_empty());
    }
}
