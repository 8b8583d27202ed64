// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Static reference data: attributes, weapon types, group skills and series skills.
//!
//! Japanese labels double as selection keys (they are what gets stored in cells and column
//! configs), so they must be unique within a catalog.

use std::collections::HashSet;
use std::fmt;

mod data;
pub mod search;

pub use search::search;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Attribute,
    Weapon,
    GroupSkill,
    SeriesSkill,
}

impl CatalogKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Attribute => "属性",
            Self::Weapon => "武器種",
            Self::GroupSkill => "グループスキル",
            Self::SeriesSkill => "シリーズスキル",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub ja: &'static str,
    pub en: &'static str,
    pub sub_label: Option<&'static str>,
    pub asset: Option<&'static str>,
}

impl CatalogEntry {
    pub const fn new(ja: &'static str, en: &'static str) -> Self {
        Self {
            ja,
            en,
            sub_label: None,
            asset: None,
        }
    }

    pub const fn with_sub_label(mut self, sub_label: &'static str) -> Self {
        self.sub_label = Some(sub_label);
        self
    }

    pub const fn with_asset(mut self, asset: &'static str) -> Self {
        self.asset = Some(asset);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    kind: CatalogKind,
    entries: &'static [CatalogEntry],
}

impl Catalog {
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&'static CatalogEntry> {
        self.entries.iter().find(|entry| entry.ja == label)
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.ja == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Asset path for a label, relative to the asset root.
    pub fn asset_for(&self, label: &str) -> Option<&'static str> {
        self.get(label).and_then(|entry| entry.asset)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in self.entries {
            if !seen.insert(entry.ja) {
                return Err(CatalogError::DuplicateLabel {
                    kind: self.kind,
                    label: entry.ja,
                });
            }
        }
        Ok(())
    }
}

pub fn attributes() -> Catalog {
    Catalog {
        kind: CatalogKind::Attribute,
        entries: data::ATTRIBUTES,
    }
}

pub fn weapons() -> Catalog {
    Catalog {
        kind: CatalogKind::Weapon,
        entries: data::WEAPONS,
    }
}

pub fn group_skills() -> Catalog {
    Catalog {
        kind: CatalogKind::GroupSkill,
        entries: data::GROUP_SKILLS,
    }
}

pub fn series_skills() -> Catalog {
    Catalog {
        kind: CatalogKind::SeriesSkill,
        entries: data::SERIES_SKILLS,
    }
}

pub fn catalog(kind: CatalogKind) -> Catalog {
    match kind {
        CatalogKind::Attribute => attributes(),
        CatalogKind::Weapon => weapons(),
        CatalogKind::GroupSkill => group_skills(),
        CatalogKind::SeriesSkill => series_skills(),
    }
}

pub fn catalogs() -> [Catalog; 4] {
    [attributes(), weapons(), group_skills(), series_skills()]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateLabel {
        kind: CatalogKind,
        label: &'static str,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLabel { kind, label } => {
                write!(f, "duplicate {} label {label:?}", kind.title())
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::{
        attributes, catalogs, series_skills, weapons, Catalog, CatalogEntry, CatalogError,
        CatalogKind,
    };

    #[test]
    fn builtin_catalogs_have_unique_labels() {
        for catalog in catalogs() {
            assert!(!catalog.is_empty(), "{:?} is empty", catalog.kind());
            catalog.validate().expect("unique labels");
        }
    }

    #[test]
    fn validate_reports_duplicate_labels() {
        static DUPES: &[CatalogEntry] =
            &[CatalogEntry::new("大剣", "Great Sword"), CatalogEntry::new("大剣", "Great Sword")];
        let catalog = Catalog {
            kind: CatalogKind::Weapon,
            entries: DUPES,
        };
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateLabel {
                kind: CatalogKind::Weapon,
                label: "大剣"
            })
        );
    }

    #[test]
    fn asset_lookup_resolves_by_label() {
        assert_eq!(attributes().asset_for("火属性"), Some("assets/attributes/fire.png"));
        assert_eq!(weapons().asset_for("弓"), Some("assets/weapons/yumi.avif"));
        assert_eq!(weapons().asset_for("存在しない"), None);
    }

    #[test]
    fn attributes_carry_their_category() {
        let blast = attributes().get("爆破").expect("blast");
        assert_eq!(blast.en, "Blast");
        assert_eq!(blast.sub_label, Some("状態異常"));
        assert_eq!(attributes().position("火属性"), Some(0));
    }

    #[test]
    fn weapon_and_attribute_labels_match_stored_records() {
        let weapons: Vec<&str> = weapons().entries().iter().map(|entry| entry.ja).collect();
        assert_eq!(
            weapons,
            [
                "大剣",
                "太刀",
                "片手剣",
                "双剣",
                "ハンマー",
                "狩猟笛",
                "ランス",
                "ガンランス",
                "スラッシュアックス",
                "チャージアックス",
                "操虫棍",
                "ライトボウガン",
                "重弓銃",
                "弓",
            ]
        );
        assert_eq!(super::weapons().asset_for("重弓銃"), Some("assets/weapons/hibi-bougan.avif"));

        let attributes: Vec<&str> = attributes().entries().iter().map(|entry| entry.ja).collect();
        assert_eq!(
            attributes,
            ["火属性", "水属性", "雷属性", "氷属性", "龍属性", "毒", "麻痺", "睡眠", "爆破"]
        );
    }

    #[test]
    fn series_skills_name_their_source() {
        assert!(series_skills().entries().iter().all(|entry| entry.sub_label.is_some()));
    }
}
