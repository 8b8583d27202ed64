// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Artian-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Artian and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::CatalogEntry;

const fn attribute(
    category: &'static str,
    ja: &'static str,
    en: &'static str,
    asset: &'static str,
) -> CatalogEntry {
    CatalogEntry::new(ja, en)
        .with_sub_label(category)
        .with_asset(asset)
}

const fn weapon(ja: &'static str, en: &'static str, asset: &'static str) -> CatalogEntry {
    CatalogEntry::new(ja, en).with_asset(asset)
}

const fn series(ja: &'static str, en: &'static str, source: &'static str) -> CatalogEntry {
    CatalogEntry::new(ja, en).with_sub_label(source)
}

pub(super) static ATTRIBUTES: &[CatalogEntry] = &[
    attribute("元素属性", "火属性", "Fire", "assets/attributes/fire.png"),
    attribute("元素属性", "水属性", "Water", "assets/attributes/water.png"),
    attribute("元素属性", "雷属性", "Thunder", "assets/attributes/thunder.png"),
    attribute("元素属性", "氷属性", "Ice", "assets/attributes/ice.png"),
    attribute("元素属性", "龍属性", "Dragon", "assets/attributes/dragon.png"),
    attribute("状態異常", "毒", "Poison", "assets/attributes/poison.png"),
    attribute("状態異常", "麻痺", "Paralysis", "assets/attributes/paralysis.png"),
    attribute("状態異常", "睡眠", "Sleep", "assets/attributes/sleep.png"),
    attribute("状態異常", "爆破", "Blast", "assets/attributes/bomb.png"),
];

pub(super) static WEAPONS: &[CatalogEntry] = &[
    weapon("大剣", "Great Sword", "assets/weapons/taiken.avif"),
    weapon("太刀", "Long Sword", "assets/weapons/tati.avif"),
    weapon("片手剣", "Sword & Shield", "assets/weapons/katetekenn.avif"),
    weapon("双剣", "Dual Blades", "assets/weapons/souken.avif"),
    weapon("ハンマー", "Hammer", "assets/weapons/hannmar.avif"),
    weapon("狩猟笛", "Hunting Horn", "assets/weapons/syuryobue.avif"),
    weapon("ランス", "Lance", "assets/weapons/ransu.avif"),
    weapon("ガンランス", "Gunlance", "assets/weapons/ganransu.avif"),
    weapon("スラッシュアックス", "Switch Axe", "assets/weapons/suraaku.avif"),
    weapon("チャージアックス", "Charge Blade", "assets/weapons/tyaaku.avif"),
    weapon("操虫棍", "Insect Glaive", "assets/weapons/soutyuukonn.avif"),
    weapon("ライトボウガン", "Light Bowgun", "assets/weapons/raitobougan.avif"),
    weapon("重弓銃", "Heavy Bowgun", "assets/weapons/hibi-bougan.avif"),
    weapon("弓", "Bow", "assets/weapons/yumi.avif"),
];

pub(super) static GROUP_SKILLS: &[CatalogEntry] = &[
    CatalogEntry::new("護竜の守り", "Guardian's Protection"),
    CatalogEntry::new("護竜の脈動", "Guardian's Pulse"),
    CatalogEntry::new("ヌシの魂", "Lord's Soul"),
    CatalogEntry::new("ヌシの憤激", "Lord's Fury"),
    CatalogEntry::new("革細工の柔性", "Flexible Leathercraft"),
    CatalogEntry::new("鱗張りの技法", "Scale Layering"),
];

pub(super) static SERIES_SKILLS: &[CatalogEntry] = &[
    series("雷顎竜の闘志", "Fulgur Anjanath's Will", "アンジャナフ亜種"),
    series("黒蝕竜の力", "Gore Magala's Tyranny", "ゴア・マガラ"),
    series("鎖刃竜の飢餓", "Arkveld's Hunger", "アルシュベルド"),
    series("凍峰竜の反逆", "Jin Dahaad's Revolt", "ジン・ダハド"),
    series("泡狐竜の力", "Mizutsune's Prowess", "タマミツネ"),
    series("煌雷竜の力", "Rey Dau's Voltage", "レ・ダウ"),
    series("火竜の力", "Rathalos's Flare", "リオレウス"),
];
