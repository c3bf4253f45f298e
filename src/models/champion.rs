use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// Data Dragon champion payloads and the champion-rotation response

/// Envelope of `champion.json`: `data` maps champion name to its summary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionListing {
    #[serde(rename = "type")]
    pub kind: String,
    pub format: String,
    pub version: String,
    pub data: HashMap<String, ChampionData>,
}

/// Envelope of `champion/{name}.json`: one detailed record under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionDetailListing {
    #[serde(rename = "type")]
    pub kind: String,
    pub format: String,
    pub version: String,
    pub data: HashMap<String, ChampionDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionData {
    pub version: Option<String>,
    pub id: String,
    /// Numeric champion key; the CDN serializes it as a decimal string.
    #[serde(with = "string_key")]
    pub key: i64,
    pub name: String,
    pub title: Option<String>,
    pub blurb: String,
    pub info: ChampionInfo,
    pub image: ChampionImage,
    pub tags: Vec<String>,
    pub partype: String,
    pub stats: ChampionStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionDetail {
    #[serde(flatten)]
    pub champion: ChampionData,
    pub skins: Vec<ChampionSkin>,
    pub lore: String,
    pub allytips: Vec<String>,
    pub enemytips: Vec<String>,
    pub spells: Vec<ChampionSpell>,
    pub passive: ChampionPassive,
    #[serde(default)]
    pub recommended: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionInfo {
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub difficulty: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionImage {
    pub full: String,
    pub sprite: String,
    pub group: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

// Wire names are all-lowercase run-together words; kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionStats {
    pub hp: f64,
    pub hpperlevel: f64,
    pub mp: f64,
    pub mpperlevel: f64,
    pub movespeed: f64,
    pub armor: f64,
    pub armorperlevel: f64,
    pub spellblock: f64,
    pub spellblockperlevel: f64,
    pub attackrange: f64,
    pub hpregen: f64,
    pub hpregenperlevel: f64,
    pub mpregen: f64,
    pub mpregenperlevel: f64,
    pub crit: f64,
    pub critperlevel: f64,
    pub attackdamage: f64,
    pub attackdamageperlevel: f64,
    pub attackspeedperlevel: f64,
    pub attackspeed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionSkin {
    pub id: String,
    pub num: i32,
    pub name: String,
    pub chromas: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellTip {
    pub label: Vec<String>,
    pub effect: Vec<String>,
}

// Burn strings ("60/65/70/75/80", "-1") stay text: they are exact wire values,
// not numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionSpell {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tooltip: String,
    pub leveltip: Option<SpellTip>,
    pub maxrank: i32,
    pub cooldown: Vec<f64>,
    #[serde(rename = "cooldownBurn")]
    pub cooldown_burn: String,
    pub cost: Vec<f64>,
    #[serde(rename = "costBurn")]
    pub cost_burn: String,
    #[serde(default)]
    pub datavalues: serde_json::Value,
    pub effect: Vec<Option<Vec<f64>>>,
    #[serde(rename = "effectBurn")]
    pub effect_burn: Vec<Option<String>>,
    #[serde(default)]
    pub vars: Vec<serde_json::Value>,
    #[serde(rename = "costType")]
    pub cost_type: String,
    pub maxammo: String,
    pub range: Vec<f64>,
    #[serde(rename = "rangeBurn")]
    pub range_burn: String,
    pub image: ChampionImage,
    pub resource: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionPassive {
    pub name: String,
    pub description: String,
    pub image: ChampionImage,
}

// Champion-V3 rotation response

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionRotation {
    pub free_champion_ids: Vec<i64>,
    pub free_champion_ids_for_new_players: Vec<i64>,
    pub max_new_player_level: i32,
    /// Filled by enrichment from `free_champion_ids`.
    #[serde(skip)]
    pub free_champions: Vec<ChampionData>,
    /// Filled by enrichment from `free_champion_ids_for_new_players`.
    #[serde(skip)]
    pub free_champions_for_new_players: Vec<ChampionData>,
}

mod string_key {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(key: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&key.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
