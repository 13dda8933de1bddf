//! Card records as published in the set JSON.

use serde::Deserialize;

/// Keys every raw record must carry. Checked before deserializing so a missing
/// key is reported by name.
pub const REQUIRED_KEYS: [&str; 15] = [
    "name",
    "region",
    "rarity",
    "collectible",
    "flavorText",
    "type",
    "supertype",
    "attack",
    "cost",
    "health",
    "levelupDescriptionRaw",
    "descriptionRaw",
    "cardCode",
    "keywords",
    "associatedCardRefs",
];

/// The fields of a raw card the normalizer reads. Other keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    pub name: String,
    pub region: String,
    pub rarity: String,
    pub collectible: bool,
    pub flavor_text: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub supertype: String,
    pub attack: i64,
    pub cost: i64,
    pub health: i64,
    pub levelup_description_raw: String,
    pub description_raw: String,
    pub card_code: String,
    pub keywords: Vec<String>,
    pub associated_card_refs: Vec<String>,
}
