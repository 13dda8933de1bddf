use serde::Serialize;

use super::raw::RawCard;
use super::text::{clean_flavor_text, normalize_keyword};

/// Simplified card used for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedCard {
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
    pub desc: String,
    pub code: String,
    pub keywords: Vec<String>,
    pub associated_card_codes: Vec<String>,
}

impl From<RawCard> for NormalizedCard {
    fn from(raw: RawCard) -> Self {
        Self {
            name: raw.name,
            region: raw.region,
            rarity: raw.rarity,
            collectible: raw.collectible,
            flavor_text: clean_flavor_text(&raw.flavor_text),
            card_type: raw.card_type,
            supertype: raw.supertype,
            attack: raw.attack,
            cost: raw.cost,
            health: raw.health,
            levelup_description_raw: raw.levelup_description_raw,
            desc: raw.description_raw,
            code: raw.card_code,
            keywords: raw.keywords.iter().map(|k| normalize_keyword(k)).collect(),
            associated_card_codes: raw.associated_card_refs,
        }
    }
}
