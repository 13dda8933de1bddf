//! Builds set archives shaped like the published ones, in memory.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

/// Card JSON for a set with `count` cards.
pub fn cards_json(set: u32, count: usize) -> Vec<u8> {
    let cards: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "associatedCardRefs": [],
                "region": "Demacia",
                "attack": i,
                "cost": 2,
                "health": 3,
                "descriptionRaw": format!("card {i}"),
                "levelupDescriptionRaw": "",
                "flavorText": "Steel\\\\ and valor",
                "name": format!("Card {i}"),
                "cardCode": format!("0{set}DE{i:03}"),
                "keywords": ["Quick Attack", "Can't Block"],
                "rarity": "COMMON",
                "supertype": "",
                "type": "Unit",
                "collectible": true
            })
        })
        .collect();
    serde_json::to_vec(&cards).unwrap()
}

/// Zip with `{locale}/`, `{locale}/data/`, the card JSON and a metadata file: 4 entries.
pub fn set_zip(set: u32, locale: &str, cards: usize) -> Vec<u8> {
    let name = format!("set{set}-{locale}");
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let opts = SimpleFileOptions::default();
    zip.add_directory(format!("{locale}/"), opts).unwrap();
    zip.add_directory(format!("{locale}/data/"), opts).unwrap();
    zip.start_file(format!("{locale}/data/{name}.json"), opts).unwrap();
    zip.write_all(&cards_json(set, cards)).unwrap();
    zip.start_file("metadata.json", opts).unwrap();
    zip.write_all(b"{\"locales\":[\"en_us\"]}").unwrap();
    zip.finish().unwrap().into_inner()
}
