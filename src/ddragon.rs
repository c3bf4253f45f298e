use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::urls;
use crate::client::send;
use crate::error::{translate_error, Error, Result};
use crate::models::{ChampionData, ChampionDetail, ChampionDetailListing, ChampionListing};
use crate::validate;

pub const DDRAGON_HOST: &str = "ddragon.leagueoflegends.com";

/// Client for the Data Dragon CDN (unauthenticated static assets), pinned to
/// one game-data version.
#[derive(Debug)]
pub struct DataDragon {
    http: reqwest::Client,
    base_url: String,
    version: String,
    details: RwLock<HashMap<String, Arc<ChampionDetail>>>,
}

impl DataDragon {
    /// Standalone CDN client for `version`.
    pub fn new(version: impl Into<String>) -> Self {
        Self::from_parts(
            reqwest::Client::new(),
            format!("https://{DDRAGON_HOST}"),
            version.into(),
        )
    }

    pub(crate) fn from_parts(http: reqwest::Client, base_url: String, version: String) -> Self {
        DataDragon {
            http,
            base_url,
            version,
            details: RwLock::new(HashMap::new()),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Downloads the champion listing for this version and indexes it.
    pub async fn fetch_champions(&self) -> Result<ChampionsDb> {
        let url = urls::ddragon_champions(&self.base_url, &self.version);
        let resp = send(self.http.get(&url)).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        let listing: ChampionListing = validate::model(&resp, "ddragon.fetch_champions")?;
        Ok(ChampionsDb::from_listing(listing))
    }

    /// Detailed record for one champion by CDN identifier (`ChampionData::id`,
    /// e.g. "MonkeyKing"). Memoized per identifier for the life of the client;
    /// nothing is ever evicted.
    pub async fn champion_details(&self, champion_id: &str) -> Result<Arc<ChampionDetail>> {
        if let Some(found) = self.details.read().await.get(champion_id) {
            return Ok(Arc::clone(found));
        }

        // The lock is not held across the fetch; a concurrent duplicate
        // download is benign and the last insert wins.
        let url = urls::ddragon_champion_detail(&self.base_url, &self.version, champion_id);
        let resp = send(self.http.get(&url)).await?;
        if resp.status != 200 {
            return Err(translate_error(resp.status, &resp.body));
        }
        let mut listing: ChampionDetailListing =
            validate::model(&resp, "ddragon.champion_details")?;
        let detail = listing
            .data
            .remove(champion_id)
            .map(Arc::new)
            .ok_or_else(|| Error::UnknownChampion(champion_id.to_string()))?;

        self.details
            .write()
            .await
            .insert(champion_id.to_string(), Arc::clone(&detail));
        Ok(detail)
    }
}

/// In-memory champion directory built from one CDN listing.
///
/// Read-only once built; lookups are keyed by numeric champion key and by
/// name (both the display name and the CDN identifier resolve).
#[derive(Debug, Clone)]
pub struct ChampionsDb {
    version: String,
    champions: HashMap<i64, ChampionData>,
    names: HashMap<String, i64>,
}

impl ChampionsDb {
    pub(crate) fn from_listing(listing: ChampionListing) -> Self {
        let mut champions = HashMap::with_capacity(listing.data.len());
        let mut names = HashMap::with_capacity(listing.data.len() * 2);
        for champion in listing.data.into_values() {
            names.insert(champion.name.clone(), champion.key);
            names.insert(champion.id.clone(), champion.key);
            champions.insert(champion.key, champion);
        }
        ChampionsDb {
            version: listing.version,
            champions,
            names,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    pub fn champion_by_id(&self, champion_id: i64) -> Result<&ChampionData> {
        self.champions
            .get(&champion_id)
            .ok_or_else(|| Error::UnknownChampion(champion_id.to_string()))
    }

    pub fn champion_by_name(&self, name: &str) -> Result<&ChampionData> {
        self.names
            .get(name)
            .and_then(|key| self.champions.get(key))
            .ok_or_else(|| Error::UnknownChampion(name.to_string()))
    }

    pub fn champions(&self) -> impl Iterator<Item = &ChampionData> {
        self.champions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(pairs: &[(&str, &str, i64)]) -> ChampionListing {
        let data = pairs
            .iter()
            .map(|(cdn_id, name, key)| {
                let body = format!(
                    r#"{{
                        "id": "{cdn_id}",
                        "key": "{key}",
                        "name": "{name}",
                        "blurb": "",
                        "info": {{"attack": 0, "defense": 0, "magic": 0, "difficulty": 0}},
                        "image": {{"full": "{cdn_id}.png", "sprite": "champion0.png",
                                   "group": "champion", "x": 0, "y": 0, "w": 48, "h": 48}},
                        "tags": [],
                        "partype": "Mana",
                        "stats": {{"hp": 0, "hpperlevel": 0, "mp": 0, "mpperlevel": 0,
                                   "movespeed": 0, "armor": 0, "armorperlevel": 0,
                                   "spellblock": 0, "spellblockperlevel": 0, "attackrange": 0,
                                   "hpregen": 0, "hpregenperlevel": 0, "mpregen": 0,
                                   "mpregenperlevel": 0, "crit": 0, "critperlevel": 0,
                                   "attackdamage": 0, "attackdamageperlevel": 0,
                                   "attackspeedperlevel": 0, "attackspeed": 0}}
                    }}"#
                );
                let champion: ChampionData = serde_json::from_str(&body).unwrap();
                (cdn_id.to_string(), champion)
            })
            .collect();
        ChampionListing {
            kind: "champion".to_string(),
            format: "standAloneComplex".to_string(),
            version: "15.15.1".to_string(),
            data,
        }
    }

    #[test]
    fn directory_indexes_by_key_and_both_names() {
        let db = ChampionsDb::from_listing(listing(&[
            ("MonkeyKing", "Wukong", 62),
            ("Aatrox", "Aatrox", 266),
        ]));
        assert_eq!(db.len(), 2);
        assert_eq!(db.champion_by_id(62).unwrap().name, "Wukong");
        assert_eq!(db.champion_by_name("Wukong").unwrap().id, "MonkeyKing");
        assert_eq!(db.champion_by_name("MonkeyKing").unwrap().key, 62);
    }

    #[test]
    fn missing_lookups_are_typed_errors() {
        let db = ChampionsDb::from_listing(listing(&[("Aatrox", "Aatrox", 266)]));
        match db.champion_by_id(9999) {
            Err(Error::UnknownChampion(id)) => assert_eq!(id, "9999"),
            other => panic!("expected UnknownChampion, got {other:?}"),
        }
        assert!(matches!(
            db.champion_by_name("Nobody"),
            Err(Error::UnknownChampion(_))
        ));
    }
}
