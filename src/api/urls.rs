// URL builders for every endpoint. `base` is `https://{resolved-host}` for
// Riot API families and the CDN base for Data Dragon; overrides come through
// the config unchanged.

use super::league_v4::{Division, QueueType, Tier};

// Account-V1

pub(crate) fn account_by_puuid(base: &str, puuid: &str) -> String {
    format!("{base}/riot/account/v1/accounts/by-puuid/{puuid}")
}

pub(crate) fn account_by_riot_id(base: &str, game_name: &str, tag_line: &str) -> String {
    format!("{base}/riot/account/v1/accounts/by-riot-id/{game_name}/{tag_line}")
}

pub(crate) fn account_me(base: &str) -> String {
    format!("{base}/riot/account/v1/accounts/me")
}

pub(crate) fn active_shard(base: &str, game: &str, puuid: &str) -> String {
    format!("{base}/riot/account/v1/active-shards/by-game/{game}/by-puuid/{puuid}")
}

pub(crate) fn active_region(base: &str, game: &str, puuid: &str) -> String {
    format!("{base}/riot/account/v1/region/by-game/{game}/by-puuid/{puuid}")
}

// Champion-V3

pub(crate) fn champion_rotations(base: &str) -> String {
    format!("{base}/lol/platform/v3/champion-rotations")
}

// Champion-mastery-V4

pub(crate) fn masteries_by_puuid(base: &str, puuid: &str) -> String {
    format!("{base}/lol/champion-mastery/v4/champion-masteries/by-puuid/{puuid}")
}

pub(crate) fn mastery_by_champion(base: &str, puuid: &str, champion_id: i64) -> String {
    format!("{base}/lol/champion-mastery/v4/champion-masteries/by-puuid/{puuid}/by-champion/{champion_id}")
}

pub(crate) fn top_masteries(base: &str, puuid: &str) -> String {
    format!("{base}/lol/champion-mastery/v4/champion-masteries/by-puuid/{puuid}/top")
}

pub(crate) fn mastery_score(base: &str, puuid: &str) -> String {
    format!("{base}/lol/champion-mastery/v4/scores/by-puuid/{puuid}")
}

// League-V4

pub(crate) fn challenger_league(base: &str, queue: QueueType) -> String {
    format!("{base}/lol/league/v4/challengerleagues/by-queue/{}", queue.as_str())
}

pub(crate) fn grandmaster_league(base: &str, queue: QueueType) -> String {
    format!("{base}/lol/league/v4/grandmasterleagues/by-queue/{}", queue.as_str())
}

pub(crate) fn master_league(base: &str, queue: QueueType) -> String {
    format!("{base}/lol/league/v4/masterleagues/by-queue/{}", queue.as_str())
}

pub(crate) fn league_entries_by_puuid(base: &str, puuid: &str) -> String {
    format!("{base}/lol/league/v4/entries/by-puuid/{puuid}")
}

pub(crate) fn league_entries(base: &str, queue: QueueType, tier: Tier, division: Division) -> String {
    format!(
        "{base}/lol/league/v4/entries/{}/{}/{}",
        queue.as_str(),
        tier.as_str(),
        division.as_str()
    )
}

pub(crate) fn league_by_id(base: &str, league_id: &str) -> String {
    format!("{base}/lol/league/v4/leagues/{league_id}")
}

// Summoner-V4

pub(crate) fn summoner_by_puuid(base: &str, puuid: &str) -> String {
    format!("{base}/lol/summoner/v4/summoners/by-puuid/{puuid}")
}

// Match-V5

pub(crate) fn match_ids_by_puuid(base: &str, puuid: &str) -> String {
    format!("{base}/lol/match/v5/matches/by-puuid/{puuid}/ids")
}

pub(crate) fn match_by_id(base: &str, match_id: &str) -> String {
    format!("{base}/lol/match/v5/matches/{match_id}")
}

pub(crate) fn match_timeline(base: &str, match_id: &str) -> String {
    format!("{base}/lol/match/v5/matches/{match_id}/timeline")
}

// Data Dragon

pub(crate) fn ddragon_champions(base: &str, version: &str) -> String {
    format!("{base}/cdn/{version}/data/en_US/champion.json")
}

pub(crate) fn ddragon_champion_detail(base: &str, version: &str, champion_id: &str) -> String {
    format!("{base}/cdn/{version}/data/en_US/champion/{champion_id}.json")
}
