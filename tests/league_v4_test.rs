use hexgate::{Config, Division, Error, Hexgate, Platform, QueueType, Tier};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Hexgate {
    let config = Config::new("RGAPI-test-token", Platform::Euw1)
        .with_api_base_url(server.uri())
        .with_ddragon_base_url(server.uri());
    Hexgate::with_config(config).unwrap()
}

fn challenger_body() -> serde_json::Value {
    json!({
        "leagueId": "77c18e3f-2814-3b24-a2cd-cd8a11e7bd51",
        "entries": [
            {
                "puuid": "chal-1",
                "leaguePoints": 1342,
                "rank": "I",
                "wins": 301,
                "losses": 212,
                "veteran": true,
                "inactive": false,
                "freshBlood": false,
                "hotStreak": true
            },
            {
                "puuid": "chal-2",
                "leaguePoints": 1227,
                "rank": "I",
                "wins": 250,
                "losses": 180,
                "veteran": false,
                "inactive": false,
                "freshBlood": true,
                "hotStreak": false
            }
        ],
        "tier": "CHALLENGER",
        "name": "Malzahar's Scouts",
        "queue": "RANKED_SOLO_5x5"
    })
}

#[tokio::test]
async fn challenger_league_deserializes_with_entries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/lol/league/v4/challengerleagues/by-queue/RANKED_SOLO_5x5",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(challenger_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let league = test_client(&mock_server)
        .league_v4()
        .get_challenger_league(QueueType::RankedSolo5x5)
        .await
        .unwrap();

    assert_eq!(league.tier, "CHALLENGER");
    assert_eq!(league.queue, "RANKED_SOLO_5x5");
    assert_eq!(league.entries.len(), 2);
    assert_eq!(league.entries[0].league_points, 1342);
    assert!(league.entries[0].hot_streak);
    assert!(league.entries[1].fresh_blood);
}

#[tokio::test]
async fn grandmaster_and_master_use_their_own_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/lol/league/v4/grandmasterleagues/by-queue/RANKED_FLEX_SR",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "leagueId": "gm-league",
            "entries": [],
            "tier": "GRANDMASTER",
            "name": "Twisted Fate's Duelists",
            "queue": "RANKED_FLEX_SR"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/lol/league/v4/masterleagues/by-queue/RANKED_SOLO_5x5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "leagueId": "master-league",
            "entries": [],
            "tier": "MASTER",
            "name": "Jax's Outlaws",
            "queue": "RANKED_SOLO_5x5"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);

    let gm = client
        .league_v4()
        .get_grandmaster_league(QueueType::RankedFlexSr)
        .await
        .unwrap();
    assert_eq!(gm.tier, "GRANDMASTER");

    let master = client
        .league_v4()
        .get_master_league(QueueType::RankedSolo5x5)
        .await
        .unwrap();
    assert_eq!(master.tier, "MASTER");
}

#[tokio::test]
async fn entries_by_puuid_deserialize_with_mini_series() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lol/league/v4/entries/by-puuid/abc-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "leagueId": "sr-league",
                "puuid": "abc-123",
                "queueType": "RANKED_SOLO_5x5",
                "tier": "DIAMOND",
                "rank": "II",
                "leaguePoints": 75,
                "wins": 120,
                "losses": 98,
                "veteran": false,
                "inactive": false,
                "freshBlood": false,
                "hotStreak": false,
                "miniSeries": {
                    "losses": 1,
                    "progress": "WLN",
                    "target": 2,
                    "wins": 1
                }
            },
            {
                "leagueId": "flex-league",
                "puuid": "abc-123",
                "queueType": "RANKED_FLEX_SR",
                "tier": "EMERALD",
                "rank": "IV",
                "leaguePoints": 12,
                "wins": 30,
                "losses": 28,
                "veteran": false,
                "inactive": false,
                "freshBlood": true,
                "hotStreak": false
            }
        ])))
        .mount(&mock_server)
        .await;

    let entries = test_client(&mock_server)
        .league_v4()
        .get_league_entries_by_puuid("abc-123")
        .await
        .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].queue_type, "RANKED_SOLO_5x5");
    let series = entries[0].mini_series.as_ref().unwrap();
    assert_eq!(series.progress, "WLN");
    assert_eq!(series.target, 2);
    assert!(entries[1].mini_series.is_none());
}

#[tokio::test]
async fn paged_entries_render_queue_tier_and_division_into_the_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lol/league/v4/entries/RANKED_SOLO_5x5/DIAMOND/I"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let entries = test_client(&mock_server)
        .league_v4()
        .get_league_entries(QueueType::RankedSolo5x5, Tier::Diamond, Division::I)
        .await
        .unwrap();

    assert!(entries.is_empty());
}

#[tokio::test]
async fn league_by_id_hits_the_leagues_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lol/league/v4/leagues/sr-league-uuid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "leagueId": "sr-league-uuid",
            "entries": [],
            "tier": "DIAMOND",
            "name": "Ahri's Weapon Masters",
            "queue": "RANKED_SOLO_5x5"
        })))
        .mount(&mock_server)
        .await;

    let league = test_client(&mock_server)
        .league_v4()
        .get_league_by_id("sr-league-uuid")
        .await
        .unwrap();

    assert_eq!(league.league_id, "sr-league-uuid");
    assert_eq!(league.name, "Ahri's Weapon Masters");
}

#[tokio::test]
async fn rate_limit_envelope_comes_back_as_an_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/lol/league/v4/challengerleagues/by-queue/RANKED_SOLO_5x5",
        ))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "status": { "status_code": 429, "message": "Rate limit exceeded" }
        })))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server)
        .league_v4()
        .get_challenger_league(QueueType::RankedSolo5x5)
        .await
        .unwrap_err();

    match err {
        Error::Api(status) => {
            assert_eq!(status.status_code, 429);
            assert_eq!(status.message, "Rate limit exceeded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
