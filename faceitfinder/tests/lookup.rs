//! End-to-end lookups against mocked Steam and FACEIT endpoints.

use {
	color_eyre::Result,
	faceitfinder::{presentation, ApiConfig, Client, Error, Playtime, ProfileUrl, SteamID},
	httpmock::prelude::*,
	serde_json::json,
	std::time::Duration,
};

const STEAM_KEY: &str = "steam-test-key";
const FACEIT_KEY: &str = "faceit-test-key";
const STEAM_ID: u64 = 76561198282622073;

const VANITY_PATH: &str = "/ISteamUser/ResolveVanityURL/v1/";
const OWNED_GAMES_PATH: &str = "/IPlayerService/GetOwnedGames/v0001/";
const PLAYERS_PATH: &str = "/players";

fn client(steam: &MockServer, faceit: &MockServer) -> Result<Client> {
	let config = ApiConfig::new(STEAM_KEY, FACEIT_KEY)
		.base_urls(steam.base_url(), faceit.base_url())
		.timeout(Duration::from_secs(2));

	Ok(Client::new(config)?)
}

fn faceit_player() -> serde_json::Value {
	json!({
		"player_id": "a6b4a9fc-4b8e-4c62-9d10-2d5b2e3b1f0a",
		"nickname": "AlphaKeks",
		"avatar": "https://assets.faceit-cdn.net/avatars/alphakeks.jpg",
		"faceit_url": "https://www.faceit.com/{lang}/players/AlphaKeks",
		"games": {
			"cs2": {
				"faceit_elo": 2143,
				"game_player_id": STEAM_ID.to_string(),
				"game_player_name": "AlphaKeks",
				"region": "EU",
				"skill_level": 9
			}
		}
	})
}

#[tokio::test]
async fn numeric_profile_never_calls_identity_api() -> Result<()> {
	let steam = MockServer::start();
	let faceit = MockServer::start();

	let vanity = steam.mock(|when, then| {
		when.method(GET).path(VANITY_PATH);
		then.status(500);
	});

	let client = client(&steam, &faceit)?;
	let steam_id = client
		.resolve_str("https://steamcommunity.com/profiles/76561198282622073")
		.await?;

	assert_eq!(steam_id, SteamID(STEAM_ID));
	vanity.assert_calls(0);

	Ok(())
}

#[tokio::test]
async fn vanity_profile_is_resolved() -> Result<()> {
	let steam = MockServer::start();
	let faceit = MockServer::start();

	let vanity = steam.mock(|when, then| {
		when.method(GET)
			.path(VANITY_PATH)
			.query_param("key", STEAM_KEY)
			.query_param("vanityurl", "alphakeks");
		then.status(200)
			.json_body(json!({ "response": { "steamid": STEAM_ID.to_string(), "success": 1 } }));
	});

	let client = client(&steam, &faceit)?;
	let steam_id = client
		.resolve_str("https://steamcommunity.com/id/AlphaKeks/")
		.await?;

	assert_eq!(steam_id, SteamID(STEAM_ID));
	vanity.assert_calls(1);

	Ok(())
}

#[tokio::test]
async fn unknown_vanity_fails_resolution() -> Result<()> {
	let steam = MockServer::start();
	let faceit = MockServer::start();

	steam.mock(|when, then| {
		when.method(GET).path(VANITY_PATH);
		then.status(200)
			.json_body(json!({ "response": { "success": 42, "message": "No match" } }));
	});

	let client = client(&steam, &faceit)?;
	let result = client
		.resolve(&ProfileUrl::Vanity(String::from("nobody")))
		.await;

	assert!(
		matches!(&result, Err(Error::UpstreamResolutionFailed { alias, .. }) if alias == "nobody"),
		"{result:?}"
	);

	Ok(())
}

#[tokio::test]
async fn broken_identity_api_fails_resolution() -> Result<()> {
	let steam = MockServer::start();
	let faceit = MockServer::start();

	steam.mock(|when, then| {
		when.method(GET).path(VANITY_PATH);
		then.status(200).body("<html>rate limited</html>");
	});

	let client = client(&steam, &faceit)?;
	let result = client
		.resolve(&ProfileUrl::Vanity(String::from("alphakeks")))
		.await;

	let Err(Error::UpstreamResolutionFailed { reason, .. }) = result else {
		panic!("expected resolution failure, got {result:?}");
	};

	// the API key is part of the URL and must not leak into error messages
	assert!(!reason.contains(STEAM_KEY), "{reason}");

	Ok(())
}

#[tokio::test]
async fn invalid_url_makes_no_requests() -> Result<()> {
	let steam = MockServer::start();
	let faceit = MockServer::start();

	let any_steam = steam.mock(|when, then| {
		when.any_request();
		then.status(500);
	});

	let client = client(&steam, &faceit)?;
	let result = client
		.resolve_str("https://steamcommunity.com/groups/kz")
		.await;

	assert!(matches!(result, Err(Error::InvalidSyntax { .. })));
	any_steam.assert_calls(0);

	Ok(())
}

#[tokio::test]
async fn aggregate_merges_both_apis() -> Result<()> {
	let steam = MockServer::start();
	let faceit = MockServer::start();

	let players = faceit.mock(|when, then| {
		when.method(GET)
			.path(PLAYERS_PATH)
			.query_param("game_player_id", STEAM_ID.to_string())
			.query_param("game", "cs2")
			.header("authorization", format!("Bearer {FACEIT_KEY}"));
		then.status(200).json_body(faceit_player());
	});

	let owned_games = steam.mock(|when, then| {
		when.method(GET)
			.path(OWNED_GAMES_PATH)
			.query_param("key", STEAM_KEY)
			.query_param("steamid", STEAM_ID.to_string());
		then.status(200).json_body(json!({ "response": { "game_count": 2, "games": [
			{ "appid": 570, "playtime_forever": 99999, "playtime_2weeks": 999 },
			{ "appid": 730, "playtime_forever": 6000, "playtime_2weeks": 120 }
		] } }));
	});

	let client = client(&steam, &faceit)?;
	let stats = client.aggregate(SteamID(STEAM_ID)).await;

	players.assert_calls(1);
	owned_games.assert_calls(1);

	let skill = stats.skill.as_ref().expect("FACEIT account");
	assert_eq!(skill.cs2.elo, 2143);
	assert_eq!(skill.cs2.skill_level, 9);
	assert_eq!(skill.faceit_url, "https://www.faceit.com/en/players/AlphaKeks");
	assert_eq!(skill.csgo.elo, 0);
	assert_eq!(skill.csgo.skill_level, 0);
	assert!(skill.csgo.region.is_empty());
	assert_eq!(stats.playtime, Playtime { total_minutes: 6000, last_two_weeks_minutes: 120 });

	let message = presentation::build(stats.skill.as_ref(), &stats.playtime);
	assert_eq!(message.title, presentation::TITLE);
	assert!(message
		.fields
		.iter()
		.any(|field| field.name == "Total Playtime" && field.value == "100 hours"));

	Ok(())
}

#[tokio::test]
async fn broken_faceit_still_reports_playtime() -> Result<()> {
	let steam = MockServer::start();
	let faceit = MockServer::start();

	faceit.mock(|when, then| {
		when.method(GET).path(PLAYERS_PATH);
		then.status(503).body("upstream unavailable");
	});

	steam.mock(|when, then| {
		when.method(GET).path(OWNED_GAMES_PATH);
		then.status(200).json_body(json!({ "response": { "games": [
			{ "appid": 730, "playtime_forever": 600, "playtime_2weeks": 60 }
		] } }));
	});

	let client = client(&steam, &faceit)?;
	let stats = client.aggregate(SteamID(STEAM_ID)).await;

	assert!(stats.skill.is_none());
	assert_eq!(stats.playtime, Playtime { total_minutes: 600, last_two_weeks_minutes: 60 });

	Ok(())
}

#[tokio::test]
async fn broken_steam_still_reports_skill() -> Result<()> {
	let steam = MockServer::start();
	let faceit = MockServer::start();

	faceit.mock(|when, then| {
		when.method(GET).path(PLAYERS_PATH);
		then.status(200).json_body(faceit_player());
	});

	steam.mock(|when, then| {
		when.method(GET).path(OWNED_GAMES_PATH);
		then.status(200).body("definitely not json");
	});

	let client = client(&steam, &faceit)?;
	let stats = client.aggregate(SteamID(STEAM_ID)).await;

	assert!(stats.skill.is_some());
	assert_eq!(stats.playtime, Playtime::default());

	let message = presentation::build(stats.skill.as_ref(), &stats.playtime);
	assert_eq!(
		message.fields.last().map(|field| field.name.as_str()),
		Some(presentation::PRIVATE_PROFILE)
	);

	Ok(())
}

#[tokio::test]
async fn unknown_faceit_player_is_no_account() -> Result<()> {
	let steam = MockServer::start();
	let faceit = MockServer::start();

	faceit.mock(|when, then| {
		when.method(GET).path(PLAYERS_PATH);
		then.status(404)
			.json_body(json!({ "errors": [{ "message": "The resource was not found." }] }));
	});

	steam.mock(|when, then| {
		when.method(GET).path(OWNED_GAMES_PATH);
		then.status(200).json_body(json!({ "response": {} }));
	});

	let client = client(&steam, &faceit)?;

	assert!(client.get_skill(SteamID(STEAM_ID)).await?.is_none());

	let stats = client.aggregate(SteamID(STEAM_ID)).await;
	let message = presentation::build(stats.skill.as_ref(), &stats.playtime);

	assert_eq!(message.title, presentation::NO_ACCOUNT_TITLE);
	assert_eq!(message.color, 0xFF0000);
	assert_eq!(message.fields.len(), 1);

	Ok(())
}

#[tokio::test]
async fn slow_upstream_degrades() -> Result<()> {
	let steam = MockServer::start();
	let faceit = MockServer::start();

	faceit.mock(|when, then| {
		when.method(GET).path(PLAYERS_PATH);
		then.status(200)
			.delay(Duration::from_millis(500))
			.json_body(faceit_player());
	});

	steam.mock(|when, then| {
		when.method(GET).path(OWNED_GAMES_PATH);
		then.status(200).json_body(json!({ "response": { "games": [
			{ "appid": 730, "playtime_forever": 120, "playtime_2weeks": 0 }
		] } }));
	});

	let config = ApiConfig::new(STEAM_KEY, FACEIT_KEY)
		.base_urls(steam.base_url(), faceit.base_url())
		.timeout(Duration::from_millis(100));

	let stats = Client::new(config)?
		.aggregate(SteamID(STEAM_ID))
		.await;

	assert!(stats.skill.is_none());
	assert_eq!(stats.playtime.total_minutes, 120);

	Ok(())
}
