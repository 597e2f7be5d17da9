//! HTTP client for the Steam WebAPI and the FACEIT Data API.

use {
	crate::{
		error::{Error, Result},
		faceit::{self, PlayerResponse, SkillRecord},
		profile::{ProfileUrl, SteamID},
		steam::{OwnedGamesResponse, Playtime, VanityResponse},
	},
	reqwest::{RequestBuilder, StatusCode},
	serde::de::DeserializeOwned,
	std::{sync::Arc, time::Duration},
	tracing::{debug, warn},
};

pub const STEAM_API_URL: &str = "https://api.steampowered.com";
pub const FACEIT_API_URL: &str = "https://open.faceit.com/data/v4";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const RESOLVE_VANITY_URL: &str = "ResolveVanityURL";
const GET_OWNED_GAMES: &str = "GetOwnedGames";
const FACEIT_PLAYERS: &str = "FACEIT /players";

/// API keys and endpoints. Built once at startup and never modified afterwards.
#[derive(Clone)]
pub struct ApiConfig {
	pub steam_api_key: String,
	pub faceit_api_key: String,
	pub steam_api_url: String,
	pub faceit_api_url: String,

	/// Upper bound for every single upstream request.
	pub timeout: Duration,
}

impl ApiConfig {
	pub fn new(steam_api_key: impl Into<String>, faceit_api_key: impl Into<String>) -> Self {
		Self {
			steam_api_key: steam_api_key.into(),
			faceit_api_key: faceit_api_key.into(),
			steam_api_url: String::from(STEAM_API_URL),
			faceit_api_url: String::from(FACEIT_API_URL),
			timeout: DEFAULT_TIMEOUT,
		}
	}

	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Points both APIs somewhere else, e.g. at a mock server.
	pub fn base_urls(
		mut self,
		steam_api_url: impl Into<String>,
		faceit_api_url: impl Into<String>,
	) -> Self {
		self.steam_api_url = steam_api_url.into();
		self.faceit_api_url = faceit_api_url.into();
		self
	}
}

impl std::fmt::Debug for ApiConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ApiConfig")
			.field("steam_api_key", &"<redacted>")
			.field("faceit_api_key", &"<redacted>")
			.field("steam_api_url", &self.steam_api_url)
			.field("faceit_api_url", &self.faceit_api_url)
			.field("timeout", &self.timeout)
			.finish()
	}
}

/// Result of [`Client::aggregate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStats {
	/// `None` if the player has no FACEIT account or FACEIT could not be reached.
	pub skill: Option<SkillRecord>,

	/// Zeroed if the Steam profile is private or Steam could not be reached.
	pub playtime: Playtime,
}

/// Cheap to clone; clones share the same connection pool and config.
#[derive(Debug, Clone)]
pub struct Client {
	http: reqwest::Client,
	config: Arc<ApiConfig>,
}

impl Client {
	pub fn new(config: ApiConfig) -> Result<Self> {
		let http = reqwest::Client::builder()
			.user_agent(concat!("faceitfinder/", env!("CARGO_PKG_VERSION")))
			.build()
			.map_err(|why| Error::http("client setup", why))?;

		Ok(Self::with_client(http, config))
	}

	/// Use this when you need to configure proxies, headers, etc. yourself. The timeout in
	/// `config` is still applied to every request.
	pub fn with_client(http: reqwest::Client, config: ApiConfig) -> Self {
		Self { http, config: Arc::new(config) }
	}

	pub fn config(&self) -> &ApiConfig {
		&self.config
	}

	/// Turns a profile URL into a [`SteamID`]. Only vanity URLs cause a request.
	#[tracing::instrument(skip(self), err(Display))]
	pub async fn resolve(&self, profile: &ProfileUrl) -> Result<SteamID> {
		let alias = match profile {
			ProfileUrl::Numeric(steam_id) => return Ok(*steam_id),
			ProfileUrl::Vanity(alias) => alias,
		};

		let request = self
			.http
			.get(format!("{}/ISteamUser/ResolveVanityURL/v1/", self.config.steam_api_url))
			.query(&[
				("key", self.config.steam_api_key.as_str()),
				("vanityurl", alias.as_str()),
			]);

		let steam_id = self
			.get_json::<VanityResponse>(RESOLVE_VANITY_URL, request)
			.await
			.map_err(|why| Error::UpstreamResolutionFailed {
				alias: alias.to_owned(),
				reason: why.to_string(),
			})?
			.into_steam_id(alias)?;

		debug!(%steam_id, "Resolved vanity URL.");

		Ok(steam_id)
	}

	/// [`ProfileUrl`] parsing and [`Client::resolve`] in one go.
	pub async fn resolve_str(&self, profile_url: &str) -> Result<SteamID> {
		self.resolve(&profile_url.parse()?).await
	}

	/// Fetches FACEIT stats and Steam playtime at the same time. Never fails; whatever could not
	/// be fetched is left empty.
	#[tracing::instrument(skip(self))]
	pub async fn aggregate(&self, steam_id: SteamID) -> PlayerStats {
		let (skill, playtime) = tokio::join!(self.get_skill(steam_id), self.get_playtime(steam_id));

		let skill = skill.unwrap_or_else(|why| {
			warn!("FACEIT lookup degraded: {why}");
			None
		});

		let playtime = playtime.unwrap_or_else(|why| {
			warn!("Steam playtime lookup degraded: {why}");
			Playtime::default()
		});

		PlayerStats { skill, playtime }
	}

	/// `Ok(None)` means FACEIT doesn't know this SteamID.
	#[tracing::instrument(skip(self))]
	pub async fn get_skill(&self, steam_id: SteamID) -> Result<Option<SkillRecord>> {
		let request = self
			.http
			.get(format!("{}/players", self.config.faceit_api_url))
			.query(&[("game_player_id", steam_id.to_string().as_str()), ("game", faceit::GAME)])
			.bearer_auth(&self.config.faceit_api_key);

		match self
			.get_json::<PlayerResponse>(FACEIT_PLAYERS, request)
			.await
		{
			Ok(player) => Ok(Some(player.into())),
			Err(Error::UnexpectedStatus { status: StatusCode::NOT_FOUND, .. }) => {
				debug!("No FACEIT account.");
				Ok(None)
			}
			Err(why) => Err(why),
		}
	}

	#[tracing::instrument(skip(self))]
	pub async fn get_playtime(&self, steam_id: SteamID) -> Result<Playtime> {
		let request = self
			.http
			.get(format!("{}/IPlayerService/GetOwnedGames/v0001/", self.config.steam_api_url))
			.query(&[
				("key", self.config.steam_api_key.as_str()),
				("steamid", steam_id.to_string().as_str()),
				("format", "json"),
			]);

		Ok(self
			.get_json::<OwnedGamesResponse>(GET_OWNED_GAMES, request)
			.await?
			.cs2_playtime())
	}

	async fn get_json<T: DeserializeOwned>(
		&self,
		endpoint: &'static str,
		request: RequestBuilder,
	) -> Result<T> {
		let response = request
			.timeout(self.config.timeout)
			.send()
			.await
			.map_err(|why| Error::http(endpoint, why))?;

		let status = response.status();
		if !status.is_success() {
			return Err(Error::UnexpectedStatus { endpoint, status });
		}

		response
			.json::<T>()
			.await
			.map_err(|why| Error::http(endpoint, why))
	}
}
