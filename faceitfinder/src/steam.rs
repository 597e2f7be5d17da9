//! Steam WebAPI functions.

use {
	crate::{
		error::{Error, Result},
		profile::SteamID,
	},
	serde::Deserialize,
};

/// App ID of Counter-Strike 2 (formerly CS:GO).
pub const CS2_APP_ID: u32 = 730;

/// Playtime of a single account in [`CS2_APP_ID`].
///
/// Steam only lists games for public profiles, so `Playtime::default()` (both values `0`) is
/// how a private profile looks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Playtime {
	pub total_minutes: u64,
	pub last_two_weeks_minutes: u64,
}

impl Playtime {
	pub fn is_private(&self) -> bool {
		self.total_minutes == 0
	}
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VanityResponse {
	pub response: InnerVanityResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct InnerVanityResponse {
	pub steamid: Option<String>,
	pub success: i32,
	pub message: Option<String>,
}

impl VanityResponse {
	/// Steam answers with HTTP 200 even if the alias doesn't exist; `success` is `1` only for an
	/// actual match (`42` means "No match").
	pub(crate) fn into_steam_id(self, alias: &str) -> Result<SteamID> {
		let failed = |reason: String| Error::UpstreamResolutionFailed {
			alias: alias.to_owned(),
			reason,
		};

		let InnerVanityResponse { steamid, success, message } = self.response;

		if success != 1 {
			return Err(failed(message.unwrap_or_else(|| format!("Steam reported `success: {success}`"))));
		}

		steamid
			.ok_or_else(|| failed(String::from("no SteamID in response")))?
			.parse::<SteamID>()
			.map_err(|why| failed(format!("invalid SteamID in response ({why})")))
	}
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OwnedGamesResponse {
	pub response: InnerOwnedGamesResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct InnerOwnedGamesResponse {
	/// Missing entirely for private profiles.
	#[serde(default)]
	pub games: Vec<OwnedGame>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OwnedGame {
	pub appid: u32,
	#[serde(default)]
	pub playtime_2weeks: u64,
	#[serde(default)]
	pub playtime_forever: u64,
}

impl OwnedGamesResponse {
	/// First entry for [`CS2_APP_ID`] wins.
	pub(crate) fn cs2_playtime(&self) -> Playtime {
		self.response
			.games
			.iter()
			.find(|game| game.appid == CS2_APP_ID)
			.map(|game| Playtime {
				total_minutes: game.playtime_forever,
				last_two_weeks_minutes: game.playtime_2weeks,
			})
			.unwrap_or_default()
	}
}
