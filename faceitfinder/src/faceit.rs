//! FACEIT Data API (v4) types.

use {serde::Deserialize, std::collections::HashMap};

/// The `game` query parameter used for player lookups.
pub const GAME: &str = "cs2";

/// Key of the current game in the `games` map.
pub const PRIMARY_VARIANT: &str = "cs2";

/// Key of the legacy game in the `games` map.
pub const LEGACY_VARIANT: &str = "csgo";

/// Language code substituted into FACEIT's `{lang}` URL placeholder.
pub const LOCALE: &str = "en";

/// Raw `GET /players` response. Only the fields we actually display are decoded.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PlayerResponse {
	#[serde(default)]
	pub avatar: String,
	#[serde(default)]
	pub faceit_url: String,
	#[serde(default)]
	pub games: HashMap<String, GameResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct GameResponse {
	#[serde(default)]
	pub faceit_elo: i64,
	#[serde(default)]
	pub game_player_name: String,
	#[serde(default)]
	pub region: String,
	#[serde(default)]
	pub skill_level: i64,
}

/// Stats for one game on FACEIT.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStats {
	pub elo: i64,

	/// Usually `1..=10`, but FACEIT doesn't promise that.
	pub skill_level: i64,

	/// In-game name linked to the FACEIT account.
	pub name: String,

	pub region: String,
}

impl From<&GameResponse> for GameStats {
	fn from(game: &GameResponse) -> Self {
		Self {
			elo: game.faceit_elo,
			skill_level: game.skill_level,
			name: game.game_player_name.clone(),
			region: game.region.clone(),
		}
	}
}

/// Everything we know about a FACEIT account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillRecord {
	pub avatar: String,

	/// Profile URL with the language placeholder already filled in.
	pub faceit_url: String,

	pub cs2: GameStats,
	pub csgo: GameStats,
}

impl SkillRecord {
	/// A FACEIT response without a CS2 name and without a profile URL doesn't describe an
	/// actual account.
	pub fn is_empty(&self) -> bool {
		self.cs2.name.is_empty() && self.faceit_url.is_empty()
	}
}

impl PlayerResponse {
	/// Missing variants are not an error; the player simply never played that game.
	fn variant(&self, key: &str) -> GameStats {
		self.games
			.get(key)
			.map(GameStats::from)
			.unwrap_or_default()
	}
}

impl From<PlayerResponse> for SkillRecord {
	fn from(player: PlayerResponse) -> Self {
		Self {
			cs2: player.variant(PRIMARY_VARIANT),
			csgo: player.variant(LEGACY_VARIANT),
			faceit_url: player.faceit_url.replacen("{lang}", LOCALE, 1),
			avatar: player.avatar,
		}
	}
}
