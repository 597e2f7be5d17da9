//! The bot's config file and the environment variables that can override it.

use {
	clap::ValueEnum,
	color_eyre::{eyre::bail as yeet, Result},
	faceitfinder::{ApiConfig, DEFAULT_TIMEOUT},
	serde::Deserialize,
	std::{
		path::{Path, PathBuf},
		time::Duration,
	},
};

/// Overrides [`Config::discord_token`].
pub const DISCORD_TOKEN_VAR: &str = "DISCORD_API";

/// Overrides [`Config::steam_api_key`].
pub const STEAM_API_KEY_VAR: &str = "STEAM_API";

/// Overrides [`Config::faceit_api_key`].
pub const FACEIT_API_KEY_VAR: &str = "FACEIT_API";

/// Config file for the bot.
///
/// Every field is optional in the file itself. The three secrets can also be supplied through
/// the environment (or a `.env` file), which takes precedence over the file.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Can be one of the following:
	/// - `TRACE`
	/// - `DEBUG`
	/// - `INFO`
	/// - `WARN`
	/// - `ERROR`
	///
	/// Any other `EnvFilter` directive works too.
	/// The `--debug` flag will always override this value to `DEBUG`.
	pub log_level: Option<String>,

	/// If set, logs are written to a daily rotating file in this directory instead of stdout.
	pub log_directory: Option<PathBuf>,

	/// Authentication Token for the Discord API.
	pub discord_token: String,

	/// Authentication Token for the Steam WebAPI.
	pub steam_api_key: String,

	/// Bearer token for the FACEIT Data API.
	pub faceit_api_key: String,

	/// Which level to register commands on.
	pub mode: RegisterMode,

	/// The `GuildId` of the development server. Required when running in `Dev` mode.
	pub dev_guild: Option<u64>,

	/// Timeout for every request to Steam / FACEIT, in seconds.
	pub request_timeout: Option<u64>,
}

/// Which level to register commands on.
/// - `Dev`: commands will be registered on a single guild only. This is fast and useful for
///          development.
/// - `Prod`: commands will be registered on every guild the bot is on and allowed to register
///           commands on. This might take a while to reload and therefore should only be used
///           when running in production.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RegisterMode {
	/// Commands will be registered on a single guild only.
	Dev,

	/// Commands will be registered globally.
	#[default]
	Prod,
}

impl std::fmt::Display for RegisterMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Self::Dev => "Dev",
			Self::Prod => "Prod",
		})
	}
}

impl Config {
	/// Reads the config file at `path` (a missing file counts as empty) and applies
	/// environment overrides. Call [`Config::validate`] once all overrides are in place.
	pub fn load(path: &Path) -> Result<Self> {
		let mut config = match std::fs::read_to_string(path) {
			Ok(config_file) => Self::parse(&config_file)?,
			Err(why) if why.kind() == std::io::ErrorKind::NotFound => Self::default(),
			Err(why) => {
				yeet!("Failed to read config file `{}`: {why}", path.display());
			}
		};

		config.apply_env(|var| std::env::var(var).ok());

		Ok(config)
	}

	pub fn parse(config_file: &str) -> Result<Self> {
		Ok(toml::from_str(config_file)?)
	}

	/// Non-empty values returned by `var` replace the corresponding secrets.
	pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
		for (name, field) in [
			(DISCORD_TOKEN_VAR, &mut self.discord_token),
			(STEAM_API_KEY_VAR, &mut self.steam_api_key),
			(FACEIT_API_KEY_VAR, &mut self.faceit_api_key),
		] {
			if let Some(value) = var(name).filter(|value| !value.trim().is_empty()) {
				*field = value;
			}
		}
	}

	pub fn validate(&self) -> Result<()> {
		let missing = [
			("discord_token", DISCORD_TOKEN_VAR, &self.discord_token),
			("steam_api_key", STEAM_API_KEY_VAR, &self.steam_api_key),
			("faceit_api_key", FACEIT_API_KEY_VAR, &self.faceit_api_key),
		]
		.into_iter()
		.filter(|(_, _, value)| value.is_empty())
		.map(|(key, var, _)| format!("`{key}` (or `{var}`)"))
		.collect::<Vec<_>>();

		if !missing.is_empty() {
			yeet!("Missing configuration: {}", missing.join(", "));
		}

		if self.mode == RegisterMode::Dev && self.dev_guild.is_none() {
			yeet!("`dev_guild` is required when running in `Dev` mode.");
		}

		Ok(())
	}

	pub fn request_timeout(&self) -> Duration {
		self.request_timeout
			.map(Duration::from_secs)
			.unwrap_or(DEFAULT_TIMEOUT)
	}

	pub fn api_config(&self) -> ApiConfig {
		ApiConfig::new(&self.steam_api_key, &self.faceit_api_key).timeout(self.request_timeout())
	}
}

impl std::fmt::Debug for Config {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Config")
			.field("log_level", &self.log_level)
			.field("log_directory", &self.log_directory)
			.field("mode", &self.mode)
			.field("dev_guild", &self.dev_guild)
			.field("request_timeout", &self.request_timeout())
			.finish_non_exhaustive()
	}
}
