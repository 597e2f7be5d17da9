//! Parsing of Steam community profile URLs.

use {
	crate::error::{Error, Result},
	regex::Regex,
	std::{fmt::Display, str::FromStr, sync::OnceLock},
};

/// A 64-bit SteamID (`7656119...`), the identifier every upstream API is queried with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SteamID(pub u64);

impl Display for SteamID {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for SteamID {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		s.trim().parse::<u64>().map(Self)
	}
}

/// The two kinds of profile URLs Steam hands out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileUrl {
	/// `https://steamcommunity.com/profiles/<steam_id64>`
	Numeric(SteamID),

	/// `https://steamcommunity.com/id/<alias>`, needs to go through `ResolveVanityURL`.
	Vanity(String),
}

fn profile_regex() -> &'static Regex {
	static REGEX: OnceLock<Regex> = OnceLock::new();
	REGEX.get_or_init(|| {
		Regex::new(r#"https://steamcommunity\.com/(profiles|id)/([^/?#\s]+)"#)
			.expect("If it compiles once, it will always compile.")
	})
}

impl FromStr for ProfileUrl {
	type Err = Error;

	#[tracing::instrument(level = "debug")]
	fn from_str(s: &str) -> Result<Self> {
		let input = s.trim().to_lowercase();
		let invalid = || Error::InvalidSyntax { input: s.to_owned() };

		let captures = profile_regex()
			.captures(&input)
			.ok_or_else(invalid)?;

		match (&captures[1], &captures[2]) {
			("profiles", id) => id
				.parse::<SteamID>()
				.map(Self::Numeric)
				.map_err(|_| invalid()),
			(_, alias) => Ok(Self::Vanity(alias.to_owned())),
		}
	}
}

impl Display for ProfileUrl {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Numeric(steam_id) => write!(f, "https://steamcommunity.com/profiles/{steam_id}"),
			Self::Vanity(alias) => write!(f, "https://steamcommunity.com/id/{alias}"),
		}
	}
}
