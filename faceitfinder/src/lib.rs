//! Looks up the FACEIT account and CS2 playtime behind a Steam profile URL.
//!
//! The lookup happens in three steps:
//!
//! 1. [`ProfileUrl`] parses the URL and [`Client::resolve`] turns it into a [`SteamID`]. Vanity
//!    URLs (`/id/<alias>`) go through Steam's `ResolveVanityURL`; `/profiles/<id>` URLs don't
//!    need a request at all.
//! 2. [`Client::aggregate`] asks FACEIT and Steam for stats at the same time. If either of them
//!    fails, that half is simply left empty.
//! 3. [`presentation::build`] turns the result into a [`PresentationMessage`].

#![warn(missing_debug_implementations, rust_2018_idioms)]
#![warn(clippy::style, clippy::perf, clippy::complexity, clippy::correctness)]

mod client;
mod error;
pub mod faceit;
pub mod presentation;
mod profile;
pub mod steam;

pub use {
	client::{ApiConfig, Client, PlayerStats, DEFAULT_TIMEOUT, FACEIT_API_URL, STEAM_API_URL},
	error::{Error, Result},
	faceit::{GameStats, SkillRecord},
	presentation::{EmbedField, PresentationMessage},
	profile::{ProfileUrl, SteamID},
	steam::Playtime,
};
