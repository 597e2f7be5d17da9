//! Turns fetched stats into a message the bot can send.
//!
//! Nothing in here knows about Discord; [`PresentationMessage`] maps 1:1 onto an embed.

pub mod color;

use crate::{faceit::SkillRecord, steam::Playtime};

/// Invisible character for empty field names/values. Discord refuses truly empty ones.
pub const BLANK: &str = "\u{200B}";

pub const NO_ACCOUNT_TITLE: &str = "Player has no FACEIT account. He is probably cheating!!!!!";
pub const TITLE: &str = "Player Information";
pub const FOOTER: &str = "Data retrieved from Steam and FACEIT API";
pub const PRIVATE_PROFILE: &str = "**Private Steam Profile**";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
	pub name: String,
	pub value: String,
	pub inline: bool,
}

impl EmbedField {
	pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
		Self { name: name.into(), value: value.into(), inline }
	}

	/// Bold, full-width row separating groups of fields.
	fn header(text: &str) -> Self {
		Self::new(BLANK, format!("**{text}**"), false)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationMessage {
	pub title: String,

	/// `0xRRGGBB`
	pub color: u32,

	pub fields: Vec<EmbedField>,
	pub thumbnail: Option<String>,

	/// Where clicking the title leads.
	pub url: Option<String>,

	pub footer: String,
}

/// Builds the reply for a lookup.
///
/// If there is no usable FACEIT account the message consists of a single warning and nothing
/// else. Otherwise it lists CS2 and CS:GO stats followed by the Steam playtime section.
pub fn build(skill: Option<&SkillRecord>, playtime: &Playtime) -> PresentationMessage {
	match skill {
		Some(skill) if !skill.is_empty() => full(skill, playtime),
		_ => no_account(),
	}
}

fn no_account() -> PresentationMessage {
	PresentationMessage {
		title: String::from(NO_ACCOUNT_TITLE),
		color: color::RED,
		fields: vec![EmbedField::new(BLANK, BLANK, false)],
		thumbnail: None,
		url: None,
		footer: String::from(FOOTER),
	}
}

fn full(skill: &SkillRecord, playtime: &Playtime) -> PresentationMessage {
	let mut fields = vec![
		EmbedField::header("FACEIT CS2 Stats:"),
		EmbedField::new("Player Name", &skill.cs2.name, true),
		EmbedField::new("Faceit Elo", skill.cs2.elo.to_string(), true),
		EmbedField::new("Skill Level", skill.cs2.skill_level.to_string(), true),
		EmbedField::new("Region", &skill.cs2.region, true),
		EmbedField::header("FACEIT CS:GO Stats:"),
		EmbedField::new("Faceit Elo", skill.csgo.elo.to_string(), true),
		EmbedField::new("Skill Level", skill.csgo.skill_level.to_string(), true),
	];

	fields.extend(playtime_fields(playtime));

	PresentationMessage {
		title: String::from(TITLE),
		color: color::skill_level_color(skill.cs2.skill_level),
		fields,
		thumbnail: non_empty(&skill.avatar),
		url: non_empty(&skill.faceit_url),
		footer: String::from(FOOTER),
	}
}

fn playtime_fields(playtime: &Playtime) -> Vec<EmbedField> {
	if playtime.is_private() {
		return vec![EmbedField::new(PRIVATE_PROFILE, BLANK, false)];
	}

	vec![
		EmbedField::header("CS2 Stats:"),
		EmbedField::new("Total Playtime", hours(playtime.total_minutes), true),
		EmbedField::new("Last two weeks", hours(playtime.last_two_weeks_minutes), true),
	]
}

fn hours(minutes: u64) -> String {
	format!("{} hours", minutes / 60)
}

fn non_empty(s: &str) -> Option<String> {
	(!s.is_empty()).then(|| s.to_owned())
}
