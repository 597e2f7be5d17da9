//! The global [`Error`] and [`Result`] types used across the entire crate.

use tracing::{error, info, warn};

pub type Result<T> = std::result::Result<T, Error>;

/// Global `Error` type for the entire crate.
#[derive(Debug, Clone)]
pub enum Error {
	/// Some custom edge-case error that doesn't deserve it's own enum variant.
	Custom(String),

	/// The user didn't give us a Steam profile URL.
	InvalidProfileUrl { input: String },

	/// Steam couldn't tell us who is behind a vanity URL.
	ResolutionFailed { alias: String },

	/// Talking to Discord failed, e.g. while sending the reply.
	Discord,
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::Custom(msg) => f.write_str(msg),
			Error::InvalidProfileUrl { input } => f.write_fmt(format_args!(
				"`{input}` is not a Steam profile URL. Please use a link like `https://steamcommunity.com/profiles/76561198282622073` or `https://steamcommunity.com/id/<name>`."
			)),
			Error::ResolutionFailed { alias } => f.write_fmt(format_args!(
				"Couldn't find a Steam account for `{alias}`. Maybe the link has a typo?"
			)),
			Error::Discord => f.write_str("Failed to talk to Discord."),
		}
	}
}

impl std::error::Error for Error {}

impl From<faceitfinder::Error> for Error {
	fn from(value: faceitfinder::Error) -> Self {
		match value {
			faceitfinder::Error::InvalidSyntax { input } => Self::InvalidProfileUrl { input },
			faceitfinder::Error::UpstreamResolutionFailed { alias, reason } => {
				warn!("Failed to resolve `{alias}`: {reason}");
				Self::ResolutionFailed { alias }
			}
			why => {
				warn!("Lookup failed: {why}");
				Self::Custom(String::from("Failed to reach Steam or FACEIT. Please try again later."))
			}
		}
	}
}

impl From<serenity::Error> for Error {
	fn from(value: serenity::Error) -> Self {
		error!("Discord error: {value:?}");
		Self::Discord
	}
}

impl Error {
	/// What to tell the user about this error. `None` means there is nobody to tell, because
	/// talking to Discord is what failed in the first place.
	pub fn user_message(&self) -> Option<String> {
		match self {
			Error::Discord => None,
			error => Some(error.to_string()),
		}
	}

	pub async fn handle_command(error: poise::FrameworkError<'_, crate::GlobalState, Error>) {
		error!("Slash Command failed. {error:?}");

		let content = match &error {
			poise::FrameworkError::Command { error, .. } => match error.user_message() {
				Some(content) => content,
				None => {
					warn!("Not replying to a failed delivery.");
					return;
				}
			},
			poise::FrameworkError::ArgumentParse { input, .. } => {
				format!("You provided invalid input. {}", input.as_deref().unwrap_or_default())
			}
			poise::FrameworkError::CommandStructureMismatch { description, .. } => {
				error!("{description}");
				String::from("Incorrect command structure.")
			}
			poise::FrameworkError::MissingBotPermissions { missing_permissions, .. } => {
				error!("{missing_permissions}");
				String::from("The bot is missing permissions for this action. Please contact the server owner and kindly ask them to give the bot the required permissions.")
			}
			why => {
				error!("{why:?}");
				String::from("Failed to execute command.")
			}
		};

		if let Some(ctx) = &error.ctx() {
			if let Err(why) = ctx
				.send(|reply| {
					reply
						.ephemeral(true)
						.content(&content)
				})
				.await
			{
				error!("Failed to respond to slash command. {why:?}");
			}

			info!("Handled error with `{content}`.");
		}
	}
}
