use {
	crate::{
		error::{Error, Result},
		Context, State,
	},
	faceitfinder::{presentation, PresentationMessage, ProfileUrl},
	serenity::builder::CreateEmbed,
	tracing::{debug, info},
};

/// Look up the FACEIT account of a Steam profile.
///
/// This command takes the full link to somebody's Steam profile and will show their FACEIT \
/// Elo and skill level for CS2 and CS:GO, as well as how many hours they have played CS2. \
/// Both kinds of profile links work:
///
/// - `https://steamcommunity.com/profiles/76561198282622073`
/// - `https://steamcommunity.com/id/<name>`
///
/// If the player has no FACEIT account at all, you will be warned about it. Playtime is only \
/// visible for public Steam profiles.
#[tracing::instrument(skip(ctx), fields(user = ctx.author().tag()))]
#[poise::command(slash_command, on_error = "Error::handle_command")]
pub async fn faceit(
	ctx: Context<'_>,
	#[description = "The full Steam URL of the person you want to look up."] steam_url: String,
) -> Result<()> {
	// Rejected before deferring, so the user gets a private reply.
	let profile = steam_url.parse::<ProfileUrl>()?;

	ctx.defer().await?;

	let steam_id = ctx.client().resolve(&profile).await?;
	debug!(%steam_id, "Resolved `{profile}`.");

	let stats = ctx.client().aggregate(steam_id).await;
	let message = presentation::build(stats.skill.as_ref(), &stats.playtime);

	ctx.send(|reply| reply.embed(|e| embed(e, &message)))
		.await?;

	info!(%steam_id, title = %message.title, "Sent lookup result.");

	Ok(())
}

fn embed<'e>(e: &'e mut CreateEmbed, message: &PresentationMessage) -> &'e mut CreateEmbed {
	e.title(&message.title).color(message.color);

	for field in &message.fields {
		e.field(&field.name, &field.value, field.inline);
	}

	if let Some(thumbnail) = &message.thumbnail {
		e.thumbnail(thumbnail);
	}

	if let Some(url) = &message.url {
		e.url(url);
	}

	e.footer(|f| f.text(&message.footer))
}
