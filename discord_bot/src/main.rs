//! Discord Bot for looking up FACEIT accounts.
//!
//! `/faceit` takes a Steam profile URL and replies with the player's FACEIT Elo and skill level
//! for CS2 and CS:GO, plus their CS2 playtime. All the actual lookups happen in the
//! [`faceitfinder`] crate; this crate only deals with Discord, configuration and logging.

#![warn(missing_debug_implementations, rust_2018_idioms)]
#![warn(clippy::style, clippy::perf, clippy::complexity, clippy::correctness)]

mod commands;
mod config;
mod error;

use {
	crate::{
		config::{Config, RegisterMode},
		error::Error,
	},
	clap::Parser,
	color_eyre::{eyre::eyre, Result as Eyre},
	poise::{
		serenity_prelude::{self as serenity, Activity, GatewayIntents, GuildId},
		Command, Event, Framework, FrameworkOptions,
	},
	std::path::PathBuf,
	time::macros::format_description,
	tracing::{debug, error, info},
	tracing_subscriber::{
		fmt::{format::FmtSpan, time::UtcTime},
		EnvFilter,
	},
};

#[tokio::main]
async fn main() -> Eyre<()> {
	color_eyre::install()?;
	let args = Args::parse();

	if let Err(why) = dotenv::dotenv() {
		if !why.not_found() {
			return Err(eyre!("Failed to load `.env` file: {why}"));
		}
	}

	let mut config = Config::load(&args.config)?;

	if let Some(mode) = args.mode {
		config.mode = mode;
	}

	if let Some(guild) = args.guild {
		config.dev_guild = Some(guild);
	}

	config.validate()?;

	let (log_writer, _guard) = match &config.log_directory {
		Some(log_directory) => tracing_appender::non_blocking(tracing_appender::rolling::daily(
			log_directory,
			"faceitfinder.log",
		)),
		None => tracing_appender::non_blocking(std::io::stdout()),
	};

	tracing_subscriber::fmt()
		.compact()
		.with_writer(log_writer)
		.with_timer(UtcTime::new(format_description!(
			"[[[year]-[month]-[day] | [hour]:[minute]:[second]]"
		)))
		.with_line_number(true)
		.with_span_events(FmtSpan::NEW)
		.with_env_filter({
			EnvFilter::new(if args.debug {
				"DEBUG"
			} else if let Some(ref level) = config.log_level {
				level.as_str()
			} else {
				"discord_bot=INFO,faceitfinder=INFO"
			})
		})
		.init();

	debug!("{config:?}");

	let scope = CommandScope::new(&config)?;
	let unregister_on_shutdown = !args.keep_commands;
	let global_state = GlobalState::new(config)?;

	let framework = Framework::builder()
		.options(FrameworkOptions {
			commands: vec![commands::faceit()],
			on_error: |error| Box::pin(Error::handle_command(error)),
			event_handler: |ctx, event, _, _| {
				Box::pin(async move {
					debug!("Received event `{}`", event.name());
					if let Event::Ready { data_about_bot } = event {
						info!("Connected to Discord as {}!", data_about_bot.user.tag());
						ctx.set_activity(Activity::playing("/faceit"))
							.await;
					}
					Ok(())
				})
			},
			..Default::default()
		})
		.token(&global_state.config.discord_token)
		.intents(GatewayIntents::GUILDS)
		.setup(move |ctx, _, framework| {
			Box::pin(async move {
				let commands = &framework.options().commands;
				scope.register(ctx, commands).await?;

				for Command { name, .. } in commands {
					info!("[{scope}] Successfully registered command `/{name}`.");
				}

				let shard_manager = framework.shard_manager().clone();
				let ctx = ctx.clone();

				tokio::spawn(async move {
					if let Err(why) = tokio::signal::ctrl_c().await {
						error!("Failed to listen for Ctrl+C: {why:?}");
						return;
					}

					info!("Shutting down...");

					if unregister_on_shutdown {
						match scope.unregister(&ctx).await {
							Ok(()) => info!("[{scope}] Removed all commands."),
							Err(why) => error!("[{scope}] Failed to remove commands: {why:?}"),
						}
					}

					shard_manager
						.lock()
						.await
						.shutdown_all()
						.await;
				});

				Ok(global_state)
			})
		});

	info!("Finished setting up. Connecting to Discord...");
	framework.run().await?;

	Ok(())
}

/// Some convenience CLI arguments to configure the bot quickly without changing the config file.
/// Any of these options will override the values set in the config file.
#[derive(Debug, Clone, Parser)]
struct Args {
	/// The path to the bot's config file.
	#[arg(short, long)]
	#[clap(default_value = "./config.toml")]
	pub config: PathBuf,

	/// Which level to register commands on.
	/// - `Dev`: commands will be registered on a single guild only. This is fast and useful for
	///          development.
	/// - `Prod`: commands will be registered on every guild the bot is on and allowed to register
	///           commands on. This might take a while to reload and therefore should only be used
	///           when running in production.
	#[arg(long)]
	pub mode: Option<RegisterMode>,

	/// The guild to register commands on in `Dev` mode.
	#[arg(long)]
	pub guild: Option<u64>,

	/// Don't remove the bot's commands when shutting down.
	#[arg(long)]
	pub keep_commands: bool,

	/// Run in debug mode.
	#[arg(long)]
	pub debug: bool,
}

/// Where the bot's commands live, derived from [`RegisterMode`].
#[derive(Debug, Clone, Copy)]
enum CommandScope {
	Guild(GuildId),
	Global,
}

impl CommandScope {
	fn new(config: &Config) -> Eyre<Self> {
		match config.mode {
			RegisterMode::Dev => config
				.dev_guild
				.map(|guild| Self::Guild(GuildId(guild)))
				.ok_or_else(|| eyre!("`dev_guild` is required when running in `Dev` mode.")),
			RegisterMode::Prod => Ok(Self::Global),
		}
	}

	async fn register(
		&self,
		ctx: &serenity::Context,
		commands: &[Command<GlobalState, Error>],
	) -> Result<(), serenity::Error> {
		match self {
			Self::Guild(guild) => poise::builtins::register_in_guild(ctx, commands, *guild).await,
			Self::Global => poise::builtins::register_globally(ctx, commands).await,
		}
	}

	async fn unregister(&self, ctx: &serenity::Context) -> Result<(), serenity::Error> {
		match self {
			Self::Guild(guild) => {
				guild
					.set_application_commands(ctx, |commands| commands)
					.await?;
			}
			Self::Global => {
				serenity::Command::set_global_application_commands(ctx, |commands| commands)
					.await?;
			}
		}

		Ok(())
	}
}

impl std::fmt::Display for CommandScope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Guild(guild) => write!(f, "{} ({guild})", RegisterMode::Dev),
			Self::Global => write!(f, "{}", RegisterMode::Prod),
		}
	}
}

/// Global State Object used for the entire runtime of the process. This holds "global" information
/// such as the parsed config file and the HTTP client for Steam and FACEIT.
#[derive(Debug)]
pub struct GlobalState {
	/// Parsed config file of the bot.
	pub config: Config,

	/// [`faceitfinder::Client`] for resolving Steam profiles and fetching stats.
	pub client: faceitfinder::Client,
}

impl GlobalState {
	fn new(config: Config) -> Eyre<Self> {
		let client = faceitfinder::Client::new(config.api_config())?;
		Ok(Self { config, client })
	}
}

/// Global `Context` type which gets passed to slash commands.
pub type Context<'ctx> = poise::Context<'ctx, GlobalState, Error>;

/// Convenience trait for getter functions on [`Context`].
pub trait State {
	fn client(&self) -> &faceitfinder::Client;
}

impl State for Context<'_> {
	fn client(&self) -> &faceitfinder::Client {
		&self.data().client
	}
}
