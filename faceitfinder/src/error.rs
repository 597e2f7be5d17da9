//! The [`Error`] and [`Result`] types used across the entire crate.

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while looking up a player.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The input is not a Steam community profile URL.
	#[error("`{input}` is not a valid Steam profile URL.")]
	InvalidSyntax { input: String },

	/// Steam could not turn a vanity URL into a SteamID.
	#[error("Failed to resolve Steam vanity URL `{alias}`: {reason}")]
	UpstreamResolutionFailed { alias: String, reason: String },

	/// The request never got a response (network, DNS, TLS, timeout) or the body could not be
	/// decoded.
	#[error("Request to `{endpoint}` failed: {source}")]
	Http {
		endpoint: &'static str,
		source: reqwest::Error,
	},

	/// The API answered with a non-success status code.
	#[error("Unexpected status {status} from `{endpoint}`")]
	UnexpectedStatus {
		endpoint: &'static str,
		status: reqwest::StatusCode,
	},
}

impl Error {
	/// Wraps a [`reqwest::Error`] without its URL. Steam wants its API key as a query parameter,
	/// so the URL must never end up in a log line.
	pub(crate) fn http(endpoint: &'static str, source: reqwest::Error) -> Self {
		Self::Http { endpoint, source: source.without_url() }
	}
}
