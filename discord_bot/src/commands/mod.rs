mod faceit;
pub use faceit::faceit;
