//! Embed colors based on FACEIT skill levels.

pub const GREEN: u32 = 0x00FF00;
pub const YELLOW: u32 = 0xFFFF00;
pub const RED: u32 = 0xFF0000;

/// Used for anything outside of `1..=10`.
pub const DEFAULT: u32 = 0x3498DB;

/// Levels 1-5 fade from green to yellow, 6-10 from yellow to red.
pub fn skill_level_color(skill_level: i64) -> u32 {
	match skill_level {
		1..=5 => interpolate(GREEN, YELLOW, (skill_level - 1) as f64 / 4.0),
		6..=10 => interpolate(YELLOW, RED, (skill_level - 5) as f64 / 5.0),
		_ => DEFAULT,
	}
}

/// Linear blend of two packed `0xRRGGBB` colors, channel by channel. `t = 0.0` is `from`,
/// `t = 1.0` is `to`. Channels are truncated, not rounded.
pub fn interpolate(from: u32, to: u32, t: f64) -> u32 {
	let blend = |shift: u32| {
		let a = ((from >> shift) & 0xFF) as f64;
		let b = ((to >> shift) & 0xFF) as f64;
		(a * (1.0 - t) + b * t) as u32 & 0xFF
	};

	(blend(16) << 16) | (blend(8) << 8) | blend(0)
}
