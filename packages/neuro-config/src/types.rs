use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub map: Map,
	#[serde(default)]
	pub limits: Limits,
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

/// Tuning for the topic activity map. The defaults produce visually
/// reasonable bubble sizes; all four knobs are deliberate configuration
/// rather than constants baked into the formula.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Map {
	/// Words of note content worth one activity point.
	pub words_per_point: i64,
	/// Smallest rendered radius; every topic stays visible.
	pub radius_min: i64,
	/// Largest rendered radius; one topic cannot dominate the canvas.
	pub radius_max: i64,
	/// Radius gained per activity point.
	pub radius_scale: i64,
}
impl Default for Map {
	fn default() -> Self {
		Self { words_per_point: 50, radius_min: 12, radius_max: 60, radius_scale: 2 }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Limits {
	pub max_label_chars: usize,
	pub max_title_chars: usize,
	pub max_content_chars: usize,
}
impl Default for Limits {
	fn default() -> Self {
		Self { max_label_chars: 120, max_title_chars: 200, max_content_chars: 20_000 }
	}
}

#[derive(Debug, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
}
