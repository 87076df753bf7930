mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Limits, Map, Postgres, Security, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.map.words_per_point <= 0 {
		return Err(Error::Validation {
			message: "map.words_per_point must be greater than zero.".to_string(),
		});
	}
	if cfg.map.radius_min <= 0 {
		return Err(Error::Validation {
			message: "map.radius_min must be greater than zero.".to_string(),
		});
	}
	if cfg.map.radius_max < cfg.map.radius_min {
		return Err(Error::Validation {
			message: "map.radius_max must be greater than or equal to map.radius_min.".to_string(),
		});
	}
	if cfg.map.radius_scale < 0 {
		return Err(Error::Validation {
			message: "map.radius_scale must be zero or greater.".to_string(),
		});
	}
	if cfg.limits.max_label_chars == 0 {
		return Err(Error::Validation {
			message: "limits.max_label_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.limits.max_title_chars == 0 {
		return Err(Error::Validation {
			message: "limits.max_title_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.limits.max_content_chars == 0 {
		return Err(Error::Validation {
			message: "limits.max_content_chars must be greater than zero.".to_string(),
		});
	}

	Ok(())
}
