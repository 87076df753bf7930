pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Validation failed: {message}")]
	Validation { message: String, fields: Vec<String> },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<neuro_storage::Error> for Error {
	fn from(err: neuro_storage::Error) -> Self {
		match err {
			neuro_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			neuro_storage::Error::InvalidArgument(message) =>
				Self::Validation { message, fields: Vec::new() },
			neuro_storage::Error::NotFound(message) => Self::NotFound { message },
		}
	}
}
