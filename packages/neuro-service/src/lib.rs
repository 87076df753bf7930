pub mod map;
pub mod notes;
pub mod record_note;
pub mod time_serde;
pub mod users;

mod error;

pub use error::{Error, Result};
pub use map::{MapEdge, MapNode, MapResponse};
pub use notes::NoteBody;
pub use record_note::{CreateNoteRequest, CreateNoteResponse};
pub use users::{CreateUserRequest, CreateUserResponse};

use neuro_config::Config;
use neuro_storage::db::Db;

pub struct NoteService {
	pub cfg: Config,
	pub db: Db,
}
impl NoteService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db }
	}
}

pub(crate) fn is_blank(value: &str) -> bool {
	value.trim().is_empty()
}
