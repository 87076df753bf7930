use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use neuro_storage::{models::Note, notes};

use crate::{Error, NoteService, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteBody {
	pub note_id: Uuid,
	pub topic_id: Uuid,
	pub title: Option<String>,
	pub content: String,
	pub words_count: i64,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
}
impl NoteBody {
	pub(crate) fn from_model(note: Note) -> Self {
		Self {
			note_id: note.note_id,
			topic_id: note.topic_id,
			title: note.title,
			content: note.content,
			words_count: note.words_count,
			created_at: note.created_at,
		}
	}
}

impl NoteService {
	pub async fn fetch_note(&self, user_id: Uuid, note_id: Uuid) -> Result<NoteBody> {
		let note = notes::get_note(&self.db.pool, user_id, note_id)
			.await?
			.ok_or_else(|| Error::NotFound { message: format!("Note {note_id}.") })?;

		Ok(NoteBody::from_model(note))
	}
}
