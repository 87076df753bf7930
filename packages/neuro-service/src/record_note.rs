use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use neuro_config::Limits;
use neuro_storage::{
	models::{Note, Topic},
	notes, topics, users,
};

use crate::{Error, NoteBody, NoteService, Result, is_blank};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateNoteRequest {
	pub user_id: Uuid,
	pub topic_name: String,
	pub title: Option<String>,
	pub content: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateNoteResponse {
	pub note: NoteBody,
	pub topic_label: String,
}

impl NoteService {
	/// Records an immutable note, creating its topic on first use. The topic
	/// upsert and the note insert share one transaction, so a failed note
	/// never leaves a stray topic behind.
	pub async fn record_note(&self, req: CreateNoteRequest) -> Result<CreateNoteResponse> {
		validate_create_note_request(&req, &self.cfg.limits)?;

		let user = users::get_user(&self.db.pool, req.user_id)
			.await?
			.ok_or_else(|| Error::NotFound { message: format!("User {}.", req.user_id) })?;
		let now = OffsetDateTime::now_utc();
		let words_count = neuro_domain::word_count(&req.content);
		let mut tx = self.db.pool.begin().await?;
		let topic = topics::upsert_topic(
			&mut *tx,
			&Topic {
				topic_id: Uuid::new_v4(),
				user_id: user.user_id,
				label: req.topic_name.trim().to_string(),
				created_at: now,
			},
		)
		.await?;
		let note = Note {
			note_id: Uuid::new_v4(),
			user_id: user.user_id,
			topic_id: topic.topic_id,
			title: req.title.as_deref().map(|title| title.trim().to_string()),
			content: req.content,
			words_count,
			created_at: now,
		};

		notes::insert_note(&mut *tx, &note).await?;
		tx.commit().await?;

		tracing::info!(
			user_id = %user.user_id,
			topic_id = %topic.topic_id,
			note_id = %note.note_id,
			words_count,
			"Recorded note."
		);

		Ok(CreateNoteResponse { note: NoteBody::from_model(note), topic_label: topic.label })
	}
}

fn validate_create_note_request(req: &CreateNoteRequest, limits: &Limits) -> Result<()> {
	let mut fields = Vec::new();

	if is_blank(&req.topic_name) {
		fields.push("$.topic_name".to_string());
	} else if req.topic_name.trim().chars().count() > limits.max_label_chars {
		fields.push("$.topic_name".to_string());
	}
	if let Some(title) = req.title.as_deref()
		&& title.trim().chars().count() > limits.max_title_chars
	{
		fields.push("$.title".to_string());
	}
	if is_blank(&req.content) {
		fields.push("$.content".to_string());
	} else if req.content.chars().count() > limits.max_content_chars {
		fields.push("$.content".to_string());
	}

	if fields.is_empty() {
		Ok(())
	} else {
		Err(Error::Validation {
			message: "topic_name and content must be non-empty and within configured limits."
				.to_string(),
			fields,
		})
	}
}
