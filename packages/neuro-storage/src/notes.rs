use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{Result, models::Note};

pub async fn insert_note<'e, E>(executor: E, note: &Note) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query(
		"\
INSERT INTO notes (
\tnote_id,
\tuser_id,
\ttopic_id,
\ttitle,
\tcontent,
\twords_count,
\tcreated_at
)
VALUES ($1,$2,$3,$4,$5,$6,$7)",
	)
	.bind(note.note_id)
	.bind(note.user_id)
	.bind(note.topic_id)
	.bind(note.title.as_deref())
	.bind(note.content.as_str())
	.bind(note.words_count)
	.bind(note.created_at)
	.execute(executor)
	.await?;

	Ok(())
}

pub async fn get_note<'e, E>(executor: E, user_id: Uuid, note_id: Uuid) -> Result<Option<Note>>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, Note>(
		"\
SELECT
\tnote_id,
\tuser_id,
\ttopic_id,
\ttitle,
\tcontent,
\twords_count,
\tcreated_at
FROM notes
WHERE user_id = $1 AND note_id = $2
LIMIT 1",
	)
	.bind(user_id)
	.bind(note_id)
	.fetch_optional(executor)
	.await?;

	Ok(row)
}
