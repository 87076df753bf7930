use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{
	Result,
	models::{Topic, TopicWordCounts},
};

/// Create-if-absent on `(user_id, label)`. The no-op conflict update makes
/// `RETURNING` yield the surviving row on both paths, so concurrent inserts
/// of the same label resolve at the store without an in-process lock.
pub async fn upsert_topic<'e, E>(executor: E, topic: &Topic) -> Result<Topic>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, Topic>(
		"\
INSERT INTO topics (
\ttopic_id,
\tuser_id,
\tlabel,
\tcreated_at
)
VALUES ($1,$2,$3,$4)
ON CONFLICT (user_id, label) DO UPDATE SET label = EXCLUDED.label
RETURNING topic_id, user_id, label, created_at",
	)
	.bind(topic.topic_id)
	.bind(topic.user_id)
	.bind(topic.label.as_str())
	.bind(topic.created_at)
	.fetch_one(executor)
	.await?;

	Ok(row)
}

/// All topics for one user with the word counts of their notes, in stable
/// chronological order. Counts come from the live note set; nothing here
/// reads a stored counter.
pub async fn topics_with_word_counts<'e, E>(
	executor: E,
	user_id: Uuid,
) -> Result<Vec<TopicWordCounts>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, TopicWordCounts>(
		"\
SELECT
\tt.topic_id,
\tt.label,
\tt.created_at,
\tCOALESCE(
\t\tarray_agg(n.words_count ORDER BY n.created_at) FILTER (WHERE n.note_id IS NOT NULL),
\t\t'{}'
\t) AS word_counts
FROM topics t
LEFT JOIN notes n ON n.topic_id = t.topic_id
WHERE t.user_id = $1
GROUP BY t.topic_id, t.label, t.created_at
ORDER BY t.created_at, t.topic_id",
	)
	.bind(user_id)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}
