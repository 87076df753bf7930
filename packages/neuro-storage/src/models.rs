use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct User {
	pub user_id: Uuid,
	pub display_name: String,
	pub created_at: OffsetDateTime,
}

#[derive(Debug, sqlx::FromRow)]
pub struct Topic {
	pub topic_id: Uuid,
	pub user_id: Uuid,
	pub label: String,
	pub created_at: OffsetDateTime,
}

#[derive(Debug, sqlx::FromRow)]
pub struct Note {
	pub note_id: Uuid,
	pub user_id: Uuid,
	pub topic_id: Uuid,
	pub title: Option<String>,
	pub content: String,
	pub words_count: i64,
	pub created_at: OffsetDateTime,
}

/// One row per topic with the word counts of every note currently
/// referencing it, as loaded by the map aggregation query.
#[derive(Debug, sqlx::FromRow)]
pub struct TopicWordCounts {
	pub topic_id: Uuid,
	pub label: String,
	pub created_at: OffsetDateTime,
	pub word_counts: Vec<i64>,
}
