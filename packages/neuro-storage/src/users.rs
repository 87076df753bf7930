use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{Result, models::User};

pub async fn insert_user<'e, E>(executor: E, user: &User) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query(
		"\
INSERT INTO users (
\tuser_id,
\tdisplay_name,
\tcreated_at
)
VALUES ($1,$2,$3)",
	)
	.bind(user.user_id)
	.bind(user.display_name.as_str())
	.bind(user.created_at)
	.execute(executor)
	.await?;

	Ok(())
}

pub async fn get_user<'e, E>(executor: E, user_id: Uuid) -> Result<Option<User>>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, User>(
		"\
SELECT
\tuser_id,
\tdisplay_name,
\tcreated_at
FROM users
WHERE user_id = $1
LIMIT 1",
	)
	.bind(user_id)
	.fetch_optional(executor)
	.await?;

	Ok(row)
}
