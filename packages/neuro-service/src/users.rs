use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use neuro_storage::{models::User, users};

use crate::{Error, NoteService, Result, is_blank};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
	pub display_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
	pub user_id: Uuid,
	pub display_name: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
}

impl NoteService {
	pub async fn create_user(&self, req: CreateUserRequest) -> Result<CreateUserResponse> {
		if is_blank(&req.display_name) {
			return Err(Error::Validation {
				message: "display_name must be non-empty.".to_string(),
				fields: vec!["$.display_name".to_string()],
			});
		}

		let user = User {
			user_id: Uuid::new_v4(),
			display_name: req.display_name.trim().to_string(),
			created_at: OffsetDateTime::now_utc(),
		};

		users::insert_user(&self.db.pool, &user).await?;

		tracing::info!(user_id = %user.user_id, "Created user.");

		Ok(CreateUserResponse {
			user_id: user.user_id,
			display_name: user.display_name,
			created_at: user.created_at,
		})
	}
}
