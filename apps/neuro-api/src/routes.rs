use axum::{
	Json, Router,
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;
use uuid::Uuid;

use neuro_service::{
	CreateNoteRequest, CreateNoteResponse, CreateUserRequest, CreateUserResponse, Error, MapResponse,
	NoteBody,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/users", post(create_user))
		.route("/v1/notes", post(create_note))
		.route("/v1/users/{user_id}/notes/{note_id}", get(fetch_note))
		.route("/v1/map/{user_id}", get(map))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn create_user(
	State(state): State<AppState>,
	Json(payload): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, ApiError> {
	let response = state.service.create_user(payload).await?;

	Ok(Json(response))
}

async fn create_note(
	State(state): State<AppState>,
	Json(payload): Json<CreateNoteRequest>,
) -> Result<Json<CreateNoteResponse>, ApiError> {
	let response = state.service.record_note(payload).await?;

	Ok(Json(response))
}

async fn fetch_note(
	State(state): State<AppState>,
	Path((user_id, note_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<NoteBody>, ApiError> {
	let response = state.service.fetch_note(user_id, note_id).await?;

	Ok(Json(response))
}

async fn map(
	State(state): State<AppState>,
	Path(user_id): Path<Uuid>,
) -> Result<Json<MapResponse>, ApiError> {
	let response = state.service.map(user_id).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		match err {
			Error::Validation { message, fields } => Self {
				status: StatusCode::UNPROCESSABLE_ENTITY,
				error_code: "validation_failed".to_string(),
				message,
				fields: Some(fields),
			},
			Error::NotFound { message } => Self {
				status: StatusCode::NOT_FOUND,
				error_code: "not_found".to_string(),
				message,
				fields: None,
			},
			Error::Storage { message } => {
				tracing::error!(%message, "Storage failure while handling a request.");

				Self {
					status: StatusCode::INTERNAL_SERVER_ERROR,
					error_code: "storage_error".to_string(),
					message: "Storage failure.".to_string(),
					fields: None,
				}
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody {
			error_code: self.error_code,
			message: self.message,
			fields: self.fields,
		};

		(self.status, Json(body)).into_response()
	}
}
