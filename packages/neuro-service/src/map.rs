use serde::{Deserialize, Serialize};
use uuid::Uuid;

use neuro_domain::activity;
use neuro_storage::{topics, users};

use crate::{Error, NoteService, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapNode {
	pub id: Uuid,
	pub label: String,
	pub score: i64,
	pub radius: i64,
}

/// Topic-to-topic relationships are not computed anywhere yet; the edge list
/// is part of the wire shape so the renderer does not special-case it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapEdge {
	pub source: Uuid,
	pub target: Uuid,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapResponse {
	pub nodes: Vec<MapNode>,
	pub edges: Vec<MapEdge>,
}

impl NoteService {
	/// Builds the knowledge map for one user: every topic becomes a node
	/// sized by its activity, in the chronological order the store returns.
	/// Computed fresh per request from the live note set.
	pub async fn map(&self, user_id: Uuid) -> Result<MapResponse> {
		users::get_user(&self.db.pool, user_id)
			.await?
			.ok_or_else(|| Error::NotFound { message: format!("User {user_id}.") })?;

		let rows = topics::topics_with_word_counts(&self.db.pool, user_id).await?;
		let nodes = rows
			.into_iter()
			.map(|row| {
				let topic_activity = activity::compute_activity(&row.word_counts, &self.cfg.map);
				let radius = activity::project_radius(topic_activity.score, &self.cfg.map);

				MapNode { id: row.topic_id, label: row.label, score: topic_activity.score, radius }
			})
			.collect();

		Ok(MapResponse { nodes, edges: Vec::new() })
	}
}
