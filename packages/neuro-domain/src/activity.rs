use neuro_config::Map;

/// Per-topic engagement, recomputed from the live note set on every request.
/// Never persisted; stored counters would drift from the source of truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopicActivity {
	pub notes_count: i64,
	pub words_sum: i64,
	pub score: i64,
}

/// Folds the word counts of a topic's notes into an activity score. A topic
/// with many short notes scores comparably to one with fewer long notes:
/// each note is worth one point, plus one point per `words_per_point` words
/// of total volume. An empty note set yields all zeros.
pub fn compute_activity(word_counts: &[i64], map: &Map) -> TopicActivity {
	let notes_count = word_counts.len() as i64;
	let words_sum = word_counts.iter().map(|count| (*count).max(0)).sum::<i64>();
	let score = notes_count + words_sum / map.words_per_point;

	TopicActivity { notes_count, words_sum, score }
}

/// Maps a score onto a rendering radius: linear growth with a floor so every
/// topic stays visible and a ceiling so no topic dominates the canvas.
/// Deterministic; layout positions are the renderer's concern.
pub fn project_radius(score: i64, map: &Map) -> i64 {
	let raw = map.radius_min.saturating_add(score.saturating_mul(map.radius_scale));

	raw.clamp(map.radius_min, map.radius_max)
}
