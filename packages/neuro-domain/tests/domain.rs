use neuro_config::Map;
use neuro_domain::{activity, words};

fn default_map() -> Map {
	Map::default()
}

#[test]
fn word_count_ignores_whitespace_runs() {
	assert_eq!(words::word_count(""), 0);
	assert_eq!(words::word_count("  "), 0);
	assert_eq!(words::word_count("a b  c"), 3);
	assert_eq!(words::word_count("single"), 1);
	assert_eq!(words::word_count("\tline one\n line two "), 4);
}

#[test]
fn score_combines_count_and_volume() {
	let map = default_map();
	let activity = activity::compute_activity(&[10, 20, 70], &map);

	assert_eq!(activity.notes_count, 3);
	assert_eq!(activity.words_sum, 100);
	assert_eq!(activity.score, 5);
}

#[test]
fn empty_note_set_yields_zero_activity() {
	let map = default_map();
	let activity = activity::compute_activity(&[], &map);

	assert_eq!(activity.notes_count, 0);
	assert_eq!(activity.words_sum, 0);
	assert_eq!(activity.score, 0);
}

#[test]
fn score_floors_partial_points() {
	let map = default_map();

	assert_eq!(activity::compute_activity(&[49], &map).score, 1);
	assert_eq!(activity::compute_activity(&[50], &map).score, 2);
	assert_eq!(activity::compute_activity(&[99], &map).score, 2);
}

#[test]
fn score_is_monotone_in_count_and_volume() {
	let map = default_map();
	let base = activity::compute_activity(&[30, 30], &map);
	let more_notes = activity::compute_activity(&[30, 30, 30], &map);
	let more_words = activity::compute_activity(&[30, 90], &map);

	assert!(more_notes.score >= base.score);
	assert!(more_words.score >= base.score);
}

#[test]
fn radius_grows_linearly_from_the_floor() {
	let map = default_map();

	assert_eq!(activity::project_radius(0, &map), 12);
	assert_eq!(activity::project_radius(5, &map), 22);
	assert_eq!(activity::project_radius(23, &map), 58);
}

#[test]
fn radius_saturates_at_the_ceiling() {
	let map = default_map();

	assert_eq!(activity::project_radius(24, &map), 60);
	assert_eq!(activity::project_radius(30, &map), 60);
	assert_eq!(activity::project_radius(i64::MAX, &map), 60);
}

#[test]
fn radius_is_non_decreasing() {
	let map = default_map();
	let mut previous = 0;

	for score in 0..64 {
		let radius = activity::project_radius(score, &map);

		assert!(radius >= previous);

		previous = radius;
	}
}

#[test]
fn tuning_is_honored_not_hard_coded() {
	let map = Map { words_per_point: 10, radius_min: 5, radius_max: 25, radius_scale: 4 };
	let activity_value = activity::compute_activity(&[15, 25], &map);

	assert_eq!(activity_value.score, 6);
	assert_eq!(activity::project_radius(activity_value.score, &map), 25);
	assert_eq!(activity::project_radius(1, &map), 9);
}

#[test]
fn negative_stored_counts_are_treated_as_zero() {
	let map = default_map();
	let activity_value = activity::compute_activity(&[-5, 60], &map);

	assert_eq!(activity_value.notes_count, 2);
	assert_eq!(activity_value.words_sum, 60);
	assert_eq!(activity_value.score, 3);
}
