/// Counts words as non-empty tokens between runs of whitespace. Computed once
/// at note creation and stored with the note.
pub fn word_count(text: &str) -> i64 {
	text.split_whitespace().count() as i64
}
