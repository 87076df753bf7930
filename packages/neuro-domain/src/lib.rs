pub mod activity;
pub mod words;

pub use activity::{TopicActivity, compute_activity, project_radius};
pub use words::word_count;
