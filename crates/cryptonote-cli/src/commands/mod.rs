pub mod misc;
pub mod notes;
