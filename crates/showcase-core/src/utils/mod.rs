//! Shared utilities.

pub mod video_url;

pub use video_url::{extract_vimeo_id, extract_youtube_id, resolve_video};
