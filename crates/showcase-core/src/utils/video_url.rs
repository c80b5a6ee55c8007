//! Video URL resolution.
//!
//! Turns the free-form video URL stored with a project into a
//! [`VideoDescriptor`] the carousel can play without further parsing.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::domain::{VideoDescriptor, VideoKind};

/// File extensions served directly through a `<video>` element.
pub const VIDEO_FILE_EXTENSIONS: &[&str] = &[".mp4", ".webm", ".ogg", ".mov", ".m4v"];

const YOUTUBE_ID_LEN: usize = 11;

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("youtube pattern is valid")
});

static VIMEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"vimeo\.com/(?:video/)?(\d+)").expect("vimeo pattern is valid"));

/// Extract the 11-character video id from a YouTube link.
///
/// Understands `watch?v=`, `&v=`, `youtu.be/`, `embed/` and `v/` forms.
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
        .filter(|id| id.len() == YOUTUBE_ID_LEN)
}

/// Extract the numeric id from a Vimeo link.
pub fn extract_vimeo_id(url: &str) -> Option<&str> {
    VIMEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn is_youtube(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

fn has_video_extension(url: &str) -> bool {
    // Ignore query strings and fragments so `clip.mp4?v=2` still counts.
    let path = Url::parse(url).map_or_else(
        |_| url.split(['?', '#']).next().unwrap_or(url).to_string(),
        |parsed| parsed.path().to_string(),
    );
    let path = path.to_ascii_lowercase();
    VIDEO_FILE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

fn is_http_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https"))
}

/// Resolve a stored video URL into a playable descriptor.
///
/// Malformed YouTube or Vimeo links resolve to [`VideoKind::None`] rather
/// than an error, so the slide simply has no play button.
pub fn resolve_video(raw: &str) -> VideoDescriptor {
    let url = raw.trim();
    if url.is_empty() {
        return VideoDescriptor::none();
    }

    if is_youtube(url) {
        return extract_youtube_id(url).map_or_else(VideoDescriptor::none, |id| VideoDescriptor {
            kind: VideoKind::Youtube,
            playable_url: format!("https://www.youtube.com/embed/{id}?autoplay=1&rel=0"),
        });
    }

    if url.contains("vimeo.com") {
        return extract_vimeo_id(url).map_or_else(VideoDescriptor::none, |id| VideoDescriptor {
            kind: VideoKind::Vimeo,
            playable_url: format!("https://player.vimeo.com/video/{id}?autoplay=1"),
        });
    }

    if has_video_extension(url) {
        return VideoDescriptor {
            kind: VideoKind::File,
            playable_url: url.to_string(),
        };
    }

    if is_http_url(url) {
        return VideoDescriptor {
            kind: VideoKind::Embed,
            playable_url: url.to_string(),
        };
    }

    VideoDescriptor::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_forms() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ?start=3",
        ] {
            let video = resolve_video(url);
            assert_eq!(video.kind, VideoKind::Youtube, "{url}");
            assert_eq!(
                video.playable_url,
                "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&rel=0"
            );
        }
    }

    #[test]
    fn test_malformed_youtube_has_no_affordance() {
        let video = resolve_video("https://www.youtube.com/watch?v=short");
        assert_eq!(video.kind, VideoKind::None);
        assert!(!video.is_playable());
    }

    #[test]
    fn test_vimeo() {
        let video = resolve_video("https://vimeo.com/76979871");
        assert_eq!(video.kind, VideoKind::Vimeo);
        assert_eq!(
            video.playable_url,
            "https://player.vimeo.com/video/76979871?autoplay=1"
        );

        let video = resolve_video("https://vimeo.com/video/123");
        assert_eq!(extract_vimeo_id("https://vimeo.com/video/123"), Some("123"));
        assert_eq!(video.kind, VideoKind::Vimeo);

        assert_eq!(resolve_video("https://vimeo.com/channels/staff").kind, VideoKind::None);
    }

    #[test]
    fn test_file_and_embed() {
        let video = resolve_video("https://example.com/uploads/reel.MP4?ver=2");
        assert_eq!(video.kind, VideoKind::File);
        assert_eq!(video.playable_url, "https://example.com/uploads/reel.MP4?ver=2");

        assert_eq!(resolve_video("/wp-content/uploads/demo.webm").kind, VideoKind::File);

        let video = resolve_video("https://player.example.com/v/42");
        assert_eq!(video.kind, VideoKind::Embed);
    }

    #[test]
    fn test_empty_and_garbage() {
        assert_eq!(resolve_video("   ").kind, VideoKind::None);
        assert_eq!(resolve_video("not a url").kind, VideoKind::None);
    }
}
