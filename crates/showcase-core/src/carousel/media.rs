//! Embedded video playback bookkeeping.
//!
//! The host owns the actual player element; this type decides which slide
//! is allowed to play and guarantees at most one plays at a time.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::position::Position;
use crate::domain::{ProjectId, SlideRecord, VideoKind};

/// The slide currently playing and the source loaded into its player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub project_id: ProjectId,
    pub kind: VideoKind,
    pub source: String,
}

/// Result of a play request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Playback started; any previous playback was stopped first.
    Started(NowPlaying),
    /// The slide is not the active one.
    NotActive,
    /// The slide has no playable video.
    NoVideo,
}

impl PlayOutcome {
    pub const fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }
}

/// Tracks the single playing slide.
#[derive(Debug, Default)]
pub struct MediaPlayer {
    now_playing: Option<NowPlaying>,
}

impl MediaPlayer {
    pub const fn new() -> Self {
        Self { now_playing: None }
    }

    /// Start playback for `slide` if it is the active slide and has a video.
    pub fn play(&mut self, slide: &SlideRecord, position: Position) -> PlayOutcome {
        if position != Position::Active {
            debug!(project_id = %slide.id, %position, "Ignoring play on inactive slide");
            return PlayOutcome::NotActive;
        }
        let Some(video) = slide.video.as_ref().filter(|v| v.is_playable()) else {
            return PlayOutcome::NoVideo;
        };

        self.stop_all();
        let playing = NowPlaying {
            project_id: slide.id,
            kind: video.kind,
            source: video.playable_url.clone(),
        };
        debug!(project_id = %slide.id, kind = %video.kind, "Starting playback");
        self.now_playing = Some(playing.clone());
        PlayOutcome::Started(playing)
    }

    /// Clear the player source and the playing flag. Safe when idle.
    pub fn stop_all(&mut self) -> Option<NowPlaying> {
        let stopped = self.now_playing.take();
        if let Some(ref playing) = stopped {
            debug!(project_id = %playing.project_id, "Stopped playback");
        }
        stopped
    }

    pub const fn now_playing(&self) -> Option<&NowPlaying> {
        self.now_playing.as_ref()
    }

    pub const fn any_playing(&self) -> bool {
        self.now_playing.is_some()
    }

    pub fn is_playing(&self, id: ProjectId) -> bool {
        self.now_playing
            .as_ref()
            .is_some_and(|playing| playing.project_id == id)
    }
}
