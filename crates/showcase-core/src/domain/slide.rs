//! Slide domain types.
//!
//! A slide is one portfolio project as the carousel sees it: an id, a title,
//! a thumbnail and an optional pre-resolved video. Slides are grouped into an
//! ordered, immutable [`SlideCollection`] for each render cycle.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category tag assigned to slides whose project has no category.
pub const UNCATEGORIZED_TAG: &str = "uncategorized";

/// Opaque, stable identifier of a portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub i64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProjectId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// How a slide's video is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VideoKind {
    Youtube,
    Vimeo,
    File,
    Embed,
    #[default]
    None,
}

impl VideoKind {
    /// Stable lowercase name, matching the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Vimeo => "vimeo",
            Self::File => "file",
            Self::Embed => "embed",
            Self::None => "none",
        }
    }
}

impl fmt::Display for VideoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A video reference that has already been resolved to something playable.
///
/// Produced by [`crate::utils::resolve_video`]. A descriptor of kind
/// [`VideoKind::None`] carries no play affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDescriptor {
    pub kind: VideoKind,
    pub playable_url: String,
}

impl VideoDescriptor {
    /// A descriptor with no play affordance.
    pub const fn none() -> Self {
        Self {
            kind: VideoKind::None,
            playable_url: String::new(),
        }
    }

    pub fn is_playable(&self) -> bool {
        self.kind != VideoKind::None && !self.playable_url.is_empty()
    }
}

/// One portfolio project as displayed in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    pub id: ProjectId,
    pub title: String,
    /// First image of the project. Never empty for a valid record.
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoDescriptor>,
    pub category_tag: String,
}

impl SlideRecord {
    /// Whether the slide offers a play button.
    pub fn has_video(&self) -> bool {
        self.video.as_ref().is_some_and(VideoDescriptor::is_playable)
    }

    /// Check the fields a slide cannot be drawn without.
    pub fn validate(&self) -> Result<(), SlideValidationError> {
        if self.title.trim().is_empty() {
            return Err(SlideValidationError::MissingTitle(self.id));
        }
        if self.thumbnail_url.trim().is_empty() {
            return Err(SlideValidationError::MissingThumbnail(self.id));
        }
        Ok(())
    }
}

/// A slide as supplied by the content collaborator, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlideDraft {
    pub id: Option<ProjectId>,
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video: Option<VideoDescriptor>,
    pub category_tag: Option<String>,
}

/// A slide draft that cannot be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlideValidationError {
    #[error("Slide is missing an id")]
    MissingId,

    #[error("Slide {0} is missing a title")]
    MissingTitle(ProjectId),

    #[error("Slide {0} is missing a thumbnail")]
    MissingThumbnail(ProjectId),

    #[error("Slide {0} appears more than once")]
    DuplicateId(ProjectId),
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<SlideDraft> for SlideRecord {
    type Error = SlideValidationError;

    fn try_from(draft: SlideDraft) -> Result<Self, Self::Error> {
        let id = draft.id.ok_or(SlideValidationError::MissingId)?;
        let title = non_blank(draft.title).ok_or(SlideValidationError::MissingTitle(id))?;
        let thumbnail_url =
            non_blank(draft.thumbnail_url).ok_or(SlideValidationError::MissingThumbnail(id))?;
        let category_tag =
            non_blank(draft.category_tag).unwrap_or_else(|| UNCATEGORIZED_TAG.to_string());

        Ok(Self {
            id,
            title,
            thumbnail_url,
            video: draft.video.filter(VideoDescriptor::is_playable),
            category_tag,
        })
    }
}

/// Which slides are visible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "tag")]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    /// Parse a filter value as used by filter buttons (`"all"` or a tag).
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }

    pub fn matches(&self, slide: &SlideRecord) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => slide.category_tag == *tag,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

/// Ordered sequence of slides for one render cycle.
///
/// Insertion order is display order. The collection is immutable; filtering
/// produces a new collection that preserves relative order. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideCollection {
    slides: Arc<[SlideRecord]>,
}

impl SlideCollection {
    /// An empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a collection from records.
    ///
    /// Records with a blank title or thumbnail, and records repeating an
    /// earlier id, are dropped and reported.
    pub fn from_records(
        records: impl IntoIterator<Item = SlideRecord>,
    ) -> (Self, Vec<SlideValidationError>) {
        let mut seen = HashSet::new();
        let mut errors = Vec::new();
        let slides: Vec<SlideRecord> = records
            .into_iter()
            .filter(|record| {
                if let Err(e) = record.validate() {
                    errors.push(e);
                    false
                } else if seen.insert(record.id) {
                    true
                } else {
                    errors.push(SlideValidationError::DuplicateId(record.id));
                    false
                }
            })
            .collect();

        (
            Self {
                slides: slides.into(),
            },
            errors,
        )
    }

    /// Build a collection from raw drafts, skipping malformed ones.
    ///
    /// A malformed draft never fails the whole collection; the skipped
    /// drafts are returned so the caller can report them.
    pub fn from_drafts(
        drafts: impl IntoIterator<Item = SlideDraft>,
    ) -> (Self, Vec<SlideValidationError>) {
        let mut errors = Vec::new();
        let records: Vec<SlideRecord> = drafts
            .into_iter()
            .filter_map(|draft| match SlideRecord::try_from(draft) {
                Ok(record) => Some(record),
                Err(e) => {
                    errors.push(e);
                    None
                }
            })
            .collect();

        let (collection, duplicates) = Self::from_records(records);
        errors.extend(duplicates);
        (collection, errors)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SlideRecord> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SlideRecord> {
        self.slides.iter()
    }

    pub fn as_slice(&self) -> &[SlideRecord] {
        &self.slides
    }

    /// Position of a slide within this collection.
    pub fn index_of(&self, id: ProjectId) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == id)
    }

    /// The visible subsequence for a filter.
    pub fn filtered(&self, filter: &CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => self.clone(),
            CategoryFilter::Tag(_) => Self {
                slides: self
                    .slides
                    .iter()
                    .filter(|slide| filter.matches(slide))
                    .cloned()
                    .collect(),
            },
        }
    }

    /// Distinct category tags in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.slides
            .iter()
            .map(|slide| slide.category_tag.as_str())
            .filter(|tag| seen.insert(*tag))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SlideCollection {
    type Item = &'a SlideRecord;
    type IntoIter = std::slice::Iter<'a, SlideRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
