//! Core domain types.
//!
//! These types describe portfolio content independently of any storage or
//! presentation layer.

mod project;
mod slide;

pub use project::{
    Category, NewCategory, NewProject, Project, ProjectDetails, ProjectValidationError,
    join_image_list, parse_image_list, slugify,
};
pub use slide::{
    CategoryFilter, ProjectId, SlideCollection, SlideDraft, SlideRecord, SlideValidationError,
    UNCATEGORIZED_TAG, VideoDescriptor, VideoKind,
};
