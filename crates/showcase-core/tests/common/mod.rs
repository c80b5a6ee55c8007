//! Shared fixtures for showcase-core integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use showcase_core::{
    CarouselEvent, CarouselEventEmitter, CategoryFilter, ContentError, ContentServicePort,
    ProjectDetails, ProjectId, SlideCollection, SlideRecord,
};

/// Records every emitted event.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<CarouselEvent>>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<CarouselEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.events()
            .iter()
            .filter(|e| e.event_name() == name)
            .count()
    }
}

impl CarouselEventEmitter for Recorder {
    fn emit(&self, event: CarouselEvent) {
        self.events.lock().unwrap().push(event);
    }

    fn clone_box(&self) -> Box<dyn CarouselEventEmitter> {
        Box::new(self.clone())
    }
}

/// Content service over fixed slides with optional per-request latency.
pub struct FixtureContent {
    pub slides: SlideCollection,
    pub details: HashMap<ProjectId, ProjectDetails>,
    pub latency: Duration,
}

#[async_trait]
impl ContentServicePort for FixtureContent {
    async fn list_slides(&self, filter: &CategoryFilter) -> Result<SlideCollection, ContentError> {
        Ok(self.slides.filtered(filter))
    }

    async fn get_project_details(&self, id: ProjectId) -> Result<ProjectDetails, ContentError> {
        tokio::time::sleep(self.latency).await;
        self.details.get(&id).cloned().ok_or(ContentError::NotFound(id))
    }
}

pub fn slide(id: i64, category: &str) -> SlideRecord {
    SlideRecord {
        id: ProjectId(id),
        title: format!("Project {id}"),
        thumbnail_url: format!("https://cdn.example.com/{id}.jpg"),
        video: None,
        category_tag: category.to_string(),
    }
}

pub fn portfolio() -> FixtureContent {
    let records = vec![
        slide(1, "web"),
        slide(2, "mobile"),
        slide(3, "web"),
        slide(4, "branding"),
    ];
    let details = records
        .iter()
        .map(|s| {
            (
                s.id,
                ProjectDetails {
                    id: s.id,
                    title: s.title.clone(),
                    description_html: "<p>Case study</p>".to_string(),
                    category_name: Some(s.category_tag.clone()),
                    project_link: None,
                    images: vec![s.thumbnail_url.clone(), s.thumbnail_url.clone()],
                },
            )
        })
        .collect();
    let (slides, rejected) = SlideCollection::from_records(records);
    assert!(rejected.is_empty());
    FixtureContent {
        slides,
        details,
        latency: Duration::from_millis(100),
    }
}

/// Let spawned tasks run after a time jump.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

pub async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    settle().await;
}
