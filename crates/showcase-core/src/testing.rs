//! In-memory doubles for tests in this crate and in adapters.
//!
//! Enabled for unit tests and behind the `test-utils` feature.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    Category, CategoryFilter, NewCategory, NewProject, Project, ProjectDetails, ProjectId,
    SlideCollection, SlideRecord, UNCATEGORIZED_TAG,
};
use crate::events::CarouselEvent;
use crate::ports::{
    CarouselEventEmitter, CategoryRepository, ContentError, ContentServicePort, ProjectRepository,
    RepositoryError,
};

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Let spawned tasks run after a time jump.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// A minimal valid slide with id `id`.
pub fn slide(id: i64) -> SlideRecord {
    SlideRecord {
        id: ProjectId(id),
        title: format!("Project {id}"),
        thumbnail_url: format!("https://cdn.example.com/{id}.jpg"),
        video: None,
        category_tag: UNCATEGORIZED_TAG.to_string(),
    }
}

/// `count` slides with ids `1..=count`.
pub fn slides(count: i64) -> SlideCollection {
    let (collection, _) = SlideCollection::from_records((1..=count).map(slide));
    collection
}

/// Details for project `id` with `images` gallery entries.
pub fn details(id: i64, images: usize) -> ProjectDetails {
    ProjectDetails {
        id: ProjectId(id),
        title: format!("Project {id}"),
        description_html: "<p>Case study</p>".to_string(),
        category_name: None,
        project_link: Some(format!("https://example.com/{id}")),
        images: (0..images)
            .map(|i| format!("https://cdn.example.com/{id}-{i}.jpg"))
            .collect(),
    }
}

/// A valid project submission titled `title`.
pub fn new_project(title: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: "<p>Case study</p>".to_string(),
        images: vec!["https://cdn.example.com/cover.jpg".to_string()],
        video_url: None,
        project_link: "https://example.com".to_string(),
        category_id: None,
    }
}

/// Emitter that records every event in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingEmitter {
    events: Arc<Mutex<Vec<CarouselEvent>>>,
}

impl RecordingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CarouselEvent> {
        guard(&self.events).clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        guard(&self.events)
            .iter()
            .map(CarouselEvent::event_name)
            .collect()
    }

    pub fn clear(&self) {
        guard(&self.events).clear();
    }
}

impl CarouselEventEmitter for RecordingEmitter {
    fn emit(&self, event: CarouselEvent) {
        guard(&self.events).push(event);
    }

    fn clone_box(&self) -> Box<dyn CarouselEventEmitter> {
        Box::new(self.clone())
    }
}

/// Content service over a fixed collection.
#[derive(Debug, Clone, Default)]
pub struct StaticContentService {
    slides: SlideCollection,
    details: HashMap<ProjectId, ProjectDetails>,
    latency: Option<Duration>,
    failure: Option<ContentError>,
}

impl StaticContentService {
    pub fn new(slides: SlideCollection) -> Self {
        Self {
            slides,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: ProjectDetails) -> Self {
        self.details.insert(details.id, details);
        self
    }

    /// Delay every details response.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Fail every details request with `error`.
    #[must_use]
    pub fn failing_with(mut self, error: ContentError) -> Self {
        self.failure = Some(error);
        self
    }
}

#[async_trait]
impl ContentServicePort for StaticContentService {
    async fn list_slides(&self, filter: &CategoryFilter) -> Result<SlideCollection, ContentError> {
        Ok(self.slides.filtered(filter))
    }

    async fn get_project_details(&self, id: ProjectId) -> Result<ProjectDetails, ContentError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if let Some(ref error) = self.failure {
            return Err(error.clone());
        }
        self.details
            .get(&id)
            .cloned()
            .ok_or(ContentError::NotFound(id))
    }
}

/// Project repository backed by a vector.
#[derive(Debug, Default)]
pub struct MemoryProjectRepository {
    projects: Mutex<Vec<Project>>,
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        let mut projects = guard(&self.projects).clone();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(projects)
    }

    async fn get(&self, id: ProjectId) -> Result<Project, RepositoryError> {
        guard(&self.projects)
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("project {id}")))
    }

    async fn insert(&self, project: &NewProject) -> Result<Project, RepositoryError> {
        let mut projects = guard(&self.projects);
        let id = projects.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let created = Project {
            id: ProjectId(id),
            title: project.title.clone(),
            description: project.description.clone(),
            images: project.images.clone(),
            video_url: project.video_url.clone(),
            project_link: project.project_link.clone(),
            category_id: project.category_id,
            created_at: Utc::now(),
        };
        projects.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: ProjectId, project: &NewProject) -> Result<Project, RepositoryError> {
        let mut projects = guard(&self.projects);
        let existing = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("project {id}")))?;
        existing.title.clone_from(&project.title);
        existing.description.clone_from(&project.description);
        existing.images.clone_from(&project.images);
        existing.video_url.clone_from(&project.video_url);
        existing.project_link.clone_from(&project.project_link);
        existing.category_id = project.category_id;
        Ok(existing.clone())
    }

    async fn delete(&self, id: ProjectId) -> Result<(), RepositoryError> {
        let mut projects = guard(&self.projects);
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(RepositoryError::NotFound(format!("project {id}")));
        }
        Ok(())
    }
}

/// Category repository backed by a vector.
///
/// Deleting a category does not touch projects here; the SQLite adapter
/// uncategorizes them.
#[derive(Debug, Default)]
pub struct MemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut categories = guard(&self.categories).clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn get(&self, id: i64) -> Result<Category, RepositoryError> {
        guard(&self.categories)
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("category {id}")))
    }

    async fn insert(&self, category: &NewCategory) -> Result<Category, RepositoryError> {
        let mut categories = guard(&self.categories);
        if categories.iter().any(|c| c.slug == category.slug) {
            return Err(RepositoryError::AlreadyExists(category.slug.clone()));
        }
        let id = categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let created = Category {
            id,
            name: category.name.clone(),
            slug: category.slug.clone(),
            created_at: Utc::now(),
        };
        categories.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, category: &NewCategory) -> Result<Category, RepositoryError> {
        let mut categories = guard(&self.categories);
        if categories
            .iter()
            .any(|c| c.slug == category.slug && c.id != id)
        {
            return Err(RepositoryError::AlreadyExists(category.slug.clone()));
        }
        let existing = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("category {id}")))?;
        existing.name.clone_from(&category.name);
        existing.slug.clone_from(&category.slug);
        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut categories = guard(&self.categories);
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(RepositoryError::NotFound(format!("category {id}")));
        }
        Ok(())
    }
}
