//! `ShowcaseCore` - the application facade.
//!
//! Composition root for core services. Adapters (CLI, hosts embedding the
//! carousel) receive a `ShowcaseCore` and reach everything through it.

use std::sync::Arc;

use super::{CategoryService, ProjectService};
use crate::ports::{ContentServicePort, Repos};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = showcase_db::build_repos(&pool);
/// let core = ShowcaseCore::new(repos);
///
/// let projects = core.projects().list().await?;
/// ```
pub struct ShowcaseCore {
    projects: ProjectService,
    categories: CategoryService,
    content: Arc<dyn ContentServicePort>,
}

impl ShowcaseCore {
    pub fn new(repos: Repos) -> Self {
        Self {
            projects: ProjectService::new(repos.projects, Arc::clone(&repos.categories)),
            categories: CategoryService::new(repos.categories),
            content: repos.content,
        }
    }

    /// Access the project service.
    pub const fn projects(&self) -> &ProjectService {
        &self.projects
    }

    /// Access the category service.
    pub const fn categories(&self) -> &CategoryService {
        &self.categories
    }

    /// The read side handed to a mounted showcase.
    pub fn content(&self) -> Arc<dyn ContentServicePort> {
        Arc::clone(&self.content)
    }
}
