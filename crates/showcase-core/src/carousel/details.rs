//! Project details modal: fetching, single-flight and the image carousel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};

use super::controller::CarouselController;
use crate::domain::{ProjectDetails, ProjectId};
use crate::events::CarouselEvent;
use crate::ports::{ContentError, ContentServicePort};

/// Position within a project's image gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageCarousel {
    count: usize,
    current: usize,
}

impl ImageCarousel {
    pub const fn new(count: usize) -> Self {
        Self { count, current: 0 }
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    pub const fn current(&self) -> usize {
        self.current
    }

    /// Whether navigation controls should be shown.
    pub const fn has_navigation(&self) -> bool {
        self.count > 1
    }

    pub const fn next(&mut self) -> usize {
        if self.count > 1 {
            self.current = (self.current + 1) % self.count;
        }
        self.current
    }

    pub const fn prev(&mut self) -> usize {
        if self.count > 1 {
            self.current = (self.current + self.count - 1) % self.count;
        }
        self.current
    }

    pub const fn go_to(&mut self, index: usize) -> usize {
        if index < self.count {
            self.current = index;
        }
        self.current
    }
}

/// What the modal currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Loading {
        project_id: ProjectId,
        request: u64,
    },
    Loaded {
        request: u64,
        details: ProjectDetails,
        images: ImageCarousel,
    },
    Failed {
        project_id: ProjectId,
        request: u64,
        message: String,
    },
}

impl ModalState {
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    const fn request(&self) -> Option<u64> {
        match self {
            Self::Closed => None,
            Self::Loading { request, .. }
            | Self::Loaded { request, .. }
            | Self::Failed { request, .. } => Some(*request),
        }
    }
}

/// Result of one [`DetailsLoader::open`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsOutcome {
    Loaded(ProjectDetails),
    /// The project does not exist; the modal shows "Project not found".
    NotFound,
    /// Fetch failed or timed out; the modal shows `message`.
    Failed(String),
    /// A newer request or a close made this response irrelevant.
    Superseded,
}

struct LoaderInner {
    content: Arc<dyn ContentServicePort>,
    controller: CarouselController,
    timeout: Duration,
    sequence: AtomicU64,
    modal: Mutex<ModalState>,
}

/// Loads project details into the modal.
///
/// Clones share the same modal. Opening a second project while the first
/// is loading supersedes it; only the latest response is applied.
#[derive(Clone)]
pub struct DetailsLoader {
    inner: Arc<LoaderInner>,
}

impl DetailsLoader {
    pub fn new(
        content: Arc<dyn ContentServicePort>,
        controller: CarouselController,
        timeout: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(LoaderInner {
                content,
                controller,
                timeout,
                sequence: AtomicU64::new(0),
                modal: Mutex::new(ModalState::Closed),
            }),
        }
    }

    fn modal(&self) -> MutexGuard<'_, ModalState> {
        self.inner
            .modal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> ModalState {
        self.modal().clone()
    }

    pub fn is_open(&self) -> bool {
        self.modal().is_open()
    }

    /// Open the modal for `project_id` and fetch its details.
    ///
    /// Autoplay and media are paused for as long as the modal stays open.
    /// Failures are reported through the outcome and a `DetailsFailed`
    /// event, never as an error.
    pub async fn open(&self, project_id: ProjectId) -> DetailsOutcome {
        // Numbering and publishing happen under one lock so the newest
        // request is always the one left in the modal.
        let request = {
            let mut modal = self.modal();
            let request = self.inner.sequence.fetch_add(1, Ordering::SeqCst) + 1;
            *modal = ModalState::Loading {
                project_id,
                request,
            };
            request
        };

        let controller = &self.inner.controller;
        controller.set_modal_open(true);
        controller.emit(CarouselEvent::request_details(project_id));
        controller.emit(CarouselEvent::details_loading(project_id, request));
        debug!(%project_id, request, "Loading project details");

        let fetched = tokio::time::timeout(
            self.inner.timeout,
            self.inner.content.get_project_details(project_id),
        )
        .await
        .unwrap_or_else(|_| {
            let ms = u64::try_from(self.inner.timeout.as_millis()).unwrap_or(u64::MAX);
            Err(ContentError::Timeout(ms))
        });

        let mut modal = self.modal();
        if modal.request() != Some(request) {
            debug!(%project_id, request, "Discarding stale details response");
            return DetailsOutcome::Superseded;
        }

        match fetched {
            Ok(details) => {
                info!(%project_id, images = details.images.len(), "Project details loaded");
                *modal = ModalState::Loaded {
                    request,
                    images: ImageCarousel::new(details.images.len()),
                    details: details.clone(),
                };
                drop(modal);
                controller.emit(CarouselEvent::details_loaded(request, details.clone()));
                DetailsOutcome::Loaded(details)
            }
            Err(error) => {
                let message = error.user_message().to_string();
                warn!(%project_id, %error, "Failed to load project details");
                *modal = ModalState::Failed {
                    project_id,
                    request,
                    message: message.clone(),
                };
                drop(modal);
                controller.emit(CarouselEvent::details_failed(
                    project_id,
                    request,
                    message.clone(),
                ));
                match error {
                    ContentError::NotFound(_) => DetailsOutcome::NotFound,
                    _ => DetailsOutcome::Failed(message),
                }
            }
        }
    }

    /// Close the modal. Any in-flight response is discarded and autoplay
    /// resumes if the carousel is visible. Returns `false` if already closed.
    pub fn close(&self) -> bool {
        {
            let mut modal = self.modal();
            if !modal.is_open() {
                return false;
            }
            *modal = ModalState::Closed;
        }
        let controller = &self.inner.controller;
        controller.emit(CarouselEvent::ModalClosed);
        controller.set_modal_open(false);
        true
    }

    /// Advance the gallery of a loaded project.
    pub fn next_image(&self) -> Option<usize> {
        match &mut *self.modal() {
            ModalState::Loaded { images, .. } => Some(images.next()),
            _ => None,
        }
    }

    pub fn prev_image(&self) -> Option<usize> {
        match &mut *self.modal() {
            ModalState::Loaded { images, .. } => Some(images.prev()),
            _ => None,
        }
    }

    pub fn go_to_image(&self, index: usize) -> Option<usize> {
        match &mut *self.modal() {
            ModalState::Loaded { images, .. } => Some(images.go_to(index)),
            _ => None,
        }
    }
}
