//! A mounted showcase: carousel, view toggle, details modal and input,
//! wired together.

use std::sync::Arc;

use tracing::{debug, info};

use super::controller::CarouselController;
use super::details::{DetailsLoader, DetailsOutcome};
use super::input::{KeyInput, NavigationIntent, SwipeTracker};
use super::view::{FilterViewToggle, ViewMode};
use crate::domain::{CategoryFilter, ProjectId, SlideCollection};
use crate::ports::{CarouselEventEmitter, ContentError, ContentServicePort};
use crate::settings::CarouselConfig;

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Navigated(NavigationIntent),
    ModalClosed,
    Ignored,
}

/// One showcase instance bound to a content service.
///
/// Independent instances share nothing; each owns its own timer.
pub struct Showcase {
    controller: CarouselController,
    view: FilterViewToggle,
    details: DetailsLoader,
    content: Arc<dyn ContentServicePort>,
    swipe: SwipeTracker,
}

impl Showcase {
    /// Load every slide from `content` and mount a showcase over them.
    ///
    /// Must be called inside a tokio runtime for autoplay to run.
    pub async fn mount(
        content: Arc<dyn ContentServicePort>,
        emitter: Arc<dyn CarouselEventEmitter>,
        config: CarouselConfig,
    ) -> Result<Self, ContentError> {
        let slides = content.list_slides(&CategoryFilter::All).await?;
        Ok(Self::with_slides(slides, content, emitter, config))
    }

    /// Mount over an already loaded collection.
    pub fn with_slides(
        slides: SlideCollection,
        content: Arc<dyn ContentServicePort>,
        emitter: Arc<dyn CarouselEventEmitter>,
        config: CarouselConfig,
    ) -> Self {
        info!(
            slides = slides.len(),
            layout = ?config.layout,
            view = %config.default_view,
            "Mounting showcase"
        );
        let controller = CarouselController::new(slides, config, emitter);
        controller.render();
        let view = FilterViewToggle::new(controller.clone(), config.default_view);
        let details = DetailsLoader::new(
            Arc::clone(&content),
            controller.clone(),
            config.details_timeout,
        );
        Self {
            controller,
            view,
            details,
            content,
            swipe: SwipeTracker::new(config.swipe_threshold_px),
        }
    }

    pub const fn controller(&self) -> &CarouselController {
        &self.controller
    }

    /// The details loader; clone it to fetch details from a spawned task.
    pub const fn details(&self) -> &DetailsLoader {
        &self.details
    }

    pub const fn view_mode(&self) -> ViewMode {
        self.view.mode()
    }

    pub const fn filter(&self) -> &CategoryFilter {
        self.view.filter()
    }

    pub fn categories(&self) -> Vec<String> {
        self.view
            .source()
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn apply_filter(&mut self, filter: CategoryFilter) -> usize {
        self.view.apply_filter(filter)
    }

    pub fn switch_view(&mut self, mode: ViewMode) -> bool {
        self.view.switch_view(mode)
    }

    /// Refetch the unfiltered list and re-apply the current filter.
    pub async fn reload(&mut self) -> Result<usize, ContentError> {
        let slides = self.content.list_slides(&CategoryFilter::All).await?;
        Ok(self.view.replace_source(slides))
    }

    /// Arrow keys navigate only while the carousel is visible and no modal
    /// is open. Escape closes the modal.
    pub fn handle_key(&self, key: KeyInput) -> KeyOutcome {
        if key == KeyInput::Escape {
            return if self.details.close() {
                KeyOutcome::ModalClosed
            } else {
                KeyOutcome::Ignored
            };
        }
        if self.view.mode() != ViewMode::Carousel || self.details.is_open() {
            debug!(?key, "Key ignored");
            return KeyOutcome::Ignored;
        }
        let intent = match key {
            KeyInput::ArrowLeft => NavigationIntent::Prev,
            _ => NavigationIntent::Next,
        };
        self.navigate(intent)
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.touch_start(x);
    }

    /// Finish a swipe; a long enough horizontal swipe navigates.
    pub fn touch_end(&mut self, x: f64) -> Option<NavigationIntent> {
        let intent = self.swipe.touch_end(x)?;
        if self.view.mode() != ViewMode::Carousel || self.details.is_open() {
            return None;
        }
        match self.navigate(intent) {
            KeyOutcome::Navigated(intent) => Some(intent),
            _ => None,
        }
    }

    fn navigate(&self, intent: NavigationIntent) -> KeyOutcome {
        let moved = match intent {
            NavigationIntent::Next => self.controller.user_next(),
            NavigationIntent::Prev => self.controller.user_prev(),
        };
        if moved {
            KeyOutcome::Navigated(intent)
        } else {
            KeyOutcome::Ignored
        }
    }

    pub fn pointer_enter(&self) {
        self.controller.pointer_enter();
    }

    pub fn pointer_leave(&self) {
        self.controller.pointer_leave();
    }

    pub fn click_slide(&self, index: usize) -> bool {
        self.controller.click_slide(index)
    }

    pub async fn open_details(&self, project_id: ProjectId) -> DetailsOutcome {
        self.details.open(project_id).await
    }

    pub fn close_details(&self) -> bool {
        self.details.close()
    }

    /// Tear down explicitly. Dropping the showcase has the same effect.
    pub fn unmount(self) {
        info!("Showcase unmounted");
    }
}

impl Drop for Showcase {
    /// Controller clones held elsewhere stay usable but idle.
    fn drop(&mut self) {
        self.details.close();
        self.controller.shutdown();
        debug!("Showcase torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingEmitter, StaticContentService, details, slides};

    async fn mounted(count: i64) -> (Showcase, RecordingEmitter) {
        let emitter = RecordingEmitter::new();
        let showcase = Showcase::mount(
            Arc::new(StaticContentService::new(slides(count))),
            Arc::new(emitter.clone()),
            CarouselConfig::default(),
        )
        .await
        .unwrap();
        (showcase, emitter)
    }

    #[tokio::test]
    async fn test_mount_renders_and_starts_autoplay() {
        let (showcase, emitter) = mounted(4).await;
        assert_eq!(emitter.names().first(), Some(&"carousel:render"));
        assert!(showcase.controller().autoplay_running());
        assert_eq!(showcase.view_mode(), ViewMode::Carousel);
    }

    #[tokio::test]
    async fn test_arrow_keys_navigate() {
        let (showcase, _) = mounted(4).await;
        assert_eq!(
            showcase.handle_key(KeyInput::ArrowLeft),
            KeyOutcome::Navigated(NavigationIntent::Prev)
        );
        assert_eq!(showcase.controller().state().current_index, Some(3));
        showcase.handle_key(KeyInput::ArrowRight);
        assert_eq!(showcase.controller().state().current_index, Some(0));
    }

    #[tokio::test]
    async fn test_keys_ignored_in_grid_view() {
        let (mut showcase, _) = mounted(4).await;
        showcase.switch_view(ViewMode::Grid);
        assert_eq!(showcase.handle_key(KeyInput::ArrowRight), KeyOutcome::Ignored);
        assert_eq!(showcase.controller().state().current_index, Some(0));
        assert_eq!(showcase.handle_key(KeyInput::Escape), KeyOutcome::Ignored);
    }

    #[tokio::test]
    async fn test_swipe_navigates() {
        let (mut showcase, _) = mounted(3).await;
        showcase.touch_start(300.0);
        assert_eq!(showcase.touch_end(100.0), Some(NavigationIntent::Next));
        assert_eq!(showcase.controller().state().current_index, Some(1));

        showcase.touch_start(300.0);
        assert_eq!(showcase.touch_end(280.0), None);
        assert_eq!(showcase.controller().state().current_index, Some(1));
    }

    #[tokio::test]
    async fn test_empty_mount_is_idle() {
        let (showcase, _) = mounted(0).await;
        assert!(showcase.controller().phase().is_idle());
        assert!(!showcase.controller().autoplay_running());
        assert_eq!(showcase.handle_key(KeyInput::ArrowRight), KeyOutcome::Ignored);
    }

    #[tokio::test]
    async fn test_unmount_stops_autoplay() {
        let (showcase, _) = mounted(3).await;
        let controller = showcase.controller().clone();
        showcase.unmount();
        assert!(!controller.autoplay_running());
    }

    #[tokio::test]
    async fn test_drop_stops_autoplay_and_closes_modal() {
        let content = StaticContentService::new(slides(3)).with_details(details(1, 2));
        let showcase = Showcase::mount(
            Arc::new(content),
            Arc::new(RecordingEmitter::new()),
            CarouselConfig::default(),
        )
        .await
        .unwrap();
        let controller = showcase.controller().clone();
        let loader = showcase.details().clone();
        showcase.open_details(ProjectId(1)).await;
        assert!(loader.is_open());

        drop(showcase);
        assert!(!loader.is_open());
        assert!(!controller.autoplay_running());

        // The modal closing must not restart the timer after teardown.
        tokio::task::yield_now().await;
        assert!(!controller.autoplay_running());
    }
}
