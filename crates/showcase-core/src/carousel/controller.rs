//! The carousel state machine.
//!
//! [`CarouselController`] is a cheap handle over shared state guarded by a
//! synchronous mutex. The lock is never held across an `.await`; the autoplay
//! task only holds a weak reference, so dropping the last handle tears the
//! timer down.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tracing::{debug, trace};

use super::autoplay::{AutoplayTimer, TickControl};
use super::media::{MediaPlayer, PlayOutcome};
use super::position::{Layout, Position, PositionResolver};
use super::state::{CarouselState, ControllerPhase};
use crate::domain::{SlideCollection, SlideRecord};
use crate::events::{CarouselEvent, RenderSnapshot, RenderedSlide};
use crate::ports::CarouselEventEmitter;
use crate::settings::CarouselConfig;

/// Everything the controller mutates, behind one lock.
struct ControllerCore {
    slides: SlideCollection,
    current: usize,
    resolver: PositionResolver,
    media: MediaPlayer,
    timer: AutoplayTimer,
    autoplay_enabled: bool,
    delay: Duration,
    hovered: bool,
    carousel_visible: bool,
    modal_open: bool,
    emitter: Arc<dyn CarouselEventEmitter>,
}

impl ControllerCore {
    fn total(&self) -> usize {
        self.slides.len()
    }

    fn state(&self) -> CarouselState {
        let total = self.total();
        CarouselState {
            current_index: (total > 0).then_some(self.current),
            total,
            is_playing: self.media.any_playing(),
            autoplay_enabled: self.autoplay_enabled,
        }
    }

    fn phase(&self) -> ControllerPhase {
        if self.slides.is_empty() {
            ControllerPhase::Idle
        } else {
            ControllerPhase::Ready {
                autoplay_running: self.timer.is_running(),
            }
        }
    }

    /// Reason autoplay may not run right now, if any.
    fn pause_reason(&self) -> Option<&'static str> {
        if self.hovered {
            Some("pointer over carousel")
        } else if self.media.any_playing() {
            Some("video playing")
        } else if !self.carousel_visible {
            Some("carousel hidden")
        } else if self.modal_open {
            Some("details modal open")
        } else {
            None
        }
    }

    fn snapshot(&self) -> RenderSnapshot {
        let total = self.total();
        let slides = self
            .slides
            .iter()
            .enumerate()
            .map(|(index, slide)| {
                let position = self.resolver.resolve(self.current, total, index);
                RenderedSlide {
                    project_id: slide.id,
                    index,
                    position,
                    css_class: position.css_class().to_string(),
                    playing: self.media.is_playing(slide.id),
                    has_video: slide.has_video(),
                }
            })
            .collect();

        RenderSnapshot {
            state: self.state(),
            layout: self.resolver.layout(),
            slides,
            caption: self.slides.get(self.current).map(|s| s.title.clone()),
        }
    }

    fn render(&self) {
        self.emitter.emit(CarouselEvent::render(self.snapshot()));
    }

    fn stop_media(&mut self) -> bool {
        match self.media.stop_all() {
            Some(stopped) => {
                self.emitter
                    .emit(CarouselEvent::media_stopped(stopped.project_id));
                true
            }
            None => false,
        }
    }

    fn go_to(&mut self, index: isize) -> bool {
        let total = self.total();
        if total == 0 {
            return false;
        }
        let target = match usize::try_from(index) {
            Err(_) => total - 1,
            Ok(i) if i >= total => 0,
            Ok(i) => i,
        };

        self.stop_media();
        let changed = target != self.current;
        self.current = target;
        trace!(index = target, total, "Carousel moved");
        self.render();

        if changed && let Some(slide) = self.slides.get(target) {
            self.emitter
                .emit(CarouselEvent::slide_changed(target, slide.id));
        }
        true
    }

    fn step(&mut self, delta: isize) -> bool {
        let current = self.current as isize;
        self.go_to(current + delta)
    }

    fn stop_autoplay(&mut self) -> bool {
        let stopped = self.timer.stop();
        if stopped {
            debug!("Autoplay stopped");
            self.emitter.emit(CarouselEvent::AutoplayStopped);
        }
        stopped
    }

    fn start_autoplay(&mut self, handle: &Weak<Mutex<Self>>) -> bool {
        if !self.autoplay_enabled || self.timer.is_running() || self.slides.is_empty() {
            return false;
        }
        if let Some(reason) = self.pause_reason() {
            debug!(reason, "Autoplay held");
            return false;
        }

        let weak = handle.clone();
        let started = self.timer.start(self.delay, move |generation| {
            let Some(shared) = weak.upgrade() else {
                return TickControl::Stop;
            };
            let mut core = lock(&shared);
            if !core.timer.is_current(generation) {
                trace!(generation, "Discarding stale autoplay tick");
                return TickControl::Stop;
            }
            core.step(1);
            TickControl::Continue
        });

        if started.is_some() {
            let delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX);
            debug!(delay_ms, "Autoplay started");
            self.emitter
                .emit(CarouselEvent::AutoplayStarted { delay_ms });
        }
        started.is_some()
    }

    fn restart_autoplay(&mut self, handle: &Weak<Mutex<Self>>) -> bool {
        self.stop_autoplay();
        self.start_autoplay(handle)
    }
}

fn lock(shared: &Mutex<ControllerCore>) -> MutexGuard<'_, ControllerCore> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to a carousel over one [`SlideCollection`].
///
/// Clones share the same carousel. All methods are synchronous and never
/// block on I/O; events are delivered to the emitter before the method
/// returns.
#[derive(Clone)]
pub struct CarouselController {
    shared: Arc<Mutex<ControllerCore>>,
}

impl CarouselController {
    /// Create a controller positioned on the first slide.
    ///
    /// Autoplay is not started; call [`start_autoplay`](Self::start_autoplay)
    /// from within a tokio runtime.
    pub fn new(
        slides: SlideCollection,
        config: CarouselConfig,
        emitter: Arc<dyn CarouselEventEmitter>,
    ) -> Self {
        let core = ControllerCore {
            slides,
            current: 0,
            resolver: PositionResolver::new(config.layout),
            media: MediaPlayer::new(),
            timer: AutoplayTimer::default(),
            autoplay_enabled: config.auto_slide_enabled,
            delay: config.auto_slide_delay,
            hovered: false,
            carousel_visible: true,
            modal_open: false,
            emitter,
        };
        Self {
            shared: Arc::new(Mutex::new(core)),
        }
    }

    fn core(&self) -> MutexGuard<'_, ControllerCore> {
        lock(&self.shared)
    }

    fn weak(&self) -> Weak<Mutex<ControllerCore>> {
        Arc::downgrade(&self.shared)
    }

    // ---- queries ----

    pub fn state(&self) -> CarouselState {
        self.core().state()
    }

    pub fn phase(&self) -> ControllerPhase {
        self.core().phase()
    }

    pub fn layout(&self) -> Layout {
        self.core().resolver.layout()
    }

    pub fn autoplay_running(&self) -> bool {
        self.core().timer.is_running()
    }

    /// The collection currently shown.
    pub fn slides(&self) -> SlideCollection {
        self.core().slides.clone()
    }

    pub fn current_slide(&self) -> Option<SlideRecord> {
        let core = self.core();
        core.slides.get(core.current).cloned()
    }

    /// Position of the slide at `index` relative to the active one.
    pub fn position_of(&self, index: usize) -> Position {
        let core = self.core();
        core.resolver.resolve(core.current, core.total(), index)
    }

    pub fn render_snapshot(&self) -> RenderSnapshot {
        self.core().snapshot()
    }

    /// Send an event through this controller's emitter.
    pub fn emit(&self, event: CarouselEvent) {
        self.core().emitter.emit(event);
    }

    /// Emit a full render of the current state.
    pub fn render(&self) {
        self.core().render();
    }

    // ---- navigation ----

    /// Make `index` the active slide, wrapping out-of-range values.
    ///
    /// Stops any playing video. Does not touch autoplay. Returns `false`
    /// when there are no slides.
    pub fn go_to(&self, index: isize) -> bool {
        self.core().go_to(index)
    }

    pub fn next(&self) -> bool {
        self.core().step(1)
    }

    pub fn prev(&self) -> bool {
        self.core().step(-1)
    }

    /// Navigate on behalf of the user and restart the autoplay countdown.
    pub fn user_go_to(&self, index: isize) -> bool {
        let weak = self.weak();
        let mut core = self.core();
        let moved = core.go_to(index);
        if moved {
            core.restart_autoplay(&weak);
        }
        moved
    }

    pub fn user_next(&self) -> bool {
        let weak = self.weak();
        let mut core = self.core();
        let moved = core.step(1);
        if moved {
            core.restart_autoplay(&weak);
        }
        moved
    }

    pub fn user_prev(&self) -> bool {
        let weak = self.weak();
        let mut core = self.core();
        let moved = core.step(-1);
        if moved {
            core.restart_autoplay(&weak);
        }
        moved
    }

    /// Handle a click on the slide at `index`.
    ///
    /// Clicking a neighbor brings it to the front; clicking the active slide
    /// does nothing.
    pub fn click_slide(&self, index: usize) -> bool {
        let Ok(index) = isize::try_from(index) else {
            return false;
        };
        {
            let core = self.core();
            if core.slides.is_empty() || core.current as isize == index {
                return false;
            }
        }
        self.user_go_to(index)
    }

    // ---- autoplay ----

    /// Start autoplay. No-op when disabled, already running, empty, or when
    /// a pause condition holds.
    pub fn start_autoplay(&self) -> bool {
        let weak = self.weak();
        self.core().start_autoplay(&weak)
    }

    /// Stop autoplay. Idempotent.
    pub fn stop_autoplay(&self) -> bool {
        self.core().stop_autoplay()
    }

    /// Stop then start under one lock acquisition.
    pub fn restart_autoplay(&self) -> bool {
        let weak = self.weak();
        self.core().restart_autoplay(&weak)
    }

    pub fn set_autoplay_enabled(&self, enabled: bool) {
        let weak = self.weak();
        let mut core = self.core();
        core.autoplay_enabled = enabled;
        if enabled {
            core.start_autoplay(&weak);
        } else {
            core.stop_autoplay();
        }
    }

    // ---- media ----

    /// Play the active slide's video.
    pub fn play_active(&self) -> PlayOutcome {
        let current = self.core().current;
        self.play(current)
    }

    /// Play the video of the slide at `index`; honored only for the active
    /// slide. Starting playback pauses autoplay.
    pub fn play(&self, index: usize) -> PlayOutcome {
        let mut core = self.core();
        let total = core.total();
        let Some(slide) = core.slides.get(index).cloned() else {
            return PlayOutcome::NotActive;
        };
        let position = core.resolver.resolve(core.current, total, index);

        let previous = core.media.now_playing().map(|p| p.project_id);
        let outcome = core.media.play(&slide, position);
        if let PlayOutcome::Started(ref playing) = outcome {
            if let Some(previous) = previous {
                core.emitter.emit(CarouselEvent::media_stopped(previous));
            }
            core.stop_autoplay();
            core.emitter
                .emit(CarouselEvent::media_started(playing.clone()));
            core.render();
        }
        outcome
    }

    /// Stop any playing video. Returns whether something was playing.
    pub fn stop_media(&self) -> bool {
        let mut core = self.core();
        let stopped = core.stop_media();
        if stopped {
            core.render();
        }
        stopped
    }

    // ---- pause rules ----

    pub fn pointer_enter(&self) {
        let mut core = self.core();
        core.hovered = true;
        core.stop_autoplay();
    }

    /// Resume autoplay unless a video plays, the view is hidden or a modal
    /// is open.
    pub fn pointer_leave(&self) {
        let weak = self.weak();
        let mut core = self.core();
        core.hovered = false;
        core.start_autoplay(&weak);
    }

    /// Called by the view toggle. Hiding stops autoplay and media.
    pub fn set_carousel_visible(&self, visible: bool) {
        let weak = self.weak();
        let mut core = self.core();
        core.carousel_visible = visible;
        if visible {
            core.start_autoplay(&weak);
        } else {
            core.stop_autoplay();
            if core.stop_media() {
                core.render();
            }
        }
    }

    /// Called by the details loader. Opening stops autoplay and media.
    pub fn set_modal_open(&self, open: bool) {
        let weak = self.weak();
        let mut core = self.core();
        core.modal_open = open;
        if open {
            core.stop_autoplay();
            if core.stop_media() {
                core.render();
            }
        } else {
            core.start_autoplay(&weak);
        }
    }

    // ---- lifecycle ----

    /// Swap the collection and reset to the first slide.
    ///
    /// Media is stopped. An empty collection also stops autoplay.
    pub fn replace_collection(&self, slides: SlideCollection) {
        let mut core = self.core();
        core.stop_media();
        core.slides = slides;
        core.current = 0;
        if core.slides.is_empty() {
            core.stop_autoplay();
        }
        debug!(total = core.total(), "Carousel collection replaced");
        core.render();
    }

    /// Stop autoplay and media. The controller stays usable.
    pub fn shutdown(&self) {
        let mut core = self.core();
        core.stop_autoplay();
        core.stop_media();
    }
}

impl std::fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("state", &self.state())
            .field("phase", &self.phase())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProjectId, VideoDescriptor, VideoKind};
    use crate::testing::{RecordingEmitter, settle, slide, slides};

    fn controller(count: i64) -> (CarouselController, RecordingEmitter) {
        let emitter = RecordingEmitter::new();
        let controller = CarouselController::new(
            slides(count),
            CarouselConfig::default(),
            Arc::new(emitter.clone()),
        );
        (controller, emitter)
    }

    fn video_controller() -> CarouselController {
        let (collection, _) = SlideCollection::from_records(vec![
            SlideRecord {
                video: Some(VideoDescriptor {
                    kind: VideoKind::File,
                    playable_url: "https://cdn.example.com/a.mp4".to_string(),
                }),
                ..slide(1)
            },
            slide(2),
            slide(3),
        ]);
        CarouselController::new(
            collection,
            CarouselConfig::default(),
            Arc::new(RecordingEmitter::new()),
        )
    }

    #[test]
    fn test_go_to_wraps() {
        let (c, _) = controller(5);
        assert!(c.go_to(-1));
        assert_eq!(c.state().current_index, Some(4));
        assert!(c.go_to(5));
        assert_eq!(c.state().current_index, Some(0));
        assert!(c.go_to(-7));
        assert_eq!(c.state().current_index, Some(4));
        assert!(c.go_to(2));
        assert_eq!(c.state().current_index, Some(2));
    }

    #[test]
    fn test_next_prev_are_inverse() {
        let (c, _) = controller(4);
        for start in 0..4 {
            c.go_to(start);
            c.next();
            c.prev();
            assert_eq!(c.state().current_index, Some(start as usize));
        }
        c.go_to(3);
        c.next();
        assert_eq!(c.state().current_index, Some(0));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let (c, _) = controller(7);
        c.go_to(3);
        for _ in 0..7 {
            c.next();
        }
        assert_eq!(c.state().current_index, Some(3));
    }

    #[test]
    fn test_exactly_one_active() {
        let (c, _) = controller(6);
        for i in 0..6 {
            c.go_to(i);
            let snapshot = c.render_snapshot();
            let active: Vec<_> = snapshot
                .slides
                .iter()
                .filter(|s| s.position == Position::Active)
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].index, i as usize);
        }
    }

    #[test]
    fn test_empty_controller_is_idle() {
        let (c, emitter) = controller(0);
        assert!(c.phase().is_idle());
        assert!(!c.go_to(3));
        assert!(!c.next());
        assert!(!c.prev());
        assert!(!c.click_slide(0));
        assert_eq!(c.play_active(), PlayOutcome::NotActive);
        assert_eq!(c.state().current_index, None);
        assert!(emitter.events().is_empty());
    }

    #[test]
    fn test_five_slides_after_three_steps() {
        let (c, _) = controller(5);
        c.next();
        c.next();
        c.next();

        assert_eq!(c.state().current_index, Some(3));
        assert_eq!(c.position_of(3), Position::Active);
        assert_eq!(c.position_of(1), Position::FarLeft);
        assert_eq!(c.position_of(2), Position::NearLeft);
        assert_eq!(c.position_of(4), Position::NearRight);
        assert_eq!(c.position_of(0), Position::FarRight);

        let snapshot = c.render_snapshot();
        assert_eq!(snapshot.active().unwrap().project_id, ProjectId(4));
        assert_eq!(snapshot.caption.as_deref(), Some("Project 4"));
    }

    #[test]
    fn test_single_slide() {
        let (c, emitter) = controller(1);
        c.next();
        c.prev();
        assert_eq!(c.state().current_index, Some(0));
        assert_eq!(c.position_of(0), Position::Active);
        assert!(!emitter.names().contains(&"carousel:slide_changed"));
    }

    #[test]
    fn test_go_to_emits_render_and_slide_changed() {
        let (c, emitter) = controller(3);
        c.go_to(2);
        assert_eq!(
            emitter.names(),
            vec!["carousel:render", "carousel:slide_changed"]
        );
        let last = emitter.events().pop().unwrap();
        assert_eq!(last, CarouselEvent::slide_changed(2, ProjectId(3)));
    }

    #[test]
    fn test_click_active_slide_is_ignored() {
        let (c, emitter) = controller(3);
        assert!(!c.click_slide(0));
        assert!(emitter.events().is_empty());
        assert!(c.click_slide(1));
        assert_eq!(c.state().current_index, Some(1));
    }

    #[test]
    fn test_play_only_active_slide() {
        let c = video_controller();
        assert_eq!(c.play(1), PlayOutcome::NotActive);
        assert!(c.play(0).is_started());
        assert!(c.state().is_playing);

        c.next();
        assert!(!c.state().is_playing);
    }

    #[test]
    fn test_play_without_video() {
        let c = video_controller();
        c.go_to(1);
        assert_eq!(c.play_active(), PlayOutcome::NoVideo);
        assert!(!c.state().is_playing);
    }

    #[test]
    fn test_replace_collection_resets() {
        let c = video_controller();
        c.play_active();
        c.replace_collection(slides(2));
        let state = c.state();
        assert_eq!(state.current_index, Some(0));
        assert_eq!(state.total, 2);
        assert!(!state.is_playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_advances() {
        let (c, _) = controller(3);
        assert!(c.start_autoplay());
        assert!(!c.start_autoplay());
        settle().await;

        tokio::time::advance(Duration::from_millis(5000)).await;
        settle().await;
        assert_eq!(c.state().current_index, Some(1));

        tokio::time::advance(Duration::from_millis(5000)).await;
        settle().await;
        assert_eq!(c.state().current_index, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_autoplay_idempotent() {
        let (c, emitter) = controller(3);
        c.start_autoplay();
        assert!(c.stop_autoplay());
        let after_first = (c.state(), c.phase());
        assert!(!c.stop_autoplay());
        assert_eq!((c.state(), c.phase()), after_first);
        assert_eq!(
            emitter
                .names()
                .iter()
                .filter(|n| **n == "carousel:autoplay_stopped")
                .count(),
            1
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_hover_pauses_and_resumes() {
        let (c, _) = controller(3);
        c.start_autoplay();
        c.pointer_enter();
        assert!(!c.autoplay_running());

        tokio::time::advance(Duration::from_millis(12_000)).await;
        settle().await;
        assert_eq!(c.state().current_index, Some(0));

        c.pointer_leave();
        assert!(c.autoplay_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_video_blocks_autoplay() {
        let c = video_controller();
        c.start_autoplay();
        assert!(c.play_active().is_started());
        assert!(!c.autoplay_running());

        c.pointer_enter();
        c.pointer_leave();
        assert!(!c.autoplay_running());

        c.stop_media();
        c.pointer_leave();
        assert!(c.autoplay_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_modal_blocks_autoplay() {
        let (c, _) = controller(3);
        c.start_autoplay();
        c.set_modal_open(true);
        assert!(!c.autoplay_running());
        c.pointer_leave();
        assert!(!c.autoplay_running());
        c.set_modal_open(false);
        assert!(c.autoplay_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_autoplay_never_starts() {
        let emitter = RecordingEmitter::new();
        let config = CarouselConfig {
            auto_slide_enabled: false,
            ..CarouselConfig::default()
        };
        let c = CarouselController::new(slides(3), config, Arc::new(emitter));
        assert!(!c.start_autoplay());
        assert!(!c.restart_autoplay());
        c.user_next();
        assert!(!c.autoplay_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let emitter = RecordingEmitter::new();
        let c = CarouselController::new(
            slides(3),
            CarouselConfig::default(),
            Arc::new(emitter.clone()),
        );
        c.start_autoplay();
        settle().await;
        drop(c);

        let before = emitter.events().len();
        tokio::time::advance(Duration::from_millis(20_000)).await;
        settle().await;
        assert_eq!(emitter.events().len(), before);
    }
}
