//! Human-readable rendering of carousel events.

use showcase_core::{CarouselEvent, Position, RenderSnapshot};

fn position_marker(position: Position) -> &'static str {
    match position {
        Position::Active => "[*]",
        Position::NearLeft | Position::NearRight => "[<>]",
        Position::FarLeft | Position::FarRight => "[..]",
        Position::Hidden => "[  ]",
    }
}

/// One line per slide, e.g. `[*] #3 near-left`.
pub fn describe_snapshot(snapshot: &RenderSnapshot) -> String {
    let mut lines = Vec::with_capacity(snapshot.slides.len() + 1);
    match snapshot.state.current_index {
        Some(index) => lines.push(format!(
            "slide {}/{}: {}",
            index + 1,
            snapshot.state.total,
            snapshot.caption.as_deref().unwrap_or("")
        )),
        None => lines.push("no slides".to_string()),
    }
    for slide in &snapshot.slides {
        let playing = if slide.playing { " (playing)" } else { "" };
        lines.push(format!(
            "  {:<4} #{:<4} {}{playing}",
            position_marker(slide.position),
            slide.project_id,
            slide.position
        ));
    }
    lines.join("\n")
}

/// One-line summary of an event; renders get the full snapshot.
pub fn describe_event(event: &CarouselEvent) -> String {
    match event {
        CarouselEvent::Render { snapshot } => describe_snapshot(snapshot),
        CarouselEvent::SlideChanged { index, project_id } => {
            format!("-> slide {index} (project #{project_id})")
        }
        CarouselEvent::AutoplayStarted { delay_ms } => format!("autoplay every {delay_ms} ms"),
        CarouselEvent::FilterApplied { filter, visible } => {
            format!("filter {filter}: {visible} visible")
        }
        CarouselEvent::ViewChanged { mode } => format!("view: {mode}"),
        CarouselEvent::DetailsFailed { message, .. } => format!("details failed: {message}"),
        other => other.event_name().to_string(),
    }
}
