//! Slides command handler.
//!
//! Prints the visible slides and the position each one takes when the
//! first slide is active.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use showcase_core::{CarouselController, CategoryFilter, Layout, NoopEmitter};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{describe_snapshot, print_separator, truncate_string};

/// Execute the slides command.
pub async fn execute(ctx: &CliContext, filter: Option<&str>, layout: Option<Layout>) -> Result<()> {
    let filter = filter.map_or(CategoryFilter::All, CategoryFilter::parse);
    let slides = ctx
        .core()
        .content()
        .list_slides(&filter)
        .await
        .map_err(CliError::from)?;

    if slides.is_empty() {
        println!("No slides match filter '{filter}'.");
        return Ok(());
    }

    let mut config = ctx.settings().carousel_config();
    config.auto_slide_enabled = false;
    if let Some(layout) = layout {
        config.layout = layout;
    }
    debug!(count = slides.len(), layout = ?config.layout, "Resolving slide positions");

    println!("{:<5} {:<30} {:<15} Video", "ID", "Title", "Category");
    print_separator(70);
    for slide in slides.iter() {
        println!(
            "{:<5} {:<30} {:<15} {}",
            slide.id,
            truncate_string(&slide.title, 29),
            truncate_string(&slide.category_tag, 14),
            slide.video.as_ref().map_or("--", |video| video.kind.as_str())
        );
    }
    println!();

    let controller = CarouselController::new(slides, config, Arc::new(NoopEmitter::new()));
    println!("{}", describe_snapshot(&controller.render_snapshot()));
    controller.shutdown();
    Ok(())
}
