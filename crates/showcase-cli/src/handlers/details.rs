//! Details command handler.
//!
//! Runs the details loader against a bare controller, the way a click on a
//! slide would open the modal, then prints what the modal would show.

use std::sync::Arc;

use anyhow::Result;

use showcase_core::{
    CarouselController, DetailsLoader, DetailsOutcome, ImageCarousel, NoopEmitter, ProjectId,
    SlideCollection,
};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the details command.
pub async fn execute(ctx: &CliContext, id: i64, json: bool) -> Result<()> {
    let mut config = ctx.settings().carousel_config();
    config.auto_slide_enabled = false;
    let controller = CarouselController::new(
        SlideCollection::empty(),
        config,
        Arc::new(NoopEmitter::new()),
    );
    let loader = DetailsLoader::new(ctx.core().content(), controller, config.details_timeout);

    let outcome = loader.open(ProjectId(id)).await;
    loader.close();

    let details = match outcome {
        DetailsOutcome::Loaded(details) => details,
        DetailsOutcome::NotFound => {
            return Err(CliError::NotFound(format!("Project {id} not found")).into());
        }
        DetailsOutcome::Failed(message) => return Err(CliError::Core(message).into()),
        DetailsOutcome::Superseded => return Ok(()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    println!("{}", details.title);
    if let Some(category) = &details.category_name {
        println!("Category: {category}");
    }
    if let Some(link) = &details.project_link {
        println!("Link:     {link}");
    }
    println!();
    println!("{}", details.description_html);

    let gallery = ImageCarousel::new(details.images.len());
    if gallery.has_navigation() {
        println!("\nGallery ({} images):", gallery.count());
    } else {
        println!("\nImage:");
    }
    for (index, image) in details.images.iter().enumerate() {
        let marker = if index == gallery.current() { "*" } else { " " };
        println!(" {marker} {image}");
    }
    Ok(())
}
