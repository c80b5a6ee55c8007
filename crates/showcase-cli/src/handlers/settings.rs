//! Settings command handlers.
//!
//! Changes are written to the settings file and take effect on the next
//! command that mounts a carousel.

use anyhow::Result;

use showcase_core::{ShowcaseSettings, ShowcaseSettingsUpdate};

use crate::bootstrap::CliContext;
use crate::commands::{SettingField, SettingsArgs, SettingsCommand};
use crate::error::CliError;
use crate::utils::input;

/// Execute a `settings` subcommand.
pub fn execute(ctx: &CliContext, command: SettingsCommand) -> Result<()> {
    let service = ctx.settings_service();
    match command {
        SettingsCommand::Show => {
            let settings = service.get().map_err(CliError::from)?;
            println!("Settings file: {}", service.path().display());
            print_settings(&settings);
        }
        SettingsCommand::Set(args) => {
            let update = update_from_args(&args);
            if update.is_empty() {
                println!("No settings provided. Use --help to see available options.");
                return Ok(());
            }
            let updated = service.update(&update).map_err(CliError::from)?;
            println!("Settings updated:");
            print_settings(&updated);
        }
        SettingsCommand::Reset { fields, force } => {
            if !force {
                let prompt = if fields.is_empty() {
                    "Reset all settings to defaults?"
                } else {
                    "Reset the selected settings to defaults?"
                };
                if !input::prompt_confirmation(prompt)? {
                    println!("Reset cancelled.");
                    return Ok(());
                }
            }
            let update = reset_update(&fields);
            let updated = service.update(&update).map_err(CliError::from)?;
            println!("Settings reset:");
            print_settings(&updated);
        }
    }
    Ok(())
}

/// Build an update that sets only the given values.
pub fn update_from_args(args: &SettingsArgs) -> ShowcaseSettingsUpdate {
    ShowcaseSettingsUpdate {
        auto_slide_delay_ms: args.auto_slide_delay_ms.map(Some),
        auto_slide_enabled: args.auto_slide.map(Some),
        transition_duration_ms: args.transition_duration_ms.map(Some),
        details_timeout_ms: args.details_timeout_ms.map(Some),
        swipe_threshold_px: args.swipe_threshold_px.map(Some),
        layout: args.layout.map(Some),
        default_view: args.default_view.map(Some),
    }
}

/// Build an update that resets `fields`; an empty list resets everything.
pub fn reset_update(fields: &[SettingField]) -> ShowcaseSettingsUpdate {
    if fields.is_empty() {
        return ShowcaseSettingsUpdate::reset_all();
    }
    let mut update = ShowcaseSettingsUpdate::default();
    for field in fields {
        match field {
            SettingField::AutoSlideDelay => update.auto_slide_delay_ms = Some(None),
            SettingField::AutoSlide => update.auto_slide_enabled = Some(None),
            SettingField::TransitionDuration => update.transition_duration_ms = Some(None),
            SettingField::DetailsTimeout => update.details_timeout_ms = Some(None),
            SettingField::SwipeThreshold => update.swipe_threshold_px = Some(None),
            SettingField::Layout => update.layout = Some(None),
            SettingField::DefaultView => update.default_view = Some(None),
        }
    }
    update
}

fn print_settings(settings: &ShowcaseSettings) {
    let config = settings.carousel_config();
    let marker = |is_set: bool| if is_set { "" } else { " (default)" };
    println!(
        "  auto_slide_delay_ms:    {}{}",
        config.auto_slide_delay.as_millis(),
        marker(settings.auto_slide_delay_ms.is_some())
    );
    println!(
        "  auto_slide_enabled:     {}{}",
        config.auto_slide_enabled,
        marker(settings.auto_slide_enabled.is_some())
    );
    println!(
        "  transition_duration_ms: {}{}",
        config.transition_duration.as_millis(),
        marker(settings.transition_duration_ms.is_some())
    );
    println!(
        "  details_timeout_ms:     {}{}",
        config.details_timeout.as_millis(),
        marker(settings.details_timeout_ms.is_some())
    );
    println!(
        "  swipe_threshold_px:     {}{}",
        config.swipe_threshold_px,
        marker(settings.swipe_threshold_px.is_some())
    );
    println!(
        "  layout:                 {}{}",
        config.layout,
        marker(settings.layout.is_some())
    );
    println!(
        "  default_view:           {}{}",
        config.default_view,
        marker(settings.default_view.is_some())
    );
}
