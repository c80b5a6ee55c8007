//! Demo command handler.
//!
//! Mounts a headless showcase over the stored projects and prints every
//! event it emits until the time runs out or Ctrl-C is pressed.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use showcase_core::{CategoryFilter, ChannelEmitter, Showcase, validate_settings};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::describe_event;

/// Arguments for the demo command.
#[derive(Debug, Clone)]
pub struct DemoArgs {
    pub seconds: u64,
    pub filter: Option<String>,
    pub delay_ms: Option<u64>,
}

/// Execute the demo command.
pub async fn execute(ctx: &CliContext, args: DemoArgs) -> Result<()> {
    let mut settings = ctx.settings().clone();
    if args.delay_ms.is_some() {
        settings.auto_slide_delay_ms = args.delay_ms;
        validate_settings(&settings).map_err(|e| CliError::Arguments(e.to_string()))?;
    }
    let config = settings.carousel_config();

    let emitter = ChannelEmitter::new();
    let mut events = emitter.subscribe();
    let printer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => println!("{}", describe_event(&event)),
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Event printer lagged"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let mut showcase = Showcase::mount(ctx.core().content(), Arc::new(emitter), config)
        .await
        .map_err(CliError::from)?;
    if let Some(filter) = args.filter.as_deref() {
        showcase.apply_filter(CategoryFilter::parse(filter));
    }
    info!(seconds = args.seconds, "Demo running");

    tokio::select! {
        () = tokio::time::sleep(Duration::from_secs(args.seconds)) => {}
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                warn!(error = %e, "Failed to listen for Ctrl-C");
            }
        }
    }

    // Dropping the showcase drops the last emitter clone, which ends the printer.
    showcase.unmount();
    match tokio::time::timeout(Duration::from_secs(1), printer).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(error = %e, "Event printer task failed"),
        Err(_) => warn!("Event printer did not finish"),
    }
    Ok(())
}
