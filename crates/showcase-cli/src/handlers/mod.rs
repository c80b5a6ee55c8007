//! Command handlers that delegate to `ShowcaseCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call core services or mount a showcase
//!   3. Format output for the terminal
//!
//! Handlers should NOT access repositories or the database pool directly.

pub mod category;
pub mod demo;
pub mod details;
pub mod paths;
pub mod project;
pub mod settings;
pub mod slides;
