//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain logic. They don't know
//! about concrete implementations.

mod category_service;
mod project_service;
mod settings_service;
mod showcase_core;

pub use category_service::CategoryService;
pub use project_service::ProjectService;
pub use settings_service::SettingsService;
pub use showcase_core::ShowcaseCore;
