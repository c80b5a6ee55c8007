//! Paths command handler.
//!
//! Displays the resolved paths in `key = value` form for diagnostics.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the paths command.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("data_dir = {}", ctx.data_dir.display());
    println!("database = {}", ctx.database_path.display());
    let note = if ctx.settings_path.exists() {
        ""
    } else {
        " (missing, using defaults)"
    };
    println!("settings = {}{note}", ctx.settings_path.display());
    Ok(())
}
