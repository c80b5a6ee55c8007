//! Category command handlers.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::CategoryCommand;
use crate::error::CliError;
use crate::presentation::{format_timestamp, print_separator, truncate_string};
use crate::utils::input;

/// Execute a `category` subcommand.
pub async fn execute(ctx: &CliContext, command: CategoryCommand) -> Result<()> {
    let categories = ctx.core().categories();
    match command {
        CategoryCommand::List => {
            let all = categories.list().await.map_err(CliError::from)?;
            if all.is_empty() {
                println!("No categories yet.");
                return Ok(());
            }
            println!("{:<5} {:<25} {:<25} Added", "ID", "Name", "Slug");
            print_separator(75);
            for category in all {
                println!(
                    "{:<5} {:<25} {:<25} {}",
                    category.id,
                    truncate_string(&category.name, 24),
                    truncate_string(&category.slug, 24),
                    format_timestamp(category.created_at)
                );
            }
        }
        CategoryCommand::Add { name } => {
            let created = categories.create(&name).await.map_err(CliError::from)?;
            println!("Category #{} '{}' ({})", created.id, created.name, created.slug);
        }
        CategoryCommand::Rename { id, name } => {
            let renamed = categories.rename(id, &name).await.map_err(CliError::from)?;
            println!("Category #{} is now '{}' ({})", renamed.id, renamed.name, renamed.slug);
        }
        CategoryCommand::Remove { id, force } => {
            if !force
                && !input::prompt_confirmation(
                    "Remove this category? Its projects become uncategorized",
                )?
            {
                println!("Remove operation cancelled.");
                return Ok(());
            }
            categories.delete(id).await.map_err(CliError::from)?;
            println!("Removed category #{id}.");
        }
    }
    Ok(())
}
