//! Project command handlers.

use anyhow::Result;
use tracing::debug;

use showcase_core::{NewProject, Project, ProjectId};

use crate::bootstrap::CliContext;
use crate::commands::{ProjectArgs, ProjectCommand};
use crate::error::CliError;
use crate::presentation::{format_optional, format_timestamp, print_separator, truncate_string};
use crate::utils::input;

/// Execute a `project` subcommand.
pub async fn execute(ctx: &CliContext, command: ProjectCommand) -> Result<()> {
    match command {
        ProjectCommand::List => list(ctx).await,
        ProjectCommand::Add(args) => add(ctx, args).await,
        ProjectCommand::Edit { id, project } => edit(ctx, id, project).await,
        ProjectCommand::Remove { id, force } => remove(ctx, id, force).await,
    }
}

impl From<ProjectArgs> for NewProject {
    fn from(args: ProjectArgs) -> Self {
        Self {
            title: args.title,
            description: args.description,
            images: args.images,
            video_url: args.video,
            project_link: args.link,
            category_id: args.category,
        }
    }
}

async fn list(ctx: &CliContext) -> Result<()> {
    let projects = ctx.core().projects().list().await.map_err(CliError::from)?;

    if projects.is_empty() {
        println!("No projects yet.");
        println!("Use 'showcase project add' to add your first project.");
        return Ok(());
    }

    println!("Found {} project(s):\n", projects.len());
    println!(
        "{:<5} {:<30} {:<9} {:<7} {:<7} {:<17} Link",
        "ID", "Title", "Category", "Images", "Video", "Added"
    );
    print_separator(100);

    for project in projects {
        println!(
            "{:<5} {:<30} {:<9} {:<7} {:<7} {:<17} {}",
            project.id,
            truncate_string(&project.title, 29),
            format_optional(project.category_id.as_ref(), "--"),
            project.images.len(),
            if project.video_url.is_some() { "yes" } else { "no" },
            format_timestamp(project.created_at),
            project.project_link
        );
    }
    Ok(())
}

fn print_project(project: &Project) {
    println!("  ID:       {}", project.id);
    println!("  Title:    {}", project.title);
    println!("  Link:     {}", project.project_link);
    println!(
        "  Category: {}",
        format_optional(project.category_id.as_ref(), "uncategorized")
    );
    println!("  Images:   {}", project.images.len());
    if let Some(video) = &project.video_url {
        println!("  Video:    {video}");
    }
}

async fn add(ctx: &CliContext, args: ProjectArgs) -> Result<()> {
    let created = ctx
        .core()
        .projects()
        .create(args.into())
        .await
        .map_err(CliError::from)?;
    println!("Project added:");
    print_project(&created);
    Ok(())
}

async fn edit(ctx: &CliContext, id: i64, args: ProjectArgs) -> Result<()> {
    let updated = ctx
        .core()
        .projects()
        .update(ProjectId(id), args.into())
        .await
        .map_err(CliError::from)?;
    println!("Project updated:");
    print_project(&updated);
    Ok(())
}

async fn remove(ctx: &CliContext, id: i64, force: bool) -> Result<()> {
    let id = ProjectId(id);
    let project = ctx.core().projects().get(id).await.map_err(CliError::from)?;

    if !force {
        print_project(&project);
        println!();
        let confirm = input::prompt_confirmation("Remove this project?")?;
        if !confirm {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    ctx.core().projects().delete(id).await.map_err(CliError::from)?;
    debug!(%id, "Removed project via CLI");
    println!("Removed project '{}'.", project.title);
    Ok(())
}
