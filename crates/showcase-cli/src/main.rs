//! CLI entry point.
//!
//! Parses arguments, bootstraps the `CliContext` and dispatches to
//! handlers. Errors are printed once here and mapped to exit codes.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use showcase_cli::handlers::demo::DemoArgs;
use showcase_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig {
        data_dir: cli.data_dir,
        settings_file: cli.config,
    };
    let ctx = bootstrap(config).await?;

    match command {
        Commands::Project(command) => handlers::project::execute(&ctx, command).await?,
        Commands::Category(command) => handlers::category::execute(&ctx, command).await?,
        Commands::Settings(command) => handlers::settings::execute(&ctx, command)?,
        Commands::Slides { filter, layout } => {
            handlers::slides::execute(&ctx, filter.as_deref(), layout).await?;
        }
        Commands::Details { id, json } => handlers::details::execute(&ctx, id, json).await?,
        Commands::Demo {
            seconds,
            filter,
            delay_ms,
        } => {
            let args = DemoArgs {
                seconds,
                filter,
                delay_ms,
            };
            handlers::demo::execute(&ctx, args).await?;
        }
        Commands::Paths => handlers::paths::execute(&ctx)?,
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads SHOWCASE_DATA_DIR
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
