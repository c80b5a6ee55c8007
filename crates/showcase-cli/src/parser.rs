//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the portfolio showcase.
#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Manage portfolio projects and drive the showcase carousel")]
#[command(version)]
pub struct Cli {
    /// Directory holding the database and settings file
    #[arg(long = "data-dir", global = true, env = "SHOWCASE_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Settings file (JSON) to use instead of the one in the data directory
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ProjectCommand;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "showcase",
            "--verbose",
            "--data-dir",
            "/tmp/showcase",
            "project",
            "list",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some("/tmp/showcase".to_string()));
        assert!(matches!(
            cli.command,
            Some(Commands::Project(ProjectCommand::List))
        ));
    }

    #[test]
    fn test_project_add_args() {
        let cli = Cli::parse_from([
            "showcase",
            "project",
            "add",
            "--title",
            "Atlas",
            "--description",
            "Brand refresh",
            "--image",
            "a.jpg",
            "--image",
            "b.jpg",
            "--link",
            "https://atlas.example.com",
        ]);
        match cli.command {
            Some(Commands::Project(ProjectCommand::Add(args))) => {
                assert_eq!(args.title, "Atlas");
                assert_eq!(args.images, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
                assert_eq!(args.category, None);
            }
            _ => panic!("expected project add"),
        }
    }

    #[test]
    fn test_slides_layout_arg() {
        let cli = Cli::parse_from(["showcase", "slides", "--layout", "card-stack"]);
        match cli.command {
            Some(Commands::Slides { layout, filter }) => {
                assert_eq!(layout, Some(showcase_core::Layout::CardStack));
                assert_eq!(filter, None);
            }
            _ => panic!("expected slides"),
        }
    }

    #[test]
    fn test_settings_args() {
        use crate::commands::{SettingField, SettingsCommand};

        let cli = Cli::parse_from([
            "showcase",
            "settings",
            "set",
            "--auto-slide-delay-ms",
            "7000",
            "--auto-slide",
            "false",
            "--default-view",
            "grid",
        ]);
        match cli.command {
            Some(Commands::Settings(SettingsCommand::Set(args))) => {
                assert_eq!(args.auto_slide_delay_ms, Some(7000));
                assert_eq!(args.auto_slide, Some(false));
                assert_eq!(args.default_view, Some(showcase_core::ViewMode::Grid));
                assert_eq!(args.layout, None);
            }
            _ => panic!("expected settings set"),
        }

        let cli = Cli::parse_from(["showcase", "settings", "reset", "layout", "auto-slide", "-f"]);
        match cli.command {
            Some(Commands::Settings(SettingsCommand::Reset { fields, force })) => {
                assert_eq!(fields, vec![SettingField::Layout, SettingField::AutoSlide]);
                assert!(force);
            }
            _ => panic!("expected settings reset"),
        }
    }
}
