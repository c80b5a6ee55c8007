//! Commands enum and subcommands.

use clap::{Args, Subcommand, ValueEnum};

use showcase_core::{Layout, ViewMode};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage portfolio projects
    #[command(subcommand)]
    Project(ProjectCommand),

    /// Manage project categories
    #[command(subcommand)]
    Category(CategoryCommand),

    /// View or change carousel settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Print every slide with its position in the carousel
    Slides {
        /// Only show slides in this category (slug, or "all")
        #[arg(short, long)]
        filter: Option<String>,
        /// Override the configured layout (coverflow, card-stack)
        #[arg(short, long)]
        layout: Option<Layout>,
    },

    /// Load and print one project's details
    Details {
        /// Project ID
        id: i64,
        /// Print the details as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mount a headless showcase and print its events as autoplay runs
    Demo {
        /// How long to run
        #[arg(short, long, default_value = "20")]
        seconds: u64,
        /// Category filter to apply after mounting
        #[arg(short, long)]
        filter: Option<String>,
        /// Override the autoplay delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Show resolved paths for the data directory, database and settings
    Paths,
}

/// Project subcommands.
#[derive(Subcommand)]
pub enum ProjectCommand {
    /// List projects, newest first
    List,
    /// Add a project
    Add(ProjectArgs),
    /// Replace a project's fields
    Edit {
        /// Project ID
        id: i64,
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Remove a project
    Remove {
        /// Project ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Fields of a project submission.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    #[arg(long)]
    pub title: String,
    /// Description (HTML allowed)
    #[arg(long)]
    pub description: String,
    /// Image URL; repeat for a gallery. The first one is the thumbnail.
    #[arg(long = "image", required = true)]
    pub images: Vec<String>,
    /// YouTube, Vimeo or direct video URL
    #[arg(long)]
    pub video: Option<String>,
    /// Link to the live project
    #[arg(long)]
    pub link: String,
    /// Category ID
    #[arg(long)]
    pub category: Option<i64>,
}

/// Category subcommands.
#[derive(Subcommand)]
pub enum CategoryCommand {
    /// List categories by name
    List,
    /// Add a category
    Add {
        /// Display name; the slug is derived from it
        name: String,
    },
    /// Rename a category
    Rename {
        /// Category ID
        id: i64,
        /// New display name
        name: String,
    },
    /// Remove a category; its projects become uncategorized
    Remove {
        /// Category ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Settings subcommands.
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show the effective carousel settings
    Show,
    /// Change one or more settings
    Set(SettingsArgs),
    /// Reset settings to their defaults
    Reset {
        /// Only reset these settings (all when omitted)
        #[arg(value_enum)]
        fields: Vec<SettingField>,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Values accepted by `settings set`.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Milliseconds between automatic advances (1000-60000)
    #[arg(long)]
    pub auto_slide_delay_ms: Option<u64>,
    /// Whether the carousel advances on its own
    #[arg(long)]
    pub auto_slide: Option<bool>,
    /// Slide transition duration in milliseconds (0-5000)
    #[arg(long)]
    pub transition_duration_ms: Option<u64>,
    /// Details fetch timeout in milliseconds (1000-120000)
    #[arg(long)]
    pub details_timeout_ms: Option<u64>,
    /// Minimum swipe distance in pixels (1-500)
    #[arg(long)]
    pub swipe_threshold_px: Option<u32>,
    /// Carousel layout (coverflow, card-stack)
    #[arg(long)]
    pub layout: Option<Layout>,
    /// View shown on mount (carousel, grid)
    #[arg(long)]
    pub default_view: Option<ViewMode>,
}

/// A single setting, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingField {
    AutoSlideDelay,
    AutoSlide,
    TransitionDuration,
    DetailsTimeout,
    SwipeThreshold,
    Layout,
    DefaultView,
}
