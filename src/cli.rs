use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use settings_kit::brush::BrushShape;
use settings_kit::settings::Resolution;

#[derive(Debug, Parser)]
#[command(name = "settings-kit")]
#[command(about = "Texture brush and settings window toolkit", version)]
pub struct Cli {
    /// Config file (default: ~/.settings-kit/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank script settings pages against a query
    Search(SearchArgs),
    /// Operate on the persisted texture brush
    Brush(BrushArgs),
    /// List display modes as the resolution list shows them
    Resolutions(ResolutionsArgs),
    /// Read or write the persisted settings
    Settings(SettingsArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Words to search for; empty matches every page
    #[arg(default_value = "")]
    pub query: String,

    /// JSON array of `{"name": ..., "hint": ...}` pages
    #[arg(long)]
    pub pages: PathBuf,
}

#[derive(Debug, Args)]
pub struct BrushArgs {
    /// JSON object mapping texture ids to file names
    #[arg(long, global = true)]
    pub textures: Option<PathBuf>,

    #[command(subcommand)]
    pub command: BrushCommand,
}

#[derive(Debug, Subcommand)]
pub enum BrushCommand {
    Show,
    /// Select a texture and put it at the top of the history
    Use { id: String },
    /// Select the texture in a history row
    Pick { row: usize },
    Shape { shape: BrushShape },
    Size { size: u32 },
}

#[derive(Debug, Args)]
pub struct ResolutionsArgs {
    /// Display modes, e.g. `1920x1080`
    #[arg(required = true)]
    pub modes: Vec<Resolution>,

    /// Resolution to highlight
    #[arg(long)]
    pub current: Option<Resolution>,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    Get {
        category: String,
        name: String,
    },
    Set {
        category: String,
        name: String,
        value: String,
    },
    /// Print every known setting with its effective value
    List,
}
