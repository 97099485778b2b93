//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use mogit_wardrobe_lib::ArmorType;

#[derive(Parser)]
#[command(name = "mogit-wardrobe")]
#[command(about = "Generate MogIt wardrobe set data from Wowhead listings", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fetch set listings and write one Lua data file per category
    Generate(GenerateArgs),

    /// List the categories and the listing URLs they are built from
    List,

    /// Show or change saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Clone, Default)]
pub(crate) struct GenerateArgs {
    /// Output directory (default: settings file, then ./MogIt_Wardrobe)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Categories to generate (e.g., cloth,plate); all when omitted
    #[arg(short, long, value_delimiter = ',')]
    pub categories: Option<Vec<ArmorType>>,

    /// Fetch and report counts without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// User-Agent header to send instead of the built-in browser string
    #[arg(long)]
    pub user_agent: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where each value comes from
    Show,

    /// Print the settings file path
    Path,

    /// Save the default output directory (clears it when DIR is omitted)
    SetOutput {
        /// Directory to write data files to
        dir: Option<PathBuf>,
    },
}
