//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Mind-map node inspector: completeness glyphs, descendants and node views
#[derive(Parser, Debug)]
#[command(name = "mapnode")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file (default: ~/.config/mapnode/mapnode.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show completeness glyph of every node as tree
    Check {
        /// Map snapshot (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Exit 0 even if the root glyph is not full
        #[arg(long)]
        no_fail: bool,
    },

    /// List nodes missing title or content
    Incomplete {
        /// Map snapshot (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List descendants of a node in pre-order
    Descendants {
        /// Map snapshot (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Node id (default: root)
        #[arg(long)]
        id: Option<u64>,
    },

    /// Print the view model of a node as JSON
    View {
        /// Map snapshot (.json or .toml)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Node id
        #[arg(long)]
        id: u64,
        /// Node is centered (adds transition)
        #[arg(long)]
        centered: bool,
        /// Node is being dragged
        #[arg(long)]
        dragging: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print config template
    Template,
    /// Show config file location
    Path,
}
