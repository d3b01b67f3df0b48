//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hierarchical category taxonomy manager: sibling-unique names, bounded fan-out, cascading delete
#[derive(Parser, Debug)]
#[command(name = "taxo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d: info, -dd: debug, -ddd: trace)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Override snapshot file location
    #[arg(long, global = true, env = "TAXO_STORE_PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a category
    Add {
        /// Category name (unique among siblings)
        name: String,
        /// Parent category id (omit for a root category)
        #[arg(short, long)]
        parent: Option<String>,
    },

    /// List categories (flat index, or children of --parent)
    List {
        /// Parent category id
        #[arg(short, long)]
        parent: Option<String>,
    },

    /// Show a single category
    Show {
        /// Category id
        id: String,
    },

    /// Render the taxonomy as a tree
    Tree,

    /// Delete a category and its entire subtree
    Remove {
        /// Category id
        id: String,
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

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config and snapshot paths
    Path,
}
