//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Balanced binary search trees from sorted sequences: build, measure, traverse
#[derive(Parser, Debug)]
#[command(name = "baltree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging, multiple occurrences increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree and print its depth and in-order sequence
    Show {
        /// Sorted ascending values
        values: Vec<i64>,
    },

    /// Print the depth of the built tree
    Depth {
        /// Sorted ascending values
        values: Vec<i64>,
    },

    /// Print the in-order sequence of the built tree
    Inorder {
        /// Sorted ascending values
        values: Vec<i64>,
    },

    /// Render the built tree as an ASCII diagram
    Tree {
        /// Sorted ascending values
        values: Vec<i64>,
    },
}
