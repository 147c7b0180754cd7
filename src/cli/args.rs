//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueHint};

/// Orthonormal ILR bases for the Aitchison simplex from bifurcating trees
#[derive(Parser, Debug)]
#[command(name = "phylobasis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d: info, -d -d: debug, -d -d -d: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the ILR basis vector of every internal node
    Basis {
        /// Newick tree: a file path or a literal string like "(x,y)z;"
        #[arg(value_hint = ValueHint::FilePath)]
        tree: String,
    },

    /// Render the parsed tree
    Tree {
        /// Newick tree: a file path or a literal string
        #[arg(value_hint = ValueHint::FilePath)]
        tree: String,
    },

    /// Print leaf names in tree order
    Leaves {
        /// Newick tree: a file path or a literal string
        #[arg(value_hint = ValueHint::FilePath)]
        tree: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
