use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::domain::basis::phylogenetic_basis;
use crate::domain::display::TreeRender;
use crate::domain::newick;

pub fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Basis { tree }) => _basis(tree),
        Some(Commands::Tree { tree }) => _tree(tree),
        Some(Commands::Leaves { tree }) => _leaves(tree),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Reads the tree description from a file when the argument is an existing
/// path, otherwise treats the argument itself as a Newick string.
#[instrument]
pub fn read_tree_source(source: &str) -> Result<String> {
    let path = Path::new(source);
    if path.is_file() {
        fs::read_to_string(path).with_context(|| format!("cannot read tree file: {source}"))
    } else {
        Ok(source.to_string())
    }
}

#[instrument]
fn _basis(source: &str) -> Result<()> {
    let text = read_tree_source(source)?;
    let tree = newick::parse(&text)?;
    let basis = phylogenetic_basis(&tree)?;
    debug!("basis entries: {}", basis.len());

    for (name, vector) in &basis {
        let coords = vector.iter().map(|v| format!("{v:.8}")).join(", ");
        println!("{name}: [{coords}]");
    }
    Ok(())
}

#[instrument]
fn _tree(source: &str) -> Result<()> {
    let text = read_tree_source(source)?;
    let tree = newick::parse(&text)?;
    println!("{}", tree.to_tree_string());
    Ok(())
}

#[instrument]
fn _leaves(source: &str) -> Result<()> {
    let text = read_tree_source(source)?;
    let tree = newick::parse(&text)?;
    for leaf in tree.leaf_names() {
        println!("{leaf}");
    }
    Ok(())
}
