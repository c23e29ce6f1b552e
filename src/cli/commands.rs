use itertools::Itertools;
use tracing::{debug, instrument};

use crate::builder::build_tree;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::display::TreeRender;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show { values }) => _show(values),
        Some(Commands::Depth { values }) => _depth(values),
        Some(Commands::Inorder { values }) => _inorder(values),
        Some(Commands::Tree { values }) => _tree(values),
        None => Ok(()),
    }
}

/// Warn when input breaks the sorted-ascending precondition. The build
/// itself never validates; the resulting tree is balanced but not a BST.
fn warn_if_unsorted(values: &[i64]) {
    let sorted = values.iter().tuple_windows().all(|(a, b)| a <= b);
    if !sorted {
        output::warning("input is not sorted ascending, tree will not satisfy BST ordering");
    }
}

#[instrument]
fn _show(values: &[i64]) -> CliResult<()> {
    debug!("values: {:?}", values);
    warn_if_unsorted(values);
    let tree = build_tree(values);
    let depth = tree.as_ref().map_or(0, |t| t.depth());
    output::info(&format!("Depth: {}", depth));
    let inorder = tree.as_ref().map_or(String::new(), |t| t.inorder().join(", "));
    output::info(&format!("In-order: [{}]", inorder));
    Ok(())
}

#[instrument]
fn _depth(values: &[i64]) -> CliResult<()> {
    debug!("values: {:?}", values);
    warn_if_unsorted(values);
    let depth = build_tree(values).map_or(0, |t| t.depth());
    output::info(&format!("Depth: {}", depth));
    Ok(())
}

#[instrument]
fn _inorder(values: &[i64]) -> CliResult<()> {
    debug!("values: {:?}", values);
    warn_if_unsorted(values);
    let inorder = build_tree(values).map_or(String::new(), |t| t.inorder().join(", "));
    output::info(&format!("In-order: [{}]", inorder));
    Ok(())
}

#[instrument]
fn _tree(values: &[i64]) -> CliResult<()> {
    debug!("values: {:?}", values);
    warn_if_unsorted(values);
    let tree = build_tree(values)
        .ok_or_else(|| CliError::Usage("cannot render an empty tree, provide values".to_string()))?;
    print!("{}", tree.to_tree_string());
    Ok(())
}
