//! # Tree Subcommand
//!
//! Prints every level of the Merkle tree as JSON, leaves first, root last.
//! Lenient: an empty leaf list prints an empty array.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use mvt_merkle::build_tree;

use crate::input;

/// Arguments for the tree subcommand.
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// File with one leaf digest per line ("-" for stdin).
    #[arg(long)]
    pub leaves_file: Option<PathBuf>,

    /// Inline leaf digest; repeatable, order significant.
    #[arg(long = "leaf")]
    pub leaves: Vec<String>,
}

/// Print all tree levels as a JSON array of arrays.
pub fn run(args: TreeArgs) -> Result<()> {
    let leaves = input::read_values(args.leaves_file.as_deref(), &args.leaves, "leaf")?;
    tracing::debug!(count = leaves.len(), "building merkle tree");
    let tree = build_tree(&leaves);
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}
