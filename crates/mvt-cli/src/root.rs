//! # Root Subcommand
//!
//! Computes the Merkle root of a leaf list. Strict: an empty list is an
//! error, surfaced from the engine.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use mvt_merkle::build_root;

use crate::input;

/// Arguments for the root subcommand.
#[derive(Args, Debug)]
pub struct RootArgs {
    /// File with one leaf digest per line ("-" for stdin).
    #[arg(long)]
    pub leaves_file: Option<PathBuf>,

    /// Inline leaf digest; repeatable, order significant.
    #[arg(long = "leaf")]
    pub leaves: Vec<String>,
}

/// Print the Merkle root of the given leaves.
pub fn run(args: RootArgs) -> Result<()> {
    let leaves = input::read_values(args.leaves_file.as_deref(), &args.leaves, "leaf")?;
    tracing::debug!(count = leaves.len(), "computing merkle root");
    let root = build_root(&leaves)?;
    println!("{root}");
    Ok(())
}
