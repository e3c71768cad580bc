//! # Prove Subcommand
//!
//! Generates an inclusion proof for a target digest and prints it as JSON.
//! An absent target is a command failure — the engine's `None` becomes a
//! nonzero exit with a clear message.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use mvt_merkle::generate_proof;

use crate::input;

/// Arguments for the prove subcommand.
#[derive(Args, Debug)]
pub struct ProveArgs {
    /// The leaf digest to prove inclusion of (exact match, case-sensitive).
    #[arg(long)]
    pub target: String,

    /// File with one leaf digest per line ("-" for stdin).
    #[arg(long)]
    pub leaves_file: Option<PathBuf>,

    /// Inline leaf digest; repeatable, order significant.
    #[arg(long = "leaf")]
    pub leaves: Vec<String>,
}

/// Print the inclusion proof for the target as JSON.
pub fn run(args: ProveArgs) -> Result<()> {
    let leaves = input::read_values(args.leaves_file.as_deref(), &args.leaves, "leaf")?;
    tracing::debug!(count = leaves.len(), target = %args.target, "generating proof");
    match generate_proof(&args.target, &leaves) {
        Some(proof) => {
            println!("{}", serde_json::to_string_pretty(&proof)?);
            Ok(())
        }
        None => bail!("target digest not found in the leaf list"),
    }
}
