//! # Verify Subcommand
//!
//! Folds a proof back to its root. Without `--root` the recomputed root is
//! printed for the caller to compare; with `--root` the comparison happens
//! here and a mismatch is a command failure. Either way the tree is never
//! rebuilt — the proof alone carries everything needed.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use mvt_merkle::{fold_proof, verify_proof};

use crate::input;

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Proof JSON document ("-" for stdin).
    #[arg(long, default_value = "-")]
    pub proof_file: PathBuf,

    /// Expected root; compared exactly, no normalization.
    #[arg(long)]
    pub root: Option<String>,
}

/// Recompute the proof's root, optionally checking it against `--root`.
pub fn run(args: VerifyArgs) -> Result<()> {
    let proof = input::read_proof(&args.proof_file)?;
    tracing::debug!(steps = proof.len(), "folding proof");
    let recomputed = fold_proof(&proof);
    match args.root {
        Some(expected) => {
            if !verify_proof(&proof, &expected) {
                bail!("proof does not recompute the expected root: got {recomputed}, want {expected}");
            }
            println!("{recomputed}");
        }
        None => println!("{recomputed}"),
    }
    Ok(())
}
