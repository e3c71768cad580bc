//! # Check Subcommand
//!
//! The verification form as a CLI: given an allowlist of raw addresses and
//! one address to check, hash every entry into a leaf digest, build the
//! root, and report membership. A member gets its inclusion proof and the
//! proof's verification against the root in the same report.
//!
//! Addresses are lowercased before hashing, preserving the legacy page's
//! case-insensitive membership. That normalization lives here — the engine
//! below compares exact strings only.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use mvt_core::leaf_hash;
use mvt_merkle::{build_root, generate_proof, verify_proof};

use crate::input;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// The address to check membership of.
    pub address: String,

    /// File with one allowlisted address per line ("-" for stdin).
    #[arg(long)]
    pub addresses_file: Option<PathBuf>,

    /// Inline allowlisted address; repeatable, order significant.
    #[arg(long = "entry")]
    pub entries: Vec<String>,
}

/// Run the membership check and print the JSON report.
pub fn run(args: CheckArgs) -> Result<()> {
    let entries = input::read_values(args.addresses_file.as_deref(), &args.entries, "address")?;
    tracing::debug!(count = entries.len(), address = %args.address, "checking membership");
    let report = check_address(&args.address, &entries)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Build the membership report for `address` against the allowlist.
///
/// Hashes lowercased entries into leaves, computes the root, and proves
/// inclusion when the address is present.
pub fn check_address(address: &str, entries: &[String]) -> Result<serde_json::Value> {
    let leaves: Vec<String> = entries
        .iter()
        .map(|entry| leaf_hash(&entry.to_lowercase()))
        .collect();
    let root = build_root(&leaves)?;
    let digest = leaf_hash(&address.to_lowercase());

    let report = match generate_proof(&digest, &leaves) {
        Some(proof) => serde_json::json!({
            "address": address,
            "digest": digest,
            "root": root,
            "member": true,
            "verified": verify_proof(&proof, &root),
            "proof": proof,
        }),
        None => serde_json::json!({
            "address": address,
            "digest": digest,
            "root": root,
            "member": false,
        }),
    };
    Ok(report)
}
