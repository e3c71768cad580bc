//! # mvt CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Merkle Verification Toolkit CLI.
///
/// Builds Merkle trees over hex digest lists, generates inclusion proofs,
/// verifies proofs against roots, and checks address-allowlist membership.
#[derive(Parser, Debug)]
#[command(name = "mvt", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Compute the Merkle root of a leaf list.
    Root(mvt_cli::root::RootArgs),
    /// Print all tree levels as JSON.
    Tree(mvt_cli::tree::TreeArgs),
    /// Generate an inclusion proof for a target digest.
    Prove(mvt_cli::prove::ProveArgs),
    /// Recompute a proof's root, optionally comparing to an expected root.
    Verify(mvt_cli::verify::VerifyArgs),
    /// Check an address against an allowlist, with proof.
    Check(mvt_cli::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Root(args) => mvt_cli::root::run(args),
        Commands::Tree(args) => mvt_cli::tree::run(args),
        Commands::Prove(args) => mvt_cli::prove::run(args),
        Commands::Verify(args) => mvt_cli::verify::run(args),
        Commands::Check(args) => mvt_cli::check::run(args),
    }
}
