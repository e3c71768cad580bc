//! # Input Parsing
//!
//! Leaf lists and proofs arrive from files, stdin (`-`), or repeated inline
//! flags. Line-based lists ignore blank lines and surrounding whitespace;
//! everything between stays exactly as written — the engine compares
//! digests byte for byte.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

use mvt_merkle::Proof;

/// Read an ordered value list from a file (`-` for stdin) or inline flags.
///
/// Exactly one source must be provided. `what` names the value kind in
/// error messages ("leaf", "address").
pub fn read_values(file: Option<&Path>, inline: &[String], what: &str) -> Result<Vec<String>> {
    match (file, inline.is_empty()) {
        (Some(_), false) => bail!("pass a {what} file or inline {what} flags, not both"),
        (Some(path), true) => Ok(parse_lines(&read_to_string(path)?)),
        (None, false) => Ok(inline.to_vec()),
        (None, true) => bail!("no {what} list given"),
    }
}

/// Read and deserialize a proof JSON document (`-` for stdin).
pub fn read_proof(path: &Path) -> Result<Proof> {
    let text = read_to_string(path)?;
    serde_json::from_str(&text).context("parsing proof JSON")
}

fn read_to_string(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

/// Split line-based input into an ordered value list. Blank lines and
/// surrounding whitespace are dropped; order is preserved.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
