//! Diagnostic logging
//!
//! Logs go to stderr through a `tracing` fmt subscriber so stdout carries
//! nothing but the JSON document. `RUST_LOG` overrides the level picked from
//! `--verbose` / `--quiet`.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity flags
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (true, _) => "dirjson=debug",
        (false, true) => "dirjson=error",
        (false, false) => "dirjson=warn",
    }
}

/// Install the global subscriber
pub fn init(verbose: bool, quiet: bool, no_color: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, false), "dirjson=warn");
        assert_eq!(default_directive(true, false), "dirjson=debug");
        assert_eq!(default_directive(false, true), "dirjson=error");
        // verbose wins when both are given
        assert_eq!(default_directive(true, true), "dirjson=debug");
    }
}
