//! CLI definition

use clap::Parser;
use std::path::PathBuf;

/// Interactive scanner for C++ explicit-cast usage
#[derive(Parser, Debug)]
#[command(name = "castgrep")]
#[command(author, version)]
#[command(about = "Find and explore explicit C++ casts in a source tree")]
#[command(
    long_about = "Scans a directory tree for the four explicit-conversion \
operators (static_cast, dynamic_cast, const_cast, reinterpret_cast) and opens \
an interactive menu over the results: per-file summaries, detailed context \
for every occurrence, and search by cast type.\n\n\
Matching is textual and line-oriented. Casts in comments and string literals \
are reported too; this is a heuristic occurrence-finder, not a parser."
)]
pub struct Cli {
    /// Directory to scan (prompted for when omitted)
    pub root: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_optional() {
        let cli = Cli::parse_from(["castgrep"]);
        assert!(cli.root.is_none());

        let cli = Cli::parse_from(["castgrep", "src/"]);
        assert_eq!(cli.root, Some(PathBuf::from("src/")));
    }
}
