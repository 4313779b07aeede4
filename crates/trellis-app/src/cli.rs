use std::path::PathBuf;

use clap::Parser;

/// Trellis: a tiling window of web panes.
#[derive(Parser, Debug)]
#[command(name = "trellis", version, about)]
pub struct Args {
    /// Page or search text to open in the active pane after restore.
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Session file path override.
    #[arg(long)]
    pub session: Option<PathBuf>,

    /// Ignore the saved session and start with a single pane.
    #[arg(long)]
    pub fresh: bool,

    /// Log filter override (trace, debug, info, warn, error, or a directive).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
