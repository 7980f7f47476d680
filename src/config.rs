//! Command line configuration.

use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

/// Marker for reading input from standard input.
const STDIN: &str = "-";

/// Command line configuration for Chatmark.
#[derive(Debug, Clone, Parser)]
#[command(name = "chatmark", version, about, long_about = None)]
pub struct Config {
    /// Markdown file, or JSON transcript with --transcript ("-" reads stdin)
    #[arg(default_value = STDIN)]
    pub input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat input as a JSON array of {role, text} messages
    #[arg(long)]
    pub transcript: bool,

    /// Wrap the rendered message in a standalone HTML page
    #[arg(long)]
    pub page: bool,

    /// Page title
    #[arg(long, default_value = "Chat")]
    pub title: String,

    /// Open the generated file in the default browser
    #[arg(long)]
    pub open: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist or `--open` is given
    /// without an output file.
    pub fn validate(&self) -> Result<()> {
        if !self.reads_stdin() && !self.input.exists() {
            bail!("Input path does not exist: {}", self.input.display());
        }

        if self.open && self.output.is_none() {
            bail!("--open requires --output");
        }

        Ok(())
    }

    /// Returns true when input comes from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new(STDIN)
    }

    /// Returns true when output is a full HTML document.
    pub fn wants_page(&self) -> bool {
        self.page || self.transcript
    }
}
