//! Command-line interface

use clap::Parser;
use std::ffi::OsString;

/// CI validation script generator for YANG model repositories
#[derive(Debug, Parser, Clone)]
#[command(name = "modelci")]
#[command(author = "modelci Contributors")]
#[command(version)]
#[command(
    about = "Generates the pyang CI validation script for a model repository",
    long_about = None
)]
pub struct Cli {
    /// Path to the model repository to parse models from
    #[arg(short, long)]
    pub path: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
