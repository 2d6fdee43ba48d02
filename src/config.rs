//! Command line configuration for one-shot mode.

use crate::prober::parse_param_list;
use crate::types::Params;
use clap::{ArgGroup, CommandFactory, Parser, ValueEnum};
use std::io;

/// Web enumeration tool for ethical security testing.
#[derive(Parser, Debug, Clone)]
#[command(name = "webenum")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: webenum --headers --url https://example.com")]
#[command(group(
    ArgGroup::new("probe")
        .args(["headers", "status", "params"])
        .multiple(false)
))]
pub struct Config {
    /// Check headers of URL
    #[arg(long)]
    pub headers: bool,

    /// Check status of URL
    #[arg(long)]
    pub status: bool,

    /// Test parameters (comma-separated name=value pairs)
    #[arg(long, value_name = "PAIRS")]
    pub params: Option<String>,

    /// Target URL
    #[arg(long)]
    pub url: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Probe selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeKind {
    Headers,
    Status,
    Params(Params),
}

impl Config {
    /// The selected probe, if any. An empty `--params` selects nothing.
    pub fn probe(&self) -> Option<ProbeKind> {
        if self.headers {
            Some(ProbeKind::Headers)
        } else if self.status {
            Some(ProbeKind::Status)
        } else {
            match self.params.as_deref() {
                Some(list) if !list.is_empty() => Some(ProbeKind::Params(parse_param_list(list))),
                _ => None,
            }
        }
    }

    pub fn is_json(&self) -> bool {
        self.output == OutputFormat::Json
    }

    /// Write the help text, shown when no probe is selected.
    pub fn write_usage<W: io::Write>(out: &mut W) -> io::Result<()> {
        Config::command().write_help(out)?;
        out.flush()
    }
}
