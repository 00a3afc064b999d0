//! CLI definitions and command routing.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::{HostsConfig, DEFAULT_HOSTS_PATH};
use crate::error::HostsError;
use crate::hosts::HostLines;
use crate::managed::Codec;

#[derive(Parser)]
#[command(name = "hosts")]
#[command(about = "Block and unblock hostnames managed in the hosts file")]
pub struct Cli {
    /// Hosts file to operate on
    #[arg(long, default_value = DEFAULT_HOSTS_PATH)]
    pub file: PathBuf,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command (block, unblock, or nothing to list managed hosts) followed by
    /// filters; an entry is touched if one of its hostnames contains a filter.
    /// Everything after the command is a filter, even if it starts with `-`.
    #[arg(
        value_name = "COMMAND [FILTER]...",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Split positional args into command and filters.
    pub fn command(&self) -> (Option<&str>, &[String]) {
        match self.args.split_first() {
            Some((cmd, filters)) => (Some(cmd.as_str()), filters),
            None => (None, &[][..]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Report,
    Block,
    Unblock,
}

impl Command {
    /// Parse the first positional argument; a missing command means report.
    pub fn parse(cmd: Option<&str>) -> Result<Self, HostsError> {
        match cmd {
            None | Some("") => Ok(Self::Report),
            Some("block") => Ok(Self::Block),
            Some("unblock") => Ok(Self::Unblock),
            Some(other) => Err(HostsError::UnknownCommand(other.to_string())),
        }
    }

    fn blocked(self) -> Option<bool> {
        match self {
            Self::Report => None,
            Self::Block => Some(true),
            Self::Unblock => Some(false),
        }
    }
}

/// Run CLI and dispatch.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = HostsConfig::from_path(&cli.file);
    let (command, filters) = cli.command();
    let stdout = std::io::stdout();
    execute(&config, command, filters, stdout.lock())
}

/// Load the hosts file, apply `command`, save if it changed state, and
/// write the report to `out`.
pub fn execute<W: Write>(
    config: &HostsConfig,
    command: Option<&str>,
    filters: &[String],
    mut out: W,
) -> Result<()> {
    let codec = Codec::new(config)?;
    let mut lines = HostLines::load(config)?;

    if let Some(blocked) = Command::parse(command)?.blocked() {
        let n = lines.set_blocked(&codec, blocked, filters);
        tracing::info!(blocked, matched = n, "updating hosts file");
        lines.save(config)?;
    }

    lines
        .write_report(&codec, &mut out)
        .context("write report")?;
    out.flush().context("write report")?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
