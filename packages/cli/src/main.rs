//! fleetrun CLI - run a command across a fleet of hosts
//!
//! Hosts come from an SSH deployment configuration file (`--cfg`), a
//! literal comma-separated list (`--hosts`), or both. The command runs on
//! every host in order through the `ssh` transport, one host at a time,
//! with remote output streaming straight to the console.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use console::style;
use fleetrun_core::{ConfigError, Dispatcher, read_hosts};

/// Run a command across a fleet of hosts over SSH
#[derive(Parser)]
#[command(name = "fleetrun")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run a command across a fleet of hosts over SSH", long_about = None)]
struct Cli {
    /// Command to execute on each host
    #[arg(long)]
    cmd: String,

    /// Path to the SSH deployment configuration file
    #[arg(long)]
    cfg: Option<PathBuf>,

    /// Comma-separated list of hosts
    #[arg(long)]
    hosts: Option<String>,

    /// Increase verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let dispatcher = Dispatcher::new();

    if cli.verbose > 0 {
        eprintln!(
            "{} Transport: {}",
            style("[info]").cyan(),
            dispatcher.transport()
        );
    }

    // Config-derived hosts run first, literal hosts second; each source is
    // dispatched independently.
    if let Some(cfg) = &cli.cfg {
        let hosts = match read_hosts(cfg) {
            Ok(hosts) => hosts,
            Err(e) => {
                display_config_error(&e, cfg);
                std::process::exit(1);
            }
        };

        if !cli.quiet {
            println!(
                "Configuration read successfully from {}",
                style(cfg.display()).yellow()
            );
            println!("Hosts ({}) are ({})", hosts.len(), hosts.join(", "));
        }

        exec_all(&dispatcher, &hosts, &cli.cmd, cli.quiet);
    }

    if let Some(list) = &cli.hosts {
        let hosts = split_hosts(list);
        exec_all(&dispatcher, &hosts, &cli.cmd, cli.quiet);
    }

    if cli.cfg.is_none() && cli.hosts.is_none() {
        tracing::debug!("No --cfg or --hosts given; nothing to execute");
    }

    Ok(())
}

/// Split a literal `--hosts` value into host tokens
///
/// The value is trimmed as a whole, then split on commas. Individual
/// tokens keep their own whitespace; only config-derived hosts are
/// trimmed per field.
fn split_hosts(list: &str) -> Vec<String> {
    list.trim().split(',').map(String::from).collect()
}

/// Run the command on every host in list order, one child at a time
///
/// The child's exit status is not inspected. A spawn failure is reported
/// on stderr and the loop moves on to the next host.
fn exec_all(dispatcher: &Dispatcher, hosts: &[String], cmd: &str, quiet: bool) {
    for host in hosts {
        if !quiet {
            println!("Executing on {}", style(host).cyan().bold());
        }
        match dispatcher.run(host, cmd) {
            Ok(status) => tracing::debug!("{} finished with {}", host, status),
            Err(e) => eprintln!("{} {}", style("Error:").red().bold(), e),
        }
    }
}

/// Display a rich error message for a failed configuration read
fn display_config_error(err: &ConfigError, path: &Path) {
    eprintln!("{} Configuration error", style("Error:").red().bold());
    eprintln!();
    eprintln!("  {}", err);
    eprintln!();
    eprintln!("  Config file: {}", style(path.display()).yellow());
    if matches!(err, ConfigError::MalformedLine(_)) {
        eprintln!();
        eprintln!(
            "  {} Each data line needs exactly 5 comma-separated fields; the host goes second.",
            style("Tip:").cyan()
        );
    }
}
