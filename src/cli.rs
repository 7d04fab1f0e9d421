//! Command-line parsing and dispatch.
//!
//! Kept out of `main.rs` so the commands can be tested.

use crate::config::{Config, OutputFormat};
use crate::input::read_cidr_file;
use crate::models::{AddressFamily, Cidr, IpCidr};
use crate::output::print_blocks;
use crate::processing::relation::family_mismatch;
use crate::processing::{
    collapse_nested, find_overlaps, free_blocks, log_overlaps, OverlapConflict,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::error::Error;
use std::path::PathBuf;

const NO_CONFLICTS: &str = "No overlapping CIDR blocks found.";

/// Overlap, subnet and exclusion relations between CIDR blocks.
///
/// Environment: CIDR_OUTPUT=csv|json, CIDR_LOG_CONFIG=<log4rs.yml>,
/// CIDR_LOG_LEVEL=<level>.
#[derive(Parser, Debug)]
#[command(name = "cidr-exclude")]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Output format, overrides CIDR_OUTPUT
    #[arg(short, long, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blocks covering NETWORK minus OTHER, largest first
    Exclude { network: IpCidr, other: IpCidr },
    /// Print true if the two blocks share any address
    Overlaps { a: IpCidr, b: IpCidr },
    /// Print true if A lies inside B
    SubnetOf { a: IpCidr, b: IpCidr },
    /// Free blocks of PARENT after the USED blocks
    Free {
        parent: IpCidr,
        used: Vec<IpCidr>,
        /// Read more used blocks from a JSON or text file
        #[arg(long)]
        file: Vec<PathBuf>,
    },
    /// Duplicated and nested blocks in a list
    Conflicts {
        blocks: Vec<IpCidr>,
        /// Read more blocks from a JSON or text file
        #[arg(long)]
        file: Vec<PathBuf>,
    },
    /// The list without duplicated or nested blocks
    Collapse {
        blocks: Vec<IpCidr>,
        /// Read more blocks from a JSON or text file
        #[arg(long)]
        file: Vec<PathBuf>,
    },
}

/// Result of executing a [`Command`], before printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answer(bool),
    Blocks(Vec<IpCidr>),
    Conflicts(Vec<OverlapConflict>),
}

/// Blocks given inline followed by the contents of each file.
fn block_list(inline: &[IpCidr], files: &[PathBuf]) -> Result<Vec<IpCidr>, Box<dyn Error>> {
    let mut blocks = inline.to_vec();
    for path in files {
        blocks.extend(read_cidr_file(path)?);
    }
    Ok(blocks)
}

/// Pull the blocks of `parent`'s family out of `blocks`.
///
/// Any block of another family is an error.
fn same_family<F, X>(
    parent: &IpCidr,
    blocks: &[IpCidr],
    extract: X,
) -> Result<Vec<Cidr<F>>, Box<dyn Error>>
where
    F: AddressFamily,
    X: Fn(&IpCidr) -> Option<Cidr<F>>,
{
    blocks
        .iter()
        .map(|b| {
            extract(b).ok_or_else(|| -> Box<dyn Error> { family_mismatch(parent, b).into() })
        })
        .collect()
}

fn free_ip_blocks(parent: &IpCidr, used: &[IpCidr]) -> Result<Vec<IpCidr>, Box<dyn Error>> {
    let free: Vec<IpCidr> = match parent {
        IpCidr::V4(p) => {
            let used = same_family(parent, used, |b| match b {
                IpCidr::V4(c) => Some(*c),
                IpCidr::V6(_) => None,
            })?;
            free_blocks(p, &used)?.into_iter().map(IpCidr::V4).collect()
        }
        IpCidr::V6(p) => {
            let used = same_family(parent, used, |b| match b {
                IpCidr::V6(c) => Some(*c),
                IpCidr::V4(_) => None,
            })?;
            free_blocks(p, &used)?.into_iter().map(IpCidr::V6).collect()
        }
    };
    Ok(free)
}

/// Collapse each family separately, IPv4 first.
fn collapse_ip_blocks(blocks: &[IpCidr]) -> Vec<IpCidr> {
    let mut v4 = Vec::new();
    let mut v6 = Vec::new();
    for block in blocks {
        match block {
            IpCidr::V4(c) => v4.push(*c),
            IpCidr::V6(c) => v6.push(*c),
        }
    }
    collapse_nested(v4)
        .into_iter()
        .map(IpCidr::V4)
        .chain(collapse_nested(v6).into_iter().map(IpCidr::V6))
        .collect()
}

/// Execute a command without printing anything.
pub fn execute(command: &Command) -> Result<Outcome, Box<dyn Error>> {
    log::debug!("Executing {command:?}");
    let outcome = match command {
        Command::Exclude { network, other } => Outcome::Blocks(network.address_exclude(other)?),
        Command::Overlaps { a, b } => Outcome::Answer(a.overlaps(b)?),
        Command::SubnetOf { a, b } => Outcome::Answer(a.is_subnet_of(b)?),
        Command::Free { parent, used, file } => {
            let used = block_list(used, file)?;
            Outcome::Blocks(free_ip_blocks(parent, &used)?)
        }
        Command::Conflicts { blocks, file } => {
            let conflicts = find_overlaps(&block_list(blocks, file)?);
            log_overlaps(&conflicts);
            Outcome::Conflicts(conflicts)
        }
        Command::Collapse { blocks, file } => {
            Outcome::Blocks(collapse_ip_blocks(&block_list(blocks, file)?))
        }
    };
    Ok(outcome)
}

/// Plain text lines for a conflict report, one per conflict.
pub fn conflict_lines(conflicts: &[OverlapConflict]) -> Vec<String> {
    if conflicts.is_empty() {
        return vec![NO_CONFLICTS.to_string()];
    }
    conflicts
        .iter()
        .map(|conflict| format!("{} {conflict}", "conflict:".red()))
        .collect()
}

/// Execute the parsed command line and print its result to stdout.
///
/// `--output` wins over the configured format.
pub fn run(cli: &Cli, config: &Config) -> Result<(), Box<dyn Error>> {
    let output = cli.output.unwrap_or(config.output);
    match execute(&cli.command)? {
        Outcome::Answer(answer) => println!("{answer}"),
        Outcome::Blocks(blocks) => print_blocks(output, &blocks)?,
        Outcome::Conflicts(conflicts) => match output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&conflicts)?),
            OutputFormat::Csv => {
                for line in conflict_lines(&conflicts) {
                    println!("{line}");
                }
            }
        },
    }
    Ok(())
}
