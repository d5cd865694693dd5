//! `hyperbyte` — Classifies the 256 byte values and renders the topology.
//!
//! **Subcommands:**
//! - `export` (default) — hierarchical CSV or nested JSON of all 256 records
//! - `explain <BYTE>` — record, ancestor chain, themes and relations of one byte
//! - `relation <LEFT> <RIGHT>` — relation label between two bytes
//! - `check` — structural audit of the taxonomy
//!
//! **Usage:**
//! ```
//! hyperbyte [-v...] [export [--format csv|json] [--output <path>] [--no-timestamp]]
//! hyperbyte explain 0x0f [--json]
//! hyperbyte relation 0x2b 0xb2
//! hyperbyte check
//! ```
//!
//! Bytes accept decimal, `0x` hex or `0b` binary. `RUST_LOG` overrides `-v`.
//! `check` exits non-zero if any audit check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::{ArgAction, Parser, Subcommand};
use hyperbyte::audit::{self, Severity};
use hyperbyte::explain::explain;
use hyperbyte::report::{self, ExportOptions, Format};
use hyperbyte::{classify_all, relation, Octet, Tree};
use log::LevelFilter;

/// Hyper-byte taxonomy tools.
#[derive(Parser)]
#[command(
    name = "hyperbyte",
    version,
    about = "Classify all 256 byte values into the hyper-byte convergence hierarchy"
)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Export the full topology (default).
    Export(ExportArgs),
    /// Explain a single byte.
    Explain {
        /// The byte (decimal, 0x hex or 0b binary).
        byte: Octet,
        /// Print the record and its subtree as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the relation from LEFT to RIGHT.
    Relation {
        /// Left byte.
        left: Octet,
        /// Right byte.
        right: Octet,
    },
    /// Audit the taxonomy invariants.
    Check,
}

#[derive(clap::Args, Default)]
struct ExportArgs {
    /// Output format.
    #[arg(long, default_value_t = Format::Csv)]
    format: Format,

    /// Write to a file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Omit the `Generated:` banner line.
    #[arg(long)]
    no_timestamp: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    let _ = builder.try_init();
}

fn build_tree() -> Result<Tree> {
    let records = classify_all().context("Failed to classify byte values")?;
    Ok(Tree::build(records))
}

fn export(args: &ExportArgs) -> Result<()> {
    let tree = build_tree()?;
    let options = if args.no_timestamp {
        ExportOptions::default()
    } else {
        ExportOptions::stamped(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            report::export(&tree, args.format, &options, BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("written: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            report::export(&tree, args.format, &options, BufWriter::new(stdout.lock()))
                .context("Failed to write report to standard output")?;
        }
    }
    Ok(())
}

fn explain_byte(byte: Octet, json: bool) -> Result<()> {
    let explanation = explain(byte).with_context(|| format!("Failed to explain {byte}"))?;
    if json {
        let tree = build_tree()?;
        let value = report::json::subtree_value(&tree, byte)?;
        let text = serde_json::to_string_pretty(&value)
            .context("Failed to serialize record to JSON")?;
        println!("{text}");
    } else {
        print!("{explanation}");
    }
    Ok(())
}

fn check() -> Result<()> {
    let tree = build_tree()?;
    let report = audit::run(&tree);

    println!("Hyper-byte Taxonomy Audit");
    println!("=========================");
    println!();

    let mut passed = 0usize;
    let mut failed = 0usize;

    for result in &report.results {
        let status = match result.severity {
            Severity::Pass => {
                passed += 1;
                "PASS"
            }
            Severity::Failure => {
                failed += 1;
                "FAIL"
            }
        };
        println!("[{status}] {}: {}", result.check, result.message);
        for detail in &result.details {
            println!("       {detail}");
        }
    }

    println!();
    println!("Summary: {passed} passed, {failed} failed");

    if failed > 0 {
        eprintln!("Audit FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Audit PASSED.");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        None => export(&ExportArgs::default()),
        Some(Command::Export(export_args)) => export(&export_args),
        Some(Command::Explain { byte, json }) => explain_byte(byte, json),
        Some(Command::Relation { left, right }) => {
            println!("{left} -> {right}: {}", relation(left, right));
            Ok(())
        }
        Some(Command::Check) => check(),
    }
}
