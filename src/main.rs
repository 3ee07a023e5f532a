//! calc-hash command-line entrypoint.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use calc_hash::report::HashReport;
use calc_hash::{
    check_file_with, digest_file_with, Digest, DigestEngine, DigestError, IntegrityStatus,
    CHUNK_SIZE,
};

const PROMPT: &str = "Enter file path: ";

/// CLI arguments for the digest tool.
#[derive(Parser, Debug)]
#[command(
    name = "calc-hash",
    version,
    about = "Compute the SHA-256 digest of a file",
    long_about = "Compute the SHA-256 digest of a file.\n\n\
        Prints `<hex>  <path>` (lowercase hex, sha256sum layout) on success, \
        `unchanged: <path>` or `modified: <path>` with --expect, \
        and one JSON report with --json."
)]
struct Args {
    /// File to hash (prompted for on stdin when omitted)
    path: Option<PathBuf>,

    /// Recorded digest to verify against (64 hex characters)
    #[arg(long, value_name = "HEX")]
    expect: Option<Digest>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Bytes read per chunk
    #[arg(
        long,
        value_name = "BYTES",
        default_value_t = CHUNK_SIZE as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    chunk_size: u32,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let path = match args.path {
        Some(path) => path,
        None => prompt_path()?,
    };
    let display = path.display().to_string();
    let engine = DigestEngine::default().with_chunk_size(args.chunk_size as usize);

    if let Some(expected) = args.expect {
        return match check_file_with(&engine, &path, &expected) {
            Ok(report) => {
                if args.json {
                    print_json(&HashReport::checked(&display, &report))?;
                } else {
                    println!("{}: {display}", report.status.as_str());
                }
                Ok(match report.status {
                    IntegrityStatus::Unchanged => ExitCode::SUCCESS,
                    IntegrityStatus::Modified => ExitCode::from(2),
                })
            }
            Err(err) => report_failure(&display, &err, args.json),
        };
    }

    match digest_file_with(&engine, &path) {
        Ok(computed) => {
            if args.json {
                print_json(&HashReport::computed(&display, &computed))?;
            } else {
                println!("{}  {display}", computed.digest);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => report_failure(&display, &err, args.json),
    }
}

/// Ask for a path on stdin and strip the trailing newline.
fn prompt_path() -> Result<PathBuf> {
    let mut stdout = io::stdout();
    write!(stdout, "{PROMPT}").context("write prompt")?;
    stdout.flush().context("flush prompt")?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read path from stdin")?;
    if read == 0 {
        return Err(anyhow!("no path given on stdin"));
    }
    let trimmed = line
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(&line);
    if trimmed.is_empty() {
        return Err(anyhow!("path is empty"));
    }
    Ok(PathBuf::from(trimmed))
}

/// Name the failed stage on stderr; never prints a hash line.
fn report_failure(display: &str, err: &DigestError, json: bool) -> Result<ExitCode> {
    if json {
        print_json(&HashReport::failed(display, err))?;
    }
    eprintln!("{} failed for {display}: {err}", err.stage());
    Ok(ExitCode::FAILURE)
}

fn print_json(report: &HashReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    println!("{json}");
    Ok(())
}
