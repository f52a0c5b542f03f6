// SPDX-License-Identifier: Apache-2.0

//! Command-line JSON checker: streams a file or stdin through the
//! validator in fixed-size chunks and reports the verdict.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use tablejson::{Error, Validator};

#[derive(Parser)]
#[command(version, about = "Validate a JSON document from a file or stdin")]
struct Args {
    /// File to validate; reads stdin when absent
    file: Option<PathBuf>,

    /// Read buffer size in bytes
    #[arg(long, default_value_t = 8192)]
    chunk_size: usize,

    /// Maximum container nesting depth, 0 for unbounded
    #[arg(long, default_value_t = 0)]
    max_depth: usize,
}

struct Report {
    verdict: Result<usize, Error>,
    line: usize,
    column: usize,
}

fn run(args: &Args) -> io::Result<Report> {
    let mut input: Box<dyn Read> = match &args.file {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let mut validator = Validator::with_max_depth(args.max_depth);
    let mut buf = vec![0u8; args.chunk_size.max(1)];
    let verdict = loop {
        let n = input.read(&mut buf)?;
        if n == 0 {
            break validator.finish();
        }
        debug!("feeding {n} bytes");
        if let Err(err) = validator.validate_chunk(&buf[..n]) {
            break Err(err);
        }
    };
    Ok(Report {
        verdict,
        line: validator.line(),
        column: validator.column(),
    })
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(report) => match report.verdict {
            Ok(n) => {
                println!("valid ({n} bytes)");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!(
                    "invalid: {} at offset {} (line {}, column {})",
                    err.kind().message(),
                    err.offset(),
                    report.line,
                    report.column
                );
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("read failed: {err}");
            ExitCode::FAILURE
        }
    }
}
