//! Command line front end: one report per input file, in argument
//! order. Labels are positional (first file is CDR1, fifth is CDR5)
//! regardless of the actual filenames. A file that cannot be opened
//! aborts the whole run with a diagnostic on stderr.

use aadist::report::write_report;
use aadist::SeqDistribution;
use std::env;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

/// Labels assigned to input files by argument position.
const CDR_LABELS: [&str; 5] = ["CDR1", "CDR2", "CDR3", "CDR4", "CDR5"];

fn main() -> ExitCode
{
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > CDR_LABELS.len() + 1
    {
        let program = args.first().map(String::as_str).unwrap_or("aadist");
        eprintln!(
            "Usage: {} <cdr1.txt> [<cdr2.txt> <cdr3.txt> <cdr4.txt> <cdr5.txt>]",
            program
        );
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for (filename, label) in args[1..].iter().zip(CDR_LABELS)
    {
        let dist = match SeqDistribution::from_path(Path::new(filename))
        {
            Ok(dist) => dist,
            Err(_) =>
            {
                eprintln!("Error: Could not open file {}", filename);
                return ExitCode::FAILURE;
            }
        };
        if write_report(&mut out, label, &dist)
            .and_then(|()| out.flush())
            .is_err()
        {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
