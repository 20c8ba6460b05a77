//! Reference outputs and result checking for generated suites
//!
//! Reads a suite in the harness input format and runs the scalar reference
//! kernel on every case. By default it writes the `output.txt` a correct
//! harness would produce. With `--check` it instead compares a real harness
//! output file against the reference and reports PASS/FAIL per case.

use clap::Parser;
use q15_testgen::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use q15_testgen::{
    check_suite, read_harness_output, read_suite, write_expected_output, GenError, TestSuite,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "q15-reference",
    version,
    about = "Compute or check reference Q15 AXPY outputs for a generated suite"
)]
struct Cli {
    /// Suite to read
    #[arg(long, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Where to write the expected harness output
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Harness output file to verify instead of writing one
    #[arg(long, value_name = "HARNESS_OUTPUT")]
    check: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Returns whether every case passed
fn run(cli: &Cli) -> Result<bool, GenError> {
    let suite = read_suite(&cli.input)?;
    println!(
        "Read {} test cases ({} elements) from {}",
        suite.len(),
        suite.total_elements(),
        cli.input.display()
    );

    match &cli.check {
        Some(harness_output) => check_outputs(&suite, harness_output),
        None => {
            write_outputs(&suite, &cli.output)?;
            println!("Wrote expected harness output to {}", cli.output.display());
            Ok(true)
        }
    }
}

fn write_outputs(suite: &TestSuite, path: &Path) -> Result<(), GenError> {
    let file = File::create(path).map_err(|e| GenError::io(path, e))?;
    let mut out = BufWriter::new(file);

    write_expected_output(&mut out, suite).map_err(|e| match e {
        GenError::Io { source, .. } => GenError::io(path, source),
        other => other,
    })
}

fn check_outputs(suite: &TestSuite, harness_output: &Path) -> Result<bool, GenError> {
    let blocks = read_harness_output(harness_output)?;
    let reports = check_suite(suite, &blocks)?;

    for report in &reports {
        if report.passed {
            println!("Test Case {}: PASS", report.index);
        } else if report.reference_matches {
            println!("Test Case {}: FAIL (max diff {})", report.index, report.max_diff);
        } else {
            println!(
                "Test Case {}: FAIL (max diff {}, reference line differs)",
                report.index, report.max_diff
            );
        }
    }

    let failed = reports.iter().filter(|r| !r.passed).count();
    if failed == 0 {
        println!("All {} test cases passed", reports.len());
    } else {
        println!("{} of {} test cases failed", failed, reports.len());
    }
    Ok(failed == 0)
}
