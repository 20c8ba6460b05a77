use clap::Parser;
use q15_testgen::{generate_file, parse_count, GeneratorConfig, TestCaseGenerator};
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "q15-testgen",
    version,
    about = "Generate random input.txt test cases for the Q15 AXPY harness"
)]
struct Cli {
    /// Number of test cases to generate
    #[arg(value_parser = parse_count)]
    count: usize,
}

fn main() {
    // Usage errors exit here, before the output file is touched
    let cli = Cli::parse();
    let config = GeneratorConfig::default();
    let path = config.output_path.clone();

    let result = TestCaseGenerator::from_entropy(config)
        .and_then(|mut gen| generate_file(&mut gen, cli.count, &path));

    match result {
        Ok(()) => println!("Wrote {} test cases to {}", cli.count, path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
