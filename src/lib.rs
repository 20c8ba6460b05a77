//! # q15-testgen: test inputs for the saturating Q15 AXPY benchmark
//!
//! The benchmark harness computes `y[i] = sat_q15(alpha * a[i] + b[i])` over
//! 16-bit signed vectors and checks a vectorized kernel against a scalar
//! reference. This crate produces its `input.txt`: a count header followed by
//! randomly sized, randomly filled test cases.
//!
//! ## Components
//!
//! 1. **Generation**: [`TestCaseGenerator`] owns a random source and draws
//!    one [`TestCase`] at a time.
//! 2. **Suite I/O**: [`generate_file`] streams cases to disk in the harness
//!    format; [`read_suite`] parses a file back the way the harness scans it.
//! 3. **Reference kernel**: [`q15_axpy_ref`] gives the expected output of a
//!    case.
//! 4. **Harness output**: [`write_expected_output`] writes the `output.txt` a
//!    correct harness produces; [`check_suite`] compares a real one against it.
//!
//! ## Usage
//!
//! ```
//! use q15_testgen::{GeneratorConfig, TestCaseGenerator, generate_to_writer, parse_suite};
//!
//! let mut gen = TestCaseGenerator::seeded(GeneratorConfig::with_max_n(8), 42).unwrap();
//! let mut out = Vec::new();
//! generate_to_writer(&mut gen, 3, &mut out).unwrap();
//!
//! let suite = parse_suite(out.as_slice()).unwrap();
//! assert_eq!(suite.len(), 3);
//! assert!(suite.iter().all(|case| case.is_valid()));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod harness;
pub mod kernel;
pub mod suite;
pub mod testcase;

// Re-export primary components
pub use config::{parse_count, GeneratorConfig};
pub use error::{GenError, Result};
pub use generator::TestCaseGenerator;
pub use harness::{
    check_case, check_suite, parse_harness_output, read_harness_output, write_expected_output,
    CaseReport, HarnessBlock,
};
pub use kernel::{q15_axpy_ref, saturate_q15};
pub use suite::{
    generate_file, generate_to_writer, parse_suite, read_suite, write_case, write_header,
    write_suite,
};
pub use testcase::{TestCase, TestSuite};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
