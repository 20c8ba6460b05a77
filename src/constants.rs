//! Centralized constants for the Q15 AXPY test-case generator
//!
//! Every bound the generator, the suite reader and the reference kernel rely on
//! lives here. Several of them mirror constants compiled into the consuming
//! benchmark harness and must be kept in sync with it by hand.

// ============================================================================
// HARNESS LIMITS
// ============================================================================

/// Maximum vector length accepted by the harness (`MAX_N` in its driver).
///
/// The harness keeps its vectors in static buffers of this length, so no
/// generated case may exceed it.
pub const MAX_N: usize = 16384;

/// Smallest vector length a generated case may have
pub const MIN_N: usize = 1;

/// Largest test-case count the harness can read (its counter is an `int16_t`)
pub const MAX_TEST_CASES: usize = i16::MAX as usize;

// ============================================================================
// Q15 VALUE RANGE
// ============================================================================

/// Smallest representable Q15 value
pub const Q15_MIN: i16 = i16::MIN;

/// Largest representable Q15 value
pub const Q15_MAX: i16 = i16::MAX;

// ============================================================================
// FILE NAMES
// ============================================================================

/// File the harness reads its inputs from
pub const DEFAULT_INPUT_FILE: &str = "input.txt";

/// File the harness (and `q15-reference`) writes its outputs to
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

// ============================================================================
// BENCHMARKING CONSTANTS
// ============================================================================

/// Benchmark sample size
pub const BENCH_SAMPLES: usize = 10;

/// Benchmark measurement time in seconds
pub const BENCH_TIME_SECS: u64 = 5;
