//! Configuration for test-case generation

use crate::constants::{DEFAULT_INPUT_FILE, MAX_N, MAX_TEST_CASES, MIN_N};
use crate::error::{GenError, Result};
use std::path::PathBuf;

/// Configuration for a [`TestCaseGenerator`](crate::TestCaseGenerator)
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Smallest vector length to draw (inclusive)
    pub min_size: usize,

    /// Largest vector length to draw (inclusive)
    ///
    /// Must not exceed the `MAX_N` the harness was compiled with.
    pub max_size: usize,

    /// Where the suite is written
    pub output_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_N,
            max_size: MAX_N,
            output_path: PathBuf::from(DEFAULT_INPUT_FILE),
        }
    }
}

impl GeneratorConfig {
    /// Create a config for a harness compiled with a smaller `MAX_N`
    ///
    /// Lengths above [`MAX_N`] are rejected by [`validate`](Self::validate),
    /// since the suite reader would refuse the resulting files.
    pub fn with_max_n(max_n: usize) -> Self {
        Self {
            max_size: max_n,
            ..Self::default()
        }
    }

    /// Check that the size range is non-empty, excludes zero-length vectors
    /// and stays within [`MAX_N`]
    pub fn validate(&self) -> Result<()> {
        if self.min_size == 0 {
            return Err(GenError::InvalidConfig(
                "min_size must be at least 1".to_string(),
            ));
        }
        if self.min_size > self.max_size {
            return Err(GenError::InvalidConfig(format!(
                "min_size {} is larger than max_size {}",
                self.min_size, self.max_size
            )));
        }
        if self.max_size > MAX_N {
            return Err(GenError::InvalidConfig(format!(
                "max_size {} exceeds MAX_N {}",
                self.max_size, MAX_N
            )));
        }
        Ok(())
    }
}

/// Parse a test-case count from command-line text.
///
/// Negative counts and counts the harness cannot represent are rejected
/// instead of producing an empty or truncated suite.
pub fn parse_count(input: &str) -> Result<usize> {
    let invalid = |reason: String| GenError::InvalidCount {
        input: input.to_string(),
        reason,
    };

    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| invalid("not an integer".to_string()))?;

    if value < 0 {
        return Err(invalid("count must not be negative".to_string()));
    }
    if value > MAX_TEST_CASES as i64 {
        return Err(invalid(format!(
            "count must not exceed {}",
            MAX_TEST_CASES
        )));
    }

    Ok(value as usize)
}
