//! Random test-case generation
//!
//! The generator owns its random source, so callers decide how it is seeded:
//! the CLI seeds from OS entropy on every run, tests pass a fixed seed.

use crate::config::GeneratorConfig;
use crate::constants::{Q15_MAX, Q15_MIN};
use crate::error::Result;
use crate::testcase::{TestCase, TestSuite};
use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws independent [`TestCase`] records
///
/// Sizes are uniform over `[config.min_size, config.max_size]`; the scalar and
/// every vector element are uniform over the full Q15 range.
pub struct TestCaseGenerator<R = ChaCha8Rng> {
    config: GeneratorConfig,
    size_dist: Uniform<usize>,
    value_dist: Uniform<i16>,
    rng: R,
}

impl TestCaseGenerator<ChaCha8Rng> {
    /// Create a generator seeded from operating-system entropy
    pub fn from_entropy(config: GeneratorConfig) -> Result<Self> {
        Self::new(config, ChaCha8Rng::from_entropy())
    }

    /// Create a generator with a fixed seed
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Result<Self> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> TestCaseGenerator<R> {
    /// Create a generator over an explicit random source
    ///
    /// Fails if the configured size range is empty or includes zero.
    pub fn new(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            size_dist: Uniform::new_inclusive(config.min_size, config.max_size),
            value_dist: Uniform::new_inclusive(Q15_MIN, Q15_MAX),
            config,
            rng,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draw one test case: size, then scalar, then vector A, then vector B
    pub fn next_case(&mut self) -> TestCase {
        let size = self.size_dist.sample(&mut self.rng);
        let alpha = self.value_dist.sample(&mut self.rng);
        let vector_a = self.draw_vector(size);
        let vector_b = self.draw_vector(size);

        TestCase {
            size,
            alpha,
            vector_a,
            vector_b,
        }
    }

    /// Draw `count` test cases into memory
    pub fn generate_suite(&mut self, count: usize) -> TestSuite {
        TestSuite::new((0..count).map(|_| self.next_case()).collect())
    }

    fn draw_vector(&mut self, len: usize) -> Vec<i16> {
        (&mut self.rng).sample_iter(&self.value_dist).take(len).collect()
    }
}

impl<R: Rng> Iterator for TestCaseGenerator<R> {
    type Item = TestCase;

    fn next(&mut self) -> Option<TestCase> {
        Some(self.next_case())
    }
}
