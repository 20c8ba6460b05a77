//! Test-case records consumed by the Q15 AXPY harness

use crate::constants::{MAX_N, MIN_N};
use crate::error::Result;
use crate::kernel::q15_axpy_ref;

/// One benchmark input: a vector length, a scalar and two vectors
///
/// The harness computes `y[i] = sat_q15(alpha * a[i] + b[i])` for each case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Vector length `n`
    pub size: usize,

    /// Scalar multiplier
    pub alpha: i16,

    /// First operand (size: `size`)
    pub vector_a: Vec<i16>,

    /// Second operand (size: `size`)
    pub vector_b: Vec<i16>,
}

impl TestCase {
    /// Creates a test case from its vectors, taking the size from `vector_a`
    ///
    /// # Panics
    ///
    /// Panics if the two vectors differ in length.
    pub fn new(alpha: i16, vector_a: Vec<i16>, vector_b: Vec<i16>) -> Self {
        assert_eq!(
            vector_a.len(),
            vector_b.len(),
            "vector_a and vector_b must have the same length"
        );

        Self {
            size: vector_a.len(),
            alpha,
            vector_a,
            vector_b,
        }
    }

    /// Check the invariants the harness relies on
    pub fn is_valid(&self) -> bool {
        (MIN_N..=MAX_N).contains(&self.size)
            && self.vector_a.len() == self.size
            && self.vector_b.len() == self.size
    }

    /// Reference output of the harness kernel for this case
    pub fn expected_output(&self) -> Result<Vec<i16>> {
        q15_axpy_ref(&self.vector_a, &self.vector_b, self.alpha)
    }
}

/// An ordered collection of test cases, preceded by its count on disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSuite {
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(cases: Vec<TestCase>) -> Self {
        Self { cases }
    }

    /// Number of test cases (the header value)
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.cases.iter()
    }

    /// Total number of vector elements across all cases
    pub fn total_elements(&self) -> usize {
        self.cases.iter().map(|case| case.size).sum()
    }
}

impl<'a> IntoIterator for &'a TestSuite {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}
