//! The harness's `output.txt`: writing the expected file and checking a real one
//!
//! For every case the harness writes its reference result and then its
//! vectorized result, each value followed by a space:
//!
//! ```text
//! Test Case: <k>
//! <yref_1> <yref_2> ... <yref_n>
//! <yrvv_1> <yrvv_2> ... <yrvv_n>
//!
//! ```
//!
//! A correct harness writes identical lines, so the expected file carries the
//! reference output on both lines and can be diffed against the harness's own.

use crate::error::{GenError, Result};
use crate::testcase::{TestCase, TestSuite};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

const BLOCK_PREFIX: &str = "Test Case:";

/// One `Test Case:` block of a harness output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessBlock {
    /// 1-based case number
    pub index: usize,
    /// Output of the harness's scalar reference
    pub reference: Vec<i16>,
    /// Output of the kernel under test
    pub target: Vec<i16>,
}

/// Outcome of checking one harness block against the reference kernel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub index: usize,
    /// Both lines match the expected output
    pub passed: bool,
    /// Whether the harness's own reference line matches
    pub reference_matches: bool,
    /// Largest absolute difference between the target line and the expected
    /// output, over the elements both have
    pub max_diff: i32,
}

/// Write the output a correct harness produces for `suite`
pub fn write_expected_output<W: Write>(writer: &mut W, suite: &TestSuite) -> Result<()> {
    for (i, case) in suite.iter().enumerate() {
        let expected = case.expected_output()?;
        write_block(writer, i + 1, &expected, &expected)
            .map_err(|e| GenError::io("<writer>", e))?;
    }
    writer.flush().map_err(|e| GenError::io("<writer>", e))
}

fn write_block<W: Write>(
    writer: &mut W,
    index: usize,
    reference: &[i16],
    target: &[i16],
) -> io::Result<()> {
    writeln!(writer, "{} {}", BLOCK_PREFIX, index)?;
    for line in [reference, target] {
        for value in line {
            write!(writer, "{} ", value)?;
        }
        writeln!(writer)?;
    }
    writeln!(writer)
}

/// Read a harness output file
pub fn read_harness_output<P: AsRef<Path>>(path: P) -> Result<Vec<HarnessBlock>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| GenError::io(path, e))?;
    parse_harness_output(BufReader::new(file)).map_err(|e| match e {
        GenError::Io { source, .. } => GenError::io(path, source),
        other => other,
    })
}

/// Parse harness output blocks; the k-th block must be numbered k
pub fn parse_harness_output<R: BufRead>(reader: R) -> Result<Vec<HarnessBlock>> {
    let mut lines = reader.lines().enumerate().map(|(i, line)| {
        line.map(|text| (i + 1, text))
            .map_err(|e| GenError::io("<reader>", e))
    });
    let mut blocks = Vec::new();

    while let Some(item) = lines.next() {
        let (line, text) = item?;
        if text.trim().is_empty() {
            continue;
        }

        let index = text
            .trim()
            .strip_prefix(BLOCK_PREFIX)
            .and_then(|rest| rest.trim().parse::<usize>().ok())
            .ok_or_else(|| {
                GenError::parse(line, format!("expected '{} <k>', got '{}'", BLOCK_PREFIX, text))
            })?;
        if index != blocks.len() + 1 {
            return Err(GenError::parse(
                line,
                format!("expected test case {}, got {}", blocks.len() + 1, index),
            ));
        }

        let mut next_values = |what: &str| -> Result<Vec<i16>> {
            let (line, text) = lines.next().transpose()?.ok_or_else(|| {
                GenError::parse(line, format!("test case {} has no {} line", index, what))
            })?;
            text.split_whitespace()
                .map(|token| {
                    token.parse().map_err(|_| {
                        GenError::parse(
                            line,
                            format!("{} value '{}' is not a 16-bit integer", what, token),
                        )
                    })
                })
                .collect()
        };
        let reference = next_values("reference")?;
        let target = next_values("target")?;

        blocks.push(HarnessBlock {
            index,
            reference,
            target,
        });
    }

    Ok(blocks)
}

/// Compare one harness block with the reference kernel's output for `case`
pub fn check_case(case: &TestCase, block: &HarnessBlock) -> Result<CaseReport> {
    let expected = case.expected_output()?;

    let max_diff = expected
        .iter()
        .zip(&block.target)
        .map(|(&e, &t)| (e as i32 - t as i32).abs())
        .max()
        .unwrap_or(0);
    let reference_matches = block.reference == expected;

    Ok(CaseReport {
        index: block.index,
        passed: reference_matches && block.target == expected,
        reference_matches,
        max_diff,
    })
}

/// Check every block of a harness run against its input suite
pub fn check_suite(suite: &TestSuite, blocks: &[HarnessBlock]) -> Result<Vec<CaseReport>> {
    if blocks.len() != suite.len() {
        return Err(GenError::CaseCountMismatch {
            expected: suite.len(),
            found: blocks.len(),
        });
    }

    suite
        .iter()
        .zip(blocks)
        .map(|(case, block)| check_case(case, block))
        .collect()
}
