//! Reading and writing suites in the harness input format
//!
//! ```text
//! <t>
//!
//! <n> <alpha>
//! <a_1> ... <a_n>
//! <b_1> ... <b_n>
//!
//! ...
//! ```
//!
//! The writer streams one case at a time from a [`TestCaseGenerator`], so the
//! whole suite is never held in memory. The reader mirrors how the harness
//! scans the file: it only cares about whitespace-separated tokens.

use crate::constants::{MAX_N, MAX_TEST_CASES, MIN_N};
use crate::error::{GenError, Result};
use crate::generator::TestCaseGenerator;
use crate::testcase::{TestCase, TestSuite};
use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write the count header: the count followed by a blank line
pub fn write_header<W: Write>(writer: &mut W, count: usize) -> io::Result<()> {
    write!(writer, "{}\n\n", count)
}

/// Write one test-case block, including its trailing blank line
pub fn write_case<W: Write>(writer: &mut W, case: &TestCase) -> io::Result<()> {
    writeln!(writer, "{} {}", case.size, case.alpha)?;
    write_values(writer, &case.vector_a)?;
    write_values(writer, &case.vector_b)?;
    writeln!(writer)
}

fn write_values<W: Write>(writer: &mut W, values: &[i16]) -> io::Result<()> {
    let mut iter = values.iter();
    if let Some(first) = iter.next() {
        write!(writer, "{}", first)?;
        for value in iter {
            write!(writer, " {}", value)?;
        }
    }
    writeln!(writer)
}

/// Write an in-memory suite
pub fn write_suite<W: Write>(writer: &mut W, suite: &TestSuite) -> io::Result<()> {
    write_header(writer, suite.len())?;
    for case in suite {
        write_case(writer, case)?;
    }
    Ok(())
}

/// Generate `count` cases and stream them to `writer`
pub fn generate_to_writer<W: Write, R: Rng>(
    generator: &mut TestCaseGenerator<R>,
    count: usize,
    writer: &mut W,
) -> io::Result<()> {
    write_header(writer, count)?;
    for _ in 0..count {
        let case = generator.next_case();
        write_case(writer, &case)?;
    }
    writer.flush()
}

/// Generate `count` cases into the file at `path`, truncating it first
///
/// A single buffered handle is held for the whole suite. If a write fails the
/// partially written file is left in place.
pub fn generate_file<P: AsRef<Path>, R: Rng>(
    generator: &mut TestCaseGenerator<R>,
    count: usize,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| GenError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    generate_to_writer(generator, count, &mut writer).map_err(|e| GenError::io(path, e))
}

/// Read a suite from the file at `path`
pub fn read_suite<P: AsRef<Path>>(path: P) -> Result<TestSuite> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| GenError::io(path, e))?;
    parse_suite(BufReader::new(file)).map_err(|e| match e {
        GenError::Io { source, .. } => GenError::io(path, source),
        other => other,
    })
}

/// Parse a suite from any buffered reader
///
/// Line numbers in errors are 1-based and point at the line holding the
/// offending token (or the last line read, for a premature end of input).
pub fn parse_suite<R: BufRead>(reader: R) -> Result<TestSuite> {
    let mut tokens = Tokens::new(reader);

    let count = tokens.next_count()?;
    let mut cases = Vec::with_capacity(count.min(1024));

    for index in 0..count {
        let (line, size) = tokens.next_token()?.ok_or_else(|| {
            GenError::parse(
                tokens.line,
                format!("expected {} test cases, found {}", count, index),
            )
        })?;
        let size: usize = size
            .parse()
            .map_err(|_| GenError::parse(line, format!("invalid vector length '{}'", size)))?;
        if !(MIN_N..=MAX_N).contains(&size) {
            return Err(GenError::parse(
                line,
                format!("vector length {} outside [{}, {}]", size, MIN_N, MAX_N),
            ));
        }

        let alpha = tokens.next_i16("alpha")?;
        let vector_a = tokens.next_vector(size, "vector a")?;
        let vector_b = tokens.next_vector(size, "vector b")?;

        cases.push(TestCase {
            size,
            alpha,
            vector_a,
            vector_b,
        });
    }

    if let Some((line, extra)) = tokens.next_token()? {
        return Err(GenError::parse(
            line,
            format!("unexpected token '{}' after the last test case", extra),
        ));
    }

    Ok(TestSuite::new(cases))
}

/// Whitespace tokenizer that remembers which line each token came from
struct Tokens<R> {
    reader: R,
    buf: String,
    pending: Vec<String>,
    line: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            pending: Vec::new(),
            line: 0,
        }
    }

    fn next_token(&mut self) -> Result<Option<(usize, String)>> {
        while self.pending.is_empty() {
            self.buf.clear();
            let n = self
                .reader
                .read_line(&mut self.buf)
                .map_err(|e| GenError::io("<reader>", e))?;
            if n == 0 {
                return Ok(None);
            }
            self.line += 1;
            // Stored reversed so tokens can be popped in order
            self.pending = self.buf.split_whitespace().rev().map(str::to_string).collect();
        }
        Ok(self.pending.pop().map(|token| (self.line, token)))
    }

    fn expect_token(&mut self, what: &str) -> Result<(usize, String)> {
        self.next_token()?.ok_or_else(|| {
            GenError::parse(
                self.line,
                format!("unexpected end of input, expected {}", what),
            )
        })
    }

    fn next_count(&mut self) -> Result<usize> {
        let (line, token) = self.expect_token("test-case count")?;
        let count: usize = token
            .parse()
            .map_err(|_| GenError::parse(line, format!("invalid test-case count '{}'", token)))?;
        if count > MAX_TEST_CASES {
            return Err(GenError::parse(
                line,
                format!("test-case count {} exceeds {}", count, MAX_TEST_CASES),
            ));
        }
        Ok(count)
    }

    fn next_i16(&mut self, what: &str) -> Result<i16> {
        let (line, token) = self.expect_token(what)?;
        token.parse().map_err(|_| {
            GenError::parse(line, format!("{} '{}' is not a 16-bit integer", what, token))
        })
    }

    fn next_vector(&mut self, len: usize, what: &str) -> Result<Vec<i16>> {
        (0..len).map(|_| self.next_i16(what)).collect()
    }
}
