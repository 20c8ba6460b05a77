//! Reference implementation of the saturating Q15 AXPY kernel
//!
//! This is the scalar kernel the harness verifies its vectorized version
//! against. It is kept here so generated suites can be paired with their
//! expected outputs without running the harness.

use crate::constants::{Q15_MAX, Q15_MIN};
use crate::error::{GenError, Result};

/// Saturate a widened product-sum back into the Q15 range
#[inline]
pub fn saturate_q15(value: i32) -> i16 {
    value.clamp(Q15_MIN as i32, Q15_MAX as i32) as i16
}

/// Computes `y[i] = sat_q15(alpha * a[i] + b[i])`
///
/// Intermediate products are computed in `i32`, which cannot overflow for
/// 16-bit operands.
///
/// # Examples
///
/// ```
/// use q15_testgen::q15_axpy_ref;
///
/// let y = q15_axpy_ref(&[100, 30000], &[5, 30000], 2).unwrap();
/// assert_eq!(y, vec![205, 32767]);
/// ```
pub fn q15_axpy_ref(a: &[i16], b: &[i16], alpha: i16) -> Result<Vec<i16>> {
    if a.len() != b.len() {
        return Err(GenError::LengthMismatch {
            a: a.len(),
            b: b.len(),
        });
    }

    let alpha = alpha as i32;
    Ok(a
        .iter()
        .zip(b)
        .map(|(&ai, &bi)| saturate_q15(alpha * ai as i32 + bi as i32))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturate_q15() {
        assert_eq!(saturate_q15(0), 0);
        assert_eq!(saturate_q15(32767), 32767);
        assert_eq!(saturate_q15(32768), 32767);
        assert_eq!(saturate_q15(-32768), -32768);
        assert_eq!(saturate_q15(-32769), -32768);
        assert_eq!(saturate_q15(i32::MAX), 32767);
    }

    #[test]
    fn test_axpy_in_range() {
        let y = q15_axpy_ref(&[1, -2, 3], &[10, 20, 30], 3).unwrap();
        assert_eq!(y, vec![13, 14, 39]);
    }

    #[test]
    fn test_axpy_saturates_both_ends() {
        // Largest possible magnitude: (-32768) * (-32768) + 32767
        let y = q15_axpy_ref(&[-32768, -32768, 32767], &[32767, -32768, -32768], -32768).unwrap();
        assert_eq!(y, vec![32767, 32767, -32768]);
    }

    #[test]
    fn test_axpy_empty() {
        assert!(q15_axpy_ref(&[], &[], 5).unwrap().is_empty());
    }

    #[test]
    fn test_axpy_length_mismatch() {
        match q15_axpy_ref(&[1, 2], &[1], 1) {
            Err(GenError::LengthMismatch { a, b }) => {
                assert_eq!(a, 2);
                assert_eq!(b, 1);
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }
}
