//! Augmented matrix and row reduction over an abstract field
//!
//! The reducer performs full Gauss-Jordan elimination to reduced
//! row-echelon form. Pivot selection avoids additive identities: when the
//! pivot entry is zero the first lower row with a non-zero entry in the
//! pivot column is swapped in, and if none exists the rows are irreducible.

use crate::core::number::Number;
use crate::error::{DeductionError, DeductionResult};

/// Numeric field abstraction for the reducer
///
/// Anything with the four arithmetic operators and an additive-identity
/// test can back a reduction. The library ships two instances: `Number`
/// (exact, rationals as needed) and `f64` (double precision).
pub trait Field: Clone + PartialEq {
    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
    fn divide(&self, other: &Self) -> DeductionResult<Self>
    where
        Self: Sized;
    fn negate(&self) -> Self;

    /// The `z == -z` test, which singles out zero in any field with
    /// well-defined negation
    fn is_additive_identity(&self) -> bool;
}

impl Field for Number {
    fn add(&self, other: &Self) -> Self {
        self.clone() + other.clone()
    }

    fn sub(&self, other: &Self) -> Self {
        self.clone() - other.clone()
    }

    fn mul(&self, other: &Self) -> Self {
        self.clone() * other.clone()
    }

    fn divide(&self, other: &Self) -> DeductionResult<Self> {
        self.clone() / other.clone()
    }

    fn negate(&self) -> Self {
        -self.clone()
    }

    fn is_additive_identity(&self) -> bool {
        self.is_zero()
    }
}

impl Field for f64 {
    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn divide(&self, other: &Self) -> DeductionResult<Self> {
        if other.is_additive_identity() {
            return Err(DeductionError::DivisionByZero);
        }
        Ok(self / other)
    }

    fn negate(&self) -> Self {
        -self
    }

    fn is_additive_identity(&self) -> bool {
        *self == -*self
    }
}

/// A matrix modeling a system of linear equations
///
/// Rows have identical length; the last column is the constants column.
///
/// # Examples
///
/// ```rust
/// use deduce_core::{AugmentedMatrix, Number};
///
/// let matrix = AugmentedMatrix::from_integers(vec![
///     vec![1, 3, -2, 5],
///     vec![3, 5, 6, 7],
///     vec![2, 4, 3, 8],
/// ]).unwrap();
///
/// let reduced = matrix.reduced_form().unwrap();
/// assert_eq!(
///     reduced.constants(),
///     vec![Number::integer(-15), Number::integer(8), Number::integer(2)],
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<F> {
    rows: Vec<Vec<F>>,
}

impl<F: Field> AugmentedMatrix<F> {
    /// Create a matrix, validating that all rows have the same length
    pub fn new(rows: Vec<Vec<F>>) -> DeductionResult<Self> {
        if let Some(first) = rows.first() {
            let width = first.len();
            for row in &rows {
                if row.len() != width {
                    return Err(DeductionError::DimensionMismatch {
                        expected: width,
                        found: row.len(),
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// The rows of the matrix
    pub fn rows(&self) -> &[Vec<F>] {
        &self.rows
    }

    /// Row count
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Column count (zero for an empty matrix)
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The right-most column
    pub fn constants(&self) -> Vec<F> {
        self.rows
            .iter()
            .filter_map(|row| row.last().cloned())
            .collect()
    }

    /// Reduce to reduced row-echelon form
    ///
    /// Gauss-Jordan with additive-identity-avoiding pivot swaps. Fails with
    /// `Irreducible` when a pivot column carries only additive identities
    /// from the pivot row down, which happens for singular and
    /// under-determined systems.
    pub fn reduced_form(&self) -> DeductionResult<Self> {
        let mut rows = self.rows.clone();
        let height = rows.len();
        let width = self.width();

        for index in 0..height {
            if index >= width {
                return Err(DeductionError::Irreducible { column: index });
            }

            if rows[index][index].is_additive_identity() {
                let swap_index = (index + 1..height)
                    .find(|&candidate| !rows[candidate][index].is_additive_identity())
                    .ok_or(DeductionError::Irreducible { column: index })?;
                rows.swap(index, swap_index);
            }

            let pivot = rows[index][index].clone();
            let pivot_row: Vec<F> = rows[index]
                .iter()
                .map(|entry| entry.divide(&pivot))
                .collect::<DeductionResult<_>>()?;

            for (other_index, row) in rows.iter_mut().enumerate() {
                if other_index == index {
                    continue;
                }
                let factor = row[index].clone();
                if factor.is_additive_identity() {
                    continue;
                }
                for (entry, pivot_entry) in row.iter_mut().zip(&pivot_row) {
                    *entry = entry.sub(&pivot_entry.mul(&factor));
                }
            }

            rows[index] = pivot_row;
        }

        Ok(Self { rows })
    }
}

impl AugmentedMatrix<Number> {
    /// Convenience constructor from integer rows
    pub fn from_integers(rows: Vec<Vec<i64>>) -> DeductionResult<Self> {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Number::integer).collect())
                .collect(),
        )
    }

    /// Approximate this matrix over `f64`
    pub fn to_float(&self) -> AugmentedMatrix<f64> {
        AugmentedMatrix {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(Number::to_f64).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_rows() -> Vec<Vec<i64>> {
        vec![vec![1, 3, -2, 5], vec![3, 5, 6, 7], vec![2, 4, 3, 8]]
    }

    #[test]
    fn test_reduce_simple() {
        let matrix = AugmentedMatrix::from_integers(example_rows()).unwrap();
        let reduced = matrix.reduced_form().unwrap();
        assert_eq!(
            reduced.constants(),
            vec![Number::integer(-15), Number::integer(8), Number::integer(2)],
        );
    }

    #[test]
    fn test_reduce_produces_identity_columns() {
        let matrix = AugmentedMatrix::from_integers(example_rows()).unwrap();
        let reduced = matrix.reduced_form().unwrap();
        for (row_index, row) in reduced.rows().iter().enumerate() {
            for (column_index, entry) in row[..3].iter().enumerate() {
                let expected = if row_index == column_index { 1 } else { 0 };
                assert_eq!(entry, &Number::integer(expected));
            }
        }
    }

    #[test]
    fn test_reduction_fixed_point() {
        let matrix = AugmentedMatrix::from_integers(example_rows()).unwrap();
        let once = matrix.reduced_form().unwrap();
        let twice = once.reduced_form().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reduce_float() {
        let matrix = AugmentedMatrix::from_integers(example_rows())
            .unwrap()
            .to_float();
        let reduced = matrix.reduced_form().unwrap();
        let constants = reduced.constants();
        for (found, expected) in constants.iter().zip([-15.0, 8.0, 2.0]) {
            assert!((found - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_pivot_swap() {
        let matrix =
            AugmentedMatrix::from_integers(vec![vec![0, 1, 2], vec![1, 0, 3]]).unwrap();
        let reduced = matrix.reduced_form().unwrap();
        assert_eq!(
            reduced.constants(),
            vec![Number::integer(3), Number::integer(2)],
        );
    }

    #[test]
    fn test_singular_rows_are_irreducible() {
        let matrix =
            AugmentedMatrix::from_integers(vec![vec![1, 2, 3], vec![2, 4, 6]]).unwrap();
        assert_eq!(
            matrix.reduced_form(),
            Err(DeductionError::Irreducible { column: 1 }),
        );
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![
            vec![Number::integer(1), Number::integer(2)],
            vec![Number::integer(3)],
        ];
        assert_eq!(
            AugmentedMatrix::new(rows),
            Err(DeductionError::DimensionMismatch {
                expected: 2,
                found: 1,
            }),
        );
    }

    #[test]
    fn test_exact_reduction_keeps_rationals() {
        let matrix =
            AugmentedMatrix::from_integers(vec![vec![2, 0, 1], vec![0, 3, 1]]).unwrap();
        let reduced = matrix.reduced_form().unwrap();
        let constants = reduced.constants();
        assert_eq!(
            constants[0],
            (Number::integer(1) / Number::integer(2)).unwrap()
        );
        assert_eq!(
            constants[1],
            (Number::integer(1) / Number::integer(3)).unwrap()
        );
    }
}
