//! Square integer matrices over Z/26.
//!
//! Provides the determinant, adjugate and modular inverse needed by the Hill
//! cipher. Entries are stored row-major and always reduced into `0..26`.

use std::fmt;

use crate::cipher::alphabet::mod_inverse;
use crate::config::ALPHABET_LEN;
use crate::error::{CipherError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMatrix {
    order: usize,
    cells: Vec<i64>,
}

impl KeyMatrix {
    /// Builds a matrix from its rows, reducing every entry modulo 26.
    ///
    /// # Errors
    ///
    /// [`CipherError::MalformedInput`] if there are no rows or any row
    /// length differs from the number of rows.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        let order = rows.len();
        if order == 0 {
            return Err(CipherError::MalformedInput("key matrix has no rows".into()));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != order) {
            return Err(CipherError::MalformedInput(format!("key matrix is not square: row {} has {} entries, expected {order}", i + 1, row.len())));
        }

        let cells = rows.iter().flatten().map(|v| v.rem_euclid(ALPHABET_LEN)).collect();
        Ok(Self { order, cells })
    }

    #[cfg(test)]
    pub(crate) fn identity(order: usize) -> Self {
        let cells = (0..order * order).map(|i| i64::from(i / order == i % order)).collect();
        Self { order, cells }
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.order + col]
    }

    pub fn rows(&self) -> Vec<Vec<i64>> {
        self.cells.chunks(self.order).map(<[i64]>::to_vec).collect()
    }

    /// Determinant reduced into `0..26`.
    pub fn determinant(&self) -> i64 {
        determinant(&self.cells, self.order).rem_euclid(ALPHABET_LEN)
    }

    /// Whether the determinant is a unit modulo 26.
    pub fn is_invertible(&self) -> bool {
        mod_inverse(self.determinant(), ALPHABET_LEN).is_some()
    }

    /// Transpose of the cofactor matrix, reduced modulo 26.
    pub fn adjugate(&self) -> Self {
        let n = self.order;
        if n == 1 {
            return Self { order: 1, cells: vec![1] };
        }

        let mut cells = vec![0; n * n];
        for row in 0..n {
            for col in 0..n {
                let sign = if (row + col) % 2 == 0 { 1 } else { -1 };
                let cofactor = sign * determinant(&minor(&self.cells, n, row, col), n - 1);
                cells[col * n + row] = cofactor.rem_euclid(ALPHABET_LEN);
            }
        }
        Self { order: n, cells }
    }

    /// Modular inverse: `det⁻¹ · adj(M) mod 26`.
    ///
    /// # Errors
    ///
    /// [`CipherError::InvalidKey`] when the determinant shares a factor with 26.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        let det_inv = mod_inverse(det, ALPHABET_LEN).ok_or_else(|| CipherError::InvalidKey(format!("determinant {det} is not invertible modulo {ALPHABET_LEN}")))?;

        let adjugate = self.adjugate();
        let cells = adjugate.cells.iter().map(|v| (v * det_inv).rem_euclid(ALPHABET_LEN)).collect();
        Ok(Self { order: self.order, cells })
    }

    /// Computes `M·v mod 26` for a column vector of length `order`.
    pub fn mul_vector(&self, vector: &[i64]) -> Vec<i64> {
        debug_assert_eq!(vector.len(), self.order);
        self.cells.chunks(self.order).map(|row| row.iter().zip(vector).map(|(a, b)| a * b).sum::<i64>().rem_euclid(ALPHABET_LEN)).collect()
    }

    /// Computes `self · other mod 26`. Both matrices must share an order.
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.order, other.order);
        let n = self.order;
        let mut cells = vec![0; n * n];
        for row in 0..n {
            for col in 0..n {
                cells[row * n + col] = (0..n).map(|k| self.get(row, k) * other.get(k, col)).sum::<i64>().rem_euclid(ALPHABET_LEN);
            }
        }
        Self { order: n, cells }
    }
}

impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self.rows().iter().map(|row| row.iter().map(i64::to_string).collect::<Vec<_>>().join(" ")).collect();
        f.write_str(&rows.join("; "))
    }
}

/// Row-major minor with `skip_row` and `skip_col` removed.
fn minor(cells: &[i64], n: usize, skip_row: usize, skip_col: usize) -> Vec<i64> {
    (0..n)
        .filter(|&r| r != skip_row)
        .flat_map(|r| (0..n).filter(move |&c| c != skip_col).map(move |c| cells[r * n + c]))
        .collect()
}

/// Laplace expansion along the first row, reduced modulo 26 at each step.
fn determinant(cells: &[i64], n: usize) -> i64 {
    match n {
        0 => 1,
        1 => cells[0],
        2 => (cells[0] * cells[3] - cells[1] * cells[2]).rem_euclid(ALPHABET_LEN),
        _ => (0..n)
            .map(|col| {
                let sign = if col % 2 == 0 { 1 } else { -1 };
                sign * cells[col] * determinant(&minor(cells, n, 0, col), n - 1)
            })
            .sum::<i64>()
            .rem_euclid(ALPHABET_LEN),
    }
}
