//! Dense matrix helpers for the small systems produced by the normal
//! equations. Matrices are row-major `Vec<Vec<f64>>`.

use crate::error::LinalgError;

pub type Matrix = Vec<Vec<f64>>;

/// Pivots smaller than this are treated as zero.
pub const SINGULAR_EPSILON: f64 = 1e-12;

pub fn identity(n: usize) -> Matrix {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect()
}

pub fn transpose(a: &[Vec<f64>]) -> Matrix {
    let cols = a.first().map_or(0, Vec::len);
    (0..cols)
        .map(|j| a.iter().map(|row| row[j]).collect())
        .collect()
}

pub fn multiply(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Matrix, LinalgError> {
    let inner = a.first().map_or(0, Vec::len);
    if b.len() != inner {
        return Err(LinalgError::DimensionMismatch(format!(
            "left has {inner} columns, right has {} rows",
            b.len()
        )));
    }
    let cols = b.first().map_or(0, Vec::len);

    Ok(a.iter()
        .map(|row| {
            (0..cols)
                .map(|j| row.iter().zip(b).map(|(x, b_row)| x * b_row[j]).sum())
                .collect()
        })
        .collect())
}

pub fn mat_vec(a: &[Vec<f64>], v: &[f64]) -> Result<Vec<f64>, LinalgError> {
    if let Some(row) = a.iter().find(|row| row.len() != v.len()) {
        return Err(LinalgError::DimensionMismatch(format!(
            "row has {} columns, vector has {} entries",
            row.len(),
            v.len()
        )));
    }
    Ok(a.iter()
        .map(|row| row.iter().zip(v).map(|(x, y)| x * y).sum())
        .collect())
}

/// Invert a square matrix by Gauss–Jordan elimination with partial
/// pivoting.
pub fn invert(matrix: &[Vec<f64>]) -> Result<Matrix, LinalgError> {
    let n = matrix.len();
    if let Some(row) = matrix.iter().find(|row| row.len() != n) {
        return Err(LinalgError::NotSquare {
            rows: n,
            cols: row.len(),
        });
    }

    // [A | I]
    let mut aug: Matrix = matrix
        .iter()
        .zip(identity(n))
        .map(|(row, id_row)| row.iter().copied().chain(id_row).collect())
        .collect();

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| aug[a][col].abs().total_cmp(&aug[b][col].abs()))
            .unwrap_or(col);

        if aug[pivot_row][col].abs() < SINGULAR_EPSILON {
            return Err(LinalgError::Singular);
        }
        aug.swap(col, pivot_row);

        let pivot = aug[col][col];
        for v in aug[col].iter_mut() {
            *v /= pivot;
        }

        let pivot_values = aug[col].clone();
        for (r, row) in aug.iter_mut().enumerate() {
            if r == col {
                continue;
            }
            let factor = row[col];
            if factor == 0.0 {
                continue;
            }
            for (cell, p) in row.iter_mut().zip(&pivot_values) {
                *cell -= factor * p;
            }
        }
    }

    Ok(aug.into_iter().map(|row| row[n..].to_vec()).collect())
}
