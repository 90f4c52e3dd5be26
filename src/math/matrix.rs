use rand::Rng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;
use std::ops::{Add, Sub, Mul};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // Both draws in (0, 1] to avoid log(0).
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Xavier (Glorot) initialization: samples from N(0, sqrt(1 / fan_in)).
    ///
    /// Weight matrices are stored as (fan_in, fan_out), so `rows` is the
    /// number of input connections.
    pub fn xavier<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let std_dev = (1.0 / rows.max(1) as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(rng) * std_dev;
            }
        }
        res
    }

    pub fn transpose(&self) -> Matrix {
        let data = (0..self.cols)
            .map(|j| self.data.iter().map(|row| row[j]).collect())
            .collect();
        Matrix { rows: self.cols, cols: self.rows, data }
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        )
    }

    /// Element-wise combination of two same-shape matrices.
    pub fn zip_with<F>(&self, other: &Matrix, functor: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_eq!(self.rows, other.rows, "Matrices are of incorrect sizes");
        assert_eq!(self.cols, other.cols, "Matrices are of incorrect sizes");
        Matrix::from_data(
            self.data.iter().zip(other.data.iter())
                .map(|(a, b)| a.iter().zip(b.iter()).map(|(&x, &y)| functor(x, y)).collect())
                .collect()
        )
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map(|row| row.len()).unwrap_or(0);
        Matrix {
            rows: data.len(),
            cols,
            data
        }
    }

    /// Borrows row `index`; layer activations are 1×n row vectors.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.data[index]
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    /// Plain row-by-column product.
    ///
    /// # Panics
    /// Panics unless `self.cols == rhs.rows`.
    fn mul(self, rhs: Self) -> Self::Output {
        assert_eq!(self.cols, rhs.rows, "Matrices are of incorrect sizes");

        let data = self.data.iter()
            .map(|lhs_row| {
                (0..rhs.cols)
                    .map(|j| lhs_row.iter().zip(&rhs.data).map(|(&a, rhs_row)| a * rhs_row[j]).sum::<f64>())
                    .collect()
            })
            .collect();
        Matrix { rows: self.rows, cols: rhs.cols, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn row_vector_times_matrix() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0]]);
        let b = Matrix::from_data(vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, 3.0]]);
        let c = a * b;
        assert_eq!(c.data, vec![vec![1.0, 2.0, 8.0]]);
    }

    #[test]
    fn seeded_xavier_is_reproducible() {
        let a = Matrix::xavier(3, 4, &mut StdRng::seed_from_u64(7));
        let b = Matrix::xavier(3, 4, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn mismatched_add_panics() {
        let _ = Matrix::zeros(1, 2) + Matrix::zeros(2, 1);
    }
}
