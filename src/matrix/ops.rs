use crate::prelude::*;
use std::ops::{AddAssign, Mul};

/// Logistic function.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Read access shared by owned matrices and row views.
pub trait MatrixRef<T> {
    fn dim(&self) -> (usize, usize);

    /// Row-major cells, `rows * cols` long.
    fn as_slice(&self) -> &[T];

    fn rows(&self) -> usize {
        self.dim().0
    }

    fn cols(&self) -> usize {
        self.dim().1
    }
}

/// In-place operations. Every shape check happens before the destination is touched.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn as_mut_slice(&mut self) -> &mut [T];

    fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for x in self.as_mut_slice() {
            *x = value.clone();
        }
    }

    /// Applies a function to every element of the matrix
    fn apply<F: Fn(T) -> T>(&mut self, f: F)
    where
        T: Copy,
    {
        for x in self.as_mut_slice() {
            *x = f(*x);
        }
    }

    /// Element-wise copy of a same-shaped matrix.
    fn copy_from<S>(&mut self, src: &S) -> Result<()>
    where
        S: MatrixRef<T> + ?Sized,
        T: Copy,
    {
        if self.dim() != src.dim() {
            return Err(Error::DimensionErr);
        }
        self.as_mut_slice().copy_from_slice(src.as_slice());
        Ok(())
    }

    /// Element-wise `self += src`.
    fn add_from<S>(&mut self, src: &S) -> Result<()>
    where
        S: MatrixRef<T> + ?Sized,
        T: Copy + AddAssign,
    {
        if self.dim() != src.dim() {
            return Err(Error::DimensionErr);
        }
        for (x, &y) in self.as_mut_slice().iter_mut().zip(src.as_slice()) {
            *x += y;
        }
        Ok(())
    }

    /// Overwrites `self` with the product `a * b`.
    fn dot_into<A, B>(&mut self, a: &A, b: &B) -> Result<()>
    where
        A: MatrixRef<T> + ?Sized,
        B: MatrixRef<T> + ?Sized,
        T: Copy + Default + AddAssign + Mul<Output = T>,
    {
        // columns of LHS == rows of RHS
        if a.cols() != b.rows() || self.rows() != a.rows() || self.cols() != b.cols() {
            return Err(Error::DimensionErr);
        }

        let (n, cols) = (a.cols(), b.cols());
        let (lhs, rhs) = (a.as_slice(), b.as_slice());
        let out = self.as_mut_slice();

        for (row, out_row) in out.chunks_mut(cols).enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                let mut sum = T::default();
                for k in 0..n {
                    sum += lhs[row * n + k] * rhs[k * cols + col];
                }
                *cell = sum;
            }
        }
        Ok(())
    }
}
