use super::{MatrixMut, MatrixRef};
use std::ops::{Index, IndexMut};

/// Borrowed 1 x cols window onto one row of a [`Matrix2`](super::Matrix2).
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a, T> {
    data: &'a [T],
}

/// Mutable row window. Writes go straight to the parent matrix.
#[derive(Debug)]
pub struct RowViewMut<'a, T> {
    data: &'a mut [T],
}

/// Mutable window over a whole matrix. Cells can be rewritten but the shape is fixed.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    dim: (usize, usize),
}

impl<'a, T> RowView<'a, T> {
    pub(super) fn new(data: &'a [T]) -> Self {
        Self { data }
    }
}

impl<'a, T> RowViewMut<'a, T> {
    pub(super) fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }
}

impl<'a, T> MatrixViewMut<'a, T> {
    pub(super) fn new(data: &'a mut [T], dim: (usize, usize)) -> Self {
        Self { data, dim }
    }
}

impl<T> MatrixRef<T> for RowView<'_, T> {
    fn dim(&self) -> (usize, usize) {
        (1, self.data.len())
    }

    fn as_slice(&self) -> &[T] {
        self.data
    }
}

impl<T> MatrixRef<T> for RowViewMut<'_, T> {
    fn dim(&self) -> (usize, usize) {
        (1, self.data.len())
    }

    fn as_slice(&self) -> &[T] {
        &*self.data
    }
}

impl<T> MatrixMut<T> for RowViewMut<'_, T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<T> Index<(usize, usize)> for RowView<'_, T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert_eq!(i, 0, "row views have a single row");
        &self.data[j]
    }
}

impl<T> Index<(usize, usize)> for RowViewMut<'_, T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert_eq!(i, 0, "row views have a single row");
        &self.data[j]
    }
}

impl<T> IndexMut<(usize, usize)> for RowViewMut<'_, T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        assert_eq!(i, 0, "row views have a single row");
        &mut self.data[j]
    }
}

impl<T> MatrixRef<T> for MatrixViewMut<'_, T> {
    fn dim(&self) -> (usize, usize) {
        self.dim
    }

    fn as_slice(&self) -> &[T] {
        &*self.data
    }
}

impl<T> MatrixMut<T> for MatrixViewMut<'_, T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<T> Index<(usize, usize)> for MatrixViewMut<'_, T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.dim.0 && j < self.dim.1, "index out of bounds");
        &self.data[i * self.dim.1 + j]
    }
}

impl<T> IndexMut<(usize, usize)> for MatrixViewMut<'_, T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        assert!(i < self.dim.0 && j < self.dim.1, "index out of bounds");
        &mut self.data[i * self.dim.1 + j]
    }
}
