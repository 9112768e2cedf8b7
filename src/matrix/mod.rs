use crate::prelude::*;
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

pub mod ops;
pub mod view;

pub use ops::{MatrixMut, MatrixRef};
pub use view::{MatrixViewMut, RowView, RowViewMut};

/// Dense row-major matrix that owns its buffer.
/// Both dimensions are always non-zero and `data.len() == rows * cols`.
#[derive(Debug, PartialEq, Clone)]
pub struct Matrix2<T> {
    data: Vec<T>,
    dim: (usize, usize),
}

impl<T: Default + Clone> Matrix2<T> {
    /// Allocates a `rows x cols` matrix filled with `T::default()`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::DimensionErr);
        }
        let len = rows.checked_mul(cols).ok_or(Error::AllocErr)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| Error::AllocErr)?;
        data.resize(len, T::default());

        Ok(Self {
            data,
            dim: (rows, cols),
        })
    }

    pub fn zero(&mut self) {
        self.fill(T::default());
    }
}

impl<T> Matrix2<T> {
    /// Panics if either dimension is zero.
    pub fn from_array<const R: usize, const C: usize>(arr: [[T; C]; R]) -> Self {
        assert!(R > 0 && C > 0, "matrix dimensions must be non-zero");
        let mut data = Vec::with_capacity(R * C);

        for row in arr {
            for x in row {
                data.push(x);
            }
        }

        Self { data, dim: (R, C) }
    }

    pub fn from_vec(vec: Vec<Vec<T>>) -> Result<Self> {
        let rows = vec.len();
        let cols = vec.first().map(|row| row.len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(Error::DimensionErr);
        }

        let mut data = Vec::with_capacity(rows * cols);
        for row in vec {
            if cols != row.len() {
                return Err(Error::DimensionErr);
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            dim: (rows, cols),
        })
    }

    pub fn to_vec(self) -> Vec<Vec<T>> {
        let (rows, cols) = self.dim;
        let mut data = self.data.into_iter();

        let mut res = Vec::with_capacity(rows);
        for _ in 0..rows {
            res.push(data.by_ref().take(cols).collect());
        }
        res
    }

    /// Borrows row `row` as a 1 x cols view sharing this matrix's storage.
    pub fn row(&self, row: usize) -> Result<RowView<'_, T>> {
        if row >= self.rows() {
            return Err(Error::DimensionErr);
        }
        let cols = self.cols();
        Ok(RowView::new(&self.data[row * cols..(row + 1) * cols]))
    }

    /// Mutable counterpart of [`Matrix2::row`]. Writes through the view land in this matrix.
    pub fn row_mut(&mut self, row: usize) -> Result<RowViewMut<'_, T>> {
        if row >= self.rows() {
            return Err(Error::DimensionErr);
        }
        let cols = self.cols();
        Ok(RowViewMut::new(&mut self.data[row * cols..(row + 1) * cols]))
    }

    /// Borrows every cell mutably without giving out the matrix itself, so
    /// the shape cannot be swapped.
    pub fn view_mut(&mut self) -> MatrixViewMut<'_, T> {
        MatrixViewMut::new(&mut self.data, self.dim)
    }

    pub(crate) fn fmt_named(
        &self,
        f: &mut fmt::Formatter<'_>,
        name: &str,
        padding: usize,
    ) -> fmt::Result
    where
        T: fmt::Display,
    {
        writeln!(f, "{:padding$}{name} = [", "")?;
        for row in self.data.chunks(self.cols()) {
            write!(f, "{:padding$}", "")?;
            for x in row {
                write!(f, "  {x:.6}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{:padding$}]", "")
    }
}

impl Matrix2<f64> {
    /// Sets every cell to a value drawn uniformly from `[low, high)`.
    /// A collapsed range (`low == high`) fills with `low`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, low: f64, high: f64) -> Result<()> {
        if !(low.is_finite() && high.is_finite() && (high - low).is_finite()) || low > high {
            return Err(Error::RangeErr);
        }
        if low == high {
            self.fill(low);
            return Ok(());
        }

        let die = Uniform::new(low, high);
        for x in &mut self.data {
            *x = die.sample(rng);
        }
        Ok(())
    }

    /// Applies the logistic function `1 / (1 + e^-x)` to every cell.
    pub fn apply_sigmoid(&mut self) {
        self.apply(ops::sigmoid);
    }
}

impl<T> MatrixRef<T> for Matrix2<T> {
    fn dim(&self) -> (usize, usize) {
        self.dim
    }

    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> MatrixMut<T> for Matrix2<T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix2<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i * self.cols() + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix2<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        let idx = i * self.cols() + j;
        &mut self.data[idx]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_named(f, "m", 0)
    }
}

impl From<Matrix2<i32>> for Matrix2<f64> {
    fn from(value: Matrix2<i32>) -> Self {
        Self {
            dim: value.dim(),
            data: value.data.into_iter().map(f64::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn access_matrix2_from_array() {
        let matrix = Matrix2::from_array([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(matrix[(0, 1)], 2);
        assert_eq!(matrix[(1, 2)], 6);
        assert_eq!(matrix[(0, 0)], 1);
        assert_eq!(matrix[(1, 1)], 5);
        assert_eq!(matrix.dim(), (2, 3));
    }

    #[test]
    fn matrix2_from_vec() {
        let vec = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let matrix = Matrix2::from_vec(vec).unwrap();

        assert_eq!(matrix[(0, 1)], 2);
        assert_eq!(matrix[(1, 2)], 6);
        assert_eq!(matrix.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn matrix2_from_vec_err() {
        let vec = vec![vec![1, 2, 3], vec![4, 5, 9], vec![1, 2]];
        assert_eq!(Matrix2::from_vec(vec), Err(Error::DimensionErr));

        let vec = vec![vec![1, 2], vec![4, 5, 9], vec![1, 2, 2]];
        assert_eq!(Matrix2::from_vec(vec), Err(Error::DimensionErr));

        let vec: Vec<Vec<i32>> = vec![];
        assert_eq!(Matrix2::from_vec(vec), Err(Error::DimensionErr));
    }

    #[test]
    fn new_is_zeroed() {
        let matrix = Matrix2::<f64>::new(3, 4).unwrap();
        assert_eq!(matrix.dim(), (3, 4));
        assert_eq!(matrix.as_slice().len(), 12);
        assert!(matrix.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn new_rejects_zero_dims() {
        assert_eq!(Matrix2::<f64>::new(0, 4), Err(Error::DimensionErr));
        assert_eq!(Matrix2::<f64>::new(4, 0), Err(Error::DimensionErr));
    }

    #[test]
    fn new_rejects_overflowing_size() {
        assert_eq!(Matrix2::<u8>::new(usize::MAX, 2), Err(Error::AllocErr));
    }

    #[test]
    fn to_vec_keeps_rows() {
        let matrix = Matrix2::from_array([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(matrix.to_vec(), [[1, 2], [3, 4], [5, 6]]);
    }

    #[test]
    fn randomize_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut matrix = Matrix2::new(10, 10).unwrap();

        matrix.randomize(&mut rng, -1.0, 1.0).unwrap();
        assert!(matrix.as_slice().iter().all(|&x| (-1.0..1.0).contains(&x)));

        matrix.randomize(&mut rng, 2.0, 5.0).unwrap();
        assert!(matrix.as_slice().iter().all(|&x| (2.0..5.0).contains(&x)));
    }

    #[test]
    fn randomize_collapsed_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut matrix = Matrix2::new(2, 3).unwrap();

        matrix.randomize(&mut rng, 0.5, 0.5).unwrap();
        assert!(matrix.as_slice().iter().all(|&x| x == 0.5));
    }

    #[test]
    fn randomize_bad_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut matrix = Matrix2::new(2, 3).unwrap();

        assert_eq!(matrix.randomize(&mut rng, 1.0, 0.0), Err(Error::RangeErr));
        assert_eq!(matrix.randomize(&mut rng, f64::NAN, 1.0), Err(Error::RangeErr));
        assert_eq!(
            matrix.randomize(&mut rng, f64::MIN, f64::MAX),
            Err(Error::RangeErr)
        );
        // untouched on failure
        assert!(matrix.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn randomize_is_reproducible() {
        let mut a = Matrix2::new(4, 4).unwrap();
        let mut b = Matrix2::new(4, 4).unwrap();

        a.randomize(&mut StdRng::seed_from_u64(42), 0.0, 2.0).unwrap();
        b.randomize(&mut StdRng::seed_from_u64(42), 0.0, 2.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn row_view_reads_parent() {
        let matrix = Matrix2::from_array([[1, 2, 3], [4, 5, 6]]);
        let row = matrix.row(1).unwrap();

        assert_eq!(row.dim(), (1, 3));
        assert_eq!(row.as_slice(), &[4, 5, 6]);
        assert_eq!(row[(0, 2)], 6);
        assert!(matrix.row(2).is_err());
    }

    #[test]
    fn row_view_aliases_parent() {
        let mut matrix = Matrix2::from_array([[1, 2, 3], [4, 5, 6]]);

        let mut row = matrix.row_mut(1).unwrap();
        row[(0, 0)] = 40;
        assert_eq!(matrix[(1, 0)], 40);

        matrix[(1, 2)] = 60;
        assert_eq!(matrix.row(1).unwrap()[(0, 2)], 60);

        assert!(matrix.row_mut(5).is_err());
    }

    #[test]
    fn full_view_writes_parent() {
        let mut matrix = Matrix2::from_array([[1, 2, 3], [4, 5, 6]]);

        let mut view = matrix.view_mut();
        assert_eq!(view.dim(), (2, 3));
        view[(1, 0)] = 40;
        assert_eq!(
            view.copy_from(&Matrix2::from_array([[0, 0]])),
            Err(Error::DimensionErr)
        );

        assert_eq!(matrix.dim(), (2, 3));
        assert_eq!(matrix[(1, 0)], 40);
        assert_eq!(matrix[(0, 0)], 1);
    }

    #[test]
    fn sigmoid_cells() {
        let mut matrix = Matrix2::from_array([[0.0, 1000.0, -1000.0]]);
        matrix.apply_sigmoid();

        assert_eq!(matrix[(0, 0)], 0.5);
        assert!((matrix[(0, 1)] - 1.0).abs() < 1e-12);
        assert!(matrix[(0, 2)].abs() < 1e-12);
    }

    #[test]
    fn zero_resets() {
        let mut matrix = Matrix2::from_array([[1.5, 2.5], [3.5, 4.5]]);
        matrix.zero();
        assert_eq!(matrix.to_vec(), [[0.0, 0.0], [0.0, 0.0]]);
    }

    #[test]
    fn display_rows() {
        let matrix = Matrix2::from_array([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(
            matrix.to_string(),
            "m = [\n  1.000000  2.000000\n  3.000000  4.000000\n]\n"
        );
    }

    #[test]
    fn convert_int_matrix() {
        let matrix: Matrix2<f64> = Matrix2::from_array([[0, 1], [1, 0]]).into();
        assert_eq!(matrix.to_vec(), [[0.0, 1.0], [1.0, 0.0]]);
    }
}
