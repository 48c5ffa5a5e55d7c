use crate::error::GridError;
use rand::{seq::SliceRandom, Rng};
use std::ops::{Index, IndexMut};

/// A fixed-size 2-D container of cell states.
///
/// Cells are addressed `grid[row][col]`. The dimensions are set at construction
/// and never change afterwards.
///
/// `Clone` makes a deep copy: the copy shares no storage with the original.
///
/// # Example
///
/// ```
/// use cellsim_lib::Grid;
///
/// let mut grid = Grid::generate(3, 2, 0u8).unwrap();
/// grid[1][2] = 7;
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid[1][2], 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<S> {
    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,

    /// The cells in row-major order.
    cells: Vec<S>,
}

impl<S: Copy> Grid<S> {
    /// Generate a grid with `size_x` columns and `size_y` rows,
    /// every cell set to `value`.
    pub fn generate(size_x: usize, size_y: usize, value: S) -> Result<Self, GridError> {
        if size_x == 0 || size_y == 0 {
            return Err(GridError::InvalidDimension);
        }

        Ok(Self {
            width: size_x,
            height: size_y,
            cells: vec![value; size_x * size_y],
        })
    }

    /// Generate a grid with `size_x` columns and `size_y` rows,
    /// each cell drawn independently and uniformly from `values`.
    pub fn generate_random<R: Rng + ?Sized>(
        size_x: usize,
        size_y: usize,
        values: &[S],
        rng: &mut R,
    ) -> Result<Self, GridError> {
        if size_x == 0 || size_y == 0 {
            return Err(GridError::InvalidDimension);
        }

        let cells = (0..size_x * size_y)
            .map(|_| values.choose(rng).copied().ok_or(GridError::EmptyValueSet))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            width: size_x,
            height: size_y,
            cells,
        })
    }

    /// Number of columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Overwrite every cell on the outermost ring with `value`.
    pub fn fill_border(&mut self, value: S) {
        let (w, h) = (self.width, self.height);

        for col in 0..w {
            self[0][col] = value;
            self[h - 1][col] = value;
        }

        for row in 1..h - 1 {
            self[row][0] = value;
            self[row][w - 1] = value;
        }
    }

    /// An iterator over the rows.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[S]> {
        self.cells.chunks_exact(self.width)
    }

    /// An iterator over the cells on the outermost ring.
    pub fn border(&self) -> impl Iterator<Item = S> + '_ {
        let (w, h) = (self.width, self.height);
        (0..h)
            .flat_map(move |row| (0..w).map(move |col| (row, col)))
            .filter(move |&(row, col)| row == 0 || row == h - 1 || col == 0 || col == w - 1)
            .map(move |(row, col)| self[row][col])
    }
}

impl<S: Copy + PartialEq> Grid<S> {
    /// Count the cells in the given state.
    pub fn count(&self, state: S) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }
}

impl<S> Index<usize> for Grid<S> {
    type Output = [S];

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.cells[row * self.width..(row + 1) * self.width]
    }
}

impl<S> IndexMut<usize> for Grid<S> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.cells[row * self.width..(row + 1) * self.width]
    }
}
