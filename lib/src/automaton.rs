use crate::{
    cell::{CellState, CellVisibility},
    error::{CellError, GridError},
    grid::Grid,
};

/// The visible area of an automaton and where it sits in the storage grid.
///
/// The storage grid may be larger than the visible area by a fixed margin
/// on every side. Caller-visible coordinates `(x, y)` map to the storage cell
/// `[y + start_y][x + start_x]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Width of the visible area.
    pub size_x: usize,
    /// Height of the visible area.
    pub size_y: usize,
    /// Column of the storage grid where the visible area starts.
    pub start_x: usize,
    /// Row of the storage grid where the visible area starts.
    pub start_y: usize,
}

impl Bounds {
    /// A visible area surrounded by `margin` cells of storage on every side.
    ///
    /// Fails if the visible area is empty, whatever the margin.
    #[inline]
    pub const fn with_margin(
        size_x: usize,
        size_y: usize,
        margin: usize,
    ) -> Result<Self, GridError> {
        if size_x == 0 || size_y == 0 {
            return Err(GridError::InvalidDimension);
        }

        Ok(Self {
            size_x,
            size_y,
            start_x: margin,
            start_y: margin,
        })
    }

    /// Width of the storage grid.
    #[inline]
    pub const fn total_size_x(&self) -> usize {
        self.size_x + 2 * self.start_x
    }

    /// Height of the storage grid.
    #[inline]
    pub const fn total_size_y(&self) -> usize {
        self.size_y + 2 * self.start_y
    }

    /// Translate caller-visible coordinates into a storage `(row, col)`.
    #[inline]
    pub const fn storage(&self, x: usize, y: usize) -> Result<(usize, usize), CellError> {
        if x < self.size_x && y < self.size_y {
            Ok((y + self.start_y, x + self.start_x))
        } else {
            Err(CellError::OutOfRange { x, y })
        }
    }
}

/// The contract every automaton implements.
///
/// The caller builds an automaton, forwards clicks to [`update_cell`](Automaton::update_cell),
/// calls [`update_table`](Automaton::update_table) once per tick, and queries
/// [`check_cell`](Automaton::check_cell) for every visible cell to render it.
/// The automaton never calls back into the caller.
pub trait Automaton {
    /// The cell states of this automaton.
    type State: CellState;

    /// The visible area and its place in the storage grid.
    fn bounds(&self) -> &Bounds;

    /// The storage grid.
    fn table(&self) -> &Grid<Self::State>;

    /// The storage grid, mutably.
    fn table_mut(&mut self) -> &mut Grid<Self::State>;

    /// Build the initial content of the storage grid.
    ///
    /// Called once at construction and again by [`clean`](Automaton::clean).
    fn init_table(&mut self) -> Result<Grid<Self::State>, GridError>;

    /// Apply a single-cell edit at caller-visible coordinates.
    fn update_cell(&mut self, x: usize, y: usize) -> Result<(), CellError>;

    /// Advance the whole automaton by exactly one tick, and return the new grid.
    fn update_table(&mut self) -> &Grid<Self::State>;

    /// Width of the visible area.
    #[inline]
    fn size_x(&self) -> usize {
        self.bounds().size_x
    }

    /// Height of the visible area.
    #[inline]
    fn size_y(&self) -> usize {
        self.bounds().size_y
    }

    /// The state of a cell at caller-visible coordinates.
    #[inline]
    fn cell(&self, x: usize, y: usize) -> Result<Self::State, CellError> {
        let (row, col) = self.bounds().storage(x, y)?;
        Ok(self.table()[row][col])
    }

    /// What the caller should paint at caller-visible coordinates.
    ///
    /// Background states are reported as not visible.
    #[inline]
    fn check_cell(&self, x: usize, y: usize) -> Result<CellVisibility, CellError> {
        self.cell(x, y).map(CellState::visibility)
    }

    /// Discard the current grid and build a fresh one of the same size.
    ///
    /// On error the current grid is kept.
    fn clean(&mut self) -> Result<(), GridError> {
        let table = self.init_table()?;
        *self.table_mut() = table;
        Ok(())
    }
}
