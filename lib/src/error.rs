use thiserror::Error;

/// An error that can occur when generating a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// The width or the height is zero.
    #[error("The width or the height of the grid is zero")]
    InvalidDimension,

    /// A random fill was requested without any candidate states.
    #[error("No candidate states to fill the grid with")]
    EmptyValueSet,
}

/// An error that can occur when accessing a cell by its caller-visible coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CellError {
    /// The coordinates are outside the visible area.
    #[error("Cell ({x}, {y}) is outside the visible area")]
    OutOfRange {
        /// The column that was requested.
        x: usize,
        /// The row that was requested.
        y: usize,
    },
}

/// An error that can occur when building an automaton from a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The width or the height is zero.
    #[error("The width or the height is zero")]
    InvalidSize,

    /// The grid could not be generated.
    #[error(transparent)]
    Grid(#[from] GridError),
}
