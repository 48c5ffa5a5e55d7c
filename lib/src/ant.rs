//! A Langton's Ant board.
//!
//! Only the board is modelled: the ant sits in the centre and the caller may
//! paint squares black or white. The ant does not walk yet, so a tick leaves the
//! board unchanged.

use crate::{
    automaton::{Automaton, Bounds},
    cell::{CellState, Color},
    error::{CellError, GridError},
    grid::Grid,
};
use strum::{Display, EnumIter};

/// The state of a square on the ant's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum AntState {
    /// A white square.
    White = 0,

    /// A black square.
    Black = 1,

    /// The square the ant stands on.
    Ant = 2,
}

impl CellState for AntState {
    #[inline]
    fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    fn color(self) -> Color {
        match self {
            Self::White => Color::White,
            Self::Black => Color::Black,
            Self::Ant => Color::Red,
        }
    }

    #[inline]
    fn is_background(self) -> bool {
        self == Self::White
    }

    #[inline]
    fn symbol(self) -> char {
        match self {
            Self::White => '.',
            Self::Black => '#',
            Self::Ant => 'A',
        }
    }
}

/// A Langton's Ant board without a border.
#[derive(Debug, Clone)]
pub struct LangtonsAnt {
    bounds: Bounds,
    table: Grid<AntState>,
}

impl LangtonsAnt {
    /// Create a new white board with the ant in the centre.
    pub fn new(size_x: usize, size_y: usize) -> Result<Self, GridError> {
        let bounds = Bounds::with_margin(size_x, size_y, 0)?;
        let table = Self::initial_table(&bounds)?;

        log::info!("Created a {size_x}x{size_y} Langton's Ant board");
        Ok(Self { bounds, table })
    }

    fn initial_table(bounds: &Bounds) -> Result<Grid<AntState>, GridError> {
        let mut table = Grid::generate(bounds.size_x, bounds.size_y, AntState::White)?;
        let (row, col) = Self::centre(bounds);
        table[row][col] = AntState::Ant;
        Ok(table)
    }

    /// Storage coordinates of the centre square.
    #[inline]
    const fn centre(bounds: &Bounds) -> (usize, usize) {
        (bounds.size_y / 2, bounds.size_x / 2)
    }

    /// Caller-visible coordinates of the ant, if it is on the board.
    pub fn ant(&self) -> Option<(usize, usize)> {
        self.table
            .rows()
            .enumerate()
            .find_map(|(y, row)| row.iter().position(|&cell| cell == AntState::Ant).map(|x| (x, y)))
    }
}

impl Automaton for LangtonsAnt {
    type State = AntState;

    #[inline]
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[inline]
    fn table(&self) -> &Grid<AntState> {
        &self.table
    }

    #[inline]
    fn table_mut(&mut self) -> &mut Grid<AntState> {
        &mut self.table
    }

    fn init_table(&mut self) -> Result<Grid<AntState>, GridError> {
        Self::initial_table(&self.bounds)
    }

    /// Toggle between white and black. The ant's square is left alone.
    fn update_cell(&mut self, x: usize, y: usize) -> Result<(), CellError> {
        let (row, col) = self.bounds.storage(x, y)?;
        let cell = &mut self.table[row][col];

        *cell = match *cell {
            AntState::White => AntState::Black,
            AntState::Black => AntState::White,
            AntState::Ant => AntState::Ant,
        };

        Ok(())
    }

    /// The ant has no movement rule yet, so the board stays as it is.
    fn update_table(&mut self) -> &Grid<AntState> {
        log::trace!("Langton's Ant tick: the ant does not move");
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellVisibility;

    #[test]
    fn test_new_board() {
        let ant = LangtonsAnt::new(7, 5).unwrap();
        assert_eq!(ant.table().width(), 7);
        assert_eq!(ant.table().height(), 5);
        assert_eq!(ant.ant(), Some((3, 2)));
        assert_eq!(ant.table().count(AntState::Ant), 1);
        assert_eq!(ant.table().count(AntState::White), 34);
        assert_eq!(
            ant.check_cell(3, 2).unwrap(),
            CellVisibility::shown(Color::Red)
        );

        assert_eq!(LangtonsAnt::new(0, 5).unwrap_err(), GridError::InvalidDimension);
    }

    #[test]
    fn test_update_cell() {
        let mut ant = LangtonsAnt::new(4, 4).unwrap();
        ant.update_cell(0, 0).unwrap();
        assert_eq!(
            ant.check_cell(0, 0).unwrap(),
            CellVisibility::shown(Color::Black)
        );
        ant.update_cell(0, 0).unwrap();
        assert_eq!(ant.check_cell(0, 0).unwrap(), CellVisibility::HIDDEN);

        // The ant's square cannot be painted.
        ant.update_cell(2, 2).unwrap();
        assert_eq!(ant.cell(2, 2).unwrap(), AntState::Ant);

        assert_eq!(
            ant.update_cell(4, 0),
            Err(CellError::OutOfRange { x: 4, y: 0 })
        );
    }

    #[test]
    fn test_tick_keeps_board() {
        let mut ant = LangtonsAnt::new(5, 5).unwrap();
        ant.update_cell(1, 1).unwrap();
        let before = ant.table().clone();

        assert_eq!(ant.update_table(), &before);
        assert_eq!(ant.table(), &before);
    }

    #[test]
    fn test_clean() {
        let mut ant = LangtonsAnt::new(5, 5).unwrap();
        ant.update_cell(1, 1).unwrap();
        ant.update_cell(4, 0).unwrap();

        ant.clean().unwrap();
        assert_eq!(ant.table().count(AntState::Black), 0);
        assert_eq!(ant.ant(), Some((2, 2)));
    }
}
