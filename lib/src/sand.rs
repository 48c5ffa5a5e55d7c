//! A falling-sand automaton.
//!
//! Grains fall straight down, or slide diagonally when blocked.
//! The world is closed by a solid frame just outside the visible area.

use crate::{
    automaton::{Automaton, Bounds},
    cell::{CellState, Color},
    error::{CellError, GridError},
    grid::Grid,
};
use strum::{Display, EnumIter};

/// The state of a cell in the sand automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum SandState {
    /// Nothing here.
    Empty = 0,

    /// A grain of sand.
    Sand = 1,

    /// An obstacle that never moves.
    Solid = 2,
}

impl CellState for SandState {
    #[inline]
    fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    fn color(self) -> Color {
        match self {
            Self::Empty => Color::White,
            Self::Sand => Color::Blue,
            Self::Solid => Color::Black,
        }
    }

    #[inline]
    fn is_background(self) -> bool {
        self == Self::Empty
    }

    #[inline]
    fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Sand => 'o',
            Self::Solid => '#',
        }
    }
}

/// Falling sand on a bounded grid.
///
/// The storage grid is `(size_x + 2) × (size_y + 2)` with a solid frame on its
/// outermost ring. Sand collides with the frame like with any other wall.
///
/// Unlike [`ConwayLifeOutflow`](crate::ConwayLifeOutflow), a tick mutates the grid
/// in place. Cells are visited bottom-to-top and right-to-left, so the cell a grain
/// moves into has already been visited, and each grain moves at most once per tick.
///
/// With `outflow` enabled, a grain on the outermost visible ring falls off the world
/// on the next tick instead of piling up against the frame.
#[derive(Debug, Clone)]
pub struct Sand {
    bounds: Bounds,
    table: Grid<SandState>,
    outflow: bool,
}

impl Sand {
    /// Create a new empty world.
    pub fn new(size_x: usize, size_y: usize, outflow: bool) -> Result<Self, GridError> {
        let bounds = Bounds::with_margin(size_x, size_y, 1)?;
        let table = Self::framed_table(&bounds)?;

        log::info!("Created a {size_x}x{size_y} sand world, outflow: {outflow}");
        Ok(Self {
            bounds,
            table,
            outflow,
        })
    }

    /// An empty grid with a solid frame.
    fn framed_table(bounds: &Bounds) -> Result<Grid<SandState>, GridError> {
        let mut table = Grid::generate(
            bounds.total_size_x(),
            bounds.total_size_y(),
            SandState::Empty,
        )?;
        table.fill_border(SandState::Solid);
        Ok(table)
    }

    /// Whether grains on the outermost visible ring fall off the world.
    #[inline]
    pub const fn outflow(&self) -> bool {
        self.outflow
    }

    /// Number of grains of sand.
    #[inline]
    pub fn population(&self) -> usize {
        self.table.count(SandState::Sand)
    }

    /// Place or remove a wall at caller-visible coordinates.
    ///
    /// A solid cell becomes empty. Any other cell, including a grain of sand,
    /// becomes solid.
    pub fn toggle_solid(&mut self, x: usize, y: usize) -> Result<(), CellError> {
        let (row, col) = self.bounds.storage(x, y)?;
        let cell = &mut self.table[row][col];

        *cell = match *cell {
            SandState::Solid => SandState::Empty,
            SandState::Empty | SandState::Sand => SandState::Solid,
        };

        Ok(())
    }

    /// Whether a storage cell lies on the outermost visible ring.
    #[inline]
    const fn on_edge(&self, row: usize, col: usize) -> bool {
        row == 1 || row == self.bounds.size_y || col == 1 || col == self.bounds.size_x
    }

    /// Move a grain from one storage cell to another.
    #[inline]
    fn move_grain(&mut self, from: (usize, usize), to: (usize, usize)) {
        self.table[from.0][from.1] = SandState::Empty;
        self.table[to.0][to.1] = SandState::Sand;
    }

    /// Try to move the grain at a storage cell one step.
    ///
    /// In order of priority: straight down; down-right if the cell to the right is
    /// not solid; down-left if the cell to the left is empty.
    fn fall(&mut self, row: usize, col: usize) {
        let empty = |cell| cell == SandState::Empty;
        let below = row + 1;

        if empty(self.table[below][col]) {
            self.move_grain((row, col), (below, col));
        } else if empty(self.table[below][col + 1]) && self.table[row][col + 1] != SandState::Solid
        {
            self.move_grain((row, col), (below, col + 1));
        } else if empty(self.table[below][col - 1]) && empty(self.table[row][col - 1]) {
            self.move_grain((row, col), (below, col - 1));
        }
    }
}

impl Automaton for Sand {
    type State = SandState;

    #[inline]
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[inline]
    fn table(&self) -> &Grid<SandState> {
        &self.table
    }

    #[inline]
    fn table_mut(&mut self) -> &mut Grid<SandState> {
        &mut self.table
    }

    fn init_table(&mut self) -> Result<Grid<SandState>, GridError> {
        Self::framed_table(&self.bounds)
    }

    /// Toggle between empty and sand. Solid cells are left alone.
    fn update_cell(&mut self, x: usize, y: usize) -> Result<(), CellError> {
        let (row, col) = self.bounds.storage(x, y)?;
        let cell = &mut self.table[row][col];

        *cell = match *cell {
            SandState::Empty => SandState::Sand,
            SandState::Sand => SandState::Empty,
            SandState::Solid => SandState::Solid,
        };

        Ok(())
    }

    fn update_table(&mut self) -> &Grid<SandState> {
        for row in (1..=self.bounds.size_y).rev() {
            for col in (1..=self.bounds.size_x).rev() {
                if self.table[row][col] != SandState::Sand {
                    continue;
                }

                if self.outflow && self.on_edge(row, col) {
                    self.table[row][col] = SandState::Empty;
                } else {
                    self.fall(row, col);
                }
            }
        }

        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellVisibility;

    fn grains(sand: &Sand) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for y in 0..sand.size_y() {
            for x in 0..sand.size_x() {
                if sand.cell(x, y).unwrap() == SandState::Sand {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    fn drop_grains(sand: &mut Sand, cells: &[(usize, usize)]) {
        for &(x, y) in cells {
            sand.update_cell(x, y).unwrap();
        }
    }

    fn frame_is_solid(sand: &Sand) -> bool {
        sand.table().border().all(|cell| cell == SandState::Solid)
    }

    #[test]
    fn test_new_world() {
        let sand = Sand::new(5, 4, true).unwrap();
        assert_eq!(sand.table().width(), 7);
        assert_eq!(sand.table().height(), 6);
        assert!(frame_is_solid(&sand));
        assert_eq!(sand.population(), 0);
        assert_eq!(sand.table().count(SandState::Empty), 20);

        assert_eq!(Sand::new(5, 0, true).unwrap_err(), GridError::InvalidDimension);
    }

    #[test]
    fn test_grain_falls_to_floor() {
        let mut sand = Sand::new(5, 5, false).unwrap();
        drop_grains(&mut sand, &[(2, 1)]);

        sand.update_table();
        assert_eq!(grains(&sand), vec![(2, 2)]);
        sand.update_table();
        assert_eq!(grains(&sand), vec![(2, 3)]);

        // Height minus two ticks in total.
        sand.update_table();
        assert_eq!(grains(&sand), vec![(2, 4)]);

        for _ in 0..10 {
            sand.update_table();
            assert_eq!(grains(&sand), vec![(2, 4)]);
        }
        assert!(frame_is_solid(&sand));
    }

    #[test]
    fn test_column_falls_together() {
        // Grains are visited bottom-up, so a whole column moves down in one tick.
        let mut sand = Sand::new(3, 6, false).unwrap();
        drop_grains(&mut sand, &[(1, 0), (1, 1), (1, 2)]);

        sand.update_table();
        assert_eq!(grains(&sand), vec![(1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_slides_down_right() {
        let mut sand = Sand::new(5, 5, false).unwrap();
        drop_grains(&mut sand, &[(2, 4), (2, 3)]);

        sand.update_table();
        assert_eq!(grains(&sand), vec![(2, 4), (3, 4)]);
    }

    #[test]
    fn test_slides_down_left_when_right_is_taken() {
        let mut sand = Sand::new(5, 5, false).unwrap();
        drop_grains(&mut sand, &[(2, 4), (3, 4), (2, 3)]);

        sand.update_table();
        assert_eq!(grains(&sand), vec![(1, 4), (2, 4), (3, 4)]);
    }

    #[test]
    fn test_pile_settles() {
        let mut sand = Sand::new(5, 5, false).unwrap();
        drop_grains(&mut sand, &[(2, 1), (2, 2), (2, 3), (2, 4)]);

        for _ in 0..20 {
            sand.update_table();
        }

        assert_eq!(sand.population(), 4);
        assert_eq!(grains(&sand), vec![(2, 3), (1, 4), (2, 4), (3, 4)]);
        assert!(frame_is_solid(&sand));
    }

    #[test]
    fn test_down_left_needs_empty_side() {
        let mut sand = Sand::new(5, 5, false).unwrap();
        drop_grains(&mut sand, &[(0, 4), (2, 4), (4, 4), (1, 3), (2, 3), (3, 3)]);

        // (3, 3) falls into (3, 4) first. Then (2, 3) may not slide down-left,
        // because (1, 3) still holds a grain, even though (1, 4) is empty.
        sand.update_table();
        assert_eq!(
            grains(&sand),
            vec![(2, 3), (0, 4), (1, 4), (2, 4), (3, 4), (4, 4)]
        );
    }

    #[test]
    fn test_down_right_blocked_by_wall() {
        let mut sand = Sand::new(5, 5, false).unwrap();
        sand.toggle_solid(2, 3).unwrap();
        drop_grains(&mut sand, &[(1, 4), (1, 3)]);

        // (2, 4) is empty, but the wall beside the grain blocks the slide.
        sand.update_table();
        assert_eq!(grains(&sand), vec![(0, 4), (1, 4)]);
    }

    #[test]
    fn test_frame_blocks_slides() {
        let mut sand = Sand::new(3, 3, false).unwrap();
        drop_grains(&mut sand, &[(2, 2), (2, 1)]);

        // The frame is to the right, so the grain slides left.
        sand.update_table();
        assert_eq!(grains(&sand), vec![(1, 2), (2, 2)]);
        assert!(frame_is_solid(&sand));
    }

    #[test]
    fn test_outflow_removes_edge_grains() {
        let mut sand = Sand::new(5, 5, true).unwrap();
        drop_grains(&mut sand, &[(4, 2)]);

        sand.update_table();
        assert!(grains(&sand).is_empty());
        assert!(frame_is_solid(&sand));

        let mut sand = Sand::new(5, 5, false).unwrap();
        drop_grains(&mut sand, &[(4, 2)]);

        sand.update_table();
        assert_eq!(grains(&sand), vec![(4, 3)]);
    }

    #[test]
    fn test_outflow_drains_through_floor() {
        let mut sand = Sand::new(5, 5, true).unwrap();
        drop_grains(&mut sand, &[(2, 2)]);

        sand.update_table();
        assert_eq!(grains(&sand), vec![(2, 3)]);
        sand.update_table();
        assert_eq!(grains(&sand), vec![(2, 4)]);
        sand.update_table();
        assert!(grains(&sand).is_empty());
    }

    #[test]
    fn test_update_cell_toggles() {
        let mut sand = Sand::new(4, 4, true).unwrap();
        let before = sand.table().clone();

        sand.update_cell(1, 2).unwrap();
        assert_eq!(sand.cell(1, 2).unwrap(), SandState::Sand);
        sand.update_cell(1, 2).unwrap();
        assert_eq!(sand.table(), &before);
    }

    #[test]
    fn test_solid_ignores_update_cell() {
        let mut sand = Sand::new(4, 4, true).unwrap();
        sand.toggle_solid(3, 0).unwrap();
        let before = sand.table().clone();

        sand.update_cell(3, 0).unwrap();
        assert_eq!(sand.table(), &before);
        sand.update_cell(3, 0).unwrap();
        assert_eq!(sand.table(), &before);
        assert_eq!(sand.cell(3, 0).unwrap(), SandState::Solid);
    }

    #[test]
    fn test_toggle_solid() {
        let mut sand = Sand::new(4, 4, true).unwrap();
        sand.update_cell(1, 1).unwrap();

        sand.toggle_solid(1, 1).unwrap();
        assert_eq!(sand.cell(1, 1).unwrap(), SandState::Solid);
        sand.toggle_solid(1, 1).unwrap();
        assert_eq!(sand.cell(1, 1).unwrap(), SandState::Empty);

        assert_eq!(
            sand.toggle_solid(4, 1),
            Err(CellError::OutOfRange { x: 4, y: 1 })
        );
    }

    #[test]
    fn test_walls_do_not_move() {
        let mut sand = Sand::new(4, 4, true).unwrap();
        sand.toggle_solid(1, 1).unwrap();
        sand.toggle_solid(0, 3).unwrap();

        for _ in 0..5 {
            sand.update_table();
        }

        assert_eq!(sand.cell(1, 1).unwrap(), SandState::Solid);
        assert_eq!(sand.cell(0, 3).unwrap(), SandState::Solid);
    }

    #[test]
    fn test_check_cell() {
        let mut sand = Sand::new(4, 4, false).unwrap();
        sand.update_cell(0, 0).unwrap();
        sand.toggle_solid(1, 0).unwrap();

        assert_eq!(
            sand.check_cell(0, 0).unwrap(),
            CellVisibility::shown(Color::Blue)
        );
        assert_eq!(
            sand.check_cell(1, 0).unwrap(),
            CellVisibility::shown(Color::Black)
        );
        assert_eq!(sand.check_cell(2, 0).unwrap(), CellVisibility::HIDDEN);
        assert_eq!(
            sand.check_cell(0, 4),
            Err(CellError::OutOfRange { x: 0, y: 4 })
        );
    }

    #[test]
    fn test_clean() {
        let mut sand = Sand::new(6, 6, false).unwrap();
        drop_grains(&mut sand, &[(1, 1), (2, 2), (5, 5)]);
        sand.toggle_solid(3, 3).unwrap();

        sand.clean().unwrap();
        assert!(frame_is_solid(&sand));
        assert_eq!(sand.table().width(), 8);
        assert_eq!(sand.table().height(), 8);
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(sand.check_cell(x, y).unwrap(), CellVisibility::HIDDEN);
            }
        }
    }
}
