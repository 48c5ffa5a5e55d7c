//! Conway's Game of Life with an open boundary.
//!
//! The visible area is surrounded by a one-cell halo that is always dead.
//! Cells beyond the edge therefore never sustain or create life.

use crate::{
    automaton::{Automaton, Bounds},
    cell::{CellState, Color},
    error::{CellError, GridError},
    grid::Grid,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::ops::Not;
use strum::{Display, EnumIter, IntoEnumIterator};

/// The state of a cell in the Game of Life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum LifeState {
    /// The cell is dead.
    Dead = 0,

    /// The cell is alive.
    Alive = 1,
}

impl Not for LifeState {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Self::Dead => Self::Alive,
            Self::Alive => Self::Dead,
        }
    }
}

impl CellState for LifeState {
    #[inline]
    fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    fn color(self) -> Color {
        match self {
            Self::Dead => Color::White,
            Self::Alive => Color::Blue,
        }
    }

    #[inline]
    fn is_background(self) -> bool {
        self == Self::Dead
    }

    #[inline]
    fn symbol(self) -> char {
        match self {
            Self::Dead => '.',
            Self::Alive => 'o',
        }
    }
}

/// A living cell with fewer living neighbors dies.
const SURVIVAL_MIN: usize = 2;

/// A living cell with more living neighbors dies.
const SURVIVAL_MAX: usize = 3;

/// A dead cell with exactly this many living neighbors comes to life.
const BIRTH: usize = 3;

/// Conway's Game of Life on a bounded grid with a dead halo.
///
/// The storage grid is `(size_x + 2) × (size_y + 2)`. Its outermost ring is the halo:
/// it is dead when the grid is built and is never written afterwards.
///
/// Each tick reads from the current grid and writes into a fresh copy,
/// so every cell sees its neighbors as they were before the tick.
#[derive(Debug, Clone)]
pub struct ConwayLifeOutflow {
    bounds: Bounds,
    table: Grid<LifeState>,
    rng: Xoshiro256PlusPlus,
}

impl ConwayLifeOutflow {
    /// Create a new randomly filled world, with a random seed.
    pub fn new(size_x: usize, size_y: usize) -> Result<Self, GridError> {
        Self::with_seed(size_x, size_y, rand::random())
    }

    /// Create a new randomly filled world from the given seed.
    pub fn with_seed(size_x: usize, size_y: usize, seed: u64) -> Result<Self, GridError> {
        let bounds = Bounds::with_margin(size_x, size_y, 1)?;
        let table = Grid::generate(bounds.total_size_x(), bounds.total_size_y(), LifeState::Dead)?;
        let rng = Xoshiro256PlusPlus::seed_from_u64(seed);

        let mut life = Self { bounds, table, rng };
        life.table = life.random_table()?;

        log::info!("Created a {size_x}x{size_y} Game of Life world with seed {seed}");
        Ok(life)
    }

    /// A random grid whose halo is dead.
    fn random_table(&mut self) -> Result<Grid<LifeState>, GridError> {
        let states = LifeState::iter().collect::<Vec<_>>();
        let mut table = Grid::generate_random(
            self.bounds.total_size_x(),
            self.bounds.total_size_y(),
            &states,
            &mut self.rng,
        )?;

        // The halo is never updated, so a living halo cell would stay alive forever.
        table.fill_border(LifeState::Dead);
        Ok(table)
    }

    /// Count the living cells in the Moore neighborhood of a storage cell.
    fn count_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;

        for r in row - 1..=row + 1 {
            for c in col - 1..=col + 1 {
                if (r, c) != (row, col) && self.table[r][c] == LifeState::Alive {
                    count += 1;
                }
            }
        }

        count
    }

    /// Number of living cells.
    #[inline]
    pub fn population(&self) -> usize {
        self.table.count(LifeState::Alive)
    }
}

impl Automaton for ConwayLifeOutflow {
    type State = LifeState;

    #[inline]
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[inline]
    fn table(&self) -> &Grid<LifeState> {
        &self.table
    }

    #[inline]
    fn table_mut(&mut self) -> &mut Grid<LifeState> {
        &mut self.table
    }

    fn init_table(&mut self) -> Result<Grid<LifeState>, GridError> {
        self.random_table()
    }

    fn update_cell(&mut self, x: usize, y: usize) -> Result<(), CellError> {
        let (row, col) = self.bounds.storage(x, y)?;
        self.table[row][col] = !self.table[row][col];
        Ok(())
    }

    fn update_table(&mut self) -> &Grid<LifeState> {
        let mut next = self.table.clone();

        for row in 1..=self.bounds.size_y {
            for col in 1..=self.bounds.size_x {
                let count = self.count_neighbors(row, col);

                match self.table[row][col] {
                    LifeState::Alive if !(SURVIVAL_MIN..=SURVIVAL_MAX).contains(&count) => {
                        next[row][col] = LifeState::Dead;
                    }
                    LifeState::Dead if count == BIRTH => {
                        next[row][col] = LifeState::Alive;
                    }
                    _ => {}
                }
            }
        }

        self.table = next;
        &self.table
    }
}
