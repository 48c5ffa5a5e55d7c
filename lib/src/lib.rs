//! A library for simulating small 2-D cellular automata on a fixed grid.
//!
//! Three automata are built in:
//!
//! - [`ConwayLifeOutflow`]: Conway's Game of Life, where everything beyond the
//!   edge of the visible area is permanently dead.
//! - [`Sand`]: falling sand with walls, and optional outflow through the edges.
//! - [`LangtonsAnt`]: a Langton's Ant board. The ant does not move yet.
//!
//! Each of them implements the [`Automaton`] trait. A front-end usually holds a [`World`],
//! which picks the automaton from a [`Config`].

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::use_self)]
#![warn(missing_docs)]

mod ant;
mod automaton;
mod cell;
mod config;
mod error;
mod grid;
mod life;
mod sand;
mod world;

pub use ant::{AntState, LangtonsAnt};
pub use automaton::{Automaton, Bounds};
pub use cell::{CellState, CellVisibility, Color};
pub use config::{AutomatonKind, Config};
pub use error::{CellError, ConfigError, GridError};
pub use grid::Grid;
pub use life::{ConwayLifeOutflow, LifeState};
pub use sand::{Sand, SandState};
pub use world::World;
