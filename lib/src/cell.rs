use std::fmt::Debug;
use strum::Display;

/// Display color of a cell.
///
/// Formats as the lowercase color name, e.g. `"blue"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    /// The background color.
    White,
    /// Living cells and grains of sand.
    Blue,
    /// Walls and black squares.
    Black,
    /// The ant.
    Red,
}

/// What the caller should paint for a single cell.
///
/// A cell that is not visible should not be painted at all;
/// the caller's background shows through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellVisibility {
    /// Whether the cell should be painted.
    pub visible: bool,
    /// The color to paint the cell with, if it is visible.
    pub color: Option<Color>,
}

impl CellVisibility {
    /// A cell that should not be painted.
    pub const HIDDEN: Self = Self {
        visible: false,
        color: None,
    };

    /// A cell that should be painted in the given color.
    #[inline]
    pub const fn shown(color: Color) -> Self {
        Self {
            visible: true,
            color: Some(color),
        }
    }
}

/// The state of a cell in some automaton.
///
/// Each automaton has a closed set of states, each with an integer code
/// and a display color.
pub trait CellState: Copy + Eq + Debug + 'static {
    /// The integer code of the state.
    fn code(self) -> u8;

    /// The display color of the state.
    fn color(self) -> Color;

    /// Whether the state is the background, which is never painted.
    fn is_background(self) -> bool;

    /// A character representing the state in plain text.
    fn symbol(self) -> char;

    /// What the caller should paint for a cell in this state.
    #[inline]
    fn visibility(self) -> CellVisibility {
        if self.is_background() {
            CellVisibility::HIDDEN
        } else {
            CellVisibility::shown(self.color())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ant::AntState, life::LifeState, sand::SandState};

    #[test]
    fn test_color_names() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Blue.to_string(), "blue");
        assert_eq!(Color::Black.to_string(), "black");
        assert_eq!(Color::Red.to_string(), "red");
    }

    #[test]
    fn test_visibility() {
        assert_eq!(CellVisibility::default(), CellVisibility::HIDDEN);
        assert_eq!(
            CellVisibility::shown(Color::Blue),
            CellVisibility {
                visible: true,
                color: Some(Color::Blue),
            }
        );
    }

    #[test]
    fn test_state_codes() {
        assert_eq!(LifeState::Dead.code(), 0);
        assert_eq!(LifeState::Alive.code(), 1);

        assert_eq!(SandState::Empty.code(), 0);
        assert_eq!(SandState::Sand.code(), 1);
        assert_eq!(SandState::Solid.code(), 2);

        assert_eq!(AntState::White.code(), 0);
        assert_eq!(AntState::Black.code(), 1);
        assert_eq!(AntState::Ant.code(), 2);
    }
}
