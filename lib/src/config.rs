use crate::error::ConfigError;
#[cfg(feature = "clap")]
use clap::{Args, ValueEnum};
use strum::{Display, EnumIter, EnumString};

/// The built-in automata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
pub enum AutomatonKind {
    /// Conway's Game of Life with an open boundary.
    #[default]
    Life,

    /// Falling sand.
    Sand,

    /// A Langton's Ant board.
    ///
    /// The ant does not move yet.
    Ant,
}

/// The configuration of a world.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(Args))]
pub struct Config {
    /// Which automaton to run.
    #[cfg_attr(feature = "clap", arg(short, long, value_enum, default_value = "life"))]
    pub kind: AutomatonKind,

    /// Width of the visible area.
    #[cfg_attr(feature = "clap", arg(default_value = "32"))]
    pub width: u32,

    /// Height of the visible area.
    #[cfg_attr(feature = "clap", arg(default_value = "32"))]
    pub height: u32,

    /// Whether sand falls off the edges of the visible area.
    ///
    /// Only used by [`Sand`](AutomatonKind::Sand).
    #[cfg_attr(
        feature = "clap",
        arg(long = "no-outflow", action = clap::ArgAction::SetFalse)
    )]
    pub outflow: bool,

    /// Random seed for the initial grid.
    ///
    /// Only used by [`Life`](AutomatonKind::Life).
    ///
    /// If this is [`None`], then the seed is randomly generated.
    #[cfg_attr(feature = "clap", arg(long))]
    pub seed: Option<u64>,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self::new(AutomatonKind::default(), 32, 32)
    }
}

impl Config {
    /// Create a new configuration.
    #[inline]
    pub const fn new(kind: AutomatonKind, width: u32, height: u32) -> Self {
        Self {
            kind,
            width,
            height,
            outflow: true,
            seed: None,
        }
    }

    /// Set whether sand falls off the edges.
    ///
    /// See [`outflow`](Config::outflow) for more details.
    #[inline]
    pub const fn with_outflow(mut self, outflow: bool) -> Self {
        self.outflow = outflow;
        self
    }

    /// Set the random seed.
    ///
    /// See [`seed`](Config::seed) for more details.
    #[inline]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check whether the configuration is valid.
    pub fn check(self) -> Result<Self, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSize);
        }

        Ok(self)
    }
}
