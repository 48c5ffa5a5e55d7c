use crate::{
    ant::LangtonsAnt,
    automaton::Automaton,
    cell::{CellState, CellVisibility},
    config::{AutomatonKind, Config},
    error::{CellError, ConfigError, GridError},
    life::ConwayLifeOutflow,
    sand::Sand,
};

/// The automaton behind a [`World`].
#[derive(Debug, Clone)]
enum Engine {
    Life(ConwayLifeOutflow),
    Sand(Sand),
    Ant(LangtonsAnt),
}

/// Run the same expression on whichever automaton the engine holds.
macro_rules! dispatch {
    ($engine:expr, $automaton:ident => $body:expr) => {
        match $engine {
            Engine::Life($automaton) => $body,
            Engine::Sand($automaton) => $body,
            Engine::Ant($automaton) => $body,
        }
    };
}

/// A running automaton of any of the built-in kinds.
///
/// This is what a front-end holds: it forwards clicks to
/// [`update_cell`](World::update_cell), calls [`step`](World::step) once per tick,
/// and asks [`check_cell`](World::check_cell) what to paint.
///
/// # Example
///
/// ```
/// use cellsim_lib::{AutomatonKind, Config, World};
///
/// // A 5x5 sand world where grains pile up against the edges.
/// let config = Config::new(AutomatonKind::Sand, 5, 5).with_outflow(false);
/// let mut world = World::new(config).unwrap();
///
/// // Drop a grain and let it fall.
/// world.update_cell(2, 0).unwrap();
/// for _ in 0..4 {
///     world.step();
/// }
///
/// assert!(world.check_cell(2, 4).unwrap().visible);
/// assert_eq!(world.generation(), 4);
/// println!("{}", world.plaintext());
/// ```
#[derive(Debug, Clone)]
pub struct World {
    /// The configuration of the world.
    config: Config,

    /// The automaton itself.
    engine: Engine,

    /// Number of ticks since the world was created or last cleaned.
    generation: u64,
}

impl World {
    /// Create a new world from a configuration.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let config = config.check()?;
        let (w, h) = (config.width as usize, config.height as usize);

        let engine = match config.kind {
            AutomatonKind::Life => Engine::Life(match config.seed {
                Some(seed) => ConwayLifeOutflow::with_seed(w, h, seed)?,
                None => ConwayLifeOutflow::new(w, h)?,
            }),
            AutomatonKind::Sand => Engine::Sand(Sand::new(w, h, config.outflow)?),
            AutomatonKind::Ant => Engine::Ant(LangtonsAnt::new(w, h)?),
        };

        Ok(Self {
            config,
            engine,
            generation: 0,
        })
    }

    /// Get the configuration.
    #[inline]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Which automaton is running.
    #[inline]
    pub const fn kind(&self) -> AutomatonKind {
        self.config.kind
    }

    /// Width of the visible area.
    #[inline]
    pub fn size_x(&self) -> usize {
        dispatch!(&self.engine, a => a.size_x())
    }

    /// Height of the visible area.
    #[inline]
    pub fn size_y(&self) -> usize {
        dispatch!(&self.engine, a => a.size_y())
    }

    /// Number of ticks since the world was created or last cleaned.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// What the caller should paint at the given cell.
    #[inline]
    pub fn check_cell(&self, x: usize, y: usize) -> Result<CellVisibility, CellError> {
        dispatch!(&self.engine, a => a.check_cell(x, y))
    }

    /// Apply a click at the given cell.
    #[inline]
    pub fn update_cell(&mut self, x: usize, y: usize) -> Result<(), CellError> {
        dispatch!(&mut self.engine, a => a.update_cell(x, y))
    }

    /// Place or remove a wall at the given cell.
    ///
    /// Only sand has walls. Returns whether anything changed.
    pub fn toggle_wall(&mut self, x: usize, y: usize) -> Result<bool, CellError> {
        match &mut self.engine {
            Engine::Sand(sand) => sand.toggle_solid(x, y).map(|()| true),
            Engine::Life(_) | Engine::Ant(_) => Ok(false),
        }
    }

    /// Advance the world by one tick.
    pub fn step(&mut self) {
        dispatch!(&mut self.engine, a => {
            a.update_table();
        });
        self.generation += 1;
        log::debug!("{} world advanced to generation {}", self.kind(), self.generation);
    }

    /// Reset the world to a fresh initial grid of the same size.
    ///
    /// On error the world is left as it was.
    pub fn clean(&mut self) -> Result<(), GridError> {
        dispatch!(&mut self.engine, a => a.clean()?);
        self.generation = 0;
        log::debug!("{} world cleaned", self.kind());
        Ok(())
    }

    /// Number of visible cells that are not background.
    pub fn population(&self) -> usize {
        (0..self.size_y())
            .flat_map(|y| (0..self.size_x()).map(move |x| (x, y)))
            .filter(|&(x, y)| self.check_cell(x, y).is_ok_and(|cell| cell.visible))
            .count()
    }

    /// Output the visible area as plain text.
    ///
    /// Each row is one line, each cell one character:
    ///
    /// - Background cells are represented by `.`.
    /// - Living cells and grains of sand are represented by `o`.
    /// - Walls and black squares are represented by `#`.
    /// - The ant is represented by `A`.
    pub fn plaintext(&self) -> String {
        dispatch!(&self.engine, a => render(a))
    }
}

/// Render the visible area of an automaton as plain text.
fn render<A: Automaton>(automaton: &A) -> String {
    let mut s = String::with_capacity((automaton.size_x() + 1) * automaton.size_y());

    for y in 0..automaton.size_y() {
        for x in 0..automaton.size_x() {
            let symbol = automaton.cell(x, y).map_or('?', CellState::symbol);
            s.push(symbol);
        }
        s.push('\n');
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world() {
        let world = World::new(Config::new(AutomatonKind::Life, 12, 8).with_seed(5)).unwrap();
        assert_eq!(world.kind(), AutomatonKind::Life);
        assert_eq!(world.size_x(), 12);
        assert_eq!(world.size_y(), 8);
        assert_eq!(world.generation(), 0);

        assert_eq!(
            World::new(Config::new(AutomatonKind::Sand, 0, 8)).unwrap_err(),
            ConfigError::InvalidSize
        );
    }

    #[test]
    fn test_seeded_life_is_reproducible() {
        let config = Config::new(AutomatonKind::Life, 16, 16).with_seed(11);
        let mut a = World::new(config.clone()).unwrap();
        let mut b = World::new(config).unwrap();

        for _ in 0..5 {
            assert_eq!(a.plaintext(), b.plaintext());
            a.step();
            b.step();
        }
    }

    #[test]
    fn test_plaintext() {
        let mut world = World::new(Config::new(AutomatonKind::Sand, 4, 3)).unwrap();
        world.update_cell(1, 1).unwrap();
        world.toggle_wall(2, 2).unwrap();
        assert_eq!(world.plaintext(), "....\n.o..\n..#.\n");

        let world = World::new(Config::new(AutomatonKind::Ant, 3, 3)).unwrap();
        assert_eq!(world.plaintext(), "...\n.A.\n...\n");
    }

    #[test]
    fn test_step_and_clean() {
        let config = Config::new(AutomatonKind::Sand, 5, 5).with_outflow(false);
        let mut world = World::new(config).unwrap();
        world.update_cell(2, 0).unwrap();
        world.update_cell(3, 0).unwrap();
        assert_eq!(world.population(), 2);

        world.step();
        world.step();
        assert_eq!(world.generation(), 2);
        assert_eq!(world.population(), 2);

        world.clean().unwrap();
        assert_eq!(world.generation(), 0);
        assert_eq!(world.population(), 0);
    }

    #[test]
    fn test_toggle_wall() {
        let mut world = World::new(Config::new(AutomatonKind::Sand, 5, 5)).unwrap();
        assert_eq!(world.toggle_wall(1, 1), Ok(true));
        assert_eq!(world.population(), 1);
        assert_eq!(
            world.toggle_wall(5, 1),
            Err(CellError::OutOfRange { x: 5, y: 1 })
        );

        let mut world = World::new(Config::new(AutomatonKind::Life, 5, 5)).unwrap();
        let before = world.plaintext();
        assert_eq!(world.toggle_wall(1, 1), Ok(false));
        assert_eq!(world.plaintext(), before);
    }

    #[test]
    fn test_double_toggle_restores() {
        for kind in [AutomatonKind::Life, AutomatonKind::Sand, AutomatonKind::Ant] {
            let mut world = World::new(Config::new(kind, 6, 6).with_seed(9)).unwrap();
            let before = world.plaintext();

            for (x, y) in [(0, 0), (5, 5), (2, 4)] {
                world.update_cell(x, y).unwrap();
                world.update_cell(x, y).unwrap();
            }

            assert_eq!(world.plaintext(), before);
        }
    }

    #[test]
    fn test_out_of_range() {
        let mut world = World::new(Config::new(AutomatonKind::Life, 5, 5)).unwrap();
        assert_eq!(
            world.check_cell(5, 0),
            Err(CellError::OutOfRange { x: 5, y: 0 })
        );
        assert_eq!(
            world.update_cell(0, 5),
            Err(CellError::OutOfRange { x: 0, y: 5 })
        );
    }
}
