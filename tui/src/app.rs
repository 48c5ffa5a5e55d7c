use crate::{
    args::Args,
    event::{MouseAction, TermEvent},
};
use cellsim_lib::World;
use color_eyre::Result;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// The shortest interval between two ticks.
const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// The longest interval between two ticks.
const MAX_INTERVAL: Duration = Duration::from_millis(5000);

/// Application modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The simulation is running.
    Running,
    /// The simulation is not started yet, or paused by the user.
    #[default]
    Paused,
    /// Ask the user to confirm the quit.
    Quit,
    /// Display the usage.
    Usage,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The running automaton.
    pub world: World,
    /// Time between two ticks while running.
    pub interval: Duration,
    /// Current mode of the application.
    pub mode: Mode,
    /// Time of the last tick.
    pub last_tick: Instant,
    /// The cell under the keyboard cursor.
    pub cursor: (usize, usize),
    /// Where the board was drawn last time.
    pub board: Rect,
    /// The last cell toggled by a mouse drag.
    last_drag: Option<(usize, usize)>,
    /// Whether the application should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new [`App`] from the command line arguments.
    pub fn new(args: Args) -> Result<Self> {
        let world = World::new(args.config)?;
        let interval = Duration::from_millis(args.interval).clamp(MIN_INTERVAL, MAX_INTERVAL);

        Ok(Self {
            world,
            interval,
            mode: Mode::Paused,
            last_tick: Instant::now(),
            cursor: (0, 0),
            board: Rect::default(),
            last_drag: None,
            should_quit: false,
        })
    }

    /// Start or resume the simulation.
    fn start(&mut self) {
        if self.mode == Mode::Paused {
            self.last_tick = Instant::now();
            self.mode = Mode::Running;
        }
    }

    /// Pause the simulation.
    fn pause(&mut self) {
        if self.mode == Mode::Running {
            self.mode = Mode::Paused;
        }
    }

    /// Stop the simulation and reset the world.
    fn clean(&mut self) {
        self.pause();
        if let Err(e) = self.world.clean() {
            log::warn!("{e}");
        }
    }

    /// Halve the interval between ticks.
    fn faster(&mut self) {
        self.interval = (self.interval / 2).max(MIN_INTERVAL);
    }

    /// Double the interval between ticks.
    fn slower(&mut self) {
        self.interval = (self.interval * 2).min(MAX_INTERVAL);
    }

    /// How long to wait before the next tick is due.
    pub fn until_next_tick(&self) -> Duration {
        self.interval.saturating_sub(self.last_tick.elapsed())
    }

    /// Advance the world if the next tick is due.
    pub fn tick(&mut self) {
        if self.mode == Mode::Running && self.until_next_tick().is_zero() {
            self.world.step();
            self.last_tick = Instant::now();
        }
    }

    /// Move the keyboard cursor, staying inside the world.
    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let (x, y) = self.cursor;
        let max_x = self.world.size_x() - 1;
        let max_y = self.world.size_y() - 1;
        self.cursor = (
            x.saturating_add_signed(dx).min(max_x),
            y.saturating_add_signed(dy).min(max_y),
        );
    }

    /// Toggle a cell as a click would.
    fn toggle_cell(&mut self, (x, y): (usize, usize)) {
        if let Err(e) = self.world.update_cell(x, y) {
            log::warn!("{e}");
        }
    }

    /// Place or remove a wall.
    fn toggle_wall(&mut self, (x, y): (usize, usize)) {
        match self.world.toggle_wall(x, y) {
            Ok(true) => {}
            Ok(false) => log::debug!("{} has no walls", self.world.kind()),
            Err(e) => log::warn!("{e}"),
        }
    }

    /// Translate a terminal position into the cell drawn there.
    ///
    /// Each cell is drawn two columns wide.
    fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let board = self.board;
        if column < board.x || row < board.y || column >= board.right() || row >= board.bottom() {
            return None;
        }

        let x = ((column - board.x) / 2) as usize;
        let y = (row - board.y) as usize;
        (x < self.world.size_x() && y < self.world.size_y()).then_some((x, y))
    }

    /// Handle a mouse event on the board.
    fn mouse(&mut self, action: MouseAction, column: u16, row: u16) {
        let Some(cell) = self.cell_at(column, row) else {
            return;
        };

        match action {
            MouseAction::Click => {
                self.toggle_cell(cell);
                self.last_drag = Some(cell);
            }
            MouseAction::Drag => {
                if self.last_drag != Some(cell) {
                    self.toggle_cell(cell);
                    self.last_drag = Some(cell);
                }
            }
            MouseAction::RightClick => self.toggle_wall(cell),
        }

        self.cursor = cell;
    }

    /// Handle the keys shared by the running and paused modes.
    fn edit(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('c' | 'C') => self.clean(),
            KeyCode::Char('=' | '+') => self.faster(),
            KeyCode::Char('-' | '_') => self.slower(),
            KeyCode::Char('t' | 'T') => self.toggle_cell(self.cursor),
            KeyCode::Char('w' | 'W') => self.toggle_wall(self.cursor),
            KeyCode::Left => self.move_cursor(-1, 0),
            KeyCode::Right => self.move_cursor(1, 0),
            KeyCode::Up => self.move_cursor(0, -1),
            KeyCode::Down => self.move_cursor(0, 1),
            _ => {}
        }
    }

    /// Update the application state according to the given event.
    pub fn update(&mut self, event: TermEvent) {
        match self.mode {
            Mode::Running => match event {
                TermEvent::KeyPress(key) => match key {
                    KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                        self.pause();
                        self.mode = Mode::Quit;
                    }
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        self.pause();
                    }
                    KeyCode::Char('h' | 'H') => {
                        self.pause();
                        self.mode = Mode::Usage;
                    }
                    _ => self.edit(key),
                },
                TermEvent::Mouse {
                    action,
                    column,
                    row,
                } => self.mouse(action, column, row),
                TermEvent::Resize => {}
            },
            Mode::Paused => match event {
                TermEvent::KeyPress(key) => match key {
                    KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                        self.mode = Mode::Quit;
                    }
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        self.start();
                    }
                    KeyCode::Char('n' | 'N') => {
                        self.world.step();
                    }
                    KeyCode::Char('h' | 'H') => {
                        self.mode = Mode::Usage;
                    }
                    _ => self.edit(key),
                },
                TermEvent::Mouse {
                    action,
                    column,
                    row,
                } => self.mouse(action, column, row),
                TermEvent::Resize => {}
            },
            Mode::Quit => match event {
                TermEvent::KeyPress(key) => match key {
                    KeyCode::Char('y' | 'Y') => {
                        self.should_quit = true;
                    }
                    KeyCode::Char('n' | 'N') => {
                        self.mode = Mode::Paused;
                    }
                    _ => {}
                },
                TermEvent::Mouse { .. } | TermEvent::Resize => {}
            },
            Mode::Usage => match event {
                TermEvent::KeyPress(key) => match key {
                    KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                        self.mode = Mode::Quit;
                    }
                    KeyCode::Char('h' | 'H' | ' ') | KeyCode::Enter => {
                        self.mode = Mode::Paused;
                    }
                    _ => {}
                },
                TermEvent::Mouse { .. } | TermEvent::Resize => {}
            },
        }
    }
}
