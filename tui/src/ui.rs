use crate::app::{App, Mode};
use cellsim_lib::{Color, World};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{self, Style, Stylize},
    terminal::Frame,
    text::Text,
    widgets::{
        block::{Block, Title},
        Borders, Clear, Paragraph, Widget,
    },
};
use std::rc::Rc;

/// Split the screen into the top bar, the main area, and the bottom bar.
fn split(area: Rect) -> Rc<[Rect]> {
    Layout::new(
        Direction::Vertical,
        [
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ],
    )
    .split(area)
}

impl App {
    /// Where the board is drawn on a screen of the given size.
    pub fn board_area(&self, screen: Rect) -> Rect {
        let main = split(screen)[1];
        let width = (self.world.size_x().min(main.width as usize / 2) * 2) as u16;
        let height = self.world.size_y().min(main.height as usize) as u16;
        Rect::new(main.x, main.y, width, height)
    }

    /// Render the TUI interface.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = split(frame.size());

        self.render_top_bar(frame, chunks[0]);
        self.render_main(frame, chunks[1]);
        self.render_bottom_bar(frame, chunks[2]);

        // Show the popup window if needed.
        match self.mode {
            Mode::Usage => self.render_help(frame, chunks[1]),
            Mode::Quit => self.render_quit(frame, chunks[1]),
            _ => {}
        }
    }

    /// Render the top bar.
    ///
    /// This includes the automaton, the current generation, and the population.
    fn render_top_bar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::new(
            Direction::Horizontal,
            Constraint::from_percentages([30, 35, 35]),
        )
        .split(area);

        let style = Style::new().black().on_light_blue();

        let kind = Paragraph::new(format!(
            "{} {}x{}",
            self.world.kind(),
            self.world.size_x(),
            self.world.size_y()
        ))
        .style(style);
        frame.render_widget(kind, chunks[0]);

        let generation =
            Paragraph::new(format!("Generation: {}", self.world.generation())).style(style);
        frame.render_widget(generation, chunks[1]);

        let population =
            Paragraph::new(format!("Population: {}", self.world.population())).style(style);
        frame.render_widget(population, chunks[2]);
    }

    /// Render the bottom bar.
    ///
    /// This includes the current status, the tick interval, and a short help message.
    fn render_bottom_bar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::new(
            Direction::Horizontal,
            Constraint::from_percentages([50, 50]),
        )
        .split(area);

        let style = Style::new().black().on_light_blue();

        let status_str = match self.mode {
            Mode::Running => format!("Running, every {:?}.", self.interval),
            _ => format!("Paused, every {:?}.", self.interval),
        };

        let status = Paragraph::new(status_str).style(style);
        frame.render_widget(status, chunks[0]);

        let help = Paragraph::new("Press [h] for help.").style(style);
        frame.render_widget(help, chunks[1]);
    }

    /// Render the main area.
    fn render_main(&self, frame: &mut Frame, area: Rect) {
        let board = Board::new(self);
        frame.render_widget(board, area);
    }

    /// Render a popup window with some text.
    fn render_popup<'a>(
        &self,
        frame: &mut Frame,
        area: Rect,
        text: impl Into<Text<'a>>,
        title: impl Into<Title<'a>>,
        style: Style,
    ) {
        let text = text.into();

        let center_x = area.x + area.width / 2;
        let center_y = area.y + area.height / 2;

        let width = area.width.min(text.width() as u16 + 2);
        let height = area.height.min(text.height() as u16 + 2);

        let rect = Rect::new(center_x - width / 2, center_y - height / 2, width, height);

        frame.render_widget(Clear, rect);

        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(style);

        frame.render_widget(paragraph, rect);
    }

    /// Render the popup window to show the help message.
    fn render_help(&self, frame: &mut Frame, area: Rect) {
        self.render_popup(
            frame,
            area,
            "[q]/[Esc]       Quit\n\
             [h]             Show or hide this help message\n\
             [Space]/[Enter] Start or pause the simulation\n\
             [n]             Advance one tick while paused\n\
             [c]             Reset the world\n\
             [+]/[-]         Run faster or slower\n\
             [Arrows]        Move the cursor\n\
             [t]             Toggle the cell under the cursor\n\
             [w]             Place or remove a wall under the cursor\n\
             Left click      Toggle a cell\n\
             Right click     Place or remove a wall",
            "Help",
            Style::new().green(),
        );
    }

    /// Render the popup window to ask the user to confirm quitting.
    fn render_quit(&self, frame: &mut Frame, area: Rect) {
        self.render_popup(
            frame,
            area,
            "Are you sure you want to quit? ([y]/[n])",
            "Quit",
            Style::new().yellow(),
        );
    }
}

/// Terminal color for a cell color.
const fn term_color(color: Color) -> style::Color {
    match color {
        Color::White => style::Color::Gray,
        Color::Blue => style::Color::Blue,
        Color::Black => style::Color::DarkGray,
        Color::Red => style::Color::Red,
    }
}

/// A widget to show the visible area of the world.
///
/// Each cell takes two terminal columns, so that cells look roughly square.
#[derive(Debug)]
struct Board<'a> {
    /// The world.
    world: &'a World,
    /// The cell under the keyboard cursor.
    cursor: (usize, usize),
}

impl<'a> Board<'a> {
    /// Create a new board widget from the app.
    const fn new(app: &'a App) -> Self {
        Self {
            world: &app.world,
            cursor: app.cursor,
        }
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let w = self.world.size_x().min(area.width as usize / 2);
        let h = self.world.size_y().min(area.height as usize);

        for y in 0..h {
            let buf_y = area.y + y as u16;
            for x in 0..w {
                let buf_x = area.x + 2 * x as u16;

                let (symbol, mut style) = match self.world.check_cell(x, y) {
                    Ok(cell) => match cell.color.filter(|_| cell.visible) {
                        Some(color) => ("██", Style::new().fg(term_color(color))),
                        None => ("· ", Style::new().dark_gray()),
                    },
                    Err(_) => ("??", Style::new().magenta()),
                };

                if (x, y) == self.cursor {
                    style = style.reversed();
                }

                buf.set_string(buf_x, buf_y, symbol, style);
            }
        }
    }
}
