use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use std::{
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::Duration,
};

/// What the mouse did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    /// The left button was pressed.
    Click,
    /// The mouse moved while holding the left button.
    Drag,
    /// The right button was pressed.
    RightClick,
}

/// Terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    /// Key press event.
    KeyPress(KeyCode),
    /// Mouse event at a terminal position.
    Mouse {
        action: MouseAction,
        column: u16,
        row: u16,
    },
    /// Terminal resize event.
    Resize,
}

/// Terminal events handler.
#[derive(Debug)]
pub struct EventHandler {
    /// Channel to receive events from the event thread.
    rx: Receiver<TermEvent>,
}

impl EventHandler {
    /// Create a new [`EventHandler`].
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || -> Result<()> {
            loop {
                match event::read()? {
                    Event::Key(e) => {
                        // Send the event only if it is a key press.
                        if e.kind == KeyEventKind::Press {
                            tx.send(TermEvent::KeyPress(e.code))?;
                        }
                    }
                    Event::Mouse(e) => {
                        let action = match e.kind {
                            MouseEventKind::Down(MouseButton::Left) => MouseAction::Click,
                            MouseEventKind::Drag(MouseButton::Left) => MouseAction::Drag,
                            MouseEventKind::Down(MouseButton::Right) => MouseAction::RightClick,
                            _ => continue,
                        };
                        tx.send(TermEvent::Mouse {
                            action,
                            column: e.column,
                            row: e.row,
                        })?;
                    }
                    Event::Resize(_, _) => {
                        tx.send(TermEvent::Resize)?;
                    }
                    _ => {}
                }
            }
        });

        Self { rx }
    }

    /// Receive an event.
    pub fn recv(&self) -> Result<TermEvent> {
        Ok(self.rx.recv()?)
    }

    /// Wait at most `timeout` for an event.
    ///
    /// If no event arrives in time, return [`None`].
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<TermEvent>> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
