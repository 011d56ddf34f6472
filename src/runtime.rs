//! Terminal input for the game loop.
//!
//! Raw crossterm events are translated into [`HangEvent`]s here, so the rest
//! of the crate only ever sees guesses, quit requests, resizes and ticks.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{trace, warn};

use crate::app::App;

/// What the game loop reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HangEvent {
    /// A character key, lowercased. The engine decides whether it is a letter.
    Guess(char),
    Quit,
    Resize,
    Tick,
}

/// Maps a terminal event to a game event. `None` for events the game ignores.
pub fn translate(event: Event) -> Option<HangEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Resize(_, _) => Some(HangEvent::Resize),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<HangEvent> {
    // windows reports releases too; one guess per physical press
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(HangEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(HangEvent::Quit)
        }
        KeyCode::Char(c) => Some(HangEvent::Guess(c.to_lowercase().next().unwrap_or(c))),
        _ => None,
    }
}

/// Result of waiting on an [`InputSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Poll {
    Event(HangEvent),
    /// Nothing arrived in time, or only events the game ignores.
    Idle,
    /// The source is gone; the loop should stop.
    Closed,
}

pub trait InputSource {
    fn poll(&mut self, timeout: Duration) -> Poll;
}

/// Terminal events delivered over a channel.
///
/// [`TerminalInput::spawn`] feeds it from a crossterm reader thread; tests
/// feed it directly with [`TerminalInput::from_channel`].
pub struct TerminalInput {
    rx: Receiver<Event>,
}

impl TerminalInput {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            match event::read() {
                Ok(evt) => {
                    if tx.send(evt).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!(%err, "terminal event reader stopped");
                    break;
                }
            }
        });

        Self { rx }
    }

    pub fn from_channel(rx: Receiver<Event>) -> Self {
        Self { rx }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> Poll {
        match self.rx.recv_timeout(timeout) {
            Ok(evt) => translate(evt).map_or(Poll::Idle, Poll::Event),
            Err(RecvTimeoutError::Timeout) => Poll::Idle,
            Err(RecvTimeoutError::Disconnected) => Poll::Closed,
        }
    }
}

/// Drives an [`App`] from an input source, one event at a time.
pub struct Runner<S: InputSource> {
    source: S,
    tick: Duration,
}

impl<S: InputSource> Runner<S> {
    pub fn new(source: S, tick: Duration) -> Self {
        Self { source, tick }
    }

    /// Next event, with idle waits reported as `Tick`. `None` once the
    /// source has closed.
    pub fn step(&mut self) -> Option<HangEvent> {
        match self.source.poll(self.tick) {
            Poll::Event(event) => Some(event),
            Poll::Idle => Some(HangEvent::Tick),
            Poll::Closed => None,
        }
    }

    /// Plays until the player quits or the input closes. `draw` is called
    /// once up front and after every event that changed what is on screen.
    pub fn run<E, F>(&mut self, app: &mut App, mut draw: F) -> Result<(), E>
    where
        F: FnMut(&mut App) -> Result<(), E>,
    {
        draw(app)?;

        while let Some(event) = self.step() {
            let redraw = match event {
                HangEvent::Quit => break,
                HangEvent::Guess(c) => {
                    trace!(guess = %c, "key");
                    app.guess(c);
                    true
                }
                HangEvent::Tick => app.on_tick(),
                HangEvent::Resize => true,
            };
            if redraw {
                draw(app)?;
            }
        }

        Ok(())
    }
}
