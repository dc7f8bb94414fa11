//! Terminal application framework

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEvent},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::renderer::{RenderBackend, RenderError, TerminalBackend};

/// A frame-driven terminal application
pub trait SceneApp {
    /// Application state type
    type State;

    /// Handle a key press, return true to continue, false to quit
    fn handle_key(&mut self, key: KeyEvent, state: &mut Self::State) -> bool;

    /// Advance the application by one frame
    fn update(&mut self, state: &mut Self::State, now: Instant);

    /// Render the application
    fn render(&self, state: &Self::State, backend: &mut dyn RenderBackend);

    /// Called after each frame is presented
    fn on_tick(&mut self, _state: &mut Self::State) {}
}

/// Runs a [`SceneApp`] in the terminal at a fixed tick rate
pub struct AppRunner<A: SceneApp> {
    app: A,
    backend: TerminalBackend,
    tick_rate: Duration,
    running: bool,
}

impl<A: SceneApp> AppRunner<A> {
    pub fn new(app: A, tick_rate: Duration) -> Result<Self, RenderError> {
        Ok(Self {
            app,
            backend: TerminalBackend::new()?,
            tick_rate,
            running: true,
        })
    }

    /// Run until the app asks to quit; the terminal is restored even when a
    /// frame fails
    pub fn run(&mut self, mut state: A::State) -> Result<A::State, RenderError> {
        terminal::enable_raw_mode().map_err(RenderError::Init)?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(RenderError::Init(e));
        }

        let result = self.event_loop(&mut state);

        let restored = terminal::disable_raw_mode()
            .and_then(|_| execute!(io::stdout(), LeaveAlternateScreen));
        result?;
        restored?;
        Ok(state)
    }

    fn event_loop(&mut self, state: &mut A::State) -> Result<(), RenderError> {
        let mut last_tick = Instant::now();

        while self.running {
            let timeout = self
                .tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_default();

            if event::poll(timeout)? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if !self.app.handle_key(key, state) {
                        self.running = false;
                        continue;
                    }
                }
            }

            if last_tick.elapsed() >= self.tick_rate {
                let now = Instant::now();
                self.app.update(state, now);

                self.backend.begin_frame()?;
                self.app.render(state, &mut self.backend);
                self.backend.end_frame()?;

                self.app.on_tick(state);
                last_tick = now;
            }
        }
        Ok(())
    }
}
