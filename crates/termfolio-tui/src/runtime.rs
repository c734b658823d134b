//! TUI runtime - owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//! Everything runs on one thread: poll, reduce, draw.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::TuiState;
use crate::terminal::{self, TuiTerminal};
use crate::{render, update};

/// How long to block waiting for input before looping again.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    terminal: TuiTerminal,
    pub state: TuiState,
}

impl TuiRuntime {
    /// Enters the alternate screen and takes ownership of the state.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(state: TuiState) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        Ok(Self { terminal, state })
    }

    /// Runs the main event loop until the reducer asks to quit.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        tracing::info!(theme = %self.state.theme(), "interactive session started");

        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let terminal_events = collect_terminal_events()?;
            if !terminal_events.is_empty() {
                dirty = true;
            }

            // Frame goes first so layout is current before input is applied.
            let size = self.terminal.size()?;
            let mut events = Vec::with_capacity(terminal_events.len() + 1);
            events.push(UiEvent::Frame {
                width: size.width,
                height: size.height,
            });
            events.extend(terminal_events.into_iter().map(UiEvent::Terminal));

            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty && !self.state.should_quit {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::Quit => {
                    tracing::info!("quit requested");
                    self.state.should_quit = true;
                }
            }
        }
    }
}

/// Waits up to `IDLE_POLL_DURATION` for input, then drains whatever else is
/// already buffered.
fn collect_terminal_events() -> Result<Vec<event::Event>> {
    let mut events = Vec::new();
    if event::poll(IDLE_POLL_DURATION)? {
        events.push(event::read()?);
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
    }
    Ok(events)
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
