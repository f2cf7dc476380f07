//! Driver over a ratatui backend.
//!
//! Cells are queued on `set_cell` and pushed through `Backend::draw` on
//! `flush`. Terminal modes (raw mode, alternate screen) are switched by a
//! [`TerminalModes`] implementation: crossterm on a real terminal, nothing
//! for off-screen backends.

use std::fmt;
use std::io;

use crossterm::ExecutableCommand;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::debug;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};
use ratatui::style::Color;

use crate::error::DriverError;

use super::Driver;

// ============================================================================
// TERMINAL MODES
// ============================================================================

/// Switches the terminal in and out of full-screen drawing mode.
pub trait TerminalModes: fmt::Debug {
    fn enter(&mut self) -> io::Result<()>;

    /// Undo `enter`. Runs every step even if an earlier one fails.
    fn leave(&mut self) -> io::Result<()>;
}

/// Raw mode + alternate screen on stdout.
#[derive(Debug, Default)]
pub struct CrosstermModes;

impl TerminalModes for CrosstermModes {
    fn enter(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?;
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        let screen = io::stdout().execute(LeaveAlternateScreen).map(|_| ());
        let raw = disable_raw_mode();
        screen.and(raw)
    }
}

/// No mode switching (off-screen backends such as `TestBackend`).
#[derive(Debug, Default)]
pub struct Headless;

impl TerminalModes for Headless {
    fn enter(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// DRIVER
// ============================================================================

/// [`Driver`] implementation backed by any ratatui [`Backend`].
#[derive(Debug)]
pub struct BackendDriver<B: Backend> {
    backend: B,
    modes: Box<dyn TerminalModes>,
    initialized: bool,
    size: Size,
    pending: Vec<(u16, u16, Cell)>,
}

impl BackendDriver<CrosstermBackend<io::Stdout>> {
    /// Driver for the process's own terminal.
    pub fn stdout() -> Self {
        Self::with_modes(CrosstermBackend::new(io::stdout()), Box::new(CrosstermModes))
    }
}

impl<B: Backend> BackendDriver<B> {
    /// Driver that never touches terminal modes, e.g. over `TestBackend`.
    pub fn headless(backend: B) -> Self {
        Self::with_modes(backend, Box::new(Headless))
    }

    pub fn with_modes(backend: B, modes: Box<dyn TerminalModes>) -> Self {
        BackendDriver {
            backend,
            modes,
            initialized: false,
            size: Size::default(),
            pending: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Grid size captured at `init`. Zero before that.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Map signed coordinates onto the grid, or `None` when off-grid.
    fn clip(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        (x < self.size.width && y < self.size.height).then_some((x, y))
    }

    fn prepare_backend(&mut self) -> Result<(), DriverError> {
        self.size = self.backend.size().map_err(backend_error)?;
        self.backend.hide_cursor().map_err(backend_error)?;
        self.backend.clear().map_err(backend_error)?;
        self.backend.flush().map_err(backend_error)
    }

    fn restore_backend(&mut self) -> Result<(), DriverError> {
        self.backend
            .set_cursor_position(Position::new(0, 0))
            .map_err(backend_error)?;
        self.backend.show_cursor().map_err(backend_error)?;
        self.backend.flush().map_err(backend_error)
    }
}

fn backend_error<E: std::error::Error>(err: E) -> DriverError {
    DriverError::Backend(err.to_string())
}

impl<B: Backend> Driver for BackendDriver<B> {
    fn init(&mut self) -> Result<(), DriverError> {
        if self.initialized {
            return Err(DriverError::AlreadyInitialized);
        }
        // A half-finished init must not leave the terminal raw.
        let prepared = self
            .modes
            .enter()
            .map_err(DriverError::from)
            .and_then(|()| self.prepare_backend());
        if let Err(err) = prepared {
            let _ = self.modes.leave();
            return Err(err);
        }
        self.initialized = true;
        debug!(
            "driver initialized ({}x{}, {:?})",
            self.size.width, self.size.height, self.modes
        );
        Ok(())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        if !self.initialized {
            return Ok(());
        }
        self.pending.clear();
        self.initialized = false;
        let restored = self.restore_backend();
        let left = self.modes.leave().map_err(DriverError::from);
        debug!("driver closed");
        restored.and(left)
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn set_cell(&mut self, x: i32, y: i32, ch: char, fg: Color, bg: Color) {
        let Some((x, y)) = self.clip(x, y) else {
            return;
        };
        let mut cell = Cell::default();
        cell.set_char(ch).set_fg(fg).set_bg(bg);
        self.pending.push((x, y, cell));
    }

    fn flush(&mut self) -> Result<(), DriverError> {
        if !self.pending.is_empty() {
            self.backend
                .draw(self.pending.iter().map(|(x, y, cell)| (*x, *y, cell)))
                .map_err(backend_error)?;
            self.pending.clear();
        }
        self.backend.flush().map_err(backend_error)
    }
}

// ============================================================================
// TESTS
// ============================================================================
