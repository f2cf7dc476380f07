//! Terminal driver capability consumed by the field manager.
//!
//! The field layer never touches the terminal directly. It sees only this
//! narrow surface: set one cell, flush pending cells, ask whether the
//! driver is up. Clipping of out-of-range coordinates is the driver's job.
//!
//! - `backend`: ratatui backend adapter (crossterm on stdout, or `TestBackend`)
//! - `memory`: unbounded in-memory grid that records every write

pub mod backend;
pub mod memory;

use ratatui::style::Color;

use crate::error::DriverError;

pub use backend::{BackendDriver, CrosstermModes, Headless, TerminalModes};
pub use memory::{CellWrite, MemoryDriver};

/// Low-level character-grid terminal.
///
/// Single-threaded: one caller issues writes in sequence and owns the
/// driver for its whole lifetime.
pub trait Driver {
    /// Bring the terminal up. Must succeed before any field operation.
    fn init(&mut self) -> Result<(), DriverError>;

    /// Reset the cursor to the origin and release the terminal.
    fn close(&mut self) -> Result<(), DriverError>;

    fn is_initialized(&self) -> bool;

    /// Queue one character cell. Out-of-range coordinates are ignored.
    fn set_cell(&mut self, x: i32, y: i32, ch: char, fg: Color, bg: Color);

    /// Commit every queued cell to the display.
    fn flush(&mut self) -> Result<(), DriverError>;
}
