//! In-memory cell grid.
//!
//! Unbounded in both directions (negative coordinates included), so every
//! write the field layer issues is observable. Keeps a log of all
//! `set_cell` calls and a flush counter for assertions.

use std::collections::HashMap;

use ratatui::style::Color;

use crate::error::DriverError;

use super::Driver;

/// One recorded `set_cell` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellWrite {
    pub x: i32,
    pub y: i32,
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

/// [`Driver`] over an in-memory grid, for tests and headless use.
///
/// Starts uninitialized unless built with [`MemoryDriver::initialized`].
#[derive(Debug, Default)]
pub struct MemoryDriver {
    initialized: bool,
    cells: HashMap<(i32, i32), char>,
    pending: Vec<CellWrite>,
    writes: Vec<CellWrite>,
    flushes: usize,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A driver that has already been through `init`.
    pub fn initialized() -> Self {
        MemoryDriver {
            initialized: true,
            ..Self::default()
        }
    }

    /// Flushed character at `(x, y)`, if any was ever written there.
    pub fn cell(&self, x: i32, y: i32) -> Option<char> {
        self.cells.get(&(x, y)).copied()
    }

    /// Flushed characters of row `y` over `xs`, blanks for unwritten cells.
    pub fn row(&self, y: i32, xs: std::ops::Range<i32>) -> String {
        xs.map(|x| self.cell(x, y).unwrap_or(' ')).collect()
    }

    /// Every `set_cell` call so far, in order.
    pub fn writes(&self) -> &[CellWrite] {
        &self.writes
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Snapshot of every flushed cell.
    pub fn cells(&self) -> &HashMap<(i32, i32), char> {
        &self.cells
    }

    /// Forget the write log and flush count; grid contents stay.
    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.flushes = 0;
    }
}

impl Driver for MemoryDriver {
    fn init(&mut self) -> Result<(), DriverError> {
        if self.initialized {
            return Err(DriverError::AlreadyInitialized);
        }
        self.initialized = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        self.initialized = false;
        self.pending.clear();
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn set_cell(&mut self, x: i32, y: i32, ch: char, fg: Color, bg: Color) {
        let write = CellWrite { x, y, ch, fg, bg };
        self.pending.push(write);
        self.writes.push(write);
    }

    fn flush(&mut self) -> Result<(), DriverError> {
        for write in self.pending.drain(..) {
            self.cells.insert((write.x, write.y), write.ch);
        }
        self.flushes += 1;
        Ok(())
    }
}
