//! Domain types for termfields.
//!
//! Border styles, movement directions, glyph sets, and configuration.
//! Pure data — the registry and the field manager program against these.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

// ============================================================================
// COLORS
// ============================================================================

/// Foreground every field cell is written with (the terminal's default).
pub const DEFAULT_FG: Color = Color::Reset;

/// Background every field cell is written with (the terminal's default).
pub const DEFAULT_BG: Color = Color::Reset;

// ============================================================================
// ENUMS
// ============================================================================

/// Border drawn one cell outside a field's text row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Transparent: no cell is written.
    #[default]
    None,
    /// All blanks. Erases a previously drawn border.
    Clear,
    /// `+ + + + - |`
    Ascii,
    /// Light box-drawing characters.
    Unicode,
}

impl BorderStyle {
    /// Every style, in table order.
    pub const ALL: [BorderStyle; 4] = [
        BorderStyle::None,
        BorderStyle::Clear,
        BorderStyle::Ascii,
        BorderStyle::Unicode,
    ];

    /// Lowercase name used by the CLI and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Clear => "clear",
            BorderStyle::Ascii => "ascii",
            BorderStyle::Unicode => "unicode",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderStyle {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BorderStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FieldError::UnknownStyle(s.to_string()))
    }
}

/// Direction a field can be moved by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Left,
    Right,
    Up,
    Down,
}

impl MoveDirection {
    /// Unit delta `(dx, dy)`. Exactly one axis is non-zero.
    pub fn delta(self) -> (i32, i32) {
        match self {
            MoveDirection::Left => (-1, 0),
            MoveDirection::Right => (1, 0),
            MoveDirection::Up => (0, -1),
            MoveDirection::Down => (0, 1),
        }
    }
}

// ============================================================================
// GLYPHS
// ============================================================================

/// Glyph that is never written to the grid.
pub const TRANSPARENT: char = '\0';

/// The six glyphs that make up a box border.
///
/// Order is fixed: top-left, top-right, bottom-left, bottom-right,
/// horizontal, vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Glyphs {
    /// Build from the fixed six-glyph order.
    pub const fn new(glyphs: [char; 6]) -> Self {
        Glyphs {
            top_left: glyphs[0],
            top_right: glyphs[1],
            bottom_left: glyphs[2],
            bottom_right: glyphs[3],
            horizontal: glyphs[4],
            vertical: glyphs[5],
        }
    }

    pub fn to_array(self) -> [char; 6] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
            self.horizontal,
            self.vertical,
        ]
    }

    /// True when no glyph would write a cell.
    pub fn is_transparent(&self) -> bool {
        self.to_array().iter().all(|&c| c == TRANSPARENT)
    }
}

// ============================================================================
// SNAPSHOTS
// ============================================================================

/// Serializable copy of a field's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub x: i32,
    pub y: i32,
    pub length: i32,
    pub border: BorderStyle,
    pub text: String,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// How `move_field` treats failures of the draws it is composed of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovePolicy {
    /// Log and swallow inner failures; the field is always repositioned.
    #[default]
    Permissive,
    /// Return the first inner failure.
    Strict,
}

/// Configuration for a [`FieldManager`](crate::field::FieldManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub move_policy: MovePolicy,
}

// ============================================================================
// TESTS
// ============================================================================
