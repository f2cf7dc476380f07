//! Border style registry: style → six glyphs.
//!
//! Pure data lookup. The builtin registry is built once per process and
//! never mutated; callers that need a different table build their own.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::{BorderStyle, Glyphs, TRANSPARENT};

// ============================================================================
// GLYPH TABLES
// ============================================================================

pub const CLEAR_GLYPHS: Glyphs = Glyphs::new([' '; 6]);

pub const NONE_GLYPHS: Glyphs = Glyphs::new([TRANSPARENT; 6]);

pub const ASCII_GLYPHS: Glyphs = Glyphs::new(['+', '+', '+', '+', '-', '|']);

pub const UNICODE_GLYPHS: Glyphs = Glyphs::new([
    '\u{250c}', // ┌
    '\u{2510}', // ┐
    '\u{2514}', // └
    '\u{2518}', // ┘
    '\u{2500}', // ─
    '\u{2502}', // │
]);

// ============================================================================
// REGISTRY
// ============================================================================

/// Mapping from border style to its glyphs.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    glyphs: HashMap<BorderStyle, Glyphs>,
}

impl StyleRegistry {
    /// The process-wide registry of builtin styles.
    pub fn builtin() -> &'static StyleRegistry {
        static BUILTIN: OnceLock<StyleRegistry> = OnceLock::new();
        BUILTIN.get_or_init(StyleRegistry::with_builtin_styles)
    }

    /// A registry with no styles at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A fresh registry holding the four builtin styles.
    pub fn with_builtin_styles() -> Self {
        let mut registry = Self::empty();
        registry.register(BorderStyle::Clear, CLEAR_GLYPHS);
        registry.register(BorderStyle::None, NONE_GLYPHS);
        registry.register(BorderStyle::Ascii, ASCII_GLYPHS);
        registry.register(BorderStyle::Unicode, UNICODE_GLYPHS);
        registry
    }

    /// Add or replace a style. Returns the glyphs it replaced.
    pub fn register(&mut self, style: BorderStyle, glyphs: Glyphs) -> Option<Glyphs> {
        self.glyphs.insert(style, glyphs)
    }

    /// Look up a style's glyphs. `None` means the style is not registered.
    pub fn glyphs(&self, style: BorderStyle) -> Option<&Glyphs> {
        self.glyphs.get(&style)
    }

    pub fn contains(&self, style: BorderStyle) -> bool {
        self.glyphs.contains_key(&style)
    }

    /// Registered styles in [`BorderStyle::ALL`] order.
    pub fn entries(&self) -> Vec<(BorderStyle, Glyphs)> {
        BorderStyle::ALL
            .into_iter()
            .filter_map(|style| self.glyphs(style).map(|g| (style, *g)))
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
