//! Field manager: create, update, border and move text fields.
//!
//! Every operation is a finite sequence of `set_cell` calls against the
//! injected driver followed by one flush. Nothing is bounds-checked here;
//! coordinates may go negative or past the grid and the driver clips.
//!
//! Border geometry for a field at `(x, y)` with length `n`:
//!
//! ```text
//!   x-1   x ... x+n   x+n+1
//!    +    - ... -       +     y-1
//!    |    t e x t       |     y
//!    +    - ... -       +     y+1
//! ```

use log::{debug, warn};

use crate::driver::Driver;
use crate::error::FieldError;
use crate::style::StyleRegistry;
use crate::types::{
    BorderStyle, DEFAULT_BG, DEFAULT_FG, FieldConfig, FieldSnapshot, MoveDirection, MovePolicy,
    TRANSPARENT,
};

// ============================================================================
// FIELD
// ============================================================================

/// A single-line text field at a fixed grid position.
///
/// Mutated only through a [`FieldManager`]. Dropping it needs no teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    x: i32,
    y: i32,
    /// Content width used for border placement. Not a clip on text.
    length: i32,
    border: BorderStyle,
    /// Last text written; redrawn after a move.
    text: String,
}

impl Field {
    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn border(&self) -> BorderStyle {
        self.border
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            x: self.x,
            y: self.y,
            length: self.length,
            border: self.border,
            text: self.text.clone(),
        }
    }

    fn shift(&mut self, direction: MoveDirection) {
        let (dx, dy) = direction.delta();
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }
}

// ============================================================================
// MANAGER
// ============================================================================

/// Translates field operations into cell writes on an owned driver.
#[derive(Debug)]
pub struct FieldManager<'r, D: Driver> {
    driver: D,
    registry: &'r StyleRegistry,
    config: FieldConfig,
}

impl<D: Driver> FieldManager<'static, D> {
    /// Manager over the builtin style registry with default config.
    pub fn new(driver: D) -> Self {
        Self::with_registry(driver, StyleRegistry::builtin())
    }
}

impl<'r, D: Driver> FieldManager<'r, D> {
    pub fn with_registry(driver: D, registry: &'r StyleRegistry) -> Self {
        FieldManager {
            driver,
            registry,
            config: FieldConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn registry(&self) -> &StyleRegistry {
        self.registry
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Create a field at row `y`, column `x` and write its initial text.
    ///
    /// # Errors
    /// `NotInitialized` if the driver is not up; nothing is written.
    pub fn create_field(
        &mut self,
        y: i32,
        x: i32,
        length: i32,
        text: impl Into<String>,
    ) -> Result<Field, FieldError> {
        let mut field = Field {
            x,
            y,
            length,
            border: BorderStyle::None,
            text: String::new(),
        };
        self.update(&mut field, text)?;
        debug!("created field at ({}, {}) length {}", x, y, length);
        Ok(field)
    }

    /// Draw (or erase, with `Clear`) the border around `field`.
    ///
    /// # Errors
    /// `NotInitialized` if the driver is not up, `UnknownStyle` if the
    /// registry has no glyphs for `style`. Nothing is written in either case.
    pub fn draw_box(&mut self, field: &mut Field, style: BorderStyle) -> Result<(), FieldError> {
        self.ensure_initialized()?;
        let glyphs = *self
            .registry
            .glyphs(style)
            .ok_or_else(|| FieldError::UnknownStyle(style.to_string()))?;

        // Coordinates wrap at the ends of the i32 range; the driver clips.
        let left = field.x.wrapping_sub(1);
        let right = field.x.wrapping_add(field.length).wrapping_add(1);
        let top = field.y.wrapping_sub(1);
        let bottom = field.y.wrapping_add(1);

        // Corners
        self.put(left, top, glyphs.top_left);
        self.put(right, top, glyphs.top_right);
        self.put(left, bottom, glyphs.bottom_left);
        self.put(right, bottom, glyphs.bottom_right);
        // Sides
        self.put(left, field.y, glyphs.vertical);
        self.put(right, field.y, glyphs.vertical);
        // Top and bottom
        for i in 0..=field.length {
            let x = field.x.wrapping_add(i);
            self.put(x, top, glyphs.horizontal);
            self.put(x, bottom, glyphs.horizontal);
        }

        self.driver.flush()?;
        field.border = style;
        debug!("drew {} border at ({}, {})", style, field.x, field.y);
        Ok(())
    }

    /// Overwrite the field's row with `text`, one character per cell.
    ///
    /// Cells past the end of `text` are left as they were.
    ///
    /// # Errors
    /// `NotInitialized` if the driver is not up; nothing is written.
    pub fn update(&mut self, field: &mut Field, text: impl Into<String>) -> Result<(), FieldError> {
        self.ensure_initialized()?;
        let text = text.into();
        self.write_text(field.x, field.y, &text)?;
        field.text = text;
        Ok(())
    }

    /// Move `field` one cell in `direction`, redrawing border and text.
    ///
    /// The old border ring is always blanked with `Clear`, even when the
    /// field has no border. Failures of the inner draws are handled per
    /// [`MovePolicy`]: permissive logs them and always returns `Ok`,
    /// strict returns the first one.
    pub fn move_field(
        &mut self,
        field: &mut Field,
        direction: MoveDirection,
    ) -> Result<(), FieldError> {
        let border = field.border;
        debug!("moving field at ({}, {}) {:?}", field.x, field.y, direction);

        match self.config.move_policy {
            MovePolicy::Strict => {
                self.ensure_initialized()?;
                self.draw_box(field, BorderStyle::Clear)?;
                field.shift(direction);
                self.draw_box(field, border)?;
                self.redraw_text(field)
            }
            MovePolicy::Permissive => {
                let erased = self.draw_box(field, BorderStyle::Clear);
                field.shift(direction);
                let redrawn = self.draw_box(field, border);
                let rewritten = self.redraw_text(field);
                for err in [erased, redrawn, rewritten].into_iter().filter_map(Result::err) {
                    warn!("ignored error while moving field: {}", err);
                }
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    fn ensure_initialized(&self) -> Result<(), FieldError> {
        if self.driver.is_initialized() {
            Ok(())
        } else {
            Err(FieldError::NotInitialized)
        }
    }

    fn redraw_text(&mut self, field: &Field) -> Result<(), FieldError> {
        self.ensure_initialized()?;
        self.write_text(field.x, field.y, &field.text)
    }

    fn write_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), FieldError> {
        let mut cx = x;
        for ch in text.chars() {
            self.driver.set_cell(cx, y, ch, DEFAULT_FG, DEFAULT_BG);
            cx = cx.wrapping_add(1);
        }
        self.driver.flush()?;
        Ok(())
    }

    fn put(&mut self, x: i32, y: i32, glyph: char) {
        if glyph != TRANSPARENT {
            self.driver.set_cell(x, y, glyph, DEFAULT_FG, DEFAULT_BG);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{BackendDriver, MemoryDriver};
    use crate::types::Glyphs;
    use ratatui::backend::TestBackend;

    fn manager() -> FieldManager<'static, MemoryDriver> {
        FieldManager::new(MemoryDriver::initialized())
    }

    fn strict_manager() -> FieldManager<'static, MemoryDriver> {
        FieldManager::new(MemoryDriver::initialized()).with_config(FieldConfig {
            move_policy: MovePolicy::Strict,
        })
    }

    fn grid<'a>(m: &'a FieldManager<'static, MemoryDriver>) -> &'a MemoryDriver {
        m.driver()
    }

    // -- CreateField --

    #[test]
    fn create_caches_text_with_no_border() {
        let mut m = manager();
        let field = m.create_field(5, 10, 4, "abcd").unwrap();

        assert_eq!(field.text(), "abcd");
        assert_eq!(field.border(), BorderStyle::None);
        assert_eq!((field.x(), field.y(), field.length()), (10, 5, 4));
        assert_eq!(grid(&m).row(5, 10..14), "abcd");
        assert_eq!(grid(&m).flush_count(), 1);
    }

    #[test]
    fn create_before_init_fails_without_writes() {
        let mut m = FieldManager::new(MemoryDriver::new());
        let result = m.create_field(0, 0, 3, "abc");

        assert!(matches!(result, Err(FieldError::NotInitialized)));
        assert!(grid(&m).writes().is_empty());
        assert_eq!(grid(&m).flush_count(), 0);
    }

    #[test]
    fn text_uses_default_colors() {
        let mut m = manager();
        m.create_field(0, 0, 2, "ok").unwrap();
        for write in grid(&m).writes() {
            assert_eq!((write.fg, write.bg), (DEFAULT_FG, DEFAULT_BG));
        }
    }

    // -- DrawBox --

    #[test]
    fn ascii_box_geometry() {
        let mut m = manager();
        let mut field = m.create_field(5, 10, 4, "abcd").unwrap();
        m.draw_box(&mut field, BorderStyle::Ascii).unwrap();

        let g = grid(&m);
        for (x, y) in [(9, 4), (15, 4), (9, 6), (15, 6)] {
            assert_eq!(g.cell(x, y), Some('+'), "corner at ({}, {})", x, y);
        }
        for x in 10..=14 {
            assert_eq!(g.cell(x, 4), Some('-'));
            assert_eq!(g.cell(x, 6), Some('-'));
        }
        assert_eq!(g.cell(9, 5), Some('|'));
        assert_eq!(g.cell(15, 5), Some('|'));

        assert_eq!(g.row(4, 9..16), "+-----+");
        assert_eq!(g.row(5, 9..16), "|abcd |");
        assert_eq!(g.row(6, 9..16), "+-----+");
        assert_eq!(field.border(), BorderStyle::Ascii);
    }

    #[test]
    fn box_is_three_rows_tall() {
        let mut m = manager();
        let mut field = m.create_field(5, 10, 4, "abcd").unwrap();
        m.driver_mut().clear_log();
        m.draw_box(&mut field, BorderStyle::Unicode).unwrap();

        let rows: std::collections::BTreeSet<_> = grid(&m).writes().iter().map(|w| w.y).collect();
        assert_eq!(rows.into_iter().collect::<Vec<_>>(), vec![4, 5, 6]);
        // 4 corners + 2 sides + 2 * (length + 1) edge cells
        assert_eq!(grid(&m).writes().len(), 4 + 2 + 2 * 5);
    }

    #[test]
    fn unicode_box_uses_box_drawing_glyphs() {
        let mut m = manager();
        let mut field = m.create_field(1, 1, 2, "hi").unwrap();
        m.draw_box(&mut field, BorderStyle::Unicode).unwrap();

        let g = grid(&m);
        assert_eq!(g.row(0, 0..5), "┌───┐");
        assert_eq!(g.row(1, 0..5), "│hi │");
        assert_eq!(g.row(2, 0..5), "└───┘");
    }

    #[test]
    fn draw_box_before_init_fails_without_writes() {
        let mut m = manager();
        let mut field = m.create_field(5, 10, 4, "abcd").unwrap();
        m.driver_mut().close().unwrap();
        m.driver_mut().clear_log();

        let result = m.draw_box(&mut field, BorderStyle::Ascii);
        assert!(matches!(result, Err(FieldError::NotInitialized)));
        assert!(grid(&m).writes().is_empty());
        assert_eq!(field.border(), BorderStyle::None);
    }

    #[test]
    fn unregistered_style_is_unknown_style() {
        let mut registry = StyleRegistry::empty();
        registry.register(BorderStyle::Clear, Glyphs::new([' '; 6]));
        let mut m = FieldManager::with_registry(MemoryDriver::initialized(), &registry);
        let mut field = m.create_field(5, 10, 4, "abcd").unwrap();
        m.driver_mut().clear_log();

        let result = m.draw_box(&mut field, BorderStyle::Ascii);
        assert!(matches!(result, Err(FieldError::UnknownStyle(ref s)) if s == "ascii"));
        assert!(m.driver().writes().is_empty());
        assert_eq!(m.driver().flush_count(), 0);
        assert_eq!(field.border(), BorderStyle::None);
    }

    #[test]
    fn not_initialized_takes_precedence_over_unknown_style() {
        let registry = StyleRegistry::empty();
        let mut m = FieldManager::with_registry(MemoryDriver::initialized(), &registry);
        let mut field = m.create_field(0, 0, 1, "x").unwrap();
        m.driver_mut().close().unwrap();

        let result = m.draw_box(&mut field, BorderStyle::Ascii);
        assert!(matches!(result, Err(FieldError::NotInitialized)));
    }

    #[test]
    fn draw_box_twice_is_idempotent() {
        let mut m = manager();
        let mut field = m.create_field(5, 10, 4, "abcd").unwrap();
        m.draw_box(&mut field, BorderStyle::Ascii).unwrap();
        let once = grid(&m).cells().clone();

        m.draw_box(&mut field, BorderStyle::Ascii).unwrap();
        assert_eq!(grid(&m).cells(), &once);
    }

    #[test]
    fn clear_after_ascii_blanks_every_border_cell() {
        let mut m = manager();
        let mut field = m.create_field(5, 10, 4, "abcd").unwrap();
        m.draw_box(&mut field, BorderStyle::Ascii).unwrap();
        m.draw_box(&mut field, BorderStyle::Clear).unwrap();

        let g = grid(&m);
        for x in 9..=15 {
            assert_eq!(g.cell(x, 4), Some(' '));
            assert_eq!(g.cell(x, 6), Some(' '));
        }
        assert_eq!(g.cell(9, 5), Some(' '));
        assert_eq!(g.cell(15, 5), Some(' '));
        assert_eq!(g.row(5, 10..14), "abcd");
        assert_eq!(field.border(), BorderStyle::Clear);
    }

    #[test]
    fn none_style_writes_nothing_but_flushes() {
        let mut m = manager();
        let mut field = m.create_field(5, 10, 4, "abcd").unwrap();
        m.draw_box(&mut field, BorderStyle::Ascii).unwrap();
        m.driver_mut().clear_log();

        m.draw_box(&mut field, BorderStyle::None).unwrap();
        assert!(grid(&m).writes().is_empty());
        assert_eq!(grid(&m).flush_count(), 1);
        assert_eq!(grid(&m).row(4, 9..16), "+-----+");
        assert_eq!(field.border(), BorderStyle::None);
    }

    #[test]
    fn zero_length_box_still_has_a_margin_column() {
        let mut m = manager();
        let mut field = m.create_field(1, 1, 0, "").unwrap();
        m.draw_box(&mut field, BorderStyle::Ascii).unwrap();
        assert_eq!(grid(&m).row(0, 0..3), "+-+");
        assert_eq!(grid(&m).row(1, 0..3), "| |");
    }

    // -- Update --

    #[test]
    fn shorter_update_leaves_stale_tail() {
        let mut m = manager();
        let mut field = m.create_field(0, 0, 5, "hello").unwrap();
        m.update(&mut field, "hi").unwrap();

        assert_eq!(grid(&m).row(0, 0..5), "hillo");
        assert_eq!(field.text(), "hi");
    }

    #[test]
    fn update_is_not_clipped_to_length() {
        let mut m = manager();
        let mut field = m.create_field(5, 10, 2, "ab").unwrap();
        m.draw_box(&mut field, BorderStyle::Ascii).unwrap();
        m.update(&mut field, "abcdef").unwrap();

        // Right border at x + length + 1 = 13 is overwritten by 'd'.
        assert_eq!(grid(&m).row(5, 9..16), "|abcdef");
    }

    #[test]
    fn update_advances_one_cell_per_char() {
        let mut m = manager();
        let field = m.create_field(0, 0, 3, "é─x").unwrap();
        assert_eq!(grid(&m).cell(0, 0), Some('é'));
        assert_eq!(grid(&m).cell(1, 0), Some('─'));
        assert_eq!(grid(&m).cell(2, 0), Some('x'));
        assert_eq!(field.text(), "é─x");
    }

    #[test]
    fn update_before_init_fails_without_writes() {
        let mut m = manager();
        let mut field = m.create_field(0, 0, 3, "abc").unwrap();
        m.driver_mut().close().unwrap();
        m.driver_mut().clear_log();

        let result = m.update(&mut field, "xyz");
        assert!(matches!(result, Err(FieldError::NotInitialized)));
        assert!(grid(&m).writes().is_empty());
        assert_eq!(field.text(), "abc");
    }

    #[test]
    fn negative_coordinates_are_passed_through() {
        let mut m = manager();
        let mut field = m.create_field(0, 0, 1, "x").unwrap();
        m.draw_box(&mut field, BorderStyle::Ascii).unwrap();
        assert_eq!(grid(&m).cell(-1, -1), Some('+'));
    }

    // -- Move --

    #[test]
    fn move_right_redraws_border_and_clears_old_column() {
        let mut m = manager();
        let mut field = m.create_field(5, 10, 4, "abcd").unwrap();
        m.draw_box(&mut field, BorderStyle::Ascii).unwrap();
        m.move_field(&mut field, MoveDirection::Right).unwrap();

        assert_eq!((field.x(), field.y()), (11, 5));
        assert_eq!(field.border(), BorderStyle::Ascii);

        let g = grid(&m);
        assert_eq!(g.row(4, 9..17), " +-----+");
        assert_eq!(g.row(5, 9..17), " |abcd |");
        assert_eq!(g.row(6, 9..17), " +-----+");
        assert_eq!(g.cell(9, 4), Some(' '));
        assert_eq!(g.cell(9, 6), Some(' '));
    }

    #[test]
    fn move_down_then_up_returns_to_origin() {
        let mut m = manager();
        let mut field = m.create_field(5, 10, 3, "abc").unwrap();
        m.draw_box(&mut field, BorderStyle::Unicode).unwrap();

        m.move_field(&mut field, MoveDirection::Down).unwrap();
        assert_eq!((field.x(), field.y()), (10, 6));
        m.move_field(&mut field, MoveDirection::Up).unwrap();
        assert_eq!((field.x(), field.y()), (10, 5));

        let g = grid(&m);
        assert_eq!(g.row(4, 9..15), "┌────┐");
        assert_eq!(g.row(5, 9..15), "│abc │");
        assert_eq!(g.row(6, 9..15), "└────┘");
        assert_eq!(g.row(7, 9..15), "      ");
    }

    #[test]
    fn move_left_shifts_x() {
        let mut m = manager();
        let mut field = m.create_field(2, 2, 1, "z").unwrap();
        m.move_field(&mut field, MoveDirection::Left).unwrap();
        assert_eq!((field.x(), field.y()), (1, 2));
        assert_eq!(grid(&m).cell(1, 2), Some('z'));
    }

    #[test]
    fn move_without_border_still_blanks_the_ring() {
        let mut m = manager();
        let mut field = m.create_field(5, 10, 2, "ab").unwrap();
        m.driver_mut().set_cell(9, 4, '#', DEFAULT_FG, DEFAULT_BG);
        m.driver_mut().flush().unwrap();

        m.move_field(&mut field, MoveDirection::Right).unwrap();
        assert_eq!(grid(&m).cell(9, 4), Some(' '));
        assert_eq!(field.border(), BorderStyle::None);
        assert_eq!(grid(&m).row(5, 11..13), "ab");
    }

    #[test]
    fn permissive_move_swallows_not_initialized() {
        let mut m = manager();
        let mut field = m.create_field(5, 10, 4, "abcd").unwrap();
        m.draw_box(&mut field, BorderStyle::Ascii).unwrap();
        m.driver_mut().close().unwrap();
        m.driver_mut().clear_log();

        m.move_field(&mut field, MoveDirection::Right).unwrap();
        assert_eq!(field.x(), 11);
        assert_eq!(field.border(), BorderStyle::Ascii);
        assert!(grid(&m).writes().is_empty());
    }

    #[test]
    fn strict_move_reports_not_initialized_and_stays_put() {
        let mut m = strict_manager();
        let mut field = m.create_field(5, 10, 4, "abcd").unwrap();
        m.driver_mut().close().unwrap();

        let result = m.move_field(&mut field, MoveDirection::Down);
        assert!(matches!(result, Err(FieldError::NotInitialized)));
        assert_eq!((field.x(), field.y()), (10, 5));
    }

    #[test]
    fn strict_move_reports_missing_clear_style() {
        let registry = StyleRegistry::empty();
        let mut m = FieldManager::with_registry(MemoryDriver::initialized(), &registry)
            .with_config(FieldConfig {
                move_policy: MovePolicy::Strict,
            });
        let mut field = m.create_field(5, 10, 4, "abcd").unwrap();

        let result = m.move_field(&mut field, MoveDirection::Left);
        assert!(matches!(result, Err(FieldError::UnknownStyle(ref s)) if s == "clear"));
        assert_eq!(field.x(), 10);
    }

    #[test]
    fn strict_move_succeeds_like_permissive_when_healthy() {
        let mut strict = strict_manager();
        let mut permissive = manager();
        let mut a = strict.create_field(5, 10, 4, "abcd").unwrap();
        let mut b = permissive.create_field(5, 10, 4, "abcd").unwrap();
        strict.draw_box(&mut a, BorderStyle::Ascii).unwrap();
        permissive.draw_box(&mut b, BorderStyle::Ascii).unwrap();

        strict.move_field(&mut a, MoveDirection::Up).unwrap();
        permissive.move_field(&mut b, MoveDirection::Up).unwrap();

        assert_eq!(a, b);
        assert_eq!(strict.driver().cells(), permissive.driver().cells());
    }

    #[test]
    fn snapshot_copies_state() {
        let mut m = manager();
        let mut field = m.create_field(3, 4, 5, "hey").unwrap();
        m.draw_box(&mut field, BorderStyle::Unicode).unwrap();
        let snap = field.snapshot();
        assert_eq!(
            snap,
            FieldSnapshot {
                x: 4,
                y: 3,
                length: 5,
                border: BorderStyle::Unicode,
                text: "hey".into(),
            }
        );
    }

    // -- Coordinate extremes --

    #[test]
    fn border_at_top_of_range_wraps_instead_of_panicking() {
        let mut m = manager();
        let mut field = m.create_field(0, i32::MAX - 2, 4, "").unwrap();
        m.draw_box(&mut field, BorderStyle::Ascii).unwrap();

        let g = grid(&m);
        assert_eq!(g.cell(i32::MAX - 3, -1), Some('+'));
        // x + length + 1 wraps past i32::MAX
        assert_eq!(g.cell(i32::MIN + 2, -1), Some('+'));
        assert_eq!(g.cell(i32::MAX, 1), Some('-'));
        assert_eq!(g.cell(i32::MIN, 1), Some('-'));
    }

    #[test]
    fn text_at_top_of_range_wraps_instead_of_panicking() {
        let mut m = manager();
        m.create_field(0, i32::MAX, 2, "ab").unwrap();
        assert_eq!(grid(&m).cell(i32::MAX, 0), Some('a'));
        assert_eq!(grid(&m).cell(i32::MIN, 0), Some('b'));
    }

    #[test]
    fn move_past_top_of_range_wraps_instead_of_panicking() {
        let mut m = manager();
        let mut field = m.create_field(i32::MIN, i32::MAX - 1, 0, "").unwrap();
        m.move_field(&mut field, MoveDirection::Right).unwrap();
        m.move_field(&mut field, MoveDirection::Right).unwrap();
        assert_eq!(field.x(), i32::MIN);
        m.move_field(&mut field, MoveDirection::Up).unwrap();
        assert_eq!(field.y(), i32::MAX);
    }

    #[test]
    fn extreme_coordinates_are_clipped_by_backend_driver() {
        let mut driver = BackendDriver::headless(TestBackend::new(6, 3));
        driver.init().unwrap();
        let mut m = FieldManager::new(driver);
        let mut field = m.create_field(i32::MAX, i32::MAX, 3, "abc").unwrap();
        m.draw_box(&mut field, BorderStyle::Unicode).unwrap();
        m.move_field(&mut field, MoveDirection::Down).unwrap();
        assert_eq!(field.y(), i32::MIN);
    }

    // -- Rendering through a ratatui backend --

    fn rendered_row(driver: &BackendDriver<TestBackend>, y: u16, xs: std::ops::Range<u16>) -> String {
        let buffer = driver.backend().buffer();
        xs.map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn renders_through_test_backend() {
        let mut driver = BackendDriver::headless(TestBackend::new(20, 8));
        driver.init().unwrap();
        let mut m = FieldManager::new(driver);
        let mut field = m.create_field(2, 3, 4, "name").unwrap();
        m.draw_box(&mut field, BorderStyle::Unicode).unwrap();
        m.move_field(&mut field, MoveDirection::Right).unwrap();

        let driver = m.into_driver();
        assert_eq!(rendered_row(&driver, 1, 2..10), " ┌─────┐");
        assert_eq!(rendered_row(&driver, 2, 2..10), " │name │");
        assert_eq!(rendered_row(&driver, 3, 2..10), " └─────┘");
    }

    #[test]
    fn border_off_the_grid_is_clipped_by_driver() {
        let mut driver = BackendDriver::headless(TestBackend::new(6, 3));
        driver.init().unwrap();
        let mut m = FieldManager::new(driver);
        let mut field = m.create_field(0, 0, 3, "abc").unwrap();
        m.draw_box(&mut field, BorderStyle::Ascii).unwrap();

        let driver = m.into_driver();
        assert_eq!(rendered_row(&driver, 0, 0..6), "abc | ");
        assert_eq!(rendered_row(&driver, 1, 0..6), "----+ ");
    }
}
