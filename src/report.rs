//! Report formatting for field state and the style table.
//!
//! Pure functions — (data, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::style::StyleRegistry;
use crate::types::{BorderStyle, FieldSnapshot, Glyphs, OutputFormat};

/// Format a field's final state for output.
pub fn format_field(field: &FieldSnapshot, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_field_human(field),
        OutputFormat::Json => to_json(field),
    }
}

/// Format every style in `registry` with its glyphs.
pub fn format_styles(registry: &StyleRegistry, format: OutputFormat) -> String {
    let rows: Vec<StyleRow> = registry
        .entries()
        .into_iter()
        .map(|(style, glyphs)| StyleRow {
            style,
            glyphs: glyphs.to_array(),
        })
        .collect();

    match format {
        OutputFormat::Human => format_styles_human(&rows),
        OutputFormat::Json => to_json(&rows),
    }
}

#[derive(Serialize)]
struct StyleRow {
    style: BorderStyle,
    glyphs: [char; 6],
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_field_human(field: &FieldSnapshot) -> String {
    let mut out = String::new();
    out.push_str("=== Field ===\n");
    out.push_str(&format!("Position: x={} y={}\n", field.x, field.y));
    out.push_str(&format!("Length:   {}\n", field.length));
    out.push_str(&format!("Border:   {}\n", field.border));
    out.push_str(&format!("Text:     {:?}\n", field.text));
    out
}

fn format_styles_human(rows: &[StyleRow]) -> String {
    let mut out = String::new();
    out.push_str("=== Border Styles ===\n");
    for row in rows {
        out.push_str(&format!("{:<8} {}\n", row.style.name(), preview(Glyphs::new(row.glyphs))));
    }
    out
}

/// One-line rendering of a glyph set, or a label when it draws nothing visible.
fn preview(glyphs: Glyphs) -> String {
    if glyphs.is_transparent() {
        return "(transparent)".to_string();
    }
    let array = glyphs.to_array();
    if array.iter().all(|c| c.is_whitespace()) {
        return "(blank)".to_string();
    }
    array.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // Plain data types; serialization cannot fail
        panic!("Failed to serialize to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
