//! termfields: updateable text fields at fixed positions in the terminal.
//!
//! A field is a single row of text with an optional box border drawn one
//! cell around it. Fields can be rewritten, re-bordered and nudged one cell
//! at a time. All drawing goes through a [`driver::Driver`].

pub mod driver;
pub mod error;
pub mod field;
pub mod report;
pub mod style;
pub mod types;

pub use driver::{BackendDriver, Driver, MemoryDriver};
pub use error::{DriverError, FieldError};
pub use field::{Field, FieldManager};
pub use style::StyleRegistry;
pub use types::{BorderStyle, FieldConfig, MoveDirection, MovePolicy};
