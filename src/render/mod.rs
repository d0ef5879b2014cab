//! Flattening documents into renderable lines.
//!
//! The interactive editor consumes the document tree directly; everything
//! else — the plain-text exporter and the static (read-only) preview
//! surfaces — works from a flattened view produced here.

mod styled;
mod text;

pub use styled::{flatten_to_lines, Line};
pub use text::{flatten_to_text, BULLET_PREFIX};
