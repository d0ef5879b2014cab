//! # cvforge
//!
//! Core library of a resume builder: a rich-text document model for
//! section descriptions, a tolerant codec for the persisted field
//! encoding, a flattener feeding previews and exporters, the resume
//! aggregate with copy-on-write section updates, and an export pipeline
//! producing plain-text files and paginated raster PDFs.
//!
//! ## Quick Start
//!
//! ```
//! use cvforge::{export_text, Document, Heading, Resume, Skill, TextExportOptions};
//!
//! fn main() -> cvforge::Result<()> {
//!     let resume = Resume::new()
//!         .with_heading(Heading {
//!             first_name: "Ada".to_string(),
//!             last_name: "Lovelace".to_string(),
//!             email: "Ada@example.com, ada@example.com".to_string(),
//!             ..Default::default()
//!         })
//!         .with_summary(Document::from_plain_text("Analyst and first programmer."))
//!         .add_skill(Skill::new("Mathematics", 5));
//!
//!     // Duplicate addresses were deduplicated on update.
//!     assert_eq!(resume.heading.email, "ada@example.com");
//!
//!     let text = export_text(&resume, &TextExportOptions::default());
//!     println!("{text}");
//!     Ok(())
//! }
//! ```
//!
//! ## Design notes
//!
//! - Every update to the aggregate returns a new value; previous
//!   snapshots stay valid for previews still rendering them.
//! - [`codec::parse`] never fails: malformed persisted fields degrade to
//!   a valid document instead of dropping user content.
//! - The PDF exporter tiles a pixel capture of the rendered surface; it
//!   performs no text layout of its own.

pub mod codec;
pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod resume;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{
    export_pdf, export_pdf_from, export_text, plan_pages, write_text, PageFormat, PagePlan,
    PdfExportOptions, RenderedSurface, SurfaceCapture, TextExportOptions,
};
pub use model::{Document, ListItem, Node, TextRun};
pub use render::{flatten_to_lines, flatten_to_text, Line};
pub use resume::{
    Certification, CustomSection, Education, Experience, Heading, Language, Resume, Skill,
};

/// Parse a persisted rich-text field value into a document.
///
/// Convenience wrapper around [`codec::parse`]; total over its input.
pub fn parse_document(input: Option<&str>) -> Document {
    codec::parse(input)
}

/// Serialize a document to its persisted string form.
///
/// Convenience wrapper around [`codec::serialize`].
pub fn serialize_document(doc: &Document) -> String {
    codec::serialize(doc)
}
