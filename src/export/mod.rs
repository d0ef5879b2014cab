//! Export pipeline: plain-text files and paginated raster PDFs.
//!
//! The text path flattens every rich-text field and interpolates the
//! flat fields in a fixed section order. The PDF path takes a pixel
//! capture of the rendered resume surface and tiles it across physical
//! pages; it never re-renders content itself.

mod pdf;
mod text;

pub use pdf::{
    export_pdf, export_pdf_from, plan_pages, PageFormat, PagePlan, PdfExportOptions,
    RenderedSurface, SurfaceCapture,
};
pub use text::{export_text, write_text, TextExportOptions};
