//! Paginated PDF export from a rendered surface capture.
//!
//! The visual exporter does not lay out text. It takes one tall pixel
//! capture of the rendered resume surface, scales it to the printable
//! width of the chosen page format, and tiles it vertically across as
//! many pages as the scaled height requires. The capture is embedded
//! once as a shared image XObject; every page draws it with a different
//! vertical offset.

use printpdf::image::RawImage;
use printpdf::ops::Op;
use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, XObjectId};

use crate::error::{Error, Result};

/// Physical page format, portrait orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFormat {
    /// ISO A4, 210 x 297 mm
    #[default]
    A4,
    /// US Letter, 8.5 x 11 in
    Letter,
}

impl PageFormat {
    /// Page dimensions in millimeters (width, height).
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PageFormat::A4 => (210.0, 297.0),
            PageFormat::Letter => (215.9, 279.4),
        }
    }
}

/// Options for PDF export.
#[derive(Debug, Clone)]
pub struct PdfExportOptions {
    /// Page format
    pub format: PageFormat,

    /// Uniform margin on all sides, in millimeters
    pub margin_mm: f32,

    /// PDF document title
    pub title: String,
}

impl PdfExportOptions {
    /// Create options with defaults (A4, 10 mm margin).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page format.
    pub fn with_format(mut self, format: PageFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the uniform margin in millimeters.
    pub fn with_margin(mut self, margin_mm: f32) -> Self {
        self.margin_mm = margin_mm;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for PdfExportOptions {
    fn default() -> Self {
        Self {
            format: PageFormat::A4,
            margin_mm: 10.0,
            title: "Resume".to_string(),
        }
    }
}

/// A pixel capture of the rendered resume surface.
///
/// The capture is an encoded PNG produced by the collaborating render
/// surface; this crate never rasterizes anything itself.
#[derive(Debug, Clone)]
pub struct RenderedSurface {
    /// Capture width in pixels
    pub width_px: u32,

    /// Capture height in pixels
    pub height_px: u32,

    /// Encoded PNG bytes
    pub image_data: Vec<u8>,
}

impl RenderedSurface {
    /// Create a surface from known dimensions and encoded bytes.
    pub fn new(width_px: u32, height_px: u32, image_data: Vec<u8>) -> Self {
        Self {
            width_px,
            height_px,
            image_data,
        }
    }

    /// Create a surface from encoded PNG bytes, reading the dimensions
    /// from the image itself.
    pub fn from_png_bytes(image_data: Vec<u8>) -> Result<Self> {
        let mut warnings = Vec::new();
        let raw = RawImage::decode_from_bytes(&image_data, &mut warnings)
            .map_err(|e| Error::Surface(format!("failed to decode capture: {e}")))?;
        Ok(Self {
            width_px: raw.width as u32,
            height_px: raw.height as u32,
            image_data,
        })
    }
}

/// A collaborating surface that can be captured for export.
///
/// In the browser shell this wraps the rendered preview element; in
/// tests and the CLI it wraps pre-rendered image files.
pub trait SurfaceCapture {
    /// Capture the surface as an encoded image.
    fn capture(&self) -> Result<RenderedSurface>;
}

/// The computed tiling of a capture across pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlan {
    /// Number of pages
    pub pages: usize,

    /// Pixel-to-point scale factor
    pub scale: f32,

    /// Scaled content height in points
    pub content_height_pt: f32,

    /// Printable height per page in points
    pub printable_height_pt: f32,
}

/// Compute how a capture of the given pixel size tiles across pages.
///
/// The capture is scaled to the printable width (page width minus both
/// margins). Page count is the ceiling of scaled height over printable
/// height, and always at least one; no page receives zero new content.
pub fn plan_pages(width_px: u32, height_px: u32, options: &PdfExportOptions) -> Result<PagePlan> {
    if width_px == 0 || height_px == 0 {
        return Err(Error::Surface("empty capture".to_string()));
    }
    let (page_w_mm, page_h_mm) = options.format.dimensions_mm();
    let margin_pt = Mm(options.margin_mm).into_pt().0;
    let printable_w = Mm(page_w_mm).into_pt().0 - 2.0 * margin_pt;
    let printable_h = Mm(page_h_mm).into_pt().0 - 2.0 * margin_pt;
    if options.margin_mm < 0.0 || printable_w <= 0.0 || printable_h <= 0.0 {
        return Err(Error::Export(format!(
            "margin of {} mm leaves no printable area",
            options.margin_mm
        )));
    }

    let scale = printable_w / width_px as f32;
    let content_height_pt = height_px as f32 * scale;
    let pages = (content_height_pt / printable_h).ceil().max(1.0) as usize;

    Ok(PagePlan {
        pages,
        scale,
        content_height_pt,
        printable_height_pt: printable_h,
    })
}

/// Export a surface capture as a paginated PDF.
///
/// Deterministic tiling with no content loss: every slice of the scaled
/// capture lands on exactly one page, offset by the margin.
pub fn export_pdf(surface: &RenderedSurface, options: &PdfExportOptions) -> Result<Vec<u8>> {
    let mut warnings = Vec::new();
    let raw = RawImage::decode_from_bytes(&surface.image_data, &mut warnings)
        .map_err(|e| Error::Surface(format!("failed to decode capture: {e}")))?;

    let (img_w, img_h) = (raw.width as u32, raw.height as u32);
    if (img_w, img_h) != (surface.width_px, surface.height_px) {
        log::warn!(
            "capture reports {}x{} px but decodes to {img_w}x{img_h} px; using decoded size",
            surface.width_px,
            surface.height_px
        );
    }
    let plan = plan_pages(img_w, img_h, options)?;
    log::debug!(
        "tiling {img_w}x{img_h} px capture across {} page(s) at scale {:.4}",
        plan.pages,
        plan.scale
    );

    let mut doc = PdfDocument::new(&options.title);
    let xobj_id = XObjectId::new();
    doc.resources
        .xobjects
        .map
        .insert(xobj_id.clone(), XObject::Image(raw));

    let (page_w_mm, page_h_mm) = options.format.dimensions_mm();
    let page_h_pt = Mm(page_h_mm).into_pt().0;
    let margin_pt = Mm(options.margin_mm).into_pt().0;

    for page_index in 0..plan.pages {
        // Bottom-left corner of the full scaled capture, shifted up by
        // one printable height per page already emitted.
        let y = page_h_pt - margin_pt - plan.content_height_pt
            + page_index as f32 * plan.printable_height_pt;
        let transform = XObjectTransform {
            translate_x: Some(Pt(margin_pt)),
            translate_y: Some(Pt(y)),
            scale_x: Some(plan.scale),
            scale_y: Some(plan.scale),
            rotate: None,
            dpi: Some(72.0),
        };
        let ops = vec![Op::UseXobject {
            id: xobj_id.clone(),
            transform,
        }];
        doc.pages
            .push(PdfPage::new(Mm(page_w_mm), Mm(page_h_mm), ops));
    }

    let mut save_warnings = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut save_warnings))
}

/// Capture a surface and export it as a paginated PDF.
///
/// A failed capture aborts the export; no partial output is produced.
pub fn export_pdf_from<S: SurfaceCapture>(
    source: &S,
    options: &PdfExportOptions,
) -> Result<Vec<u8>> {
    let surface = match source.capture() {
        Ok(surface) => surface,
        Err(e) => {
            log::error!("surface capture failed, aborting export: {e}");
            return Err(e);
        }
    };
    export_pdf(&surface, options)
}
