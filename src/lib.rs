//! Convert a single PDF page to an SVG file.
//!
//! All of the heavy lifting lives in MuPDF: document parsing, content-stream
//! interpretation, font handling, and SVG serialization. This crate only
//! sequences the library calls and shapes the diagnostics.

use std::fs::File;
use std::io::Write;

use mupdf::{Document, Matrix};
use thiserror::Error;

/// Page extent in page-space points, derived from the bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDims {
    pub width: f32,
    pub height: f32,
}

/// Everything that can go wrong during a conversion. All fatal, none retried.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot open document {path}: {source}")]
    DocumentOpen { path: String, source: mupdf::Error },
    #[error("cannot load page {page}: document has {count} pages")]
    PageOutOfRange { page: i64, count: i32 },
    #[error("cannot load page {page}: {source}")]
    PageLoad { page: i64, source: mupdf::Error },
    #[error("cannot create SVG device for page {page}: invalid dimensions {width}x{height}")]
    Device { page: i64, width: f32, height: f32 },
    #[error("cannot create output file {path}: {source}")]
    OutputOpen { path: String, source: std::io::Error },
    #[error("cannot render page {page}: {source}")]
    Render { page: i64, source: mupdf::Error },
    #[error("cannot write output file {path}: {source}")]
    OutputWrite { path: String, source: std::io::Error },
}

/// Render one page of the document at `input` into an SVG file at `output`.
///
/// `page` is 1-based, matching how page numbers are written on the command
/// line. Returns the page's bounding-box extent on success. Resource teardown
/// is drop order: device before sink, page before document, on every path.
pub fn convert_page(input: &str, page: i64, output: &str) -> Result<PageDims, ConvertError> {
    let document = Document::open(input).map_err(|source| ConvertError::DocumentOpen {
        path: input.to_string(),
        source,
    })?;

    let count = document
        .page_count()
        .map_err(|source| ConvertError::PageLoad { page, source })?;
    if page < 1 || page > i64::from(count) {
        return Err(ConvertError::PageOutOfRange { page, count });
    }

    // Pages are zero-indexed
    let loaded = document
        .load_page((page - 1) as i32)
        .map_err(|source| ConvertError::PageLoad { page, source })?;

    let bounds = loaded
        .bounds()
        .map_err(|source| ConvertError::PageLoad { page, source })?;
    let dims = PageDims {
        width: bounds.x1 - bounds.x0,
        height: bounds.y1 - bounds.y0,
    };
    if dims.width <= 0.0 || dims.height <= 0.0 {
        return Err(ConvertError::Device {
            page,
            width: dims.width,
            height: dims.height,
        });
    }

    // Open the sink before rendering so an unwritable path fails without
    // paying the rendering cost.
    let mut sink = File::create(output).map_err(|source| ConvertError::OutputOpen {
        path: output.to_string(),
        source,
    })?;

    // Identity transform: output coordinates match page space exactly. Text
    // comes out as path geometry, not <text> elements, so the SVG displays
    // the same everywhere regardless of installed fonts.
    let svg = loaded
        .to_svg(&Matrix::IDENTITY)
        .map_err(|source| ConvertError::Render { page, source })?;

    sink.write_all(svg.as_bytes())
        .map_err(|source| ConvertError::OutputWrite {
            path: output.to_string(),
            source,
        })?;

    Ok(dims)
}
