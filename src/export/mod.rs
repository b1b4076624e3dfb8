//! Export adapters for the rendered report
//!
//! Two independent, user-triggered capabilities over the rendered markup:
//! a rich-text clipboard export and a paginated PDF export. Neither touches
//! application state; failures stay inside `ExportError`.

mod clipboard;
mod pdf;

pub use clipboard::copy_report;
pub use pdf::{export_pdf, pdf_file_name};

use thiserror::Error;

/// Errors from either export adapter
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
