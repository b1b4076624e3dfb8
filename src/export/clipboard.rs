//! Rich-text clipboard export
//!
//! Copies the rendered report markup to the clipboard as text/html, then
//! opens the document editor in the default browser so the user can paste
//! straight into a fresh document.

use tracing::info;

use super::ExportError;

/// Where a copied report can be pasted into a new document
const DOCS_CREATE_URL: &str = "https://docs.google.com/document/create";

/// Copy the report markup and open the document editor
pub fn copy_report(html: &str) -> Result<(), ExportError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_html(html, None::<&str>)?;
    info!("copy_report: report copied as text/html");

    open::that(DOCS_CREATE_URL)?;
    Ok(())
}
