//! Print facilities: the host capability behind the "Print Quotation" action.
//!
//! A request is fire-and-forget. Implementations log their own failures and
//! never report back to the caller; what happens after the hand-off (dialogs,
//! spooling, PDF generation) is outside the pad's control.

use crate::render::RenderedDocument;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Capability that accepts documents for printing.
pub trait PrintFacility: Send + Sync {
    /// Hand a document to the print backend. Does not block on, or report,
    /// the outcome.
    fn request_print(&self, document: &RenderedDocument);
}

impl<P: PrintFacility + ?Sized> PrintFacility for Arc<P> {
    fn request_print(&self, document: &RenderedDocument) {
        (**self).request_print(document)
    }
}

impl<P: PrintFacility + ?Sized> PrintFacility for Box<P> {
    fn request_print(&self, document: &RenderedDocument) {
        (**self).request_print(document)
    }
}

/// Facility that discards every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPrinter;

impl NoopPrinter {
    pub fn new() -> Self {
        NoopPrinter
    }
}

impl PrintFacility for NoopPrinter {
    fn request_print(&self, _document: &RenderedDocument) {}
}

/// Facility that keeps every requested document in memory.
///
/// Clones share the same record, so a test can keep one handle and give the
/// other to the pad.
#[derive(Debug, Default, Clone)]
pub struct RecordingPrinter {
    requests: Arc<Mutex<Vec<RenderedDocument>>>,
}

impl RecordingPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of print requests received so far
    pub fn count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Copies of every document received, in order
    pub fn requests(&self) -> Vec<RenderedDocument> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl PrintFacility for RecordingPrinter {
    fn request_print(&self, document: &RenderedDocument) {
        match self.requests.lock() {
            Ok(mut r) => r.push(document.clone()),
            Err(e) => log::warn!("Recording printer lock poisoned: {}", e),
        }
    }
}

/// Facility that writes the document's HTML to a file, to be opened by a
/// browser or spooled by the OS.
#[derive(Debug, Clone)]
pub struct FilePrinter {
    path: PathBuf,
}

impl FilePrinter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the document, reporting failures. `request_print` calls this
    /// and only logs the error.
    pub fn write(&self, document: &RenderedDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, document.as_str()).map_err(|e| {
            Error::PrintError(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

impl PrintFacility for FilePrinter {
    fn request_print(&self, document: &RenderedDocument) {
        match self.write(document) {
            Ok(()) => log::info!("Print output written to {}", self.path.display()),
            Err(e) => log::warn!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderMode;

    fn doc(body: &str) -> RenderedDocument {
        RenderedDocument {
            mode: RenderMode::Print,
            html: body.to_string(),
        }
    }

    #[test]
    fn recording_printer_clones_share_state() {
        let rec = RecordingPrinter::new();
        let handle = rec.clone();
        rec.request_print(&doc("a"));
        rec.request_print(&doc("b"));
        assert_eq!(handle.count(), 2);
        let got: Vec<String> = handle.requests().into_iter().map(|d| d.html).collect();
        assert_eq!(got, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn boxed_and_shared_facilities_delegate() {
        let rec = RecordingPrinter::new();
        let boxed: Box<dyn PrintFacility> = Box::new(rec.clone());
        boxed.request_print(&doc("x"));
        let shared: Arc<dyn PrintFacility> = Arc::new(rec.clone());
        shared.request_print(&doc("y"));
        assert_eq!(rec.count(), 2);
    }

    #[test]
    fn noop_printer_accepts_anything() {
        NoopPrinter::new().request_print(&doc(""));
    }

    #[test]
    fn file_printer_writes_html() {
        let dir = std::env::temp_dir().join(format!("quotepad-print-{}", std::process::id()));
        let path = dir.join("nested/out.html");
        let printer = FilePrinter::new(&path);
        printer.request_print(&doc("<p>hello</p>"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>hello</p>");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn file_printer_failure_is_swallowed_by_request() {
        // a directory path cannot be written as a file
        let dir = std::env::temp_dir();
        let printer = FilePrinter::new(&dir);
        assert!(printer.write(&doc("x")).is_err());
        printer.request_print(&doc("x"));
    }
}
