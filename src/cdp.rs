//! Chrome DevTools Protocol print backend

use crate::print::PrintFacility;
use crate::render::RenderedDocument;
use crate::{Error, Result};
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use log::warn;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Print facility that renders documents to PDF in headless Chrome.
///
/// Each request loads the document from a temporary file in a fresh tab and
/// writes the PDF produced by `Page.printToPDF` to the output path. Background
/// graphics are always printed so colors survive.
pub struct CdpPrinter {
    browser: Browser,
    output: PathBuf,
    seq: AtomicU64,
}

impl CdpPrinter {
    /// Launch headless Chrome and target `output` for the generated PDF.
    pub fn launch(output: impl Into<PathBuf>) -> Result<Self> {
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|e| Error::CdpError(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| Error::CdpError(format!("Failed to launch browser: {}", e)))?;

        Ok(Self {
            browser,
            output: output.into(),
            seq: AtomicU64::new(0),
        })
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Produce the PDF bytes for a document.
    pub fn print_pdf(&self, document: &RenderedDocument) -> Result<Vec<u8>> {
        let n = self.seq.fetch_add(1, Ordering::Relaxed);
        let staging = std::env::temp_dir().join(format!(
            "quotepad-{}-{}.html",
            std::process::id(),
            n
        ));
        std::fs::write(&staging, document.as_str())?;

        let result = self.print_staged(&staging);
        if let Err(e) = std::fs::remove_file(&staging) {
            warn!("Failed to remove {}: {}", staging.display(), e);
        }
        result
    }

    fn print_staged(&self, staging: &Path) -> Result<Vec<u8>> {
        let url = url::Url::from_file_path(staging)
            .map_err(|_| Error::PrintError(format!("Not an absolute path: {}", staging.display())))?;

        let tab = self.browser.new_tab()?;
        tab.navigate_to(url.as_str())?;
        tab.wait_until_navigated()?;

        let pdf = tab.print_to_pdf(Some(PrintToPdfOptions {
            print_background: Some(true),
            prefer_css_page_size: Some(true),
            ..Default::default()
        }))?;

        if let Err(e) = tab.close(true) {
            warn!("Failed to close tab: {}", e);
        }
        Ok(pdf)
    }
}

impl PrintFacility for CdpPrinter {
    fn request_print(&self, document: &RenderedDocument) {
        let written = self
            .print_pdf(document)
            .and_then(|pdf| std::fs::write(&self.output, pdf).map_err(Error::from));
        match written {
            Ok(()) => log::info!("PDF written to {}", self.output.display()),
            Err(e) => warn!("CDP print failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderMode;

    #[test]
    fn test_cdp_print_to_pdf() {
        // This test requires Chrome to be installed, so we skip it in CI
        if std::env::var("CI").is_ok() {
            return;
        }
        let out = std::env::temp_dir().join(format!("quotepad-cdp-{}.pdf", std::process::id()));
        let printer = match CdpPrinter::launch(&out) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Skipping CDP print test because Chrome is not available or failed to launch: {}", e);
                return;
            }
        };
        let doc = RenderedDocument {
            mode: RenderMode::Print,
            html: "<!DOCTYPE html><html><body><p>hello</p></body></html>".to_string(),
        };
        let pdf = printer.print_pdf(&doc).expect("print_to_pdf failed");
        assert!(pdf.starts_with(b"%PDF"));
    }
}
