//! Quotepad
//!
//! Renders business quotations (header, client block, line items, terms,
//! signatures) into self-contained HTML documents for on-screen display and
//! printing, and routes the "Print Quotation" action to a pluggable print
//! facility.
//!
//! # Features
//!
//! - **Pure renderer**: the same quotation always yields the same document
//! - **Two presentation modes**: interactive (with print control) and print
//! - **Injected printing**: file output, background worker, or headless
//!   Chrome PDF via the `cdp` feature
//!
//! # Example
//!
//! ```
//! use quotepad::{Quotation, QuotationPad, RecordingPrinter, RenderMode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let quotation = Quotation::from_json(r#"{
//!     "referenceNumber": "Q-2024-017",
//!     "date": "2024-04-05",
//!     "customerName": "Acme Fabricators",
//!     "items": [{"description": "Clear float 6mm", "quantity": 3, "unitPrice": 10, "total": 30}],
//!     "total": 30
//! }"#)?;
//!
//! let printer = RecordingPrinter::new();
//! let pad = QuotationPad::new(quotation, printer.clone());
//!
//! let page = pad.render(RenderMode::Interactive);
//! assert!(page.as_str().contains("April 5, 2024"));
//!
//! pad.print();
//! assert_eq!(printer.count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod format;
pub mod model;
pub mod profile;
pub mod render;
pub mod snapshot;

// Print facilities and the component that drives them
pub mod print;
mod background;
mod pad;

#[cfg(feature = "cdp")]
pub mod cdp;

pub use background::BackgroundPrinter;
pub use model::{LineItem, Quotation};
pub use pad::QuotationPad;
pub use print::{FilePrinter, NoopPrinter, PrintFacility, RecordingPrinter};
pub use profile::SellerProfile;
pub use render::{render_document, try_render_document, DocumentView, RenderMode, RenderedDocument};
pub use snapshot::{text_snapshot, TextSnapshot};

#[cfg(feature = "cdp")]
pub use cdp::CdpPrinter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_interactive() {
        assert_eq!(RenderMode::default(), RenderMode::Interactive);
    }

    #[test]
    fn default_profile_is_the_built_in_seller() {
        let profile = SellerProfile::default();
        assert_eq!(profile.name, "OLUMPUS GLASSES LTD");
        assert_eq!(profile.address_lines.len(), 2);
        assert_eq!(profile.signatory_lines.len(), 2);
    }
}
