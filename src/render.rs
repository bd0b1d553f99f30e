//! Quotation document renderer.
//!
//! [`render_document`] maps a [`Quotation`] onto a fixed, self-contained HTML
//! layout. It is a pure function of its inputs and cannot fail: malformed
//! values show up in the output as blank or `NaN`-style text.
//!
//! The layout lives in `templates/quotation.hbs` and is filled from a
//! [`DocumentView`]: every display string is formatted up front, and
//! Handlebars HTML-escapes it on the way out.

use crate::format;
use crate::{Error, LineItem, Quotation, Result, SellerProfile};
use handlebars::Handlebars;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::sync::OnceLock;

/// Where the rendered document is headed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// On-screen display; carries the print control
    #[default]
    Interactive,
    /// Printer or print-to-file output; no controls, tighter spacing
    Print,
}

/// A rendered HTML5 document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Mode the document was rendered for
    pub mode: RenderMode,
    /// Complete markup, starting with `<!DOCTYPE html>`
    pub html: String,
}

impl RenderedDocument {
    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// Hex SHA-256 of the markup, used for golden comparisons.
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(self.html.as_bytes()))
    }
}

const BASE_STYLES: &str = r#"
body { margin: 0; padding: 2rem; background: #f3f4f6; color: #1f2937; font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif; }
.print-controls { display: flex; justify-content: flex-end; margin-bottom: 1rem; }
.print-button { padding: 0.5rem 1rem; background: #2563eb; color: #fff; border: 0; border-radius: 0.375rem; cursor: pointer; }
.print-button:hover { background: #1d4ed8; }
.sheet { max-width: 56rem; margin: 0 auto; padding: 2rem; background: #fff; border-radius: 0.5rem; box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06); }
.doc-header { display: flex; justify-content: space-between; align-items: flex-start; border-bottom: 2px solid #e5e7eb; padding-bottom: 1.5rem; margin-bottom: 1.5rem; }
.doc-header h1 { margin: 0; font-size: 1.5rem; color: #111827; }
.seller { text-align: right; }
.seller h2 { margin: 0; font-size: 1.25rem; color: #2563eb; }
.muted { color: #4b5563; margin: 0; }
.logo { display: flex; justify-content: center; margin-bottom: 2rem; }
.logo img { height: 4rem; object-fit: contain; }
section { margin-bottom: 2rem; }
h3 { margin: 0 0 0.5rem; font-size: 1rem; color: #1f2937; }
.customer-name { font-weight: 500; margin: 0; }
.multiline { white-space: pre-line; }
table.items { width: 100%; border-collapse: collapse; }
table.items th { padding: 0.75rem 1rem; font-size: 0.75rem; font-weight: 500; text-transform: uppercase; color: #6b7280; background: #f9fafb; text-align: left; }
table.items td { padding: 0.75rem 1rem; border-top: 1px solid #e5e7eb; }
table.items .num { text-align: right; }
table.items tfoot td { border-top: 2px solid #d1d5db; font-weight: 600; }
.terms { font-size: 0.875rem; color: #4b5563; }
.terms ul { margin: 0; padding-left: 1.25rem; }
.terms li { margin-bottom: 0.25rem; }
.signatures { display: flex; justify-content: space-between; margin-top: 3rem; padding-top: 2rem; border-top: 1px solid #e5e7eb; }
.signature-line { width: 16rem; border-bottom: 1px solid #9ca3af; margin-bottom: 0.5rem; height: 2rem; }
.signatory { text-align: right; }
.signatory .contact { font-size: 0.875rem; }
"#;

const PAGE_STYLES: &str = r#"
@media print {
  @page { margin: 1cm; }
  body { padding: 0; background: #fff; print-color-adjust: exact; -webkit-print-color-adjust: exact; }
  .print-controls { display: none; }
  .sheet { box-shadow: none; padding: 1rem; margin: 0; border-radius: 0; }
}
"#;

const PRINT_MODE_STYLES: &str = r#"
body { padding: 0; background: #fff; print-color-adjust: exact; -webkit-print-color-adjust: exact; }
.sheet { box-shadow: none; padding: 1rem; margin: 0; border-radius: 0; max-width: none; }
"#;

fn stylesheet(mode: RenderMode) -> String {
    let mut css = String::from(BASE_STYLES);
    if mode == RenderMode::Print {
        css.push_str(PRINT_MODE_STYLES);
    }
    css.push_str(PAGE_STYLES);
    css
}

const DOCUMENT_TEMPLATE: &str = include_str!("templates/quotation.hbs");
const TEMPLATE_NAME: &str = "quotation";

fn template_engine() -> &'static Handlebars<'static> {
    static ENGINE: OnceLock<Handlebars<'static>> = OnceLock::new();
    ENGINE.get_or_init(|| {
        let mut handlebars = Handlebars::new();
        if let Err(e) = handlebars.register_template_string(TEMPLATE_NAME, DOCUMENT_TEMPLATE) {
            log::error!("Quotation template failed to compile: {}", e);
        }
        handlebars
    })
}

/// Template context: the quotation with every value already formatted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView<'a> {
    pub interactive: bool,
    pub styles: String,
    pub reference_number: &'a str,
    pub date: String,
    pub customer_name: &'a str,
    pub email: &'a str,
    pub gstn: &'a str,
    pub address: &'a str,
    pub items: Vec<ItemView<'a>>,
    pub total: String,
    /// `None` drops the notes block
    pub notes: Option<&'a str>,
    pub seller: &'a SellerProfile,
}

/// One table row, formatted for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView<'a> {
    pub description: &'a str,
    pub quantity: String,
    pub unit_price: String,
    pub total: String,
}

impl<'a> ItemView<'a> {
    fn new(item: &'a LineItem, symbol: &str) -> Self {
        Self {
            description: &item.description,
            quantity: format::quantity(item.quantity),
            unit_price: format::money(item.unit_price, symbol),
            total: format::money(item.total, symbol),
        }
    }
}

impl<'a> DocumentView<'a> {
    pub fn new(quotation: &'a Quotation, profile: &'a SellerProfile, mode: RenderMode) -> Self {
        let symbol = profile.currency_symbol.as_str();
        Self {
            interactive: mode == RenderMode::Interactive,
            styles: stylesheet(mode),
            reference_number: &quotation.reference_number,
            date: format::long_date(quotation.date),
            customer_name: &quotation.customer_name,
            email: &quotation.email,
            gstn: &quotation.gstn,
            address: &quotation.address,
            items: quotation
                .items
                .iter()
                .map(|item| ItemView::new(item, symbol))
                .collect(),
            total: format::money(quotation.total, symbol),
            notes: quotation.notes(),
            seller: profile,
        }
    }
}

/// Render a quotation, reporting template failures.
pub fn try_render_document(
    quotation: &Quotation,
    profile: &SellerProfile,
    mode: RenderMode,
) -> Result<RenderedDocument> {
    let view = DocumentView::new(quotation, profile, mode);
    let html = template_engine()
        .render(TEMPLATE_NAME, &view)
        .map_err(|e| Error::Template(e.to_string()))?;
    Ok(RenderedDocument { mode, html })
}

/// Render a quotation for the given presentation mode.
///
/// Totals are displayed as supplied; nothing is recomputed.
pub fn render_document(
    quotation: &Quotation,
    profile: &SellerProfile,
    mode: RenderMode,
) -> RenderedDocument {
    log::debug!(
        "Rendering quotation {} ({} items, {:?})",
        quotation.reference_number,
        quotation.items.len(),
        mode
    );

    try_render_document(quotation, profile, mode).unwrap_or_else(|e| {
        log::error!("{}", e);
        RenderedDocument {
            mode,
            html: String::new(),
        }
    })
}
