use crate::print::PrintFacility;
use crate::render::{render_document, RenderMode, RenderedDocument};
use crate::{Quotation, SellerProfile};

/// The quotation pad: one quotation, the seller profile it is printed under,
/// and the print facility behind the "Print Quotation" action.
pub struct QuotationPad {
    quotation: Quotation,
    profile: SellerProfile,
    printer: Box<dyn PrintFacility>,
}

impl QuotationPad {
    /// Create a pad using the built-in seller profile.
    pub fn new(quotation: Quotation, printer: impl PrintFacility + 'static) -> Self {
        Self {
            quotation,
            profile: SellerProfile::default(),
            printer: Box::new(printer),
        }
    }

    pub fn with_profile(mut self, profile: SellerProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn quotation(&self) -> &Quotation {
        &self.quotation
    }

    pub fn profile(&self) -> &SellerProfile {
        &self.profile
    }

    /// Swap in a new quotation; the next render reflects it.
    pub fn set_quotation(&mut self, quotation: Quotation) {
        self.quotation = quotation;
    }

    /// Render the current quotation.
    pub fn render(&self, mode: RenderMode) -> RenderedDocument {
        render_document(&self.quotation, &self.profile, mode)
    }

    /// The print action: render for print and hand the document to the
    /// facility, once per call. Nothing is awaited or returned.
    pub fn print(&self) {
        let document = self.render(RenderMode::Print);
        log::info!(
            "Print requested for quotation {}",
            self.quotation.reference_number
        );
        self.printer.request_print(&document);
    }
}
