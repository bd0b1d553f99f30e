//! Plain-text view of a rendered document, for terminals and textual tests.

use crate::render::RenderedDocument;
use scraper::{Html, Selector};

/// A textual snapshot of a rendered quotation
#[derive(Debug, Clone)]
pub struct TextSnapshot {
    /// Document title
    pub title: String,
    /// Visible text, one non-empty line per row
    pub text: String,
}

/// Extract the title and the visible body text of a rendered document.
pub fn text_snapshot(document: &RenderedDocument) -> TextSnapshot {
    let html = Html::parse_document(document.as_str());
    let title_sel = Selector::parse("title").unwrap();
    let body_sel = Selector::parse("body").unwrap();

    let title = html
        .select(&title_sel)
        .next()
        .map(|n| n.text().collect::<String>())
        .unwrap_or_default();

    let raw = html
        .select(&body_sel)
        .next()
        .map(|b| b.text().collect::<Vec<_>>().join("\n"))
        .unwrap_or_default();

    let text = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    TextSnapshot {
        title: title.trim().to_string(),
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderMode;

    #[test]
    fn snapshot_extracts_title_and_lines() {
        let doc = RenderedDocument {
            mode: RenderMode::Print,
            html: "<html><head><title> Quotation Q-1 </title><style>p{}</style></head><body><h1>QUOTATION</h1>\n  <p>a\nb</p></body></html>".to_string(),
        };
        let snap = text_snapshot(&doc);
        assert_eq!(snap.title, "Quotation Q-1");
        assert_eq!(snap.text, "QUOTATION\na\nb");
    }
}
