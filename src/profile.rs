//! Seller profile: the fixed identity, terms and signatory text that appear
//! on every quotation.
//!
//! The defaults carry the built-in seller. A profile JSON file only needs to
//! name the fields it overrides.

use crate::{Error, Result};
use base64::Engine as Base64Engine;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_LOGO: &str =
    "https://raw.githubusercontent.com/stackblitz/stackblitz-cg-logo/main/cg-logo.png";

/// Identity and boilerplate printed on every quotation
///
/// # Examples
///
/// ```
/// let profile = quotepad::SellerProfile::default();
/// assert_eq!(profile.currency_symbol, "$");
/// assert_eq!(profile.terms.len(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SellerProfile {
    /// Company name shown in the header
    pub name: String,
    /// Postal address, one entry per printed line
    pub address_lines: Vec<String>,
    pub phone: String,
    pub email: String,
    /// Logo source: an http(s) or data URL, or a local image path
    pub logo: String,
    pub logo_alt: String,
    /// Terms and conditions, identical for every quotation
    pub terms: Vec<String>,
    /// Contact lines under the authorized signature
    pub signatory_lines: Vec<String>,
    /// Prefix for every monetary amount
    pub currency_symbol: String,
}

impl Default for SellerProfile {
    fn default() -> Self {
        Self {
            name: "OLUMPUS GLASSES LTD".to_string(),
            address_lines: vec![
                "9/41 Suryodaya Colony, 9 Rana Pratap Marg,".to_string(),
                "Lucknow-226001".to_string(),
            ],
            phone: "+91 8933933333".to_string(),
            email: "olumpusglasses@gmail.com".to_string(),
            logo: DEFAULT_LOGO.to_string(),
            logo_alt: "Company Logos".to_string(),
            terms: default_terms(),
            signatory_lines: vec![
                "GM (Sales & Mkt) [ +91 800 99 4 34 34 ]".to_string(),
                "e-mail: vkdixit.olumpus@gmail.com".to_string(),
            ],
            currency_symbol: "$".to_string(),
        }
    }
}

fn default_terms() -> Vec<String> {
    [
        "The price includes basic rate of glass only.",
        "Taxes @ 18% Inclusive",
        "Freight: Extra at actual.",
        "Transit Insurance: 2% Extra & it covers transit breakage till it reaches the first delivery point.",
        "Unloading charges to be arranged and borne by the client / Fabricator.",
        "Odd and complex size / Template based size charges inclusive @ 10 % of basic price. Any typical drawing or template will be charged extra.",
        "Hole Charges Extra- 4mm to 6mm will be Rs 15/Hole, 8mm to 12 mm will be Rs 30 /Hole, 15 mm to 19 mm will be Rs 60/Hole \u{2013} Taxes extra",
        "Counter sunk Hole up to 12 mm will be Rs 100 +Tax and 15 mm to 19 mm will be charged at 200/hole +tax",
        "Cutout charges will be extra",
        "Packing charges for Outstation area: Extra.",
        "Payment Terms: 100% advance along with Purchase order.",
        "Validity of the offer: 30 days from the date of the offer",
        "Validity of prices for supplies: 60 days from the date of first supply.",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

impl SellerProfile {
    /// Parse a profile from JSON; unspecified fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))
    }

    /// Load a profile file. A relative local logo path is resolved against
    /// the directory containing the profile.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        let mut profile = Self::from_json(&raw)?;

        if let LogoSource::File(logo) = LogoSource::classify(&profile.logo) {
            if logo.is_relative() {
                if let Some(dir) = path.parent() {
                    profile.logo = dir.join(logo).to_string_lossy().into_owned();
                }
            }
        }
        Ok(profile)
    }

    /// Replace a local logo path with an inline base64 data URI so the
    /// rendered document is self-contained. Remote and data URLs are left
    /// untouched.
    pub fn embed_logo(&mut self) -> Result<()> {
        let path = match LogoSource::classify(&self.logo) {
            LogoSource::Url => return Ok(()),
            LogoSource::File(path) => path,
        };
        let bytes = std::fs::read(&path).map_err(|e| {
            Error::ConfigError(format!("Failed to read logo {}: {}", path.display(), e))
        })?;
        let mime = image_mime(&path).ok_or_else(|| {
            Error::ConfigError(format!("Unsupported logo format: {}", path.display()))
        })?;
        let b64 = Base64Engine::encode(&base64::engine::general_purpose::STANDARD, bytes);
        log::debug!("Embedded logo {} ({})", path.display(), mime);
        self.logo = format!("data:{};base64,{}", mime, b64);
        Ok(())
    }
}

enum LogoSource {
    Url,
    File(PathBuf),
}

impl LogoSource {
    fn classify(logo: &str) -> Self {
        match url::Url::parse(logo) {
            Ok(u) if matches!(u.scheme(), "http" | "https" | "data") => LogoSource::Url,
            Ok(u) if u.scheme() == "file" => match u.to_file_path() {
                Ok(p) => LogoSource::File(p),
                Err(_) => LogoSource::Url,
            },
            _ => LogoSource::File(PathBuf::from(logo)),
        }
    }
}

fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let p = SellerProfile::from_json(r#"{"name": "ACME GLASS", "currencySymbol": "Rs "}"#)
            .unwrap();
        assert_eq!(p.name, "ACME GLASS");
        assert_eq!(p.currency_symbol, "Rs ");
        assert_eq!(p.phone, "+91 8933933333");
        assert_eq!(p.terms, default_terms());
    }

    #[test]
    fn bad_json_is_a_config_error() {
        let err = SellerProfile::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn remote_logo_is_left_alone() {
        let mut p = SellerProfile::default();
        p.embed_logo().unwrap();
        assert_eq!(p.logo, DEFAULT_LOGO);
    }

    #[test]
    fn local_logo_becomes_data_uri() {
        let dir = std::env::temp_dir().join(format!("quotepad-logo-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let logo = dir.join("logo.png");
        std::fs::write(&logo, b"\x89PNG\r\n\x1a\nfake").unwrap();

        let mut p = SellerProfile {
            logo: logo.to_string_lossy().into_owned(),
            ..Default::default()
        };
        p.embed_logo().unwrap();
        assert!(p.logo.starts_with("data:image/png;base64,"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_local_logo_is_a_config_error() {
        let mut p = SellerProfile {
            logo: "/definitely/not/here/logo.png".to_string(),
            ..Default::default()
        };
        assert!(matches!(p.embed_logo(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn relative_logo_resolves_against_profile_dir() {
        let dir = std::env::temp_dir().join(format!("quotepad-profile-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("profile.json");
        std::fs::write(&path, r#"{"logo": "brand/logo.png"}"#).unwrap();

        let p = SellerProfile::from_path(&path).unwrap();
        assert_eq!(PathBuf::from(&p.logo), dir.join("brand/logo.png"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
