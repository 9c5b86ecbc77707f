//! Plain-text breakdown export and share-link generation.
//!
//! The breakdown is a deterministic multi-line rendering of a computed
//! split, used verbatim as the clipboard payload and as the `?data=` query
//! parameter of share links.

use shared::{Currency, ShareConfig, SplitConfig};

use crate::domain::currency::{format_amount, format_percent};
use crate::domain::split_service::SplitOutcome;

/// Renders breakdown text and derives share/QR URLs from it.
#[derive(Clone)]
pub struct BreakdownService {
    config: SplitConfig,
    share: ShareConfig,
}

impl BreakdownService {
    pub fn new() -> Self {
        Self {
            config: SplitConfig::default(),
            share: ShareConfig::default(),
        }
    }

    pub fn with_config(config: SplitConfig, share: ShareConfig) -> Self {
        Self { config, share }
    }

    /// Multi-line text rendering of a computed split. The rounding
    /// adjustment line only appears when the adjustment is at least half
    /// a cent; itemized per-participant lines are optional.
    pub fn breakdown_text(&self, outcome: &SplitOutcome, currency: Currency, itemized: bool) -> String {
        let mut lines = vec![
            format!("Subtotal: {}", format_amount(outcome.subtotal, currency)),
            format!(
                "Tax ({}%): {}",
                format_percent(outcome.tax_percent),
                format_amount(outcome.tax_amount, currency)
            ),
            format!(
                "Tip ({}%): {}",
                format_percent(outcome.tip_percent),
                format_amount(outcome.tip_amount, currency)
            ),
            format!("Total: {}", format_amount(outcome.total, currency)),
            format!("People: {}", outcome.people),
            format!("Per person: {}", format_amount(outcome.per_person, currency)),
        ];
        if outcome.rounding_adjustment.abs() >= self.config.rounding_note_threshold {
            lines.push(format!(
                "Rounding adjustment: {}",
                format_amount(outcome.rounding_adjustment, currency)
            ));
        }
        if itemized {
            for entry in &outcome.allocation {
                lines.push(format!(
                    "{}: {}",
                    entry.name,
                    format_amount(entry.owed, currency)
                ));
            }
        }
        lines.join("\n")
    }

    /// Share link carrying the breakdown in its query string.
    pub fn share_url(&self, breakdown: &str) -> String {
        format!("{}?data={}", self.share.base_url, percent_encode(breakdown))
    }

    /// Image URL for a QR code of the given link, served by an external
    /// QR service.
    pub fn qr_image_url(&self, url: &str) -> String {
        format!(
            "{}?size={}&data={}",
            self.share.qr_service_url,
            self.share.qr_size,
            percent_encode(url)
        )
    }
}

impl Default for BreakdownService {
    fn default() -> Self {
        Self::new()
    }
}

/// Percent-encode a query-parameter value. Matches encodeURIComponent:
/// alphanumerics and `-_.!~*'()` pass through, everything else becomes
/// %XX on its UTF-8 bytes.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
