use serde::{Deserialize, Serialize};

/// Currencies the calculator understands.
///
/// The core only cares about the decimal precision of a currency; display
/// formatting beyond symbol + precision is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    VND,
    AUD,
}

impl Currency {
    /// Number of decimal places for amounts in this currency.
    /// JPY and VND are zero-decimal currencies; everything else uses 2.
    pub fn decimals(&self) -> u32 {
        match self {
            Currency::JPY | Currency::VND => 0,
            _ => 2,
        }
    }

    /// Display symbol used when rendering amounts as text.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD | Currency::AUD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::VND => "₫",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

/// Per-participant allocation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantMode {
    /// Share of the remaining total by percentage.
    Percent,
    /// Fixed override amount.
    Amount,
}

/// Raw form fields for a single participant, exactly as the presentation
/// layer holds them. Numeric fields are free text; the core normalizes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantFields {
    pub name: String,
    pub mode: ParticipantMode,
    /// Percent field contents (authoritative when mode is Percent).
    pub percent: String,
    /// Amount field contents (authoritative when mode is Amount).
    pub amount: String,
}

/// Raw form fields for the bill itself.
///
/// Tax and tip each carry both a percent field and a fixed-amount field;
/// a non-empty percent field takes priority over the amount field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillFields {
    pub subtotal: String,
    pub tax_enabled: bool,
    pub tax_percent: String,
    pub tax_amount: String,
    pub tip_enabled: bool,
    pub tip_percent: String,
    pub tip_amount: String,
    pub people: String,
    pub round_up: bool,
    pub auto_split: bool,
    pub currency: Currency,
}

impl Default for BillFields {
    fn default() -> Self {
        Self {
            subtotal: String::new(),
            tax_enabled: false,
            tax_percent: String::new(),
            tax_amount: String::new(),
            tip_enabled: false,
            tip_percent: String::new(),
            tip_amount: String::new(),
            people: "2".to_string(),
            round_up: false,
            auto_split: false,
            currency: Currency::USD,
        }
    }
}

/// Request to run the full totals + allocation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeSplitRequest {
    pub bill: BillFields,
    pub participants: Vec<ParticipantFields>,
    /// True until any participant field has been manually edited.
    /// Drives the one-shot equal-percentage auto-fill.
    pub pristine: bool,
}

/// Advisory warning about an inconsistent allocation. At most one is
/// active at a time; computation always completes regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationWarning {
    /// Fixed amounts exceed the bill total.
    FixedExceedsTotal,
    /// Percent-mode shares do not sum to 100%.
    PercentSumInvalid,
    /// Allocations undershoot the total by at least one cent.
    UnallocatedRemainder,
    /// Allocations overshoot the total by at least one cent.
    OverAllocated,
}

/// One line of the per-participant breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub name: String,
    /// Amount this participant owes. Never negative.
    pub owed: f64,
}

/// Complete result of a compute pass, including the back-filled field
/// values the presentation layer should reflect into the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeSplitResponse {
    pub subtotal: f64,
    pub tax_percent: f64,
    pub tip_percent: f64,
    pub tax_amount: f64,
    pub tip_amount: f64,
    pub total: f64,
    pub people: u32,
    /// Headline per-person figure (total / people, rounded per policy).
    pub per_person: f64,
    /// (rounded per-person × people) − total. Informational only.
    pub rounding_adjustment: f64,
    pub allocation: Vec<AllocationEntry>,
    pub warning: Option<AllocationWarning>,
    pub warning_message: Option<String>,
    /// Bill fields after percent-mode back-fill.
    pub bill: BillFields,
    /// Participant fields after auto-fill and amount back-fill.
    pub participants: Vec<ParticipantFields>,
    /// Pristine flag after this pass (cleared once the auto-fill fires).
    pub pristine: bool,
}

/// Request for the plain-text breakdown and share artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateBreakdownRequest {
    pub bill: BillFields,
    pub participants: Vec<ParticipantFields>,
    pub pristine: bool,
    /// Include one line per participant after the summary.
    pub itemized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateBreakdownResponse {
    pub breakdown_text: String,
    pub share_url: String,
    pub qr_image_url: String,
}

/// Metadata for an uploaded bill image, validated before the scan runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanBillRequest {
    pub filename: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Values recovered from a bill scan, fed back into the form as another
/// source of bill fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanBillResponse {
    pub subtotal: f64,
    pub tax_percent: f64,
    pub tip_percent: f64,
}

/// Thresholds for allocation warnings and the rounding note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// How far percent-mode shares may stray from 100% before warning.
    pub percent_sum_tolerance: f64,
    /// Reconciliation gap (in currency units) that triggers a warning.
    pub allocation_gap_tolerance: f64,
    /// Minimum |rounding adjustment| worth surfacing to the caller.
    pub rounding_note_threshold: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            percent_sum_tolerance: 0.5,
            allocation_gap_tolerance: 0.01,
            rounding_note_threshold: 0.005,
        }
    }
}

/// Share-link generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Page the share link points at; the breakdown rides in `?data=`.
    pub base_url: String,
    /// External QR image service endpoint.
    pub qr_service_url: String,
    /// Requested QR image size, e.g. "150x150".
    pub qr_size: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/split".to_string(),
            qr_service_url: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            qr_size: "150x150".to_string(),
        }
    }
}

/// Upload limits and timing for the bill-scan stub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub max_size_bytes: u64,
    pub allowed_content_types: Vec<String>,
    /// Simulated processing delay in milliseconds.
    pub delay_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: 10 * 1024 * 1024,
            allowed_content_types: vec![
                "image/jpeg".to_string(),
                "image/png".to_string(),
                "image/webp".to_string(),
                "application/pdf".to_string(),
            ],
            delay_ms: 1200,
        }
    }
}
