//! Normalized bill inputs and derived totals.

use shared::{BillFields, Currency};

use crate::domain::normalize::{clamp, parse_amount, people_count};

/// Bill inputs after normalization. All numeric fields are valid,
/// non-NaN numbers; percentages are `Some` only when the corresponding
/// percent field is non-empty (percent always wins over the fixed field).
#[derive(Debug, Clone, PartialEq)]
pub struct BillInput {
    /// Pre-tax, pre-tip amount, clamped to >= 0.
    pub subtotal: f64,
    pub tax_enabled: bool,
    /// Clamped to 0..=100.
    pub tax_percent: Option<f64>,
    /// Fixed tax override, clamped to >= 0. Used only when `tax_percent`
    /// is `None`.
    pub tax_fixed: f64,
    pub tip_enabled: bool,
    /// Clamped to >= 0; deliberately has no upper cap.
    pub tip_percent: Option<f64>,
    pub tip_fixed: f64,
    /// Participant count, floored and never below 1.
    pub people: u32,
    pub round_up: bool,
    pub auto_split: bool,
    pub currency: Currency,
}

impl BillInput {
    /// Normalize raw form fields. Never fails; malformed numbers become 0
    /// and out-of-range values snap to the nearest boundary.
    pub fn from_fields(fields: &BillFields) -> Self {
        let tax_percent_raw = fields.tax_percent.trim();
        let tax_percent = if fields.tax_enabled && !tax_percent_raw.is_empty() {
            Some(clamp(parse_amount(tax_percent_raw), 0.0, 100.0))
        } else {
            None
        };

        let tip_percent_raw = fields.tip_percent.trim();
        let tip_percent = if fields.tip_enabled && !tip_percent_raw.is_empty() {
            Some(parse_amount(tip_percent_raw).max(0.0))
        } else {
            None
        };

        Self {
            subtotal: parse_amount(&fields.subtotal).max(0.0),
            tax_enabled: fields.tax_enabled,
            tax_percent,
            tax_fixed: parse_amount(&fields.tax_amount).max(0.0),
            tip_enabled: fields.tip_enabled,
            tip_percent,
            tip_fixed: parse_amount(&fields.tip_amount).max(0.0),
            people: people_count(&fields.people),
            round_up: fields.round_up,
            auto_split: fields.auto_split,
            currency: fields.currency,
        }
    }
}

/// Amounts derived from a bill. Never persisted; recomputed on every
/// input change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BillTotals {
    pub tax_amount: f64,
    pub tip_amount: f64,
    /// subtotal + tax; the base the tip percentage applies to.
    pub base_plus_tax: f64,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> BillFields {
        BillFields {
            subtotal: "10.00".to_string(),
            tax_enabled: true,
            tax_percent: "10".to_string(),
            tax_amount: String::new(),
            tip_enabled: true,
            tip_percent: "15".to_string(),
            tip_amount: String::new(),
            people: "3".to_string(),
            round_up: false,
            auto_split: false,
            currency: Currency::USD,
        }
    }

    #[test]
    fn test_from_fields_happy_path() {
        let input = BillInput::from_fields(&fields());
        assert_eq!(input.subtotal, 10.0);
        assert_eq!(input.tax_percent, Some(10.0));
        assert_eq!(input.tip_percent, Some(15.0));
        assert_eq!(input.people, 3);
    }

    #[test]
    fn test_negative_subtotal_clamped() {
        let mut f = fields();
        f.subtotal = "-50".to_string();
        assert_eq!(BillInput::from_fields(&f).subtotal, 0.0);
    }

    #[test]
    fn test_tax_percent_clamped_to_100() {
        let mut f = fields();
        f.tax_percent = "250".to_string();
        assert_eq!(BillInput::from_fields(&f).tax_percent, Some(100.0));
    }

    #[test]
    fn test_tip_percent_has_no_upper_cap() {
        let mut f = fields();
        f.tip_percent = "250".to_string();
        assert_eq!(BillInput::from_fields(&f).tip_percent, Some(250.0));
    }

    #[test]
    fn test_empty_percent_field_means_fixed_amount_mode() {
        let mut f = fields();
        f.tax_percent = "  ".to_string();
        f.tax_amount = "2.50".to_string();
        let input = BillInput::from_fields(&f);
        assert_eq!(input.tax_percent, None);
        assert_eq!(input.tax_fixed, 2.5);
    }

    #[test]
    fn test_disabled_modifier_ignores_percent_field() {
        let mut f = fields();
        f.tax_enabled = false;
        assert_eq!(BillInput::from_fields(&f).tax_percent, None);
    }

    #[test]
    fn test_people_floor_and_minimum() {
        let mut f = fields();
        f.people = "0".to_string();
        assert_eq!(BillInput::from_fields(&f).people, 1);
        f.people = "4.7".to_string();
        assert_eq!(BillInput::from_fields(&f).people, 4);
    }
}
