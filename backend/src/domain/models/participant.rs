//! Participant model and its percent/amount mode transitions.

use shared::ParticipantMode;

use crate::domain::normalize::parse_amount;

/// One person on the bill. The percent and amount fields mirror the form;
/// whichever matches `mode` is authoritative at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub name: String,
    pub mode: ParticipantMode,
    pub percent_field: String,
    pub amount_field: String,
}

impl Participant {
    /// New participant with the default name for its position in the list.
    pub fn guest(index: usize) -> Self {
        Self {
            name: format!("Guest {}", index + 1),
            mode: ParticipantMode::Percent,
            percent_field: String::new(),
            amount_field: String::new(),
        }
    }

    /// Name for display and export; blank names fall back to "Guest".
    pub fn display_name(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "Guest".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Parsed percent field, clamped to >= 0.
    pub fn percent_value(&self) -> f64 {
        parse_amount(&self.percent_field).max(0.0)
    }

    /// Parsed amount field, clamped to >= 0.
    pub fn amount_value(&self) -> f64 {
        parse_amount(&self.amount_field).max(0.0)
    }

    /// User typed in the percent field: claim percent mode.
    pub fn edit_percent(&mut self, raw: &str) {
        self.mode = ParticipantMode::Percent;
        self.percent_field = raw.to_string();
    }

    /// User typed in the amount field: claim amount mode and clear the
    /// percent field so it can be recomputed.
    pub fn edit_amount(&mut self, raw: &str) {
        self.mode = ParticipantMode::Amount;
        self.amount_field = raw.to_string();
        self.percent_field.clear();
    }
}
