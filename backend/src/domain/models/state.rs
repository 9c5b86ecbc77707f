//! Explicit calculator state.
//!
//! The presentation layer owns the single mutable `CalculatorState` and
//! re-runs the pure compute pipeline against it on every input change.
//! There is no other mutable state anywhere in the core.

use shared::BillFields;

use crate::domain::models::Participant;
use crate::domain::normalize::parse_amount;

/// Current field state of the whole form.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub bill: BillFields,
    /// Insertion order matters: it drives default naming and the
    /// first-participant rounding-remainder rule.
    pub participants: Vec<Participant>,
    /// True until any participant field has been edited or the one-shot
    /// percentage auto-fill has fired.
    pub pristine: bool,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            bill: BillFields::default(),
            participants: Vec::new(),
            pristine: true,
        }
    }

    /// Grow or shrink the participant list to `count`, preserving existing
    /// entries and default-naming new ones by position.
    pub fn ensure_participant_count(&mut self, count: usize) {
        while self.participants.len() < count {
            let index = self.participants.len();
            self.participants.push(Participant::guest(index));
        }
        self.participants.truncate(count);
    }

    /// User edited a participant's percent field.
    pub fn edit_participant_percent(&mut self, index: usize, raw: &str) {
        if let Some(p) = self.participants.get_mut(index) {
            p.edit_percent(raw);
            self.pristine = false;
        }
    }

    /// User edited a participant's amount field.
    pub fn edit_participant_amount(&mut self, index: usize, raw: &str) {
        if let Some(p) = self.participants.get_mut(index) {
            p.edit_amount(raw);
            self.pristine = false;
        }
    }

    /// Explicitly remove one participant and decrement the people field.
    pub fn remove_participant(&mut self, index: usize) {
        if index < self.participants.len() {
            self.participants.remove(index);
            let people = parse_amount(&self.bill.people).floor().max(0.0) - 1.0;
            self.bill.people = format!("{}", people.max(0.0) as u32);
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
