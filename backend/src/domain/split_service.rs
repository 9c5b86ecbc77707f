//! Split orchestration: normalization → totals → allocation.
//!
//! `SplitService::compute` is the single entry point the presentation layer
//! calls on every input change. It is a full, idempotent recomputation from
//! current field state; the only thing that can differ between two calls
//! with identical inputs is the one-shot percentage auto-fill.

use shared::{AllocationEntry, AllocationWarning, ParticipantMode, SplitConfig};
use tracing::debug;

use crate::domain::allocation;
use crate::domain::models::{BillInput, CalculatorState};
use crate::domain::normalize::format_fixed;
use crate::domain::totals;

/// Everything the presentation layer needs to render one compute pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOutcome {
    pub subtotal: f64,
    pub tax_percent: f64,
    pub tip_percent: f64,
    pub tax_amount: f64,
    pub tip_amount: f64,
    pub total: f64,
    pub people: u32,
    pub per_person: f64,
    pub rounding_adjustment: f64,
    pub allocation: Vec<AllocationEntry>,
    pub warning: Option<AllocationWarning>,
}

/// Runs the totals + allocation pipeline against a `CalculatorState`.
#[derive(Clone)]
pub struct SplitService {
    config: SplitConfig,
}

impl SplitService {
    pub fn new() -> Self {
        Self {
            config: SplitConfig::default(),
        }
    }

    pub fn with_config(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Recompute the whole breakdown from current field state.
    ///
    /// Always terminates and never panics, for any input including zero
    /// participants, zero subtotal and negative-leaning raw strings.
    /// Mutates `state` only for the documented side effects: participant
    /// list resizing, percent-mode back-fill of amount fields, and the
    /// one-shot pristine auto-fill.
    pub fn compute(&self, state: &mut CalculatorState) -> SplitOutcome {
        let input = BillInput::from_fields(&state.bill);
        let decimals = input.currency.decimals();

        // Normalize the people field and keep the participant list in sync.
        state.bill.people = input.people.to_string();
        state.ensure_participant_count(input.people as usize);

        let totals = totals::calculate_totals(&input);

        // When percent mode produced the amount, reflect it back into the
        // fixed-amount field so the form always shows a concrete value.
        if input.tax_enabled && input.tax_percent.is_some() {
            state.bill.tax_amount = format_fixed(totals.tax_amount, decimals);
        }
        if input.tip_enabled && input.tip_percent.is_some() {
            state.bill.tip_amount = format_fixed(totals.tip_amount, decimals);
        }

        let rounding =
            allocation::per_person_rounding(totals.total, input.people, input.round_up, decimals);

        let outcome = allocation::allocate(
            totals.total,
            &mut state.participants,
            input.auto_split,
            state.pristine,
            decimals,
            &self.config,
        );
        if outcome.auto_filled {
            state.pristine = false;
        }

        self.backfill_participant_fields(state, &outcome.entries, input.auto_split, decimals);

        debug!(
            "computed split: total={:.4} people={} warning={:?}",
            totals.total, input.people, outcome.warning
        );

        SplitOutcome {
            subtotal: input.subtotal,
            tax_percent: input.tax_percent.unwrap_or(0.0),
            tip_percent: input.tip_percent.unwrap_or(0.0),
            tax_amount: totals.tax_amount,
            tip_amount: totals.tip_amount,
            total: totals.total,
            people: input.people,
            per_person: rounding.per_person,
            rounding_adjustment: rounding.adjustment,
            allocation: outcome.entries,
            warning: outcome.warning,
        }
    }

    /// Whether the rounding adjustment is big enough to surface as a note.
    pub fn rounding_note_applies(&self, adjustment: f64) -> bool {
        adjustment.abs() >= self.config.rounding_note_threshold
    }

    /// Keep participant fields visible and consistent with the computed
    /// allocation: under auto-split both fields show the effective values;
    /// otherwise percent-mode participants get their amount field refreshed.
    fn backfill_participant_fields(
        &self,
        state: &mut CalculatorState,
        entries: &[AllocationEntry],
        auto_split: bool,
        decimals: u32,
    ) {
        let equal_percent = if state.participants.is_empty() {
            0.0
        } else {
            100.0 / state.participants.len() as f64
        };
        for (idx, p) in state.participants.iter_mut().enumerate() {
            let owed = entries.get(idx).map(|e| e.owed).unwrap_or(0.0);
            if auto_split {
                p.percent_field = format_fixed(equal_percent, 2);
                p.amount_field = format_fixed(owed, decimals);
            } else if p.mode == ParticipantMode::Percent {
                p.amount_field = format_fixed(owed, decimals);
            }
        }
    }
}

impl Default for SplitService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Currency;

    fn state() -> CalculatorState {
        let mut state = CalculatorState::new();
        state.bill.subtotal = "10.00".to_string();
        state.bill.tax_enabled = true;
        state.bill.tax_percent = "10".to_string();
        state.bill.tip_enabled = true;
        state.bill.tip_percent = "15".to_string();
        state.bill.people = "3".to_string();
        state
    }

    #[test]
    fn test_reference_pipeline() {
        let service = SplitService::new();
        let mut state = state();
        let outcome = service.compute(&mut state);

        assert!((outcome.tax_amount - 1.0).abs() < 1e-9);
        assert!((outcome.tip_amount - 1.65).abs() < 1e-9);
        assert!((outcome.total - 12.65).abs() < 1e-9);
        assert_eq!(outcome.people, 3);
        assert_eq!(state.participants.len(), 3);
    }

    #[test]
    fn test_percent_amounts_backfilled_into_bill_fields() {
        let service = SplitService::new();
        let mut state = state();
        service.compute(&mut state);
        assert_eq!(state.bill.tax_amount, "1.00");
        assert_eq!(state.bill.tip_amount, "1.65");
    }

    #[test]
    fn test_backfill_respects_zero_decimal_currency() {
        let service = SplitService::new();
        let mut state = state();
        state.bill.currency = Currency::JPY;
        state.bill.subtotal = "1000".to_string();
        service.compute(&mut state);
        assert_eq!(state.bill.tax_amount, "100");
        assert!(!state.bill.tip_amount.contains('.'));
    }

    #[test]
    fn test_fixed_amount_fields_left_alone_without_percent() {
        let service = SplitService::new();
        let mut state = state();
        state.bill.tax_percent = String::new();
        state.bill.tax_amount = "2.00".to_string();
        let outcome = service.compute(&mut state);
        assert_eq!(state.bill.tax_amount, "2.00");
        assert!((outcome.tax_amount - 2.0).abs() < 1e-9);
        assert_eq!(outcome.tax_percent, 0.0);
    }

    #[test]
    fn test_auto_split_reconciles_exactly() {
        let service = SplitService::new();
        let mut state = state();
        state.bill.auto_split = true;
        state.bill.tax_enabled = false;
        state.bill.tip_enabled = false;
        let outcome = service.compute(&mut state);

        let sum: f64 = outcome.allocation.iter().map(|e| e.owed).sum();
        assert!((sum - outcome.total).abs() < 1e-9);
        assert!((outcome.allocation[0].owed - 3.34).abs() < 1e-9);
        assert!((outcome.allocation[1].owed - 3.33).abs() < 1e-9);
    }

    #[test]
    fn test_auto_split_backfills_both_participant_fields() {
        let service = SplitService::new();
        let mut state = state();
        state.bill.auto_split = true;
        state.pristine = false;
        service.compute(&mut state);
        assert_eq!(state.participants[0].percent_field, "33.33");
        assert!(!state.participants[0].amount_field.is_empty());
    }

    #[test]
    fn test_percent_mode_amount_field_reflects_owed() {
        let service = SplitService::new();
        let mut state = state();
        state.bill.subtotal = "100".to_string();
        state.bill.tax_enabled = false;
        state.bill.tip_enabled = false;
        state.bill.people = "2".to_string();
        let outcome = service.compute(&mut state);
        // Pristine auto-fill gives each 50%, so 50.00 apiece.
        assert_eq!(outcome.allocation.len(), 2);
        assert_eq!(state.participants[0].amount_field, "50.00");
    }

    #[test]
    fn test_pristine_clears_only_when_auto_fill_fires() {
        let service = SplitService::new();

        // Under auto-split the mixed auto-fill never runs, so the flag
        // survives until the user leaves auto-split.
        let mut state = state();
        state.bill.auto_split = true;
        service.compute(&mut state);
        assert!(state.pristine);

        state.bill.auto_split = false;
        service.compute(&mut state);
        assert!(!state.pristine);
    }

    #[test]
    fn test_idempotent_after_auto_fill() {
        let service = SplitService::new();
        let mut state = state();
        // First pass fires the one-shot auto-fill; everything after it is
        // a pure function of field state.
        service.compute(&mut state);
        let second = service.compute(&mut state);
        let state_after_second = state.clone();
        let third = service.compute(&mut state);
        assert_eq!(second, third);
        assert_eq!(state, state_after_second);
    }

    #[test]
    fn test_zero_everything_never_panics() {
        let service = SplitService::new();
        let mut state = CalculatorState::new();
        state.bill.subtotal = String::new();
        state.bill.people = "0".to_string();
        let outcome = service.compute(&mut state);
        assert_eq!(outcome.total, 0.0);
        assert_eq!(outcome.people, 1);
        assert_eq!(outcome.per_person, 0.0);
    }

    #[test]
    fn test_garbage_input_degrades_to_zero() {
        let service = SplitService::new();
        let mut state = state();
        state.bill.subtotal = "not a number".to_string();
        state.bill.tax_percent = "???".to_string();
        let outcome = service.compute(&mut state);
        assert_eq!(outcome.subtotal, 0.0);
        assert_eq!(outcome.tax_percent, 0.0);
        assert_eq!(outcome.total, 0.0);
    }

    #[test]
    fn test_round_up_headline_and_adjustment() {
        let service = SplitService::new();
        let mut state = state();
        state.bill.subtotal = "10.00".to_string();
        state.bill.tax_enabled = false;
        state.bill.tip_enabled = false;
        state.bill.round_up = true;
        let outcome = service.compute(&mut state);
        assert!((outcome.per_person - 3.34).abs() < 1e-9);
        assert!((outcome.rounding_adjustment - 0.02).abs() < 1e-6);
        assert!(service.rounding_note_applies(outcome.rounding_adjustment));
    }

    #[test]
    fn test_tiny_adjustment_not_surfaced() {
        let service = SplitService::new();
        assert!(!service.rounding_note_applies(0.004));
        assert!(service.rounding_note_applies(-0.005));
    }

    #[test]
    fn test_warning_flows_through() {
        let service = SplitService::new();
        let mut state = state();
        state.pristine = false;
        state.ensure_participant_count(3);
        state.edit_participant_amount(0, "100");
        let outcome = service.compute(&mut state);
        assert_eq!(outcome.warning, Some(AllocationWarning::FixedExceedsTotal));
    }
}
