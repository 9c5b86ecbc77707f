//! Allocation engine: distributes the bill total across participants.
//!
//! Two mutually exclusive strategies:
//!
//! - **Equal split** (auto-split flag): total divided evenly, each share
//!   rounded to currency precision, with the first participant absorbing
//!   the rounding remainder so the shares reconcile exactly.
//! - **Mixed percent/amount**: fixed amounts come off the top, the rest is
//!   shared among percent-mode participants in proportion to their
//!   percentages.
//!
//! Allocations never fail; inconsistencies surface as a single advisory
//! warning and the numbers render best-effort.

use shared::{AllocationEntry, AllocationWarning, ParticipantMode, SplitConfig};
use tracing::debug;

use crate::domain::models::Participant;
use crate::domain::normalize::{ceil_to, round_to};

/// Result of one allocation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationOutcome {
    /// Per-participant owed amounts in list order. Each is >= 0; the sum
    /// approximates the total within the reconciliation gap.
    pub entries: Vec<AllocationEntry>,
    pub warning: Option<AllocationWarning>,
    /// True when the pristine auto-fill populated percent fields this pass.
    pub auto_filled: bool,
}

/// Headline per-person figure and its rounding drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerPersonRounding {
    pub per_person: f64,
    /// (rounded per-person × people) − total. Informational only; never
    /// applied to individual allocations.
    pub adjustment: f64,
}

/// Round the equal-share headline figure to currency precision, ceiling
/// when round-up is requested.
pub fn per_person_rounding(total: f64, people: u32, round_up: bool, decimals: u32) -> PerPersonRounding {
    let n = people.max(1) as f64;
    let raw = total / n;
    let per_person = if round_up {
        ceil_to(raw, decimals)
    } else {
        round_to(raw, decimals)
    };
    PerPersonRounding {
        per_person,
        adjustment: per_person * n - total,
    }
}

/// Distribute `total` across the participants.
///
/// May mutate participant percent fields: on the first pristine pass the
/// mixed strategy auto-fills equal percentages (100/count, 3 decimals)
/// across percent-mode participants.
pub fn allocate(
    total: f64,
    participants: &mut [Participant],
    auto_split: bool,
    pristine: bool,
    decimals: u32,
    config: &SplitConfig,
) -> AllocationOutcome {
    if auto_split {
        equal_split(total, participants, decimals)
    } else {
        mixed_split(total, participants, pristine, config)
    }
}

/// User-facing message for an allocation warning.
pub fn warning_message(warning: AllocationWarning) -> &'static str {
    match warning {
        AllocationWarning::FixedExceedsTotal => {
            "Warning: Fixed amounts exceed total. Please reduce some amounts."
        }
        AllocationWarning::PercentSumInvalid => {
            "Warning: Percents do not sum to 100%. They were scaled proportionally."
        }
        AllocationWarning::UnallocatedRemainder => {
            "Warning: Unallocated amount remains. Please adjust shares."
        }
        AllocationWarning::OverAllocated => {
            "Warning: Allocations exceed total. Please adjust shares."
        }
    }
}

fn equal_split(total: f64, participants: &[Participant], decimals: u32) -> AllocationOutcome {
    let n = participants.len().max(1);
    let share = round_to(total / n as f64, decimals);
    // The first participant absorbs the cent-level drift so the shares sum
    // to the total exactly. Arbitrary but consistent.
    let diff = total - share * n as f64;

    let entries = participants
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let mut owed = share;
            if idx == 0 {
                owed += diff;
            }
            AllocationEntry {
                name: p.display_name(),
                owed: owed.max(0.0),
            }
        })
        .collect();

    AllocationOutcome {
        entries,
        warning: None,
        auto_filled: false,
    }
}

fn mixed_split(
    total: f64,
    participants: &mut [Participant],
    pristine: bool,
    config: &SplitConfig,
) -> AllocationOutcome {
    let fixed_sum: f64 = participants
        .iter()
        .filter(|p| p.mode == ParticipantMode::Amount)
        .map(|p| p.amount_value())
        .sum();
    let over_fixed = fixed_sum > total + 1e-9;
    // Cap fixed amounts at the total so the remainder cannot go negative;
    // the warning persists even though the cap is applied.
    let cap_ratio = if over_fixed && fixed_sum > 0.0 {
        total / fixed_sum
    } else {
        1.0
    };
    let remaining = (total - fixed_sum.min(total)).max(0.0);

    let percent_count = participants
        .iter()
        .filter(|p| p.mode == ParticipantMode::Percent)
        .count();
    let mut percent_sum: f64 = participants
        .iter()
        .filter(|p| p.mode == ParticipantMode::Percent)
        .map(|p| p.percent_value())
        .sum();

    // One-shot default: before anyone has touched a participant field,
    // seed percent-mode participants with equal percentages.
    let mut auto_filled = false;
    if pristine && percent_count > 0 {
        let equal = round_to(100.0 / percent_count.max(1) as f64, 3);
        for p in participants
            .iter_mut()
            .filter(|p| p.mode == ParticipantMode::Percent)
        {
            p.percent_field = format!("{}", equal);
        }
        percent_sum = 100.0;
        auto_filled = true;
        debug!("auto-filled {} percent fields at {}%", percent_count, equal);
    }

    let count = participants.len().max(1);
    let entries: Vec<AllocationEntry> = participants
        .iter()
        .map(|p| {
            let owed = match p.mode {
                ParticipantMode::Amount => p.amount_value() * cap_ratio,
                ParticipantMode::Percent => {
                    if percent_count == 0 {
                        // Unreachable when a percent-mode participant
                        // exists; kept as a harmless fallback.
                        remaining / count as f64
                    } else if percent_sum <= 0.0 {
                        0.0
                    } else {
                        remaining * (p.percent_value() / percent_sum)
                    }
                }
            };
            AllocationEntry {
                name: p.display_name(),
                owed: owed.max(0.0),
            }
        })
        .collect();

    let allocated: f64 = entries.iter().map(|e| e.owed).sum();
    let gap = total - allocated;

    let warning = if over_fixed {
        Some(AllocationWarning::FixedExceedsTotal)
    } else if percent_count > 0 && (percent_sum - 100.0).abs() > config.percent_sum_tolerance {
        Some(AllocationWarning::PercentSumInvalid)
    } else if gap >= config.allocation_gap_tolerance {
        Some(AllocationWarning::UnallocatedRemainder)
    } else if -gap >= config.allocation_gap_tolerance {
        Some(AllocationWarning::OverAllocated)
    } else {
        None
    };

    AllocationOutcome {
        entries,
        warning,
        auto_filled,
    }
}
