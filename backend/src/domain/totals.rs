//! Totals calculation: subtotal + tax + tip.
//!
//! Tax and tip each support two input modes. A non-empty percent field wins
//! over the fixed-amount field. The tip percentage deliberately applies to
//! the tax-inclusive base (subtotal + tax); that rule is load-bearing for
//! output compatibility and must not be "fixed".

use crate::domain::models::{BillInput, BillTotals};

/// Derive tax amount, tip amount and grand total from normalized inputs.
/// Total always equals subtotal + tax + tip exactly (modulo float noise).
pub fn calculate_totals(bill: &BillInput) -> BillTotals {
    let mut tax_amount = 0.0;
    if bill.tax_enabled {
        tax_amount = match bill.tax_percent {
            Some(pct) => bill.subtotal * (pct / 100.0),
            None => bill.tax_fixed.max(0.0),
        };
    }

    let base_plus_tax = bill.subtotal + tax_amount;

    let mut tip_amount = 0.0;
    if bill.tip_enabled {
        tip_amount = match bill.tip_percent {
            Some(pct) => base_plus_tax * (pct / 100.0),
            None => bill.tip_fixed.max(0.0),
        };
    }

    BillTotals {
        tax_amount,
        tip_amount,
        base_plus_tax,
        total: base_plus_tax + tip_amount,
    }
}
