//! Plain-text amount rendering for breakdown export.
//!
//! The computational core only depends on a currency's decimal precision;
//! anything fancier (locale grouping, native symbols placement) belongs to
//! the presentation layer.

use shared::Currency;

/// Render an amount as `symbol` + fixed-precision value, e.g. "$12.65" or
/// "¥1265". Negative values carry a leading minus sign.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let decimals = currency.decimals() as usize;
    if amount < 0.0 {
        format!("-{}{:.*}", currency.symbol(), decimals, amount.abs())
    } else {
        format!("{}{:.*}", currency.symbol(), decimals, amount)
    }
}

/// Render a percentage the way the form shows it: "10" for whole numbers,
/// "8.875" otherwise.
pub fn format_percent(percent: f64) -> String {
    format!("{}", percent)
}
