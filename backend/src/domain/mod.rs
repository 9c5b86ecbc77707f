//! Domain layer: bill-splitting business logic.
//!
//! Pure calculation modules (`normalize`, `totals`, `allocation`) feed the
//! service structs the REST layer holds. Services own their configuration
//! and expose plain methods; nothing in here knows about HTTP.

pub mod allocation;
pub mod breakdown_service;
pub mod currency;
pub mod models;
pub mod normalize;
pub mod scan_service;
pub mod split_service;
pub mod totals;

pub use breakdown_service::BreakdownService;
pub use models::{BillInput, BillTotals, CalculatorState, Participant};
pub use scan_service::{ScanError, ScanService};
pub use split_service::{SplitOutcome, SplitService};
