//! Core form-assistance algorithms: tax-ID checksum, price reconciliation,
//! Chinese numeral rendering, digit grouping, and ROC dates.
//!
//! Everything in this module is a pure, synchronous computation with no I/O
//! and no shared state. Malformed input degrades to a safe default instead of
//! panicking: invalid tax IDs are `false`, unparsable amounts are `0`, and
//! out-of-range numerals render as a placeholder token.

mod grouping;
mod numeral;
mod reconcile;
mod roc_date;
mod tax_id;

pub use grouping::*;
pub use numeral::*;
pub use reconcile::*;
pub use roc_date::*;
pub use tax_id::*;
