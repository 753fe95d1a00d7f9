//! # fapiao
//!
//! Toolkit for filling out Taiwanese uniform invoices (統一發票):
//! tax-ID checksum validation, company directory lookup,
//! price/tax/total reconciliation, and traditional-Chinese numeral rendering.
//!
//! All tax rates use [`rust_decimal::Decimal`] — never floating point.
//! Monetary amounts are whole currency units (the NTD has no sub-unit in
//! invoicing practice), carried as `i64`.
//!
//! ## Quick Start
//!
//! ```rust
//! use fapiao::core::*;
//! use rust_decimal_macros::dec;
//!
//! // 8-digit unified business number with a valid checksum
//! assert!(is_valid_tax_id("22099131"));
//! assert!(!is_valid_tax_id("22099132"));
//!
//! // The user edited the net price; derive tax and total at 5% VAT
//! let fields = FieldValues { price: 1000, tax_rate: dec!(5), total: 0 };
//! let r = reconcile(EditedField::Price, &fields);
//! assert_eq!(r.tax, 50);
//! assert_eq!(r.total, 1050);
//! assert_eq!(numeral_string(r.total), "壹仟伍拾");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Tax-ID checksum, price reconciliation, numerals, digit grouping, ROC dates |
//! | `lookup` | Async g0v company directory client, lookup sessions, autocomplete records |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "lookup")]
pub mod lookup;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
