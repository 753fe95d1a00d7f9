//! Company directory lookup against the g0v company data API.
//!
//! Resolves a unified business number to a registered company name and vice
//! versa, plus the small amount of client-side state that goes with it:
//! request sequencing (so stale responses can be dropped) and the
//! autocomplete record format the original web form kept in local storage.
//!
//! # Example
//!
//! ```ignore
//! use fapiao::lookup::*;
//!
//! // Resolve an ID to a company (async, requires network)
//! let info = company_by_id("22099131").await?;
//!
//! // Free-text search; `found > 1` means the query was ambiguous
//! let info = search_company("台積電").await?;
//! ```

mod client;
mod records;
mod session;

pub use client::{COMPANY_API_URL, CompanyInfo, LookupError, company_by_id, search_company};
pub use records::{CompanyRecord, RecordStore};
pub use session::{LookupSession, RequestTicket};
