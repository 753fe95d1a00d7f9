//! Republic of China (Minguo) calendar dates.
//!
//! Uniform invoices are dated in the ROC calendar, which counts years from
//! 1912 (year 1). The month and day match the Gregorian calendar.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gregorian year corresponding to ROC year 0.
pub const ROC_EPOCH_YEAR: i32 = 1911;

/// A date in the ROC calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RocDate {
    /// ROC year (Gregorian year − 1911).
    pub year: i32,
    /// Month, 1–12.
    pub month: u32,
    /// Day of month, 1–31.
    pub day: u32,
}

impl RocDate {
    /// Today's date in the ROC calendar, from the local clock.
    pub fn today() -> Self {
        chrono::Local::now().date_naive().into()
    }

    /// Convert back to a Gregorian [`NaiveDate`].
    ///
    /// `None` if the fields do not name a real calendar date.
    pub fn to_gregorian(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year + ROC_EPOCH_YEAR, self.month, self.day)
    }
}

impl From<NaiveDate> for RocDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year() - ROC_EPOCH_YEAR,
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for RocDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}
