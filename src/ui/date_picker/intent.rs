use chrono::NaiveDate;

use crate::api::types::DateRange;
use crate::store::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DatePickerIntent {
    /// Open with the current filter range; the cursor starts on `from`, or on
    /// `fallback` when no range is set.
    Open {
        range: DateRange,
        fallback: NaiveDate,
    },
    Close,
    /// Move the cursor by a number of days (negative moves back).
    MoveDays(i64),
    /// Pick the day under the cursor.
    Select,
}

impl Intent for DatePickerIntent {}
