use chrono::NaiveDate;

use crate::api::types::DateRange;
use crate::store::mvi::SliceState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DatePickerState {
    #[default]
    Hidden,
    Open {
        /// Day under the cursor.
        cursor: NaiveDate,
        /// Selection so far; `from` is picked first, then `to`.
        range: DateRange,
    },
}

impl SliceState for DatePickerState {}

impl DatePickerState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn range(&self) -> Option<DateRange> {
        match self {
            Self::Open { range, .. } => Some(*range),
            Self::Hidden => None,
        }
    }

    pub fn cursor(&self) -> Option<NaiveDate> {
        match self {
            Self::Open { cursor, .. } => Some(*cursor),
            Self::Hidden => None,
        }
    }
}
