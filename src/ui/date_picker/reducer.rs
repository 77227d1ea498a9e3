use chrono::Duration;

use crate::api::types::DateRange;
use crate::store::mvi::Reducer;

use super::intent::DatePickerIntent;
use super::state::DatePickerState;

pub struct DatePickerReducer;

impl Reducer for DatePickerReducer {
    type State = DatePickerState;
    type Intent = DatePickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DatePickerIntent::Open { range, fallback } => DatePickerState::Open {
                cursor: range.from.unwrap_or(fallback),
                range,
            },
            DatePickerIntent::Close => DatePickerState::Hidden,
            DatePickerIntent::MoveDays(days) => match state {
                DatePickerState::Open { cursor, range } => DatePickerState::Open {
                    cursor: cursor
                        .checked_add_signed(Duration::days(days))
                        .unwrap_or(cursor),
                    range,
                },
                other => other,
            },
            DatePickerIntent::Select => match state {
                DatePickerState::Open { cursor, range } => {
                    let range = match (range.from, range.to) {
                        // Start a fresh selection.
                        (None, _) | (Some(_), Some(_)) => DateRange {
                            from: Some(cursor),
                            to: None,
                        },
                        (Some(from), None) if cursor < from => DateRange {
                            from: Some(cursor),
                            to: Some(from),
                        },
                        (Some(from), None) => DateRange::new(from, cursor),
                    };
                    DatePickerState::Open { cursor, range }
                }
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, day).unwrap()
    }

    fn open_empty() -> DatePickerState {
        DatePickerReducer::reduce(
            DatePickerState::Hidden,
            DatePickerIntent::Open {
                range: DateRange::default(),
                fallback: june(10),
            },
        )
    }

    #[test]
    fn open_starts_cursor_on_from() {
        let state = DatePickerReducer::reduce(
            DatePickerState::Hidden,
            DatePickerIntent::Open {
                range: DateRange::new(june(6), june(15)),
                fallback: june(1),
            },
        );
        assert_eq!(state.cursor(), Some(june(6)));
    }

    #[test]
    fn two_selections_complete_the_range() {
        let state = DatePickerReducer::reduce(open_empty(), DatePickerIntent::Select);
        assert_eq!(
            state.range(),
            Some(DateRange {
                from: Some(june(10)),
                to: None
            })
        );
        let state = DatePickerReducer::reduce(state, DatePickerIntent::MoveDays(3));
        let state = DatePickerReducer::reduce(state, DatePickerIntent::Select);
        assert_eq!(state.range(), Some(DateRange::new(june(10), june(13))));
    }

    #[test]
    fn selecting_before_from_swaps_bounds() {
        let state = DatePickerReducer::reduce(open_empty(), DatePickerIntent::Select);
        let state = DatePickerReducer::reduce(state, DatePickerIntent::MoveDays(-7));
        let state = DatePickerReducer::reduce(state, DatePickerIntent::Select);
        assert_eq!(state.range(), Some(DateRange::new(june(3), june(10))));
    }

    #[test]
    fn select_after_complete_restarts() {
        let state = DatePickerReducer::reduce(
            DatePickerState::Hidden,
            DatePickerIntent::Open {
                range: DateRange::new(june(6), june(15)),
                fallback: june(1),
            },
        );
        let state = DatePickerReducer::reduce(state, DatePickerIntent::Select);
        let range = state.range().unwrap();
        assert_eq!(range.from, Some(june(6)));
        assert!(range.to.is_none());
    }

    #[test]
    fn hidden_ignores_moves() {
        let state = DatePickerReducer::reduce(DatePickerState::Hidden, DatePickerIntent::MoveDays(1));
        assert!(!state.is_open());
    }
}
