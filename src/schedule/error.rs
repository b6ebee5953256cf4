use thiserror::Error;

/// Fatal conditions for a scheduling run. Any of these aborts the run with
/// no partial schedule; under-filled slots are not errors.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("unparseable date {date:?} (expected M/D/YYYY)")]
    BadDate { date: String },

    #[error("no flight type/time defined for slot position {position} on {date} ({normal_flights} normal flights configured, max is 3)")]
    UnplannedSlotPosition {
        position: usize,
        date: String,
        normal_flights: u32,
    },

    #[error("expected 7 dates for a week, got {0}")]
    BadWeekLength(usize),
}
