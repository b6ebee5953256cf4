use chrono::NaiveDate;

use super::error::ScheduleError;
use super::types::{FlightSlot, FlightType, WeekSchedule};

/// Date format accepted on input (matches the roster header cells).
pub const INPUT_DATE_FORMAT: &str = "%m/%d/%Y";
/// Canonical date format attached to slots and availability keys, e.g. "Jun 01 26".
pub const FULL_DATE_FORMAT: &str = "%b %d %y";

pub const NUMBER_OF_MAINTENANCE_FLIGHTS: u32 = 1;
pub const NUMBER_OF_TRAINING_FLIGHTS: u32 = 3;

/// Flight type and time label by zero-based position within a day.
///
/// Position 4 is TRAINING even though positions 1-3 already cover the three
/// daily training flights; that labeling is carried over from the source
/// system unchanged. Positions past 6 have no entry: day configurations with
/// more than 3 normal flights are rejected rather than silently defaulted.
fn slot_plan(position: usize) -> Option<(FlightType, &'static str)> {
    match position {
        0 => Some((FlightType::Maintenance, "09:00")),
        1 => Some((FlightType::Training, "08:00")),
        2 => Some((FlightType::Training, "10:00")),
        3 => Some((FlightType::Training, "11:00")),
        4 => Some((FlightType::Training, "12:00")),
        5 => Some((FlightType::Normal, "12:00")),
        6 => Some((FlightType::Normal, "17:00")),
        _ => None,
    }
}

/// Parses an input-format date string ("6/1/2026") into a `NaiveDate`.
pub fn parse_input_date(date: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(date.trim(), INPUT_DATE_FORMAT).map_err(|_| {
        ScheduleError::BadDate {
            date: date.to_string(),
        }
    })
}

/// Normalizes an input-format date string to the canonical display form
/// ("Jun 01 26") that availability maps and slots are keyed on.
pub fn canonical_date(date: &str) -> Result<String, ScheduleError> {
    Ok(parse_input_date(date)?.format(FULL_DATE_FORMAT).to_string())
}

/// The 7 consecutive input-format dates starting at `start_date`.
pub fn week_dates(start_date: &str) -> Result<Vec<String>, ScheduleError> {
    let start = parse_input_date(start_date)?;
    Ok((0..7)
        .map(|offset| {
            let date = start + chrono::Days::new(offset);
            format!("{}/{}/{}", date.format("%-m"), date.format("%-d"), date.format("%Y"))
        })
        .collect())
}

/// Generates the week's empty flight slots: per day 1 maintenance flight,
/// 3 training flights, then the configured number of normal flights, all in
/// that order. Fails fast on a bad date or a day configured past the slot
/// position table.
pub fn generate_week(
    dates: &[String],
    normal_flights_by_date: &[u32],
) -> Result<WeekSchedule, ScheduleError> {
    if dates.len() != 7 || normal_flights_by_date.len() != 7 {
        return Err(ScheduleError::BadWeekLength(dates.len().min(normal_flights_by_date.len())));
    }

    let mut flights = Vec::new();
    for (date, &normal_flights) in dates.iter().zip(normal_flights_by_date) {
        let full_date = canonical_date(date)?;

        let total = (normal_flights + NUMBER_OF_MAINTENANCE_FLIGHTS + NUMBER_OF_TRAINING_FLIGHTS)
            as usize;
        for position in 0..total {
            let (flight_type, time) =
                slot_plan(position).ok_or(ScheduleError::UnplannedSlotPosition {
                    position,
                    date: full_date.clone(),
                    normal_flights,
                })?;
            flights.push(FlightSlot::new(flight_type, full_date.clone(), time.to_string()));
        }
    }

    Ok(WeekSchedule { flights })
}
