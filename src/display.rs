use csv::Writer;
use std::io;
use std::path::Path;

use crate::schedule::types::{CrewMember, WeekSchedule};

const SHEET_HEADING: [&str; 7] = [
    "Date",
    "Flight Type",
    "Time",
    "Status",
    "Rank",
    "First Name",
    "Last Name",
];

/// Formats a crew member for display, e.g. "PC CPT Alice Smith".
pub fn format_crew_member(crew: &CrewMember) -> String {
    if crew.rank.is_empty() {
        format!("{} {} {}", crew.role, crew.first_name, crew.last_name)
    } else {
        format!("{} {} {} {}", crew.role, crew.rank, crew.first_name, crew.last_name)
    }
}

/// Prints the allocated week in a readable per-flight format.
pub fn print_week_schedule(schedule: &WeekSchedule) {
    println!("\n=== Week Flight Schedule ===");
    let assigned: usize = schedule.flights.iter().map(|f| f.assigned_crew().len()).sum();
    println!("Total flights: {}", schedule.flights.len());
    println!("Total crew assignments: {}", assigned);

    let mut current_date = "";
    for flight in &schedule.flights {
        if flight.date != current_date {
            println!("\n--- {} ---", flight.date);
            current_date = &flight.date;
        }
        println!("  {} at {}", flight.flight_type, flight.time);
        let crew = flight.assigned_crew();
        if crew.is_empty() {
            println!("    [UNFILLED]");
        }
        for member in crew {
            println!("    {}", format_crew_member(member));
        }
    }
}

/// Writes the schedule rows: a heading, then per flight one row of
/// date/type/time followed by one row per assigned crew member with "-"
/// placeholders in the flight columns (the source system's sheet layout).
fn write_schedule_records<W: io::Write>(
    schedule: &WeekSchedule,
    wtr: &mut Writer<W>,
) -> Result<(), csv::Error> {
    wtr.write_record(SHEET_HEADING)?;
    for flight in &schedule.flights {
        wtr.write_record([
            flight.date.as_str(),
            flight.flight_type.as_str(),
            flight.time.as_str(),
            "",
            "",
            "",
            "",
        ])?;
        for crew in flight.assigned_crew() {
            wtr.write_record([
                "-",
                "-",
                "-",
                crew.role.as_str(),
                crew.rank.as_str(),
                crew.first_name.as_str(),
                crew.last_name.as_str(),
            ])?;
        }
    }
    Ok(())
}

/// Writes the allocated week to a CSV file.
pub fn write_schedule_csv<P: AsRef<Path>>(
    schedule: &WeekSchedule,
    csv_path: P,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = Writer::from_path(csv_path)?;
    write_schedule_records(schedule, &mut wtr)?;
    wtr.flush()?;
    Ok(())
}

/// Renders the CSV export into a string (used by the web download endpoint).
pub fn schedule_csv_string(schedule: &WeekSchedule) -> Result<String, Box<dyn std::error::Error>> {
    let mut wtr = Writer::from_writer(Vec::new());
    write_schedule_records(schedule, &mut wtr)?;
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::{CrewMember, FlightSlot, FlightType, Role};

    fn sample_schedule() -> WeekSchedule {
        let mut flight = FlightSlot::new(
            FlightType::Maintenance,
            "Jun 01 26".to_string(),
            "09:00".to_string(),
        );
        flight.pc = Some(CrewMember {
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            rank: "CPT".to_string(),
            role: Role::Pc,
        });
        WeekSchedule { flights: vec![flight] }
    }

    #[test]
    fn csv_layout_has_flight_and_crew_rows() {
        let csv = schedule_csv_string(&sample_schedule()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Flight Type,Time,Status,Rank,First Name,Last Name");
        assert_eq!(lines[1], "Jun 01 26,MAINTENANCE,09:00,,,,");
        assert_eq!(lines[2], "-,-,-,PC,CPT,Alice,Smith");
    }

    #[test]
    fn crew_member_formatting_includes_role_and_rank() {
        let crew = CrewMember {
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            rank: "CPT".to_string(),
            role: Role::Pc,
        };
        assert_eq!(format_crew_member(&crew), "PC CPT Alice Smith");
    }
}
