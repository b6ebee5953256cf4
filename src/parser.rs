use csv::ReaderBuilder;
use std::collections::HashMap;
use std::path::Path;

use crate::schedule::slots::canonical_date;
use crate::schedule::types::{CrewAvailability, Role};

const RANK_COL: usize = 1;
const LAST_NAME_COL: usize = 2;
const FIRST_NAME_COL: usize = 3;
const AVAILABILITY_START_COL: usize = 5;

/// Availability cell values that still mean "can fly". Anything else marks
/// the crew member as busy for that date.
const CAN_FLY_VALUES: [&str; 3] = ["", "F", "AMR"];

/// Loads the crew/availability roster from a CSV file.
///
/// Layout (carried over from the source system's task sheet): row 0 is a
/// header whose cells from column 5 onward hold M/D/YYYY dates, one per
/// availability column. Below it, a row whose first cell is a role section
/// header ("PCs", "PIs", "FEs", "CEs") switches the role of the crew rows
/// that follow; a row with an empty first cell ends the roster. Crew rows
/// carry rank, last name and first name in columns 1-3 and availability
/// markers in the date columns.
///
/// The returned order is the file order; the allocation engine treats it as
/// the priority order.
pub fn load_roster<P: AsRef<Path>>(
    csv_path: P,
) -> Result<Vec<CrewAvailability>, Box<dyn std::error::Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(csv_path)?;

    let mut crew: Vec<CrewAvailability> = Vec::new();
    let mut date_by_col: HashMap<usize, String> = HashMap::new();
    let mut current_role: Option<Role> = None;

    for (row_index, result) in reader.records().enumerate() {
        let record = result?;

        if row_index == 0 {
            // Header row: map availability columns to canonical dates.
            for (col, value) in record.iter().enumerate() {
                if col < AVAILABILITY_START_COL || value.trim().is_empty() {
                    continue;
                }
                date_by_col.insert(col, canonical_date(value)?);
            }
            continue;
        }

        let first_cell = record.get(0).unwrap_or("").trim();
        if let Some(role) = Role::from_section_header(first_cell) {
            current_role = Some(role);
            continue;
        }
        if first_cell.is_empty() {
            break;
        }

        // Rows before the first section header carry no role; skip them.
        let Some(role) = current_role else {
            continue;
        };

        let rank = record.get(RANK_COL).unwrap_or("").trim().to_string();
        let last_name = record.get(LAST_NAME_COL).unwrap_or("").trim().replace('*', "");
        let first_name = record.get(FIRST_NAME_COL).unwrap_or("").trim().replace('*', "");
        if first_name.is_empty() && last_name.is_empty() {
            continue;
        }

        let mut availability = HashMap::new();
        for (&col, date) in &date_by_col {
            let value = record.get(col).unwrap_or("").trim();
            let can_fly = CAN_FLY_VALUES.contains(&value);
            availability.insert(date.clone(), can_fly);
        }

        crew.push(CrewAvailability {
            first_name,
            last_name,
            rank,
            role,
            availability,
        });
    }

    Ok(crew)
}
