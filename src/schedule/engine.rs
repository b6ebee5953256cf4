use super::fairness::RotationTracker;
use super::occupancy::is_spot_occupied;
use super::types::{CrewAvailability, Role, WeekSchedule};

/// Fills a generated week of empty flight slots from the crew list, in one
/// greedy pass with no backtracking.
///
/// Slots are visited in schedule order; for each slot the crew list is
/// walked in its given order, which is the priority order (earlier entries
/// get first claim). A candidate is skipped when unavailable on the slot's
/// date, already flown that date, rotation-blocked for their role, or when
/// their role's quota on the slot is met. A role with no remaining eligible
/// crew simply leaves seats unfilled; that is not a failure.
pub fn allocate_flights(schedule: &mut WeekSchedule, crew: &[CrewAvailability]) {
    let mut tracker = RotationTracker::new(crew);
    let mut current_flight_date = String::new();

    for (flight_index, flight) in schedule.flights.iter_mut().enumerate() {
        if current_flight_date != flight.date {
            tracker.start_new_day();
            current_flight_date = flight.date.clone();
        }

        for member in crew {
            let name = member.display_name();

            // Missing availability entry means unavailable; there is no
            // fallback whitelist at this layer.
            let available = member
                .availability
                .get(&flight.date)
                .copied()
                .unwrap_or(false);
            if !available
                || tracker.has_flown_today(&name)
                || tracker.in_rotation_window(member.role, &name)
            {
                continue;
            }

            if is_spot_occupied(member.role, flight, flight_index) {
                continue;
            }

            match member.role {
                Role::Pc => flight.pc = Some(member.to_member()),
                Role::Pi => flight.pis.push(member.to_member()),
                Role::Fe => flight.fe = Some(member.to_member()),
                Role::Ce => flight.ces.push(member.to_member()),
            }
            tracker.record_assignment(member.role, &name);
        }
    }
}
