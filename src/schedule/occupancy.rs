use super::types::{FlightSlot, FlightType, Role};

/// Returns whether `role`'s quota on `flight` is already met, so the next
/// candidate of that role must be skipped.
///
/// `flight_index` is the slot's zero-based position in the whole week
/// sequence. The training-flight parity rules key on that whole-sequence
/// index, not on a per-day index; the source system behaves this way and it
/// is preserved verbatim (open question, see DESIGN.md).
///
/// Quotas: PC and FE take exactly one seat on every flight. PI takes 2 on
/// even-index training flights, otherwise 1. CE never flies maintenance,
/// takes 1 on even-index training flights, 3 on odd, and 1 on normal flights.
pub fn is_spot_occupied(role: Role, flight: &FlightSlot, flight_index: usize) -> bool {
    match role {
        Role::Pc => flight.pc.is_some(),
        Role::Pi => match flight.flight_type {
            FlightType::Maintenance | FlightType::Normal => flight.pis.len() == 1,
            FlightType::Training => {
                if flight_index % 2 == 0 {
                    flight.pis.len() == 2
                } else {
                    flight.pis.len() == 1
                }
            }
        },
        Role::Fe => flight.fe.is_some(),
        Role::Ce => match flight.flight_type {
            FlightType::Maintenance => true,
            FlightType::Training => {
                if flight_index % 2 == 0 {
                    flight.ces.len() == 1
                } else {
                    flight.ces.len() == 3
                }
            }
            FlightType::Normal => flight.ces.len() == 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::CrewMember;

    fn member(role: Role) -> CrewMember {
        CrewMember {
            first_name: "Test".to_string(),
            last_name: "Crew".to_string(),
            rank: "SGT".to_string(),
            role,
        }
    }

    fn slot(flight_type: FlightType) -> FlightSlot {
        FlightSlot::new(flight_type, "Jun 01 26".to_string(), "09:00".to_string())
    }

    #[test]
    fn pc_and_fe_are_single_seat_everywhere() {
        for flight_type in [FlightType::Maintenance, FlightType::Training, FlightType::Normal] {
            let mut flight = slot(flight_type);
            assert!(!is_spot_occupied(Role::Pc, &flight, 0));
            assert!(!is_spot_occupied(Role::Fe, &flight, 0));
            flight.pc = Some(member(Role::Pc));
            flight.fe = Some(member(Role::Fe));
            assert!(is_spot_occupied(Role::Pc, &flight, 0));
            assert!(is_spot_occupied(Role::Fe, &flight, 0));
        }
    }

    #[test]
    fn training_even_index_takes_two_pis() {
        let mut flight = slot(FlightType::Training);
        assert!(!is_spot_occupied(Role::Pi, &flight, 2));
        flight.pis.push(member(Role::Pi));
        assert!(!is_spot_occupied(Role::Pi, &flight, 2));
        flight.pis.push(member(Role::Pi));
        assert!(is_spot_occupied(Role::Pi, &flight, 2));
    }

    #[test]
    fn training_odd_index_takes_one_pi() {
        let mut flight = slot(FlightType::Training);
        flight.pis.push(member(Role::Pi));
        assert!(is_spot_occupied(Role::Pi, &flight, 3));
    }

    #[test]
    fn maintenance_never_seats_a_ce() {
        let flight = slot(FlightType::Maintenance);
        assert!(is_spot_occupied(Role::Ce, &flight, 0));
        assert!(is_spot_occupied(Role::Ce, &flight, 1));
    }

    #[test]
    fn training_odd_index_takes_three_ces() {
        let mut flight = slot(FlightType::Training);
        for _ in 0..2 {
            flight.ces.push(member(Role::Ce));
            assert!(!is_spot_occupied(Role::Ce, &flight, 1));
        }
        flight.ces.push(member(Role::Ce));
        assert!(is_spot_occupied(Role::Ce, &flight, 1));
    }

    #[test]
    fn training_even_index_takes_one_ce() {
        let mut flight = slot(FlightType::Training);
        flight.ces.push(member(Role::Ce));
        assert!(is_spot_occupied(Role::Ce, &flight, 2));
    }

    #[test]
    fn normal_flights_take_one_pi_and_one_ce() {
        let mut flight = slot(FlightType::Normal);
        flight.pis.push(member(Role::Pi));
        flight.ces.push(member(Role::Ce));
        assert!(is_spot_occupied(Role::Pi, &flight, 5));
        assert!(is_spot_occupied(Role::Ce, &flight, 5));
    }
}
