use std::collections::{HashMap, HashSet};

use super::types::{CrewAvailability, Role, ALL_ROLES};

/// Threshold for the per-role rotation reset. Carried over from the source
/// system together with its comparison direction (see DESIGN.md).
const ROTATION_RESET_RATIO: f64 = 0.9;

/// Per-run fairness bookkeeping for the allocation engine: who has already
/// flown today, and who has flown in the current rotation window per role.
///
/// All state lives in this value and is discarded with it; a re-run starts
/// from a fresh tracker.
#[derive(Debug)]
pub struct RotationTracker {
    flown_today: HashSet<String>,
    window: HashMap<Role, HashSet<String>>,
    roster_size: HashMap<Role, usize>,
}

impl RotationTracker {
    /// Builds a tracker for one run, capturing per-role roster sizes from
    /// the crew list used by that run.
    pub fn new(crew: &[CrewAvailability]) -> Self {
        let mut roster_size: HashMap<Role, usize> = HashMap::new();
        for role in ALL_ROLES {
            roster_size.insert(role, 0);
        }
        for member in crew {
            *roster_size.entry(member.role).or_insert(0) += 1;
        }

        RotationTracker {
            flown_today: HashSet::new(),
            window: ALL_ROLES.iter().map(|&r| (r, HashSet::new())).collect(),
            roster_size,
        }
    }

    /// Clears the per-day set. Called whenever the slot date advances.
    pub fn start_new_day(&mut self) {
        self.flown_today.clear();
    }

    /// Whether `name` already flew on the date currently being processed.
    pub fn has_flown_today(&self, name: &str) -> bool {
        self.flown_today.contains(name)
    }

    /// Whether `name` is blocked by their role's current rotation window.
    pub fn in_rotation_window(&self, role: Role, name: &str) -> bool {
        self.window
            .get(&role)
            .map(|set| set.contains(name))
            .unwrap_or(false)
    }

    /// Records a successful assignment and runs the rotation reset checks.
    ///
    /// Two literal reset rules from the source system:
    /// 1. if the summed size of the per-role window sets equals the number
    ///    of tracked roles, every window is cleared;
    /// 2. per role, if 90% of the roster size is >= the window set size,
    ///    that role's window is cleared. With this comparison direction the
    ///    window survives only once it holds more than 90% of the roster.
    pub fn record_assignment(&mut self, role: Role, name: &str) {
        self.flown_today.insert(name.to_string());
        if let Some(set) = self.window.get_mut(&role) {
            set.insert(name.to_string());
        }

        let flown_this_window: usize = self.window.values().map(HashSet::len).sum();
        if flown_this_window == self.window.len() {
            for set in self.window.values_mut() {
                set.clear();
            }
        }

        for checked in ALL_ROLES {
            let roster = self.roster_size.get(&checked).copied().unwrap_or(0);
            let window_len = self
                .window
                .get(&checked)
                .map(HashSet::len)
                .unwrap_or(0);
            if ROTATION_RESET_RATIO * roster as f64 >= window_len as f64 {
                if let Some(set) = self.window.get_mut(&checked) {
                    set.clear();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap as Map;

    fn crew_member(first: &str, last: &str, role: Role) -> CrewAvailability {
        CrewAvailability {
            first_name: first.to_string(),
            last_name: last.to_string(),
            rank: "SGT".to_string(),
            role,
            availability: Map::new(),
        }
    }

    fn single_member_roster() -> Vec<CrewAvailability> {
        vec![
            crew_member("Alice", "Smith", Role::Pc),
            crew_member("Bob", "Jones", Role::Pi),
            crew_member("Cara", "Lee", Role::Fe),
            crew_member("Dan", "Wu", Role::Ce),
        ]
    }

    #[test]
    fn daily_set_blocks_until_cleared() {
        let mut tracker = RotationTracker::new(&single_member_roster());
        tracker.record_assignment(Role::Pc, "Alice Smith");
        assert!(tracker.has_flown_today("Alice Smith"));
        tracker.start_new_day();
        assert!(!tracker.has_flown_today("Alice Smith"));
    }

    #[test]
    fn single_member_roster_stays_in_window() {
        // Roster of 1: 0.9 * 1 < 1, so the per-role reset does not fire and
        // the member stays blocked for their role.
        let mut tracker = RotationTracker::new(&single_member_roster());
        tracker.record_assignment(Role::Pc, "Alice Smith");
        assert!(tracker.in_rotation_window(Role::Pc, "Alice Smith"));
    }

    #[test]
    fn large_roster_window_clears_every_assignment() {
        // Roster of 3: 0.9 * 3 >= 1 after one assignment, so the window is
        // wiped immediately and no one stays rotation-blocked.
        let crew = vec![
            crew_member("Dan", "Wu", Role::Ce),
            crew_member("Eve", "Park", Role::Ce),
            crew_member("Finn", "Cole", Role::Ce),
        ];
        let mut tracker = RotationTracker::new(&crew);
        tracker.record_assignment(Role::Ce, "Dan Wu");
        assert!(!tracker.in_rotation_window(Role::Ce, "Dan Wu"));
    }

    #[test]
    fn headcount_matching_role_count_clears_every_window() {
        let mut tracker = RotationTracker::new(&single_member_roster());
        tracker.record_assignment(Role::Pc, "Alice Smith");
        tracker.record_assignment(Role::Pi, "Bob Jones");
        tracker.record_assignment(Role::Fe, "Cara Lee");
        assert!(tracker.in_rotation_window(Role::Pc, "Alice Smith"));

        // Fourth distinct assignee brings the summed window size to the role
        // count (4), which clears all four windows.
        tracker.record_assignment(Role::Ce, "Dan Wu");
        assert!(!tracker.in_rotation_window(Role::Pc, "Alice Smith"));
        assert!(!tracker.in_rotation_window(Role::Pi, "Bob Jones"));
        assert!(!tracker.in_rotation_window(Role::Fe, "Cara Lee"));
        assert!(!tracker.in_rotation_window(Role::Ce, "Dan Wu"));
    }
}
