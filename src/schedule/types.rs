use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Crew role categories. Roster section headers map onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Pc,
    Pi,
    Fe,
    Ce,
}

/// All roles, in the order the fairness tracker walks them.
pub const ALL_ROLES: [Role; 4] = [Role::Pc, Role::Pi, Role::Fe, Role::Ce];

impl Role {
    /// Parses a roster section header like "PCs" or "PI" (case-insensitive,
    /// trailing 's' stripped) into a role.
    pub fn from_section_header(header: &str) -> Option<Role> {
        let trimmed = header.trim().trim_end_matches(|c| c == 's' || c == 'S');
        match trimmed.to_uppercase().as_str() {
            "PC" => Some(Role::Pc),
            "PI" => Some(Role::Pi),
            "FE" => Some(Role::Fe),
            "CE" => Some(Role::Ce),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Pc => "PC",
            Role::Pi => "PI",
            Role::Fe => "FE",
            Role::Ce => "CE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flight categories. Each day holds 1 maintenance, 3 training and a
/// configured number of normal flights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlightType {
    Maintenance,
    Training,
    Normal,
}

impl FlightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightType::Maintenance => "MAINTENANCE",
            FlightType::Training => "TRAINING",
            FlightType::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for FlightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A crew member as written into a flight slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub first_name: String,
    pub last_name: String,
    pub rank: String,
    pub role: Role,
}

/// A crew member's weekly availability as read from the roster.
/// Availability is keyed by canonical date string ("Jan 02 06"); a missing
/// entry means unavailable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewAvailability {
    pub first_name: String,
    pub last_name: String,
    pub rank: String,
    pub role: Role,
    pub availability: HashMap<String, bool>,
}

impl CrewAvailability {
    /// Display name used as the identity key in fairness bookkeeping.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The record attached to a slot on assignment.
    pub fn to_member(&self) -> CrewMember {
        CrewMember {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            rank: self.rank.clone(),
            role: self.role,
        }
    }
}

/// One bookable flight requiring role-specific staffing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSlot {
    pub flight_type: FlightType,
    /// Canonical date string, e.g. "Jun 01 26".
    pub date: String,
    /// Time-of-day label, e.g. "09:00".
    pub time: String,
    pub pc: Option<CrewMember>,
    pub pis: Vec<CrewMember>,
    pub fe: Option<CrewMember>,
    pub ces: Vec<CrewMember>,
}

impl FlightSlot {
    pub fn new(flight_type: FlightType, date: String, time: String) -> Self {
        FlightSlot {
            flight_type,
            date,
            time,
            pc: None,
            pis: Vec::new(),
            fe: None,
            ces: Vec::new(),
        }
    }

    /// All crew currently attached to this slot, in role order.
    pub fn assigned_crew(&self) -> Vec<&CrewMember> {
        let mut crew = Vec::new();
        if let Some(pc) = &self.pc {
            crew.push(pc);
        }
        crew.extend(self.pis.iter());
        if let Some(fe) = &self.fe {
            crew.push(fe);
        }
        crew.extend(self.ces.iter());
        crew
    }
}

/// Full week of flights, in generation order. Order is significant: the
/// allocation engine's fairness semantics depend on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub flights: Vec<FlightSlot>,
}
