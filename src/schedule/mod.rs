pub mod engine;
pub mod error;
pub mod fairness;
pub mod occupancy;
pub mod slots;
pub mod types;

pub use engine::allocate_flights;
pub use error::ScheduleError;
pub use slots::{generate_week, week_dates};
pub use types::{CrewAvailability, CrewMember, FlightSlot, FlightType, Role, WeekSchedule};
