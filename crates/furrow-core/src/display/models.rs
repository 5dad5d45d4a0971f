//! Display implementations for record models.

use std::fmt;

use super::datetime::{DayDate, LocalDateTime};
use crate::models::{LogEntry, Location, MovementEvent, Plan, Plant, PlantingRecord};

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (plant {})", self.name, self.id)?;
        if !self.plant_types.is_empty() {
            let names: Vec<&str> = self.plant_types.iter().map(|t| t.name.as_str()).collect();
            write!(f, " [{}]", names.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (location {})", self.name, self.id)
    }
}

impl fmt::Display for PlantingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "planting {} of plant {}", self.id, self.plant_id)?;
        if let Some(date) = self.seeding_date {
            write!(f, ", seeded {}", DayDate(date))?;
        }
        Ok(())
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} log {} \"{}\" on {} ({})",
            self.log_type,
            self.id,
            self.name,
            DayDate(self.timestamp),
            self.status
        )
    }
}

impl fmt::Display for MovementEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locations: Vec<String> = self.locations.iter().map(u64::to_string).collect();
        write!(
            f,
            "movement {} of plant {} to location(s) {} on {}",
            self.id,
            self.plant_id,
            locations.join(", "),
            DayDate(self.timestamp)
        )
    }
}
