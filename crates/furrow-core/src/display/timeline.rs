//! Markdown outline of an assembled timeline.
//!
//! Group rows become headings, leaf rows list their tasks as bullets:
//!
//! ```text
//! # By Plant Type
//!
//! ## Fruit
//!
//! ### Tomato
//!
//! - Seeding: 2024-03-01 to 2024-03-31
//! - Seed tomatoes (seeding, done): 2024-03-01
//! ```

use std::fmt;

use super::datetime::DayDate;
use crate::models::{Timeline, TimelineRow, TimelineTask};

/// Deepest markdown heading level used for rows.
const MAX_HEADING_LEVEL: usize = 6;

impl fmt::Display for TimelineTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let is_log = self
            .meta
            .get("entity_type")
            .and_then(|value| value.as_str())
            == Some("log");

        if is_log {
            let bundle = self
                .meta
                .get("entity_bundle")
                .and_then(|value| value.as_str())
                .unwrap_or("log");
            let status = self
                .meta
                .get("log_status")
                .and_then(|value| value.as_str())
                .unwrap_or("pending");
            return write!(
                f,
                "{} ({bundle}, {status}): {}",
                self.label,
                DayDate(self.start)
            );
        }

        match self.end {
            Some(end) => write!(f, "{}: {} to {}", self.label, DayDate(self.start), DayDate(end)),
            None => write!(f, "{}: {} onward", self.label, DayDate(self.start)),
        }
    }
}

fn fmt_row(row: &TimelineRow, level: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{} {}", "#".repeat(level.min(MAX_HEADING_LEVEL)), row.label)?;
    writeln!(f)?;

    if !row.tasks.is_empty() {
        for task in &row.tasks {
            writeln!(f, "- {task}")?;
        }
        writeln!(f)?;
    } else if row.children.is_empty() {
        writeln!(f, "No scheduled stages.")?;
        writeln!(f)?;
    }

    for child in &row.children {
        fmt_row(child, level + 1, f)?;
    }
    Ok(())
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.group_by.heading())?;
        writeln!(f)?;

        if self.rows.is_empty() {
            writeln!(f, "No plantings in this plan.")?;
            return Ok(());
        }

        for row in &self.rows {
            fmt_row(row, 2, f)?;
        }
        Ok(())
    }
}
