//! Markdown display for plans, records and timelines.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and whole timelines go through the newtype wrappers here so
//! that every front end (terminal, MCP) produces the same markdown.
//!
//! ```rust
//! use furrow_core::display::{DayDate, OperationStatus};
//!
//! assert_eq!(DayDate(86_400).to_string(), "1970-01-02");
//!
//! let status = OperationStatus::success("Recorded log 3".to_string());
//! assert!(status.to_string().starts_with("Success:"));
//! ```
//!
//! - [`collections`]: plan lists and the planting summary table
//! - [`timeline`]: nested timeline outline and task lines
//! - [`datetime`]: timestamp and epoch-day formatting
//! - [`status`]: operation confirmations

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;
pub mod timeline;

pub use collections::{PlantingSummaries, Plans};
pub use datetime::{DayDate, LocalDateTime};
pub use status::OperationStatus;
