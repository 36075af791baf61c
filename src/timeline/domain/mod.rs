//! Domain model for the day timeline: slots, local days, and entries.

mod entry;
mod error;
mod slot;
mod zone;

pub use entry::{Timeline, TimelineEntry, TimelineItem};
pub use error::{DayWindowError, TimelineConfigError};
pub use slot::{TimelineConfig, TimelinePosition};
pub use zone::{DayWindow, DayZone};
