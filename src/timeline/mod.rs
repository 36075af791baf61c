//! The day timeline.
//!
//! Converts start times and durations into slot positions on a visible
//! window of the day, and merges scheduled tasks with calendar events into
//! one chronologically ordered, project-annotated view.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
