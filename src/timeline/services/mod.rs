//! Timeline assembly and the day query service.

mod assembler;
mod timeline_service;

pub use assembler::assemble_timeline;
pub use timeline_service::{TimelineError, TimelineResult, TimelineService};
