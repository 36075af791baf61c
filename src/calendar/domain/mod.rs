//! Domain model for externally sourced calendar events.

mod error;
mod event;
mod ids;
mod token;

pub use error::CalendarDomainError;
pub use event::Event;
pub use ids::EventId;
pub use token::AccessToken;
