//! Port contracts for calendar access.

mod provider;

#[cfg(test)]
pub use provider::{MockCalendarProvider, MockTokenSource};
pub use provider::{
    CalendarProvider, CalendarProviderError, CalendarProviderResult, TokenSource,
    TokenSourceError,
};
