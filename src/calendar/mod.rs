//! Calendar events from an external provider.
//!
//! Events are read-only and fetched on demand for a time range. The
//! [`ports::CalendarProvider`] port hides the provider; the Google adapter
//! authenticates through a [`ports::TokenSource`], normally wrapped in
//! [`adapters::token_cache::CachedTokenSource`].

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
