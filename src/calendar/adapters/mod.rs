//! Adapter implementations for calendar access.

pub mod google;
pub mod memory;
pub mod token_cache;
