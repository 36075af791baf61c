//! Unit tests for the calendar context.

mod memory_tests;
mod token_cache_tests;
