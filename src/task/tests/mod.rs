//! Unit tests for the task context.

mod form_tests;
mod sync_service_tests;
