//! Unit tests for the project context.

mod domain_tests;
