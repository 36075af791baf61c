//! Unit tests for the timeline context.

mod assembler_tests;
