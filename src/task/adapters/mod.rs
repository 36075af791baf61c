//! Adapter implementations for task ports.

pub mod google;
pub mod memory;
pub mod postgres;
