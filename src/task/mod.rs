//! Task management for dayplan.
//!
//! Tasks live in the backlog until they are given a start time, at which
//! point they belong to exactly one local day. This module owns task
//! identity, field-level partial updates, atomic flag toggles, and the two
//! task orderings. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
