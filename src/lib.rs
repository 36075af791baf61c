//! Dayplan: a personal task backlog and day timeline planner.
//!
//! Tasks sit in a backlog until they are given a start time. Scheduled
//! tasks are placed onto fixed-length slots of a visible day window and
//! merged with events read from an external calendar into one ordered
//! timeline, each entry annotated with its project.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, `PostgreSQL`,
//!   HTTP)
//! - **Services**: Orchestration over injected ports
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, partial updates, and orderings
//! - [`project`]: Projects, palettes, and the project index
//! - [`calendar`]: Calendar events and provider adapters
//! - [`timeline`]: Slot arithmetic and timeline assembly
//! - [`identity`]: Identifier generation
//! - [`form`]: Submitted form values
//! - [`config`]: TOML configuration
//! - [`telemetry`]: Tracing setup

pub mod calendar;
pub mod config;
pub mod form;
pub mod identity;
pub mod project;
pub mod task;
pub mod telemetry;
pub mod timeline;

#[cfg(test)]
mod test_support;
