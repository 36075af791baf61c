//! Application services for project management.

pub mod generator;
mod service;

pub use service::{ProjectService, ProjectServiceError, ProjectServiceResult};
