//! Projects: named, colored groupings that tasks may reference.
//!
//! Task references to projects are not enforced. Deleting a project leaves
//! referencing tasks in place, and views resolve the dangling reference to
//! no project.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
