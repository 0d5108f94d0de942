//! In-memory LaTeX document store with a placeholder compile endpoint.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
