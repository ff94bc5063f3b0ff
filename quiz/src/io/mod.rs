//! Side-effecting collaborators: configuration, problem loading, report writing.

pub mod config;
pub mod problems;
pub mod report;
