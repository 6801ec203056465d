//! Command implementations for the CLI surface

pub mod add;
pub mod list;
pub mod remove;
pub mod schedule;
pub mod setup;
pub mod ui;
