//! Trajectory Studio
//!
//! Page shell around `trajectory_core`: CLI, configuration, the egui window
//! that draws the charts, and a headless summary mode.

pub mod cli;
pub mod cli_mode;
pub mod config;
pub mod gui;
pub mod telemetry;
