//! Core library for the Icon Oncology recruitment dashboard: interview
//! scheduling, weighted rubric evaluation, top-contender ranking, and the
//! CSV/print export surfaces behind the command-line tool.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
