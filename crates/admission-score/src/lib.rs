//! Admission scoring for Hungarian higher-education applicants.
//!
//! The [`admission`] module holds the scoring pipeline and everything it is fed from;
//! [`config`], [`telemetry`], and [`error`] carry the service plumbing shared with the API binary.

pub mod admission;
pub mod config;
pub mod error;
pub mod telemetry;
