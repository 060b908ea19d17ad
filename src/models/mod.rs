//! Core data models for report generation

pub mod status;
pub mod timestamp;
pub mod report;

pub use status::*;
pub use timestamp::*;
pub use report::*;
