//! Report rendering

pub mod template;
pub mod generator;

pub use generator::render;
pub use template::{template, GENERATED_PLACEHOLDER, TEST_STATUS_PLACEHOLDER};
