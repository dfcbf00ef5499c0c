//! Command-line workflow

pub mod orchestration;
