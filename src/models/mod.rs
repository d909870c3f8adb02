//! CLI-side models

pub mod display;
