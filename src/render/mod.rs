//! Rendering module for writing profiles and reports.

mod json;

pub use json::{to_json, JsonFormat};
