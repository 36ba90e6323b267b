//! Shared helpers for the packaging pipeline.

pub mod fs;
