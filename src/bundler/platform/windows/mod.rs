//! Windows installer packaging.

pub mod inno;

pub use inno::bundle_project;
