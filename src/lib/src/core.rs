//! Core functionality for schemadiff
//!

pub mod df;
pub mod diff;
