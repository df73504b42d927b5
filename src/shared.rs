//! Error taxonomy and data transfer types shared across the crate.

pub mod error;
pub mod types;
