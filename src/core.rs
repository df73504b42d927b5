//! The conversion engine proper: unit tables, category dispatch, the
//! currency client and result formatting.

pub mod currency;
pub mod engine;
pub mod format;
pub mod units;
