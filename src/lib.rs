//! Unit-conversion engine.
//!
//! Supports eight categories: Mass, Length, Temperature, Time, Area, Volume,
//! Speed and Currency. The first six convert through immutable scale tables,
//! temperature uses the affine via-Celsius formulas, and currency fetches a
//! live spot rate per conversion. A [`Session`] owns the conversion history
//! and the once-per-session currency symbol cache; the surrounding form layer
//! is expected to drive it and render the results.

pub mod core;
pub mod session;
pub mod shared;

pub use crate::core::currency::{CurrencyClient, FALLBACK_CURRENCIES};
pub use crate::core::engine::Engine;
pub use crate::core::format::{format_result, DEFAULT_PRECISION, MAX_PRECISION};
pub use crate::session::Session;
pub use crate::shared::error::{ConvertError, ConvertResult};
pub use crate::shared::types::{Category, Conversion, ConversionRecord};
