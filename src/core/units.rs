//! Immutable scale tables for the linear categories.
//!
//! Each table maps a unit name to how many base units one unit equals; the
//! base unit itself carries factor 1. Temperature and currency never appear
//! here: temperature is affine (nonzero offset) and currency rates are
//! fetched live.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::core::currency::FALLBACK_CURRENCIES;
use crate::shared::error::{ConvertError, ConvertResult};
use crate::shared::types::Category;

// Menu order matches the form's dropdowns; the Lazy maps below must stay in
// sync with these lists (enforced by a test).
const MASS_UNITS: [&str; 5] = ["kg", "g", "mg", "lb", "oz"];
const LENGTH_UNITS: [&str; 8] = ["m", "cm", "mm", "km", "inch", "ft", "yd", "mile"];
const TEMPERATURE_UNITS: [&str; 3] = ["C", "F", "K"];
const TIME_UNITS: [&str; 4] = ["second", "minute", "hour", "day"];
const AREA_UNITS: [&str; 5] = ["m2", "cm2", "km2", "ft2", "acre"];
const VOLUME_UNITS: [&str; 4] = ["liter", "ml", "m3", "gallon"];
const SPEED_UNITS: [&str; 3] = ["m/s", "km/h", "mph"];

// base = gram
static MASS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("kg", 1000.0),
        ("g", 1.0),
        ("mg", 0.001),
        ("lb", 453.592_37),
        ("oz", 28.3495),
    ])
});

// base = meter
static LENGTH: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("km", 1000.0),
        ("m", 1.0),
        ("cm", 0.01),
        ("mm", 0.001),
        ("inch", 0.0254),
        ("ft", 0.3048),
        ("yd", 0.9144),
        ("mile", 1609.344),
    ])
});

// base = second
static TIME: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("second", 1.0),
        ("minute", 60.0),
        ("hour", 3600.0),
        ("day", 86400.0),
    ])
});

// base = square meter
static AREA: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("m2", 1.0),
        ("cm2", 0.0001),
        ("km2", 1_000_000.0),
        ("ft2", 0.092_903),
        ("acre", 4046.86),
    ])
});

// base = liter
static VOLUME: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("liter", 1.0),
        ("ml", 0.001),
        ("m3", 1000.0),
        ("gallon", 3.785_41),
    ])
});

// base = meters per second
static SPEED: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([("m/s", 1.0), ("km/h", 0.277_778), ("mph", 0.447_04)])
});

/// Scale table for a linear category, `None` for Temperature and Currency.
pub(crate) fn scale_table(category: Category) -> Option<&'static HashMap<&'static str, f64>> {
    match category {
        Category::Mass => Some(&MASS),
        Category::Length => Some(&LENGTH),
        Category::Time => Some(&TIME),
        Category::Area => Some(&AREA),
        Category::Volume => Some(&VOLUME),
        Category::Speed => Some(&SPEED),
        Category::Temperature | Category::Currency => None,
    }
}

/// Scale factor of `unit` within a linear category.
///
/// Calling this for Temperature or Currency is a dispatch bug upstream; it
/// fails loudly instead of substituting a default.
pub(crate) fn factor(category: Category, unit: &str) -> ConvertResult<f64> {
    let table = scale_table(category)
        .ok_or_else(|| ConvertError::UnknownCategory(category.to_string()))?;
    table
        .get(unit)
        .copied()
        .ok_or_else(|| ConvertError::UnknownUnit {
            category,
            unit: unit.to_string(),
        })
}

/// Unit names for a category in menu order.
///
/// For Currency this is the built-in fallback list; a live session replaces
/// it with the fetched symbol list.
pub fn category_units(category: Category) -> &'static [&'static str] {
    match category {
        Category::Mass => &MASS_UNITS,
        Category::Length => &LENGTH_UNITS,
        Category::Temperature => &TEMPERATURE_UNITS,
        Category::Time => &TIME_UNITS,
        Category::Area => &AREA_UNITS,
        Category::Volume => &VOLUME_UNITS,
        Category::Speed => &SPEED_UNITS,
        Category::Currency => &FALLBACK_CURRENCIES,
    }
}
