use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::ConvertError;

/// Conversion categories offered by the form.
///
/// Temperature and Currency get dedicated conversion rules; every other
/// category converts through a scale table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Mass,
    Length,
    Temperature,
    Time,
    Area,
    Volume,
    Speed,
    Currency,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 8] = [
        Category::Mass,
        Category::Length,
        Category::Temperature,
        Category::Time,
        Category::Area,
        Category::Volume,
        Category::Speed,
        Category::Currency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mass => "Mass",
            Category::Length => "Length",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
            Category::Area => "Area",
            Category::Volume => "Volume",
            Category::Speed => "Speed",
            Category::Currency => "Currency",
        }
    }

    /// Whether conversions in this category are a pure ratio of scale factors.
    pub fn is_linear(&self) -> bool {
        !matches!(self, Category::Temperature | Category::Currency)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mass" => Ok(Category::Mass),
            "Length" => Ok(Category::Length),
            "Temperature" => Ok(Category::Temperature),
            "Time" => Ok(Category::Time),
            "Area" => Ok(Category::Area),
            "Volume" => Ok(Category::Volume),
            "Speed" => Ok(Category::Speed),
            "Currency" => Ok(Category::Currency),
            _ => Err(ConvertError::UnknownCategory(s.to_string())),
        }
    }
}

/// Outcome of a single engine conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: f64,
    /// Reference date of the exchange rate; currency conversions only.
    pub rate_date: Option<NaiveDate>,
}

/// One completed conversion as it appears in the session history.
///
/// `formatted` is the display string at the precision the user chose when
/// converting; `result` is the unformatted value and is what a re-conversion
/// would start from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub category: Category,
    pub value: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
    pub formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_date: Option<NaiveDate>,
}
