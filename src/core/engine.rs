//! Category dispatch and the pure conversion rules.

use tracing::debug;

use crate::core::currency::CurrencyClient;
use crate::core::units;
use crate::shared::error::{ConvertError, ConvertResult};
use crate::shared::types::{Category, Conversion};

/// The conversion engine. Owns the HTTP client used by the currency path;
/// every other path is a pure function of the static tables.
pub struct Engine {
    currency: CurrencyClient,
}

impl Engine {
    pub fn new() -> ConvertResult<Self> {
        Ok(Self {
            currency: CurrencyClient::new()?,
        })
    }

    /// Build an engine around a preconfigured currency client (used by tests
    /// and by callers that point at a different rate source).
    pub fn with_currency_client(currency: CurrencyClient) -> Self {
        Self { currency }
    }

    pub fn currency(&self) -> &CurrencyClient {
        &self.currency
    }

    /// Convert `value` from `from` to `to` within `category`.
    ///
    /// Dispatch checks Temperature first, then Currency; everything else
    /// falls through to the generic scale-table path. The three branches are
    /// mutually exclusive and cover every supported category.
    pub async fn convert(
        &self,
        category: Category,
        from: &str,
        to: &str,
        value: f64,
    ) -> ConvertResult<Conversion> {
        match category {
            Category::Temperature => Ok(Conversion {
                value: convert_temperature(value, from, to)?,
                rate_date: None,
            }),
            Category::Currency => {
                let (rate, rate_date) = self.currency.rate(from, to).await?;
                debug!(from, to, rate, "applied spot rate");
                Ok(Conversion {
                    value: value * rate,
                    rate_date,
                })
            }
            _ => Ok(Conversion {
                value: convert_linear(category, value, from, to)?,
                rate_date: None,
            }),
        }
    }
}

/// Ratio conversion through the category's base unit:
/// `value * table[from] / table[to]`.
pub fn convert_linear(category: Category, value: f64, from: &str, to: &str) -> ConvertResult<f64> {
    let base_value = value * units::factor(category, from)?;
    Ok(base_value / units::factor(category, to)?)
}

/// Affine temperature conversion, always via Celsius.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> ConvertResult<f64> {
    let celsius = match from {
        "C" => value,
        "F" => (value - 32.0) * 5.0 / 9.0,
        "K" => value - 273.15,
        _ => {
            return Err(ConvertError::UnknownUnit {
                category: Category::Temperature,
                unit: from.to_string(),
            })
        }
    };

    match to {
        "C" => Ok(celsius),
        "F" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "K" => Ok(celsius + 273.15),
        _ => Err(ConvertError::UnknownUnit {
            category: Category::Temperature,
            unit: to.to_string(),
        }),
    }
}
