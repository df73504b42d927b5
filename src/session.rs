//! Session-scoped state: the conversion history and the cached currency
//! symbol list, owned explicitly instead of living in process-wide globals.

use tracing::debug;

use crate::core::engine::Engine;
use crate::core::format::format_result;
use crate::shared::error::ConvertResult;
use crate::shared::types::{Category, ConversionRecord};

const CSV_HEADER: &str = "Category,Value,From,To,Result,Result (formatted)";

/// One user session. Holds the engine, an append-only history of successful
/// conversions, and the currency symbol list fetched at most once.
///
/// Nothing here survives the session; there is no persistence.
pub struct Session {
    engine: Engine,
    history: Vec<ConversionRecord>,
    symbols: Option<Vec<String>>,
}

impl Session {
    pub fn new() -> ConvertResult<Self> {
        Ok(Self::with_engine(Engine::new()?))
    }

    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            history: Vec::new(),
            symbols: None,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Run one conversion and append it to the history on success.
    ///
    /// A failed conversion returns the error and leaves the history exactly
    /// as it was. Same source and target unit is a valid no-op conversion.
    pub async fn convert(
        &mut self,
        category: Category,
        from: &str,
        to: &str,
        value: f64,
        precision: u8,
    ) -> ConvertResult<ConversionRecord> {
        let outcome = self.engine.convert(category, from, to, value).await?;
        let record = ConversionRecord {
            category,
            value,
            from: from.to_string(),
            to: to.to_string(),
            result: outcome.value,
            formatted: format_result(outcome.value, precision),
            rate_date: outcome.rate_date,
        };
        self.history.push(record.clone());
        debug!(category = %category, from, to, "conversion recorded");
        Ok(record)
    }

    /// Currency codes for the unit menus; fetched on first use, then served
    /// from the session cache. Falls back to the built-in list internally,
    /// so this never fails.
    pub async fn currency_symbols(&mut self) -> &[String] {
        if self.symbols.is_none() {
            self.symbols = Some(self.engine.currency().symbols().await);
        }
        self.symbols.as_deref().unwrap_or(&[])
    }

    pub fn history(&self) -> &[ConversionRecord] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// History as CSV, one row per conversion, matching the on-screen table
    /// column set.
    pub fn export_csv(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for record in &self.history {
            let row = [
                csv_field(record.category.as_str()),
                record.value.to_string(),
                csv_field(&record.from),
                csv_field(&record.to),
                record.result.to_string(),
                csv_field(&record.formatted),
            ];
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }
}

fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::{CurrencyClient, FALLBACK_CURRENCIES};
    use crate::shared::error::ConvertError;

    fn offline_session() -> Session {
        let client = CurrencyClient::with_base_url("http://127.0.0.1:9").unwrap();
        Session::with_engine(Engine::with_currency_client(client))
    }

    #[tokio::test]
    async fn test_successful_conversion_is_recorded() {
        let mut session = offline_session();
        let record = session
            .convert(Category::Mass, "kg", "g", 1.0, 4)
            .await
            .unwrap();
        assert_eq!(record.result, 1000.0);
        assert_eq!(record.formatted, "1000.0000");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0], record);
    }

    #[tokio::test]
    async fn test_failed_conversion_leaves_history_untouched() {
        let mut session = offline_session();
        session
            .convert(Category::Length, "m", "km", 500.0, 2)
            .await
            .unwrap();

        let err = session
            .convert(Category::Currency, "EUR", "USD", 10.0, 2)
            .await
            .unwrap_err();
        assert!(matches!(err, ConvertError::RateUnavailable { .. }));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].category, Category::Length);
    }

    #[tokio::test]
    async fn test_clear_history() {
        let mut session = offline_session();
        session
            .convert(Category::Time, "minute", "second", 2.0, 0)
            .await
            .unwrap();
        assert_eq!(session.history().len(), 1);
        session.clear_history();
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_symbols_cached_after_first_fetch() {
        let mut session = offline_session();
        let first: Vec<String> = session.currency_symbols().await.to_vec();
        let expected: Vec<String> = FALLBACK_CURRENCIES.iter().map(|c| c.to_string()).collect();
        assert_eq!(first, expected);

        // Second call serves the cache; still the same list.
        let second: Vec<String> = session.currency_symbols().await.to_vec();
        assert_eq!(second, expected);
    }

    #[tokio::test]
    async fn test_export_csv_shape() {
        let mut session = offline_session();
        session
            .convert(Category::Mass, "kg", "g", 1.0, 2)
            .await
            .unwrap();
        session
            .convert(Category::Temperature, "C", "F", 0.0, 0)
            .await
            .unwrap();

        let csv = session.export_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Category,Value,From,To,Result,Result (formatted)");
        assert_eq!(lines[1], "Mass,1,kg,g,1000,1000.00");
        assert_eq!(lines[2], "Temperature,0,C,F,32,32");
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("km/h"), "km/h");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[tokio::test]
    async fn test_export_csv_empty_history_is_header_only() {
        let session = offline_session();
        assert_eq!(session.export_csv(), "Category,Value,From,To,Result,Result (formatted)\n");
    }
}
