//! Live exchange rates from a Frankfurter-style API (no key required).

use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::shared::error::{ConvertError, ConvertResult};

const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Built-in symbol list used whenever the currencies endpoint is unreachable
/// or returns garbage.
pub const FALLBACK_CURRENCIES: [&str; 13] = [
    "EUR", "USD", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY", "INR", "TRY", "SAR", "AED", "PKR",
];

/// Payload of `GET /latest?base=..&symbols=..`.
#[derive(Debug, Deserialize)]
struct RateResponse {
    rates: HashMap<String, f64>,
    date: Option<NaiveDate>,
}

/// HTTP client for the currency endpoints.
///
/// Spot rates are fetched fresh on every conversion; the symbol list is
/// meant to be fetched once per session (that caching lives in `Session`).
pub struct CurrencyClient {
    http: Client,
    base_url: String,
}

impl CurrencyClient {
    pub fn new() -> ConvertResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different rate source. Tests use this with an
    /// unroutable address to exercise the failure paths.
    pub fn with_base_url(base_url: impl Into<String>) -> ConvertResult<Self> {
        let http = Client::builder()
            .user_agent("omniconvert/currency")
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Supported currency codes, sorted.
    ///
    /// Any failure degrades silently to [`FALLBACK_CURRENCIES`]; the caller
    /// never sees an error from this path.
    pub async fn symbols(&self) -> Vec<String> {
        match self.fetch_symbols().await {
            Ok(codes) => codes,
            Err(err) => {
                warn!(%err, "currencies endpoint unavailable, using built-in symbol list");
                FALLBACK_CURRENCIES.iter().map(|c| c.to_string()).collect()
            }
        }
    }

    async fn fetch_symbols(&self) -> ConvertResult<Vec<String>> {
        let url = format!("{}/currencies", self.base_url);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ConvertError::Network(format!(
                "currencies endpoint returned {}",
                resp.status()
            )));
        }

        // The endpoint returns an object keyed by ISO code; the values
        // (display names) are irrelevant here.
        let body: HashMap<String, serde_json::Value> = resp.json().await?;
        let mut codes: Vec<String> = body.into_keys().collect();
        codes.sort();
        Ok(codes)
    }

    /// Spot rate of `to` denominated in `from`, plus the rate's as-of date.
    ///
    /// A transport error, non-2xx status or a response without the requested
    /// pair is a hard failure for this single conversion attempt; nothing is
    /// retried.
    pub async fn rate(&self, from: &str, to: &str) -> ConvertResult<(f64, Option<NaiveDate>)> {
        let url = format!("{}/latest", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("base", from), ("symbols", to)])
            .send()
            .await
            .map_err(|e| rate_unavailable(from, to, e.to_string()))?;

        if !resp.status().is_success() {
            return Err(rate_unavailable(
                from,
                to,
                format!("rate endpoint returned {}", resp.status()),
            ));
        }

        let body: RateResponse = resp
            .json()
            .await
            .map_err(|e| rate_unavailable(from, to, format!("invalid response: {e}")))?;

        let rate = body
            .rates
            .get(to)
            .copied()
            .ok_or_else(|| rate_unavailable(from, to, "no rate for pair in response".to_string()))?;

        Ok((rate, body.date))
    }
}

fn rate_unavailable(from: &str, to: &str, reason: String) -> ConvertError {
    ConvertError::RateUnavailable {
        from: from.to_string(),
        to: to.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 127.0.0.1:9 (discard) refuses connections immediately, so these tests
    // stay offline and fast.
    fn unreachable_client() -> CurrencyClient {
        CurrencyClient::with_base_url("http://127.0.0.1:9").unwrap()
    }

    #[tokio::test]
    async fn test_rate_unreachable_source_is_rate_unavailable() {
        let client = unreachable_client();
        let err = client.rate("EUR", "USD").await.unwrap_err();
        assert!(matches!(
            err,
            ConvertError::RateUnavailable { from, to, .. } if from == "EUR" && to == "USD"
        ));
    }

    #[tokio::test]
    async fn test_symbols_fall_back_silently() {
        let client = unreachable_client();
        let codes = client.symbols().await;
        let expected: Vec<String> = FALLBACK_CURRENCIES.iter().map(|c| c.to_string()).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_rate_response_parses_date() {
        let body = r#"{"amount":1.0,"base":"EUR","date":"2026-08-28","rates":{"USD":1.0871}}"#;
        let parsed: RateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.rates["USD"], 1.0871);
        assert_eq!(
            parsed.date,
            Some(NaiveDate::from_ymd_opt(2026, 8, 28).unwrap())
        );
    }

    #[test]
    fn test_rate_response_tolerates_missing_date() {
        let body = r#"{"rates":{"USD":1.1}}"#;
        let parsed: RateResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.date.is_none());
    }
}
