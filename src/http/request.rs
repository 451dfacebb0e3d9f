//! Query-parameter validation for the price endpoint.
//!
//! # Responsibilities
//! - Parse the raw `region`/`symbol` query parameters
//! - Check the region against the configured allow-list
//! - Produce a validated request or a typed rejection
//!
//! # Design Decisions
//! - Pure function of the parameters and the region list; no side effects
//! - The region check runs before the symbol check
//! - Rejection display text is the client-facing message

use serde::Deserialize;
use thiserror::Error;

/// Raw query parameters as they arrive.
#[derive(Debug, Default, Deserialize)]
pub struct PriceParams {
    pub region: Option<String>,
    pub symbol: Option<String>,
}

/// A validated price lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    /// Upper-cased region code, a member of the configured set.
    pub region: String,
    /// Instrument symbol, passed through untouched.
    pub symbol: String,
}

/// Rejection reasons for a price lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported region. Please use one of the following regions: {supported}")]
    UnsupportedRegion { supported: String },

    #[error("Please pass instrument symbol")]
    MissingSymbol,
}

/// Validate raw parameters against the configured region list.
///
/// The region is matched case-insensitively and upper-cased in the result;
/// the symbol is not normalized or trimmed.
pub fn validate(params: &PriceParams, supported: &[String]) -> Result<PriceRequest, ValidationError> {
    let region = params.region.as_deref().unwrap_or("").to_uppercase();
    if region.is_empty() || !supported.iter().any(|s| s.eq_ignore_ascii_case(&region)) {
        return Err(ValidationError::UnsupportedRegion {
            supported: supported.join(","),
        });
    }

    let symbol = params.symbol.as_deref().unwrap_or("");
    if symbol.is_empty() {
        return Err(ValidationError::MissingSymbol);
    }

    Ok(PriceRequest {
        region,
        symbol: symbol.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> Vec<String> {
        ["US", "GB", "HK"].iter().map(|r| r.to_string()).collect()
    }

    fn params(region: Option<&str>, symbol: Option<&str>) -> PriceParams {
        PriceParams {
            region: region.map(str::to_string),
            symbol: symbol.map(str::to_string),
        }
    }

    #[test]
    fn accepts_valid_region_and_symbol() {
        let request = validate(&params(Some("US"), Some("AMRN")), &regions()).unwrap();
        assert_eq!(request.region, "US");
        assert_eq!(request.symbol, "AMRN");
    }

    #[test]
    fn upper_cases_lower_case_region() {
        let request = validate(&params(Some("us"), Some("AMRN")), &regions()).unwrap();
        assert_eq!(request.region, "US");
    }

    #[test]
    fn rejects_missing_region_with_configured_list() {
        let err = validate(&params(None, Some("AMRN")), &regions()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedRegion {
                supported: "US,GB,HK".to_string()
            }
        );
        assert!(err.to_string().contains("Unsupported region"));
        assert!(err.to_string().contains("US,GB,HK"));
    }

    #[test]
    fn rejects_unknown_region() {
        let err = validate(&params(Some("ZZ"), Some("AMRN")), &regions()).unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedRegion { .. }));
    }

    #[test]
    fn region_check_runs_before_symbol_check() {
        let err = validate(&params(None, None), &regions()).unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedRegion { .. }));
    }

    #[test]
    fn rejects_missing_or_empty_symbol() {
        let err = validate(&params(Some("US"), None), &regions()).unwrap_err();
        assert_eq!(err, ValidationError::MissingSymbol);
        assert_eq!(err.to_string(), "Please pass instrument symbol");

        let err = validate(&params(Some("US"), Some("")), &regions()).unwrap_err();
        assert_eq!(err, ValidationError::MissingSymbol);
    }

    #[test]
    fn symbol_is_not_trimmed_or_cased() {
        let request = validate(&params(Some("US"), Some(" amrn ")), &regions()).unwrap();
        assert_eq!(request.symbol, " amrn ");
    }
}
