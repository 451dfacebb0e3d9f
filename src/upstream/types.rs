//! Upstream payload shapes and outcome classification.

use serde::{Deserialize, Serialize};

/// The provider's nested quote document.
///
/// Decoding is tolerant: every level defaults, so an absent `price`
/// section decodes to an empty one rather than failing the document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuoteDocument {
    pub price: PriceSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceSection {
    pub long_name: Option<String>,
    pub regular_market_price: PriceField,
    pub currency: Option<String>,
    pub currency_symbol: Option<String>,
    pub exchange_name: Option<String>,
    pub regular_market_time: Option<u64>,
}

/// The raw/formatted pair the provider uses for numeric fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PriceField {
    pub raw: Option<f64>,
    pub fmt: Option<String>,
}

/// Flattened quote returned to callers.
///
/// Only constructible from a document carrying the mandatory raw price;
/// every other field falls back to empty string / zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuote {
    pub name: String,
    pub raw: f64,
    pub fmt: String,
    pub currency: String,
    pub currency_symbol: String,
    pub exchange_name: String,
    pub regular_market_time: u64,
}

impl NormalizedQuote {
    /// Project the nested document into the flat wire shape.
    pub fn from_document(doc: &QuoteDocument) -> Option<Self> {
        let raw = doc.price.regular_market_price.raw?;
        Some(Self {
            name: doc.price.long_name.clone().unwrap_or_default(),
            raw,
            fmt: doc.price.regular_market_price.fmt.clone().unwrap_or_default(),
            currency: doc.price.currency.clone().unwrap_or_default(),
            currency_symbol: doc.price.currency_symbol.clone().unwrap_or_default(),
            exchange_name: doc.price.exchange_name.clone().unwrap_or_default(),
            regular_market_time: doc.price.regular_market_time.unwrap_or(0),
        })
    }
}

/// What a fetch attempt produced at the transport layer, before
/// interpretation.
#[derive(Debug)]
pub enum FetchResult {
    /// The call never completed cleanly: connect error, timeout, or a
    /// non-2xx status.
    Failed { message: String },

    /// Transport-level success.
    Completed {
        /// Declared `Content-Length`, if the provider sent one.
        content_length: Option<u64>,
        body: Vec<u8>,
    },
}

/// Interpreted upstream outcome.
#[derive(Debug)]
pub enum UpstreamOutcome {
    TransportError { message: String },
    EmptyBody,
    MissingPrice,
    Success(NormalizedQuote),
}

/// Classify a fetch result.
///
/// Order matters: transport failure first, then the zero content-length
/// signal (which wins regardless of body bytes), then the mandatory-field
/// check. A body that does not decode is treated as a document with no
/// price.
pub fn classify(result: FetchResult) -> UpstreamOutcome {
    match result {
        FetchResult::Failed { message } => UpstreamOutcome::TransportError { message },
        FetchResult::Completed {
            content_length,
            body,
        } => {
            if content_length == Some(0) {
                return UpstreamOutcome::EmptyBody;
            }
            let doc: QuoteDocument = serde_json::from_slice(&body).unwrap_or_default();
            match NormalizedQuote::from_document(&doc) {
                Some(quote) => UpstreamOutcome::Success(quote),
                None => UpstreamOutcome::MissingPrice,
            }
        }
    }
}
