use thiserror::Error;

/// Failure of a single provider lookup.
///
/// A geocoding miss is not an error: `resolve_city` returns `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Request to {provider} failed: {source}")]
    Network {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} request failed with status {status}: {body}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse {provider} JSON: {source}")]
    Parse {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type LookupResult<T> = Result<T, LookupError>;
