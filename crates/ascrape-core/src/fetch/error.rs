//! Transport and fetch failures.

use std::time::Duration;
use thiserror::Error;

/// Failure reported by an `HttpClient` before any status code was seen.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The configured timeout expired (connect or transfer).
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// Any other libcurl failure (DNS, refused connection, TLS, bad URL, ...).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Failure from a non-curl transport.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Map a curl error, surfacing timeouts with the budget that expired.
    pub fn from_curl(e: curl::Error, timeout: Duration) -> Self {
        if e.is_operation_timedout() {
            TransportError::Timeout(timeout)
        } else {
            TransportError::Curl(e)
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout(_))
    }
}

/// Why a fetch produced no page.
#[derive(Debug, Error)]
pub enum FetchCause {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Server answered with a 4xx or 5xx status.
    #[error("HTTP {0}")]
    Status(u32),
}

/// A fetch that failed, with the URL it was for.
#[derive(Debug, Error)]
#[error("Error fetching {url}: {cause}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub cause: FetchCause,
}

/// True for statuses the fetcher treats as failure (client or server error).
pub fn is_error_status(code: u32) -> bool {
    (400..600).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_and_server_errors_fail() {
        assert!(is_error_status(400));
        assert!(is_error_status(404));
        assert!(is_error_status(503));
        assert!(is_error_status(599));
    }

    #[test]
    fn success_and_redirects_pass() {
        assert!(!is_error_status(200));
        assert!(!is_error_status(204));
        assert!(!is_error_status(304));
        assert!(!is_error_status(600));
    }

    #[test]
    fn fetch_error_display_names_url_and_cause() {
        let err = FetchError {
            url: "https://example.com/a".to_string(),
            cause: FetchCause::Status(404),
        };
        assert_eq!(err.to_string(), "Error fetching https://example.com/a: HTTP 404");
    }

    #[test]
    fn curl_timeout_is_classified() {
        let e = curl::Error::new(28); // CURLE_OPERATION_TIMEDOUT
        let t = TransportError::from_curl(e, Duration::from_secs(15));
        assert!(t.is_timeout());
        assert_eq!(t.to_string(), "request timed out after 15s");
    }

    #[test]
    fn other_curl_errors_pass_through() {
        let e = curl::Error::new(7); // CURLE_COULDNT_CONNECT
        let t = TransportError::from_curl(e, Duration::from_secs(15));
        assert!(matches!(t, TransportError::Curl(ref c) if c.is_couldnt_connect()));
    }
}
