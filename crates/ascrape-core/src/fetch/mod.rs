//! Page fetching: one GET per call under a fixed header and timeout policy.
//!
//! The transport sits behind [`HttpClient`]; [`CurlClient`] is the default.
//! Failures are logged here with the URL and cause, then returned to the
//! caller, which decides how to degrade.

mod charset;
mod curl_client;
mod error;
mod headers;
mod pace;

pub use charset::decode_body;
pub use curl_client::CurlClient;
pub use error::{is_error_status, FetchCause, FetchError, TransportError};
pub use headers::RequestHeaders;

use crate::config::FetchConfig;
use pace::Pacer;
use std::time::Duration;

/// Status and decoded body of one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: String,
}

/// Transport capability used by the fetcher.
pub trait HttpClient {
    fn get(
        &self,
        url: &str,
        headers: &RequestHeaders,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get(
        &self,
        url: &str,
        headers: &RequestHeaders,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        (**self).get(url, headers, timeout)
    }
}

/// Raw content of a fetched page. Consumed by extraction, not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    pub url: String,
    pub status: u32,
    pub html: String,
}

/// Issues GET requests with the same headers and timeout every time.
#[derive(Debug)]
pub struct Fetcher<C = CurlClient> {
    client: C,
    headers: RequestHeaders,
    timeout: Duration,
    pacer: Pacer,
}

impl Fetcher<CurlClient> {
    pub fn with_curl(config: &FetchConfig) -> Self {
        Self::new(config, CurlClient::new())
    }
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(config: &FetchConfig, client: C) -> Self {
        Self {
            client,
            headers: config.headers(),
            timeout: config.request_timeout,
            pacer: Pacer::new(config.request_delay),
        }
    }

    pub fn headers(&self) -> &RequestHeaders {
        &self.headers
    }

    /// Fetch `url` once. 4xx/5xx statuses and transport errors become `FetchError`.
    pub fn fetch(&self, url: &str) -> Result<RawPage, FetchError> {
        self.pacer.wait();

        let result = match self.client.get(url, &self.headers, self.timeout) {
            Ok(resp) if is_error_status(resp.status) => Err(FetchCause::Status(resp.status)),
            Ok(resp) => Ok(resp),
            Err(e) => Err(FetchCause::Transport(e)),
        };

        match result {
            Ok(resp) => Ok(RawPage {
                url: url.to_string(),
                status: resp.status,
                html: resp.body,
            }),
            Err(cause) => {
                let err = FetchError {
                    url: url.to_string(),
                    cause,
                };
                tracing::error!("{}", err);
                Err(err)
            }
        }
    }
}
