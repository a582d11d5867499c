//! Blocking GET over libcurl (via the `curl` crate).

use super::charset::decode_body;
use super::{HttpClient, HttpResponse, RequestHeaders, TransportError};
use std::time::Duration;

const MAX_REDIRECTS: u32 = 10;

/// Default transport: one libcurl `Easy` handle per request.
///
/// Runs in the current thread. `Accept-Encoding` is handed to libcurl so the
/// body is decompressed before it reaches the extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlClient;

impl CurlClient {
    pub fn new() -> Self {
        Self
    }
}

impl HttpClient for CurlClient {
    fn get(
        &self,
        url: &str,
        headers: &RequestHeaders,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(MAX_REDIRECTS)?;
        easy.connect_timeout(timeout)?;
        easy.timeout(timeout)?;

        let mut list = curl::easy::List::new();
        for (name, value) in headers.iter() {
            if name.eq_ignore_ascii_case("accept-encoding") {
                easy.accept_encoding(value)?;
            } else {
                list.append(&format!("{}: {}", name.trim(), value.trim()))?;
            }
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer
                .perform()
                .map_err(|e| TransportError::from_curl(e, timeout))?;
        }

        let status = easy.response_code()?;
        let content_type = easy.content_type()?.map(str::to_string);
        tracing::debug!(
            "GET {} -> HTTP {} ({} bytes, {})",
            url,
            status,
            body.len(),
            content_type.as_deref().unwrap_or("no content type")
        );

        Ok(HttpResponse {
            status,
            body: decode_body(&body, content_type.as_deref()),
        })
    }
}
