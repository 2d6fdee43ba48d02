//! HTTP prober issuing header, status and parameter probes.

use crate::prober::headers::{check_security_headers, collect_headers, header_value, UNKNOWN};
use crate::prober::params::{build_query_url, decode_body, preview};
use crate::prober::status::interpret_status;
use crate::types::{
    HeaderResult, HttpConfig, ParamResult, Params, ProbeError, Result, StatusResult,
};
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, trace};

/// Issues probes against target URLs.
///
/// Clients are built once and reused for every probe.
pub struct Prober {
    client: Client,
    /// HEAD checks report redirects instead of following them.
    status_client: Client,
    config: HttpConfig,
}

impl Prober {
    /// Create a new prober.
    pub fn new(config: HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .no_proxy()
            .build()?;

        let status_client = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::none())
            .no_proxy()
            .build()?;

        Ok(Self {
            client,
            status_client,
            config,
        })
    }

    /// GET the URL and analyse its response headers.
    pub async fn fetch_headers(&self, url: &str) -> std::result::Result<HeaderResult, ProbeError> {
        debug!("GET {} (headers)", url);

        let response = self
            .client
            .get(url)
            .timeout(self.config.probe_timeout)
            .send()
            .await
            .map_err(request_error)?;

        let headers = response.headers();
        let result = HeaderResult {
            url: url.to_string(),
            status_code: response.status().as_u16(),
            headers: collect_headers(headers),
            server: header_value(headers, "Server").unwrap_or_else(|| UNKNOWN.to_string()),
            security_headers: check_security_headers(headers),
        };

        trace!("{} returned {} headers", url, result.headers.len());
        Ok(result)
    }

    /// HEAD the URL and classify its status code.
    pub async fn check_status(&self, url: &str) -> std::result::Result<StatusResult, ProbeError> {
        debug!("HEAD {} (status)", url);

        let start = Instant::now();
        let response = self
            .status_client
            .head(url)
            .timeout(self.config.probe_timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    debug!("{} unreachable: {}", url, e);
                    ProbeError::Unreachable {
                        message: e.to_string(),
                    }
                } else {
                    request_error(e)
                }
            })?;
        let response_time = start.elapsed().as_secs_f64();

        let status_code = response.status().as_u16();
        Ok(StatusResult {
            url: url.to_string(),
            status_code,
            status_message: interpret_status(status_code).to_string(),
            response_time,
        })
    }

    /// GET the URL with the parameters appended as a query string.
    pub async fn test_parameters(
        &self,
        url: &str,
        params: &Params,
    ) -> std::result::Result<ParamResult, ProbeError> {
        let target = build_query_url(url, params).map_err(|e| ProbeError::Request {
            message: e.to_string(),
        })?;
        debug!("GET {} ({} parameters)", target, params.len());

        let response = self
            .client
            .get(target)
            .timeout(self.config.params_timeout)
            .send()
            .await
            .map_err(request_error)?;

        let final_url = response.url().to_string();
        let status_code = response.status().as_u16();
        let content_type = header_value(response.headers(), "Content-Type");

        let body = response.bytes().await.map_err(request_error)?;
        let text = decode_body(&body, content_type.as_deref());

        Ok(ParamResult {
            url: final_url,
            status_code,
            content_length: body.len(),
            content_type: content_type.unwrap_or_else(|| UNKNOWN.to_string()),
            preview: preview(&text),
        })
    }
}

fn request_error(e: reqwest::Error) -> ProbeError {
    debug!("Request failed: {}", e);
    ProbeError::Request {
        message: e.to_string(),
    }
}
