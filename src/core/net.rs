// src/core/net.rs

// HTTPS GET with the credential pair attached to every request (reqwest, blocking).

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::config::consts::{HEADER_API_HOST, HEADER_API_KEY, USER_AGENT};
use crate::config::options::ApiConfig;
use crate::error::ConfigError;

/// Status and body as received; interpretation is the caller's job.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub fn build_client(cfg: &ApiConfig) -> Result<Client, ConfigError> {
    let mut key = HeaderValue::from_str(cfg.api_key())
        .map_err(|_| ConfigError::InvalidHeader(HEADER_API_KEY))?;
    key.set_sensitive(true);
    let host = HeaderValue::from_str(&cfg.api_host)
        .map_err(|_| ConfigError::InvalidHeader(HEADER_API_HOST))?;

    let mut headers = HeaderMap::new();
    headers.insert(HEADER_API_KEY, key);
    headers.insert(HEADER_API_HOST, host);

    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(cfg.timeout)
        .default_headers(headers)
        .build()
        .map_err(|e| ConfigError::Client(e.to_string()))
}

/// One round trip. Errors here mean no usable HTTP response arrived at all.
pub fn http_get(
    client: &Client,
    url: &str,
    params: &[(&'static str, String)],
) -> Result<RawResponse, reqwest::Error> {
    let resp = client.get(url).query(params).send()?;
    let status = resp.status().as_u16();
    let body = resp.text()?;
    Ok(RawResponse { status, body })
}
