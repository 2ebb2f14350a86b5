// src/fetch.rs
//! Remote Data Fetcher.
//!
//! `fetch(query) -> payload | TransportFailure`. Stateless: no caching and no
//! retries here; the session decides when a call is needed. Parameter values
//! are passed through as given and whatever the service answers is surfaced.

use std::time::Instant;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::{
    config::options::ApiConfig,
    core::net,
    error::{ConfigError, TransportFailure, TransportReason},
    query::{Endpoint, ResourceQuery},
};

pub trait Fetcher {
    fn fetch(&self, query: &ResourceQuery) -> Result<Value, TransportFailure>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, query: &ResourceQuery) -> Result<Value, TransportFailure> {
        (**self).fetch(query)
    }
}

pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(cfg: &ApiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: net::build_client(cfg)?,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, query: &ResourceQuery) -> Result<Value, TransportFailure> {
        let kind = query.kind();
        let endpoint = query.endpoint();
        let url = self.url_for(&endpoint);
        debug!("Fetch: GET {} params={:?}", url, endpoint.params);

        let t = Instant::now();
        let raw = net::http_get(&self.client, &url, &endpoint.params).map_err(|e| {
            error!("Fetch: {kind} unreachable: {e}");
            TransportFailure {
                kind,
                reason: TransportReason::Unreachable,
                status: e.status().map(|s| s.as_u16()),
                raw_body: s!(),
                detail: e.to_string(),
            }
        })?;

        if !raw.is_success() {
            error!("Fetch: {kind} HTTP {} ({} bytes)", raw.status, raw.body.len());
            return Err(TransportFailure {
                kind,
                reason: TransportReason::Status,
                status: Some(raw.status),
                detail: format!("HTTP {}", raw.status),
                raw_body: raw.body,
            });
        }

        match serde_json::from_str::<Value>(&raw.body) {
            Ok(value) => {
                debug!("Fetch: {kind} OK in {:?} ({} bytes)", t.elapsed(), raw.body.len());
                Ok(value)
            }
            Err(e) => {
                error!("Fetch: {kind} body is not JSON: {e}");
                Err(TransportFailure {
                    kind,
                    reason: TransportReason::UnparseableBody,
                    status: Some(raw.status),
                    detail: e.to_string(),
                    raw_body: raw.body,
                })
            }
        }
    }
}
