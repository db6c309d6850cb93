//! HTTP client for the stats endpoint.

use std::future::Future;
use std::path::Path;

use anyhow::Context;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::types::Snapshot;

pub const STATS_PATH: &str = "/api/stats";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    Status(StatusCode),
    #[error("invalid snapshot payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Decode,
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Transport(_) | FetchError::Status(_) => FailureKind::Transport,
            FetchError::Decode(_) => FailureKind::Decode,
        }
    }
}

/// Anything that can produce one snapshot per call.
pub trait SnapshotSource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<Snapshot, FetchError>> + Send;
}

/// Turns `host:port`, `http://host:port` or a full endpoint URL into the stats URL.
pub fn stats_url(base: &str) -> anyhow::Result<Url> {
    let base = base.trim();
    let with_scheme = if base.contains("://") {
        base.to_string()
    } else {
        format!("http://{base}")
    };
    let mut url = Url::parse(&with_scheme).with_context(|| format!("invalid URL '{base}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("unsupported scheme '{}' (expected http or https)", url.scheme());
    }
    if !url.path().ends_with(STATS_PATH) {
        let path = format!("{}{STATS_PATH}", url.path().trim_end_matches('/'));
        url.set_path(&path);
    }
    Ok(url)
}

// One client reused for every cycle
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSource {
    pub fn new(base: &str, tls_ca: Option<&Path>) -> anyhow::Result<Self> {
        let url = stats_url(base)?;
        let mut builder = reqwest::Client::builder();
        if let Some(path) = tls_ca {
            let pem = std::fs::read(path)
                .with_context(|| format!("reading CA certificate {}", path.display()))?;
            let cert = reqwest::Certificate::from_pem(&pem)
                .with_context(|| format!("parsing CA certificate {}", path.display()))?;
            builder = builder.add_root_certificate(cert);
        }
        let client = builder.build().context("building HTTP client")?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl SnapshotSource for HttpSource {
    async fn fetch(&self) -> Result<Snapshot, FetchError> {
        let resp = self.client.get(self.url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_url_normalization() {
        let u = |s| stats_url(s).unwrap().to_string();
        assert_eq!(u("127.0.0.1:5000"), "http://127.0.0.1:5000/api/stats");
        assert_eq!(u("http://box:5000/"), "http://box:5000/api/stats");
        assert_eq!(u("https://box/monitor"), "https://box/monitor/api/stats");
        assert_eq!(u("http://box:5000/api/stats"), "http://box:5000/api/stats");
    }

    #[test]
    fn stats_url_rejects_other_schemes() {
        assert!(stats_url("ws://box:5000").is_err());
        assert!(stats_url("http://").is_err());
    }

    #[test]
    fn status_counts_as_transport_failure() {
        let e = FetchError::Status(StatusCode::BAD_GATEWAY);
        assert_eq!(e.kind(), FailureKind::Transport);
        assert_eq!(e.to_string(), "server returned HTTP 502 Bad Gateway");
        let d = serde_json::from_str::<Snapshot>("nope").unwrap_err();
        assert_eq!(FetchError::from(d).kind(), FailureKind::Decode);
    }
}
