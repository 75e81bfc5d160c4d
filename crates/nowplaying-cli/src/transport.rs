//! Fetching raw documents from a media server over plain HTTP.

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;
use ureq::Agent;

/// Server descriptor (carries `friendlyName`).
pub const SERVER_PATH: &str = "/";
/// Active playback sessions.
pub const SESSIONS_PATH: &str = "/status/sessions";

pub const TOKEN_HEADER: &str = "X-Plex-Token";

/// A host and the port to reach it on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    /// Parse `host`, `host:port` or `[v6]:port`; bare IPv6 addresses keep
    /// the default port.
    pub fn parse(input: &str, default_port: u16) -> Self {
        let input = input.trim();

        if let Some(rest) = input.strip_prefix('[')
            && let Some((addr, tail)) = rest.split_once(']')
        {
            let port = tail
                .strip_prefix(':')
                .and_then(|p| p.parse().ok())
                .unwrap_or(default_port);
            return Self {
                host: addr.to_string(),
                port,
            };
        }

        if input.matches(':').count() == 1
            && let Some((host, port)) = input.rsplit_once(':')
            && let Ok(port) = port.parse()
        {
            return Self {
                host: host.to_string(),
                port,
            };
        }

        Self {
            host: input.to_string(),
            port: default_port,
        }
    }

    pub fn url(&self, path: &str) -> String {
        if self.host.contains(':') {
            format!("http://[{}]:{}{}", self.host, self.port, path)
        } else {
            format!("http://{}:{}{}", self.host, self.port, path)
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchRequest<'a> {
    pub endpoint: &'a Endpoint,
    pub path: &'a str,
    pub timeout: Duration,
    pub token: Option<&'a str>,
}

/// Source of raw documents. The report does not care which downloader
/// produced them.
pub trait Fetcher {
    fn fetch(&self, request: &FetchRequest<'_>) -> Result<String>;
}

/// Blocking HTTP fetcher.
///
/// Error statuses are returned as ordinary bodies: a 401 page has to reach
/// the scanner so it can report the authentication failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl Fetcher for HttpFetcher {
    fn fetch(&self, request: &FetchRequest<'_>) -> Result<String> {
        let url = request.endpoint.url(request.path);
        debug!("Fetching {}", url);

        let config = Agent::config_builder()
            .timeout_global(Some(request.timeout))
            .http_status_as_error(false)
            .build();
        let agent: Agent = config.into();

        let mut builder = agent.get(&url).header("Accept", "application/xml");
        if let Some(token) = request.token {
            builder = builder.header(TOKEN_HEADER, token);
        }

        let mut response = builder
            .call()
            .with_context(|| format!("failed to reach {}", url))?;
        debug!(status = %response.status(), "Response from {}", url);

        response
            .body_mut()
            .read_to_string()
            .with_context(|| format!("failed to read response body from {}", url))
    }
}
