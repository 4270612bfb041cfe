//! Playlist fetch orchestration
//!
//! Resolves a playlist index against the configured source list, retrieves
//! the document and drives the parser. The source list is fixed at startup
//! and read-only, so concurrent fetches need no coordination; the same
//! index fetched twice simply repeats the request.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use super::PlaylistParser;
use crate::config::UpstreamConfig;
use crate::errors::{AppResult, PlaylistError};
use crate::models::Channel;

/// Fetches configured playlists and turns them into channel lists.
pub struct PlaylistFetcher {
    client: Client,
    parser: PlaylistParser,
    sources: Vec<Url>,
}

impl PlaylistFetcher {
    /// Create a fetcher over an immutable source list.
    pub fn new(sources: Vec<Url>, upstream: &UpstreamConfig) -> Self {
        let mut builder = Client::builder().user_agent(upstream.user_agent.clone());
        if let Some(secs) = upstream.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            parser: PlaylistParser::new(),
            sources,
        }
    }

    /// Number of configured playlists.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Fetch and parse the playlist at the given index.
    ///
    /// Out-of-range indexes fail without touching the network. A failed
    /// retrieval yields no channel list at all, never a truncated one.
    pub async fn fetch(&self, index: usize) -> AppResult<Vec<Channel>> {
        let source = self
            .sources
            .get(index)
            .ok_or_else(|| PlaylistError::unknown(index.to_string()))?;

        debug!("Fetching playlist {} from {}", index, source);

        let response = self
            .client
            .get(source.clone())
            .send()
            .await
            .map_err(|e| PlaylistError::upstream(source.as_str(), e.to_string()))?;

        if !response.status().is_success() {
            return Err(PlaylistError::upstream(
                source.as_str(),
                format!("HTTP error: {}", response.status()),
            )
            .into());
        }

        let text = response
            .text()
            .await
            .map_err(|e| PlaylistError::upstream(source.as_str(), e.to_string()))?;

        let channels = self.parser.parse(&text);
        info!("Parsed {} channels from playlist {}", channels.len(), index);
        Ok(channels)
    }
}
