use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub web: WebConfig,
    pub playlists: PlaylistsConfig,
    pub upstream: UpstreamConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistsConfig {
    /// Source documents, addressed by position in `GET /tv/{id}`.
    /// Fixed for the lifetime of the process.
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub user_agent: String,
    /// Playlist fetches run without a timeout unless this is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backing file for accounts, sessions, history and favorites.
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web: WebConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            playlists: PlaylistsConfig {
                urls: vec!["https://iptv-org.github.io/iptv/countries/fr.m3u".to_string()],
            },
            upstream: UpstreamConfig {
                user_agent: format!("tvshell/{}", env!("CARGO_PKG_VERSION")),
                timeout_seconds: None,
            },
            storage: StorageConfig {
                data_path: PathBuf::from("./data/state.json"),
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(&config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_file, contents)?;
            Ok(default_config)
        }
    }

    /// Parse and validate the configured playlist URLs.
    pub fn playlist_urls(&self) -> Result<Vec<Url>> {
        self.playlists
            .urls
            .iter()
            .map(|raw| {
                Url::parse(raw).with_context(|| format!("invalid playlist url: {}", raw))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [web]
            host = "127.0.0.1"
            port = 3000

            [playlists]
            urls = ["https://example.com/fr.m3u", "https://example.com/other.m3u"]

            [upstream]
            user_agent = "tvshell/0.1.0"
            timeout_seconds = 30

            [storage]
            data_path = "./data/state.json"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.web.port, 3000);
        assert_eq!(config.playlists.urls.len(), 2);
        assert_eq!(config.upstream.timeout_seconds, Some(30));
        assert_eq!(config.playlist_urls().unwrap().len(), 2);
    }

    #[test]
    fn test_default_config_round_trips() {
        let config = Config::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.web.host, config.web.host);
        assert_eq!(parsed.playlists.urls, config.playlists.urls);
        assert_eq!(parsed.upstream.timeout_seconds, None);
    }

    #[test]
    fn test_invalid_playlist_url_is_rejected() {
        let config = Config {
            playlists: PlaylistsConfig {
                urls: vec!["not a url".to_string()],
            },
            ..Config::default()
        };
        assert!(config.playlist_urls().is_err());
    }
}
