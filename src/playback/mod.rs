//! Playback strategy selection
//!
//! The shell reports what its `<video>` element can do and gets back which
//! decoding path to take. Native HLS support wins; otherwise the manifest
//! goes to a MediaSource engine (hls.js). The actual media decoding stays
//! in the player.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackStrategy {
    /// Point the video element straight at the manifest.
    NativeHls,
    /// Hand the manifest to a MediaSource-based engine.
    MediaSourceHls,
    /// Neither path is available; the shell shows an error instead.
    Unsupported,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlayerCapabilities {
    pub native_hls: bool,
    pub media_source: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackPlanRequest {
    pub url: String,
    #[serde(default)]
    pub native_hls: bool,
    #[serde(default)]
    pub media_source: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaybackPlanResponse {
    pub strategy: PlaybackStrategy,
    pub url: String,
}

/// Pick the decoding strategy for the reported capabilities.
pub fn select_strategy(caps: PlayerCapabilities) -> PlaybackStrategy {
    if caps.native_hls {
        PlaybackStrategy::NativeHls
    } else if caps.media_source {
        PlaybackStrategy::MediaSourceHls
    } else {
        PlaybackStrategy::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_wins_over_media_source() {
        let strategy = select_strategy(PlayerCapabilities {
            native_hls: true,
            media_source: true,
        });
        assert_eq!(strategy, PlaybackStrategy::NativeHls);
    }

    #[test]
    fn test_media_source_fallback() {
        let strategy = select_strategy(PlayerCapabilities {
            native_hls: false,
            media_source: true,
        });
        assert_eq!(strategy, PlaybackStrategy::MediaSourceHls);
    }

    #[test]
    fn test_no_capability_is_unsupported() {
        let strategy = select_strategy(PlayerCapabilities {
            native_hls: false,
            media_source: false,
        });
        assert_eq!(strategy, PlaybackStrategy::Unsupported);
    }
}
