//! M3U playlist parsing
//!
//! Scans raw playlist text into channel records in a single linear pass.
//! An extended info line carries the display name and an optional group
//! label for the stream URL on a following line. The scan is deliberately
//! permissive: directives, orphaned metadata and orphaned URLs are dropped
//! individually and never abort the parse.

use regex::Regex;

use crate::models::Channel;

/// Marker that opens an extended info line.
const EXTINF_PREFIX: &str = "#EXTINF:";

/// Display name used when an extended info line has no comma-separated title.
const FALLBACK_NAME: &str = "unnamed";

/// Group label used when an extended info line has no group-title attribute.
const FALLBACK_GROUP: &str = "misc";

/// Name and group lifted from an extended info line, held until the
/// stream URL shows up on a later line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub name: String,
    pub group: String,
}

/// Scanner state for the metadata/URL pairing pass.
enum ScanState {
    AwaitingMetadata,
    AwaitingUrl(EntryMetadata),
}

/// M3U playlist parser
///
/// Holds the compiled attribute pattern so one instance can scan any number
/// of documents. Parsing is pure: the same input always yields the same
/// channel list.
pub struct PlaylistParser {
    group_title: Regex,
}

impl PlaylistParser {
    pub fn new() -> Self {
        Self {
            group_title: Regex::new(r#"group-title="([^"]+)""#)
                .expect("group-title pattern compiles"),
        }
    }

    /// Split raw playlist text into trimmed, non-empty lines in original order.
    pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
        text.lines().map(str::trim).filter(|line| !line.is_empty())
    }

    /// Extract name and group from a single extended info line.
    ///
    /// Returns `None` for any line that is not an extended info line. The
    /// name is whatever follows the last comma; the group comes from a
    /// `group-title="..."` attribute anywhere on the line. Both fall back
    /// to fixed placeholders when absent.
    pub fn parse_extinf(&self, line: &str) -> Option<EntryMetadata> {
        if !line.starts_with(EXTINF_PREFIX) {
            return None;
        }

        let name = match line.rfind(',') {
            Some(pos) => {
                let title = line[pos + 1..].trim();
                if title.is_empty() {
                    FALLBACK_NAME.to_string()
                } else {
                    title.to_string()
                }
            }
            None => FALLBACK_NAME.to_string(),
        };

        let group = self
            .group_title
            .captures(line)
            .map(|caps| caps[1].to_string())
            .unwrap_or_else(|| FALLBACK_GROUP.to_string());

        Some(EntryMetadata { name, group })
    }

    /// Scan a playlist document into channel records.
    ///
    /// One pass over the lines with a single pending-metadata slot. A
    /// metadata line arms the slot; the next `http` line completes it into
    /// a channel. A second metadata line before any URL replaces the slot,
    /// so only the last of consecutive metadata lines can produce a
    /// channel. Metadata still pending at end of input is dropped.
    pub fn parse(&self, text: &str) -> Vec<Channel> {
        let mut channels = Vec::new();
        let mut state = ScanState::AwaitingMetadata;

        for line in Self::split_lines(text) {
            state = match state {
                ScanState::AwaitingMetadata => match self.parse_extinf(line) {
                    Some(meta) => ScanState::AwaitingUrl(meta),
                    // directives and stray URLs are dropped
                    None => ScanState::AwaitingMetadata,
                },
                ScanState::AwaitingUrl(pending) => {
                    if line.starts_with("http") {
                        channels.push(Channel {
                            name: pending.name,
                            group: pending.group,
                            url: line.to_string(),
                        });
                        ScanState::AwaitingMetadata
                    } else if let Some(meta) = self.parse_extinf(line) {
                        ScanState::AwaitingUrl(meta)
                    } else {
                        ScanState::AwaitingUrl(pending)
                    }
                }
            };
        }

        channels
    }
}

impl Default for PlaylistParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(name: &str, group: &str, url: &str) -> Channel {
        Channel {
            name: name.to_string(),
            group: group.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_split_lines_trims_and_drops_blanks() {
        let text = "  #EXTM3U \n\n   \n\thttp://a/b\n";
        let lines: Vec<&str> = PlaylistParser::split_lines(text).collect();
        assert_eq!(lines, vec!["#EXTM3U", "http://a/b"]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert_eq!(PlaylistParser::split_lines("").count(), 0);
        assert_eq!(PlaylistParser::split_lines("   \n \n").count(), 0);
    }

    #[test]
    fn test_parse_extinf_full_metadata() {
        let parser = PlaylistParser::new();
        let meta = parser
            .parse_extinf(r#"#EXTINF:-1 group-title="News",Channel One"#)
            .unwrap();
        assert_eq!(meta.name, "Channel One");
        assert_eq!(meta.group, "News");
    }

    #[test]
    fn test_parse_extinf_non_metadata_line() {
        let parser = PlaylistParser::new();
        assert_eq!(parser.parse_extinf("#EXTM3U"), None);
        assert_eq!(parser.parse_extinf("http://example.com/a.m3u8"), None);
    }

    #[test]
    fn test_parse_extinf_missing_comma_falls_back_to_unnamed() {
        let parser = PlaylistParser::new();
        let meta = parser.parse_extinf("#EXTINF:-1").unwrap();
        assert_eq!(meta.name, "unnamed");
        assert_eq!(meta.group, "misc");
    }

    #[test]
    fn test_parse_extinf_missing_group_falls_back_to_misc() {
        let parser = PlaylistParser::new();
        let meta = parser.parse_extinf("#EXTINF:-1,Channel Two").unwrap();
        assert_eq!(meta.name, "Channel Two");
        assert_eq!(meta.group, "misc");
    }

    #[test]
    fn test_parse_extinf_name_after_last_comma() {
        let parser = PlaylistParser::new();
        let meta = parser
            .parse_extinf(r#"#EXTINF:-1 tvg-name="a,b" group-title="Mix",  Late Show  "#)
            .unwrap();
        assert_eq!(meta.name, "Late Show");
        assert_eq!(meta.group, "Mix");
    }

    #[test]
    fn test_parse_well_formed_pairs_in_order() {
        let parser = PlaylistParser::new();
        let text = concat!(
            "#EXTM3U\n",
            "#EXTINF:-1 group-title=\"News\",Channel One\n",
            "http://example.com/one.m3u8\n",
            "#EXTINF:-1,Channel Two\n",
            "http://example.com/two.m3u8\n",
        );
        assert_eq!(
            parser.parse(text),
            vec![
                channel("Channel One", "News", "http://example.com/one.m3u8"),
                channel("Channel Two", "misc", "http://example.com/two.m3u8"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_input_yields_empty_list() {
        let parser = PlaylistParser::new();
        assert!(parser.parse("").is_empty());
    }

    #[test]
    fn test_parse_orphaned_url_is_skipped() {
        let parser = PlaylistParser::new();
        let text = "http://example.com/orphan.m3u8\n#EXTINF:-1,Kept\nhttp://example.com/kept.m3u8\n";
        assert_eq!(
            parser.parse(text),
            vec![channel("Kept", "misc", "http://example.com/kept.m3u8")]
        );
    }

    #[test]
    fn test_parse_consecutive_metadata_keeps_only_last() {
        let parser = PlaylistParser::new();
        let text = concat!(
            "#EXTINF:-1,Dropped\n",
            "#EXTINF:-1 group-title=\"Live\",Kept\n",
            "http://example.com/kept.m3u8\n",
        );
        assert_eq!(
            parser.parse(text),
            vec![channel("Kept", "Live", "http://example.com/kept.m3u8")]
        );
    }

    #[test]
    fn test_parse_trailing_metadata_is_discarded() {
        let parser = PlaylistParser::new();
        let text = "#EXTINF:-1,First\nhttp://example.com/first.m3u8\n#EXTINF:-1,No Url\n";
        assert_eq!(
            parser.parse(text),
            vec![channel("First", "misc", "http://example.com/first.m3u8")]
        );
    }

    #[test]
    fn test_parse_tolerates_noise_between_metadata_and_url() {
        let parser = PlaylistParser::new();
        let text = concat!(
            "#EXTINF:-1 group-title=\"Docs\",Slow One\n",
            "#EXTVLCOPT:network-caching=1000\n",
            "http://example.com/slow.m3u8\n",
        );
        assert_eq!(
            parser.parse(text),
            vec![channel("Slow One", "Docs", "http://example.com/slow.m3u8")]
        );
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let parser = PlaylistParser::new();
        let text = concat!(
            "#EXTINF:-1,Twice\n",
            "http://example.com/same.m3u8\n",
            "#EXTINF:-1,Twice\n",
            "http://example.com/same.m3u8\n",
        );
        assert_eq!(parser.parse(text).len(), 2);
    }
}
