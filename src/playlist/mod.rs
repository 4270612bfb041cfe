//! Playlist handling
//!
//! This module owns the path from a playlist identifier to a channel list:
//! fetching the source document and scanning its text into channel records.

pub mod fetch;
pub mod parser;

pub use fetch::PlaylistFetcher;
pub use parser::PlaylistParser;
