//! Error type definitions for the tvshell application
//!
//! This module defines all error types used throughout the application,
//! providing a hierarchical error system that makes debugging and error
//! handling more straightforward.

use thiserror::Error;

/// Result alias used across the library.
pub type AppResult<T> = Result<T, AppError>;

/// Top-level application error type
///
/// This enum represents all possible errors that can occur in the
/// application. It uses `thiserror` to provide automatic error trait
/// implementations and proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Playlist resolution and retrieval errors
    #[error("Playlist error: {0}")]
    Playlist(#[from] PlaylistError),

    /// Key-value store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Account and session errors
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Playlist handling specific errors
#[derive(Error, Debug)]
pub enum PlaylistError {
    /// Requested identifier is not an index into the configured source list
    #[error("unknown playlist: {id}")]
    UnknownPlaylist { id: String },

    /// Network or decoding failure while retrieving the source document
    #[error("failed to fetch {url}: {detail}")]
    UpstreamFetch { url: String, detail: String },
}

/// Key-value store specific errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data serialization/deserialization failures
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A writer panicked while holding the store lock
    #[error("store lock poisoned")]
    Poisoned,
}

/// Account and session specific errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Registration with a name that already exists
    #[error("username already taken: {username}")]
    UsernameTaken { username: String },

    /// Login with a wrong name or password
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Request without a bearer token
    #[error("missing session token")]
    MissingSession,

    /// Bearer token that no open session matches
    #[error("unknown session token")]
    UnknownSession,
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found<R: Into<String>, I: Into<String>>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl PlaylistError {
    /// Create an unknown playlist error
    pub fn unknown<I: Into<String>>(id: I) -> Self {
        Self::UnknownPlaylist { id: id.into() }
    }

    /// Create an upstream fetch error
    pub fn upstream<U: Into<String>, D: Into<String>>(url: U, detail: D) -> Self {
        Self::UpstreamFetch {
            url: url.into(),
            detail: detail.into(),
        }
    }
}
