use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single playlist entry: display name, category label, stream endpoint.
///
/// Built transiently during one parse pass and serialized straight into the
/// response; never persisted and never mutated after creation. All three
/// fields are always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub group: String,
    pub url: String,
}

/// One viewing-history line for a profile. Lists are kept newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub title: String,
    #[serde(default)]
    pub note: String,
    pub date: DateTime<Utc>,
}

/// A stream saved to a profile's favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub title: String,
    pub url: String,
}

/// Body for both register and login.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Answer to a successful register or login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub username: String,
}

/// Answer to a session lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddHistoryRequest {
    pub title: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddFavoriteRequest {
    /// Defaults to the URL when not given.
    pub title: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoveFavoriteRequest {
    pub url: String,
}
