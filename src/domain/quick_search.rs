use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{QuickSearchId, SearchStatus};

/// Minimal identity of a matched channel.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProspectPreview {
    pub photo: String,
    pub name: String,
    pub url: String,
}

/// Single-target lookup of a channel by URL.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickSearch {
    pub id: QuickSearchId,
    pub status: SearchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Populated once the lookup resolved to a channel.
    #[serde(default)]
    pub prospect: Option<ProspectPreview>,
}
