use serde::{Deserialize, Serialize};

use crate::domain::criteria::SearchData;
use crate::domain::types::{ChannelKind, SearchId, SearchKind, SearchStatus};

/// Stored, server-side search job with its decoded criteria payload.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Search {
    pub id: SearchId,
    pub title: String,
    pub status: SearchStatus,
    pub kind: SearchKind,
    pub is_type_set: bool,
    pub channel: ChannelKind,
    pub channel_title: String,
    pub limit: i64,
    pub created_at: String,
    pub updated_at: String,
    pub created_at_formatted: String,
    pub updated_at_formatted: String,
    pub progress: SearchProgress,
    pub searched: bool,
    pub gathering_prospects: bool,
    pub data: SearchData,
}

/// Counters reported while a search gathers prospects.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SearchProgress {
    pub current: i64,
    pub total: i64,
}

impl SearchProgress {
    /// Returns `true` once every requested prospect has been gathered.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.current >= self.total
    }
}
