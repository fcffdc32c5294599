use serde::{Deserialize, Serialize};

use crate::domain::types::ChannelId;

/// Platform channel registered with the account.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    pub id: ChannelId,
    pub title: String,
}
