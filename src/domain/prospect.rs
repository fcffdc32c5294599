//! Enriched lead records returned for a completed search.

use serde::Serialize;

use crate::domain::quick_search::ProspectPreview;
use crate::domain::types::ChannelKind;

/// Lead discovered on a video-sharing platform.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
pub struct VideoPlatformProspect {
    #[serde(flatten)]
    pub preview: ProspectPreview,
    pub email: String,
    pub phone: String,
    pub keywords: Vec<String>,
    pub video_keywords: Vec<String>,
    pub category: String,
    pub country: String,
    pub links: Vec<String>,
    pub created_at: String,
    pub subscribers: i64,
    pub total_views: i64,
    pub total_videos: i32,
    pub last_video: String,
}

/// Lead discovered on a social network.
///
/// The remote API has not documented this shape yet, so there is no decoder
/// for it; see [`crate::models::prospect`].
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
pub struct SocialPlatformProspect {
    #[serde(flatten)]
    pub preview: ProspectPreview,
    pub email: String,
    pub phone: String,
    pub country: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Prospect {
    VideoPlatform(VideoPlatformProspect),
    SocialPlatform(SocialPlatformProspect),
}

impl Prospect {
    pub const fn channel(&self) -> ChannelKind {
        match self {
            Prospect::VideoPlatform(_) => ChannelKind::VideoPlatform,
            Prospect::SocialPlatform(_) => ChannelKind::SocialPlatform,
        }
    }

    pub fn preview(&self) -> &ProspectPreview {
        match self {
            Prospect::VideoPlatform(prospect) => &prospect.preview,
            Prospect::SocialPlatform(prospect) => &prospect.preview,
        }
    }
}
