//! Search criteria supplied by callers and echoed back inside stored searches.

use serde::Serialize;

use crate::domain::types::{ChannelKind, Range, SearchKind};

/// Filter set of a standard keyword search.
///
/// List filters are OR-combined. Each keyword list carries its own mode
/// string (for example `"any"` or `"all"`), passed through untouched.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
pub struct StandardCriteria {
    pub keywords: Vec<String>,
    pub keywords_mode: String,
    pub excluded_keywords: Vec<String>,
    pub excluded_keywords_mode: String,
    pub video_keywords: Vec<String>,
    pub video_keywords_mode: String,
    pub excluded_video_keywords: Vec<String>,
    pub excluded_video_keywords_mode: String,
    pub category: Vec<String>,
    pub country: Vec<String>,
    pub subscribers_range: Range<i64>,
    pub total_views_range: Range<i64>,
    pub average_views_per_video_range: Range<i64>,
    pub total_videos_range: Range<i32>,
    pub latest_video_range: Range<i32>,
    pub created_range: Range<i32>,
}

/// Lookalike search seeded by existing channels.
///
/// Every `required_*` flag toggles whether the matching dimension must be
/// similar; the `*_difference_range` bounds how far a candidate may deviate.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
pub struct SimilarCriteria {
    pub required_keywords: bool,
    pub required_video_keywords: bool,
    pub required_category: bool,
    pub required_country: bool,
    pub required_subscribers_range: bool,
    pub subscribers_difference_range: Range<i64>,
    pub required_total_views_range: bool,
    pub total_views_difference_range: Range<i64>,
    pub required_average_views_per_video_range: bool,
    pub average_views_per_video_difference_range: Range<i64>,
    pub required_total_videos_range: bool,
    pub total_videos_difference_range: Range<i32>,
    pub required_latest_video_range: bool,
    pub latest_video_difference_range: Range<i32>,
    pub required_created_range: bool,
    pub created_difference_range: Range<i32>,
    pub minimum_score: Vec<i32>,
    pub references: Vec<String>,
}

/// Criteria accepted by the count and preview pre-flight calls.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SearchCriteria {
    Standard(StandardCriteria),
    Similar(SimilarCriteria),
}

impl SearchCriteria {
    /// Discriminator pair announced in the request envelope.
    pub const fn discriminators(&self) -> (ChannelKind, SearchKind) {
        match self {
            SearchCriteria::Standard(_) => (ChannelKind::VideoPlatform, SearchKind::Standard),
            SearchCriteria::Similar(_) => (ChannelKind::VideoPlatform, SearchKind::Similar),
        }
    }
}

impl From<StandardCriteria> for SearchCriteria {
    fn from(value: StandardCriteria) -> Self {
        SearchCriteria::Standard(value)
    }
}

impl From<SimilarCriteria> for SearchCriteria {
    fn from(value: SimilarCriteria) -> Self {
        SearchCriteria::Similar(value)
    }
}

/// Standard criteria plus the billing settings of a stored search.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
pub struct StandardSearch {
    #[serde(flatten)]
    pub criteria: StandardCriteria,
    pub pricing_method: String,
    pub email_verification_method: String,
}

/// Payload of a stored search, keyed by search kind.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SearchData {
    Standard(StandardSearch),
    Similar(SimilarCriteria),
}

impl SearchData {
    pub const fn kind(&self) -> SearchKind {
        match self {
            SearchData::Standard(_) => SearchKind::Standard,
            SearchData::Similar(_) => SearchKind::Similar,
        }
    }

    /// Borrow the standard payload when this is a standard search.
    pub fn as_standard(&self) -> Option<&StandardSearch> {
        match self {
            SearchData::Standard(search) => Some(search),
            SearchData::Similar(_) => None,
        }
    }
}
