//! Outbound request envelopes wrapping caller-supplied criteria.

use serde::Serialize;

use crate::domain::criteria::{SearchCriteria, SearchData, StandardSearch};
use crate::domain::types::{ChannelKind, SearchKind};
use crate::models::errors::{EncodeError, EncodeResult};

/// Method override expected by the search endpoints, which sit behind an
/// intermediary that only forwards POST bodies.
const METHOD_OVERRIDE: &str = "PUT";

/// Envelope sent to the count and preview pre-flight endpoints.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CriteriaEnvelope<'a> {
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub channel_id: ChannelKind,
    pub data: &'a SearchCriteria,
}

/// Envelope sent when creating or updating a stored search.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SearchEnvelope<'a> {
    pub title: &'a str,
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub channel_id: ChannelKind,
    pub limit: i64,
    pub data: &'a StandardSearch,
    #[serde(rename = "_method")]
    pub method: &'static str,
}

/// Wraps criteria with the discriminator pair of its variant.
pub fn encode_criteria(criteria: &SearchCriteria) -> CriteriaEnvelope<'_> {
    let (channel_id, kind) = criteria.discriminators();
    CriteriaEnvelope {
        kind,
        channel_id,
        data: criteria,
    }
}

/// Builds the create/update envelope. Only standard searches can be stored.
pub fn encode_search<'a>(
    title: &'a str,
    limit: i64,
    data: &'a SearchData,
) -> EncodeResult<SearchEnvelope<'a>> {
    match data {
        SearchData::Standard(search) => Ok(SearchEnvelope {
            title,
            kind: SearchKind::Standard,
            channel_id: ChannelKind::VideoPlatform,
            limit,
            data: search,
            method: METHOD_OVERRIDE,
        }),
        SearchData::Similar(_) => Err(EncodeError::UnsupportedVariant {
            received: data.kind(),
        }),
    }
}
