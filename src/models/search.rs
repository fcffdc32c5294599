//! Decoding of stored searches.
//!
//! The criteria payload of a search is polymorphic: its shape depends on the
//! top-level `channel_id` and on the `type` key nested inside `data`. Both
//! discriminators are read first, then the matching record decoder runs over
//! `data`. Remaining header fields are plain and decoded through serde.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::criteria::{SearchData, StandardCriteria, StandardSearch};
use crate::domain::search::{Search, SearchProgress};
use crate::domain::types::{ChannelKind, SearchId, SearchKind, SearchStatus};
use crate::models::errors::{DecodeError, DecodeResult};
use crate::models::wire::{Fields, Object, as_i64, as_object, as_string, require_field};

const CHANNEL_FIELD: &str = "channel_id";
const DATA_FIELD: &str = "data";
const DATA_TYPE_FIELD: &str = "data.type";
const ID_FIELD: &str = "id";

/// Non-polymorphic part of a search, tolerant of absent keys.
#[derive(Deserialize)]
struct SearchHeader {
    #[serde(default)]
    title: String,
    #[serde(default)]
    status: SearchStatus,
    #[serde(default)]
    is_type_set: bool,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    limit: i64,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    updated_at: String,
    #[serde(default)]
    created_at_formatted: String,
    #[serde(default)]
    updated_at_formatted: String,
    #[serde(default)]
    progress: SearchProgress,
    #[serde(default)]
    searched: bool,
    #[serde(default)]
    gathering_prospects: bool,
}

/// Decodes a single search from a raw response body.
pub fn decode_search(raw: &[u8]) -> DecodeResult<Search> {
    let value: Value = serde_json::from_slice(raw)?;
    decode_search_value(value)
}

/// Decodes a single search from an already parsed JSON value.
pub fn decode_search_value(value: Value) -> DecodeResult<Search> {
    let Value::Object(mut object) = value else {
        return Err(DecodeError::mismatch("search", "object"));
    };

    let id = read_id(&object)?;
    let channel = read_channel(&object)?;
    let data = object
        .remove(DATA_FIELD)
        .ok_or_else(|| DecodeError::missing(DATA_FIELD))?;
    let data = as_object(&data, DATA_FIELD)?;
    let kind = read_kind(data)?;
    let payload = decode_payload(channel, kind, data)?;

    let header: SearchHeader = serde_json::from_value(Value::Object(object))?;

    Ok(Search {
        id,
        title: header.title,
        status: header.status,
        kind,
        is_type_set: header.is_type_set,
        channel,
        channel_title: header.channel_title,
        limit: header.limit,
        created_at: header.created_at,
        updated_at: header.updated_at,
        created_at_formatted: header.created_at_formatted,
        updated_at_formatted: header.updated_at_formatted,
        progress: header.progress,
        searched: header.searched,
        gathering_prospects: header.gathering_prospects,
        data: payload,
    })
}

fn read_id(object: &Object) -> DecodeResult<SearchId> {
    let raw = as_i64(require_field(object, ID_FIELD)?, ID_FIELD)?;
    SearchId::new(raw).map_err(|_| DecodeError::mismatch(ID_FIELD, "positive number"))
}

fn read_channel(object: &Object) -> DecodeResult<ChannelKind> {
    let raw = as_i64(require_field(object, CHANNEL_FIELD)?, CHANNEL_FIELD)?;
    ChannelKind::try_from(raw).map_err(|_| DecodeError::UnknownDiscriminator {
        field: CHANNEL_FIELD.to_string(),
        value: raw.to_string(),
    })
}

fn read_kind(data: &Object) -> DecodeResult<SearchKind> {
    let raw = data
        .get("type")
        .ok_or_else(|| DecodeError::missing(DATA_TYPE_FIELD))?;
    let raw = as_string(raw, DATA_TYPE_FIELD)?;
    raw.parse::<SearchKind>()
        .map_err(|_| DecodeError::UnknownDiscriminator {
            field: DATA_TYPE_FIELD.to_string(),
            value: raw,
        })
}

/// Selects the record decoder for a (channel, search kind) pair.
fn decode_payload(
    channel: ChannelKind,
    kind: SearchKind,
    data: &Object,
) -> DecodeResult<SearchData> {
    match (channel, kind) {
        (ChannelKind::VideoPlatform, SearchKind::Standard) => {
            decode_standard_search(data).map(SearchData::Standard)
        }
        (channel, kind) => Err(DecodeError::UnimplementedCombination { channel, kind }),
    }
}

/// Decodes the sixteen standard criteria fields in declaration order.
pub fn decode_standard_criteria(data: &Object) -> DecodeResult<StandardCriteria> {
    let fields = Fields::new(data);
    Ok(StandardCriteria {
        keywords: fields.string_list("keywords")?,
        keywords_mode: fields.string("keywords_mode")?,
        excluded_keywords: fields.string_list("excluded_keywords")?,
        excluded_keywords_mode: fields.string("excluded_keywords_mode")?,
        video_keywords: fields.string_list("video_keywords")?,
        video_keywords_mode: fields.string("video_keywords_mode")?,
        excluded_video_keywords: fields.string_list("excluded_video_keywords")?,
        excluded_video_keywords_mode: fields.string("excluded_video_keywords_mode")?,
        category: fields.string_list("category")?,
        country: fields.string_list("country")?,
        subscribers_range: fields.i64_pair("subscribers_range")?,
        total_views_range: fields.i64_pair("total_views_range")?,
        average_views_per_video_range: fields.i64_pair("average_views_per_video_range")?,
        total_videos_range: fields.i32_pair("total_videos_range")?,
        latest_video_range: fields.i32_pair("latest_video_range")?,
        created_range: fields.i32_pair("created_range")?,
    })
}

/// Decodes standard criteria followed by the search billing settings.
pub fn decode_standard_search(data: &Object) -> DecodeResult<StandardSearch> {
    let criteria = decode_standard_criteria(data)?;
    let fields = Fields::new(data);
    Ok(StandardSearch {
        criteria,
        pricing_method: fields.string("pricing_method")?,
        email_verification_method: fields.string("email_verification_method")?,
    })
}
