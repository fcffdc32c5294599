//! Decoding of prospect lists.
//!
//! The prospects endpoint does not say which platform its records come from.
//! The variant is inferred from the first record only: if it carries
//! `video_keywords` the whole list is decoded as video-platform prospects.
//! This is a heuristic, not a declared discriminator. A genuine video record
//! without that key would be classified as a social-platform record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::prospect::{Prospect, VideoPlatformProspect};
use crate::domain::quick_search::ProspectPreview;
use crate::domain::types::ChannelKind;
use crate::models::errors::{DecodeError, DecodeResult};
use crate::models::wire::{Fields, as_array, as_object, require_field};

/// Key whose presence marks a video-platform prospect.
pub const VIDEO_PLATFORM_MARKER: &str = "video_keywords";

const DATA_FIELD: &str = "data";

/// How a list decode reacts to one bad record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListDecodeMode {
    /// Abort the whole list on the first bad record.
    #[default]
    FailFast,
    /// Drop bad records and report them alongside the good ones.
    Skip,
}

/// A record dropped while decoding in [`ListDecodeMode::Skip`].
#[derive(Debug)]
pub struct RejectedProspect {
    pub index: usize,
    pub error: DecodeError,
}

#[derive(Debug, Default)]
pub struct ProspectBatch {
    pub prospects: Vec<Prospect>,
    pub rejected: Vec<RejectedProspect>,
}

/// Decodes every prospect of a `{"total", "data": [...]}` body, failing fast.
pub fn decode_prospect_list(raw: &[u8]) -> DecodeResult<Vec<Prospect>> {
    decode_prospect_batch(raw, ListDecodeMode::FailFast).map(|batch| batch.prospects)
}

pub fn decode_prospect_batch(raw: &[u8], mode: ListDecodeMode) -> DecodeResult<ProspectBatch> {
    let value: Value = serde_json::from_slice(raw)?;
    decode_prospect_batch_value(&value, mode)
}

pub fn decode_prospect_batch_value(
    value: &Value,
    mode: ListDecodeMode,
) -> DecodeResult<ProspectBatch> {
    let body = as_object(value, "response")?;
    let items = as_array(require_field(body, DATA_FIELD)?, DATA_FIELD)?;
    let first = items.first().ok_or(DecodeError::EmptyList)?;

    let decode: fn(&Value) -> DecodeResult<Prospect> = match classify(first)? {
        ChannelKind::VideoPlatform => decode_video_prospect,
        channel @ ChannelKind::SocialPlatform => {
            return Err(DecodeError::UnimplementedProspect { channel });
        }
    };

    let mut batch = ProspectBatch {
        prospects: Vec::with_capacity(items.len()),
        rejected: Vec::new(),
    };
    for (index, item) in items.iter().enumerate() {
        match (decode(item), mode) {
            (Ok(prospect), _) => batch.prospects.push(prospect),
            (Err(error), ListDecodeMode::FailFast) => return Err(error),
            (Err(error), ListDecodeMode::Skip) => {
                batch.rejected.push(RejectedProspect { index, error });
            }
        }
    }
    Ok(batch)
}

/// Infers the platform of a list from one of its records.
pub fn classify(record: &Value) -> DecodeResult<ChannelKind> {
    let object = as_object(record, DATA_FIELD)?;
    if object.contains_key(VIDEO_PLATFORM_MARKER) {
        Ok(ChannelKind::VideoPlatform)
    } else {
        Ok(ChannelKind::SocialPlatform)
    }
}

fn decode_video_prospect(value: &Value) -> DecodeResult<Prospect> {
    decode_video_prospect_value(value).map(Prospect::VideoPlatform)
}

pub fn decode_video_prospect_value(value: &Value) -> DecodeResult<VideoPlatformProspect> {
    let fields = Fields::new(as_object(value, DATA_FIELD)?);
    Ok(VideoPlatformProspect {
        preview: ProspectPreview {
            photo: fields.string("photo")?,
            name: fields.string("name")?,
            url: fields.string("url")?,
        },
        email: fields.string("email")?,
        phone: fields.string("phone")?,
        keywords: fields.string_list("keywords")?,
        video_keywords: fields.string_list("video_keywords")?,
        category: fields.string("category")?,
        country: fields.string("country")?,
        links: fields.string_list("links")?,
        created_at: fields.string("created_at")?,
        subscribers: fields.i64("subscribers")?,
        total_views: fields.i64("total_views")?,
        total_videos: fields.i32("total_videos")?,
        last_video: fields.string("last_video")?,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn video_record(name: &str) -> Value {
        json!({
            "photo": format!("https://img.example/{name}.jpg"),
            "name": name,
            "url": format!("https://video.example/@{name}"),
            "email": format!("{name}@example.com"),
            "phone": "",
            "keywords": ["travel"],
            "video_keywords": ["vlog", "backpacking"],
            "category": "19",
            "country": "PT",
            "links": ["https://instagram.example/someone"],
            "created_at": "2019-05-04",
            "subscribers": 48200,
            "total_views": 3100000,
            "total_videos": 212,
            "last_video": "2024-02-28"
        })
    }

    fn body(items: Vec<Value>) -> Value {
        json!({"total": items.len(), "data": items})
    }

    #[test]
    fn decodes_video_platform_list() {
        let raw = body(vec![video_record("ana"), video_record("rui")]).to_string();

        let prospects = decode_prospect_list(raw.as_bytes()).unwrap();

        assert_eq!(prospects.len(), 2);
        let Prospect::VideoPlatform(first) = &prospects[0] else {
            panic!("expected video prospect");
        };
        assert_eq!(first.preview.name, "ana");
        assert_eq!(first.subscribers, 48200);
        assert_eq!(first.total_videos, 212);
        assert_eq!(prospects[1].channel(), ChannelKind::VideoPlatform);
    }

    #[test]
    fn empty_list_is_an_error() {
        let err = decode_prospect_batch_value(&body(Vec::new()), ListDecodeMode::Skip).unwrap_err();

        assert!(matches!(err, DecodeError::EmptyList));
        assert_eq!(err.to_string(), "data not set");
    }

    #[test]
    fn missing_data_is_reported() {
        let err = decode_prospect_batch_value(&json!({"total": 0}), ListDecodeMode::FailFast)
            .unwrap_err();

        assert!(matches!(err, DecodeError::FieldMissing { ref field } if field == "data"));
    }

    #[test]
    fn list_without_marker_is_social_and_unimplemented() {
        let mut record = video_record("ana");
        record.as_object_mut().unwrap().remove(VIDEO_PLATFORM_MARKER);

        let err = decode_prospect_batch_value(&body(vec![record]), ListDecodeMode::FailFast)
            .unwrap_err();

        assert!(matches!(
            err,
            DecodeError::UnimplementedProspect {
                channel: ChannelKind::SocialPlatform
            }
        ));
    }

    #[test]
    fn classification_uses_first_record_only() {
        let mut second = video_record("rui");
        second.as_object_mut().unwrap().remove(VIDEO_PLATFORM_MARKER);

        let err = decode_prospect_batch_value(
            &body(vec![video_record("ana"), second]),
            ListDecodeMode::FailFast,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            DecodeError::FieldMissing { ref field } if field == VIDEO_PLATFORM_MARKER
        ));
    }

    #[test]
    fn fail_fast_aborts_on_bad_record() {
        let mut bad = video_record("rui");
        bad["subscribers"] = json!("many");

        let err = decode_prospect_batch_value(
            &body(vec![video_record("ana"), bad, video_record("eva")]),
            ListDecodeMode::FailFast,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            DecodeError::FieldTypeMismatch { ref field, expected: "number" } if field == "subscribers"
        ));
    }

    #[test]
    fn skip_mode_reports_rejected_records() {
        let mut bad = video_record("rui");
        bad.as_object_mut().unwrap().remove("email");

        let batch = decode_prospect_batch_value(
            &body(vec![video_record("ana"), bad, json!("oops"), video_record("eva")]),
            ListDecodeMode::Skip,
        )
        .unwrap();

        let names: Vec<_> = batch
            .prospects
            .iter()
            .map(|p| p.preview().name.as_str())
            .collect();
        assert_eq!(names, vec!["ana", "eva"]);
        let indexes: Vec<_> = batch.rejected.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![1, 2]);
        assert!(matches!(
            batch.rejected[0].error,
            DecodeError::FieldMissing { ref field } if field == "email"
        ));
    }

    #[test]
    fn video_prospect_fields_are_checked_in_order() {
        let mut record = video_record("ana");
        let map = record.as_object_mut().unwrap();
        map.remove("last_video");
        map.insert("photo".to_string(), json!(1));

        let err = decode_video_prospect_value(&record).unwrap_err();

        assert!(matches!(
            err,
            DecodeError::FieldTypeMismatch { ref field, .. } if field == "photo"
        ));
    }

    #[test]
    fn list_decode_mode_deserializes_snake_case() {
        let mode: ListDecodeMode = serde_json::from_value(json!("skip")).unwrap();
        assert_eq!(mode, ListDecodeMode::Skip);
        assert_eq!(ListDecodeMode::default(), ListDecodeMode::FailFast);
    }
}
