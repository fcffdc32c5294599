//! Stored searches and the pre-flight calls made before creating one.

use serde_json::Value;

use crate::domain::criteria::{SearchCriteria, SearchData};
use crate::domain::quick_search::ProspectPreview;
use crate::domain::search::Search;
use crate::domain::types::SearchId;
use crate::dto::api::CountResponse;
use crate::models::envelope::{encode_criteria, encode_search};
use crate::models::search::{decode_search, decode_search_value};
use crate::services::{ServiceResult, decode_json, fetch_all, send};
use crate::transport::{ApiRequest, Transport};

const COUNT_PATH: &str = "searches/potential-prospects/count";
const PREVIEW_PATH: &str = "searches/potential-prospects/preview";

/// Estimates how many prospects the criteria would match.
pub fn count_potential_prospects<T>(transport: &T, criteria: &SearchCriteria) -> ServiceResult<u64>
where
    T: Transport + ?Sized,
{
    let request = ApiRequest::put(COUNT_PATH).json(&encode_criteria(criteria))?;
    let raw = send(transport, &request, "get potential prospects count")?;
    let response: CountResponse = decode_json(&raw, "get potential prospects count")?;
    Ok(response.count)
}

/// Returns a sample of the prospects the criteria would match.
pub fn preview_potential_prospects<T>(
    transport: &T,
    criteria: &SearchCriteria,
) -> ServiceResult<Vec<ProspectPreview>>
where
    T: Transport + ?Sized,
{
    let request = ApiRequest::put(PREVIEW_PATH).json(&encode_criteria(criteria))?;
    let raw = send(transport, &request, "get potential prospects")?;
    decode_json(&raw, "get potential prospects")
}

/// Lists every stored search, decoding each criteria payload by its
/// discriminators. One undecodable search fails the whole listing.
pub fn list_searches<T>(transport: &T) -> ServiceResult<Vec<Search>>
where
    T: Transport + ?Sized,
{
    let raw: Vec<Value> = fetch_all(transport, "searches", "get searches")?;
    let searches = raw
        .into_iter()
        .map(decode_search_value)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            log::error!("Failed to decode searches: {err}");
            err
        })?;
    Ok(searches)
}

pub fn get_search<T>(transport: &T, id: SearchId) -> ServiceResult<Search>
where
    T: Transport + ?Sized,
{
    let raw = send(
        transport,
        &ApiRequest::get(format!("searches/{id}")),
        "get search",
    )?;
    let search = decode_search(&raw).map_err(|err| {
        log::error!("Failed to decode search {id}: {err}");
        err
    })?;
    Ok(search)
}

/// Stores a new search. Only standard searches can be stored.
pub fn create_search<T>(transport: &T, title: &str, limit: i64, data: &SearchData) -> ServiceResult<()>
where
    T: Transport + ?Sized,
{
    let envelope = encode_search(title, limit, data).map_err(|err| {
        log::error!("Failed to create search: {err}");
        err
    })?;
    let request = ApiRequest::put("searches").json(&envelope)?;
    send(transport, &request, "create search")?;
    Ok(())
}

pub fn update_search<T>(
    transport: &T,
    id: SearchId,
    title: &str,
    limit: i64,
    data: &SearchData,
) -> ServiceResult<()>
where
    T: Transport + ?Sized,
{
    let envelope = encode_search(title, limit, data).map_err(|err| {
        log::error!("Failed to update search {id}: {err}");
        err
    })?;
    let request = ApiRequest::put(format!("searches/{id}")).json(&envelope)?;
    send(transport, &request, "update search")?;
    Ok(())
}

pub fn delete_search<T>(transport: &T, id: SearchId) -> ServiceResult<()>
where
    T: Transport + ?Sized,
{
    send(
        transport,
        &ApiRequest::delete(format!("searches/{id}")),
        "delete search",
    )?;
    Ok(())
}

pub fn start_search<T>(transport: &T, id: SearchId) -> ServiceResult<()>
where
    T: Transport + ?Sized,
{
    transition(transport, id, "start")
}

pub fn pause_search<T>(transport: &T, id: SearchId) -> ServiceResult<()>
where
    T: Transport + ?Sized,
{
    transition(transport, id, "pause")
}

pub fn finish_search<T>(transport: &T, id: SearchId) -> ServiceResult<()>
where
    T: Transport + ?Sized,
{
    transition(transport, id, "finish")
}

fn transition<T>(transport: &T, id: SearchId, action: &str) -> ServiceResult<()>
where
    T: Transport + ?Sized,
{
    let request = ApiRequest::put(format!("searches/{id}/{action}"));
    send(transport, &request, &format!("{action} search {id}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::criteria::{SimilarCriteria, StandardCriteria, StandardSearch};
    use crate::domain::types::{ChannelKind, SearchKind};
    use crate::models::errors::{DecodeError, EncodeError};
    use crate::services::ServiceError;
    use crate::services::test_support::{body, page_of};
    use crate::transport::Method;
    use crate::transport::mock::MockTransport;

    fn standard_search() -> StandardSearch {
        StandardSearch {
            criteria: StandardCriteria {
                keywords: vec!["cooking".to_string()],
                keywords_mode: "any".to_string(),
                subscribers_range: (1_000, 50_000),
                ..StandardCriteria::default()
            },
            pricing_method: "credits".to_string(),
            email_verification_method: "none".to_string(),
        }
    }

    fn search_json(id: i64, channel_id: i64, kind: &str) -> Value {
        let mut data = serde_json::to_value(standard_search()).unwrap();
        data["type"] = json!(kind);
        json!({
            "id": id,
            "title": format!("Search {id}"),
            "status": "pending",
            "channel_id": channel_id,
            "limit": 100,
            "data": data
        })
    }

    #[test]
    fn count_sends_criteria_envelope() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                let body = request.body.as_ref().unwrap();
                request.method == Method::Put
                    && request.path == COUNT_PATH
                    && body["type"] == json!("standard")
                    && body["channel_id"] == json!(1)
                    && body["data"]["keywords"] == json!(["cooking"])
            })
            .times(1)
            .returning(|_| Ok(body(json!({"count": 1234}))));

        let criteria = SearchCriteria::from(standard_search().criteria);
        let count = count_potential_prospects(&transport, &criteria).expect("should count");

        assert_eq!(count, 1234);
    }

    #[test]
    fn preview_decodes_bare_array() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.path == PREVIEW_PATH)
            .times(1)
            .returning(|_| {
                Ok(body(json!([
                    {"photo": "p1", "name": "One", "url": "u1"},
                    {"photo": "p2", "name": "Two", "url": "u2"}
                ])))
            });

        let criteria = SearchCriteria::from(SimilarCriteria::default());
        let previews = preview_potential_prospects(&transport, &criteria).expect("should preview");

        assert_eq!(previews.len(), 2);
        assert_eq!(previews[1].name, "Two");
    }

    #[test]
    fn list_searches_decodes_each_page() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.path == "searches")
            .times(2)
            .returning(|request| {
                let data: Vec<Value> = match page_of(request) {
                    Some("1") => (1..=100).map(|id| search_json(id, 1, "standard")).collect(),
                    _ => Vec::new(),
                };
                Ok(body(json!({"total": 100, "data": data})))
            });

        let searches = list_searches(&transport).expect("should list searches");

        assert_eq!(searches.len(), 100);
        assert_eq!(searches[0].kind, SearchKind::Standard);
        assert_eq!(searches[99].title, "Search 100");
    }

    #[test]
    fn list_searches_fails_on_unimplemented_payload() {
        let mut transport = MockTransport::new();
        transport.expect_execute().times(1).returning(|_| {
            Ok(body(json!({
                "total": 2,
                "data": [search_json(1, 1, "standard"), search_json(2, 1, "import")]
            })))
        });

        let result = list_searches(&transport);

        assert!(matches!(
            result,
            Err(ServiceError::Decode(DecodeError::UnimplementedCombination {
                channel: ChannelKind::VideoPlatform,
                kind: SearchKind::Import,
            }))
        ));
    }

    #[test]
    fn get_search_decodes_standard_payload() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.method == Method::Get && request.path == "searches/5")
            .times(1)
            .returning(|_| Ok(body(search_json(5, 1, "standard"))));

        let search = get_search(&transport, SearchId::new(5).unwrap()).expect("should load");

        assert_eq!(search.channel, ChannelKind::VideoPlatform);
        assert_eq!(search.data, SearchData::Standard(standard_search()));
    }

    #[test]
    fn create_search_sends_method_override() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                let body = request.body.as_ref().unwrap();
                request.method == Method::Put
                    && request.path == "searches"
                    && body["_method"] == json!("PUT")
                    && body["title"] == json!("Chefs")
                    && body["limit"] == json!(50)
                    && body["data"]["pricing_method"] == json!("credits")
                    && body.get("import_file").is_none()
            })
            .times(1)
            .returning(|_| Ok(Vec::new()));

        create_search(
            &transport,
            "Chefs",
            50,
            &SearchData::Standard(standard_search()),
        )
        .expect("should create search");
    }

    #[test]
    fn similar_search_is_rejected_before_sending() {
        let transport = MockTransport::new();

        let result = update_search(
            &transport,
            SearchId::new(3).unwrap(),
            "Lookalikes",
            10,
            &SearchData::Similar(SimilarCriteria::default()),
        );

        assert!(matches!(
            result,
            Err(ServiceError::Encode(EncodeError::UnsupportedVariant {
                received: SearchKind::Similar
            }))
        ));
    }

    #[test]
    fn lifecycle_transitions_hit_action_paths() {
        let mut transport = MockTransport::new();
        for action in ["start", "pause", "finish"] {
            let path = format!("searches/8/{action}");
            transport
                .expect_execute()
                .withf(move |request| request.method == Method::Put && request.path == path)
                .times(1)
                .returning(|_| Ok(Vec::new()));
        }
        let id = SearchId::new(8).unwrap();

        start_search(&transport, id).expect("should start");
        pause_search(&transport, id).expect("should pause");
        finish_search(&transport, id).expect("should finish");
    }

    #[test]
    fn delete_search_uses_delete_method() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.method == Method::Delete && request.path == "searches/2")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        delete_search(&transport, SearchId::new(2).unwrap()).expect("should delete");
    }
}
