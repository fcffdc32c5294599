use crate::domain::quick_search::QuickSearch;
use crate::domain::types::{ChannelKind, QuickSearchId};
use crate::dto::api::CreateQuickSearchPayload;
use crate::services::{ServiceResult, decode_json, fetch_all, send};
use crate::transport::{ApiRequest, Transport};

pub fn list_quick_searches<T>(transport: &T) -> ServiceResult<Vec<QuickSearch>>
where
    T: Transport + ?Sized,
{
    fetch_all(transport, "quick_searches", "get quick searches")
}

pub fn get_quick_search<T>(transport: &T, id: QuickSearchId) -> ServiceResult<QuickSearch>
where
    T: Transport + ?Sized,
{
    let request = ApiRequest::get(format!("quick_searches/{id}"));
    let raw = send(transport, &request, "get quick search")?;
    decode_json(&raw, "get quick search")
}

/// Submits a single channel URL for lookup on the given platform.
pub fn create_quick_search<T>(transport: &T, channel: ChannelKind, url: &str) -> ServiceResult<()>
where
    T: Transport + ?Sized,
{
    let payload = CreateQuickSearchPayload {
        channel_id: channel,
        url,
    };
    let request = ApiRequest::post("quick_searches").json(&payload)?;
    send(transport, &request, "create quick search")?;
    Ok(())
}

pub fn delete_quick_search<T>(transport: &T, id: QuickSearchId) -> ServiceResult<()>
where
    T: Transport + ?Sized,
{
    send(
        transport,
        &ApiRequest::delete(format!("quick_searches/{id}")),
        "delete quick search",
    )?;
    Ok(())
}
