use crate::domain::prospect::Prospect;
use crate::domain::types::SearchId;
use crate::dto::api::ExportFormat;
use crate::models::prospect::{ListDecodeMode, ProspectBatch, decode_prospect_batch};
use crate::services::{ServiceResult, send};
use crate::transport::{ApiRequest, Transport};

/// Fetches the prospects gathered by a search.
///
/// In [`ListDecodeMode::Skip`] undecodable records are logged and reported in
/// [`ProspectBatch::rejected`] instead of failing the call.
pub fn get_prospects<T>(
    transport: &T,
    id: SearchId,
    mode: ListDecodeMode,
) -> ServiceResult<ProspectBatch>
where
    T: Transport + ?Sized,
{
    let raw = send(
        transport,
        &ApiRequest::get(format!("searches/{id}/prospects")),
        "get prospects",
    )?;
    let batch = decode_prospect_batch(&raw, mode).map_err(|err| {
        log::error!("Failed to decode prospects of search {id}: {err}");
        err
    })?;
    for rejected in &batch.rejected {
        log::warn!(
            "Skipping prospect {} of search {id}: {}",
            rejected.index,
            rejected.error
        );
    }
    Ok(batch)
}

/// Fails fast on the first undecodable record.
pub fn list_prospects<T>(transport: &T, id: SearchId) -> ServiceResult<Vec<Prospect>>
where
    T: Transport + ?Sized,
{
    get_prospects(transport, id, ListDecodeMode::FailFast).map(|batch| batch.prospects)
}

/// Downloads the prospects of a search as a file. The bytes are returned
/// untouched, since formats such as xlsx are binary.
pub fn export_prospects<T>(
    transport: &T,
    id: SearchId,
    format: &ExportFormat,
) -> ServiceResult<Vec<u8>>
where
    T: Transport + ?Sized,
{
    let request = ApiRequest::get(format!("searches/{id}/prospects/export"))
        .query("type", format.as_str());
    send(transport, &request, "export prospects")
}
