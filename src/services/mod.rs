//! Remote operations, one function each, generic over the [`Transport`].

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::dto::api::Page;
use crate::models::errors::{DecodeError, EncodeError};
use crate::pagination::{PAGE_LIMIT, collect_pages};
use crate::transport::{ApiRequest, Transport, TransportError};

pub mod channels;
pub mod prospects;
pub mod quick_searches;
pub mod searches;

/// Failure of a remote operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Executes `request`, logging a failure as `Failed to {action}`.
fn send<T>(transport: &T, request: &ApiRequest, action: &str) -> ServiceResult<Vec<u8>>
where
    T: Transport + ?Sized,
{
    transport.execute(request).map_err(|err| {
        log::error!("Failed to {action}: {err}");
        ServiceError::from(err)
    })
}

fn decode_json<D: DeserializeOwned>(raw: &[u8], action: &str) -> ServiceResult<D> {
    serde_json::from_slice(raw).map_err(|err| {
        let err = DecodeError::from(err);
        log::error!("Failed to decode response to {action}: {err}");
        ServiceError::from(err)
    })
}

/// Walks every page of a list endpoint.
fn fetch_all<T, D>(transport: &T, path: &str, action: &str) -> ServiceResult<Vec<D>>
where
    T: Transport + ?Sized,
    D: DeserializeOwned,
{
    collect_pages(PAGE_LIMIT, |page| {
        let request = ApiRequest::get(path)
            .query("limit", page.limit)
            .query("page", page.page);
        let raw = send(transport, &request, action)?;
        let page: Page<D> = decode_json(&raw, action)?;
        Ok(page.data)
    })
}
