use crate::domain::channel::Channel;
use crate::domain::types::ChannelId;
use crate::services::{ServiceResult, decode_json, fetch_all, send};
use crate::transport::{ApiRequest, Transport};

/// Lists every channel registered with the account.
pub fn list_channels<T>(transport: &T) -> ServiceResult<Vec<Channel>>
where
    T: Transport + ?Sized,
{
    fetch_all(transport, "channels", "get channels")
}

pub fn get_channel<T>(transport: &T, id: ChannelId) -> ServiceResult<Channel>
where
    T: Transport + ?Sized,
{
    let raw = send(
        transport,
        &ApiRequest::get(format!("channels/{id}")),
        "get channel",
    )?;
    decode_json(&raw, "get channel")
}
